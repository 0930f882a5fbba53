//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and the form. They own no state:
//! the page passes the theme flag, signals and callbacks in as props.

pub mod employee_form;
pub mod header;
pub mod icon;
pub mod image_upload;
pub mod sidebar;
