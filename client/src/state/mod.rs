//! Local view state for the employee page.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui` chrome toggles, `preview` image payload,
//! `form` static field layout) so each piece can be tested on its own. None
//! of it is persisted; a reload resets everything.

pub mod form;
pub mod preview;
pub mod ui;
