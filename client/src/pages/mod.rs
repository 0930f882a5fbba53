//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns view state and delegates rendering details to `components`.

pub mod add_employee;
