//! Static layout of the employee form inputs.
//!
//! The inputs are uncontrolled: nothing reads their values and nothing is
//! validated or submitted.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// One labeled input on the employee form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    Name,
    PhoneNumber,
    Password,
    Email,
    JoiningDate,
    Role,
}

impl EmployeeField {
    /// Fields in the order they are laid out on the two-column grid.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::PhoneNumber,
        Self::Password,
        Self::Email,
        Self::JoiningDate,
        Self::Role,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name:",
            Self::PhoneNumber => "Phone Number:",
            Self::Password => "Password:",
            Self::Email => "Email:",
            Self::JoiningDate => "Joining Date:",
            Self::Role => "Role:",
        }
    }

    /// HTML `type` attribute for the field's `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::JoiningDate => "date",
            Self::PhoneNumber => "number",
            Self::Name | Self::Email | Self::Role => "text",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::JoiningDate => "dd-mm-yyyy",
            _ => "",
        }
    }
}
