//! Local UI chrome state (theme flag, selected language).
//!
//! DESIGN
//! ======
//! The language selection is stored but never applied to rendered text.
//! Both fields are independent; changing one never touches the other.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state owned by the employee page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub language: Language,
}

impl UiState {
    /// Flip between light and dark mode.
    pub fn toggle_theme(&mut self) {
        self.dark_mode = crate::util::dark_mode::toggle(self.dark_mode);
    }

    /// Store a language picked from the header selector.
    pub fn select_language(&mut self, language: Language) {
        self.language = language;
    }
}

/// Languages offered by the header selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Chinese,
}

impl Language {
    /// Selector options in display order.
    pub const ALL: [Self; 5] = [Self::English, Self::Spanish, Self::French, Self::German, Self::Chinese];

    pub fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Chinese => "Chinese",
        }
    }

    /// Parse a `<select>` value back into a language.
    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.label() == raw)
    }
}
