use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_language_is_english() {
    let state = UiState::default();
    assert_eq!(state.language, Language::English);
}

// =============================================================
// Theme toggle
// =============================================================

#[test]
fn toggle_theme_switches_to_dark() {
    let mut state = UiState::default();
    state.toggle_theme();
    assert!(state.dark_mode);
}

#[test]
fn toggle_theme_twice_restores_original_mode() {
    let mut state = UiState::default();
    state.toggle_theme();
    state.toggle_theme();
    assert_eq!(state, UiState::default());
}

#[test]
fn toggle_theme_leaves_language_alone() {
    let mut state = UiState::default();
    state.select_language(Language::German);
    state.toggle_theme();
    assert_eq!(state.language, Language::German);
}

// =============================================================
// Language selection
// =============================================================

#[test]
fn select_language_stores_exactly_that_option() {
    for lang in Language::ALL {
        let mut state = UiState::default();
        state.select_language(lang);
        assert_eq!(state.language, lang);
        assert!(!state.dark_mode, "selecting {lang:?} must not touch the theme");
    }
}

#[test]
fn select_language_in_dark_mode_keeps_dark_mode() {
    let mut state = UiState { dark_mode: true, language: Language::English };
    state.select_language(Language::Chinese);
    assert_eq!(state, UiState { dark_mode: true, language: Language::Chinese });
}

// =============================================================
// Language
// =============================================================

#[test]
fn language_options_are_in_selector_order() {
    let labels: Vec<_> = Language::ALL.iter().map(|l| l.label()).collect();
    assert_eq!(labels, ["English", "Spanish", "French", "German", "Chinese"]);
}

#[test]
fn language_from_label_accepts_every_option() {
    for lang in Language::ALL {
        assert_eq!(Language::from_label(lang.label()), Some(lang));
    }
}

#[test]
fn language_from_label_rejects_unknown_values() {
    assert_eq!(Language::from_label("Klingon"), None);
    assert_eq!(Language::from_label("english"), None);
    assert_eq!(Language::from_label(""), None);
}
