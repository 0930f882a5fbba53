//! "Add new employee" page: dashboard shell plus the employee form.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the single owner of view state. It creates the `UiState`
//! and `PreviewState` signals, derives the theme flag, and passes everything
//! down as props. Nothing is read from or written to the network, storage,
//! or the document outside this subtree.

#[cfg(test)]
#[path = "add_employee_test.rs"]
mod add_employee_test;

use leptos::prelude::*;

use crate::components::employee_form::EmployeeForm;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::state::preview::PreviewState;
use crate::state::ui::{Language, UiState};
use crate::util::dark_mode::root_class;

/// Initial state of a freshly loaded page.
pub fn initial_state() -> (UiState, PreviewState) {
    (UiState::default(), PreviewState::default())
}

#[component]
pub fn AddEmployeePage() -> impl IntoView {
    let (ui_initial, preview_initial) = initial_state();
    let ui = RwSignal::new(ui_initial);
    let preview = RwSignal::new(preview_initial);

    let dark = Signal::derive(move || ui.with(|u| u.dark_mode));
    let language = Signal::derive(move || ui.with(|u| u.language));

    let on_toggle_theme = Callback::new(move |_| {
        ui.update(UiState::toggle_theme);
        #[cfg(feature = "hydrate")]
        log::debug!("dark mode: {}", ui.with_untracked(|u| u.dark_mode));
    });

    let on_language = Callback::new(move |lang: Language| {
        ui.update(|u| u.select_language(lang));
        #[cfg(feature = "hydrate")]
        log::debug!("language selected: {}", lang.label());
    });

    view! {
        <div class=move || root_class(dark.get())>
            <Header dark=dark language=language on_language=on_language on_toggle_theme=on_toggle_theme/>
            <Sidebar dark=dark/>
            <main class="employee-main">
                <div class="employee-main__content">
                    <EmployeeForm dark=dark preview=preview/>
                </div>
            </main>
        </div>
    }
}
