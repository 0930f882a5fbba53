//! Top bar with brand, search, language selector and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure view: the page owns the theme flag and selected language and hands
//! them in as signals together with the callbacks that change them. The
//! search box, bell/message/menu buttons and avatar are decorative.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::ui::Language;
use crate::util::dark_mode::{themed, toggle_title};

/// Icon shown on the theme toggle: moon in light mode, sun in dark mode.
pub fn theme_icon(dark: bool) -> IconKind {
    if dark { IconKind::Sun } else { IconKind::Moon }
}

/// Fixed header bar.
#[component]
pub fn Header(
    #[prop(into)] dark: Signal<bool>,
    #[prop(into)] language: Signal<Language>,
    on_language: Callback<Language>,
    on_toggle_theme: Callback<()>,
) -> impl IntoView {
    let on_select = move |ev: leptos::ev::Event| {
        // Unknown values cannot come from the rendered options; ignore them.
        if let Some(lang) = Language::from_label(&event_target_value(&ev)) {
            on_language.run(lang);
        }
    };

    view! {
        <header class=move || themed("app-header", dark.get())>
            <div class="app-header__inner">
                <div class="app-header__brand">"Avits"</div>

                <div class="app-header__search">
                    <input
                        type="search"
                        placeholder="Search..."
                        class=move || themed("app-header__search-input", dark.get())
                    />
                    <span class="app-header__search-glyph" aria-hidden="true">"🔍"</span>
                </div>

                <div class="app-header__actions">
                    <div class="app-header__language">
                        <Icon kind=IconKind::Globe class="app-header__language-icon"/>
                        <select
                            class=move || themed("app-header__language-select", dark.get())
                            prop:value=move || language.get().label()
                            on:change=on_select
                        >
                            {Language::ALL
                                .into_iter()
                                .map(|lang| {
                                    view! {
                                        <option value=lang.label() selected=move || language.get() == lang>
                                            {lang.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <button
                        class=move || themed("app-header__theme-toggle", dark.get())
                        title=move || toggle_title(dark.get())
                        on:click=move |_| on_toggle_theme.run(())
                    >
                        {move || view! { <Icon kind=theme_icon(dark.get())/> }}
                    </button>

                    <button class=move || themed("app-header__icon-button", dark.get())>
                        <Icon kind=IconKind::Bell/>
                    </button>
                    <button class=move || themed("app-header__icon-button", dark.get())>
                        <Icon kind=IconKind::MessageSquare/>
                    </button>
                    <button class=move || themed("app-header__icon-button", dark.get())>
                        <Icon kind=IconKind::Menu/>
                    </button>

                    <div class="app-header__avatar"></div>
                </div>
            </div>
        </header>
    }
}
