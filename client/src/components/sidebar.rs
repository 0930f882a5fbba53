//! Fixed left sidebar with static navigation labels.
//!
//! The entries are labels only; there is a single view and no routing.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::util::dark_mode::themed;

/// Accent color for sidebar icons.
pub const NAV_ICON_COLOR: &str = "#a020f0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: IconKind,
    /// Extra top spacing to set the entry apart from the list above.
    pub separated: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub heading: &'static str,
    pub items: &'static [NavItem],
}

pub const NAV_SECTIONS: [NavSection; 2] = [
    NavSection {
        heading: "Main",
        items: &[NavItem { label: "Dashboard", icon: IconKind::LayoutDashboard, separated: false }],
    },
    NavSection {
        heading: "Lists",
        items: &[
            NavItem { label: "Employee", icon: IconKind::Users, separated: false },
            NavItem { label: "Projects", icon: IconKind::FolderKanban, separated: false },
            NavItem { label: "Attendance", icon: IconKind::Clock, separated: false },
            NavItem { label: "Logout", icon: IconKind::LogOut, separated: true },
        ],
    },
];

fn item_class(item: NavItem, dark: bool) -> String {
    let base = themed("sidebar__item", dark);
    if item.separated { format!("{base} sidebar__item--separated") } else { base }
}

#[component]
pub fn Sidebar(#[prop(into)] dark: Signal<bool>) -> impl IntoView {
    view! {
        <nav class=move || themed("sidebar", dark.get())>
            <div class="sidebar__inner">
                {NAV_SECTIONS
                    .into_iter()
                    .map(|section| {
                        view! {
                            <h2 class=move || themed("sidebar__heading", dark.get())>{section.heading}</h2>
                            <ul class="sidebar__list">
                                {section
                                    .items
                                    .iter()
                                    .copied()
                                    .map(|item| {
                                        view! {
                                            <li class=move || item_class(item, dark.get())>
                                                <Icon kind=item.icon size=18 color=NAV_ICON_COLOR/>
                                                {item.label}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
