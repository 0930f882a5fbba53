//! Inline SVG line icons (24x24 stroke paths).

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Globe,
    Sun,
    Moon,
    Bell,
    MessageSquare,
    Menu,
    LayoutDashboard,
    Users,
    FolderKanban,
    Clock,
    LogOut,
    Upload,
}

impl IconKind {
    /// SVG path data drawn with `stroke="currentColor"` by default.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Globe => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Self::Sun => &[
                "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Self::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Self::Bell => &["M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9", "M10.3 21a1.94 1.94 0 0 0 3.4 0"],
            Self::MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h12a2 2 0 0 1 2 2z"],
            Self::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Self::LayoutDashboard => &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::FolderKanban => &[
                "M4 20h16a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.93a2 2 0 0 1-1.66-.9l-.82-1.2A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13c0 1.1.9 2 2 2Z",
                "M8 10v4",
                "M12 10v2",
                "M16 10v6",
            ],
            Self::Clock => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20", "M12 6v6l4 2"],
            Self::LogOut => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "m16 17 5-5-5-5", "M21 12H9"],
            Self::Upload => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "m17 8-5-5-5 5", "M12 3v12"],
        }
    }
}

/// Stroke icon sized in CSS pixels.
#[component]
pub fn Icon(
    kind: IconKind,
    #[prop(default = 20)] size: u32,
    /// Stroke color; inherits the text color when absent.
    #[prop(optional)]
    color: Option<&'static str>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let size = size.to_string();
    let class = if class.is_empty() { "icon".to_owned() } else { format!("icon {class}") };

    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke=color.unwrap_or("currentColor")
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
}
