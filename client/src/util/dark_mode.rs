//! Dark mode toggle and themed class names.
//!
//! TRADE-OFFS
//! ==========
//! The theme is a plain flag owned by the page and handed to every view that
//! styles itself. Nothing is written to the `<html>` element or to storage,
//! so a reload always starts in light mode and SSR output is deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

const ROOT_BLOCK: &str = "employee-shell";

/// Flip the theme flag.
pub fn toggle(current: bool) -> bool {
    !current
}

/// Class for the page root. `dark` is the global mode marker the stylesheet
/// keys off.
pub fn root_class(enabled: bool) -> String {
    if enabled { format!("{ROOT_BLOCK} dark") } else { ROOT_BLOCK.to_owned() }
}

/// BEM block class with a `--dark` modifier appended in dark mode.
pub fn themed(block: &str, enabled: bool) -> String {
    if enabled { format!("{block} {block}--dark") } else { block.to_owned() }
}

/// Tooltip for the theme toggle button.
pub fn toggle_title(enabled: bool) -> &'static str {
    if enabled { "Switch to light mode" } else { "Switch to dark mode" }
}
