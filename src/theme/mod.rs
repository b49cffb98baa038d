//! Theming collaborator interface.
//!
//! The settings store composes with a theme-selection subsystem that owns
//! rendering and its own persistence. This module owns the fixed palette
//! handed to that subsystem; the store itself never references it.

/// The fixed theme palette, in presentation order.
pub const THEME_NAMES: [&str; 6] = [
    "Light",
    "Dark",
    "One Dark",
    "Material Ocean",
    "Purple Dark",
    "Discord",
];

/// Options handed to the theming subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Theme names the subsystem may render, in order.
    pub themes: Vec<String>,

    /// Whether automatic system-theme detection is enabled. The client
    /// ships with it off: only the named palette is offered.
    pub enable_system: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            themes: THEME_NAMES.iter().map(|s| s.to_string()).collect(),
            enable_system: false,
        }
    }
}
