//! The theme preference and its lifecycle.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::store::PreferenceStore;

/// Store key the theme preference is kept under by default.
pub const DEFAULT_THEME_KEY: &str = "app-theme";

/// Color scheme selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Stable string form, also usable as the host's style-class suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parse the stable string form. Anything else is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Switch between light and dark. From [`Theme::System`], the host's
    /// current preference decides which side to flip to.
    pub fn toggled(self, system_prefers_dark: bool) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
            Self::System => {
                if system_prefers_dark {
                    Self::Light
                } else {
                    Self::Dark
                }
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owns the selected theme and keeps the preference store in sync.
///
/// The stored value is read once at construction; every change is written
/// back immediately.
pub struct ThemeManager {
    theme: Theme,
    key: String,
    store: Box<dyn PreferenceStore>,
}

impl ThemeManager {
    /// Load the stored preference from under [`DEFAULT_THEME_KEY`].
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self::with_key(store, DEFAULT_THEME_KEY)
    }

    /// Load the stored preference kept under a caller-chosen key. An absent
    /// or unrecognized stored value falls back to the default theme.
    pub fn with_key(store: Box<dyn PreferenceStore>, key: &str) -> Self {
        let theme = store
            .get(key)
            .and_then(|stored| {
                let parsed = Theme::parse(&stored);
                if parsed.is_none() {
                    warn!(value = %stored, "ignoring unrecognized stored theme");
                }
                parsed
            })
            .unwrap_or_default();
        Self {
            theme,
            key: key.to_string(),
            store,
        }
    }

    /// The currently selected theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Select a theme and persist it. A store failure is logged and
    /// swallowed: restyling must not depend on the disk.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        debug!(theme = theme.as_str(), "theme changed");
        if let Err(err) = self.store.set(&self.key, theme.as_str()) {
            warn!(error = %err, "failed to persist theme preference");
        }
    }

    /// Flip between light and dark and persist the result.
    pub fn toggle(&mut self, system_prefers_dark: bool) {
        self.set_theme(self.theme.toggled(system_prefers_dark));
    }
}
