//! Light/dark theme, its persisted preference, and the scroll-aware navbar tint.
//!
//! # Design
//! - The preference is a single plain-text key; unknown values read as light.
//! - Writes that fail leave the in-memory mode authoritative for the session.
//! - The desktop toggle owns theme application; the mobile toggle routes through it.

use std::collections::HashMap;

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier stored in the preference and CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; only the two exact names are accepted.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Map a toggle's checked state to a mode.
    #[must_use]
    pub const fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    /// Whether toggles should render checked for this mode.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Colours applied to the page surfaces for this mode.
    #[must_use]
    pub const fn style(self) -> ThemeStyle {
        match self {
            Self::Dark => ThemeStyle {
                body: "#000",
                text: "#fff",
                drawer: "#18181b",
                modal: "#0008",
                modal_content: "#111",
            },
            Self::Light => ThemeStyle {
                body: "#fff",
                text: "#000",
                drawer: "#f5f5f5",
                modal: "#0006",
                modal_content: "#fff",
            },
        }
    }
}

/// Surface colours for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeStyle {
    /// Page background.
    pub body: &'static str,
    /// Page foreground text.
    pub text: &'static str,
    /// Navigation drawer panel background.
    pub drawer: &'static str,
    /// Dialog backdrop tint.
    pub modal: &'static str,
    /// Dialog surface background.
    pub modal_content: &'static str,
}

/// Inline style for the fixed navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    /// Background colour.
    pub background: &'static str,
    /// Backdrop filter.
    pub backdrop_filter: &'static str,
    /// Bottom border.
    pub border_bottom: &'static str,
}

impl NavbarStyle {
    /// Render as an inline `style` attribute.
    #[must_use]
    pub fn css(self) -> String {
        format!(
            "background: {}; backdrop-filter: {}; border-bottom: {};",
            self.background, self.backdrop_filter, self.border_bottom
        )
    }
}

/// Navbar look for a scroll offset: transparent near the top, tinted once scrolled.
#[must_use]
pub fn navbar_style(scroll_y: f64, threshold: f64, mode: ThemeMode) -> NavbarStyle {
    if scroll_y <= threshold {
        return NavbarStyle {
            background: "transparent",
            backdrop_filter: "none",
            border_bottom: "none",
        };
    }
    match mode {
        ThemeMode::Dark => NavbarStyle {
            background: "rgba(0,0,0,0.75)",
            backdrop_filter: "blur(10px)",
            border_bottom: "1px solid rgba(255,255,255,0.08)",
        },
        ThemeMode::Light => NavbarStyle {
            background: "rgba(255,255,255,0.95)",
            backdrop_filter: "blur(10px)",
            border_bottom: "1px solid rgba(0,0,0,0.08)",
        },
    }
}

/// Failure to persist a preference.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    /// The backing storage rejected the write.
    #[error("failed to store preference {key}: {detail}")]
    Write {
        /// Storage key being written.
        key: String,
        /// Backend-provided detail.
        detail: String,
    },
}

/// Durable key/value storage for preferences.
pub trait PreferenceStore {
    /// Read a raw value.
    fn load(&self, key: &str) -> Option<String>;

    /// Write a raw value.
    ///
    /// # Errors
    /// Returns [`PreferenceError::Write`] when the backend rejects the value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory preference store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the stored theme, defaulting to light when missing or unrecognised.
#[must_use]
pub fn load_theme(store: &impl PreferenceStore, key: &str) -> ThemeMode {
    store
        .load(key)
        .as_deref()
        .and_then(ThemeMode::parse)
        .unwrap_or_default()
}

/// Theme slice of the app store.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeState {
    /// Active theme.
    pub mode: ThemeMode,
    /// Checked state of the navbar toggle.
    pub desktop_checked: bool,
    /// Checked state of the drawer toggle.
    pub mobile_checked: bool,
    /// Last observed vertical scroll offset.
    pub scroll_y: f64,
    /// Preference key.
    pub key: String,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::with_mode(ThemeMode::default(), crate::core::config::DEFAULT_THEME_KEY)
    }
}

impl ThemeState {
    fn with_mode(mode: ThemeMode, key: &str) -> Self {
        Self {
            mode,
            desktop_checked: mode.is_dark(),
            mobile_checked: mode.is_dark(),
            scroll_y: 0.0,
            key: key.to_string(),
        }
    }

    /// Startup: read the preference, apply it, and sync both toggles.
    ///
    /// The mode is written back so a first visit leaves `light` in storage.
    pub fn restore(
        store: &mut impl PreferenceStore,
        key: &str,
    ) -> (Self, Result<(), PreferenceError>) {
        let mut state = Self::with_mode(load_theme(store, key), key);
        let persisted = state.apply(state.mode, store);
        (state, persisted)
    }

    /// Apply a theme and persist it. The in-memory mode changes even if the write fails.
    ///
    /// # Errors
    /// Propagates [`PreferenceError`] from the store.
    pub fn apply(
        &mut self,
        mode: ThemeMode,
        store: &mut impl PreferenceStore,
    ) -> Result<(), PreferenceError> {
        self.mode = mode;
        store.save(&self.key, mode.as_str())
    }

    /// Navbar toggle changed: apply the theme and mirror onto the drawer toggle.
    ///
    /// # Errors
    /// Propagates [`PreferenceError`] from the store.
    pub fn desktop_changed(
        &mut self,
        checked: bool,
        store: &mut impl PreferenceStore,
    ) -> Result<(), PreferenceError> {
        self.desktop_checked = checked;
        let result = self.apply(ThemeMode::from_checked(checked), store);
        self.mobile_checked = checked;
        result
    }

    /// Drawer toggle changed: mirror onto the navbar toggle and run its handler.
    ///
    /// # Errors
    /// Propagates [`PreferenceError`] from the store.
    pub fn mobile_changed(
        &mut self,
        checked: bool,
        store: &mut impl PreferenceStore,
    ) -> Result<(), PreferenceError> {
        self.mobile_checked = checked;
        self.desktop_changed(checked, store)
    }

    /// Record a scroll offset; returns whether the navbar look changed.
    pub fn scrolled_to(&mut self, scroll_y: f64, threshold: f64) -> bool {
        let before = navbar_style(self.scroll_y, threshold, self.mode);
        self.scroll_y = scroll_y;
        before != navbar_style(self.scroll_y, threshold, self.mode)
    }

    /// Navbar style for the current scroll offset and theme.
    #[must_use]
    pub fn navbar(&self, threshold: f64) -> NavbarStyle {
        navbar_style(self.scroll_y, threshold, self.mode)
    }
}
