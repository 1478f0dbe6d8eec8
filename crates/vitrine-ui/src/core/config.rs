//! Runtime knobs for the page shell.
//!
//! # Design
//! - Every field has a default so a manifest may omit the whole block.
//! - Timings are plain milliseconds; the shell hands them to browser timers.

use serde::Deserialize;

/// Storage key holding the persisted theme name.
pub const DEFAULT_THEME_KEY: &str = "theme";

/// Page-level configuration read from the site manifest.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Local storage key for the theme preference.
    pub theme_key: String,
    /// Vertical scroll offset (px) past which the navbar turns opaque.
    pub scroll_threshold_px: f64,
    /// Debounce applied to search keystrokes before filtering.
    pub search_debounce_ms: u32,
    /// Delays driving the auth dialog animations.
    pub timings: FlowTimings,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_string(),
            scroll_threshold_px: 10.0,
            search_debounce_ms: 150,
            timings: FlowTimings::default(),
        }
    }
}

/// Fixed delays for each step of the scripted dialog sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FlowTimings {
    /// Spinner duration before a successful login resolves.
    pub login_success_resolve_ms: u32,
    /// How long the login success state stays up before the dialog closes.
    pub login_success_hold_ms: u32,
    /// Spinner duration before a failed login resolves.
    pub login_failure_resolve_ms: u32,
    /// How long the failure shake runs before the layer hides.
    pub login_failure_hold_ms: u32,
    /// Exit transition played when the login dialog is dismissed.
    pub login_exit_ms: u32,
    /// Spinner duration for signup and password reset submissions.
    pub form_resolve_ms: u32,
    /// Success hold for signup and password reset before auto-close.
    pub form_hold_ms: u32,
}

impl Default for FlowTimings {
    fn default() -> Self {
        Self {
            login_success_resolve_ms: 1000,
            login_success_hold_ms: 1200,
            login_failure_resolve_ms: 800,
            login_failure_hold_ms: 1000,
            login_exit_ms: 300,
            form_resolve_ms: 1000,
            form_hold_ms: 1200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FlowTimings, UiConfig};

    #[test]
    fn partial_config_keeps_defaults() {
        let parsed: UiConfig =
            serde_json::from_str(r#"{"scroll_threshold_px": 42.0, "timings": {"login_exit_ms": 50}}"#)
                .expect("config parses");
        assert!((parsed.scroll_threshold_px - 42.0).abs() < f64::EPSILON);
        assert_eq!(parsed.theme_key, "theme");
        assert_eq!(parsed.timings.login_exit_ms, 50);
        assert_eq!(
            parsed.timings.login_success_hold_ms,
            FlowTimings::default().login_success_hold_ms
        );
    }

    #[test]
    fn empty_object_is_default() {
        let parsed: UiConfig = serde_json::from_str("{}").expect("config parses");
        assert_eq!(parsed, UiConfig::default());
    }
}
