//! Browser-backed preference storage.

use crate::core::theme::{PreferenceError, PreferenceStore};
use gloo::console;
use gloo::utils::window;

/// `localStorage` holding raw strings (no JSON encoding), so the stored theme
/// reads as plain `dark` / `light`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn load(&self, key: &str) -> Option<String> {
        let storage = window().local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let write_error = |detail: String| PreferenceError::Write {
            key: key.to_string(),
            detail,
        };
        let storage = window()
            .local_storage()
            .map_err(|err| write_error(format!("{err:?}")))?
            .ok_or_else(|| write_error("local storage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|err| write_error(format!("{err:?}")))
    }
}

pub(crate) fn log_preference_error(err: &PreferenceError) {
    console::warn!("preference not persisted; keeping session value", err.to_string());
}
