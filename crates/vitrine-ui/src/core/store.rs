//! App-wide yewdux store.
//!
//! # Design
//! - Keep shared UI state in one store instead of module-level globals.
//! - Slices stay independent; the store only handles the few cross-slice rules
//!   (dialogs and the apply button close the drawer).

use crate::core::catalog::SiteManifest;
use crate::core::config::UiConfig;
use crate::core::drawer::DrawerState;
use crate::core::filter::FilterState;
use crate::core::likes::LikeSet;
use crate::core::modal::{ModalDeferred, ModalState, Overlay};
use crate::core::outcome::ScriptedLogin;
use crate::core::theme::{PreferenceError, PreferenceStore, ThemeState};
use yewdux::store::Store;

/// Global application store.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Page configuration.
    pub config: UiConfig,
    /// Navigation drawer.
    pub drawer: DrawerState,
    /// Card grid filters.
    pub filters: FilterState,
    /// Theme and navbar tint.
    pub theme: ThemeState,
    /// Auth dialogs.
    pub modal: ModalState,
    /// Demo login outcome source.
    pub login_check: ScriptedLogin,
    /// Liked cards.
    pub likes: LikeSet,
}

impl AppStore {
    /// Build the startup state: cards filtered with empty criteria, theme restored.
    pub fn boot(
        manifest: &SiteManifest,
        prefs: &mut impl PreferenceStore,
    ) -> (Self, Result<(), PreferenceError>) {
        let config = manifest.config.clone();
        let (theme, persisted) = ThemeState::restore(prefs, &config.theme_key);
        let store = Self {
            drawer: DrawerState::default(),
            filters: FilterState::with_cards(manifest.records()),
            theme,
            modal: ModalState::new(config.timings),
            login_check: ScriptedLogin::default(),
            likes: LikeSet::default(),
            config,
        };
        (store, persisted)
    }

    /// Show a dialog; the drawer gets out of the way.
    pub fn open_overlay(&mut self, overlay: Overlay) {
        self.drawer.close();
        self.modal.open(overlay);
    }

    /// Submit the login dialog through the configured outcome source.
    pub fn submit_login(&mut self) -> Vec<ModalDeferred> {
        self.drawer.close();
        self.modal.simulate_login(&mut self.login_check)
    }

    /// Drawer "apply" button: re-filter and close the drawer.
    pub fn apply_filters_and_close_drawer(&mut self) {
        self.filters.apply();
        self.drawer.close();
    }
}
