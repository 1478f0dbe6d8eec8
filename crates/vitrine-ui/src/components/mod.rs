//! Page components built on the shared store.
pub(crate) mod atoms;
pub(crate) mod auth_modals;
pub(crate) mod cards;
pub(crate) mod filters;
pub(crate) mod modal;
pub(crate) mod shell;
pub(crate) mod theme_toggle;
