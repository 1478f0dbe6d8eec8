//! Browser timers for deferred dialog steps.
//!
//! # Design
//! - Timers are kept per generation; scheduling under a newer generation drops
//!   (and so cancels) every older handle.
//! - Fired steps go back through the store, which ignores stale tickets anyway.

use crate::app::update_store;
use crate::core::modal::ModalDeferred;
use crate::core::schedule::Generation;
use crate::core::store::AppStore;
use gloo::console;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// Live timer handles shared by the dialog components.
#[derive(Clone, Default)]
pub(crate) struct TimerBank {
    pending: Rc<RefCell<Vec<(Generation, Timeout)>>>,
}

impl PartialEq for TimerBank {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pending, &other.pending)
    }
}

impl TimerBank {
    /// Apply a dialog action to the store and arm whatever it deferred.
    pub(crate) fn run(
        &self,
        dispatch: &Dispatch<AppStore>,
        action: impl FnOnce(&mut AppStore) -> Vec<ModalDeferred>,
    ) {
        let (deferred, live) = update_store(dispatch, |store| {
            let deferred = action(store);
            (deferred, store.modal.generation())
        });
        if !deferred.is_empty() {
            console::debug!(
                "dialog flow armed",
                format!("generation {} with {} step(s)", live.get(), deferred.len())
            );
        }
        self.schedule(dispatch, live, deferred);
    }

    /// Cancel timers from older generations and arm `deferred`.
    fn schedule(
        &self,
        dispatch: &Dispatch<AppStore>,
        live: Generation,
        deferred: Vec<ModalDeferred>,
    ) {
        let mut pending = self.pending.borrow_mut();
        pending.retain(|(issued, _)| *issued == live);
        for item in deferred {
            let bank = self.clone();
            let dispatch = dispatch.clone();
            let handle = Timeout::new(item.delay_ms, move || {
                let (follow, live) = update_store(&dispatch, |store| {
                    (store.modal.fire(item.ticket), store.modal.generation())
                });
                if !follow.is_empty() {
                    bank.schedule(&dispatch, live, follow);
                }
            });
            pending.push((item.ticket.generation, handle));
        }
    }
}
