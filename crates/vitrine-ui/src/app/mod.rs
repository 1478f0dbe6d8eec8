//! Root component plus document-level wiring (theme on `<body>`, Escape, scroll).

use crate::components::auth_modals::AuthDialogs;
use crate::components::cards::CardGrid;
use crate::components::shell::{NavDrawer, Navbar};
use crate::core::catalog::{EMBEDDED_MANIFEST, SiteManifest};
use crate::core::store::AppStore;
use crate::core::theme::ThemeMode;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod preferences;
mod timers;

pub(crate) use preferences::{LocalPreferences, log_preference_error};
pub(crate) use timers::TimerBank;

#[function_component(VitrineApp)]
fn vitrine_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let mode = use_selector(|store: &AppStore| store.theme.mode);
    let timers = use_memo(|_| TimerBank::default(), ());

    {
        let mode = *mode;
        use_effect_with_deps(
            move |mode| {
                apply_body_theme(*mode);
                || ()
            },
            mode,
        );
    }
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let handler = EventListener::new(&document(), "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                        return;
                    };
                    let key = event.key();
                    dispatch.reduce_mut(move |store| {
                        store.drawer.on_key(&key);
                    });
                });
                move || drop(handler)
            },
            (),
        );
    }
    {
        use_effect_with_deps(
            move |_| {
                sync_navbar(&dispatch);
                let handler = EventListener::new(&window(), "scroll", move |_event| {
                    sync_navbar(&dispatch);
                });
                move || drop(handler)
            },
            (),
        );
    }

    html! {
        <ContextProvider<TimerBank> context={(*timers).clone()}>
            <Navbar />
            <NavDrawer />
            <main class="page">
                <CardGrid />
            </main>
            <AuthDialogs />
        </ContextProvider<TimerBank>>
    }
}

/// Apply `f` to a copy of the store, publish it, and hand back `f`'s result.
pub(crate) fn update_store<R>(
    dispatch: &Dispatch<AppStore>,
    f: impl FnOnce(&mut AppStore) -> R,
) -> R {
    let mut next = (*dispatch.get()).clone();
    let result = f(&mut next);
    dispatch.set(next);
    result
}

fn sync_navbar(dispatch: &Dispatch<AppStore>) {
    let offset = window().scroll_y().unwrap_or(0.0);
    let current = dispatch.get();
    let mut theme = current.theme.clone();
    if theme.scrolled_to(offset, current.config.scroll_threshold_px) {
        dispatch.reduce_mut(move |store| store.theme = theme);
    }
}

fn apply_body_theme(mode: ThemeMode) {
    let Some(body) = document().body() else {
        return;
    };
    let style = mode.style();
    let css = body.style();
    if css.set_property("background", style.body).is_err()
        || css.set_property("color", style.text).is_err()
    {
        console::warn!("body theme not applied", mode.as_str());
    }
    if body.set_attribute("data-theme", mode.as_str()).is_err() {
        console::warn!("theme attribute not applied", mode.as_str());
    }
}

fn boot_store() {
    let manifest = SiteManifest::parse(EMBEDDED_MANIFEST).unwrap_or_else(|err| {
        console::error!("falling back to an empty page", err.to_string());
        SiteManifest::default()
    });
    let mut prefs = LocalPreferences;
    let (store, persisted) = AppStore::boot(&manifest, &mut prefs);
    if let Err(err) = persisted {
        log_preference_error(&err);
    }
    console::info!(
        "vitrine ready",
        format!(
            "{} of {} cards visible, theme {}",
            store.filters.summary.visible,
            store.filters.summary.total,
            store.theme.mode.as_str()
        )
    );
    Dispatch::<AppStore>::new().set(store);
}

/// Mount the page into `#root` (or `<body>` when absent).
pub fn run_app() {
    console_error_panic_hook::set_once();
    boot_store();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<VitrineApp>::with_root(root).render();
    } else {
        yew::Renderer::<VitrineApp>::new().render();
    }
}
