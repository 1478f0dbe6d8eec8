use crate::app::TimerBank;
use crate::components::filters::FilterControls;
use crate::components::theme_toggle::{ThemeToggle, ToggleView};
use crate::core::filter::FilterView;
use crate::core::modal::Overlay;
use crate::core::store::AppStore;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(Navbar)]
pub(crate) fn navbar() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let timers = use_context::<TimerBank>().unwrap_or_default();
    let style = use_selector(|store: &AppStore| {
        store.theme.navbar(store.config.scroll_threshold_px).css()
    });

    let open_drawer = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.reduce_mut(|store| store.drawer.open()))
    };

    html! {
        <nav class="navbar" style={(*style).clone()}>
            <button id="navToggle" class="ghost mobile-only" aria-label="Open navigation" onclick={open_drawer}>
                <i class="ri-menu-line"></i>
            </button>
            <strong class="brand">{"Vitrine"}</strong>
            <FilterControls view={FilterView::Desktop} class="desktop-only" />
            <div class="nav-actions desktop-only">
                <ThemeToggle view={ToggleView::Desktop} />
                {auth_buttons(&dispatch, &timers)}
            </div>
        </nav>
    }
}

#[function_component(NavDrawer)]
pub(crate) fn nav_drawer() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let timers = use_context::<TimerBank>().unwrap_or_default();
    let drawer = *use_selector(|store: &AppStore| store.drawer);
    let background = *use_selector(|store: &AppStore| store.theme.mode.style().drawer);

    let close = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.reduce_mut(|store| store.drawer.close()))
    };
    let apply = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(AppStore::apply_filters_and_close_drawer);
        })
    };

    html! {
        <>
            <div
                id="backdrop"
                class={classes!("backdrop", drawer.backdrop_visible().then_some("visible"))}
                onclick={close.clone()}
            ></div>
            <aside
                id="navDrawer"
                class={classes!("drawer", drawer.open.then_some("open"))}
                style={format!("background: {background};")}
            >
                <header class="drawer-header">
                    <strong>{"Vitrine"}</strong>
                    <button id="closeDrawer" class="ghost" aria-label="Close navigation" onclick={close}>
                        <i class="ri-close-line"></i>
                    </button>
                </header>
                <FilterControls view={FilterView::Drawer} />
                <button id="applyFiltersBtn" class="solid" onclick={apply}>{"Apply filters"}</button>
                <ThemeToggle view={ToggleView::Mobile} />
                {auth_buttons(&dispatch, &timers)}
            </aside>
        </>
    }
}

fn auth_buttons(dispatch: &Dispatch<AppStore>, timers: &TimerBank) -> Html {
    let open = |overlay: Overlay| {
        let dispatch = dispatch.clone();
        let timers = timers.clone();
        Callback::from(move |_: MouseEvent| {
            timers.run(&dispatch, |store| {
                store.open_overlay(overlay);
                Vec::new()
            });
        })
    };
    html! {
        <div class="auth-buttons">
            <button class="ghost" onclick={open(Overlay::Login)}>{"Log in"}</button>
            <button class="solid" onclick={open(Overlay::Signup)}>{"Sign up"}</button>
        </div>
    }
}
