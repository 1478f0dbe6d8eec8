//! Dark-mode switches. The navbar switch owns theme application; the drawer
//! switch mirrors onto it and goes through the same path.

use crate::app::{LocalPreferences, log_preference_error, update_store};
use crate::components::atoms::toggle::Toggle;
use crate::core::store::AppStore;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToggleView {
    Desktop,
    Mobile,
}

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeToggleProps {
    pub view: ToggleView,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub(crate) fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let view = props.view;
    let checked = use_selector(move |store: &AppStore| match view {
        ToggleView::Desktop => store.theme.desktop_checked,
        ToggleView::Mobile => store.theme.mobile_checked,
    });
    let onchange = Callback::from(move |checked: bool| theme_changed(&dispatch, view, checked));
    let id = match view {
        ToggleView::Desktop => "themeToggle",
        ToggleView::Mobile => "themeToggleMobile",
    };

    html! {
        <Toggle
            id={id}
            label="Dark mode"
            checked={*checked}
            class={props.class.clone()}
            onchange={onchange}
        />
    }
}

fn theme_changed(dispatch: &Dispatch<AppStore>, view: ToggleView, checked: bool) {
    let persisted = update_store(dispatch, |store| {
        let mut prefs = LocalPreferences;
        match view {
            ToggleView::Desktop => store.theme.desktop_changed(checked, &mut prefs),
            ToggleView::Mobile => store.theme.mobile_changed(checked, &mut prefs),
        }
    });
    if let Err(err) = persisted {
        log_preference_error(&err);
    }
}
