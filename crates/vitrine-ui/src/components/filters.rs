//! Filter controls, rendered in the navbar and again in the drawer.
//!
//! Both views read and write the same criteria in the store, so they never drift.

use crate::components::atoms::search_input::SearchInput;
use crate::components::atoms::select::Select;
use crate::core::filter::{FilterField, FilterView};
use crate::core::store::AppStore;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct FilterControlsProps {
    pub view: FilterView,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FilterControls)]
pub(crate) fn filter_controls(props: &FilterControlsProps) -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let criteria = use_selector(|store: &AppStore| store.filters.criteria.clone());
    let options = use_selector(|store: &AppStore| store.filters.options.clone());
    let debounce = use_selector(|store: &AppStore| store.config.search_debounce_ms);
    let prefix = props.view.id_prefix();

    let on_change = |field: FilterField| {
        let dispatch = dispatch.clone();
        Callback::from(move |value: String| {
            dispatch.reduce_mut(move |store| store.filters.update(field, &value));
        })
    };
    let current = |field: FilterField| AttrValue::from(criteria.value(field).to_string());

    html! {
        <div class={classes!("filters", format!("filters-{prefix}"), props.class.clone())}>
            <SearchInput
                id={format!("{prefix}Search")}
                value={current(FilterField::Search)}
                placeholder="Search the gallery"
                debounce_ms={*debounce}
                on_search={on_change(FilterField::Search)}
            />
            <Select
                id={format!("{prefix}Category")}
                all_label="All categories"
                options={attr_values(&options.categories)}
                value={current(FilterField::Category)}
                onchange={on_change(FilterField::Category)}
            />
            <Select
                id={format!("{prefix}Media")}
                all_label="All media"
                options={attr_values(&options.media)}
                value={current(FilterField::Media)}
                onchange={on_change(FilterField::Media)}
            />
            <Select
                id={format!("{prefix}Date")}
                all_label="Any date"
                options={attr_values(&options.dates)}
                value={current(FilterField::Date)}
                onchange={on_change(FilterField::Date)}
            />
        </div>
    }
}

fn attr_values(values: &[String]) -> Vec<AttrValue> {
    values.iter().cloned().map(AttrValue::from).collect()
}
