use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SelectProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub options: Vec<AttrValue>,
    /// Label of the empty "match anything" option.
    pub all_label: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onchange: Callback<String>,
}

#[function_component(Select)]
pub(crate) fn select(props: &SelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                onchange.emit(target.value());
            }
        })
    };

    html! {
        <select
            id={props.id.clone()}
            class={classes!("select", props.class.clone())}
            value={props.value.clone()}
            onchange={onchange}
        >
            <option value="" selected={props.value.is_empty()}>{props.all_label.clone()}</option>
            {for props.options.iter().map(|option| {
                let selected = props.value == *option;
                html! { <option value={option.clone()} selected={selected}>{option.clone()}</option> }
            })}
        </select>
    }
}
