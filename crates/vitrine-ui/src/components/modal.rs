use crate::core::theme::ThemeMode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub content_class: Classes,
    pub mode: ThemeMode,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

/// Themed overlay. The backdrop and content colors follow the active mode.
#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    let style = props.mode.style();
    let classes = classes!("modal", (!props.open).then_some("hidden"));

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div
            id={props.id.clone()}
            class={classes}
            role="dialog"
            aria-modal="true"
            aria-hidden={(!props.open).to_string()}
            style={format!("background: {};", style.modal)}
        >
            <button class="modal-backdrop" aria-label="Close" onclick={on_close}></button>
            <div
                class={classes!("modal-content", props.content_class.clone())}
                style={format!("background: {}; color: {};", style.modal_content, style.text)}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}
