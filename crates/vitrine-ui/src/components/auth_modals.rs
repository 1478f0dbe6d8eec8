//! Login, signup and password-reset dialogs with their feedback layer.
//!
//! # Design
//! - Dialog state lives in the store; these components only render it.
//! - Every action goes through [`TimerBank::run`] so deferred steps are armed
//!   (and stale ones cancelled) in one place.

use crate::app::TimerBank;
use crate::components::modal::Modal;
use crate::core::animation::AnimationLayer;
use crate::core::forms::SignupField;
use crate::core::modal::{ModalDeferred, Overlay};
use crate::core::store::AppStore;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(AuthDialogs)]
pub(crate) fn auth_dialogs() -> Html {
    html! {
        <>
            <LoginDialog />
            <SignupDialog />
            <ForgotDialog />
        </>
    }
}

/// Callback that applies a dialog action and arms its deferred steps.
fn action<E: 'static>(
    dispatch: &Dispatch<AppStore>,
    timers: &TimerBank,
    run: impl Fn(&mut AppStore) -> Vec<ModalDeferred> + 'static,
) -> Callback<E> {
    let dispatch = dispatch.clone();
    let timers = timers.clone();
    Callback::from(move |_| timers.run(&dispatch, &run))
}

fn switch_to(dispatch: &Dispatch<AppStore>, timers: &TimerBank, overlay: Overlay) -> Callback<MouseEvent> {
    action(dispatch, timers, move |store| {
        store.open_overlay(overlay);
        Vec::new()
    })
}

/// Input handler writing the value into the store.
fn field_input(
    dispatch: &Dispatch<AppStore>,
    write: impl Fn(&mut AppStore, String) + Copy + 'static,
) -> Callback<InputEvent> {
    let dispatch = dispatch.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
            let value = input.value();
            dispatch.reduce_mut(move |store| write(store, value));
        }
    })
}

fn content_class(layer: AnimationLayer) -> Classes {
    classes!(
        layer.shake.then_some("shake"),
        layer.slide_out.then_some("modal-slide-out")
    )
}

#[derive(Properties, PartialEq)]
struct FeedbackLayerProps {
    layer: AnimationLayer,
    #[prop_or_default]
    text: Option<AttrValue>,
}

#[function_component(FeedbackLayer)]
fn feedback_layer(props: &FeedbackLayerProps) -> Html {
    let layer = props.layer;
    let text = props.text.as_ref().map(ToString::to_string).unwrap_or_default();
    html! {
        <div class={classes!("animation-layer", (!layer.layer).then_some("hidden"))}>
            <div class={classes!("spinner", (!layer.spinner).then_some("hidden"))}></div>
            <i class={classes!(
                "checkmark", "ri-checkbox-circle-fill",
                (!layer.check).then_some("hidden"),
                layer.pulse.then_some("pulse")
            )}></i>
            <i class={classes!("crossmark", "ri-close-circle-fill", (!layer.cross).then_some("hidden"))}></i>
            <p class={classes!("success-text", (!layer.success_text).then_some("hidden"))}>
                {layer.success_text.then(|| text.clone()).unwrap_or_default()}
            </p>
            <p class={classes!("failure-text", (!layer.failure_text).then_some("hidden"))}>
                {layer.failure_text.then(|| text.clone()).unwrap_or_default()}
            </p>
        </div>
    }
}

/// Shared dialog state for one overlay.
#[derive(Clone, PartialEq)]
struct DialogView {
    open: bool,
    busy: bool,
    layer: AnimationLayer,
    text: Option<AttrValue>,
    error: Option<AttrValue>,
}

fn dialog_view(store: &AppStore, overlay: Overlay) -> DialogView {
    let modal = &store.modal;
    let open = modal.is_open(overlay);
    DialogView {
        open,
        busy: open && modal.phase().is_busy(),
        layer: if open { modal.layer() } else { AnimationLayer::default() },
        text: open
            .then(|| modal.feedback_text().map(|text| AttrValue::from(text.to_string())))
            .flatten(),
        error: modal.form_error(overlay).map(|err| AttrValue::from(err.to_string())),
    }
}

fn error_line(error: Option<AttrValue>) -> Html {
    error
        .map(|message| html! { <p class="form-error" role="alert">{message}</p> })
        .unwrap_or_default()
}

#[function_component(LoginDialog)]
fn login_dialog() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let timers = use_context::<TimerBank>().unwrap_or_default();
    let mode = *use_selector(|store: &AppStore| store.theme.mode);
    let view = use_selector(|store: &AppStore| dialog_view(store, Overlay::Login));
    let login = use_selector(|store: &AppStore| store.modal.login.clone());

    let submit = {
        let run = action::<()>(&dispatch, &timers, AppStore::submit_login);
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            run.emit(());
        })
    };
    let close_action = action::<()>(&dispatch, &timers, |store| store.modal.close(Overlay::Login));
    let close_click = close_action.reform(|_: MouseEvent| ());

    html! {
        <Modal id="loginModal" open={view.open} mode={mode} content_class={content_class(view.layer)} on_close={close_action}>
            <button class="modal-close" aria-label="Close" onclick={close_click}>
                <i class="ri-close-line"></i>
            </button>
            <h2>{"Welcome back"}</h2>
            <form id="loginForm" onsubmit={submit}>
                <input
                    id="loginUsername"
                    type="text"
                    placeholder="Username or email"
                    value={login.username.clone()}
                    oninput={field_input(&dispatch, |store, value| store.modal.login.username = value)}
                />
                <input
                    id="loginPassword"
                    type="password"
                    placeholder="Password"
                    value={login.password.clone()}
                    oninput={field_input(&dispatch, |store, value| store.modal.login.password = value)}
                />
                <button type="submit" class="solid" disabled={view.busy}>{"Log in"}</button>
            </form>
            <p class="modal-links">
                <a href="#" onclick={prevent(switch_to(&dispatch, &timers, Overlay::ForgotPassword))}>{"Forgot password?"}</a>
                <a href="#" onclick={prevent(switch_to(&dispatch, &timers, Overlay::Signup))}>{"Create an account"}</a>
            </p>
            <FeedbackLayer layer={view.layer} text={view.text.clone()} />
        </Modal>
    }
}

#[function_component(SignupDialog)]
fn signup_dialog() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let timers = use_context::<TimerBank>().unwrap_or_default();
    let mode = *use_selector(|store: &AppStore| store.theme.mode);
    let view = use_selector(|store: &AppStore| dialog_view(store, Overlay::Signup));
    let form = use_selector(|store: &AppStore| store.modal.signup.clone());

    let submit = {
        let run = action::<()>(&dispatch, &timers, |store| store.modal.submit_signup());
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            run.emit(());
        })
    };
    let close_action =
        action::<()>(&dispatch, &timers, |store| store.modal.close(Overlay::Signup));
    let close_click = close_action.reform(|_: MouseEvent| ());
    let signup_input = |field: SignupField| {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                let value = input.value();
                dispatch.reduce_mut(move |store| store.modal.signup.set(field, value));
            }
        })
    };

    html! {
        <Modal id="signupModal" open={view.open} mode={mode} content_class={content_class(view.layer)} on_close={close_action}>
            <button class="modal-close" aria-label="Close" onclick={close_click}>
                <i class="ri-close-line"></i>
            </button>
            <h2>{"Create your account"}</h2>
            <form id="signupForm" onsubmit={submit}>
                <input
                    id="signupUsername"
                    type="text"
                    placeholder="Username"
                    value={form.username.clone()}
                    oninput={signup_input(SignupField::Username)}
                />
                <input
                    id="signupPassword"
                    type="password"
                    placeholder="Password"
                    value={form.password.clone()}
                    oninput={signup_input(SignupField::Password)}
                />
                <input
                    id="signupConfirm"
                    type="password"
                    placeholder="Confirm password"
                    value={form.confirm.clone()}
                    oninput={signup_input(SignupField::Confirm)}
                />
                {error_line(view.error.clone())}
                <button type="submit" class="solid" disabled={view.busy}>{"Sign up"}</button>
            </form>
            <p class="modal-links">
                <a href="#" onclick={prevent(switch_to(&dispatch, &timers, Overlay::Login))}>{"Already have an account? Log in"}</a>
            </p>
            <FeedbackLayer layer={view.layer} text={view.text.clone()} />
        </Modal>
    }
}

#[function_component(ForgotDialog)]
fn forgot_dialog() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let timers = use_context::<TimerBank>().unwrap_or_default();
    let mode = *use_selector(|store: &AppStore| store.theme.mode);
    let view = use_selector(|store: &AppStore| dialog_view(store, Overlay::ForgotPassword));
    let identifier = use_selector(|store: &AppStore| store.modal.forgot.identifier.clone());

    let submit = {
        let run = action::<()>(&dispatch, &timers, |store| store.modal.submit_forgot());
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            run.emit(());
        })
    };
    let close_action =
        action::<()>(&dispatch, &timers, |store| store.modal.close(Overlay::ForgotPassword));
    let close_click = close_action.reform(|_: MouseEvent| ());

    html! {
        <Modal id="forgotModal" open={view.open} mode={mode} content_class={content_class(view.layer)} on_close={close_action}>
            <button class="modal-close" aria-label="Close" onclick={close_click}>
                <i class="ri-close-line"></i>
            </button>
            <h2>{"Reset your password"}</h2>
            <form id="forgotForm" onsubmit={submit}>
                <input
                    id="forgotIdentifier"
                    type="text"
                    placeholder="Username or email"
                    value={(*identifier).clone()}
                    oninput={field_input(&dispatch, |store, value| store.modal.forgot.identifier = value)}
                />
                {error_line(view.error.clone())}
                <button type="submit" class="solid" disabled={view.busy}>{"Send reset link"}</button>
            </form>
            <p class="modal-links">
                <a href="#" onclick={prevent(switch_to(&dispatch, &timers, Overlay::Login))}>{"Back to log in"}</a>
            </p>
            <FeedbackLayer layer={view.layer} text={view.text.clone()} />
        </Modal>
    }
}

/// Stop `href="#"` links from jumping to the top before running `then`.
fn prevent(then: Callback<MouseEvent>) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        then.emit(event);
    })
}
