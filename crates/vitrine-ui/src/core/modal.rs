//! Auth dialogs: mutual exclusion plus the scripted feedback sequences.
//!
//! # Design
//! - At most one dialog is open; `active` is an `Option`, so exclusion is structural.
//! - Every user action starts a new generation. Timers from older flows become no-ops.
//! - Operations return the deferred steps to schedule; [`ModalState::fire`] runs them.
//! - Signup and reset validate synchronously before any animation.

use crate::core::animation::{AnimationLayer, AnimationPhase};
use crate::core::config::FlowTimings;
use crate::core::forms::{ForgotForm, FormError, SignupForm, reset_message, signup_message};
use crate::core::outcome::{CredentialCheck, LoginAttempt, LoginOutcome};
use crate::core::schedule::{Deferred, Generation, Sequencer, Ticket};

/// Copy shown when a login succeeds.
pub const LOGIN_SUCCESS_TEXT: &str = "Login successful!";
/// Copy shown when a login fails.
pub const LOGIN_FAILURE_TEXT: &str = "Invalid credentials. Please try again.";

/// Dialogs that can be layered over the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Overlay {
    /// Login dialog.
    Login,
    /// Account creation dialog.
    Signup,
    /// Password reset dialog.
    ForgotPassword,
}

impl Overlay {
    /// Label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::ForgotPassword => "forgot_password",
        }
    }
}

/// Deferred dialog step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalStep {
    /// Leave the spinner for the outcome state.
    Resolve(Overlay),
    /// End the outcome state (auto-close on success, stop shaking on failure).
    Finish(Overlay),
    /// Hide the login dialog once its exit transition has played.
    Dismiss,
}

/// Deferred step ready for the shell's timers.
pub type ModalDeferred = Deferred<ModalStep>;

/// Dialog slice of the app store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalState {
    active: Option<Overlay>,
    phase: AnimationPhase,
    closing: bool,
    pending_outcome: Option<LoginOutcome>,
    message: Option<String>,
    sequencer: Sequencer,
    timings: FlowTimings,
    /// Login dialog inputs.
    pub login: LoginAttempt,
    /// Signup dialog inputs and inline error.
    pub signup: SignupForm,
    /// Reset dialog input and inline error.
    pub forgot: ForgotForm,
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new(FlowTimings::default())
    }
}

impl ModalState {
    /// Empty state using the given delays.
    #[must_use]
    pub fn new(timings: FlowTimings) -> Self {
        Self {
            active: None,
            phase: AnimationPhase::Idle,
            closing: false,
            pending_outcome: None,
            message: None,
            sequencer: Sequencer::default(),
            timings,
            login: LoginAttempt::default(),
            signup: SignupForm::default(),
            forgot: ForgotForm::default(),
        }
    }

    /// Dialog currently shown.
    #[must_use]
    pub const fn active(&self) -> Option<Overlay> {
        self.active
    }

    /// Whether `overlay` is the shown dialog.
    #[must_use]
    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.active == Some(overlay)
    }

    /// Current feedback phase.
    #[must_use]
    pub const fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Whether the login dialog is playing its exit transition.
    #[must_use]
    pub const fn is_closing(&self) -> bool {
        self.closing
    }

    /// Feedback sub-element visibility. The exit transition keeps whatever
    /// was showing until the dialog hides.
    #[must_use]
    pub const fn layer(&self) -> AnimationLayer {
        let layer = self.phase.layer();
        if self.closing { layer.sliding_out() } else { layer }
    }

    /// Generation of the live flow.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.sequencer.current()
    }

    /// Copy for the feedback layer in its current phase.
    #[must_use]
    pub fn feedback_text(&self) -> Option<&str> {
        match self.phase {
            AnimationPhase::Success => {
                Some(self.message.as_deref().unwrap_or(LOGIN_SUCCESS_TEXT))
            }
            AnimationPhase::Failure => Some(LOGIN_FAILURE_TEXT),
            AnimationPhase::Idle | AnimationPhase::Pending => None,
        }
    }

    /// Inline validation error for a form dialog.
    #[must_use]
    pub const fn form_error(&self, overlay: Overlay) -> Option<FormError> {
        match overlay {
            Overlay::Login => None,
            Overlay::Signup => self.signup.error,
            Overlay::ForgotPassword => self.forgot.error,
        }
    }

    /// Show `overlay`, hiding whichever dialog was open.
    ///
    /// Pending steps from earlier flows are invalidated, so a closing or
    /// animating dialog can never hide the one just opened.
    pub fn open(&mut self, overlay: Overlay) {
        self.sequencer.begin();
        if let Some(current) = self.active
            && current != overlay
        {
            self.clear_inputs(current);
        }
        self.active = Some(overlay);
        self.reset_feedback();
    }

    /// Run a login attempt through `check` and start its feedback sequence.
    pub fn simulate_login(&mut self, check: &mut impl CredentialCheck) -> Vec<ModalDeferred> {
        self.open(Overlay::Login);
        let outcome = check.check(&self.login);
        self.pending_outcome = Some(outcome);
        self.phase = AnimationPhase::Pending;
        let delay = match outcome {
            LoginOutcome::Success => self.timings.login_success_resolve_ms,
            LoginOutcome::Failure => self.timings.login_failure_resolve_ms,
        };
        vec![self.sequencer.defer(delay, ModalStep::Resolve(Overlay::Login))]
    }

    /// Validate the signup form; on success start the success-only sequence.
    pub fn submit_signup(&mut self) -> Vec<ModalDeferred> {
        if !self.is_open(Overlay::Signup) {
            return Vec::new();
        }
        match self.signup.validate() {
            Ok(username) => {
                self.signup.error = None;
                self.start_form_flow(Overlay::Signup, signup_message(&username))
            }
            Err(err) => {
                self.signup.error = Some(err);
                Vec::new()
            }
        }
    }

    /// Validate the reset form; on success start the success-only sequence.
    pub fn submit_forgot(&mut self) -> Vec<ModalDeferred> {
        if !self.is_open(Overlay::ForgotPassword) {
            return Vec::new();
        }
        match self.forgot.validate() {
            Ok(identifier) => {
                self.forgot.error = None;
                self.start_form_flow(Overlay::ForgotPassword, reset_message(&identifier))
            }
            Err(err) => {
                self.forgot.error = Some(err);
                Vec::new()
            }
        }
    }

    /// Close `overlay` if it is the open dialog.
    ///
    /// Login plays its exit transition first; the form dialogs hide at once and
    /// clear their inputs.
    pub fn close(&mut self, overlay: Overlay) -> Vec<ModalDeferred> {
        if !self.is_open(overlay) {
            return Vec::new();
        }
        self.sequencer.begin();
        match overlay {
            Overlay::Login => {
                self.closing = true;
                vec![self.sequencer.defer(self.timings.login_exit_ms, ModalStep::Dismiss)]
            }
            Overlay::Signup | Overlay::ForgotPassword => {
                self.hide();
                Vec::new()
            }
        }
    }

    /// Run a deferred step if it still belongs to the live flow.
    pub fn fire(&mut self, ticket: Ticket<ModalStep>) -> Vec<ModalDeferred> {
        if !self.sequencer.accepts(&ticket) {
            return Vec::new();
        }
        match ticket.step {
            ModalStep::Resolve(overlay)
                if self.is_open(overlay) && self.phase == AnimationPhase::Pending =>
            {
                self.resolve(overlay)
            }
            ModalStep::Finish(overlay) if self.is_open(overlay) => {
                match self.phase {
                    AnimationPhase::Success => self.hide(),
                    AnimationPhase::Failure => {
                        self.phase = AnimationPhase::Idle;
                        self.pending_outcome = None;
                    }
                    AnimationPhase::Idle | AnimationPhase::Pending => {}
                }
                Vec::new()
            }
            ModalStep::Dismiss
                if self.is_open(Overlay::Login) && self.closing =>
            {
                self.hide();
                Vec::new()
            }
            ModalStep::Resolve(_) | ModalStep::Finish(_) | ModalStep::Dismiss => Vec::new(),
        }
    }

    fn resolve(&mut self, overlay: Overlay) -> Vec<ModalDeferred> {
        let hold = match (overlay, self.pending_outcome) {
            (Overlay::Login, Some(LoginOutcome::Failure)) => {
                self.phase = AnimationPhase::Failure;
                self.timings.login_failure_hold_ms
            }
            (Overlay::Login, Some(LoginOutcome::Success)) => {
                self.phase = AnimationPhase::Success;
                self.timings.login_success_hold_ms
            }
            (Overlay::Login, None) => {
                self.phase = AnimationPhase::Idle;
                return Vec::new();
            }
            (Overlay::Signup | Overlay::ForgotPassword, _) => {
                self.phase = AnimationPhase::Success;
                self.timings.form_hold_ms
            }
        };
        vec![self.sequencer.defer(hold, ModalStep::Finish(overlay))]
    }

    fn start_form_flow(&mut self, overlay: Overlay, message: String) -> Vec<ModalDeferred> {
        self.sequencer.begin();
        self.message = Some(message);
        self.phase = AnimationPhase::Pending;
        vec![self
            .sequencer
            .defer(self.timings.form_resolve_ms, ModalStep::Resolve(overlay))]
    }

    fn hide(&mut self) {
        if let Some(current) = self.active.take() {
            self.clear_inputs(current);
        }
        self.reset_feedback();
    }

    fn reset_feedback(&mut self) {
        self.phase = AnimationPhase::Idle;
        self.closing = false;
        self.pending_outcome = None;
        self.message = None;
    }

    fn clear_inputs(&mut self, overlay: Overlay) {
        match overlay {
            Overlay::Login => {}
            Overlay::Signup => self.signup = SignupForm::default(),
            Overlay::ForgotPassword => self.forgot = ForgotForm::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forms::SignupField;
    use crate::core::outcome::ScriptedLogin;
    use crate::core::schedule::testing::VirtualClock;

    struct Harness {
        modal: ModalState,
        check: ScriptedLogin,
        clock: VirtualClock<ModalStep>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                modal: ModalState::default(),
                check: ScriptedLogin::default(),
                clock: VirtualClock::new(),
            }
        }

        fn login(&mut self) {
            let deferred = self.modal.simulate_login(&mut self.check);
            self.clock.schedule(deferred);
        }

        fn run(&mut self, deferred: Vec<ModalDeferred>) {
            self.clock.schedule(deferred);
        }

        fn advance(&mut self, ms: u64) {
            let modal = &mut self.modal;
            self.clock.advance(ms, |ticket| modal.fire(ticket));
        }
    }

    fn fill_signup(modal: &mut ModalState, username: &str, password: &str, confirm: &str) {
        modal.signup.set(SignupField::Username, username.into());
        modal.signup.set(SignupField::Password, password.into());
        modal.signup.set(SignupField::Confirm, confirm.into());
    }

    #[test]
    fn first_login_fails_and_leaves_dialog_open() {
        let mut h = Harness::new();
        h.login();
        assert!(h.modal.is_open(Overlay::Login));
        assert_eq!(h.modal.phase(), AnimationPhase::Pending);
        assert!(h.modal.layer().spinner);

        h.advance(799);
        assert_eq!(h.modal.phase(), AnimationPhase::Pending);
        h.advance(1);
        assert_eq!(h.modal.phase(), AnimationPhase::Failure);
        assert!(h.modal.layer().shake);
        assert_eq!(h.modal.feedback_text(), Some(LOGIN_FAILURE_TEXT));

        h.advance(1000);
        assert_eq!(h.modal.phase(), AnimationPhase::Idle);
        assert!(!h.modal.layer().layer);
        assert!(h.modal.is_open(Overlay::Login));
        assert!(h.clock.is_idle());
    }

    #[test]
    fn second_login_succeeds_and_auto_closes() {
        let mut h = Harness::new();
        h.login();
        h.advance(5_000);
        h.login();
        h.advance(1000);
        assert_eq!(h.modal.phase(), AnimationPhase::Success);
        let layer = h.modal.layer();
        assert!(layer.check && layer.success_text && layer.pulse);
        assert_eq!(h.modal.feedback_text(), Some(LOGIN_SUCCESS_TEXT));

        h.advance(1199);
        assert!(h.modal.is_open(Overlay::Login));
        h.advance(1);
        assert_eq!(h.modal.active(), None);
        assert_eq!(h.modal.phase(), AnimationPhase::Idle);
    }

    #[test]
    fn login_outcomes_keep_alternating() {
        let mut h = Harness::new();
        let mut phases = Vec::new();
        for _ in 0..4 {
            h.modal.open(Overlay::Login);
            h.login();
            h.advance(1000);
            phases.push(h.modal.phase());
            h.advance(5_000);
        }
        assert_eq!(
            phases,
            vec![
                AnimationPhase::Failure,
                AnimationPhase::Success,
                AnimationPhase::Failure,
                AnimationPhase::Success
            ]
        );
    }

    #[test]
    fn opening_one_overlay_closes_the_others() {
        let mut modal = ModalState::default();
        modal.open(Overlay::Login);
        modal.open(Overlay::Signup);
        assert!(modal.is_open(Overlay::Signup));
        assert!(!modal.is_open(Overlay::Login));

        modal.open(Overlay::Login);
        assert!(modal.is_open(Overlay::Login));
        assert!(!modal.is_open(Overlay::Signup));

        modal.open(Overlay::ForgotPassword);
        assert_eq!(modal.active(), Some(Overlay::ForgotPassword));
    }

    #[test]
    fn login_close_plays_exit_transition() {
        let mut h = Harness::new();
        h.modal.open(Overlay::Login);
        let deferred = h.modal.close(Overlay::Login);
        h.run(deferred);
        assert!(h.modal.is_closing());
        assert!(h.modal.layer().slide_out);
        assert!(h.modal.is_open(Overlay::Login));
        h.advance(300);
        assert_eq!(h.modal.active(), None);
        assert!(!h.modal.layer().slide_out);
    }

    #[test]
    fn feedback_stays_visible_through_the_exit_transition() {
        let mut h = Harness::new();
        h.login();
        let deferred = h.modal.close(Overlay::Login);
        h.run(deferred);
        let layer = h.modal.layer();
        assert!(layer.slide_out && layer.layer && layer.spinner);

        h.advance(299);
        assert!(h.modal.layer().layer);
        assert_eq!(h.modal.phase(), AnimationPhase::Pending);
        h.advance(1);
        assert_eq!(h.modal.active(), None);
        assert_eq!(h.modal.layer(), AnimationLayer::default());

        h.modal.open(Overlay::Login);
        assert!(!h.modal.is_closing());
        assert!(!h.modal.layer().layer);
        h.advance(3_000);
        assert!(h.modal.is_open(Overlay::Login));
    }

    #[test]
    fn reopening_during_exit_cancels_the_pending_hide() {
        let mut h = Harness::new();
        h.modal.open(Overlay::Login);
        let deferred = h.modal.close(Overlay::Login);
        h.run(deferred);
        h.advance(100);
        h.modal.open(Overlay::Login);
        assert!(!h.modal.layer().slide_out);
        h.advance(500);
        assert!(h.modal.is_open(Overlay::Login));
    }

    #[test]
    fn stale_login_steps_do_not_touch_a_newer_flow() {
        let mut h = Harness::new();
        h.login();
        h.advance(400);
        h.modal.open(Overlay::Signup);
        h.modal.open(Overlay::Login);
        h.advance(2_000);
        assert!(h.modal.is_open(Overlay::Login));
        assert_eq!(h.modal.phase(), AnimationPhase::Idle);
    }

    #[test]
    fn closing_mid_flow_drops_the_success_close() {
        let mut h = Harness::new();
        h.login();
        h.advance(5_000);
        h.login();
        h.advance(1_000);
        assert_eq!(h.modal.phase(), AnimationPhase::Success);
        let deferred = h.modal.close(Overlay::Login);
        h.run(deferred);
        h.advance(300);
        assert_eq!(h.modal.active(), None);
        h.modal.open(Overlay::Login);
        h.advance(2_000);
        assert!(h.modal.is_open(Overlay::Login));
    }

    #[test]
    fn signup_with_empty_confirmation_shows_error_only() {
        let mut h = Harness::new();
        h.modal.open(Overlay::Signup);
        fill_signup(&mut h.modal, "ada", "secret", "");
        let deferred = h.modal.submit_signup();
        assert!(deferred.is_empty());
        let err = h.modal.form_error(Overlay::Signup).expect("inline error");
        assert_eq!(err.to_string(), "All fields are required.");
        assert!(!h.modal.layer().layer);
        assert!(h.modal.feedback_text().is_none());
    }

    #[test]
    fn signup_with_mismatched_passwords_shows_error() {
        let mut modal = ModalState::default();
        modal.open(Overlay::Signup);
        fill_signup(&mut modal, "ada", "secret", "other");
        assert!(modal.submit_signup().is_empty());
        assert_eq!(
            modal.form_error(Overlay::Signup).map(|err| err.to_string()),
            Some("Passwords do not match!".to_string())
        );
    }

    #[test]
    fn valid_signup_echoes_username_then_closes() {
        let mut h = Harness::new();
        h.modal.open(Overlay::Signup);
        fill_signup(&mut h.modal, "ada", "secret", "secret");
        let deferred = h.modal.submit_signup();
        h.run(deferred);
        assert_eq!(h.modal.phase(), AnimationPhase::Pending);
        assert!(h.modal.form_error(Overlay::Signup).is_none());

        h.advance(1000);
        assert_eq!(h.modal.phase(), AnimationPhase::Success);
        assert!(h.modal.feedback_text().is_some_and(|text| text.contains("ada")));

        h.advance(1200);
        assert_eq!(h.modal.active(), None);
        assert_eq!(h.modal.signup, SignupForm::default());
    }

    #[test]
    fn retry_after_validation_error_clears_it() {
        let mut modal = ModalState::default();
        modal.open(Overlay::Signup);
        fill_signup(&mut modal, "ada", "", "");
        assert!(modal.submit_signup().is_empty());
        fill_signup(&mut modal, "ada", "pw", "pw");
        assert_eq!(modal.submit_signup().len(), 1);
        assert!(modal.form_error(Overlay::Signup).is_none());
    }

    #[test]
    fn forgot_password_validates_and_echoes_identifier() {
        let mut h = Harness::new();
        h.modal.open(Overlay::ForgotPassword);
        assert!(h.modal.submit_forgot().is_empty());
        assert_eq!(
            h.modal.form_error(Overlay::ForgotPassword),
            Some(FormError::MissingIdentifier)
        );

        h.modal.forgot.identifier = "ada@example.com".into();
        let deferred = h.modal.submit_forgot();
        h.run(deferred);
        h.advance(1000);
        assert_eq!(
            h.modal.feedback_text(),
            Some("Reset link sent to ada@example.com.")
        );
        h.advance(1200);
        assert_eq!(h.modal.active(), None);
        assert!(h.modal.forgot.identifier.is_empty());
    }

    #[test]
    fn closing_signup_is_immediate_and_clears_fields() {
        let mut modal = ModalState::default();
        modal.open(Overlay::Signup);
        fill_signup(&mut modal, "ada", "secret", "");
        modal.submit_signup();
        assert!(modal.close(Overlay::Signup).is_empty());
        assert_eq!(modal.active(), None);
        assert_eq!(modal.signup, SignupForm::default());
    }

    #[test]
    fn switching_from_forgot_back_to_login_has_no_pending_close() {
        let mut h = Harness::new();
        h.modal.open(Overlay::ForgotPassword);
        h.modal.forgot.identifier = "ada".into();
        let deferred = h.modal.submit_forgot();
        h.run(deferred);
        h.modal.open(Overlay::Login);
        assert!(h.modal.forgot.identifier.is_empty());
        h.advance(5_000);
        assert!(h.modal.is_open(Overlay::Login));
        assert_eq!(h.modal.phase(), AnimationPhase::Idle);
    }

    #[test]
    fn submitting_a_closed_form_is_a_no_op() {
        let mut modal = ModalState::default();
        assert!(modal.submit_signup().is_empty());
        assert!(modal.submit_forgot().is_empty());
        assert!(modal.close(Overlay::Login).is_empty());
        assert!(modal.form_error(Overlay::Signup).is_none());
    }
}
