//! Login outcome hook.
//!
//! # Design
//! - The page has no backend; [`ScriptedLogin`] is a demo stand-in.
//! - A real validator implements [`CredentialCheck`] and plugs into the same
//!   animation machine.

/// Result of a login attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted.
    Success,
    /// Credentials rejected.
    Failure,
}

/// Credentials submitted from the login dialog.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LoginAttempt {
    /// Username or email.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Decides how a login attempt ends.
pub trait CredentialCheck {
    /// Judge an attempt.
    fn check(&mut self, attempt: &LoginAttempt) -> LoginOutcome;
}

/// Demo outcome: odd attempts fail, even attempts succeed. Ignores credentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScriptedLogin {
    attempts: u32,
}

impl ScriptedLogin {
    /// Attempts seen so far.
    #[must_use]
    pub const fn attempts(self) -> u32 {
        self.attempts
    }
}

impl CredentialCheck for ScriptedLogin {
    fn check(&mut self, _attempt: &LoginAttempt) -> LoginOutcome {
        self.attempts = self.attempts.wrapping_add(1);
        if self.attempts % 2 == 1 {
            LoginOutcome::Failure
        } else {
            LoginOutcome::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_login_alternates_starting_with_failure() {
        let mut check = ScriptedLogin::default();
        let attempt = LoginAttempt::default();
        let outcomes: Vec<_> = (0..4).map(|_| check.check(&attempt)).collect();
        assert_eq!(
            outcomes,
            vec![
                LoginOutcome::Failure,
                LoginOutcome::Success,
                LoginOutcome::Failure,
                LoginOutcome::Success
            ]
        );
        assert_eq!(check.attempts(), 4);
    }
}
