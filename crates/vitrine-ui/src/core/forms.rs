//! Signup and password-reset form validation.
//!
//! # Design
//! - Validation is synchronous and runs before any animation starts.
//! - Error `Display` text is exactly what the dialog shows inline.

/// Inline validation failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A signup field was blank.
    #[error("All fields are required.")]
    MissingFields,
    /// Password and confirmation differ.
    #[error("Passwords do not match!")]
    PasswordMismatch,
    /// The reset form had no username or email.
    #[error("Please enter your username or email.")]
    MissingIdentifier,
}

/// Signup dialog fields.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SignupForm {
    /// Desired username.
    pub username: String,
    /// Password.
    pub password: String,
    /// Password confirmation.
    pub confirm: String,
    /// Inline error currently shown.
    pub error: Option<FormError>,
}

/// Which signup input changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupField {
    /// Username input.
    Username,
    /// Password input.
    Password,
    /// Confirmation input.
    Confirm,
}

impl SignupForm {
    /// Store an input value.
    pub fn set(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::Username => self.username = value,
            SignupField::Password => self.password = value,
            SignupField::Confirm => self.confirm = value,
        }
    }

    /// Validate and return the trimmed username on success.
    ///
    /// # Errors
    /// [`FormError::MissingFields`] if any field is blank,
    /// [`FormError::PasswordMismatch`] if the confirmation differs.
    pub fn validate(&self) -> Result<String, FormError> {
        let username = self.username.trim();
        if username.is_empty() || self.password.trim().is_empty() || self.confirm.trim().is_empty()
        {
            return Err(FormError::MissingFields);
        }
        if self.password != self.confirm {
            return Err(FormError::PasswordMismatch);
        }
        Ok(username.to_string())
    }
}

/// Password-reset dialog fields.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ForgotForm {
    /// Username or email.
    pub identifier: String,
    /// Inline error currently shown.
    pub error: Option<FormError>,
}

impl ForgotForm {
    /// Validate and return the trimmed identifier on success.
    ///
    /// # Errors
    /// [`FormError::MissingIdentifier`] when the field is blank.
    pub fn validate(&self) -> Result<String, FormError> {
        let identifier = self.identifier.trim();
        if identifier.is_empty() {
            return Err(FormError::MissingIdentifier);
        }
        Ok(identifier.to_string())
    }
}

/// Success copy for a completed signup.
#[must_use]
pub fn signup_message(username: &str) -> String {
    format!("Welcome aboard, {username}! Your account is ready.")
}

/// Success copy for a reset request.
#[must_use]
pub fn reset_message(identifier: &str) -> String {
    format!("Reset link sent to {identifier}.")
}
