//! Two-step password reset: request a code by email, then submit the code
//! with a new password.

#[cfg(test)]
#[path = "password_reset_test.rs"]
mod password_reset_test;

pub const CODE_SENT_MESSAGE: &str = "A verification code was sent to your email.";
pub const RESET_DONE_MESSAGE: &str = "Your password was changed. Sign in with the new password.";
pub const SEND_FAILED_MESSAGE: &str = "Could not send the code. Check that the email is registered.";
pub const VERIFY_FAILED_MESSAGE: &str = "Could not change the password. Check the verification code.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResetStep {
    #[default]
    EnterEmail,
    EnterCodeAndPassword,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResetError {
    #[error("Enter your email.")]
    MissingEmail,
    #[error("Enter the verification code.")]
    MissingCode,
    #[error("Enter a new password.")]
    MissingPassword,
    #[error("The new passwords do not match.")]
    PasswordMismatch,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetForm {
    pub step: ResetStep,
    pub email: String,
    pub code: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ResetForm {
    /// # Errors
    ///
    /// [`ResetError::MissingEmail`] for a blank email.
    pub fn validate_request(&self) -> Result<(), ResetError> {
        if self.email.trim().is_empty() {
            return Err(ResetError::MissingEmail);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the first missing input, or a confirmation mismatch.
    pub fn validate_verify(&self) -> Result<(), ResetError> {
        self.validate_request()?;
        if self.code.trim().is_empty() {
            return Err(ResetError::MissingCode);
        }
        if self.new_password.is_empty() {
            return Err(ResetError::MissingPassword);
        }
        if self.new_password != self.confirm_password {
            return Err(ResetError::PasswordMismatch);
        }
        Ok(())
    }

    /// Advance to the code step, keeping the email and clearing the rest.
    pub fn code_sent(&mut self) {
        self.step = ResetStep::EnterCodeAndPassword;
        self.code.clear();
        self.new_password.clear();
        self.confirm_password.clear();
    }

    /// Reset flow finished; start over from a blank form.
    pub fn completed(&mut self) {
        *self = Self::default();
    }
}
