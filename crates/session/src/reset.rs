//! Transient password-reset state.

use serde::{Deserialize, Serialize};

/// State carried between the three steps of the OTP password-reset flow.
///
/// Requesting a reset yields a one-time code and a reset token scoped to the
/// email address; both must be echoed back when the new password is
/// submitted. The value is short-lived: it exists only between the request
/// and the confirmation, and is dropped after either outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReset {
    pub email: String,
    pub otp: String,
    pub token: String,
}

impl PasswordReset {
    pub fn new(
        email: impl Into<String>,
        otp: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            otp: otp.into(),
            token: token.into(),
        }
    }

    /// Whether `entered` matches the issued one-time code.
    ///
    /// The comparison is exact; codes are short-lived so no constant-time
    /// guarantee is needed on the client side.
    pub fn otp_matches(&self, entered: &str) -> bool {
        !self.otp.is_empty() && self.otp == entered.trim()
    }
}

impl bookstall_core::ValueObject for PasswordReset {}
