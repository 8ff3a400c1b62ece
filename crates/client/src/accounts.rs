//! Account lifecycle: registration, login/logout, token verification, and
//! the OTP password-reset flow.

use std::sync::Mutex;

use tracing::{debug, info};

use bookstall_core::{DomainError, DomainResult, RemoteError, RemoteResult};
use bookstall_session::{PasswordReset, SessionToken, UserProfile};

use crate::dto::{
    LoginRequest, LoginResponseDto, LogoutRequest, OtpResponseDto, PasswordResetConfirmBody,
    PasswordResetRequestBody, RegisterRequest, VerifyResponseDto,
};
use crate::transport::{Auth, Http};

/// Validated registration payload. Password confirmation is checked here,
/// before any request is built.
#[derive(Debug, Clone)]
pub struct Registration {
    email: String,
    first_name: String,
    last_name: String,
    password: String,
}

impl Registration {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> DomainResult<Self> {
        let email = email.into();
        let password = password.into();

        if email.trim().is_empty() || !email.contains('@') {
            return Err(DomainError::validation("a valid email address is required"));
        }
        if password.is_empty() {
            return Err(DomainError::validation("password must not be empty"));
        }
        if password != confirm_password.into() {
            return Err(DomainError::validation("passwords must match"));
        }

        Ok(Self {
            email,
            first_name: first_name.into(),
            last_name: last_name.into(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Client for the accounts resource.
///
/// Login deposits the access token into the shared session; the refresh
/// token is held here in memory only, for the logout blacklist call;
/// persisted client state stays a single bearer token.
pub struct AccountsClient {
    http: Http,
    refresh_token: Mutex<Option<String>>,
}

impl AccountsClient {
    pub fn new(http: Http) -> Self {
        Self {
            http,
            refresh_token: Mutex::new(None),
        }
    }

    pub async fn register(&self, registration: &Registration) -> RemoteResult<()> {
        let body = RegisterRequest {
            email: registration.email.clone(),
            first_name: registration.first_name.clone(),
            last_name: registration.last_name.clone(),
            password: registration.password.clone(),
            confirm_password: registration.password.clone(),
            is_staff: false,
        };
        self.http
            .post_no_content("accounts/users/register/", &body, Auth::Public)
            .await?;
        info!(email = %registration.email, "account registered");
        Ok(())
    }

    /// Authenticate and install the access token into the session.
    pub async fn login(&self, email: &str, password: &str) -> RemoteResult<UserProfile> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponseDto = self
            .http
            .post("accounts/users/login/", &body, Auth::Public)
            .await?;

        self.http
            .session()
            .authenticate(SessionToken::new(response.tokens.access));
        if let Ok(mut slot) = self.refresh_token.lock() {
            *slot = response.tokens.refresh;
        }

        info!(user_id = %response.user.id, "login succeeded");
        Ok(response.user)
    }

    /// Clear the session. When a refresh token is known it is sent for
    /// server-side blacklisting first; a failure there still clears locally.
    pub async fn logout(&self) -> RemoteResult<()> {
        let refresh = self
            .refresh_token
            .lock()
            .ok()
            .and_then(|mut slot| slot.take());

        let remote = match refresh {
            Some(refresh) => {
                let body = LogoutRequest { refresh };
                self.http
                    .post_no_content("accounts/users/logout/", &body, Auth::Session)
                    .await
            }
            None => {
                debug!("no refresh token held; clearing locally only");
                Ok(())
            }
        };

        self.http.session().clear();
        remote
    }

    /// Check the stored token against the backend and fetch the profile.
    pub async fn verify_token(&self) -> RemoteResult<UserProfile> {
        let response: VerifyResponseDto = self
            .http
            .get("accounts/users/verify_token/", Auth::Session)
            .await?;
        if !response.valid {
            return Err(RemoteError::Unauthenticated);
        }
        Ok(response.user)
    }

    /// Begin the OTP reset flow. The response carries the one-time code and
    /// a reset token scoped to the email; both must be echoed on confirm.
    pub async fn request_password_reset(&self, email: &str) -> RemoteResult<PasswordReset> {
        let body = PasswordResetRequestBody {
            email: email.to_string(),
        };
        let response: OtpResponseDto = self
            .http
            .post("accounts/users/password_reset_request_otp/", &body, Auth::Public)
            .await?;
        Ok(PasswordReset::new(email, response.otp, response.token))
    }

    /// Complete the reset flow with the new password. The reset state is
    /// consumed; a fresh request is needed for another attempt.
    pub async fn confirm_password_reset(
        &self,
        reset: PasswordReset,
        new_password: &str,
    ) -> RemoteResult<()> {
        let body = PasswordResetConfirmBody {
            email: reset.email,
            otp: reset.otp,
            token: reset.token,
            password: new_password.to_string(),
        };
        self.http
            .post_no_content("accounts/users/password_reset/", &body, Auth::Public)
            .await?;
        info!("password reset confirmed");
        Ok(())
    }
}
