//! Login / signup state machine shared by the recruiter and worker forms.
//!
//! ```text
//! Login <-> Signup --(valid Aadhar)--> OtpPending --(matching OTP)--> Authenticated
//! ```
//!
//! Only `verify_otp` leaves `OtpPending`, and only on an exact match.
//! Retries are unlimited.

use serde::Serialize;
use rocket_okapi::okapi::schemars;
use rocket_okapi::okapi::schemars::JsonSchema;

use crate::error::{DomainError, DomainResult};
use crate::models::{LoginForm, PendingSignup, SignupForm, User, UserType};
use crate::services::{IdentityProvider, OtpSender};
use crate::utils::is_valid_aadhar;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Login,
    Signup,
    OtpPending { pending: PendingSignup, otp: String },
    Authenticated(User),
}

impl AuthState {
    pub fn name(&self) -> &'static str {
        match self {
            AuthState::Login => "login",
            AuthState::Signup => "signup",
            AuthState::OtpPending { .. } => "otp-pending",
            AuthState::Authenticated(_) => "authenticated",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthFlow {
    role: UserType,
    state: AuthState,
}

/// What a client needs to render the form. The pending OTP is never exposed.
#[derive(Debug, Serialize, Clone, JsonSchema)]
pub struct AuthSnapshot {
    pub role: UserType,
    pub state: String,
    pub pending: Option<PendingSignup>,
}

impl AuthFlow {
    pub fn new(role: UserType) -> Self {
        AuthFlow {
            role,
            state: AuthState::Login,
        }
    }

    pub fn role(&self) -> UserType {
        self.role
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            role: self.role,
            state: self.state.name().to_string(),
            pending: match &self.state {
                AuthState::OtpPending { pending, .. } => Some(pending.clone()),
                _ => None,
            },
        }
    }

    /// Back to a freshly mounted form. Any outstanding OTP is forgotten.
    pub fn reset(&mut self) {
        self.state = AuthState::Login;
    }

    pub fn toggle(&mut self) {
        self.state = match &self.state {
            AuthState::Login | AuthState::OtpPending { .. } => AuthState::Signup,
            AuthState::Signup => AuthState::Login,
            AuthState::Authenticated(user) => AuthState::Authenticated(user.clone()),
        };
    }

    pub fn login(
        &mut self,
        credentials: LoginForm,
        identity: &dyn IdentityProvider,
    ) -> DomainResult<User> {
        if self.state != AuthState::Login {
            return Err(self.invalid("log in"));
        }

        let user = identity.login(self.role, &credentials);
        self.state = AuthState::Authenticated(user.clone());
        Ok(user)
    }

    /// Returns the generated OTP so the caller can surface it.
    pub fn signup(&mut self, form: SignupForm, sender: &dyn OtpSender) -> DomainResult<String> {
        if self.state != AuthState::Signup {
            return Err(self.invalid("sign up"));
        }
        if !is_valid_aadhar(&form.aadhar) {
            return Err(DomainError::InvalidAadhar);
        }

        let pending = PendingSignup::from_form(self.role, form);
        let otp = sender.generate();
        sender.send(&pending, &otp)?;

        self.state = AuthState::OtpPending {
            pending,
            otp: otp.clone(),
        };
        Ok(otp)
    }

    pub fn verify_otp(
        &mut self,
        entered: &str,
        identity: &dyn IdentityProvider,
    ) -> DomainResult<User> {
        let user = match &self.state {
            AuthState::OtpPending { pending, otp } => {
                if entered != otp {
                    return Err(DomainError::OtpMismatch);
                }
                identity.register(pending)
            }
            _ => return Err(self.invalid("verify an OTP")),
        };

        self.state = AuthState::Authenticated(user.clone());
        Ok(user)
    }

    fn invalid(&self, action: &'static str) -> DomainError {
        DomainError::InvalidTransition {
            flow: self.role.as_str(),
            action,
            state: self.state.name(),
        }
    }
}
