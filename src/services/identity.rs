use uuid::Uuid;

use crate::models::{LoginForm, PendingSignup, User, UserType};

/// Issues the identity a successful auth flow hands to the session.
///
/// Swap the implementation to put a real authentication backend behind the
/// same call sites.
pub trait IdentityProvider: Send + Sync {
    /// Identity for a returning user.
    fn login(&self, role: UserType, credentials: &LoginForm) -> User;

    /// Identity for a freshly verified signup.
    fn register(&self, signup: &PendingSignup) -> User;
}

/// STUB: accepts any credentials and checks no password.
///
/// Login yields a fixed demo account per role. Signup yields a random id.
pub struct MockIdentityProvider;

impl MockIdentityProvider {
    fn demo_account(role: UserType) -> (&'static str, &'static str) {
        match role {
            UserType::Recruiter => ("1", "John Recruiter"),
            UserType::Worker => ("2", "Jane Worker"),
        }
    }
}

impl IdentityProvider for MockIdentityProvider {
    fn login(&self, role: UserType, credentials: &LoginForm) -> User {
        let (id, name) = Self::demo_account(role);
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: credentials.email.clone(),
            phone: credentials.phone.clone(),
            user_type: role,
        }
    }

    fn register(&self, signup: &PendingSignup) -> User {
        User {
            id: Uuid::new_v4().to_string(),
            name: signup.name.clone(),
            email: signup.email.clone(),
            phone: signup.phone.clone(),
            user_type: signup.role,
        }
    }
}
