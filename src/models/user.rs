use serde::{Deserialize, Serialize};
use rocket_okapi::okapi::schemars;
use rocket_okapi::okapi::schemars::JsonSchema;
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Recruiter,
    Worker,
}

impl UserType {
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Recruiter => "recruiter",
            UserType::Worker => "worker",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recruiter" => Ok(UserType::Recruiter),
            "worker" => Ok(UserType::Worker),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

/// The one live identity of a session. This is also the persisted record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

impl User {
    pub fn is(&self, role: UserType) -> bool {
        self.user_type == role
    }
}

/// Login form. Any credentials are accepted by the mock identity provider.
#[derive(Debug, Deserialize, Default, Clone, JsonSchema)]
pub struct LoginForm {
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, Default, Clone, JsonSchema)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
    pub aadhar: String,
    pub referral: Option<String>,
    pub location: Option<String>,
}

/// What survives of a signup form while the OTP is outstanding.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct PendingSignup {
    pub role: UserType,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub referral: Option<String>,
    pub location: Option<String>,
}

impl PendingSignup {
    pub fn from_form(role: UserType, form: SignupForm) -> Self {
        PendingSignup {
            role,
            name: form.name,
            email: form.email,
            phone: form.phone,
            referral: form.referral.filter(|r| !r.trim().is_empty()),
            location: form.location.filter(|l| !l.trim().is_empty()),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, JsonSchema)]
pub struct VerifyOtpDto {
    pub otp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_stored_field_names() {
        let user = User {
            id: "2".to_string(),
            name: "Jane Worker".to_string(),
            email: "jane@example.com".to_string(),
            phone: "9876543210".to_string(),
            user_type: UserType::Worker,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["type"], "worker");
        assert_eq!(value["phone"], "9876543210");

        let back: User = serde_json::from_value(value).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn role_parses_only_known_names() {
        assert_eq!("recruiter".parse::<UserType>().unwrap(), UserType::Recruiter);
        assert!(matches!(
            "admin".parse::<UserType>(),
            Err(DomainError::UnknownRole(r)) if r == "admin"
        ));
    }

    #[test]
    fn blank_optional_signup_fields_are_dropped() {
        let form = SignupForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            aadhar: "123456789012".to_string(),
            referral: Some("  ".to_string()),
            location: Some("Pune".to_string()),
            ..Default::default()
        };

        let pending = PendingSignup::from_form(UserType::Worker, form);
        assert_eq!(pending.referral, None);
        assert_eq!(pending.location.as_deref(), Some("Pune"));
    }
}
