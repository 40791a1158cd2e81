pub mod auth;

pub use auth::{AuthFlow, AuthSnapshot, AuthState};
