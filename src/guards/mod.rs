pub mod auth;
pub mod role;

pub use auth::SessionGuard;
pub use role::{RecruiterGuard, WorkerGuard};
