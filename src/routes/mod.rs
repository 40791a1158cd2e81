pub mod auth;
pub mod job;
pub mod session;
pub mod user;
pub mod worker;
