pub mod user;
pub mod job;
pub mod application;

pub use user::*;
pub use job::*;
pub use application::*;
