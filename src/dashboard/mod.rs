pub mod catalog;
pub mod recruiter;
pub mod worker;

pub use recruiter::{RecruiterDashboard, RecruiterStats};
pub use worker::{JobListing, WorkerDashboard, WorkerStats};
