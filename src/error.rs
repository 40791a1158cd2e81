use thiserror::Error;

use crate::store::PersistenceError;

/// Everything a session event can fail with.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Please enter a valid 12-digit Aadhar number")]
    InvalidAadhar,

    #[error("Invalid OTP. Please try again.")]
    OtpMismatch,

    #[error("Invalid job posting: {field} {message}")]
    InvalidJob { field: String, message: String },

    #[error("You have already applied for this job!")]
    AlreadyApplied { job_id: String },

    #[error("Job not found: {job_id}")]
    JobNotFound { job_id: String },

    #[error("Cannot {action} while the {flow} flow is in the {state} state")]
    InvalidTransition {
        flow: &'static str,
        action: &'static str,
        state: &'static str,
    },

    #[error("Profile is not in edit mode")]
    NotEditing,

    #[error("Please log in first")]
    NotAuthenticated,

    #[error("This action is only available to {expected} accounts")]
    WrongRole { expected: &'static str },

    #[error("Please select an image file")]
    UnsupportedImage { mime_type: String },

    #[error("Image size should be less than {max_mb}MB")]
    ImageTooLarge { size: usize, max_mb: usize },

    #[error("Error reading image file")]
    ImageRead,

    #[error("Unknown page: {0}")]
    UnknownView(String),

    #[error("Unknown account type: {0}")]
    UnknownRole(String),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl DomainError {
    pub fn invalid_job(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidJob {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn already_applied(job_id: impl Into<String>) -> Self {
        Self::AlreadyApplied {
            job_id: job_id.into(),
        }
    }

    pub fn job_not_found(job_id: impl Into<String>) -> Self {
        Self::JobNotFound {
            job_id: job_id.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
