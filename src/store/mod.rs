//! Durable storage for the session's single user record.
//!
//! The record is the whole `User`, overwritten on every save. Nothing else the
//! session holds (jobs, applications, profile images) is ever written here.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use thiserror::Error;

use crate::models::User;

/// Key the record is stored under, shared with earlier builds.
pub const DEFAULT_STORAGE_KEY: &str = "jobby-user";

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored session record is malformed: {0}")]
    Malformed(String),

    #[error("Session storage is unavailable")]
    Unavailable,
}

pub trait SessionStore: Send + Sync {
    /// Returns `Ok(None)` when no record is stored.
    fn load(&self) -> Result<Option<User>, PersistenceError>;

    fn save(&self, user: &User) -> Result<(), PersistenceError>;

    /// Clearing an absent record succeeds.
    fn clear(&self) -> Result<(), PersistenceError>;
}

fn decode_record(raw: &str, key: &str) -> Result<Option<User>, PersistenceError> {
    let document: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| PersistenceError::Malformed(e.to_string()))?;

    let document = document
        .as_object()
        .ok_or_else(|| PersistenceError::Malformed("expected a JSON object".to_string()))?;

    let Some(record) = document.get(key) else {
        return Ok(None);
    };

    serde_json::from_value(record.clone())
        .map(Some)
        .map_err(|e| PersistenceError::Malformed(e.to_string()))
}

fn encode_record(user: &User, key: &str) -> Result<String, PersistenceError> {
    let mut document = serde_json::Map::new();
    let record =
        serde_json::to_value(user).map_err(|e| PersistenceError::Malformed(e.to_string()))?;
    document.insert(key.to_string(), record);

    serde_json::to_string_pretty(&serde_json::Value::Object(document))
        .map_err(|e| PersistenceError::Malformed(e.to_string()))
}
