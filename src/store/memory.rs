use std::sync::{Arc, Mutex};

use super::{decode_record, encode_record, PersistenceError, SessionStore, DEFAULT_STORAGE_KEY};
use crate::models::User;

/// In-process store. Clones share the same slot, so a caller can keep a handle
/// and inspect what the session wrote.
#[derive(Clone)]
pub struct MemorySessionStore {
    raw: Arc<Mutex<Option<String>>>,
    key: String,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        MemorySessionStore::new(DEFAULT_STORAGE_KEY)
    }
}

impl MemorySessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        MemorySessionStore {
            raw: Arc::new(Mutex::new(None)),
            key: key.into(),
        }
    }

    /// Starts with an arbitrary stored document under the default key,
    /// well-formed or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        MemorySessionStore {
            raw: Arc::new(Mutex::new(Some(raw.into()))),
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.lock().ok().and_then(|slot| slot.clone())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<User>, PersistenceError> {
        let slot = self.raw.lock().map_err(|_| PersistenceError::Unavailable)?;
        match slot.as_deref() {
            Some(raw) => decode_record(raw, &self.key),
            None => Ok(None),
        }
    }

    fn save(&self, user: &User) -> Result<(), PersistenceError> {
        let body = encode_record(user, &self.key)?;
        let mut slot = self.raw.lock().map_err(|_| PersistenceError::Unavailable)?;
        *slot = Some(body);
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        let mut slot = self.raw.lock().map_err(|_| PersistenceError::Unavailable)?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserType;

    #[test]
    fn clones_share_the_record() {
        let store = MemorySessionStore::default();
        let handle = store.clone();
        let user = User {
            id: "2".to_string(),
            name: "Jane Worker".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            user_type: UserType::Worker,
        };

        store.save(&user).unwrap();
        assert_eq!(handle.load().unwrap(), Some(user));

        handle.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        assert!(store.raw().is_none());
    }

    #[test]
    fn record_with_wrong_shape_is_malformed() {
        let store = MemorySessionStore::with_raw(r#"{"jobby-user": {"id": 7}}"#);
        assert!(matches!(store.load(), Err(PersistenceError::Malformed(_))));
    }

    #[test]
    fn non_object_document_is_malformed() {
        for raw in ["[1,2,3]", "\"x\"", "42", "null"] {
            let store = MemorySessionStore::with_raw(raw);
            assert!(
                matches!(store.load(), Err(PersistenceError::Malformed(_))),
                "{raw}"
            );
        }
    }

    #[test]
    fn record_lives_under_the_configured_key() {
        let store = MemorySessionStore::new("custom-user");
        let user = User {
            id: "1".to_string(),
            name: "John Recruiter".to_string(),
            email: "john@example.com".to_string(),
            phone: String::new(),
            user_type: UserType::Recruiter,
        };

        store.save(&user).unwrap();
        let raw = store.raw().unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["custom-user"]["name"], "John Recruiter");
        assert!(doc.get("jobby-user").is_none());
        assert_eq!(store.load().unwrap(), Some(user));
    }
}
