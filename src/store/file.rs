use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{decode_record, encode_record, PersistenceError, SessionStore};
use crate::models::User;

/// Keeps the record in a single JSON file, `{"<key>": <user>}`.
pub struct FileSessionStore {
    path: PathBuf,
    key: String,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        FileSessionStore {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<User>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode_record(&raw, &self.key),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, user: &User) -> Result<(), PersistenceError> {
        let body = encode_record(user, &self.key)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Rename over the old record so a failed write never leaves half a file.
        let tmp = self.temp_path();
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserType;
    use tempfile::tempdir;

    fn recruiter() -> User {
        User {
            id: "1".to_string(),
            name: "Ravi Events".to_string(),
            email: "ravi@example.com".to_string(),
            phone: "9123456780".to_string(),
            user_type: UserType::Recruiter,
        }
    }

    #[test]
    fn missing_file_loads_as_logged_out() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"), "jobby-user");
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_overwrites_and_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested/session.json"), "jobby-user");

        store.save(&recruiter()).unwrap();
        let mut renamed = recruiter();
        renamed.name = "Ravi Weddings".to_string();
        store.save(&renamed).unwrap();

        assert_eq!(store.load().unwrap(), Some(renamed));
        assert!(!store.temp_path().exists());

        let raw = fs::read_to_string(store.path()).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["jobby-user"]["type"], "recruiter");
    }

    #[test]
    fn corrupt_file_is_reported_as_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::new(&path, "jobby-user");
        assert!(matches!(store.load(), Err(PersistenceError::Malformed(_))));
    }

    #[test]
    fn clear_removes_record_and_tolerates_absence() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"), "jobby-user");

        store.save(&recruiter()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }
}
