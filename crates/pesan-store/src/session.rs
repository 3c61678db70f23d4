//! Typed helpers for the persisted session record.

use pesan_shared::constants::KEY_USER;
use pesan_shared::SessionRecord;

use crate::database::Database;
use crate::error::{Result, StoreError};

impl Database {
    /// Read the session record, or `None` when nobody is logged in.
    ///
    /// A malformed stored value surfaces as [`StoreError::Corrupt`]; the
    /// caller decides whether to degrade (routing treats it as logged out).
    pub fn load_session(&self) -> Result<Option<SessionRecord>> {
        let Some(raw) = self.get_item(KEY_USER)? else {
            return Ok(None);
        };
        let session = serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            key: KEY_USER,
            source,
        })?;
        Ok(Some(session))
    }

    /// Persist the session record after a successful login.
    pub fn save_session(&self, session: &SessionRecord) -> Result<()> {
        let raw = serde_json::to_string(session).map_err(|source| StoreError::Corrupt {
            key: KEY_USER,
            source,
        })?;
        self.set_item(KEY_USER, &raw)
    }

    /// Remove the session record on logout. Returns whether one existed.
    pub fn clear_session(&self) -> Result<bool> {
        self.remove_item(KEY_USER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();
        (dir, db)
    }

    #[test]
    fn absent_session_is_none() {
        let (_dir, db) = open_db();
        assert!(db.load_session().unwrap().is_none());
    }

    #[test]
    fn session_round_trip() {
        let (_dir, db) = open_db();
        let session = SessionRecord {
            uid: "u1".into(),
            email: "a@b.com".into(),
        };
        db.save_session(&session).unwrap();
        assert_eq!(db.load_session().unwrap(), Some(session));
    }

    #[test]
    fn corrupt_session_is_typed_error() {
        let (_dir, db) = open_db();
        db.set_item(KEY_USER, "not json at all").unwrap();
        let err = db.load_session().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { key: "user", .. }));
    }

    #[test]
    fn clear_session_removes_record() {
        let (_dir, db) = open_db();
        let session = SessionRecord {
            uid: "u1".into(),
            email: "a@b.com".into(),
        };
        db.save_session(&session).unwrap();
        assert!(db.clear_session().unwrap());
        assert!(db.load_session().unwrap().is_none());
        assert!(!db.clear_session().unwrap());
    }
}
