//! Raw item API over the `kv` table.
//!
//! Get / set / remove whole string values under fixed keys. The typed
//! helpers in [`crate::session`] and [`crate::history`] are built on top
//! of these.

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::database::Database;
use crate::error::Result;

impl Database {
    /// Read the value stored under `key`, or `None` if absent.
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn()
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Store `value` under `key`, replacing any previous value wholesale.
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.conn().execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Remove the value stored under `key`. Returns whether a value existed.
    pub fn remove_item(&self, key: &str) -> Result<bool> {
        let affected = self
            .conn()
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(affected > 0)
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
    fn get_absent_is_none() {
        let (_dir, db) = open_db();
        assert!(db.get_item("user").unwrap().is_none());
    }

    #[test]
    fn set_then_get() {
        let (_dir, db) = open_db();
        db.set_item("user", "{}").unwrap();
        assert_eq!(db.get_item("user").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn set_overwrites_wholesale() {
        let (_dir, db) = open_db();
        db.set_item("messages", "[1,2,3]").unwrap();
        db.set_item("messages", "[4]").unwrap();
        assert_eq!(db.get_item("messages").unwrap().as_deref(), Some("[4]"));
    }

    #[test]
    fn remove_reports_presence() {
        let (_dir, db) = open_db();
        assert!(!db.remove_item("user").unwrap());
        db.set_item("user", "{}").unwrap();
        assert!(db.remove_item("user").unwrap());
        assert!(db.get_item("user").unwrap().is_none());
    }
}
