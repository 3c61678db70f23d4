//! Typed helpers for the persisted message history.
//!
//! The history is a single JSON array under the `messages` key, newest
//! first. There is no incremental API: loads read the whole array, saves
//! overwrite it wholesale (last writer wins).

use pesan_shared::constants::KEY_MESSAGES;
use pesan_shared::MessageRecord;

use crate::database::Database;
use crate::error::{Result, StoreError};

impl Database {
    /// Read the full message history, newest first.
    ///
    /// An absent value yields an empty history. A malformed value surfaces
    /// as [`StoreError::Corrupt`]; the chat screen logs it and starts empty
    /// for that session.
    pub fn load_history(&self) -> Result<Vec<MessageRecord>> {
        let Some(raw) = self.get_item(KEY_MESSAGES)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            key: KEY_MESSAGES,
            source,
        })
    }

    /// Serialize and overwrite the entire persisted history.
    ///
    /// Unconditional, including for an empty slice; the caller holds the
    /// skip-on-empty guard (see the chat screen's persist step).
    pub fn save_history(&self, messages: &[MessageRecord]) -> Result<()> {
        let raw = serde_json::to_string(messages).map_err(|source| StoreError::Corrupt {
            key: KEY_MESSAGES,
            source,
        })?;
        self.set_item(KEY_MESSAGES, &raw)
    }
}
