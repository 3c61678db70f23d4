//! # pesan-shared
//!
//! Domain types shared between the storage layer, the authentication
//! client, and the application: the persisted session record, the chat
//! message record, and app-wide constants.

pub mod constants;
pub mod types;

pub use types::{MessageRecord, SessionRecord};
