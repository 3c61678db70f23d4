//! # pesan-store
//!
//! Local key-value storage for the Pesan application, backed by SQLite.
//!
//! The store mirrors the semantics of a mobile platform key-value store:
//! every value is a whole JSON document under a fixed string key, written
//! wholesale on each change. The crate exposes a synchronous [`Database`]
//! handle wrapping a `rusqlite::Connection`, with a raw item API plus typed
//! helpers for the session record and the message history.

pub mod database;
pub mod history;
pub mod kv;
pub mod migrations;
pub mod session;

mod error;

pub use database::Database;
pub use error::StoreError;
