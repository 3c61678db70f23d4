//! Launch-time routing based on the stored session record.

use tracing::warn;

use pesan_shared::SessionRecord;
use pesan_store::Database;

/// Where the app goes after launch.
#[derive(Debug, PartialEq, Eq)]
pub enum Route {
    /// No usable session: show the login surface.
    Login,
    /// A session exists: go straight to chat as this user.
    Chat(SessionRecord),
}

/// Decide the route from the persisted session record.
///
/// A malformed stored value degrades to [`Route::Login`] with a warning;
/// routing never hard-fails on storage contents.
pub fn resolve_route(db: &Database) -> Route {
    match db.load_session() {
        Ok(Some(session)) => Route::Chat(session),
        Ok(None) => Route::Login,
        Err(e) => {
            warn!(error = %e, "could not read session record, treating as logged out");
            Route::Login
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pesan_shared::constants::KEY_USER;

    fn open_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();
        (dir, db)
    }

    #[test]
    fn absent_session_routes_to_login() {
        let (_dir, db) = open_db();
        assert_eq!(resolve_route(&db), Route::Login);
    }

    #[test]
    fn stored_session_routes_to_chat() {
        let (_dir, db) = open_db();
        let session = SessionRecord {
            uid: "u1".into(),
            email: "a@b.com".into(),
        };
        db.save_session(&session).unwrap();
        assert_eq!(resolve_route(&db), Route::Chat(session));
    }

    #[test]
    fn malformed_session_routes_to_login() {
        let (_dir, db) = open_db();
        db.set_item(KEY_USER, "{\"uid\": 42}").unwrap();
        assert_eq!(resolve_route(&db), Route::Login);
    }
}
