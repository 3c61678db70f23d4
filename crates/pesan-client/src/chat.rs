//! Chat screen: in-memory message sequence, composer, and persistence.
//!
//! The screen exclusively owns the newest-first message sequence for its
//! lifetime; the persisted copy under the `messages` key is a full-snapshot
//! mirror rewritten after every mutation.

use chrono::Utc;
use tracing::error;

use pesan_shared::constants::IMAGE_QUALITY;
use pesan_shared::{MessageRecord, SessionRecord};
use pesan_store::Database;

use crate::gallery::Gallery;

/// State of the chat screen.
pub struct ChatScreen<'a> {
    db: &'a Database,
    session: SessionRecord,
    /// Newest-first message sequence, owned by this screen instance.
    messages: Vec<MessageRecord>,
    /// Composer input buffer.
    pub input: String,
    /// Pending blocking dialog text (e.g. gallery permission denied).
    pub alert: Option<String>,
}

impl<'a> ChatScreen<'a> {
    /// Enter the chat screen: load the persisted history once.
    ///
    /// A corrupt stored history is logged and dropped; the screen starts
    /// empty for this session.
    pub fn mount(db: &'a Database, session: SessionRecord) -> Self {
        let messages = match db.load_history() {
            Ok(messages) => messages,
            Err(e) => {
                error!(error = %e, "failed to load chat history");
                Vec::new()
            }
        };

        Self {
            db,
            session,
            messages,
            input: String::new(),
            alert: None,
        }
    }

    pub fn session(&self) -> &SessionRecord {
        &self.session
    }

    /// The message sequence, newest first.
    pub fn messages(&self) -> &[MessageRecord] {
        &self.messages
    }

    /// Send the composer contents as a text message.
    ///
    /// A whitespace-only buffer is a no-op. The stored body is the raw
    /// (untrimmed) input; only the emptiness check trims.
    pub fn send_text(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }

        let body = std::mem::take(&mut self.input);
        let record = self.make_record(body, None);
        self.messages.insert(0, record);
        self.persist();
    }

    /// Send an image picked through the gallery boundary.
    ///
    /// Permission denied raises a blocking alert and changes nothing;
    /// a cancelled pick changes nothing.
    pub fn send_image(&mut self, gallery: &mut dyn Gallery) {
        if !gallery.request_permission() {
            self.alert = Some("Izin akses gallery diperlukan!".to_string());
            return;
        }

        let Some(picked) = gallery.pick_image(IMAGE_QUALITY) else {
            return;
        };

        let record = self.make_record(String::new(), Some(picked.uri));
        self.messages.insert(0, record);
        self.persist();
    }

    /// Stamp a new record with the active session and wall-clock time.
    fn make_record(&self, text: String, image: Option<String>) -> MessageRecord {
        let now = Utc::now();
        MessageRecord {
            id: now.timestamp_millis().to_string(),
            text,
            image,
            sender: self.session.email.clone(),
            created_at: now,
        }
    }

    /// Mirror the in-memory sequence to storage.
    ///
    /// Skipped while the sequence is empty so a save racing the mount-time
    /// load cannot clobber previously stored history with an empty value.
    /// A write failure is logged and the in-memory state kept; memory and
    /// storage then diverge until the next successful save.
    fn persist(&self) {
        if self.messages.is_empty() {
            return;
        }
        if let Err(e) = self.db.save_history(&self.messages) {
            error!(error = %e, "failed to persist chat history");
        }
    }
}
