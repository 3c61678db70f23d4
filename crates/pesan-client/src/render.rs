//! Pure mapping from a message record to a visual bubble description.
//!
//! No state, no side effects; the terminal UI turns the [`Bubble`] into
//! styled lines.

use chrono::Local;

use pesan_shared::MessageRecord;

/// Horizontal placement of a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Visual description of one message bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub align: Align,
    /// Own messages get the tinted background.
    pub tinted: bool,
    /// Image URI, rendered first when present.
    pub image: Option<String>,
    /// Body text, rendered when non-empty.
    pub text: Option<String>,
    /// Hours:minutes rendition of the creation time (local).
    pub time: String,
}

/// Map a message record and an "is own message" flag to a bubble.
///
/// Records carrying both an image and text render both; records carrying
/// neither still render the timestamp line.
pub fn bubble(message: &MessageRecord, is_own: bool) -> Bubble {
    Bubble {
        align: if is_own { Align::Right } else { Align::Left },
        tinted: is_own,
        image: message.image.clone(),
        text: if message.text.is_empty() {
            None
        } else {
            Some(message.text.clone())
        },
        time: message
            .created_at
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(text: &str, image: Option<&str>) -> MessageRecord {
        MessageRecord {
            id: "1700000000000".into(),
            text: text.into(),
            image: image.map(String::from),
            sender: "a@b.com".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn own_messages_are_right_aligned_and_tinted() {
        let b = bubble(&record("halo", None), true);
        assert_eq!(b.align, Align::Right);
        assert!(b.tinted);
    }

    #[test]
    fn other_messages_are_left_aligned_and_neutral() {
        let b = bubble(&record("halo", None), false);
        assert_eq!(b.align, Align::Left);
        assert!(!b.tinted);
    }

    #[test]
    fn renders_whichever_parts_are_present() {
        let both = bubble(&record("caption", Some("file:///p.jpg")), false);
        assert_eq!(both.image.as_deref(), Some("file:///p.jpg"));
        assert_eq!(both.text.as_deref(), Some("caption"));

        let neither = bubble(&record("", None), false);
        assert!(neither.image.is_none());
        assert!(neither.text.is_none());
        assert!(!neither.time.is_empty());
    }

    #[test]
    fn time_is_truncated_to_hours_minutes() {
        let b = bubble(&record("x", None), false);
        assert_eq!(b.time.len(), 5);
        assert_eq!(b.time.as_bytes()[2], b':');
    }
}
