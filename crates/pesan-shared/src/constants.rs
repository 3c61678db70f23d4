/// Application name
pub const APP_NAME: &str = "Pesan";

/// Storage key for the persisted session record
pub const KEY_USER: &str = "user";

/// Storage key for the persisted message history
pub const KEY_MESSAGES: &str = "messages";

/// Compression quality hint handed to the gallery picker
pub const IMAGE_QUALITY: f32 = 0.7;

/// Filename of the local storage database
pub const DB_FILE_NAME: &str = "pesan.db";
