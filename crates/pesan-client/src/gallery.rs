//! Gallery boundary: permission query plus picker invocation.
//!
//! Where an OS photo picker is unavailable (a terminal), the "picked"
//! image is a file path typed into the composer. The trait keeps the
//! permission / cancel / pick contract intact so the chat screen can be
//! exercised with a mock.

use std::path::Path;

use tracing::warn;

/// Result of a completed pick.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedImage {
    /// Local `file://` URI of the selected image.
    pub uri: String,
    /// Compression quality hint (fraction of original).
    pub quality: f32,
}

/// Anything that can ask for gallery access and produce a picked image.
pub trait Gallery {
    /// Ask the platform for gallery permission.
    fn request_permission(&mut self) -> bool;

    /// Open the picker. `None` means the user cancelled.
    fn pick_image(&mut self, quality: f32) -> Option<PickedImage>;
}

/// Picker backed by a path typed into the composer (`/image <path>`).
pub struct PathGallery {
    selection: Option<String>,
}

impl PathGallery {
    pub fn new(selection: Option<String>) -> Self {
        Self { selection }
    }
}

impl Gallery for PathGallery {
    /// Permission maps to the process being able to list the directory the
    /// selection lives in.
    fn request_permission(&mut self) -> bool {
        let Some(ref selection) = self.selection else {
            // Nothing selected yet; permission itself is not the problem.
            return true;
        };
        let parent = Path::new(selection).parent().unwrap_or(Path::new("."));
        std::fs::read_dir(parent).is_ok()
    }

    fn pick_image(&mut self, quality: f32) -> Option<PickedImage> {
        let selection = self.selection.take()?;
        let path = Path::new(&selection);
        if !path.is_file() {
            warn!(path = %selection, "selected image does not exist, treating as cancelled");
            return None;
        }
        let absolute = path
            .canonicalize()
            .unwrap_or_else(|_| path.to_path_buf());
        Some(PickedImage {
            uri: format!("file://{}", absolute.display()),
            quality,
        })
    }
}
