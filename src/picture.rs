use std::hash::{Hash, Hasher};

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use walkdir::DirEntry;

/// The platform directory that imported pictures live beneath.
pub fn pictures_directory() -> Utf8PathBuf {
    dirs::picture_dir()
        .expect("No pictures directory for this platform")
        .try_into()
        .expect("Invalid UTF-8 path.")
}

pub fn is_image(entry: &DirEntry) -> bool {
    matches!(
        entry.path().extension().and_then(|s| s.to_str()),
        Some("jpg" | "JPG" | "jpeg" | "JPEG" | "png" | "PNG" | "gif" | "webp" | "heif" | "heic")
    )
}

/// An in-memory picture reference, identified by its file name and where it
/// came from. The location on disk is derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PictureFile {
    pub name: String,
    pub origin: String,
}

impl PictureFile {
    pub fn new(name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
        }
    }

    /// The path of this picture beneath the platform pictures directory.
    pub fn file(&self) -> Utf8PathBuf {
        self.file_under(&pictures_directory())
    }

    pub fn file_under(&self, root: &Utf8Path) -> Utf8PathBuf {
        root.join(&self.name)
    }

    /// Canonical `file://` rendering of [`Self::file`]. Falls back to the
    /// joined path when the file does not exist on disk yet.
    pub fn uri(&self) -> String {
        self.uri_under(&pictures_directory())
    }

    pub fn uri_under(&self, root: &Utf8Path) -> String {
        let file = self.file_under(root);
        let canonical = file.canonicalize_utf8().unwrap_or(file);
        format!("file://{canonical}")
    }
}

// Identity is the (name, origin) pair alone. The derived path and uri are
// functions of those fields and are kept out of the comparison.
impl PartialEq for PictureFile {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.origin == other.origin
    }
}

impl Eq for PictureFile {}

impl Hash for PictureFile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.origin.hash(state);
    }
}
