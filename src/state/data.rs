//! Shared data structures for the form state
//!
//! These structs represent the data model that flows between
//! the image selector, the form and the gateway.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use iced::widget::image::Handle;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Media type used for anything the extension table does not know
const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Declared media type of a file, derived from its extension
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType(String);

impl MediaType {
    /// Guess the media type from the file extension
    ///
    /// Only the extension is consulted, the same way a browser fills in
    /// `File.type`. The content is never sniffed.
    pub fn from_path(path: &Path) -> Self {
        let mime = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(UNKNOWN_MEDIA_TYPE);
        Self(mime.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Matches the `image/*` wildcard
    pub fn is_image(&self) -> bool {
        self.0
            .split_once('/')
            .is_some_and(|(top, sub)| top.eq_ignore_ascii_case("image") && !sub.is_empty())
    }
}

impl From<&str> for MediaType {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The raw file handed to the form once a selection has been read
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Full path to the selected file
    pub path: PathBuf,
    /// Filename only (e.g., "foto.png")
    pub name: String,
    /// Declared media type (e.g., "image/png")
    pub media_type: MediaType,
    /// File contents, shared so messages stay cheap to clone
    pub bytes: Arc<[u8]>,
}

impl ImageFile {
    pub fn new(path: PathBuf, media_type: MediaType, bytes: Vec<u8>) -> Self {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Self {
            path,
            name,
            media_type,
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Base64 body of the file, as sent in the payload
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

// Keep logs readable: never dump the bytes
impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("path", &self.path)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Display-only rendering of the selected image
#[derive(Clone)]
pub struct ImagePreview {
    /// Shares its bytes with the file handed to the form
    file: ImageFile,
    /// Render handle for the image widget
    pub handle: Handle,
}

impl ImagePreview {
    /// Build the preview for a file that has just been read
    pub fn from_file(file: &ImageFile) -> Self {
        let handle = Handle::from_bytes(file.bytes.to_vec());
        Self {
            file: file.clone(),
            handle,
        }
    }

    pub fn path(&self) -> &Path {
        &self.file.path
    }

    /// `data:<media-type>;base64,<payload>`, encoded on demand
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.file.media_type, self.file.to_base64())
    }
}

impl fmt::Debug for ImagePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePreview")
            .field("path", &self.file.path)
            .finish()
    }
}
