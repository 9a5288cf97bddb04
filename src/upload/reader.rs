//! Selected image reader
//!
//! Reads the file behind a validated selection off the UI thread.
//! The preview data URL is built from these bytes by the selector.

use tracing::debug;

use super::selector::ReadRequest;
use crate::error::SelectionError;
use crate::state::data::ImageFile;

/// Read the file named by `request`
///
/// # Returns
/// * `Ok(ImageFile)` - the raw file, ready to be previewed and submitted
/// * `Err(SelectionError::Read)` - the file vanished or is unreadable
pub async fn load(request: ReadRequest) -> Result<ImageFile, SelectionError> {
    let ReadRequest {
        path, media_type, ..
    } = request;

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return Err(SelectionError::Read {
                path,
                reason: e.to_string(),
            })
        }
    };

    debug!(path = %path.display(), bytes = bytes.len(), "read selected file");

    Ok(ImageFile::new(path, media_type, bytes))
}
