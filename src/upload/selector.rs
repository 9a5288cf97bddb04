use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::SelectionError;
use crate::state::data::{ImageFile, ImagePreview, MediaType};

/// Identifies one selection so late reads can be told apart from current ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// A validated selection waiting to be read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    pub ticket: Ticket,
    pub path: PathBuf,
    pub media_type: MediaType,
}

/// The image picker behind the drop zone
///
/// Goes from empty to previewing on the first successful read. Later
/// selections replace the preview; a rejected selection leaves it alone.
#[derive(Debug, Default)]
pub struct ImageSelector {
    preview: Option<ImagePreview>,
    /// Cosmetic only, drives the drop zone border
    dragging: bool,
    /// Ticket of the read whose result will be accepted
    pending: Option<Ticket>,
    next_ticket: u64,
}

impl ImageSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preview(&self) -> Option<&ImagePreview> {
        self.preview.as_ref()
    }

    pub fn is_previewing(&self) -> bool {
        self.preview.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_reading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn drag_entered(&mut self) {
        self.dragging = true;
    }

    pub fn drag_left(&mut self) {
        self.dragging = false;
    }

    /// Validate a picked or dropped file and issue a read for it
    ///
    /// A non-image file is rejected without touching the current preview.
    /// An accepted file supersedes any read still in flight.
    pub fn select(&mut self, path: PathBuf) -> Result<ReadRequest, SelectionError> {
        self.dragging = false;

        let media_type = MediaType::from_path(&path);
        if !media_type.is_image() {
            return Err(SelectionError::InvalidFileType {
                path,
                media_type: media_type.to_string(),
            });
        }

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;

        if let Some(previous) = self.pending.replace(ticket) {
            debug!(?previous, ?ticket, "superseding in-flight read");
        }

        info!(path = %path.display(), %media_type, "📷 reading selected image");

        Ok(ReadRequest {
            ticket,
            path,
            media_type,
        })
    }

    /// Apply a finished read
    ///
    /// Returns the file for the parent exactly once per accepted selection.
    /// Results for superseded tickets are dropped.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<ImageFile, SelectionError>,
    ) -> Result<Option<ImageFile>, SelectionError> {
        if self.pending != Some(ticket) {
            debug!(?ticket, "ignoring stale read");
            return Ok(None);
        }
        self.pending = None;

        let file = result?;
        self.preview = Some(ImagePreview::from_file(&file));
        info!(name = %file.name, bytes = file.len(), "✅ image ready");

        Ok(Some(file))
    }

    /// Forget the preview and any pending read
    pub fn clear(&mut self) {
        self.preview = None;
        self.pending = None;
        self.dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_ok(request: &ReadRequest) -> Result<ImageFile, SelectionError> {
        Ok(ImageFile::new(
            request.path.clone(),
            request.media_type.clone(),
            vec![0x89, b'P', b'N', b'G'],
        ))
    }

    #[test]
    fn test_starts_empty() {
        let selector = ImageSelector::new();
        assert!(!selector.is_previewing());
        assert!(!selector.is_dragging());
        assert!(!selector.is_reading());
    }

    #[test]
    fn test_valid_selection_yields_file_once() {
        let mut selector = ImageSelector::new();
        let request = selector.select(PathBuf::from("/photos/cat.png")).unwrap();
        assert!(selector.is_reading());

        let file = selector.complete(request.ticket, read_ok(&request)).unwrap();
        let file = file.expect("file handed to parent");
        assert_eq!(file.path, PathBuf::from("/photos/cat.png"));
        assert_eq!(file.media_type.as_str(), "image/png");
        assert!(selector.is_previewing());

        // Replaying the same completion must not hand the file over again
        let again = selector.complete(request.ticket, read_ok(&request)).unwrap();
        assert!(again.is_none());
    }

    #[test]
    fn test_invalid_selection_leaves_empty_state() {
        let mut selector = ImageSelector::new();
        let err = selector.select(PathBuf::from("/docs/report.pdf")).unwrap_err();

        assert!(matches!(err, SelectionError::InvalidFileType { .. }));
        assert_eq!(err.to_string(), "Por favor, selecione uma imagem válida.");
        assert!(!selector.is_previewing());
        assert!(!selector.is_reading());
    }

    #[test]
    fn test_vector_and_heic_images_accepted() {
        let mut selector = ImageSelector::new();
        for name in ["logo.svg", "photo.heic"] {
            let request = selector.select(PathBuf::from(name)).unwrap();
            assert!(request.media_type.is_image(), "{} rejected", name);
        }
    }

    #[test]
    fn test_invalid_selection_keeps_existing_preview() {
        let mut selector = ImageSelector::new();
        let request = selector.select(PathBuf::from("a.jpg")).unwrap();
        selector.complete(request.ticket, read_ok(&request)).unwrap();
        let before = selector.preview().unwrap().path().to_path_buf();

        assert!(selector.select(PathBuf::from("b.txt")).is_err());

        assert_eq!(selector.preview().unwrap().path(), before);
    }

    #[test]
    fn test_latest_selection_wins() {
        let mut selector = ImageSelector::new();
        let first = selector.select(PathBuf::from("first.png")).unwrap();
        let second = selector.select(PathBuf::from("second.gif")).unwrap();

        // Second read finishes first, then the stale first read arrives
        let file = selector.complete(second.ticket, read_ok(&second)).unwrap();
        assert_eq!(file.unwrap().name, "second.gif");

        let stale = selector.complete(first.ticket, read_ok(&first)).unwrap();
        assert!(stale.is_none());
        assert!(selector.preview().unwrap().data_url().starts_with("data:image/gif;base64,"));
    }

    #[test]
    fn test_failed_read_keeps_preview() {
        let mut selector = ImageSelector::new();
        let request = selector.select(PathBuf::from("ok.png")).unwrap();
        selector.complete(request.ticket, read_ok(&request)).unwrap();

        let request = selector.select(PathBuf::from("gone.png")).unwrap();
        let err = selector
            .complete(
                request.ticket,
                Err(SelectionError::Read {
                    path: request.path.clone(),
                    reason: "not found".into(),
                }),
            )
            .unwrap_err();

        assert!(matches!(err, SelectionError::Read { .. }));
        assert!(selector.is_previewing());
        assert!(!selector.is_reading());
    }

    #[test]
    fn test_drag_state_is_cosmetic() {
        let mut selector = ImageSelector::new();
        selector.drag_entered();
        assert!(selector.is_dragging());
        assert!(!selector.is_previewing());

        selector.drag_left();
        assert!(!selector.is_dragging());

        // Dropping clears the flag even when the file is rejected
        selector.drag_entered();
        let _ = selector.select(PathBuf::from("song.mp3"));
        assert!(!selector.is_dragging());
    }

    #[test]
    fn test_clear_discards_pending_read() {
        let mut selector = ImageSelector::new();
        let request = selector.select(PathBuf::from("late.png")).unwrap();
        selector.clear();

        let result = selector.complete(request.ticket, read_ok(&request)).unwrap();
        assert!(result.is_none());
        assert!(!selector.is_previewing());
    }
}
