/// User interface pieces
///
/// - `dropzone.rs` - image drop area with preview
/// - `toast.rs` - transient notifications
/// - `alert.rs` - blocking native dialogs

pub mod alert;
pub mod dropzone;
pub mod toast;
