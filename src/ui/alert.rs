use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::error::SelectionError;

/// Block on a native warning dialog for a rejected file
pub fn invalid_file(error: &SelectionError) {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Evolution Connect")
        .set_description(error.to_string())
        .set_buttons(MessageButtons::Ok)
        .show();
}
