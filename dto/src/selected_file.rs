use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A file picked by the user, as declared by the browser or the multipart request.
/// Only metadata is kept: the content never leaves its input element or temporary file.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct SelectedFile {
    name: String,
    mime_type: String,
    size: u64,
}

impl SelectedFile {
    pub fn new(name: String, mime_type: String, size: u64) -> Self {
        Self {
            name,
            mime_type,
            size,
        }
    }
}
