use crate::ModelError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};

/// Extension accepted by the knowledge-base file picker.
pub const KNOWLEDGE_BASE_EXTENSION: &str = "txt";

/// A user-selected knowledge-base file.
///
/// Selection only applies the picker's `.txt` filter; the file is read when it
/// is uploaded, and its content is never inspected by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    path: PathBuf,
    file_name: String,
}

impl UploadedFile {
    #[track_caller]
    pub fn select(path: impl Into<PathBuf>) -> Result<Self, ModelError> {
        let path = path.into();

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| ModelError::Validation {
                message: format!("Selected path has no file name: {}", path.display()),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let is_text_file = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(KNOWLEDGE_BASE_EXTENSION));

        if !is_text_file {
            return Err(ModelError::Validation {
                message: format!("Only .{KNOWLEDGE_BASE_EXTENSION} files can be uploaded: {file_name}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { path, file_name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}
