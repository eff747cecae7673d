use crate::selected_file::SelectedFile;
use derive_getters::Getters;
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

const MEBIBYTE: u64 = 1024 * 1024;
pub const MAX_IMAGE_SIZE: u64 = 5 * MEBIBYTE;
pub const MAX_AUDIO_SIZE: u64 = 10 * MEBIBYTE;
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/gif"];
pub const ALLOWED_AUDIO_TYPES: [&str; 2] = ["audio/mpeg", "audio/mp3"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileKind {
    Image,
    Audio,
}

impl FileKind {
    fn invalid_type_message(&self) -> &'static str {
        match self {
            FileKind::Image => "Por favor, selecione uma imagem válida (JPG, PNG ou GIF)",
            FileKind::Audio => "Por favor, selecione um arquivo MP3 válido",
        }
    }

    fn subject(&self) -> &'static str {
        match self {
            FileKind::Image => "A imagem",
            FileKind::Audio => "O arquivo de áudio",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FileError {
    #[error("{}", .kind.invalid_type_message())]
    InvalidFileType { kind: FileKind, mime_type: String },
    #[error("{} deve ter no máximo {}MB", .kind.subject(), .max_size / MEBIBYTE)]
    FileTooLarge {
        kind: FileKind,
        size: u64,
        max_size: u64,
    },
}

/// Limits applied to uploaded files, both in the browser and on the server.
#[derive(Debug, Getters, Serialize, Clone, PartialEq)]
pub struct UploadConfig {
    max_image_size: u64,
    max_audio_size: u64,
    allowed_image_types: BTreeSet<String>,
    allowed_audio_types: BTreeSet<String>,
}

impl UploadConfig {
    pub fn new(
        max_image_size: u64,
        max_audio_size: u64,
        allowed_image_types: BTreeSet<String>,
        allowed_audio_types: BTreeSet<String>,
    ) -> Self {
        Self {
            max_image_size,
            max_audio_size,
            allowed_image_types,
            allowed_audio_types,
        }
    }

    pub fn max_size(&self, kind: FileKind) -> u64 {
        match kind {
            FileKind::Image => self.max_image_size,
            FileKind::Audio => self.max_audio_size,
        }
    }

    pub fn allowed_types(&self, kind: FileKind) -> &BTreeSet<String> {
        match kind {
            FileKind::Image => &self.allowed_image_types,
            FileKind::Audio => &self.allowed_audio_types,
        }
    }

    /// Value for the `accept` attribute of a file input.
    pub fn accept_attribute(&self, kind: FileKind) -> String {
        self.allowed_types(kind)
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Check the declared type first, then the size. A file exactly at the limit is accepted.
    pub fn check(&self, kind: FileKind, file: &SelectedFile) -> Result<(), FileError> {
        if !self.allowed_types(kind).contains(file.mime_type()) {
            return Err(FileError::InvalidFileType {
                kind,
                mime_type: file.mime_type().to_owned(),
            });
        }

        let max_size = self.max_size(kind);
        if *file.size() > max_size {
            return Err(FileError::FileTooLarge {
                kind,
                size: *file.size(),
                max_size,
            });
        }

        Ok(())
    }

    pub fn check_image(&self, file: &SelectedFile) -> Result<(), FileError> {
        self.check(FileKind::Image, file)
    }

    pub fn check_audio(&self, file: &SelectedFile) -> Result<(), FileError> {
        self.check(FileKind::Audio, file)
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self::new(
            MAX_IMAGE_SIZE,
            MAX_AUDIO_SIZE,
            ALLOWED_IMAGE_TYPES.iter().map(|t| t.to_string()).collect(),
            ALLOWED_AUDIO_TYPES.iter().map(|t| t.to_string()).collect(),
        )
    }
}
