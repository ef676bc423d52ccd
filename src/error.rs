//! Error types for payload validation, menu selection, rendering and
//! filesystem access.
//!
//! Every one of these is recoverable: the menu controller reports it to the
//! user and carries on with the session.

use std::path::PathBuf;

use crate::payload::PayloadKind;

/// A required field was left empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} is missing required field(s): {}", .missing.join(", "))]
pub struct ValidationError {
    /// Kind of the rejected request
    pub kind: PayloadKind,
    /// Names of the empty required fields, in prompt order
    pub missing: Vec<&'static str>,
}

impl ValidationError {
    pub fn new(kind: PayloadKind, missing: Vec<&'static str>) -> Self {
        Self { kind, missing }
    }
}

/// A menu answer outside the valid range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid option '{input}'. Choose a number from 1 to {max}.")]
pub struct InvalidSelectionError {
    /// What the user typed
    pub input: String,
    /// Highest valid option number
    pub max: usize,
}

impl InvalidSelectionError {
    pub fn new(input: &str, max: usize) -> Self {
        Self {
            input: input.trim().to_string(),
            max,
        }
    }
}

/// The QR rendering collaborator failed.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Could not encode payload as a QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("Could not write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("QR image would be larger than {max}x{max} px")]
    ImageTooLarge { max: u32 },
}

/// Output directory could not be created or listed.
#[derive(Debug, thiserror::Error)]
pub enum FilesystemError {
    #[error("Failed to create output directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to list output directory '{}': {source}", .path.display())]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(PayloadKind::Contact, vec!["name", "phone"]);
        let msg = err.to_string();
        assert!(msg.contains("Contact"));
        assert!(msg.contains("name, phone"));
    }

    #[test]
    fn test_invalid_selection_display() {
        let err = InvalidSelectionError::new(" 12 ", 9);
        assert_eq!(err.input, "12");
        let msg = err.to_string();
        assert!(msg.contains("'12'"));
        assert!(msg.contains("1 to 9"));
    }

    #[test]
    fn test_render_error_from_io() {
        let err: RenderError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_filesystem_error_display() {
        let err = FilesystemError::ListDir {
            path: PathBuf::from("qr_codes"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("qr_codes"));
        assert!(msg.contains("gone"));
    }
}
