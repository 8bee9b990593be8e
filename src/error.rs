//! Error types for the texture combinator.

use crate::types::FaceId;
use thiserror::Error;

/// Result type alias using CombinatorError.
pub type Result<T> = std::result::Result<T, CombinatorError>;

/// Main error type for atlas compositing operations.
#[derive(Error, Debug)]
pub enum CombinatorError {
    /// A face required for export has no image assigned.
    #[error("Missing face: {0}")]
    MissingFace(FaceId),

    /// A face name did not match any of the six faces.
    #[error("Unknown face '{0}': face name must be one of 'front', 'left', 'top', 'right', 'bottom', 'back'")]
    UnknownFace(String),

    /// Failed to read or decode a source image.
    #[error("Failed to decode image {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: image::ImageError,
    },

    /// A raster with zero dimensions or a malformed pixel buffer.
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Failed to encode the atlas.
    #[error("Encode error: {0}")]
    Encode(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse JSON data.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CombinatorError {
    /// Message shown to the user when an export is aborted.
    ///
    /// Missing faces get an actionable, face-specific message; every other
    /// error is shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            CombinatorError::MissingFace(face) => format!(
                "The '{face}' face is empty. Please drag an image onto the {face} face."
            ),
            other => other.to_string(),
        }
    }

    /// The face this error refers to, if any.
    pub fn face(&self) -> Option<FaceId> {
        match self {
            CombinatorError::MissingFace(face) => Some(*face),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_face_user_message() {
        let err = CombinatorError::MissingFace(FaceId::Back);
        assert_eq!(
            err.user_message(),
            "The 'Back' face is empty. Please drag an image onto the Back face."
        );
        assert_eq!(err.face(), Some(FaceId::Back));
    }

    #[test]
    fn test_other_errors_are_verbatim() {
        let err = CombinatorError::InvalidImage("0x0".to_string());
        assert_eq!(err.user_message(), err.to_string());
        assert_eq!(err.face(), None);
    }
}
