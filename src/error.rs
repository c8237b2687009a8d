use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Invalid EMV tag '{0}': expected two ASCII digits")]
    InvalidTag(String),
    #[error("Field {tag} is {len} characters long; EMV fields hold at most 99")]
    FieldTooLong { tag: String, len: usize },
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
    #[error("Checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: String, found: String },
    #[error("PIX key not configured for organization '{0}'")]
    PixKeyNotConfigured(String),
}

impl PixError {
    /// Machine-readable code returned to API callers.
    pub fn error_code(&self) -> &'static str {
        match self {
            PixError::ValidationError(_) => "invalid_request",
            PixError::PixKeyNotConfigured(_) => "pix_key_not_configured",
            PixError::InvalidTag(_)
            | PixError::FieldTooLong { .. }
            | PixError::InvalidPayload(_)
            | PixError::ChecksumMismatch { .. } => "invalid_payload",
            PixError::CsvError(_) | PixError::IoError(_) => "internal_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, PixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PixError::PixKeyNotConfigured("org-1".to_string()).error_code(),
            "pix_key_not_configured"
        );
        assert_eq!(
            PixError::ValidationError("bad".to_string()).error_code(),
            "invalid_request"
        );
        assert_eq!(
            PixError::FieldTooLong {
                tag: "26".to_string(),
                len: 120
            }
            .error_code(),
            "invalid_payload"
        );
        assert_eq!(
            PixError::IoError(std::io::Error::other("broken pipe")).error_code(),
            "internal_error"
        );
        assert_eq!(
            PixError::ChecksumMismatch {
                expected: "869F".to_string(),
                found: "0000".to_string()
            }
            .error_code(),
            "invalid_payload"
        );
    }
}
