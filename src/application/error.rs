use thiserror::Error;

use crate::application::validator::RejectionReason;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Invalid file type. Only PNG, JPEG, and PDF files are allowed.")]
    InvalidType,

    #[error("File is too large. Maximum size is 10MB.")]
    InvalidSize,

    #[error("Missing required parameters in URL")]
    MissingParameters,

    #[error("{0}")]
    NetworkOrServer(String),

    /// Submit was asked for without an accepted file. Nothing changes.
    #[error("No valid file selected")]
    NotReady,

    #[error("Invalid verification link: {0}")]
    InvalidLink(String),

    #[error("Cannot read file: {0}")]
    FileAccess(String),
}

impl ApplicationError {
    /// Stable machine-readable name of the failure.
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationError::InvalidType => "invalid_type",
            ApplicationError::InvalidSize => "invalid_size",
            ApplicationError::MissingParameters => "missing_parameters",
            ApplicationError::NetworkOrServer(_) => "network_or_server_error",
            ApplicationError::NotReady => "not_ready",
            ApplicationError::InvalidLink(_) => "invalid_link",
            ApplicationError::FileAccess(_) => "file_access",
        }
    }
}

impl From<RejectionReason> for ApplicationError {
    fn from(reason: RejectionReason) -> Self {
        match reason {
            RejectionReason::InvalidType => ApplicationError::InvalidType,
            RejectionReason::InvalidSize => ApplicationError::InvalidSize,
        }
    }
}
