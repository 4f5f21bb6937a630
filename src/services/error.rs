use thiserror::Error;

use crate::application::error::ApplicationError;

pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Non-2xx answer. `message` is the server's `error` field or `Error: <status>`.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    NetworkError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unexpected response: {0}")]
    DecodeError(String),
}

impl From<SubmissionError> for ApplicationError {
    fn from(error: SubmissionError) -> Self {
        ApplicationError::NetworkOrServer(error.to_string())
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SubmissionError::NetworkError("Request timeout".to_string())
        } else if error.is_connect() {
            SubmissionError::NetworkError(format!("Connection failed: {}", error))
        } else if error.is_decode() {
            SubmissionError::DecodeError(error.to_string())
        } else if let Some(status) = error.status() {
            SubmissionError::Rejected {
                status: status.as_u16(),
                message: format!("Error: {}", status.as_u16()),
            }
        } else {
            let message = error.to_string();
            if message.is_empty() {
                SubmissionError::NetworkError(UNKNOWN_ERROR_MESSAGE.to_string())
            } else {
                SubmissionError::NetworkError(message)
            }
        }
    }
}
