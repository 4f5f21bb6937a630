mod error;
mod http_verification_service;

pub use error::{SubmissionError, UNKNOWN_ERROR_MESSAGE};
pub use http_verification_service::HttpVerificationService;

use std::sync::Arc;

use crate::{application::services::VerificationService, domain::config::client::ClientConfig};

pub fn create_verification_service(config: &ClientConfig) -> Arc<dyn VerificationService> {
    Arc::new(HttpVerificationService::new(config))
}
