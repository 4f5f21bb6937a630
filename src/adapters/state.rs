use std::sync::Arc;

use crate::{
    application::services::VerificationService,
    domain::config::{client::ClientConfig, policy::UploadPolicy},
    services,
};

#[derive(Clone)]
pub struct AppState {
    pub config: ClientConfig,
    pub policy: UploadPolicy,
    pub verification_service: Arc<dyn VerificationService>,
}

impl AppState {
    pub fn new(config: ClientConfig, policy: UploadPolicy) -> Self {
        let verification_service = services::create_verification_service(&config);
        Self {
            config,
            policy,
            verification_service,
        }
    }
}
