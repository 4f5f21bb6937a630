use tracing::info;

use crate::{adapters::state::AppState, application::error::ApplicationError};

pub struct HealthController;

impl HealthController {
    /// GET {base}/health
    pub async fn health_check(app_state: &AppState) -> Result<String, ApplicationError> {
        info!("Health check against {}", app_state.config.api_base_url);

        let status = app_state.verification_service.health().await?;
        println!("{}: {}", app_state.config.api_base_url, status);
        Ok(status)
    }
}
