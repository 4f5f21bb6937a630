use async_trait::async_trait;

use crate::{
    application::error::ApplicationError,
    domain::models::{
        document::{UploadReceipt, VerificationDocument},
        file::SelectedFile,
    },
};

#[async_trait]
pub trait VerificationService: Send + Sync {
    /// Sends one multipart upload. Never retried.
    async fn upload(
        &self,
        file: &SelectedFile,
        token: &str,
        email: &str,
    ) -> Result<Option<UploadReceipt>, ApplicationError>;
    async fn list_documents(&self, email: &str)
        -> Result<Vec<VerificationDocument>, ApplicationError>;
    async fn health(&self) -> Result<String, ApplicationError>;
}
