use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    application::{error::ApplicationError, services::VerificationService},
    domain::{
        config::client::ClientConfig,
        models::{
            document::{UploadReceipt, VerificationDocument},
            file::SelectedFile,
        },
    },
    services::error::SubmissionError,
};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReceiptBody {
    message: Option<String>,
    #[serde(rename = "fileUrl")]
    file_url: Option<String>,
    key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DocumentBody {
    id: String,
    #[serde(rename = "fileName")]
    file_name: String,
    url: String,
    #[serde(rename = "uploadDate")]
    upload_date: String,
    #[serde(rename = "fileType")]
    file_type: String,
    size: u64,
}

#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
}

impl From<ReceiptBody> for UploadReceipt {
    fn from(body: ReceiptBody) -> Self {
        Self {
            message: body.message,
            file_url: body.file_url,
            key: body.key,
        }
    }
}

impl From<DocumentBody> for VerificationDocument {
    fn from(body: DocumentBody) -> Self {
        let uploaded_at = DateTime::parse_from_rfc3339(&body.upload_date)
            .ok()
            .map(|d| d.with_timezone(&Utc));

        Self {
            id: body.id,
            file_name: body.file_name,
            url: body.url,
            uploaded_at,
            file_type: body.file_type,
            size: body.size,
        }
    }
}

/// Talks to the verification API over HTTP.
pub struct HttpVerificationService {
    client: Client,
    upload_url: String,
    documents_url: String,
    health_url: String,
    api_token: Option<String>,
}

impl HttpVerificationService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            upload_url: config.upload_url(),
            documents_url: config.documents_url(),
            health_url: config.health_url(),
            api_token: config.api_token.clone(),
        }
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn build_form(
        file: &SelectedFile,
        token: &str,
        email: &str,
    ) -> Result<multipart::Form, SubmissionError> {
        let content = file
            .read_content()
            .await
            .map_err(|e| SubmissionError::InvalidRequest(e.to_string()))?;

        let mut file_part = multipart::Part::bytes(content).file_name(file.filename.clone());
        if !file.mime_type.is_empty() {
            file_part = file_part
                .mime_str(&file.mime_type)
                .map_err(|e| SubmissionError::InvalidRequest(e.to_string()))?;
        }

        Ok(multipart::Form::new()
            .part("file", file_part)
            .text("token", token.to_string())
            .text("email", email.to_string()))
    }

    async fn rejection(response: Response) -> SubmissionError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| format!("Error: {}", status));

        SubmissionError::Rejected { status, message }
    }
}

#[async_trait]
impl VerificationService for HttpVerificationService {
    async fn upload(
        &self,
        file: &SelectedFile,
        token: &str,
        email: &str,
    ) -> Result<Option<UploadReceipt>, ApplicationError> {
        let form = Self::build_form(file, token, email).await?;

        info!("POST {} ({} bytes)", self.upload_url, file.size);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(SubmissionError::from)?;

        if !response.status().is_success() {
            let error = Self::rejection(response).await;
            if let SubmissionError::Rejected { status, message } = &error {
                warn!("Verification upload rejected with status {}: {}", status, message);
            }
            return Err(error.into());
        }

        // The body is informational only; an empty, non-JSON or truncated success still counts.
        let receipt = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice::<ReceiptBody>(&bytes)
                .ok()
                .map(UploadReceipt::from),
            Err(e) => {
                warn!("Upload accepted but response body could not be read: {}", e);
                None
            }
        };

        Ok(receipt)
    }

    async fn list_documents(
        &self,
        email: &str,
    ) -> Result<Vec<VerificationDocument>, ApplicationError> {
        let request = self
            .client
            .get(&self.documents_url)
            .query(&[("email", email)]);

        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(SubmissionError::from)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await.into());
        }

        let documents: Vec<DocumentBody> =
            response.json().await.map_err(SubmissionError::from)?;

        Ok(documents.into_iter().map(VerificationDocument::from).collect())
    }

    async fn health(&self) -> Result<String, ApplicationError> {
        let response = self
            .apply_auth(self.client.get(&self.health_url))
            .send()
            .await
            .map_err(SubmissionError::from)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await.into());
        }

        let body: HealthBody = response.json().await.map_err(SubmissionError::from)?;
        Ok(body.status)
    }
}
