use chrono::{DateTime, Utc};

/// A verification document already stored for a client.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationDocument {
    pub id: String,
    pub file_name: String,
    pub url: String,
    /// `None` when the server sent a date that is not RFC 3339.
    pub uploaded_at: Option<DateTime<Utc>>,
    pub file_type: String,
    pub size: u64,
}

/// Body returned by a successful upload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadReceipt {
    pub message: Option<String>,
    pub file_url: Option<String>,
    pub key: Option<String>,
}
