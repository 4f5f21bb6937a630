/// Limits a verification document has to satisfy before it may be submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPolicy {
    pub mime_types: Vec<String>,
    pub extensions: Vec<String>,
    /// Inclusive upper bound in bytes.
    pub max_size: u64,
}

impl UploadPolicy {
    pub const DEFAULT_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "application/pdf"];
    pub const DEFAULT_EXTENSIONS: &'static [&'static str] = &["jpg", "jpeg", "png", "pdf"];
    pub const DEFAULT_MAX_SIZE: u64 = 10 * 1024 * 1024;

    pub fn allows_mime_type(&self, mime_type: &str) -> bool {
        self.mime_types.iter().any(|m| m == mime_type)
    }

    pub fn allows_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(extension))
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            mime_types: Self::DEFAULT_MIME_TYPES.iter().map(|s| s.to_string()).collect(),
            extensions: Self::DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            max_size: Self::DEFAULT_MAX_SIZE,
        }
    }
}
