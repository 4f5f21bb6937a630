#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub upload_path: String,
    pub api_token: Option<String>,
}

impl ClientConfig {
    pub const DEFAULT_API_BASE_URL: &'static str = "http://localhost:8080";
    pub const DEFAULT_UPLOAD_PATH: &'static str = "/verification/upload";

    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    fn base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base(), path)
        } else {
            format!("{}/{}", self.base(), path)
        }
    }

    pub fn upload_url(&self) -> String {
        self.join(&self.upload_path)
    }

    pub fn documents_url(&self) -> String {
        self.join("/verification/documents")
    }

    pub fn health_url(&self) -> String {
        self.join("/health")
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
            upload_path: Self::DEFAULT_UPLOAD_PATH.to_string(),
            api_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_joined_onto_the_base_url() {
        let config = ClientConfig::new("https://api.example.com/api/v1/");
        assert_eq!(
            config.upload_url(),
            "https://api.example.com/api/v1/verification/upload"
        );
        assert_eq!(
            config.documents_url(),
            "https://api.example.com/api/v1/verification/documents"
        );
        assert_eq!(config.health_url(), "https://api.example.com/api/v1/health");
    }

    #[test]
    fn upload_path_without_leading_slash() {
        let config = ClientConfig {
            upload_path: "verify".to_string(),
            ..ClientConfig::new("http://alb.internal")
        };
        assert_eq!(config.upload_url(), "http://alb.internal/verify");
    }
}
