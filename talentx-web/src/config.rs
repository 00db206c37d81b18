//! Frontend configuration module
//!
//! Resolves build-time configurable URLs for the application.

/// Frontend configuration for URLs and external links.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the TalentX REST API.
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TALENTX_API_URL").unwrap_or("/api").to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
    }

    #[test]
    fn test_frontend_config_new() {
        let config = FrontendConfig::new();
        assert_eq!(config.api_base_url(), config.api_base_url.as_str());
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.api_base_url(), config2.api_base_url());
    }
}
