use std::path::PathBuf;

use crate::ConfigError;

#[derive(Clone)]
pub struct AppConfig {
    pub feed_url: String,
    pub output_path: PathBuf,
    pub item_limit: usize,
    pub log_level: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub extraction_timeout_secs: u64,
}

impl AppConfig {
    /// Returns the extraction API key, or an error naming the variable to set.
    ///
    /// The key is optional at load time so that commands which never call the
    /// extraction provider (feed inspection, dry runs) work without it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when `OPENAI_API_KEY` is unset.
    pub fn require_openai_api_key(&self) -> Result<&str, ConfigError> {
        self.openai_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("feed_url", &self.feed_url)
            .field("output_path", &self.output_path)
            .field("item_limit", &self.item_limit)
            .field("log_level", &self.log_level)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("extraction_timeout_secs", &self.extraction_timeout_secs)
            .finish()
    }
}
