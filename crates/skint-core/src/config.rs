use std::env::VarError;
use std::path::PathBuf;

pub use skint_extractor::extraction::DEFAULT_OPENAI_BASE_URL;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_FEED_URL: &str = "https://www.theskint.com/feed/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    load_app_config_with_overrides(&[])
}

/// Like [`load_app_config`], but `overrides` (`(VAR, value)` pairs) win over
/// the environment. An overridden variable is never read from the
/// environment, so a malformed env value cannot fail a run that replaces it.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_with_overrides(
    overrides: &[(&str, String)],
) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(with_overrides(overrides, |key| std::env::var(key)))
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Layer `overrides` on top of `lookup`.
fn with_overrides<'a, F>(
    overrides: &'a [(&'a str, String)],
    lookup: F,
) -> impl Fn(&str) -> Result<String, VarError> + 'a
where
    F: Fn(&str) -> Result<String, VarError> + 'a,
{
    move |key| match overrides.iter().find(|(var, _)| *var == key) {
        Some((_, value)) => Ok(value.clone()),
        None => lookup(key),
    }
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` instead of mutating process state.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(trimmed.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let feed_url = non_empty("SKINT_FEED_URL", DEFAULT_FEED_URL)?;
    let output_path = PathBuf::from(non_empty("SKINT_OUTPUT_PATH", "events.json")?);
    let item_limit = parse_usize("SKINT_ITEM_LIMIT", "1")?;
    let log_level = or_default("SKINT_LOG_LEVEL", "info");
    let http_timeout_secs = parse_u64("SKINT_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SKINT_USER_AGENT", "skint/0.1 (event-extraction)");

    let openai_api_key = lookup("OPENAI_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());
    let openai_model = non_empty("SKINT_OPENAI_MODEL", "gpt-4o-mini")?;
    let openai_base_url = non_empty("SKINT_OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL)?;
    let extraction_timeout_secs = parse_u64("SKINT_EXTRACTION_TIMEOUT_SECS", "120")?;

    Ok(AppConfig {
        feed_url,
        output_path,
        item_limit,
        log_level,
        http_timeout_secs,
        user_agent,
        openai_api_key,
        openai_model,
        openai_base_url,
        extraction_timeout_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
