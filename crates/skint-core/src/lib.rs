//! Shared configuration for the Skint event extraction workspace.
//!
//! The pipeline library takes every setting as an explicit argument; this
//! crate is where those settings come from when running the CLI.

pub mod app_config;
pub mod config;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, load_app_config_with_overrides};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
