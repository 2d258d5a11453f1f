//! Run configuration assembled from CLI arguments and the environment.

use std::path::PathBuf;

/// Environment variable naming the default request file.
pub const INPUT_ENV: &str = "WALLET_CHECK_INPUT";

/// Where requests come from and how results are printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// Request file; `None` reads stdin.
    pub input: Option<PathBuf>,
    /// Emit JSON lines instead of TSV.
    pub json: bool,
}

impl CheckConfig {
    /// Build from an explicit path, falling back to `env_input`
    /// (the value of [`INPUT_ENV`], if set).
    pub fn resolve(input: Option<PathBuf>, env_input: Option<String>, json: bool) -> Self {
        let input = input.or_else(|| env_input.filter(|p| !p.is_empty()).map(PathBuf::from));
        Self { input, json }
    }

    /// Same as [`CheckConfig::resolve`], reading [`INPUT_ENV`] after loading
    /// `.env` if present.
    pub fn from_env(input: Option<PathBuf>, json: bool) -> Self {
        let _ = dotenvy::dotenv();
        Self::resolve(input, std::env::var(INPUT_ENV).ok(), json)
    }
}
