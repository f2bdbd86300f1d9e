use account_recovery_core::BASE_URL;
use anyhow::{Context, Result, ensure};
use std::{env, path::PathBuf, time::Duration};

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Account-recovery API configuration
    pub api: ApiConfig,

    /// Signup step tracker configuration
    pub progress: ProgressConfig,
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL requests are sent to, without trailing slash
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct ProgressConfig {
    /// JSON lines file recording every save and submit; log only when unset
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load and validate the configuration from environment variables
    pub fn load() -> Result<Self> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load the configuration from an arbitrary variable source
    pub fn load_from(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api = ApiConfig::load(&var)?;
        let progress = ProgressConfig::load(&var)?;

        Ok(Self { api, progress })
    }
}

impl ApiConfig {
    fn load(var: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = var("API_BASE_URL").unwrap_or_else(|| BASE_URL.to_string());
        let parsed = reqwest::Url::parse(&base_url)
            .with_context(|| format!("failed to parse API_BASE_URL: {base_url}"))?;
        ensure!(
            matches!(parsed.scheme(), "http" | "https"),
            "failed to use API_BASE_URL: unsupported scheme {}",
            parsed.scheme()
        );

        let timeout_secs = match var("HTTP_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse::<u64>()
                .context("failed to parse HTTP_TIMEOUT_SECS: invalid format")?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };
        ensure!(timeout_secs > 0, "failed to use HTTP_TIMEOUT_SECS: must not be 0");

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl ProgressConfig {
    fn load(var: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let file = var("SIGNUP_PROGRESS_FILE")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self { file })
    }
}
