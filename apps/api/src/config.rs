use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Nothing here is required: the service boots with defaults and an absent
/// `GEMINI_API_KEY` simply means every request must carry its own credential.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fallback API credential used when a request does not supply one via
    /// the `x-api-key` header. Never logged.
    pub gemini_api_key: Option<String>,
    /// Budget for a single analysis round trip, in seconds. Expiry surfaces
    /// as a Cancelled outcome, not an analysis error.
    pub analysis_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            analysis_timeout_secs: std::env::var("ANALYSIS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "90".to_string())
                .parse::<u64>()
                .context("ANALYSIS_TIMEOUT_SECS must be a whole number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
