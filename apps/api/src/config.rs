use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; unset values fall back to defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Fixed seed for the random skill scorer. Unset = OS entropy.
    pub match_seed: Option<u64>,
    /// Use the deterministic fixed-rate scorer instead of the random one.
    pub deterministic_scorer: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let match_seed = match std::env::var("MATCH_SEED") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .context("MATCH_SEED must be an unsigned 64-bit integer")?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            match_seed,
            deterministic_scorer: std::env::var("DETERMINISTIC_SCORER")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}
