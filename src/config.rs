use std::env;

use anyhow::{Context, Result};

/// Default HTTP bind address.
pub const DEFAULT_BIND: &str = "0.0.0.0";
/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;
/// Longest text (in characters) the HTTP API will score.
pub const DEFAULT_MAX_TEXT_CHARS: usize = 10_000;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Nothing
/// here is secret; every value has a default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the web server binds to (SAFEDOSE_BIND)
    pub bind: String,
    /// Port the web server listens on (SAFEDOSE_PORT)
    pub port: u16,
    /// Requests with more characters than this are rejected (SAFEDOSE_MAX_TEXT_CHARS)
    pub max_text_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults; set-but-malformed numbers
    /// are an error rather than being silently ignored.
    pub fn load() -> Result<Self> {
        let port = match env::var("SAFEDOSE_PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SAFEDOSE_PORT is not a valid port: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let max_text_chars = match env::var("SAFEDOSE_MAX_TEXT_CHARS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SAFEDOSE_MAX_TEXT_CHARS is not a number: {raw}"))?,
            Err(_) => DEFAULT_MAX_TEXT_CHARS,
        };

        let config = Self {
            bind: env::var("SAFEDOSE_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()),
            port,
            max_text_chars,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the loaded values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.bind.trim().is_empty() {
            anyhow::bail!("SAFEDOSE_BIND is empty. Unset it to use {DEFAULT_BIND}.");
        }
        if self.max_text_chars == 0 {
            anyhow::bail!(
                "SAFEDOSE_MAX_TEXT_CHARS must be at least 1.\n\
                 Unset it to use the default of {DEFAULT_MAX_TEXT_CHARS}."
            );
        }
        Ok(())
    }
}
