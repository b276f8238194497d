use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub openai_api_key: String,
    pub exa_api_key: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Both API keys are required; missing keys fail startup instead of
    /// surfacing later as upstream authentication errors.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "5001".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY must be set")?,
            exa_api_key: env::var("EXA_API_KEY")
                .context("EXA_API_KEY must be set")?,
        })
    }
}
