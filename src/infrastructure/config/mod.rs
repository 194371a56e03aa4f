use serde::Deserialize;
use std::env;

use crate::infrastructure::readwise::READWISE_SAVE_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    /// Browser origin allowed to call the relay.
    pub allowed_origin: String,
    // Readwise upstream
    pub readwise_api_token: String,
    pub readwise_api_url: String,
    pub readwise_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "https://feedbin.com".to_string()),
            // A missing token is surfaced per request as a configuration
            // error, not as a startup failure.
            readwise_api_token: env::var("READWISE_API_TOKEN").unwrap_or_default(),
            readwise_api_url: env::var("READWISE_API_URL")
                .unwrap_or_else(|_| READWISE_SAVE_URL.to_string()),
            readwise_timeout_ms: env::var("READWISE_TIMEOUT_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()?,
        };

        Ok(config)
    }
}
