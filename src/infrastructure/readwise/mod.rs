use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const READWISE_SAVE_URL: &str = "https://readwise.io/api/v3/save/";

/// Body of the save call forwarded to Readwise Reader
#[derive(Debug, Serialize)]
pub struct SaveArticleRequest {
    pub url: String,
    pub title: String,
    pub source: String,
}

pub struct ReadwiseClient {
    api_url: String,
    token: String,
    timeout: Duration,
    http_client: reqwest::Client,
}

impl ReadwiseClient {
    pub fn new(api_url: String, token: String, timeout: Duration) -> Self {
        Self {
            api_url,
            token,
            timeout,
            http_client: reqwest::Client::new(),
        }
    }

    /// Save one article to Readwise Reader. The call is made at most once;
    /// failures map into the relay's error taxonomy without retrying.
    pub async fn save_article(&self, request: &SaveArticleRequest) -> AppResult<()> {
        let response = self
            .http_client
            .post(&self.api_url)
            .header("Authorization", format!("Token {}", self.token))
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    AppError::UpstreamUnreachable
                } else {
                    AppError::RequestSetup(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            // Forward the upstream body as JSON when it parses, verbatim otherwise.
            let details = serde_json::from_str(&body).unwrap_or(Value::String(body));
            return Err(AppError::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        Ok(())
    }
}
