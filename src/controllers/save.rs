use axum::{
    extract::{Query, State},
    http::Method,
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;
use url::Url;

use crate::{
    error::{AppError, AppResult},
    infrastructure::{
        config::Config,
        readwise::{ReadwiseClient, SaveArticleRequest},
    },
};

const DEFAULT_TITLE: &str = "Untitled";
const DEFAULT_SOURCE: &str = "Feedbin";

/// Confirmation page served after a successful save. Closes its own
/// window after a short delay so the reader can keep browsing.
const SAVED_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>Saved to Readwise</title>
        <style>
            body {
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                display: flex;
                justify-content: center;
                align-items: center;
                height: 100vh;
                margin: 0;
                background-color: #f5f5f5;
            }
            .message {
                text-align: center;
                padding: 20px;
                background: white;
                border-radius: 8px;
                box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            }
        </style>
    </head>
    <body>
        <div class="message">
            <h3>✅ Saved to Readwise Reader</h3>
            <p>This window will close automatically...</p>
        </div>
        <script>
            setTimeout(() => window.close(), 1500);
        </script>
    </body>
</html>
"#;

#[derive(Debug, Deserialize)]
pub struct SaveParams {
    pub url: Option<String>,
    pub title: Option<String>,
    pub source: Option<String>,
}

pub struct SaveController {
    readwise_client: Arc<ReadwiseClient>,
    config: Arc<Config>,
}

impl SaveController {
    pub fn new(readwise_client: Arc<ReadwiseClient>, config: Arc<Config>) -> Self {
        Self {
            readwise_client,
            config,
        }
    }

    /// GET /api/save - Relay one article to Readwise Reader
    ///
    /// Query params:
    /// - url: Required. The article to save.
    /// - title: Optional, defaults to "Untitled".
    /// - source: Optional, defaults to "Feedbin".
    pub async fn save(
        State(controller): State<Arc<SaveController>>,
        method: Method,
        Query(params): Query<SaveParams>,
    ) -> AppResult<Html<&'static str>> {
        if method != Method::GET {
            return Err(AppError::MethodNotAllowed);
        }

        if controller.config.readwise_api_token.is_empty() {
            return Err(AppError::TokenNotConfigured);
        }

        let url = params
            .url
            .filter(|u| !u.is_empty())
            .ok_or(AppError::MissingUrl)?;

        // Must parse as an absolute URL; scheme and host are forwarded untouched.
        Url::parse(&url).map_err(|_| AppError::InvalidUrl)?;

        tracing::info!(url = %url, "incoming save request");

        let request = SaveArticleRequest {
            url: url.clone(),
            title: params
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            source: params
                .source
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        };

        controller.readwise_client.save_article(&request).await?;

        tracing::info!(url = %url, "article saved to Readwise");

        Ok(Html(SAVED_PAGE))
    }
}
