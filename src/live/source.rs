//! Score sources
//!
//! Where snapshots come from. The poller only knows the [`ScoreSource`]
//! trait; [`HttpScoreSource`] talks to the real score endpoint.

use async_trait::async_trait;
use reqwest::Client;

use super::error::{LiveError, LiveResult};
use super::match_id::MatchId;
use super::snapshot::ScoreSnapshot;

/// Anything that can produce the current snapshot of a match
#[async_trait]
pub trait ScoreSource: Send + Sync {
    /// Fetch the full current state of `match_id`
    async fn fetch(&self, match_id: &MatchId) -> LiveResult<ScoreSnapshot>;
}

/// Configuration for the HTTP score source
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Site root, e.g. `http://localhost:5000`
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

/// Fetches snapshots from `GET {base_url}/api/match/{id}/scores`
pub struct HttpScoreSource {
    client: Client,
    config: HttpSourceConfig,
}

impl HttpScoreSource {
    pub fn new(config: HttpSourceConfig) -> LiveResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| LiveError::Request(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &HttpSourceConfig {
        &self.config
    }

    /// Absolute URL of the score endpoint for `match_id`
    pub fn scores_url(&self, match_id: &MatchId) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            match_id.scores_path()
        )
    }
}

fn map_request_error(e: reqwest::Error) -> LiveError {
    if e.is_timeout() {
        LiveError::Timeout
    } else if e.is_connect() {
        LiveError::Unavailable
    } else {
        LiveError::Request(e.to_string())
    }
}

#[async_trait]
impl ScoreSource for HttpScoreSource {
    async fn fetch(&self, match_id: &MatchId) -> LiveResult<ScoreSnapshot> {
        let url = self.scores_url(match_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LiveError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(map_request_error)?;
        Ok(ScoreSnapshot::from_json(&body)?)
    }
}
