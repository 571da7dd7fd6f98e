//! HTTP API Client
//!
//! Fetches score snapshots from the page's own origin; the session cookie
//! travels with the request, no auth headers are added.

use gloo_net::http::Request;

use frisbee_live::live::{LiveError, LiveResult, MatchId, ScoreSnapshot};

/// Fetch the current snapshot of a match
pub async fn fetch_scores(match_id: &MatchId) -> LiveResult<ScoreSnapshot> {
    let response = Request::get(&match_id.scores_path())
        .send()
        .await
        .map_err(|e| LiveError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(LiveError::Status {
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| LiveError::Request(e.to_string()))?;

    Ok(serde_json::from_str::<ScoreSnapshot>(&body)?)
}
