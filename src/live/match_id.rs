//! Match identifier extraction
//!
//! The match id is read once from the page path (`/match/{digits}`) before
//! polling starts. Paths without one never start a poller.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

fn match_path_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/match/(\d+)").expect("static regex"))
}

/// Opaque identifier of a single match
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    /// Extract the match id from a page path.
    ///
    /// Accepts a bare path (`/match/42/scoring`) or a full URL; the first
    /// `/match/{digits}` segment wins.
    pub fn from_path(path: &str) -> Option<Self> {
        match_path_regex()
            .captures(path)
            .and_then(|caps| caps.get(1))
            .map(|m| MatchId(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the score endpoint for this match
    pub fn scores_path(&self) -> String {
        format!("/api/match/{}/scores", self.0)
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_id_from_match_path() {
        let id = MatchId::from_path("/match/42/anything").unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.scores_path(), "/api/match/42/scores");
    }

    #[test]
    fn test_extracts_id_from_full_url() {
        let id = MatchId::from_path("https://frisbee.example.org/match/7?tab=timeline").unwrap();
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_no_id_outside_match_pages() {
        assert!(MatchId::from_path("/teams").is_none());
        assert!(MatchId::from_path("/match/").is_none());
        assert!(MatchId::from_path("/match/abc").is_none());
        assert!(MatchId::from_path("").is_none());
    }
}
