//! Score snapshot model
//!
//! Mirrors the JSON body of `GET /api/match/{id}/scores`. A snapshot is the
//! full state of a match at fetch time, never a delta.

use serde::{Deserialize, Serialize};

/// Full score state of a match returned by one poll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub team1_score: i64,
    pub team2_score: i64,
    #[serde(default)]
    pub scores: Vec<ScoreEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MatchStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_points: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_offense_team_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_defense_team_id: Option<i64>,
    /// Gender ratio descriptors, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team1_ratio: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team2_ratio: Option<serde_json::Value>,
}

/// One scoring action on the match timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEvent {
    /// Display string, already formatted by the server
    pub timestamp: String,
    pub player_name: String,
    pub team_name: String,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assist_by: Option<String>,
}

/// Match lifecycle as reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Completed,
    #[serde(untagged)]
    Other(String),
}

impl ScoreSnapshot {
    pub fn new(team1_score: i64, team2_score: i64, scores: Vec<ScoreEvent>) -> Self {
        Self {
            team1_score,
            team2_score,
            scores,
            status: None,
            total_points: None,
            current_offense_team_id: None,
            current_defense_team_id: None,
            team1_ratio: None,
            team2_ratio: None,
        }
    }

    /// Builder: set the reported status
    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Parse a snapshot from a JSON body
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// True once the server reports the match as finished
    pub fn is_completed(&self) -> bool {
        matches!(self.status, Some(MatchStatus::Completed))
    }
}

impl ScoreEvent {
    pub fn new(
        timestamp: impl Into<String>,
        player_name: impl Into<String>,
        team_name: impl Into<String>,
        points: u32,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            player_name: player_name.into(),
            team_name: team_name.into(),
            points,
            id: None,
            action_type: None,
            assist_by: None,
        }
    }

    /// Builder: record who assisted
    pub fn assisted_by(mut self, name: impl Into<String>) -> Self {
        self.assist_by = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_minimal_body() {
        let snapshot = ScoreSnapshot::from_json(
            r#"{"team1_score": 3, "team2_score": 5, "scores": [
                {"timestamp": "10:02 AM", "player_name": "Ann", "team_name": "Red", "points": 2}
            ]}"#,
        )
        .unwrap();

        assert_eq!(snapshot.team1_score, 3);
        assert_eq!(snapshot.team2_score, 5);
        assert_eq!(snapshot.scores.len(), 1);
        assert_eq!(snapshot.scores[0].player_name, "Ann");
        assert!(snapshot.status.is_none());
        assert!(!snapshot.is_completed());
    }

    #[test]
    fn test_parses_full_server_body() {
        let snapshot = ScoreSnapshot::from_json(
            r#"{
                "team1_score": 7, "team2_score": 6, "status": "completed",
                "current_offense_team_id": 1, "current_defense_team_id": 2,
                "total_points": 13, "team1_ratio": "4M/3F", "team2_ratio": null,
                "scores": [{
                    "id": 11, "player_name": "Bo", "team_name": "Blue",
                    "action_type": "score", "points": 1, "timestamp": "14:03:22",
                    "assist_by": "Cy"
                }]
            }"#,
        )
        .unwrap();

        assert!(snapshot.is_completed());
        assert_eq!(snapshot.total_points, Some(13));
        assert_eq!(snapshot.scores[0].assist_by.as_deref(), Some("Cy"));
        assert_eq!(snapshot.scores[0].action_type.as_deref(), Some("score"));
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let body = r#"{"team1_score": 0, "team2_score": 0, "scores": [], "status": "halftime"}"#;
        let snapshot = ScoreSnapshot::from_json(body).unwrap();
        assert_eq!(snapshot.status, Some(MatchStatus::Other("halftime".to_string())));
        assert!(!snapshot.is_completed());
    }

    #[test]
    fn test_rejects_negative_points() {
        let result = ScoreSnapshot::from_json(
            r#"{"team1_score": 0, "team2_score": 0, "scores": [
                {"timestamp": "x", "player_name": "A", "team_name": "B", "points": -1}
            ]}"#,
        );
        assert!(result.is_err());
    }
}
