//! Form guards
//!
//! Client-side checks that block a submission and alert. The server still
//! validates everything; these only save a round trip.

use std::fmt;
use thiserror::Error;

/// Why a form may not be submitted. `Display` is the alert text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Team 1 and Team 2 must be different!")]
    TeamsMustDiffer,

    #[error("Player name must be at least 2 characters long!")]
    NameTooShort,
}

/// Minimum player name length after trimming
pub const MIN_PLAYER_NAME_CHARS: usize = 2;

/// `.match-form`: the two selected teams must differ
pub fn validate_match_form(team1_id: &str, team2_id: &str) -> Result<(), ValidationError> {
    if team1_id == team2_id {
        return Err(ValidationError::TeamsMustDiffer);
    }
    Ok(())
}

/// `.player-form`: trimmed name of at least two characters
pub fn validate_player_form(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < MIN_PLAYER_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    Ok(())
}

/// What a delete form removes, derived from its action URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Team,
    Player,
    Match,
    Item,
}

impl DeleteTarget {
    /// `None` when the action is not a delete action
    pub fn from_action(action: &str) -> Option<Self> {
        if !action.contains("delete") {
            return None;
        }

        Some(if action.contains("team") {
            DeleteTarget::Team
        } else if action.contains("player") {
            DeleteTarget::Player
        } else if action.contains("match") {
            DeleteTarget::Match
        } else {
            DeleteTarget::Item
        })
    }

    /// Text of the blocking confirm prompt
    pub fn confirmation_prompt(&self) -> String {
        format!("Are you sure you want to delete this {}?", self)
    }
}

impl fmt::Display for DeleteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeleteTarget::Team => "team",
            DeleteTarget::Player => "player",
            DeleteTarget::Match => "match",
            DeleteTarget::Item => "item",
        })
    }
}
