//! Page detection
//!
//! What the bootstrapper learns about the current page before wiring
//! anything: its path and which template markers are present.

use crate::live::MatchId;

/// Facts about the current page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// Location path (or full URL)
    pub path: String,
    /// `.match-detail-container` is present
    pub match_detail: bool,
    /// `.match-status-badge.live` is present
    pub live_badge: bool,
    /// `.scoring-container` is present (admin scoring page)
    pub scoring: bool,
}

impl PageContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_match_detail(mut self) -> Self {
        self.match_detail = true;
        self
    }

    pub fn with_live_badge(mut self) -> Self {
        self.live_badge = true;
        self
    }

    pub fn with_scoring(mut self) -> Self {
        self.scoring = true;
        self
    }

    /// Match to poll, if this is a live match-detail view.
    ///
    /// The admin scoring page refreshes itself and is never polled here.
    pub fn live_match_id(&self) -> Option<MatchId> {
        if self.match_detail && self.live_badge {
            MatchId::from_path(&self.path)
        } else {
            None
        }
    }
}
