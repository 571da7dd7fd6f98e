//! Display targets for rendered snapshots
//!
//! The browser binds [`ScoreDisplay`] to the `.live-score` elements and the
//! `#timeline` container; [`MemoryDisplay`] keeps the same content in memory.

use super::{render, Scoreboard};
use crate::live::ScoreSnapshot;

/// Somewhere a snapshot can be shown
pub trait ScoreDisplay {
    /// Write both team scores. Returns `false` if the display has fewer than
    /// two score slots, in which case nothing is written.
    fn show_scores(&mut self, scoreboard: &Scoreboard) -> bool;

    /// Start the transient update pulse on the score slots
    fn pulse(&mut self) {}

    /// Replace the timeline content. Returns `false` if there is no timeline.
    fn show_timeline(&mut self, html: &str) -> bool;
}

/// Render `snapshot` onto `display`, replacing prior content
pub fn apply_snapshot<D: ScoreDisplay + ?Sized>(display: &mut D, snapshot: &ScoreSnapshot) {
    let rendered = render(snapshot);

    if display.show_scores(&rendered.scoreboard) {
        display.pulse();
    }
    display.show_timeline(&rendered.timeline_html);
}

/// In-memory display, used by the CLI and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDisplay {
    pub scores: Option<Scoreboard>,
    pub timeline_html: Option<String>,
    pub pulses: u32,
}

impl ScoreDisplay for MemoryDisplay {
    fn show_scores(&mut self, scoreboard: &Scoreboard) -> bool {
        self.scores = Some(scoreboard.clone());
        true
    }

    fn pulse(&mut self) {
        self.pulses += 1;
    }

    fn show_timeline(&mut self, html: &str) -> bool {
        self.timeline_html = Some(html.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::live::ScoreEvent;

    /// A page that only rendered one score element and no timeline
    struct PartialPage {
        writes: u32,
    }

    impl ScoreDisplay for PartialPage {
        fn show_scores(&mut self, _scoreboard: &Scoreboard) -> bool {
            false
        }

        fn pulse(&mut self) {
            self.writes += 1;
        }

        fn show_timeline(&mut self, _html: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_apply_replaces_previous_content() {
        let mut display = MemoryDisplay::default();
        apply_snapshot(
            &mut display,
            &ScoreSnapshot::new(1, 0, vec![ScoreEvent::new("10:00", "Ann", "Red", 1)]),
        );
        apply_snapshot(&mut display, &ScoreSnapshot::new(0, 0, vec![]));

        assert_eq!(
            display.scores,
            Some(Scoreboard {
                team1: "0".to_string(),
                team2: "0".to_string()
            })
        );
        assert_eq!(
            display.timeline_html.as_deref(),
            Some("<div class=\"empty-state\">No scores yet in this match.</div>")
        );
        assert_eq!(display.pulses, 2);
    }

    #[test]
    fn test_apply_twice_is_identical() {
        let snapshot = ScoreSnapshot::new(3, 5, vec![ScoreEvent::new("10:02 AM", "Ann", "Red", 2)]);
        let mut once = MemoryDisplay::default();
        apply_snapshot(&mut once, &snapshot);

        let mut twice = once.clone();
        apply_snapshot(&mut twice, &snapshot);

        assert_eq!(once.scores, twice.scores);
        assert_eq!(once.timeline_html, twice.timeline_html);
    }

    #[test]
    fn test_no_pulse_without_score_slots() {
        let mut page = PartialPage { writes: 0 };
        apply_snapshot(&mut page, &ScoreSnapshot::new(1, 1, vec![]));
        assert_eq!(page.writes, 0);
    }
}
