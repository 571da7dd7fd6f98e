//! Tick resolution
//!
//! The tokio poller and the browser poller both feed every fetch result
//! through [`resolve_tick`]. It decides whether the result renders, whether
//! the status indicator changes and whether polling should stop.

use chrono::{DateTime, Utc};

use super::error::{LiveError, LiveResult};
use super::sequence::SequenceGate;
use super::snapshot::ScoreSnapshot;
use super::status::{PollStatus, StatusReport};

/// What a poller does with one fetch result
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Show `report` (if any), render `snapshot`, then stop if `stop` is set
    Render {
        snapshot: ScoreSnapshot,
        report: Option<StatusReport>,
        stop: bool,
    },
    /// A failure counted against the status; show `report` if any
    Failed {
        error: LiveError,
        report: Option<StatusReport>,
    },
    /// A result older than what is already on screen
    Stale,
}

/// Resolve the result of tick `ticket`.
///
/// Results of a tick older than the last rendered one are [`TickOutcome::Stale`],
/// failures included: the page already shows fresher data than that tick
/// could have produced.
pub fn resolve_tick(
    gate: &SequenceGate,
    status: &mut PollStatus,
    ticket: u64,
    result: LiveResult<ScoreSnapshot>,
    now: DateTime<Utc>,
    stop_when_completed: bool,
) -> TickOutcome {
    match result {
        Ok(snapshot) => {
            if !gate.try_apply(ticket) {
                return TickOutcome::Stale;
            }

            let report = status.record_success(now);
            let stop = stop_when_completed && snapshot.is_completed();
            TickOutcome::Render {
                snapshot,
                report,
                stop,
            }
        }
        Err(error) => {
            if gate.is_stale(ticket) {
                return TickOutcome::Stale;
            }

            let report = status.record_failure(&error, now);
            TickOutcome::Failed { error, report }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::live::{MatchStatus, ScoreEvent};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
    }

    fn snapshot() -> ScoreSnapshot {
        ScoreSnapshot::new(3, 5, vec![ScoreEvent::new("10:02 AM", "Ann", "Red", 2)])
    }

    #[test]
    fn test_newer_snapshot_renders() {
        let gate = SequenceGate::new();
        let mut status = PollStatus::default();
        let ticket = gate.next_ticket();

        let outcome = resolve_tick(&gate, &mut status, ticket, Ok(snapshot()), now(), true);

        assert_eq!(
            outcome,
            TickOutcome::Render {
                snapshot: snapshot(),
                report: None,
                stop: false,
            }
        );
        assert_eq!(gate.last_applied(), ticket);
    }

    #[test]
    fn test_late_failure_after_newer_render_is_ignored() {
        let gate = SequenceGate::new();
        let mut status = PollStatus::default();
        let slow = gate.next_ticket();
        let fast = gate.next_ticket();

        resolve_tick(&gate, &mut status, fast, Ok(snapshot()), now(), true);
        let late = Err(LiveError::Timeout);
        let outcome = resolve_tick(&gate, &mut status, slow, late, now(), true);

        assert_eq!(outcome, TickOutcome::Stale);
        assert!(!status.is_degraded());
    }

    #[test]
    fn test_late_snapshot_is_stale() {
        let gate = SequenceGate::new();
        let mut status = PollStatus::default();
        let slow = gate.next_ticket();
        let fast = gate.next_ticket();

        resolve_tick(&gate, &mut status, fast, Ok(snapshot()), now(), true);
        let outcome = resolve_tick(&gate, &mut status, slow, Ok(snapshot()), now(), true);

        assert_eq!(outcome, TickOutcome::Stale);
        assert_eq!(gate.last_applied(), fast);
    }

    #[test]
    fn test_failure_then_recovery() {
        let gate = SequenceGate::new();
        let mut status = PollStatus::default();
        let first = gate.next_ticket();
        let second = gate.next_ticket();

        let error = Err(LiveError::Unavailable);
        let failed = resolve_tick(&gate, &mut status, first, error, now(), true);
        assert!(matches!(
            failed,
            TickOutcome::Failed {
                error: LiveError::Unavailable,
                report: Some(StatusReport::Degraded { failures: 1, .. }),
            }
        ));

        let recovered = resolve_tick(&gate, &mut status, second, Ok(snapshot()), now(), true);
        assert!(matches!(
            recovered,
            TickOutcome::Render {
                report: Some(StatusReport::Healthy),
                ..
            }
        ));
    }

    #[test]
    fn test_completed_snapshot_requests_stop() {
        let gate = SequenceGate::new();
        let mut status = PollStatus::default();
        let done = snapshot().with_status(MatchStatus::Completed);

        let ticket = gate.next_ticket();
        let stop = resolve_tick(&gate, &mut status, ticket, Ok(done.clone()), now(), true);
        assert!(matches!(stop, TickOutcome::Render { stop: true, .. }));

        let ticket = gate.next_ticket();
        let keep = resolve_tick(&gate, &mut status, ticket, Ok(done), now(), false);
        assert!(matches!(keep, TickOutcome::Render { stop: false, .. }));
    }
}
