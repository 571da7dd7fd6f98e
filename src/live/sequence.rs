//! Response ordering for overlapping polls
//!
//! Every tick takes a ticket before it fetches. When responses come back out
//! of order, only a ticket newer than the last applied one may render.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic ticket dispenser plus "last applied" watermark
#[derive(Debug, Default)]
pub struct SequenceGate {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl SequenceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the ticket for a new request. Tickets start at 1.
    pub fn next_ticket(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Claim the right to render the response for `ticket`.
    ///
    /// Returns `false` when a newer (or the same) ticket was already applied;
    /// the caller must then drop the response.
    pub fn try_apply(&self, ticket: u64) -> bool {
        self.applied
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                (ticket > last).then_some(ticket)
            })
            .is_ok()
    }

    /// Whether a newer (or the same) ticket has already been applied
    pub fn is_stale(&self, ticket: u64) -> bool {
        ticket <= self.last_applied()
    }

    /// Last ticket whose response was rendered (0 if none)
    pub fn last_applied(&self) -> u64 {
        self.applied.load(Ordering::SeqCst)
    }

    /// Number of tickets handed out
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_are_monotonic() {
        let gate = SequenceGate::new();
        assert_eq!(gate.next_ticket(), 1);
        assert_eq!(gate.next_ticket(), 2);
        assert_eq!(gate.next_ticket(), 3);
        assert_eq!(gate.issued(), 3);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let gate = SequenceGate::new();
        let slow = gate.next_ticket();
        let fast = gate.next_ticket();

        assert!(gate.try_apply(fast));
        assert!(gate.is_stale(slow));
        assert!(!gate.try_apply(slow));
        assert_eq!(gate.last_applied(), fast);
    }

    #[test]
    fn test_in_order_responses_all_apply() {
        let gate = SequenceGate::new();
        let first = gate.next_ticket();
        let second = gate.next_ticket();

        assert!(!gate.is_stale(first));
        assert!(gate.try_apply(first));
        assert!(!gate.is_stale(second));
        assert!(gate.try_apply(second));
        assert!(!gate.try_apply(second));
    }
}
