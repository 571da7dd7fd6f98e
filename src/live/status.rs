//! Poll health indicator
//!
//! Failed ticks are counted and surfaced as a status message, but at most
//! once per report window so a dead server does not flood the page or log.
//! A successful tick clears the indicator.

use chrono::{DateTime, Duration, Utc};

use super::error::LiveError;

/// Default minimum spacing between two failure reports
pub const DEFAULT_REPORT_INTERVAL_MS: u64 = 30_000;

/// What the status indicator should show after a tick
#[derive(Debug, Clone, PartialEq)]
pub enum StatusReport {
    /// Updates are flowing again; hide the indicator
    Healthy,
    /// Updates are failing; show `message`
    Degraded { message: String, failures: u32 },
}

/// Tracks poll outcomes and decides when the indicator changes
#[derive(Debug, Clone)]
pub struct PollStatus {
    consecutive_failures: u32,
    last_error: Option<String>,
    last_success: Option<DateTime<Utc>>,
    last_report: Option<DateTime<Utc>>,
    report_interval: Duration,
}

impl Default for PollStatus {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_INTERVAL_MS)
    }
}

impl PollStatus {
    pub fn new(report_interval_ms: u64) -> Self {
        Self {
            consecutive_failures: 0,
            last_error: None,
            last_success: None,
            last_report: None,
            report_interval: Duration::milliseconds(
                i64::try_from(report_interval_ms).unwrap_or(i64::MAX),
            ),
        }
    }

    /// Record an applied snapshot.
    ///
    /// Returns `Some(Healthy)` only when this success ends a failure streak.
    pub fn record_success(&mut self, now: DateTime<Utc>) -> Option<StatusReport> {
        let recovering = self.consecutive_failures > 0;
        self.consecutive_failures = 0;
        self.last_error = None;
        self.last_success = Some(now);
        self.last_report = None;

        recovering.then_some(StatusReport::Healthy)
    }

    /// Record a failed tick.
    ///
    /// Returns a report when the indicator should be (re)shown: on the first
    /// failure of a streak and then at most once per report window.
    pub fn record_failure(
        &mut self,
        error: &LiveError,
        now: DateTime<Utc>,
    ) -> Option<StatusReport> {
        self.consecutive_failures += 1;
        self.last_error = Some(error.to_string());

        let due = self
            .last_report
            .map(|last| now - last >= self.report_interval)
            .unwrap_or(true);
        if !due {
            return None;
        }

        self.last_report = Some(now);
        Some(StatusReport::Degraded {
            message: self.message(),
            failures: self.consecutive_failures,
        })
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    pub fn last_success(&self) -> Option<DateTime<Utc>> {
        self.last_success
    }

    pub fn is_degraded(&self) -> bool {
        self.consecutive_failures > 0
    }

    /// Human-readable indicator text for the current state
    pub fn message(&self) -> String {
        if !self.is_degraded() {
            return self
                .last_success
                .map(|ts| format!("Live - last update {}", ts.format("%H:%M:%S")))
                .unwrap_or_else(|| "Live".to_string());
        }

        let attempts = if self.consecutive_failures == 1 {
            "1 failed attempt".to_string()
        } else {
            format!("{} failed attempts", self.consecutive_failures)
        };
        let error = self.last_error.as_deref().unwrap_or("unknown error");

        match self.last_success {
            Some(ts) => format!(
                "Live updates interrupted: {} ({}, last update {})",
                error,
                attempts,
                ts.format("%H:%M:%S")
            ),
            None => format!("Live updates interrupted: {} ({})", error, attempts),
        }
    }
}
