//! Live Poller
//!
//! Fetches the score snapshot of one match on a fixed interval until the
//! returned [`PollHandle`] is cancelled or dropped.
//!
//! Each tick spawns its own fetch, so a slow request never delays the next
//! tick. Responses are ordered through a [`SequenceGate`]: a response older
//! than the last rendered one is dropped. Failures are logged and fed to
//! [`PollStatus`]; the timer keeps running without backoff.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::match_id::MatchId;
use super::sequence::SequenceGate;
use super::snapshot::ScoreSnapshot;
use super::source::ScoreSource;
use super::status::{PollStatus, StatusReport, DEFAULT_REPORT_INTERVAL_MS};
use super::tick::{resolve_tick, TickOutcome};
use crate::ui::PageContext;

/// Default tick interval
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 3000;

/// Poller settings
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Time between two ticks
    pub interval_ms: u64,
    /// Stop once a snapshot reports the match as completed
    pub stop_when_completed: bool,
    /// Minimum spacing between two failure reports
    pub status_report_interval_ms: u64,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_POLL_INTERVAL_MS,
            stop_when_completed: true,
            status_report_interval_ms: DEFAULT_REPORT_INTERVAL_MS,
        }
    }
}

/// Why a poller stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The handle was cancelled or dropped
    Cancelled,
    /// The server reported the match as completed
    MatchCompleted,
}

/// Events delivered to whoever renders the match
#[derive(Debug, Clone, PartialEq)]
pub enum PollEvent {
    /// A snapshot newer than anything rendered so far
    Snapshot { ticket: u64, snapshot: ScoreSnapshot },
    /// The status indicator changed
    Status(StatusReport),
    /// The poller will not tick again
    Stopped(StopReason),
}

/// Polls a [`ScoreSource`] for one match at a time
pub struct LivePoller<S: ScoreSource + 'static> {
    source: Arc<S>,
    config: PollerConfig,
}

impl<S: ScoreSource + 'static> LivePoller<S> {
    pub fn new(source: Arc<S>, config: PollerConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    /// Start polling if `page` is a live match view with a match id.
    ///
    /// Returns `None` otherwise; nothing is logged as an error.
    pub fn start_for_page(
        &self,
        page: &PageContext,
    ) -> Option<(PollHandle, mpsc::UnboundedReceiver<PollEvent>)> {
        match page.live_match_id() {
            Some(match_id) => Some(self.start(match_id)),
            None => {
                tracing::debug!(path = %page.path, "Not a live match page, poller not started");
                None
            }
        }
    }

    /// Start polling `match_id`. The first tick fires one interval from now.
    pub fn start(&self, match_id: MatchId) -> (PollHandle, mpsc::UnboundedReceiver<PollEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = watch::channel(None);

        let shared = Arc::new(TickShared {
            source: Arc::clone(&self.source),
            match_id,
            gate: SequenceGate::new(),
            status: Mutex::new(PollStatus::new(self.config.status_report_interval_ms)),
            events: events_tx,
            stop: stop_tx,
            stop_when_completed: self.config.stop_when_completed,
        });

        let period = Duration::from_millis(self.config.interval_ms.max(1));
        let task = tokio::spawn(run_loop(Arc::clone(&shared), stop_rx, period));

        tracing::info!(
            match_id = %shared.match_id,
            interval_ms = self.config.interval_ms,
            "Live score polling started"
        );

        (
            PollHandle {
                shared,
                task: Some(task),
            },
            events_rx,
        )
    }
}

/// State shared between the timer loop and in-flight ticks
struct TickShared<S: ScoreSource> {
    source: Arc<S>,
    match_id: MatchId,
    gate: SequenceGate,
    status: Mutex<PollStatus>,
    events: mpsc::UnboundedSender<PollEvent>,
    stop: watch::Sender<Option<StopReason>>,
    stop_when_completed: bool,
}

impl<S: ScoreSource> TickShared<S> {
    fn request_stop(&self, reason: StopReason) {
        self.stop.send_if_modified(|current| {
            if current.is_none() {
                *current = Some(reason);
                true
            } else {
                false
            }
        });
    }

    fn is_stopped(&self) -> bool {
        self.stop.borrow().is_some()
    }

    fn emit(&self, event: PollEvent) {
        // Receiver gone means nobody renders any more; ticks just finish.
        let _ = self.events.send(event);
    }
}

async fn run_loop<S: ScoreSource + 'static>(
    shared: Arc<TickShared<S>>,
    mut stop_rx: watch::Receiver<Option<StopReason>>,
    period: Duration,
) {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let reason = loop {
        let stopped = *stop_rx.borrow();
        if let Some(reason) = stopped {
            break reason;
        }

        tokio::select! {
            changed = stop_rx.changed() => {
                if changed.is_err() {
                    break StopReason::Cancelled;
                }
            }
            _ = interval.tick() => {
                let ticket = shared.gate.next_ticket();
                tokio::spawn(run_tick(Arc::clone(&shared), ticket));
            }
        }
    };

    tracing::info!(match_id = %shared.match_id, ?reason, "Live score polling stopped");
    shared.emit(PollEvent::Stopped(reason));
}

async fn run_tick<S: ScoreSource + 'static>(shared: Arc<TickShared<S>>, ticket: u64) {
    tracing::debug!(match_id = %shared.match_id, ticket, "Fetching scores");

    let result = shared.source.fetch(&shared.match_id).await;
    if shared.is_stopped() {
        return;
    }

    if let Err(e) = &result {
        tracing::warn!(
            match_id = %shared.match_id,
            ticket,
            error = %e,
            "Error fetching scores"
        );
    }

    let outcome = resolve_tick(
        &shared.gate,
        &mut lock_status(&shared.status),
        ticket,
        result,
        Utc::now(),
        shared.stop_when_completed,
    );

    match outcome {
        TickOutcome::Render {
            snapshot,
            report,
            stop,
        } => {
            if let Some(report) = report {
                shared.emit(PollEvent::Status(report));
            }
            shared.emit(PollEvent::Snapshot { ticket, snapshot });
            if stop {
                shared.request_stop(StopReason::MatchCompleted);
            }
        }
        TickOutcome::Failed { report, .. } => {
            if let Some(report) = report {
                shared.emit(PollEvent::Status(report));
            }
        }
        TickOutcome::Stale => {
            tracing::debug!(
                ticket,
                last_applied = shared.gate.last_applied(),
                "Discarding stale score response"
            );
        }
    }
}

fn lock_status(status: &Mutex<PollStatus>) -> std::sync::MutexGuard<'_, PollStatus> {
    status.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Handle to a running poller. Dropping it stops the timer.
pub struct PollHandle {
    shared: Arc<dyn PollControl>,
    task: Option<JoinHandle<()>>,
}

/// Type-erased view of the shared tick state
trait PollControl: Send + Sync {
    fn request_stop(&self, reason: StopReason);
    fn stop_reason(&self) -> Option<StopReason>;
    fn issued(&self) -> u64;
    fn last_applied(&self) -> u64;
    fn match_id(&self) -> &MatchId;
}

impl<S: ScoreSource> PollControl for TickShared<S> {
    fn request_stop(&self, reason: StopReason) {
        TickShared::request_stop(self, reason)
    }

    fn stop_reason(&self) -> Option<StopReason> {
        *self.stop.borrow()
    }

    fn issued(&self) -> u64 {
        self.gate.issued()
    }

    fn last_applied(&self) -> u64 {
        self.gate.last_applied()
    }

    fn match_id(&self) -> &MatchId {
        &self.match_id
    }
}

impl PollHandle {
    /// Stop the timer. In-flight responses are dropped instead of rendered.
    pub fn cancel(&self) {
        self.shared.request_stop(StopReason::Cancelled);
    }

    /// Why the poller stopped, if it has
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.shared.stop_reason()
    }

    pub fn match_id(&self) -> &MatchId {
        self.shared.match_id()
    }

    /// Ticks fired so far
    pub fn ticks(&self) -> u64 {
        self.shared.issued()
    }

    /// Ticket of the last rendered snapshot (0 if none)
    pub fn last_applied(&self) -> u64 {
        self.shared.last_applied()
    }

    /// Wait for the timer loop to exit
    pub async fn join(mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        if self.task.is_some() {
            self.cancel();
        }
    }
}
