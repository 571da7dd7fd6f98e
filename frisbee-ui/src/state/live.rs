//! Live Score Updates
//!
//! Browser poller: a `gloo` interval fires every tick, each tick fetches in
//! its own task. Results go through the same tick resolution as the native
//! poller, so an old response never overwrites a newer render. Dropping
//! [`LiveUpdates`] (or calling [`LiveUpdates::stop`]) clears the interval.

use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::spawn_local;

use frisbee_live::live::{
    resolve_tick, LiveResult, MatchId, PollStatus, ScoreSnapshot, SequenceGate, TickOutcome,
    DEFAULT_REPORT_INTERVAL_MS,
};
use frisbee_live::render::apply_snapshot;
use frisbee_live::ui::PageContext;

use crate::api;
use crate::components::scoreboard::{DomScoreDisplay, StatusIndicator};
use crate::dom;

/// Poller settings
#[derive(Debug, Clone, Copy)]
pub struct LiveConfig {
    pub interval_ms: u32,
    pub stop_when_completed: bool,
    pub status_report_interval_ms: u64,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            interval_ms: 3000,
            stop_when_completed: true,
            status_report_interval_ms: DEFAULT_REPORT_INTERVAL_MS,
        }
    }
}

struct Shared {
    match_id: MatchId,
    gate: SequenceGate,
    status: RefCell<PollStatus>,
    display: RefCell<DomScoreDisplay>,
    indicator: StatusIndicator,
    interval: RefCell<Option<Interval>>,
    stop_when_completed: bool,
}

/// Handle to the running poller
pub struct LiveUpdates {
    shared: Rc<Shared>,
}

impl LiveUpdates {
    /// Start polling if `page` is a live match view; `None` otherwise
    pub fn start(page: &PageContext, config: LiveConfig) -> Option<Self> {
        let match_id = page.live_match_id()?;

        let shared = Rc::new(Shared {
            match_id,
            gate: SequenceGate::new(),
            status: RefCell::new(PollStatus::new(config.status_report_interval_ms)),
            display: RefCell::new(DomScoreDisplay),
            indicator: StatusIndicator,
            interval: RefCell::new(None),
            stop_when_completed: config.stop_when_completed,
        });

        let weak = Rc::downgrade(&shared);
        let interval = Interval::new(config.interval_ms, move || tick(&weak));
        *shared.interval.borrow_mut() = Some(interval);

        dom::log(&format!(
            "Live updates started for match {} every {} ms",
            shared.match_id, config.interval_ms
        ));

        Some(Self { shared })
    }

    /// Clear the interval. Responses still in flight are ignored.
    pub fn stop(&self) {
        self.shared.stop();
    }

    pub fn is_running(&self) -> bool {
        self.shared.is_running()
    }
}

impl Drop for LiveUpdates {
    fn drop(&mut self) {
        self.shared.stop();
    }
}

/// Keeps the poller in step with page visibility.
///
/// `pagehide` stops it; a `pageshow` that restores the page from the
/// back/forward cache starts a fresh one for the same match.
pub struct LiveLifecycle {
    page: PageContext,
    config: LiveConfig,
    updates: Option<LiveUpdates>,
}

impl LiveLifecycle {
    /// Start polling now if `page` is a live match view
    pub fn new(page: PageContext, config: LiveConfig) -> Self {
        let updates = LiveUpdates::start(&page, config);
        Self {
            page,
            config,
            updates,
        }
    }

    /// Whether this page polls at all
    pub fn is_live_page(&self) -> bool {
        self.page.live_match_id().is_some()
    }

    pub fn is_running(&self) -> bool {
        self.updates.as_ref().is_some_and(LiveUpdates::is_running)
    }

    pub fn page_hidden(&mut self) {
        if let Some(updates) = self.updates.take() {
            updates.stop();
        }
    }

    pub fn page_shown(&mut self, persisted: bool) {
        if persisted && !self.is_running() {
            self.updates = LiveUpdates::start(&self.page, self.config);
        }
    }
}

impl Shared {
    fn stop(&self) {
        if self.interval.borrow_mut().take().is_some() {
            dom::log(&format!("Live updates stopped for match {}", self.match_id));
        }
    }

    fn is_running(&self) -> bool {
        self.interval.borrow().is_some()
    }

    fn handle_result(&self, ticket: u64, result: LiveResult<ScoreSnapshot>) {
        if !self.is_running() {
            return;
        }
        if let Err(e) = &result {
            dom::log_error(&format!("Error fetching scores: {}", e));
        }

        let outcome = resolve_tick(
            &self.gate,
            &mut self.status.borrow_mut(),
            ticket,
            result,
            chrono::Utc::now(),
            self.stop_when_completed,
        );

        match outcome {
            TickOutcome::Render {
                snapshot,
                report,
                stop,
            } => {
                if let Some(report) = report {
                    self.indicator.show(&report);
                }
                apply_snapshot(&mut *self.display.borrow_mut(), &snapshot);
                if stop {
                    self.stop();
                }
            }
            TickOutcome::Failed {
                report: Some(report),
                ..
            } => self.indicator.show(&report),
            TickOutcome::Failed { report: None, .. } | TickOutcome::Stale => {}
        }
    }
}

fn tick(weak: &Weak<Shared>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };

    let ticket = shared.gate.next_ticket();
    spawn_local(async move {
        let result = api::fetch_scores(&shared.match_id).await;
        shared.handle_result(ticket, result);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn live_page() -> PageContext {
        PageContext::new("/match/42").with_match_detail().with_live_badge()
    }

    #[wasm_bindgen_test]
    fn test_restored_page_resumes_polling() {
        let mut lifecycle = LiveLifecycle::new(live_page(), LiveConfig::default());
        assert!(lifecycle.is_running());

        lifecycle.page_hidden();
        assert!(!lifecycle.is_running());

        lifecycle.page_shown(true);
        assert!(lifecycle.is_running());
    }

    #[wasm_bindgen_test]
    fn test_pageshow_without_cache_restore_does_not_start() {
        let mut lifecycle = LiveLifecycle::new(live_page(), LiveConfig::default());
        lifecycle.page_hidden();

        lifecycle.page_shown(false);
        assert!(!lifecycle.is_running());
    }

    #[wasm_bindgen_test]
    fn test_non_live_page_never_polls() {
        let page = PageContext::new("/match/42").with_match_detail();
        let mut lifecycle = LiveLifecycle::new(page, LiveConfig::default());
        assert!(!lifecycle.is_live_page());

        lifecycle.page_shown(true);
        assert!(!lifecycle.is_running());
    }
}
