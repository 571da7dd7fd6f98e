//! Live Scores
//!
//! Everything between "this page shows a live match" and "here is a snapshot
//! to render":
//!
//! - [`MatchId`]: extracted once from the page path
//! - [`ScoreSnapshot`]: full match state returned by each poll
//! - [`SequenceGate`]: drops responses that arrive after a newer one
//! - [`PollStatus`]: rate-limited failure indicator
//! - [`resolve_tick`]: one fetch result in, render/report/stop decision out
//! - `LivePoller` / `HttpScoreSource` (feature `native`): tokio timer and
//!   reqwest client driving the loop outside the browser

mod error;
mod match_id;
mod sequence;
mod snapshot;
mod status;
mod tick;

#[cfg(feature = "native")]
mod poller;
#[cfg(feature = "native")]
mod source;

pub use error::{LiveError, LiveResult};
pub use match_id::MatchId;
pub use sequence::SequenceGate;
pub use snapshot::{MatchStatus, ScoreEvent, ScoreSnapshot};
pub use status::{PollStatus, StatusReport, DEFAULT_REPORT_INTERVAL_MS};
pub use tick::{resolve_tick, TickOutcome};

#[cfg(feature = "native")]
pub use poller::{
    LivePoller, PollEvent, PollHandle, PollerConfig, StopReason, DEFAULT_POLL_INTERVAL_MS,
};
#[cfg(feature = "native")]
pub use source::{HttpScoreSource, HttpSourceConfig, ScoreSource};
