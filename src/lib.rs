//! # Frisbee Live
//!
//! Presentation glue for the frisbee match tracker: live score polling,
//! timeline rendering and the small page behaviours around them.
//!
//! ## Modules
//!
//! - [`live`]: match id extraction, score snapshots, response ordering,
//!   poll status and (feature `native`) the tokio poller
//! - [`render`]: scoreboard and timeline rendering with HTML escaping
//! - [`ui`]: page bootstrapper state (menu, theme, flash messages,
//!   loading screen, form guards)
//! - `config` (feature `native`): TOML configuration with env overrides
//!
//! With default features off the crate builds for `wasm32-unknown-unknown`
//! and is used by the browser bootstrapper in `frisbee-ui`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use frisbee_live::live::{
//!     HttpScoreSource, HttpSourceConfig, LivePoller, PollEvent, PollerConfig,
//! };
//! use frisbee_live::render::render_timeline_text;
//! use frisbee_live::ui::PageContext;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = Arc::new(HttpScoreSource::new(HttpSourceConfig::default())?);
//!     let poller = LivePoller::new(source, PollerConfig::default());
//!
//!     let page = PageContext::new("/match/42").with_match_detail().with_live_badge();
//!     if let Some((_handle, mut events)) = poller.start_for_page(&page) {
//!         while let Some(event) = events.recv().await {
//!             match event {
//!                 PollEvent::Snapshot { snapshot, .. } => {
//!                     println!("{}", render_timeline_text(&snapshot.scores));
//!                 }
//!                 PollEvent::Stopped(_) => break,
//!                 PollEvent::Status(_) => {}
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#[cfg(feature = "native")]
pub mod config;
pub mod live;
pub mod render;
pub mod ui;

// Re-export top-level types for convenience
pub use live::{
    LiveError, LiveResult, MatchId, MatchStatus, PollStatus, ScoreEvent, ScoreSnapshot,
    SequenceGate, StatusReport,
};

#[cfg(feature = "native")]
pub use live::{
    HttpScoreSource, HttpSourceConfig, LivePoller, PollEvent, PollHandle, PollerConfig,
    ScoreSource, StopReason,
};

pub use render::{
    apply_snapshot, render, render_timeline_html, render_timeline_text, MemoryDisplay,
    RenderedMatch, ScoreDisplay, Scoreboard,
};

pub use ui::{PageContext, Theme, ValidationError};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
