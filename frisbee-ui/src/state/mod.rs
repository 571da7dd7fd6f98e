//! State Management
//!
//! Per-behaviour state bound to browser facilities: the live score poller
//! and the `localStorage`-backed theme store.

pub mod live;
pub mod storage;

pub use live::{LiveConfig, LiveLifecycle};
pub use storage::LocalThemeStore;
