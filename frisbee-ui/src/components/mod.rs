//! Page Behaviours
//!
//! One initializer per behaviour. Each checks for its target elements and
//! does nothing when they are missing.

pub mod flash;
pub mod forms;
pub mod loading;
pub mod nav;
pub mod notify;
pub mod scoreboard;
pub mod scroll;
pub mod theme;
