//! API Client
//!
//! Calls to the match tracker's JSON endpoints.

pub mod client;

pub use client::fetch_scores;
