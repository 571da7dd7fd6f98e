//! Frisbee Tracker Page Script
//!
//! Browser side of the match tracker, compiled to WebAssembly and loaded by
//! every server-rendered page.
//!
//! # Features
//!
//! - Live score polling on live match pages
//! - Mobile menu, theme toggle, loading screen
//! - Flash message auto-dismiss
//! - Delete confirmation and form guards
//! - `window.FrisbeeTracker` helpers for server templates
//!
//! # Architecture
//!
//! The HTML comes from the server templates; this script only attaches
//! behaviour to it. All state and rendering logic lives in `frisbee-live`;
//! the modules here bind it to the DOM.

mod api;
mod app;
mod components;
mod dom;
mod exports;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    app::bootstrap();
}
