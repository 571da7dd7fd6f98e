//! DOM contract
//!
//! Ids and classes owned by the server-rendered templates.

pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_LINKS_ID: &str = "navLinks";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const TIMELINE_ID: &str = "timeline";
/// Optional poll status indicator
pub const LIVE_STATUS_ID: &str = "live-status";

pub const MATCH_DETAIL_SELECTOR: &str = ".match-detail-container";
pub const SCORING_CONTAINER_SELECTOR: &str = ".scoring-container";
pub const LIVE_BADGE_SELECTOR: &str = ".match-status-badge.live";
pub const LIVE_SCORE_SELECTOR: &str = ".live-score";
pub const FLASH_MESSAGE_SELECTOR: &str = ".flash-message";
pub const DELETE_FORM_SELECTOR: &str = "form[action*=\"delete\"]";
pub const MATCH_FORM_SELECTOR: &str = ".match-form";
pub const PLAYER_FORM_SELECTOR: &str = ".player-form";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";

/// Class toggled on the menu and its trigger while open
pub const ACTIVE_CLASS: &str = "active";
/// Class added to the loading screen before it is removed
pub const HIDDEN_CLASS: &str = "hidden";
/// Attribute on the document root carrying the theme
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Client storage key for the theme
pub const THEME_STORAGE_KEY: &str = "theme";
