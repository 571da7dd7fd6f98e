//! Page Bootstrapper state
//!
//! Independent page behaviours, each an explicit state object instead of
//! ambient globals. The browser crate binds them to DOM events; every one of
//! them is a no-op when its target element is missing.

pub mod dom;
mod flash;
mod forms;
mod loading;
mod menu;
mod notify;
mod page;
mod scroll;
mod theme;

pub use flash::{FlashPhase, FlashQueue, FLASH_DISMISS_MS, FLASH_EXIT_ANIMATION_MS};
pub use forms::{
    validate_match_form, validate_player_form, DeleteTarget, ValidationError,
    MIN_PLAYER_NAME_CHARS,
};
pub use loading::{loading_phase, LoadingPhase, LOADING_STEP_MS};
pub use menu::{MenuClick, MenuState};
pub use notify::{NotificationKind, NOTIFICATION_DISMISS_MS, NOTIFICATION_EXIT_ANIMATION_MS};
pub use page::PageContext;
pub use scroll::anchor_target;
pub use theme::{MemoryThemeStore, Theme, ThemeError, ThemeState, ThemeStore};

#[cfg(feature = "native")]
pub use theme::FileThemeStore;
