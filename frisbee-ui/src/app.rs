//! Page Bootstrapper
//!
//! Runs once per page load and wires every behaviour independently.

use std::cell::RefCell;
use std::rc::Rc;
use web_sys::PageTransitionEvent;

use frisbee_live::ui::dom::{
    LIVE_BADGE_SELECTOR, MATCH_DETAIL_SELECTOR, SCORING_CONTAINER_SELECTOR,
};
use frisbee_live::ui::{PageContext, FLASH_DISMISS_MS, LOADING_STEP_MS};

use crate::components::{flash, forms, loading, nav, scroll, theme};
use crate::dom;
use crate::exports;
use crate::state::{LiveConfig, LiveLifecycle};

/// Inspect the current page for the markers the poller cares about
pub fn page_context() -> PageContext {
    let path = dom::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();

    let mut page = PageContext::new(path);
    page.match_detail = dom::query(MATCH_DETAIL_SELECTOR).is_some();
    page.live_badge = dom::query(LIVE_BADGE_SELECTOR).is_some();
    page.scoring = dom::query(SCORING_CONTAINER_SELECTOR).is_some();
    page
}

/// Wire up every page behaviour
pub fn bootstrap() {
    exports::install();
    loading::init_loading_screen(LOADING_STEP_MS as u32);
    theme::init_theme_toggle();
    nav::init_menu();
    forms::init_delete_confirmations();
    forms::init_form_validations();
    scroll::init_smooth_scrolling();
    flash::init_flash_messages(FLASH_DISMISS_MS);

    start_live_updates(&page_context());
}

fn start_live_updates(page: &PageContext) {
    let lifecycle = LiveLifecycle::new(page.clone(), LiveConfig::default());
    if !lifecycle.is_live_page() {
        return;
    }
    let Some(window) = dom::window() else {
        return;
    };

    // Stop on pagehide; resume when the page comes back from the bfcache.
    let lifecycle = Rc::new(RefCell::new(lifecycle));
    let hidden = Rc::clone(&lifecycle);
    dom::listen(&window, "pagehide", move |_: PageTransitionEvent| {
        hidden.borrow_mut().page_hidden();
    });
    dom::listen(&window, "pageshow", move |event: PageTransitionEvent| {
        lifecycle.borrow_mut().page_shown(event.persisted());
    });
}
