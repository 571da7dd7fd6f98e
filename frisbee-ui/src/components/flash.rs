//! Flash message auto-dismiss

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use frisbee_live::ui::dom::FLASH_MESSAGE_SELECTOR;
use frisbee_live::ui::{FlashPhase, FlashQueue, FLASH_EXIT_ANIMATION_MS};

use crate::dom;

/// Slide every flash message out after `dismiss_ms`, then remove it
pub fn init_flash_messages(dismiss_ms: u64) {
    let messages = dom::query_all(None, FLASH_MESSAGE_SELECTOR);
    if messages.is_empty() {
        return;
    }

    let mut queue = FlashQueue::new(dismiss_ms);
    let shown_at = dom::now_ms();

    for message in messages {
        let index = queue.push(shown_at);
        let queue = queue.clone();

        for delay in [dismiss_ms, dismiss_ms + FLASH_EXIT_ANIMATION_MS] {
            let message = message.clone();
            let queue = queue.clone();
            Timeout::new(delay as u32, move || {
                match queue.phase(index, shown_at + delay) {
                    Some(FlashPhase::Leaving) => {
                        if let Some(el) = message.dyn_ref::<HtmlElement>() {
                            let _ = el
                                .style()
                                .set_property("animation", "slideOutRight 0.3s ease-out");
                        }
                    }
                    Some(FlashPhase::Removed) => message.remove(),
                    Some(FlashPhase::Visible) | None => {}
                }
            })
            .forget();
        }
    }
}
