//! Smooth scrolling for in-page anchors

use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use frisbee_live::ui::anchor_target;
use frisbee_live::ui::dom::ANCHOR_LINK_SELECTOR;

use crate::dom;

pub fn init_smooth_scrolling() {
    for anchor in dom::query_all(None, ANCHOR_LINK_SELECTOR) {
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::listen(&anchor, "click", move |event: MouseEvent| {
            event.prevent_default();

            let Some(target) = anchor_target(&href).and_then(dom::by_id) else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}
