//! Toast notifications for page scripts

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use frisbee_live::ui::{NotificationKind, NOTIFICATION_DISMISS_MS, NOTIFICATION_EXIT_ANIMATION_MS};

use crate::dom;

/// Append a toast to `<body>`; it slides out and removes itself
pub fn show_notification(message: &str, kind: NotificationKind) -> Option<HtmlElement> {
    let document = dom::document()?;
    let body = document.body()?;
    let toast = document
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;

    toast.set_class_name(&kind.class_name());
    toast.set_text_content(Some(message));
    toast.style().set_css_text(&kind.css_text());
    body.append_child(&toast).ok()?;

    let leaving = toast.clone();
    Timeout::new(NOTIFICATION_DISMISS_MS as u32, move || {
        let _ = leaving
            .style()
            .set_property("animation", "slideOut 0.3s ease-out");
        let removed = leaving.clone();
        Timeout::new(NOTIFICATION_EXIT_ANIMATION_MS as u32, move || removed.remove()).forget();
    })
    .forget();

    Some(toast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_toast_is_appended_with_kind_class() {
        let toast = show_notification("Saved <b>", NotificationKind::Success).unwrap();

        assert!(toast.is_connected());
        assert!(toast.class_list().contains("notification-success"));
        assert_eq!(toast.text_content().as_deref(), Some("Saved <b>"));
        assert_eq!(toast.children().length(), 0);
        toast.remove();
    }
}
