//! Dark mode toggle

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use frisbee_live::ui::dom::{THEME_ATTRIBUTE, THEME_TOGGLE_ID};
use frisbee_live::ui::{Theme, ThemeState};

use crate::dom;
use crate::state::LocalThemeStore;

/// Apply the saved theme and wire the toggle button
pub fn init_theme_toggle() {
    let Some(toggle) = dom::by_id(THEME_TOGGLE_ID) else {
        return;
    };

    let state = ThemeState::load(LocalThemeStore);
    apply_theme(state.current());

    let state = Rc::new(RefCell::new(state));
    let button = toggle.clone();
    dom::listen(&toggle, "click", move |_: MouseEvent| {
        let theme = match state.borrow_mut().toggle() {
            Ok(theme) => theme,
            Err(e) => {
                dom::log_error(&format!("Failed to save theme: {}", e));
                state.borrow().current()
            }
        };
        apply_theme(theme);
        spin(&button);
    });
}

fn apply_theme(theme: Theme) {
    if let Some(root) = dom::document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}

fn spin(button: &web_sys::Element) {
    let Some(button) = button.dyn_ref::<HtmlElement>().cloned() else {
        return;
    };

    let _ = button.style().set_property("transform", "rotate(360deg)");
    Timeout::new(300, move || {
        let _ = button.style().set_property("transform", "rotate(0deg)");
    })
    .forget();
}
