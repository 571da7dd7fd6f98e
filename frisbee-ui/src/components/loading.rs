//! Loading screen

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use frisbee_live::ui::dom::{HIDDEN_CLASS, LOADING_SCREEN_ID};
use frisbee_live::ui::{loading_phase, LoadingPhase};

use crate::dom;

/// Fade the loading screen out once the page has finished loading
pub fn init_loading_screen(step_ms: u32) {
    let Some(screen) = dom::by_id(LOADING_SCREEN_ID) else {
        return;
    };
    let Ok(screen) = screen.dyn_into::<HtmlElement>() else {
        return;
    };

    let already_loaded = dom::document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if already_loaded {
        schedule_fade_out(screen, step_ms);
        return;
    }

    let Some(window) = dom::window() else {
        return;
    };
    let mut screen = Some(screen);
    dom::listen(&window, "load", move |_: Event| {
        if let Some(screen) = screen.take() {
            schedule_fade_out(screen, step_ms);
        }
    });
}

fn schedule_fade_out(screen: HtmlElement, step_ms: u32) {
    for elapsed in [step_ms, step_ms * 2] {
        let screen = screen.clone();
        Timeout::new(elapsed, move || {
            apply_phase(&screen, loading_phase(u64::from(elapsed), u64::from(step_ms)));
        })
        .forget();
    }
}

fn apply_phase(screen: &HtmlElement, phase: LoadingPhase) {
    match phase {
        LoadingPhase::Shown => {}
        LoadingPhase::Fading => {
            let _ = screen.class_list().add_1(HIDDEN_CLASS);
        }
        LoadingPhase::Gone => {
            let _ = screen.style().set_property("display", "none");
        }
    }
}
