//! Page script API
//!
//! Server templates call into the page script through `window.FrisbeeTracker`
//! (`updateScoreboard`, `updateTimeline`, `showNotification`, `formatDate`).
//! The same functions are also exported from the wasm module.

use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;

use frisbee_live::live::ScoreEvent;
use frisbee_live::render::{
    format_date as format_server_date, render_timeline_html, ScoreDisplay, Scoreboard,
    INVALID_DATE,
};
use frisbee_live::ui::NotificationKind;

use crate::components::notify;
use crate::components::scoreboard::DomScoreDisplay;
use crate::dom;

/// Global the templates look for
pub const GLOBAL_NAME: &str = "FrisbeeTracker";

/// Write `data.team1_score` / `data.team2_score` into the scoreboard and pulse it
#[wasm_bindgen(js_name = updateScoreboard)]
pub fn update_scoreboard(data: JsValue) -> Result<(), JsValue> {
    let value = to_json(&data)?;
    let board = Scoreboard::from_value(&value).ok_or_else(|| {
        JsValue::from_str("updateScoreboard: team1_score and team2_score required")
    })?;

    let mut display = DomScoreDisplay;
    if display.show_scores(&board) {
        display.pulse();
    }
    Ok(())
}

/// Rebuild `#timeline` from an array of score entries
#[wasm_bindgen(js_name = updateTimeline)]
pub fn update_timeline(scores: JsValue) -> Result<(), JsValue> {
    let events: Vec<ScoreEvent> = serde_json::from_value(to_json(&scores)?)
        .map_err(|e| JsValue::from_str(&format!("updateTimeline: {}", e)))?;

    DomScoreDisplay.show_timeline(&render_timeline_html(&events));
    Ok(())
}

/// Show a toast; `kind` is `success`, `error` or anything else for info
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    let kind = kind.as_deref().map(NotificationKind::parse).unwrap_or_default();
    notify::show_notification(message, kind);
}

/// `Jun 1, 2024, 10:02 AM`, or `Invalid Date`
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(value: &str) -> String {
    format_server_date(value).unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Publish the API as `window.FrisbeeTracker`
pub fn install() {
    let Some(window) = dom::window() else {
        return;
    };

    let api = js_sys::Object::new();
    set_function(
        &api,
        "updateScoreboard",
        Closure::wrap(Box::new(|data: JsValue| {
            if let Err(e) = update_scoreboard(data) {
                dom::log_error(&format!("{:?}", e));
            }
        }) as Box<dyn FnMut(JsValue)>),
    );
    set_function(
        &api,
        "updateTimeline",
        Closure::wrap(Box::new(|scores: JsValue| {
            if let Err(e) = update_timeline(scores) {
                dom::log_error(&format!("{:?}", e));
            }
        }) as Box<dyn FnMut(JsValue)>),
    );
    set_function(
        &api,
        "showNotification",
        Closure::wrap(Box::new(|message: String, kind: Option<String>| {
            show_notification(&message, kind)
        }) as Box<dyn FnMut(String, Option<String>)>),
    );
    set_function(
        &api,
        "formatDate",
        Closure::wrap(
            Box::new(|value: String| format_date(&value)) as Box<dyn FnMut(String) -> String>
        ),
    );

    if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str(GLOBAL_NAME), &api) {
        dom::log_error(&format!("Failed to install {}: {:?}", GLOBAL_NAME, e));
    }
}

fn set_function<T>(target: &js_sys::Object, name: &str, closure: Closure<T>)
where
    T: ?Sized + WasmClosure,
{
    if let Err(e) = js_sys::Reflect::set(target, &JsValue::from_str(name), closure.as_ref()) {
        dom::log_error(&format!("Failed to set {}.{}: {:?}", GLOBAL_NAME, name, e));
    }
    closure.forget();
}

/// Round-trip a JS value through `JSON.stringify`
fn to_json(value: &JsValue) -> Result<serde_json::Value, JsValue> {
    let text = js_sys::JSON::stringify(value)?
        .as_string()
        .ok_or_else(|| JsValue::from_str("value has no JSON form"))?;
    serde_json::from_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_install_publishes_global() {
        install();

        let window = dom::window().unwrap();
        let api = js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_NAME)).unwrap();
        for name in ["updateScoreboard", "updateTimeline", "showNotification", "formatDate"] {
            let function = js_sys::Reflect::get(&api, &JsValue::from_str(name)).unwrap();
            assert!(function.is_function(), "{} missing", name);
        }
    }

    #[wasm_bindgen_test]
    fn test_format_date_matches_template_helper() {
        assert_eq!(format_date("2024-06-01T10:02:00"), "Jun 1, 2024, 10:02 AM");
        assert_eq!(format_date("soon"), "Invalid Date");
    }

    #[wasm_bindgen_test]
    fn test_update_timeline_from_plain_objects() {
        let body = dom::document().and_then(|d| d.body()).unwrap();
        body.set_inner_html(r#"<div id="timeline"></div>"#);

        let scores = js_sys::JSON::parse(
            r#"[{"timestamp": "10:02 AM", "player_name": "Ann", "team_name": "Red", "points": 1}]"#,
        )
        .unwrap();
        update_timeline(scores).unwrap();

        let text = dom::by_id("timeline").unwrap().text_content().unwrap();
        assert!(text.contains("+1 point"));
        assert!(update_timeline(JsValue::from_str("nope")).is_err());
    }
}
