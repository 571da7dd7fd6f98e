//! Form guards
//!
//! Delete confirmation plus the match and player form checks. A failed check
//! cancels the submit and shows a blocking alert.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, SubmitEvent};

use frisbee_live::ui::dom::{DELETE_FORM_SELECTOR, MATCH_FORM_SELECTOR, PLAYER_FORM_SELECTOR};
use frisbee_live::ui::{validate_match_form, validate_player_form, DeleteTarget, ValidationError};

use crate::dom;

/// Ask before any delete form submits
pub fn init_delete_confirmations() {
    for form in dom::query_all(None, DELETE_FORM_SELECTOR) {
        if form.has_attribute("onsubmit") {
            continue;
        }
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            continue;
        };

        let target = form.clone();
        dom::listen(&form, "submit", move |event: SubmitEvent| {
            let item = DeleteTarget::from_action(&target.action()).unwrap_or(DeleteTarget::Item);
            let confirmed = dom::window()
                .and_then(|w| w.confirm_with_message(&item.confirmation_prompt()).ok())
                .unwrap_or(false);
            if !confirmed {
                event.prevent_default();
            }
        });
    }
}

/// Attach the match and player form checks
pub fn init_form_validations() {
    if let Some(form) = dom::query(MATCH_FORM_SELECTOR) {
        guard_match_form(&form);
    }
    if let Some(form) = dom::query(PLAYER_FORM_SELECTOR) {
        guard_player_form(&form);
    }
}

/// Block the submit when both teams are the same.
/// A form missing either team field is not checked.
fn guard_match_form(form: &Element) {
    let scope = form.clone();
    dom::listen(form, "submit", move |event: SubmitEvent| {
        let (Some(team1), Some(team2)) = (
            field_value(&scope, "team1_id"),
            field_value(&scope, "team2_id"),
        ) else {
            return;
        };
        block_on_error(&event, validate_match_form(&team1, &team2));
    });
}

/// Block the submit when the player name is too short.
/// A form without a name field is not checked.
fn guard_player_form(form: &Element) {
    let scope = form.clone();
    dom::listen(form, "submit", move |event: SubmitEvent| {
        let Some(name) = field_value(&scope, "name") else {
            return;
        };
        block_on_error(&event, validate_player_form(&name));
    });
}

fn block_on_error(event: &SubmitEvent, result: Result<(), ValidationError>) {
    if let Err(err) = result {
        event.prevent_default();
        if let Some(window) = dom::window() {
            let _ = window.alert_with_message(&err.to_string());
        }
    }
}

/// Value of the `<input>` or `<select>` named `name` inside `form`
fn field_value(form: &Element, name: &str) -> Option<String> {
    let field = form
        .query_selector(&format!("[name=\"{}\"]", name))
        .ok()
        .flatten()?;

    if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    field.dyn_ref::<HtmlInputElement>().map(|input| input.value())
}
