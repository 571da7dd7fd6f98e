//! Scoreboard and timeline binding

use gloo_timers::callback::Timeout;

use frisbee_live::live::StatusReport;
use frisbee_live::render::{ScoreDisplay, Scoreboard, PULSE_CLASS, PULSE_DURATION_MS};
use frisbee_live::ui::dom::{HIDDEN_CLASS, LIVE_SCORE_SELECTOR, LIVE_STATUS_ID, TIMELINE_ID};

use crate::dom;

/// The `.live-score` elements and `#timeline` of the current page
#[derive(Debug, Default)]
pub struct DomScoreDisplay;

impl ScoreDisplay for DomScoreDisplay {
    fn show_scores(&mut self, scoreboard: &Scoreboard) -> bool {
        let slots = dom::query_all(None, LIVE_SCORE_SELECTOR);
        if slots.len() < 2 {
            return false;
        }

        slots[0].set_text_content(Some(&scoreboard.team1));
        slots[1].set_text_content(Some(&scoreboard.team2));
        true
    }

    fn pulse(&mut self) {
        for slot in dom::query_all(None, LIVE_SCORE_SELECTOR) {
            let _ = slot.class_list().add_1(PULSE_CLASS);
            Timeout::new(PULSE_DURATION_MS, move || {
                let _ = slot.class_list().remove_1(PULSE_CLASS);
            })
            .forget();
        }
    }

    fn show_timeline(&mut self, html: &str) -> bool {
        match dom::by_id(TIMELINE_ID) {
            Some(timeline) => {
                timeline.set_inner_html(html);
                true
            }
            None => false,
        }
    }
}

/// Optional `#live-status` element
#[derive(Debug, Default)]
pub struct StatusIndicator;

impl StatusIndicator {
    pub fn show(&self, report: &StatusReport) {
        let Some(el) = dom::by_id(LIVE_STATUS_ID) else {
            return;
        };

        match report {
            StatusReport::Healthy => {
                el.set_text_content(None);
                let _ = el.class_list().add_1(HIDDEN_CLASS);
            }
            StatusReport::Degraded { message, .. } => {
                el.set_text_content(Some(message));
                let _ = el.class_list().remove_1(HIDDEN_CLASS);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frisbee_live::live::{ScoreEvent, ScoreSnapshot};
    use frisbee_live::render::apply_snapshot;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(html: &str) {
        let body = dom::document().and_then(|d| d.body()).unwrap();
        body.set_inner_html(html);
    }

    #[wasm_bindgen_test]
    fn test_snapshot_renders_into_page() {
        mount(
            r#"<span class="live-score">0</span><span class="live-score">0</span>
               <div id="timeline"></div>"#,
        );
        let snapshot = ScoreSnapshot::new(3, 5, vec![ScoreEvent::new("10:02 AM", "Ann", "Red", 2)]);

        apply_snapshot(&mut DomScoreDisplay, &snapshot);

        let slots = dom::query_all(None, LIVE_SCORE_SELECTOR);
        assert_eq!(slots[0].text_content().as_deref(), Some("3"));
        assert_eq!(slots[1].text_content().as_deref(), Some("5"));
        assert!(slots[0].class_list().contains(PULSE_CLASS));

        let timeline = dom::by_id(TIMELINE_ID).unwrap();
        assert_eq!(dom::query_all(Some(&timeline), ".timeline-item").len(), 1);
        let text = timeline.text_content().unwrap();
        assert!(text.contains("Ann"));
        assert!(text.contains("(Red)"));
        assert!(text.contains("+2 points"));
    }

    #[wasm_bindgen_test]
    fn test_single_score_slot_is_left_alone() {
        mount(r#"<span class="live-score">9</span>"#);

        let written = DomScoreDisplay.show_scores(&Scoreboard {
            team1: "1".to_string(),
            team2: "2".to_string(),
        });

        assert!(!written);
        let slots = dom::query_all(None, LIVE_SCORE_SELECTOR);
        assert_eq!(slots[0].text_content().as_deref(), Some("9"));
    }
}
