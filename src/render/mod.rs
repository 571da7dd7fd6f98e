//! Score Renderer
//!
//! Turns a [`ScoreSnapshot`] into scoreboard values and timeline markup.
//! Rendering is a pure function of the snapshot: the same snapshot always
//! yields the same output, and the output replaces whatever was shown before.
//!
//! Every server-supplied string is HTML-escaped before it lands in markup.

mod date;
mod display;

pub use date::{format_date, INVALID_DATE};
pub use display::{apply_snapshot, MemoryDisplay, ScoreDisplay};

use crate::live::{ScoreEvent, ScoreSnapshot};

/// Text shown in place of the timeline when a match has no scores yet
pub const EMPTY_TIMELINE_MESSAGE: &str = "No scores yet in this match.";

/// Class added to score elements for the update pulse
pub const PULSE_CLASS: &str = "score-update";

/// How long the update pulse stays on, in milliseconds
pub const PULSE_DURATION_MS: u32 = 500;

/// Escape the five HTML-significant characters
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `+1 point`, `+N points` otherwise
pub fn points_label(points: u32) -> String {
    if points == 1 {
        "+1 point".to_string()
    } else {
        format!("+{} points", points)
    }
}

/// Values for the two `.live-score` elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub team1: String,
    pub team2: String,
}

impl Scoreboard {
    pub fn from_snapshot(snapshot: &ScoreSnapshot) -> Self {
        Self {
            team1: snapshot.team1_score.to_string(),
            team2: snapshot.team2_score.to_string(),
        }
    }

    /// Read `team1_score` and `team2_score` from a loosely typed payload.
    ///
    /// Numbers and strings are shown as-is; a missing or null score yields `None`.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let text = |key: &str| match value.get(key)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        };

        Some(Self {
            team1: text("team1_score")?,
            team2: text("team2_score")?,
        })
    }
}

/// Markup for the empty timeline
pub fn empty_timeline_html() -> String {
    format!("<div class=\"empty-state\">{}</div>", EMPTY_TIMELINE_MESSAGE)
}

/// Render one timeline entry
pub fn render_timeline_item(event: &ScoreEvent) -> String {
    let assist = event
        .assist_by
        .as_deref()
        .map(|name| {
            format!(
                "\n        <div class=\"scorer-assist\">Assist: {}</div>",
                escape_html(name)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="timeline-item">
    <div class="timeline-time">{time}</div>
    <div class="timeline-content">
        <div class="scorer-info">
            <strong>{player}</strong>
            <span class="scorer-team">({team})</span>
        </div>{assist}
        <div class="score-value">{points}</div>
    </div>
</div>"#,
        time = escape_html(&event.timestamp),
        player = escape_html(&event.player_name),
        team = escape_html(&event.team_name),
        assist = assist,
        points = points_label(event.points),
    )
}

/// Render the whole timeline, keeping server order
pub fn render_timeline_html(scores: &[ScoreEvent]) -> String {
    if scores.is_empty() {
        return empty_timeline_html();
    }

    scores
        .iter()
        .map(render_timeline_item)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One plain-text line per entry, e.g. `10:02 AM  Ann (Red) +2 points`
pub fn render_timeline_text(scores: &[ScoreEvent]) -> String {
    if scores.is_empty() {
        return EMPTY_TIMELINE_MESSAGE.to_string();
    }

    scores
        .iter()
        .map(|event| {
            let mut line = format!(
                "{}  {} ({}) {}",
                event.timestamp,
                event.player_name,
                event.team_name,
                points_label(event.points)
            );
            if let Some(assist) = &event.assist_by {
                line.push_str(&format!(" [assist: {}]", assist));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fully rendered view of a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMatch {
    pub scoreboard: Scoreboard,
    pub timeline_html: String,
}

/// Render a snapshot into scoreboard values and timeline markup
pub fn render(snapshot: &ScoreSnapshot) -> RenderedMatch {
    RenderedMatch {
        scoreboard: Scoreboard::from_snapshot(snapshot),
        timeline_html: render_timeline_html(&snapshot.scores),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann_snapshot() -> ScoreSnapshot {
        ScoreSnapshot::new(3, 5, vec![ScoreEvent::new("10:02 AM", "Ann", "Red", 2)])
    }

    #[test]
    fn test_points_label() {
        assert_eq!(points_label(0), "+0 points");
        assert_eq!(points_label(1), "+1 point");
        assert_eq!(points_label(2), "+2 points");
        assert_eq!(points_label(17), "+17 points");
    }

    #[test]
    fn test_renders_scoreboard_and_single_item() {
        let rendered = render(&ann_snapshot());

        assert_eq!(rendered.scoreboard.team1, "3");
        assert_eq!(rendered.scoreboard.team2, "5");
        assert_eq!(rendered.timeline_html.matches("class=\"timeline-item\"").count(), 1);
        assert!(rendered.timeline_html.contains("<div class=\"timeline-time\">10:02 AM</div>"));
        assert!(rendered.timeline_html.contains("<strong>Ann</strong>"));
        assert!(rendered.timeline_html.contains("<span class=\"scorer-team\">(Red)</span>"));
        assert!(rendered.timeline_html.contains("<div class=\"score-value\">+2 points</div>"));

        assert_eq!(
            render_timeline_text(&ann_snapshot().scores),
            "10:02 AM  Ann (Red) +2 points"
        );
    }

    #[test]
    fn test_empty_scores_render_empty_state() {
        let snapshot = ScoreSnapshot::new(0, 0, vec![]);
        let rendered = render(&snapshot);

        assert_eq!(
            rendered.timeline_html,
            "<div class=\"empty-state\">No scores yet in this match.</div>"
        );
        assert_eq!(render_timeline_text(&snapshot.scores), EMPTY_TIMELINE_MESSAGE);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let snapshot = ScoreSnapshot::new(
            4,
            2,
            vec![
                ScoreEvent::new("10:01", "Ann", "Red", 1),
                ScoreEvent::new("10:05", "Bo", "Blue", 2).assisted_by("Cy"),
            ],
        );

        assert_eq!(render(&snapshot), render(&snapshot));
    }

    #[test]
    fn test_preserves_server_order() {
        let scores = vec![
            ScoreEvent::new("10:09", "Zed", "Blue", 1),
            ScoreEvent::new("10:01", "Ann", "Red", 1),
        ];
        let text = render_timeline_text(&scores);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("Zed"));
        assert!(lines[1].contains("Ann"));
    }

    #[test]
    fn test_server_strings_are_escaped() {
        let scores = vec![ScoreEvent::new(
            "<b>now</b>",
            "<script>alert('x')</script>",
            "Tom & \"Jerry\"",
            1,
        )];
        let html = render_timeline_html(&scores);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("(Tom &amp; &quot;Jerry&quot;)"));
        assert!(html.contains("&lt;b&gt;now&lt;/b&gt;"));
    }

    #[test]
    fn test_assist_line_only_when_present() {
        let plain = render_timeline_item(&ScoreEvent::new("t", "Ann", "Red", 1));
        assert!(!plain.contains("scorer-assist"));

        let event = ScoreEvent::new("t", "Ann", "Red", 1).assisted_by("Bo");
        let assisted = render_timeline_item(&event);
        assert!(assisted.contains("<div class=\"scorer-assist\">Assist: Bo</div>"));
    }

    #[test]
    fn test_scoreboard_from_loose_payload() {
        let payload = serde_json::json!({"team1_score": 3, "team2_score": "5"});
        assert_eq!(
            Scoreboard::from_value(&payload),
            Some(Scoreboard {
                team1: "3".to_string(),
                team2: "5".to_string(),
            })
        );

        assert_eq!(Scoreboard::from_value(&serde_json::json!({"team1_score": 3})), None);
        assert_eq!(
            Scoreboard::from_value(&serde_json::json!({"team1_score": 3, "team2_score": null})),
            None
        );
    }
}
