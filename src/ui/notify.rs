//! Transient notifications
//!
//! A fixed-position toast in the top right corner, coloured by kind. It
//! starts sliding out after 3000 ms and is removed once the 300 ms
//! animation has played.

/// Time a notification stays on screen before sliding out
pub const NOTIFICATION_DISMISS_MS: u64 = 3000;
/// Length of the slide-out animation
pub const NOTIFICATION_EXIT_ANIMATION_MS: u64 = 300;

/// Notification flavour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    /// `"success"` and `"error"` map to their kinds; anything else is info
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            _ => NotificationKind::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#22c55e",
            NotificationKind::Error => "#ef4444",
            NotificationKind::Info => "#2563eb",
        }
    }

    /// Class attribute for the toast element
    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    /// Inline style for the toast element
    pub fn css_text(&self) -> String {
        format!(
            "position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; \
             background: {}; color: white; border-radius: 0.5rem; \
             box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); z-index: 1000; \
             animation: slideIn 0.3s ease-out;",
            self.background()
        )
    }
}
