//! Flash message auto-dismiss
//!
//! Each flash message slides out 5000 ms after render and is removed once
//! the 300 ms animation has played. Times are milliseconds since page load.

/// Default time a flash message stays on screen
pub const FLASH_DISMISS_MS: u64 = 5000;
/// Length of the slide-out animation
pub const FLASH_EXIT_ANIMATION_MS: u64 = 300;

/// Lifecycle of one flash message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    Visible,
    Leaving,
    Removed,
}

/// Tracks every flash message on the page independently
#[derive(Debug, Clone)]
pub struct FlashQueue {
    dismiss_after_ms: u64,
    shown_at: Vec<u64>,
}

impl Default for FlashQueue {
    fn default() -> Self {
        Self::new(FLASH_DISMISS_MS)
    }
}

impl FlashQueue {
    pub fn new(dismiss_after_ms: u64) -> Self {
        Self {
            dismiss_after_ms,
            shown_at: Vec::new(),
        }
    }

    /// Register a message rendered at `now_ms`; returns its index
    pub fn push(&mut self, now_ms: u64) -> usize {
        self.shown_at.push(now_ms);
        self.shown_at.len() - 1
    }

    pub fn len(&self) -> usize {
        self.shown_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown_at.is_empty()
    }

    /// Phase of message `index` at `now_ms`
    pub fn phase(&self, index: usize, now_ms: u64) -> Option<FlashPhase> {
        let shown = *self.shown_at.get(index)?;
        let age = now_ms.saturating_sub(shown);

        Some(if age < self.dismiss_after_ms {
            FlashPhase::Visible
        } else if age < self.dismiss_after_ms + FLASH_EXIT_ANIMATION_MS {
            FlashPhase::Leaving
        } else {
            FlashPhase::Removed
        })
    }

    /// Indexes still on screen (visible or leaving) at `now_ms`
    pub fn on_screen(&self, now_ms: u64) -> Vec<usize> {
        (0..self.shown_at.len())
            .filter(|&i| self.phase(i, now_ms) != Some(FlashPhase::Removed))
            .collect()
    }

    /// Delay until the slide-out starts, for timer-driven hosts
    pub fn dismiss_after_ms(&self) -> u64 {
        self.dismiss_after_ms
    }
}
