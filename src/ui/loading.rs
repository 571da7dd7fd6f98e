//! Loading screen fade-out
//!
//! After the page finishes loading the screen waits, fades (`hidden` class),
//! then is taken out of layout (`display: none`).

/// Default delay before each step
pub const LOADING_STEP_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Shown,
    Fading,
    Gone,
}

/// Phase of the loading screen `elapsed_ms` after the load event
pub fn loading_phase(elapsed_ms: u64, step_ms: u64) -> LoadingPhase {
    if elapsed_ms < step_ms {
        LoadingPhase::Shown
    } else if elapsed_ms < step_ms * 2 {
        LoadingPhase::Fading
    } else {
        LoadingPhase::Gone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases() {
        assert_eq!(loading_phase(0, LOADING_STEP_MS), LoadingPhase::Shown);
        assert_eq!(loading_phase(500, LOADING_STEP_MS), LoadingPhase::Fading);
        assert_eq!(loading_phase(999, LOADING_STEP_MS), LoadingPhase::Fading);
        assert_eq!(loading_phase(1_000, LOADING_STEP_MS), LoadingPhase::Gone);
    }
}
