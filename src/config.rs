use crate::intro::sequencer::IntroTiming;

/// Brand letters broken open by the intro, one block each.
pub const INTRO_LABELS: &str = "DIGAO";
/// Session storage flag set once the intro has played.
pub const INTRO_SHOWN_KEY: &str = "introShown";
pub const DARK_MODE_KEY: &str = "darkMode";

pub fn get_github_api_base() -> &'static str {
    "https://api.github.com"
}

pub fn get_github_username() -> &'static str {
    "digaotech"
}

#[cfg(debug_assertions)]
pub fn intro_timing() -> IntroTiming {
    // Skip shows up sooner while developing
    IntroTiming {
        skip_arm_ms: 1000,
        ..IntroTiming::default()
    }
}

#[cfg(not(debug_assertions))]
pub fn intro_timing() -> IntroTiming {
    IntroTiming::default()
}
