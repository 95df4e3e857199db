use thiserror::Error;

/// Failures inside a scheduled continuation. The sequencer never surfaces
/// these to the page; it logs them and completes early instead.
#[derive(Debug, Error, PartialEq)]
pub enum IntroError {
    #[error("step {0} is not part of this run")]
    MissingStep(usize),
    #[error("step {index} has a non-finite target position ({target})")]
    InvalidTarget { index: usize, target: f64 },
    #[error("jump height must be finite, got {0}")]
    InvalidJumpHeight(f64),
}
