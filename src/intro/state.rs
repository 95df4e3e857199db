/// One block of the intro. The full row is fixed when the sequencer is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub index: usize,
    pub target_position: f64,
    pub label: char,
    pub broken: bool,
    pub reward_visible: bool,
}

impl Step {
    pub fn new(index: usize, target_position: f64, label: char) -> Self {
        Self {
            index,
            target_position,
            label,
            broken: false,
            reward_visible: false,
        }
    }
}

/// Lays `labels` out left to right, `spacing` pixels apart starting at `origin`.
pub fn steps_from_labels(labels: &str, origin: f64, spacing: f64) -> Vec<Step> {
    labels
        .chars()
        .enumerate()
        .map(|(index, label)| Step::new(index, origin + spacing * index as f64, label))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActorState {
    pub position: f64,
    pub in_motion: bool,
    pub elevation: f64,
    pub visible: bool,
}

impl Default for ActorState {
    fn default() -> Self {
        Self {
            position: 0.0,
            in_motion: false,
            elevation: 0.0,
            visible: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Running,
    Completing,
    Done,
}

impl RunState {
    /// Step mutation is only allowed while running.
    pub fn accepts_step_work(self) -> bool {
        self == RunState::Running
    }

    pub fn is_finishing(self) -> bool {
        matches!(self, RunState::Completing | RunState::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_spaced_in_label_order() {
        let steps = steps_from_labels("DIGAO", 40.0, 120.0);
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0].label, 'D');
        assert_eq!(steps[4].label, 'O');
        assert_eq!(steps[2].target_position, 280.0);
        assert!(steps.iter().all(|s| !s.broken && !s.reward_visible));
        assert!(steps.iter().enumerate().all(|(i, s)| s.index == i));
    }

    #[test]
    fn only_running_accepts_step_work() {
        assert!(RunState::Running.accepts_step_work());
        assert!(!RunState::NotStarted.accepts_step_work());
        assert!(!RunState::Completing.accepts_step_work());
        assert!(RunState::Done.is_finishing());
        assert!(!RunState::Running.is_finishing());
    }
}
