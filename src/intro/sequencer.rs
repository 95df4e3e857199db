//! Host-driven controller for the intro animation.
//!
//! [`IntroSequencer`] owns the step row, the actor and the run state. It never
//! waits on its own: the host calls [`IntroSequencer::advance`] with its clock
//! and the sequencer replays every phase boundary that has elapsed since the
//! last call. Each boundary is stamped with its scheduled deadline, so a slow
//! or irregular tick changes nothing about the resulting timeline.
//!
//! Per step the protocol is: move to the block, jump and break it, show the
//! reward, hold. After the last step the run enters `Completing` and, once the
//! final pause has elapsed, `Done`, which is when the completion callback runs.
//! [`IntroSequencer::skip`] takes the same exit with a shorter pause.

use log::{debug, info, warn};

use super::error::IntroError;
use super::motion::{interpolate, jump_elevation, progress};
use super::state::{ActorState, RunState, Step};

pub type Millis = u64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroTiming {
    /// Pause before the first step while the actor walks in.
    pub walk_in_ms: Millis,
    pub move_ms: Millis,
    pub jump_ms: Millis,
    /// Delay from take-off until the block breaks.
    pub break_delay_ms: Millis,
    pub reward_pause_ms: Millis,
    pub final_pause_ms: Millis,
    /// Delay from start until `skip` is accepted.
    pub skip_arm_ms: Millis,
    pub skip_pause_ms: Millis,
    pub jump_height: f64,
}

impl Default for IntroTiming {
    fn default() -> Self {
        Self {
            walk_in_ms: 1000,
            move_ms: 400,
            jump_ms: 800,
            break_delay_ms: 800,
            reward_pause_ms: 1000,
            final_pause_ms: 1500,
            skip_arm_ms: 3000,
            skip_pause_ms: 300,
            jump_height: 80.0,
        }
    }
}

impl IntroTiming {
    /// Jump and break run together; the phase ends when both have.
    pub fn impact_ms(&self) -> Millis {
        self.jump_ms.max(self.break_delay_ms)
    }

    pub fn step_ms(&self) -> Millis {
        self.move_ms + self.impact_ms() + self.reward_pause_ms
    }

    /// Start-to-callback time of a run nobody skips.
    pub fn natural_total_ms(&self, step_count: usize) -> Millis {
        self.walk_in_ms + self.step_ms() * step_count as Millis + self.final_pause_ms
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroEventKind {
    Started,
    SkipArmed,
    StepEntered(usize),
    StepBroken(usize),
    RewardShown(usize),
    Completing { skipped: bool },
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroEvent {
    pub at: Millis,
    pub kind: IntroEventKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipOutcome {
    Accepted,
    NotArmed,
    NotRunning(RunState),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    WalkIn {
        until: Millis,
    },
    Move {
        step: usize,
        from: f64,
        started: Millis,
        until: Millis,
    },
    Impact {
        step: usize,
        started: Millis,
        break_at: Millis,
        until: Millis,
        broken: bool,
    },
    Reward {
        step: usize,
        until: Millis,
    },
    Exit {
        until: Millis,
    },
    Finished,
}

impl Phase {
    fn deadline(&self) -> Option<Millis> {
        match *self {
            Phase::WalkIn { until }
            | Phase::Move { until, .. }
            | Phase::Reward { until, .. }
            | Phase::Exit { until } => Some(until),
            Phase::Impact {
                break_at,
                until,
                broken,
                ..
            } => Some(if broken { until } else { break_at.min(until) }),
            Phase::Idle | Phase::Finished => None,
        }
    }
}

pub struct IntroSequencer {
    steps: Vec<Step>,
    actor: ActorState,
    timing: IntroTiming,
    run_state: RunState,
    phase: Phase,
    started_at: Option<Millis>,
    clock: Millis,
    skip_armed: bool,
    skipped: bool,
    on_complete: Option<Box<dyn FnOnce()>>,
    trace: Vec<IntroEvent>,
}

impl IntroSequencer {
    pub fn new(steps: Vec<Step>, timing: IntroTiming, on_complete: impl FnOnce() + 'static) -> Self {
        Self {
            steps,
            actor: ActorState::default(),
            timing,
            run_state: RunState::NotStarted,
            phase: Phase::Idle,
            started_at: None,
            clock: 0,
            skip_armed: false,
            skipped: false,
            on_complete: Some(Box::new(on_complete)),
            trace: Vec::new(),
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn actor(&self) -> &ActorState {
        &self.actor
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn trace(&self) -> &[IntroEvent] {
        &self.trace
    }

    pub fn was_skipped(&self) -> bool {
        self.skipped
    }

    /// True while the skip affordance should be offered.
    pub fn is_skip_armed(&self) -> bool {
        self.skip_armed && self.run_state == RunState::Running
    }

    /// The step currently being worked on, if any.
    pub fn current_step(&self) -> Option<usize> {
        match self.phase {
            Phase::Move { step, .. } | Phase::Impact { step, .. } | Phase::Reward { step, .. } => {
                Some(step)
            }
            _ => None,
        }
    }

    /// Next host time at which something changes without further input.
    pub fn next_deadline(&self) -> Option<Millis> {
        let phase = self.phase.deadline();
        if self.skip_armed || self.run_state != RunState::Running {
            return phase;
        }
        let arm_at = self.started_at? + self.timing.skip_arm_ms;
        Some(phase.map_or(arm_at, |d| d.min(arm_at)))
    }

    /// Begins the run at host time `now`. Returns false if it was already started.
    pub fn start(&mut self, now: Millis) -> bool {
        if self.run_state != RunState::NotStarted {
            return false;
        }
        info!("Starting intro with {} steps", self.steps.len());
        self.started_at = Some(now);
        self.clock = now;
        self.run_state = RunState::Running;
        self.phase = Phase::WalkIn {
            until: now + self.timing.walk_in_ms,
        };
        self.record(now, IntroEventKind::Started);
        self.settle(now);
        true
    }

    /// Brings the run up to host time `now` and returns the events that fired.
    pub fn advance(&mut self, now: Millis) -> Vec<IntroEvent> {
        let first_new = self.trace.len();
        self.settle(now);
        self.trace[first_new..].to_vec()
    }

    pub fn skip(&mut self, now: Millis) -> SkipOutcome {
        self.settle(now);
        if !self.run_state.accepts_step_work() {
            debug!("Ignoring skip in state {:?}", self.run_state);
            return SkipOutcome::NotRunning(self.run_state);
        }
        if !self.skip_armed {
            debug!("Ignoring skip before it is armed");
            return SkipOutcome::NotArmed;
        }
        info!("Intro skipped at step {:?}", self.current_step());
        self.skipped = true;
        self.begin_completing(now, true);
        self.settle(now);
        SkipOutcome::Accepted
    }

    /// Ends the run without invoking the completion callback. Used when the
    /// host goes away before the run is done.
    pub fn teardown(&mut self) {
        if self.run_state != RunState::Done {
            debug!("Intro torn down in state {:?}", self.run_state);
        }
        self.on_complete = None;
        self.phase = Phase::Finished;
        self.run_state = RunState::Done;
    }

    fn settle(&mut self, now: Millis) {
        if let Err(err) = self.catch_up(now) {
            self.fail_safe(now, err);
        }
    }

    fn catch_up(&mut self, now: Millis) -> Result<(), IntroError> {
        let Some(started_at) = self.started_at else {
            return Ok(());
        };
        if self.run_state == RunState::Done {
            return Ok(());
        }
        if now < self.clock {
            debug!("Stale intro tick {} < {}", now, self.clock);
            return Ok(());
        }

        let arm_at = started_at + self.timing.skip_arm_ms;
        loop {
            let deadline = self.phase.deadline();
            if !self.skip_armed && arm_at <= now && deadline.map_or(true, |d| arm_at <= d) {
                self.skip_armed = true;
                if self.run_state == RunState::Running {
                    self.record(arm_at, IntroEventKind::SkipArmed);
                }
                continue;
            }
            match deadline {
                Some(at) if at <= now => self.finish_phase(at)?,
                _ => break,
            }
        }

        self.clock = now;
        self.animate(now)
    }

    fn finish_phase(&mut self, at: Millis) -> Result<(), IntroError> {
        match self.phase {
            Phase::WalkIn { .. } => self.enter_step(0, at),
            Phase::Move { step, .. } => {
                self.actor.position = self.step(step)?.target_position;
                self.actor.in_motion = false;
                self.phase = Phase::Impact {
                    step,
                    started: at,
                    break_at: at + self.timing.break_delay_ms,
                    until: at + self.timing.impact_ms(),
                    broken: false,
                };
                Ok(())
            }
            Phase::Impact {
                step,
                started,
                break_at,
                until,
                broken,
            } => {
                if !broken && break_at <= at {
                    self.step_mut(step)?.broken = true;
                    self.record(at, IntroEventKind::StepBroken(step));
                    self.phase = Phase::Impact {
                        step,
                        started,
                        break_at,
                        until,
                        broken: true,
                    };
                    if at < until {
                        return Ok(());
                    }
                }
                self.actor.elevation = 0.0;
                self.step_mut(step)?.reward_visible = true;
                self.record(at, IntroEventKind::RewardShown(step));
                self.phase = Phase::Reward {
                    step,
                    until: at + self.timing.reward_pause_ms,
                };
                Ok(())
            }
            Phase::Reward { step, .. } => self.enter_step(step + 1, at),
            Phase::Exit { .. } => {
                self.complete(at);
                Ok(())
            }
            Phase::Idle | Phase::Finished => Ok(()),
        }
    }

    fn enter_step(&mut self, index: usize, at: Millis) -> Result<(), IntroError> {
        if index >= self.steps.len() {
            self.begin_completing(at, false);
            return Ok(());
        }
        if !self.timing.jump_height.is_finite() {
            return Err(IntroError::InvalidJumpHeight(self.timing.jump_height));
        }
        let target = self.step(index)?.target_position;
        if !target.is_finite() {
            return Err(IntroError::InvalidTarget { index, target });
        }
        self.record(at, IntroEventKind::StepEntered(index));
        self.actor.in_motion = true;
        self.phase = Phase::Move {
            step: index,
            from: self.actor.position,
            started: at,
            until: at + self.timing.move_ms,
        };
        Ok(())
    }

    fn begin_completing(&mut self, at: Millis, skipped: bool) {
        if !self.run_state.accepts_step_work() {
            return;
        }
        self.run_state = RunState::Completing;
        self.actor.visible = false;
        self.actor.in_motion = false;
        self.actor.elevation = 0.0;
        self.record(at, IntroEventKind::Completing { skipped });
        let pause = if skipped {
            self.timing.skip_pause_ms
        } else {
            self.timing.final_pause_ms
        };
        self.phase = Phase::Exit { until: at + pause };
    }

    fn complete(&mut self, at: Millis) {
        if self.run_state == RunState::Done {
            return;
        }
        self.run_state = RunState::Done;
        self.phase = Phase::Finished;
        self.record(at, IntroEventKind::Completed);
        if let Some(on_complete) = self.on_complete.take() {
            info!("Intro complete");
            on_complete();
        }
    }

    fn fail_safe(&mut self, now: Millis, err: IntroError) {
        warn!("Intro sequence failed, finishing early: {}", err);
        let at = now.max(self.clock);
        self.record(at, IntroEventKind::Failed);
        self.begin_completing(at, false);
        self.complete(at);
    }

    fn animate(&mut self, now: Millis) -> Result<(), IntroError> {
        match self.phase {
            Phase::Move {
                step,
                from,
                started,
                until,
            } => {
                let target = self.step(step)?.target_position;
                let t = progress(now - started, until - started);
                self.actor.position = interpolate(from, target, t);
            }
            Phase::Impact { started, .. } => {
                let t = progress(now - started, self.timing.jump_ms);
                self.actor.elevation = jump_elevation(self.timing.jump_height, t);
            }
            _ => {}
        }
        Ok(())
    }

    fn step(&self, index: usize) -> Result<&Step, IntroError> {
        self.steps.get(index).ok_or(IntroError::MissingStep(index))
    }

    fn step_mut(&mut self, index: usize) -> Result<&mut Step, IntroError> {
        self.steps.get_mut(index).ok_or(IntroError::MissingStep(index))
    }

    fn record(&mut self, at: Millis, kind: IntroEventKind) {
        self.trace.push(IntroEvent { at, kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intro::state::steps_from_labels;
    use std::cell::Cell;
    use std::rc::Rc;

    fn timing() -> IntroTiming {
        IntroTiming {
            walk_in_ms: 100,
            move_ms: 200,
            jump_ms: 300,
            break_delay_ms: 250,
            reward_pause_ms: 150,
            final_pause_ms: 400,
            skip_arm_ms: 1000,
            skip_pause_ms: 50,
            jump_height: 40.0,
        }
    }

    fn sequencer(labels: &str) -> (IntroSequencer, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let seq = IntroSequencer::new(steps_from_labels(labels, 40.0, 120.0), timing(), move || {
            counter.set(counter.get() + 1)
        });
        (seq, calls)
    }

    fn tick_until(seq: &mut IntroSequencer, from: Millis, to: Millis) {
        let mut now = from;
        while now <= to {
            seq.advance(now);
            now += 16;
        }
        seq.advance(to);
    }

    fn first_at(seq: &IntroSequencer, kind: IntroEventKind) -> Option<(usize, Millis)> {
        seq.trace()
            .iter()
            .enumerate()
            .find(|(_, e)| e.kind == kind)
            .map(|(pos, e)| (pos, e.at))
    }

    #[test]
    fn completes_exactly_once_for_any_step_count() {
        for n in 0..=6 {
            let labels: String = "ABCDEF".chars().take(n).collect();
            let (mut seq, calls) = sequencer(&labels);
            assert!(seq.start(0));
            tick_until(&mut seq, 0, 20_000);
            assert_eq!(calls.get(), 1, "{} steps", n);
            assert_eq!(seq.run_state(), RunState::Done);
        }
    }

    #[test]
    fn empty_row_completes_after_walk_in_and_final_pause() {
        let (mut seq, calls) = sequencer("");
        seq.start(0);
        seq.advance(99);
        assert_eq!(seq.run_state(), RunState::Running);
        seq.advance(100);
        assert_eq!(seq.run_state(), RunState::Completing);
        seq.advance(499);
        assert_eq!(calls.get(), 0);
        seq.advance(500);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn five_steps_take_the_sum_of_their_phases() {
        let (mut seq, calls) = sequencer("DIGAO");
        let total = timing().natural_total_ms(5);
        assert_eq!(total, 100 + 5 * (200 + 300 + 150) + 400);

        seq.start(0);
        tick_until(&mut seq, 0, total - 1);
        assert_eq!(calls.get(), 0);
        seq.advance(total);
        assert_eq!(calls.get(), 1);
        assert_eq!(first_at(&seq, IntroEventKind::Completed).map(|(_, at)| at), Some(total));
    }

    #[test]
    fn one_large_tick_replays_the_same_timeline() {
        let (mut smooth, _) = sequencer("DIGAO");
        smooth.start(0);
        tick_until(&mut smooth, 0, 10_000);

        let (mut jumpy, calls) = sequencer("DIGAO");
        jumpy.start(0);
        jumpy.advance(10_000);

        assert_eq!(calls.get(), 1);
        assert_eq!(smooth.trace(), jumpy.trace());
        assert!(jumpy.steps().iter().all(|s| s.broken && s.reward_visible));
    }

    #[test]
    fn steps_run_strictly_in_order() {
        let (mut seq, _) = sequencer("DIGAO");
        seq.start(0);
        tick_until(&mut seq, 0, 10_000);

        let mut previous_reward: Option<(usize, Millis)> = None;
        for i in 0..5 {
            let entered = first_at(&seq, IntroEventKind::StepEntered(i)).unwrap();
            let broken = first_at(&seq, IntroEventKind::StepBroken(i)).unwrap();
            let reward = first_at(&seq, IntroEventKind::RewardShown(i)).unwrap();
            assert!(entered.0 < broken.0 && broken.0 < reward.0);
            assert!(entered.1 < broken.1 && broken.1 <= reward.1);
            if let Some((pos, at)) = previous_reward {
                assert!(pos < entered.0);
                assert_eq!(entered.1, at + timing().reward_pause_ms);
            }
            previous_reward = Some(reward);
        }
    }

    #[test]
    fn skip_before_arming_is_rejected() {
        let (mut seq, calls) = sequencer("DIGAO");
        seq.start(0);
        seq.advance(500);
        assert!(!seq.is_skip_armed());
        assert_eq!(seq.skip(500), SkipOutcome::NotArmed);
        assert_eq!(seq.run_state(), RunState::Running);
        seq.advance(999);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn skip_during_second_step_stops_the_rest() {
        let (mut seq, calls) = sequencer("DIGAO");
        seq.start(0);
        tick_until(&mut seq, 0, 1100);
        assert_eq!(seq.current_step(), Some(1));
        assert!(seq.is_skip_armed());

        assert_eq!(seq.skip(1100), SkipOutcome::Accepted);
        assert_eq!(seq.run_state(), RunState::Completing);
        assert!(!seq.actor().visible);

        seq.advance(1149);
        assert_eq!(calls.get(), 0);
        seq.advance(1150);
        assert_eq!(calls.get(), 1);

        tick_until(&mut seq, 1150, 10_000);
        assert_eq!(calls.get(), 1);
        assert!(seq.steps()[0].broken);
        assert!(seq.steps()[1..].iter().all(|s| !s.broken && !s.reward_visible));
        assert!(seq.was_skipped());
    }

    #[test]
    fn repeated_or_late_skips_never_complete_twice() {
        let (mut seq, calls) = sequencer("DIGAO");
        seq.start(0);
        seq.advance(1200);
        assert_eq!(seq.skip(1200), SkipOutcome::Accepted);
        assert_eq!(seq.skip(1210), SkipOutcome::NotRunning(RunState::Completing));
        seq.advance(2000);
        assert_eq!(seq.skip(2000), SkipOutcome::NotRunning(RunState::Done));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn skip_after_natural_completion_is_ignored() {
        let (mut seq, calls) = sequencer("AB");
        seq.start(0);
        seq.advance(timing().natural_total_ms(2));
        assert_eq!(calls.get(), 1);
        assert_eq!(seq.skip(5_000), SkipOutcome::NotRunning(RunState::Done));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn zero_skip_pause_completes_immediately() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut seq = IntroSequencer::new(
            steps_from_labels("DIGAO", 0.0, 100.0),
            IntroTiming {
                skip_arm_ms: 0,
                skip_pause_ms: 0,
                ..timing()
            },
            move || counter.set(counter.get() + 1),
        );
        seq.start(0);
        assert!(seq.is_skip_armed());
        assert_eq!(seq.skip(10), SkipOutcome::Accepted);
        assert_eq!(seq.run_state(), RunState::Done);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn teardown_releases_the_callback() {
        let (mut seq, calls) = sequencer("DIGAO");
        seq.start(0);
        seq.advance(500);
        seq.teardown();
        seq.advance(50_000);
        assert_eq!(calls.get(), 0);
        assert!(first_at(&seq, IntroEventKind::Completed).is_none());
        assert_eq!(seq.skip(50_000), SkipOutcome::NotRunning(RunState::Done));
    }

    #[test]
    fn bad_step_fails_safe_into_completion() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut steps = steps_from_labels("DIGAO", 40.0, 120.0);
        steps[2].target_position = f64::NAN;
        let mut seq = IntroSequencer::new(steps, timing(), move || counter.set(counter.get() + 1));
        seq.start(0);
        tick_until(&mut seq, 0, 10_000);

        assert_eq!(calls.get(), 1);
        assert!(first_at(&seq, IntroEventKind::Failed).is_some());
        assert!(seq.steps()[1].broken);
        assert!(!seq.steps()[2].broken);
    }

    #[test]
    fn stale_ticks_are_ignored() {
        let (mut seq, _) = sequencer("DIGAO");
        seq.start(0);
        seq.advance(800);
        let before = seq.trace().len();
        assert!(seq.advance(700).is_empty());
        assert_eq!(seq.trace().len(), before);
    }

    #[test]
    fn actor_eases_toward_the_block_then_jumps() {
        let (mut seq, _) = sequencer("D");
        seq.start(0);
        seq.advance(100);
        assert!(seq.actor().in_motion);

        let mut last = seq.actor().position;
        for now in (100..=300).step_by(10) {
            seq.advance(now);
            assert!(seq.actor().position >= last);
            last = seq.actor().position;
        }
        assert_eq!(seq.actor().position, 40.0);
        assert!(!seq.actor().in_motion);

        seq.advance(450);
        assert!(seq.actor().elevation > 0.0);
        seq.advance(600);
        assert_eq!(seq.actor().elevation, 0.0);
    }

    #[test]
    fn start_is_one_shot() {
        let (mut seq, _) = sequencer("DIGAO");
        assert_eq!(seq.run_state(), RunState::NotStarted);
        assert!(seq.start(0));
        assert!(!seq.start(10));
        assert_eq!(seq.next_deadline(), Some(100));
    }
}
