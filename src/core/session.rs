//! Guided workout session.
//!
//! A [`Session`] walks a [`Plan`] step by step through four phases:
//!
//! ```text
//! preview --start--> active --done/timer--> rest --skip/timer--> active (next set)
//!                      |                      |
//!                      |                      +--> preview (next step)
//!                      +--> preview (next step, warmup/cooldown)
//!                      +--> complete (last step)
//! ```
//!
//! The session owns its countdown. Starting a phase replaces the previous
//! countdown, so at most one is ever live and a tick always belongs to the
//! current phase. The driver only has to call [`Session::tick`] once a second.

use serde::Serialize;
use thiserror::Error;

use crate::core::leveling::XP_PER_WORKOUT;
use crate::models::config::WorkoutTiming;
use crate::models::plan::{Plan, StepKind, WorkoutStep};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Preview,
    Active,
    Rest,
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preview => write!(f, "preview"),
            Self::Active => write!(f, "active"),
            Self::Rest => write!(f, "rest"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Start,
    Done,
    SkipRest,
    TogglePause,
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Done => write!(f, "signal done"),
            Self::SkipRest => write!(f, "skip rest"),
            Self::TogglePause => write!(f, "toggle pause"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot {event} during {phase}")]
    InvalidEvent { event: SessionEvent, phase: Phase },
    #[error("step '{0}' is not timed, nothing to pause")]
    NotTimed(&'static str),
}

/// Identifies one countdown. Ticks addressed to a replaced countdown are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Countdown {
    id: TimerId,
    remaining: u32,
    running: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionView {
    pub phase: Phase,
    pub step_index: usize,
    pub total_steps: usize,
    pub step: Option<&'static WorkoutStep>,
    pub set_number: u32,
    pub remaining_seconds: Option<u32>,
    pub timer_running: bool,
    /// What the rest screen leads into: the next set or the next step.
    pub up_next: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkoutOutcome {
    pub plan: &'static str,
    pub completed: bool,
    pub steps_completed: usize,
    pub sets_completed: u32,
    pub active_seconds: u32,
    pub xp_earned: u64,
}

#[derive(Debug)]
pub struct Session {
    plan: Plan,
    timing: WorkoutTiming,
    step_index: usize,
    phase: Phase,
    set_number: u32,
    timer: Option<Countdown>,
    next_timer: u64,
    steps_completed: usize,
    sets_completed: u32,
    active_seconds: u32,
}

impl Session {
    pub fn new(plan: Plan, timing: WorkoutTiming) -> anyhow::Result<Self> {
        if plan.is_empty() {
            anyhow::bail!("plan '{}' has no steps", plan.name);
        }
        plan.validate()?;
        Ok(Self {
            plan,
            timing,
            step_index: 0,
            phase: Phase::Preview,
            set_number: 1,
            timer: None,
            next_timer: 0,
            steps_completed: 0,
            sets_completed: 0,
            active_seconds: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn set_number(&self) -> u32 {
        self.set_number
    }

    /// The step on screen; `None` once the plan is complete.
    pub fn current_step(&self) -> Option<&'static WorkoutStep> {
        self.plan.get(self.step_index)
    }

    pub fn remaining_seconds(&self) -> Option<u32> {
        self.timer.map(|t| t.remaining)
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_some_and(|t| t.running)
    }

    /// The live countdown, if any.
    pub fn timer_id(&self) -> Option<TimerId> {
        self.timer.map(|t| t.id)
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.phase,
            step_index: self.step_index,
            total_steps: self.plan.len(),
            step: self.current_step(),
            set_number: self.set_number,
            remaining_seconds: self.remaining_seconds(),
            timer_running: self.timer_running(),
            up_next: self.up_next(),
        }
    }

    fn up_next(&self) -> Option<String> {
        if self.phase != Phase::Rest {
            return None;
        }
        if self.has_more_sets() {
            return Some(format!("Set {}", self.set_number + 1));
        }
        self.plan
            .get(self.step_index + 1)
            .map(|s| s.title.to_string())
    }

    /// Begin the previewed step.
    pub fn start(&mut self) -> Result<Phase, SessionError> {
        self.expect_phase(SessionEvent::Start, Phase::Preview)?;
        self.begin_active();
        Ok(self.phase)
    }

    /// The user finished the current set (or gave up waiting on the timer).
    pub fn signal_done(&mut self) -> Result<Phase, SessionError> {
        self.expect_phase(SessionEvent::Done, Phase::Active)?;
        self.complete_set();
        Ok(self.phase)
    }

    /// End the rest early; same as the rest countdown running out.
    pub fn skip_rest(&mut self) -> Result<Phase, SessionError> {
        self.expect_phase(SessionEvent::SkipRest, Phase::Rest)?;
        self.end_rest();
        Ok(self.phase)
    }

    /// Pause or resume a timed step. Phase and remaining time are unchanged.
    pub fn toggle_pause(&mut self) -> Result<bool, SessionError> {
        self.expect_phase(SessionEvent::TogglePause, Phase::Active)?;
        let step_id = self.current_step().map(|s| s.id).unwrap_or_default();
        let timer = self.timer.as_mut().ok_or(SessionError::NotTimed(step_id))?;
        timer.running = !timer.running;
        tracing::debug!(step = step_id, running = timer.running, "timer toggled");
        Ok(timer.running)
    }

    /// One second elapsed on the live countdown.
    pub fn tick(&mut self) -> Phase {
        match self.timer_id() {
            Some(id) => self.tick_timer(id),
            None => self.phase,
        }
    }

    /// One second elapsed on countdown `id`. Ticks for a countdown that has
    /// since been replaced or cancelled are ignored.
    pub fn tick_timer(&mut self, id: TimerId) -> Phase {
        let Some(timer) = self.timer.as_mut() else {
            return self.phase;
        };
        if timer.id != id || !timer.running {
            return self.phase;
        }

        timer.remaining = timer.remaining.saturating_sub(1);
        let expired = timer.remaining == 0;
        if self.phase == Phase::Active {
            self.active_seconds += 1;
        }

        if expired {
            self.timer = None;
            match self.phase {
                Phase::Active => self.complete_set(),
                Phase::Rest => self.end_rest(),
                Phase::Preview | Phase::Complete => {}
            }
        }
        self.phase
    }

    /// What the session has achieved; `None` until it is complete.
    pub fn outcome(&self) -> Option<WorkoutOutcome> {
        (self.phase == Phase::Complete).then(|| self.summarize())
    }

    /// Leave mid-workout. The countdown dies with the session.
    pub fn abandon(self) -> WorkoutOutcome {
        tracing::debug!(
            step = self.step_index,
            phase = %self.phase,
            "workout abandoned"
        );
        self.summarize()
    }

    fn summarize(&self) -> WorkoutOutcome {
        let completed = self.phase == Phase::Complete;
        WorkoutOutcome {
            plan: self.plan.name,
            completed,
            steps_completed: self.steps_completed,
            sets_completed: self.sets_completed,
            active_seconds: self.active_seconds,
            xp_earned: if completed { XP_PER_WORKOUT } else { 0 },
        }
    }

    fn expect_phase(&self, event: SessionEvent, phase: Phase) -> Result<(), SessionError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(SessionError::InvalidEvent {
                event,
                phase: self.phase,
            })
        }
    }

    fn step(&self) -> &'static WorkoutStep {
        debug_assert!(self.step_index < self.plan.len(), "no step past the plan");
        let steps = self.plan.steps;
        &steps[self.step_index]
    }

    fn has_more_sets(&self) -> bool {
        self.step()
            .set_count
            .is_some_and(|sets| self.set_number < sets)
    }

    /// Replace whatever countdown was live with a fresh one.
    fn start_timer(&mut self, seconds: u32) {
        self.next_timer += 1;
        self.timer = Some(Countdown {
            id: TimerId(self.next_timer),
            remaining: seconds.max(1),
            running: true,
        });
    }

    fn begin_active(&mut self) {
        let step = self.step();
        self.phase = Phase::Active;
        match step.duration_seconds {
            Some(0) => self.start_timer(self.timing.default_active_duration),
            Some(secs) => self.start_timer(secs),
            None => self.timer = None,
        }
        tracing::debug!(step = step.id, set = self.set_number, "active");
        self.check_invariants();
    }

    fn complete_set(&mut self) {
        self.timer = None;
        self.sets_completed += 1;
        let step = self.step();

        if self.has_more_sets() {
            let rest = step
                .rest_seconds
                .filter(|&s| s > 0)
                .unwrap_or(self.timing.default_set_rest);
            self.enter_rest(rest);
        } else if self.step_index + 1 < self.plan.len() {
            if step.kind == StepKind::Exercise {
                self.enter_rest(self.timing.rest_between_exercises);
            } else {
                self.advance();
            }
        } else {
            self.steps_completed += 1;
            self.step_index = self.plan.len();
            self.phase = Phase::Complete;
            tracing::debug!(plan = self.plan.name, "workout complete");
        }
        self.check_invariants();
    }

    fn enter_rest(&mut self, seconds: u32) {
        self.phase = Phase::Rest;
        self.start_timer(seconds);
        tracing::debug!(step = self.step().id, seconds, "rest");
    }

    fn end_rest(&mut self) {
        self.timer = None;
        if self.has_more_sets() {
            self.set_number += 1;
            self.begin_active();
        } else {
            self.advance();
        }
        self.check_invariants();
    }

    fn advance(&mut self) {
        self.timer = None;
        self.steps_completed += 1;
        self.step_index += 1;
        self.set_number = 1;
        self.phase = Phase::Preview;
        tracing::debug!(step = self.step().id, "preview");
    }

    fn check_invariants(&self) {
        debug_assert!(self.step_index <= self.plan.len());
        debug_assert_eq!(
            self.step_index == self.plan.len(),
            self.phase == Phase::Complete
        );
        if let Some(step) = self.current_step() {
            debug_assert!(self.set_number >= 1 && self.set_number <= step.total_sets());
        }
        match self.phase {
            Phase::Rest => debug_assert!(self.timer.is_some()),
            Phase::Preview | Phase::Complete => debug_assert!(self.timer.is_none()),
            Phase::Active => {}
        }
    }
}
