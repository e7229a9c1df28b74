use titanx::core::session::{Phase, Session, SessionError, SessionEvent};
use titanx::models::config::WorkoutTiming;
use titanx::models::plan::{Plan, StepKind, VisualStyle, WorkoutStep};

const fn rep_step(id: &'static str, kind: StepKind, sets: Option<u32>, rest: Option<u32>) -> WorkoutStep {
    WorkoutStep {
        id,
        title: id,
        kind,
        duration_seconds: None,
        rep_range: Some("10-12"),
        set_count: sets,
        rest_seconds: rest,
        cues: &[],
        visual: VisualStyle::Push,
    }
}

const fn timed_step(id: &'static str, kind: StepKind, secs: u32, sets: Option<u32>) -> WorkoutStep {
    WorkoutStep {
        id,
        title: id,
        kind,
        duration_seconds: Some(secs),
        rep_range: None,
        set_count: sets,
        rest_seconds: None,
        cues: &[],
        visual: VisualStyle::Stretch,
    }
}

static EXERCISE_THEN_WARMUP: [WorkoutStep; 2] = [
    rep_step("press", StepKind::Exercise, Some(3), Some(20)),
    timed_step("loosen", StepKind::Warmup, 10, None),
];

static WARMUP_SETS_THEN_EXERCISE: [WorkoutStep; 2] = [
    rep_step("swings", StepKind::Warmup, Some(3), Some(15)),
    rep_step("rows", StepKind::Exercise, Some(2), Some(30)),
];

static TIMED_PAIR: [WorkoutStep; 2] = [
    timed_step("hold", StepKind::Cooldown, 5, None),
    timed_step("breathe", StepKind::Cooldown, 3, None),
];

static DEFAULTS: [WorkoutStep; 2] = [
    rep_step("no-rest", StepKind::Exercise, Some(2), None),
    timed_step("zero", StepKind::Exercise, 0, None),
];

static SINGLE_EXERCISE: [WorkoutStep; 1] = [rep_step("only", StepKind::Exercise, None, None)];

fn session(steps: &'static [WorkoutStep]) -> Session {
    Session::new(Plan { name: "test", steps }, WorkoutTiming::default()).unwrap()
}

fn tick_n(s: &mut Session, n: u32) -> Phase {
    let mut phase = s.phase();
    for _ in 0..n {
        phase = s.tick();
    }
    phase
}

// ── sets and rests ──────────────────────────────────────────────────────────

#[test]
fn test_rep_sets_alternate_with_rest() {
    let mut s = session(&EXERCISE_THEN_WARMUP);
    assert_eq!(s.phase(), Phase::Preview);
    assert_eq!(s.set_number(), 1);

    assert_eq!(s.start().unwrap(), Phase::Active);
    assert_eq!(s.set_number(), 1);
    assert_eq!(s.remaining_seconds(), None, "rep steps run no timer");

    assert_eq!(s.signal_done().unwrap(), Phase::Rest);
    assert_eq!(s.set_number(), 1);
    assert_eq!(s.remaining_seconds(), Some(20));

    assert_eq!(tick_n(&mut s, 19), Phase::Rest);
    assert_eq!(s.remaining_seconds(), Some(1));
    assert_eq!(s.tick(), Phase::Active);
    assert_eq!(s.set_number(), 2);
    assert_eq!(s.step_index(), 0);

    s.signal_done().unwrap();
    assert_eq!(s.skip_rest().unwrap(), Phase::Active);
    assert_eq!(s.set_number(), 3);
}

#[test]
fn test_exercise_inserts_rest_before_next_step() {
    let mut s = session(&EXERCISE_THEN_WARMUP);
    s.start().unwrap();
    for _ in 0..2 {
        s.signal_done().unwrap();
        s.skip_rest().unwrap();
    }
    assert_eq!(s.set_number(), 3);

    assert_eq!(s.signal_done().unwrap(), Phase::Rest);
    assert_eq!(s.remaining_seconds(), Some(60));
    assert_eq!(s.step_index(), 0);
    assert_eq!(s.view().up_next.as_deref(), Some("loosen"));

    assert_eq!(tick_n(&mut s, 60), Phase::Preview);
    assert_eq!(s.step_index(), 1);
    assert_eq!(s.set_number(), 1);
    assert_eq!(s.remaining_seconds(), None);
}

#[test]
fn test_warmup_advances_without_extra_rest() {
    let mut s = session(&WARMUP_SETS_THEN_EXERCISE);
    s.start().unwrap();
    for expected_set in 1..=2 {
        assert_eq!(s.set_number(), expected_set);
        assert_eq!(s.signal_done().unwrap(), Phase::Rest);
        assert_eq!(s.remaining_seconds(), Some(15));
        s.skip_rest().unwrap();
    }
    assert_eq!(s.set_number(), 3);
    assert_eq!(s.signal_done().unwrap(), Phase::Preview);
    assert_eq!(s.step_index(), 1);
    assert_eq!(s.set_number(), 1);
}

#[test]
fn test_rest_view_names_next_set() {
    let mut s = session(&EXERCISE_THEN_WARMUP);
    s.start().unwrap();
    s.signal_done().unwrap();
    let view = s.view();
    assert_eq!(view.phase, Phase::Rest);
    assert_eq!(view.up_next.as_deref(), Some("Set 2"));
    assert_eq!(view.step.map(|st| st.id), Some("press"));
}

// ── timers ──────────────────────────────────────────────────────────────────

#[test]
fn test_timed_step_completes_when_countdown_hits_zero() {
    let mut s = session(&TIMED_PAIR);
    s.start().unwrap();
    assert_eq!(s.remaining_seconds(), Some(5));
    assert!(s.timer_running());

    assert_eq!(tick_n(&mut s, 4), Phase::Active);
    assert_eq!(s.remaining_seconds(), Some(1));
    assert_eq!(s.tick(), Phase::Preview, "cooldown moves on with no rest");
    assert_eq!(s.step_index(), 1);
}

#[test]
fn test_pause_freezes_remaining_time() {
    let mut s = session(&TIMED_PAIR);
    s.start().unwrap();
    s.tick();
    assert_eq!(s.remaining_seconds(), Some(4));

    assert!(!s.toggle_pause().unwrap());
    tick_n(&mut s, 10);
    assert_eq!(s.phase(), Phase::Active);
    assert_eq!(s.remaining_seconds(), Some(4));

    assert!(s.toggle_pause().unwrap());
    s.tick();
    assert_eq!(s.remaining_seconds(), Some(3));
}

#[test]
fn test_done_ends_timed_step_early() {
    let mut s = session(&TIMED_PAIR);
    s.start().unwrap();
    s.tick();
    assert_eq!(s.signal_done().unwrap(), Phase::Preview);
    assert_eq!(s.remaining_seconds(), None);
}

#[test]
fn test_ticks_without_timer_change_nothing() {
    let mut s = session(&EXERCISE_THEN_WARMUP);
    assert_eq!(tick_n(&mut s, 5), Phase::Preview);
    s.start().unwrap();
    assert_eq!(tick_n(&mut s, 5), Phase::Active);
    assert_eq!(s.set_number(), 1);
}

#[test]
fn test_missing_rest_and_zero_duration_use_defaults() {
    let mut s = session(&DEFAULTS);
    s.start().unwrap();
    s.signal_done().unwrap();
    assert_eq!(s.remaining_seconds(), Some(30));
    s.skip_rest().unwrap();
    s.signal_done().unwrap();
    s.skip_rest().unwrap();

    assert_eq!(s.step_index(), 1);
    s.start().unwrap();
    assert_eq!(s.remaining_seconds(), Some(60));
}

#[test]
fn test_configured_rest_between_exercises() {
    let timing = WorkoutTiming {
        rest_between_exercises: 90,
        ..WorkoutTiming::default()
    };
    let mut s = Session::new(
        Plan {
            name: "test",
            steps: &DEFAULTS,
        },
        timing,
    )
    .unwrap();
    s.start().unwrap();
    s.signal_done().unwrap();
    s.skip_rest().unwrap();
    assert_eq!(s.signal_done().unwrap(), Phase::Rest);
    assert_eq!(s.remaining_seconds(), Some(90));
}

// ── completion ──────────────────────────────────────────────────────────────

#[test]
fn test_last_step_completes_session() {
    let mut s = session(&SINGLE_EXERCISE);
    assert!(s.outcome().is_none());
    s.start().unwrap();
    assert_eq!(s.signal_done().unwrap(), Phase::Complete);
    assert_eq!(s.step_index(), 1);
    assert!(s.current_step().is_none());
    assert_eq!(s.remaining_seconds(), None);

    let outcome = s.outcome().unwrap();
    assert!(outcome.completed);
    assert_eq!(outcome.steps_completed, 1);
    assert_eq!(outcome.sets_completed, 1);
    assert_eq!(outcome.xp_earned, 50);
}

#[test]
fn test_complete_is_terminal() {
    let mut s = session(&SINGLE_EXERCISE);
    s.start().unwrap();
    s.signal_done().unwrap();

    assert!(s.start().is_err());
    assert!(s.signal_done().is_err());
    assert!(s.skip_rest().is_err());
    assert!(s.toggle_pause().is_err());
    assert_eq!(s.tick(), Phase::Complete);
}

#[test]
fn test_standard_plan_walkthrough() {
    let plan = Plan::standard();
    let mut s = Session::new(plan, WorkoutTiming::default()).unwrap();
    let mut events = 0;
    while s.phase() != Phase::Complete {
        match s.phase() {
            Phase::Preview => s.start().unwrap(),
            Phase::Active => s.signal_done().unwrap(),
            Phase::Rest => s.skip_rest().unwrap(),
            Phase::Complete => unreachable!(),
        };
        events += 1;
        assert!(events < 100, "session never completed");
    }
    // 3 warmups x2, 3 exercises x (start + 3 done + 3 rests), 2 cooldowns x2
    assert_eq!(events, 31);

    let outcome = s.outcome().unwrap();
    assert_eq!(outcome.steps_completed, plan.len());
    assert_eq!(outcome.sets_completed, 3 + 9 + 2);
}

#[test]
fn test_active_seconds_counted_only_while_active() {
    let mut s = session(&TIMED_PAIR);
    s.start().unwrap();
    tick_n(&mut s, 5);
    s.start().unwrap();
    tick_n(&mut s, 3);
    let outcome = s.outcome().unwrap();
    assert_eq!(outcome.active_seconds, 8);
}

#[test]
fn test_abandon_reports_partial_progress() {
    let mut s = session(&TIMED_PAIR);
    s.start().unwrap();
    tick_n(&mut s, 5);
    let outcome = s.abandon();
    assert!(!outcome.completed);
    assert_eq!(outcome.steps_completed, 1);
    assert_eq!(outcome.xp_earned, 0);
}

// ── invalid events ──────────────────────────────────────────────────────────

#[test]
fn test_invalid_event_leaves_state_untouched() {
    let mut s = session(&EXERCISE_THEN_WARMUP);
    let err = s.skip_rest().unwrap_err();
    assert_eq!(
        err,
        SessionError::InvalidEvent {
            event: SessionEvent::SkipRest,
            phase: Phase::Preview,
        }
    );
    assert_eq!(s.phase(), Phase::Preview);

    s.start().unwrap();
    assert!(s.start().is_err());
    assert_eq!(s.phase(), Phase::Active);
    assert_eq!(s.set_number(), 1);
}

#[test]
fn test_pause_requires_timed_step() {
    let mut s = session(&EXERCISE_THEN_WARMUP);
    s.start().unwrap();
    assert_eq!(s.toggle_pause().unwrap_err(), SessionError::NotTimed("press"));
}

#[test]
fn test_pause_not_allowed_during_rest() {
    let mut s = session(&EXERCISE_THEN_WARMUP);
    s.start().unwrap();
    s.signal_done().unwrap();
    assert!(matches!(
        s.toggle_pause(),
        Err(SessionError::InvalidEvent {
            phase: Phase::Rest,
            ..
        })
    ));
}

#[test]
fn test_empty_plan_is_rejected() {
    static NONE: [WorkoutStep; 0] = [];
    let result = Session::new(
        Plan {
            name: "empty",
            steps: &NONE,
        },
        WorkoutTiming::default(),
    );
    assert!(result.is_err());
}
