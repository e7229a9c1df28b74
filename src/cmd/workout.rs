use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;
use serde_json::json;

use titanx::core::session::{Phase, Session, WorkoutOutcome};
use titanx::core::tracking;
use titanx::models::config::Config;
use titanx::models::plan::Plan;
use titanx::output;
use titanx::output::human;

const TICK: Duration = Duration::from_secs(1);

enum Key {
    Enter,
    Pause,
    Quit,
}

pub fn run_plan(human_flag: bool) -> Result<()> {
    let plan = Plan::standard();
    if human_flag {
        println!("{}", human::format_plan(&plan));
    } else {
        let out = output::success("workout", json!({ "plan": plan }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

/// Read keys on a helper thread so the session can keep ticking while waiting.
fn spawn_keys() -> Receiver<Key> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let key = match line.as_deref().map(str::trim) {
                Ok("q") | Ok("quit") | Err(_) => Key::Quit,
                Ok("p") | Ok("pause") => Key::Pause,
                Ok(_) => Key::Enter,
            };
            let quit = matches!(key, Key::Quit);
            if tx.send(key).is_err() || quit {
                return;
            }
        }
        let _ = tx.send(Key::Quit);
    });
    rx
}

/// Player screens go to stdout in human mode and to stderr otherwise, so JSON
/// output stays a single document.
fn show(human_flag: bool, text: &str) -> io::Result<()> {
    if human_flag {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    } else {
        let mut err = io::stderr().lock();
        err.write_all(text.as_bytes())?;
        err.flush()
    }
}

pub fn run_session(record: bool, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let mut session = Session::new(Plan::standard(), config.workout)?;
    let keys = spawn_keys();

    let mut next_tick = Instant::now() + TICK;
    let mut shown = None;
    loop {
        let screen = (session.phase(), session.step_index(), session.set_number());
        if shown != Some(screen) {
            show(human_flag, &format!("\n{}\n", human::format_session_view(&session.view())))?;
            shown = Some(screen);
        }
        if session.phase() == Phase::Complete {
            break;
        }

        let wait = next_tick.saturating_duration_since(Instant::now());
        match keys.recv_timeout(wait) {
            Ok(Key::Enter) => {
                let result = match session.phase() {
                    Phase::Preview => session.start(),
                    Phase::Active => session.signal_done(),
                    Phase::Rest => session.skip_rest(),
                    Phase::Complete => Ok(Phase::Complete),
                };
                if let Err(e) = result {
                    eprintln!("{}", e);
                }
                next_tick = Instant::now() + TICK;
            }
            Ok(Key::Pause) => match session.toggle_pause() {
                Ok(running) => show(human_flag, if running { "Resumed\n" } else { "Paused\n" })?,
                Err(e) => eprintln!("{}", e),
            },
            Ok(Key::Quit) | Err(RecvTimeoutError::Disconnected) => {
                let outcome = session.abandon();
                return report(&outcome, None, human_flag);
            }
            Err(RecvTimeoutError::Timeout) => {
                next_tick += TICK;
                session.tick();
                if let Some(left) = session.remaining_seconds() {
                    show(human_flag, &format!("\r  {} ", human::format_time(left)))?;
                }
            }
        }
    }

    let outcome = session
        .outcome()
        .ok_or_else(|| anyhow::anyhow!("workout ended without an outcome"))?;
    let recorded = if record {
        let db = super::open_db()?;
        tracking::record_workout(&db, &outcome, Utc::now())?.map(|s| s.workout_count)
    } else {
        None
    };
    report(&outcome, recorded, human_flag)
}

fn report(outcome: &WorkoutOutcome, workouts: Option<u32>, human_flag: bool) -> Result<()> {
    if human_flag {
        if outcome.completed {
            println!(
                "+{} XP | {} steps, {} sets, {} active",
                outcome.xp_earned,
                outcome.steps_completed,
                outcome.sets_completed,
                human::format_time(outcome.active_seconds)
            );
        } else {
            println!(
                "Workout abandoned after {} step(s)",
                outcome.steps_completed
            );
        }
        if let Some(n) = workouts {
            println!("Total workouts: {}", n);
        }
    } else {
        let out = output::success(
            "workout",
            json!({ "outcome": outcome, "workouts": workouts }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
