use chrono::{Local, NaiveDate, TimeZone};
use rand::Rng;

use crate::core::streak;
use crate::models::coach::{
    DailyContext, EnergyLevel, SleepQuality, Suggestion, SuggestionCategory, TimeAvailable,
};
use crate::models::{ActivityEntry, Snapshot};

const RECOVERY: [&str; 5] = [
    "Today isn't for pushing. Just move.",
    "You didn't fail. You paused. Light mobility today.",
    "Grind is strictly prohibited today. Focus on recovery.",
    "Sleep is the best pre-workout. Get some rest, Titan.",
    "Even Titans need to recharge. 5 mins of stretching, that's it.",
];

const BEAST_MODE: [&str; 5] = [
    "Energy is high? Destroy the limits.",
    "The iron is calling. Don't let it go to voicemail.",
    "Perfect conditions to hit a PR today.",
    "You're fully charged. Spend that energy wisely: Heavy Lifting.",
    "No excuses today. Only domination.",
];

const QUICK_HIT: [&str; 5] = [
    "15 minutes is enough to shock the muscles.",
    "Efficiency is key. HIIT session incoming.",
    "Don't skip. Just compress. 10 mins hard work.",
    "Something is infinitely better than nothing.",
    "Speed run mode: Activated.",
];

const COMEBACK: [&str; 5] = [
    "Consistency beats intensity. Just show up.",
    "One day off is rest. Two days is a slippery slope. Get back.",
    "The comeback is always stronger than the setback.",
    "Don't break the chain twice.",
    "Dust yourself off. We go again.",
];

const ON_FIRE: [&str; 5] = [
    "You're becoming dangerous. Keep this up.",
    "Momentum is your superpower right now.",
    "This is how legends are forged. Another day, another win.",
    "You're lapping everyone on the couch.",
    "Stat boost: Discipline +10.",
];

/// Streak length above which the coach pushes for a personal record.
const ON_FIRE_STREAK: u32 = 5;

pub fn messages(category: SuggestionCategory) -> &'static [&'static str] {
    match category {
        SuggestionCategory::Recovery => &RECOVERY,
        SuggestionCategory::QuickHit => &QUICK_HIT,
        SuggestionCategory::Comeback => &COMEBACK,
        SuggestionCategory::OnFire => &ON_FIRE,
        SuggestionCategory::BeastMode => &BEAST_MODE,
    }
}

/// First matching rule wins: recovery, short on time, comeback, on fire, beast mode.
pub fn classify(ctx: &DailyContext) -> (SuggestionCategory, String) {
    if ctx.sleep_quality == SleepQuality::Bad || ctx.energy == EnergyLevel::Low {
        let task = if ctx.time_available.minutes() < 10 {
            "5 min Decompression Breathing"
        } else {
            "10 min Mobility Flow"
        };
        return (SuggestionCategory::Recovery, task.to_string());
    }
    if ctx.time_available.minutes() <= 20 {
        return (
            SuggestionCategory::QuickHit,
            format!("{} min HIIT Blast", ctx.time_available.minutes()),
        );
    }
    if !ctx.did_workout_yesterday {
        return (
            SuggestionCategory::Comeback,
            "Full Body Wake-Up Circuit".to_string(),
        );
    }
    if ctx.streak > ON_FIRE_STREAK {
        return (
            SuggestionCategory::OnFire,
            "Attempt a PR (Safety First)".to_string(),
        );
    }
    (
        SuggestionCategory::BeastMode,
        "Heavy Compound Lifts".to_string(),
    )
}

/// Build a suggestion, letting `pick` choose the message index from the
/// category's pool size. Out-of-range picks wrap around.
pub fn suggest_with(ctx: &DailyContext, pick: impl FnOnce(usize) -> usize) -> Suggestion {
    let (category, action) = classify(ctx);
    let pool = messages(category);
    let message = pool[pick(pool.len()) % pool.len()];
    tracing::debug!(%category, %action, "coach suggestion");
    Suggestion {
        category,
        message,
        action,
    }
}

/// Suggestion with a message drawn uniformly from `rng`.
pub fn suggest<R: Rng>(ctx: &DailyContext, rng: &mut R) -> Suggestion {
    suggest_with(ctx, |len| rng.gen_range(0..len))
}

pub fn get_suggestion(ctx: &DailyContext) -> Suggestion {
    suggest(ctx, &mut rand::thread_rng())
}

/// Overrides for the parts of the context the dashboard cannot infer.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContextInput {
    pub energy: Option<EnergyLevel>,
    pub sleep_quality: Option<SleepQuality>,
    pub time_available: Option<TimeAvailable>,
    pub did_workout_yesterday: Option<bool>,
    pub streak: Option<u32>,
}

/// Fill a context from explicit input, falling back to what the metrics say.
pub fn derive_context(
    input: ContextInput,
    snapshot: &Snapshot,
    history: &[ActivityEntry],
    defaults: (EnergyLevel, TimeAvailable),
) -> DailyContext {
    derive_context_on(input, snapshot, history, defaults, Local::now().date_naive(), &Local)
}

pub fn derive_context_on<Tz: TimeZone>(
    input: ContextInput,
    snapshot: &Snapshot,
    history: &[ActivityEntry],
    defaults: (EnergyLevel, TimeAvailable),
    today: NaiveDate,
    tz: &Tz,
) -> DailyContext {
    DailyContext {
        energy: input.energy.unwrap_or(defaults.0),
        sleep_quality: input
            .sleep_quality
            .unwrap_or_else(|| SleepQuality::from_hours(snapshot.sleep_hours)),
        time_available: input.time_available.unwrap_or(defaults.1),
        did_workout_yesterday: input
            .did_workout_yesterday
            .unwrap_or_else(|| streak::worked_out_on_day_before(history, today, tz)),
        streak: input
            .streak
            .unwrap_or_else(|| streak::compute_streak_in(history, tz)),
    }
}
