mod common;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use titanx::core::coach::{
    ContextInput, classify, derive_context_on, messages, suggest, suggest_with,
};
use titanx::models::coach::{
    DailyContext, EnergyLevel, SleepQuality, SuggestionCategory, TimeAvailable,
};

use common::{date, snapshot, workout_on};

fn ctx(
    energy: EnergyLevel,
    sleep_quality: SleepQuality,
    time_available: TimeAvailable,
    did_workout_yesterday: bool,
    streak: u32,
) -> DailyContext {
    DailyContext {
        energy,
        sleep_quality,
        time_available,
        did_workout_yesterday,
        streak,
    }
}

#[test]
fn test_bad_sleep_overrides_everything() {
    let c = ctx(
        EnergyLevel::High,
        SleepQuality::Bad,
        TimeAvailable::Sixty,
        true,
        10,
    );
    let (category, action) = classify(&c);
    assert_eq!(category, SuggestionCategory::Recovery);
    assert_eq!(action, "10 min Mobility Flow");
}

#[test]
fn test_low_energy_with_little_time_breathes() {
    let c = ctx(
        EnergyLevel::Low,
        SleepQuality::Good,
        TimeAvailable::Five,
        true,
        0,
    );
    let (category, action) = classify(&c);
    assert_eq!(category, SuggestionCategory::Recovery);
    assert_eq!(action, "5 min Decompression Breathing");
}

#[test]
fn test_short_time_is_quick_hit() {
    for (time, expected) in [
        (TimeAvailable::Five, "5 min HIIT Blast"),
        (TimeAvailable::Ten, "10 min HIIT Blast"),
        (TimeAvailable::Twenty, "20 min HIIT Blast"),
    ] {
        let c = ctx(EnergyLevel::Mid, SleepQuality::Ok, time, false, 0);
        let (category, action) = classify(&c);
        assert_eq!(category, SuggestionCategory::QuickHit);
        assert_eq!(action, expected);
    }
}

#[test]
fn test_missed_yesterday_is_comeback() {
    let c = ctx(
        EnergyLevel::High,
        SleepQuality::Good,
        TimeAvailable::Thirty,
        false,
        9,
    );
    let (category, action) = classify(&c);
    assert_eq!(category, SuggestionCategory::Comeback);
    assert_eq!(action, "Full Body Wake-Up Circuit");
}

#[test]
fn test_long_streak_is_on_fire() {
    let c = ctx(
        EnergyLevel::High,
        SleepQuality::Good,
        TimeAvailable::Sixty,
        true,
        10,
    );
    let (category, action) = classify(&c);
    assert_eq!(category, SuggestionCategory::OnFire);
    assert_eq!(action, "Attempt a PR (Safety First)");
}

#[test]
fn test_streak_of_five_is_not_on_fire() {
    let c = ctx(
        EnergyLevel::Mid,
        SleepQuality::Ok,
        TimeAvailable::FortyFive,
        true,
        5,
    );
    let (category, action) = classify(&c);
    assert_eq!(category, SuggestionCategory::BeastMode);
    assert_eq!(action, "Heavy Compound Lifts");
}

#[test]
fn test_pick_selects_message() {
    let c = ctx(
        EnergyLevel::High,
        SleepQuality::Good,
        TimeAvailable::Sixty,
        true,
        10,
    );
    let s = suggest_with(&c, |_| 0);
    assert_eq!(s.category, SuggestionCategory::OnFire);
    assert_eq!(s.message, "You're becoming dangerous. Keep this up.");

    let wrapped = suggest_with(&c, |len| len + 1);
    assert_eq!(wrapped.message, messages(SuggestionCategory::OnFire)[1]);
}

#[test]
fn test_same_seed_same_message() {
    let c = ctx(
        EnergyLevel::Mid,
        SleepQuality::Ok,
        TimeAvailable::Ten,
        true,
        1,
    );
    let a = suggest(&c, &mut StdRng::seed_from_u64(7));
    let b = suggest(&c, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
    assert!(messages(SuggestionCategory::QuickHit).contains(&a.message));
}

#[test]
fn test_every_pool_has_messages() {
    for category in [
        SuggestionCategory::Recovery,
        SuggestionCategory::QuickHit,
        SuggestionCategory::Comeback,
        SuggestionCategory::OnFire,
        SuggestionCategory::BeastMode,
    ] {
        assert_eq!(messages(category).len(), 5, "{}", category);
    }
}

#[test]
fn test_context_derived_from_metrics() {
    let today = date(2026, 4, 10);
    let history = vec![
        workout_on(date(2026, 4, 9)),
        workout_on(date(2026, 4, 7)),
        workout_on(date(2026, 4, 7)),
    ];
    let snap = snapshot(3, 0, 0.0, 5.5, 0.0);
    let c = derive_context_on(
        ContextInput::default(),
        &snap,
        &history,
        (EnergyLevel::Mid, TimeAvailable::Thirty),
        today,
        &Utc,
    );
    assert_eq!(c.sleep_quality, SleepQuality::Bad);
    assert!(c.did_workout_yesterday);
    assert_eq!(c.streak, 2);
    assert_eq!(c.energy, EnergyLevel::Mid);
    assert_eq!(c.time_available, TimeAvailable::Thirty);
}

#[test]
fn test_explicit_input_wins() {
    let snap = snapshot(0, 0, 0.0, 9.0, 0.0);
    let input = ContextInput {
        energy: Some(EnergyLevel::High),
        sleep_quality: Some(SleepQuality::Ok),
        time_available: Some(TimeAvailable::Sixty),
        did_workout_yesterday: Some(true),
        streak: Some(12),
    };
    let c = derive_context_on(
        input,
        &snap,
        &[],
        (EnergyLevel::Low, TimeAvailable::Five),
        date(2026, 4, 10),
        &Utc,
    );
    assert_eq!(
        c,
        ctx(
            EnergyLevel::High,
            SleepQuality::Ok,
            TimeAvailable::Sixty,
            true,
            12
        )
    );
}

#[test]
fn test_time_available_parsing() {
    assert_eq!("45".parse::<TimeAvailable>().unwrap(), TimeAvailable::FortyFive);
    assert_eq!("20min".parse::<TimeAvailable>().unwrap(), TimeAvailable::Twenty);
    assert!("15".parse::<TimeAvailable>().is_err());
    assert_eq!(SleepQuality::from_hours(6.0), SleepQuality::Ok);
    assert_eq!(SleepQuality::from_hours(8.5), SleepQuality::Good);
}
