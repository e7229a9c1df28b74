use anyhow::Result;
use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use titanx::core::coach::{self, ContextInput};
use titanx::models::coach::{EnergyLevel, SleepQuality, TimeAvailable};
use titanx::models::config::Config;
use titanx::output;
use titanx::output::human;
use titanx::store::MetricsStore;

pub struct SuggestArgs<'a> {
    pub energy: Option<&'a str>,
    pub sleep: Option<&'a str>,
    pub time: Option<&'a str>,
    pub yesterday: Option<bool>,
    pub streak: Option<u32>,
    pub seed: Option<u64>,
}

pub fn run(args: SuggestArgs<'_>, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let input = ContextInput {
        energy: args.energy.map(str::parse::<EnergyLevel>).transpose()?,
        sleep_quality: args.sleep.map(str::parse::<SleepQuality>).transpose()?,
        time_available: args.time.map(str::parse::<TimeAvailable>).transpose()?,
        did_workout_yesterday: args.yesterday,
        streak: args.streak,
    };

    let db = super::open_db()?;
    let snapshot = db.load_or_default()?;
    let history = db.activity_history()?;
    let today = date.unwrap_or_else(|| Local::now().date_naive());
    let ctx = coach::derive_context_on(
        input,
        &snapshot,
        &history,
        (config.coach.energy, config.coach.time_available),
        today,
        &Local,
    );

    let suggestion = match args.seed {
        Some(seed) => coach::suggest(&ctx, &mut StdRng::seed_from_u64(seed)),
        None => coach::get_suggestion(&ctx),
    };

    if human_flag {
        println!("{}", human::format_suggestion(&suggestion));
    } else {
        let out = output::success(
            "suggest",
            json!({ "context": ctx, "suggestion": suggestion }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
