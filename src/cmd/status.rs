use anyhow::Result;
use serde_json::json;

use titanx::core::status;
use titanx::models::config::Config;
use titanx::models::level::LEVELS;
use titanx::output;
use titanx::output::human;
use titanx::store::MetricsStore;

fn dashboard() -> Result<status::DashboardStatus> {
    let config = Config::load()?;
    let db = super::open_db()?;
    let mut s = status::compute(&db)?;
    let fallback = config.profile.display_name.trim();
    if s.metrics.display_name.is_empty() && !fallback.is_empty() {
        s.metrics.display_name = fallback.to_string();
        s.greeting = format!("{}, {}", s.greeting, fallback);
    }
    Ok(s)
}

pub fn run(human_flag: bool) -> Result<()> {
    let s = dashboard()?;
    if human_flag {
        println!("{}", human::format_status(&s));
    } else {
        let out = output::success("status", serde_json::to_value(&s)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_achievements(human_flag: bool) -> Result<()> {
    let s = dashboard()?;
    if human_flag {
        println!("{}", human::format_achievements(&s.achievements));
        println!("{}/{} unlocked", s.unlocked, s.achievements.len());
    } else {
        let out = output::success(
            "achievements",
            json!({ "unlocked": s.unlocked, "achievements": s.achievements }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_level(human_flag: bool) -> Result<()> {
    let s = dashboard()?;
    if human_flag {
        println!("{}", human::format_levels(&LEVELS, s.level.rank));
        println!(
            "{} | {} XP | {:.0}% to next",
            human::level_badge(s.level),
            s.xp,
            s.progress.percentage
        );
    } else {
        let out = output::success(
            "level",
            json!({
                "xp": s.xp,
                "level": s.level,
                "next_level": s.next_level,
                "progress": s.progress,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

/// History-aware streak for commands that only need the number.
pub(crate) fn current_streak(db: &impl MetricsStore) -> Result<u32> {
    Ok(titanx::core::streak::compute_streak(&db.activity_history()?))
}
