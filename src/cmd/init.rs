use anyhow::Result;

use titanx::models::config::Config;
use titanx::store::MetricsStore;

pub fn run(name: Option<&str>) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();
    if let Some(n) = name {
        config.set("profile.display_name", n)?;
    }
    config.save()?;

    let db = super::open_db()?;
    let mut snapshot = db.load_or_default()?;
    if name.is_some() || snapshot.display_name.is_empty() {
        snapshot.display_name = config.profile.display_name.clone();
        db.save(&snapshot)?;
    }

    println!("Config initialized at {:?}", Config::path());
    Ok(())
}
