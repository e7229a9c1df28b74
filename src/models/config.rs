use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::coach::{EnergyLevel, TimeAvailable};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub coach: CoachDefaults,
    #[serde(default)]
    pub workout: WorkoutTiming,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default = "default_display_name")]
    pub display_name: String,
}

fn default_display_name() -> String {
    "Titan".to_string()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
        }
    }
}

/// Context used by `suggest` when the caller does not pass one.
#[derive(Debug, Serialize, Deserialize)]
pub struct CoachDefaults {
    #[serde(default = "default_energy")]
    pub energy: EnergyLevel,
    #[serde(default = "default_time_available")]
    pub time_available: TimeAvailable,
}

fn default_energy() -> EnergyLevel {
    EnergyLevel::Mid
}
fn default_time_available() -> TimeAvailable {
    TimeAvailable::Thirty
}

impl Default for CoachDefaults {
    fn default() -> Self {
        Self {
            energy: default_energy(),
            time_available: default_time_available(),
        }
    }
}

/// Fallback durations, in seconds, for the workout session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WorkoutTiming {
    #[serde(default = "default_rest_between_exercises")]
    pub rest_between_exercises: u32,
    #[serde(default = "default_set_rest")]
    pub default_set_rest: u32,
    #[serde(default = "default_active_duration")]
    pub default_active_duration: u32,
}

fn default_rest_between_exercises() -> u32 {
    60
}
fn default_set_rest() -> u32 {
    30
}
fn default_active_duration() -> u32 {
    60
}

impl Default for WorkoutTiming {
    fn default() -> Self {
        Self {
            rest_between_exercises: default_rest_between_exercises(),
            default_set_rest: default_set_rest(),
            default_active_duration: default_active_duration(),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true).mode(0o600);
            let mut file = options.open(&path)?;
            file.write_all(contents.as_bytes())?;

            // An existing file keeps its old mode through open(); fix it up.
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Apply a `section.key` assignment from the command line.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "profile.display_name" | "name" => {
                let name = value.trim();
                if name.is_empty() {
                    anyhow::bail!("display name cannot be empty");
                }
                self.profile.display_name = name.to_string();
            }
            "coach.energy" => self.coach.energy = value.parse()?,
            "coach.time_available" => self.coach.time_available = value.parse()?,
            "workout.rest_between_exercises" => {
                self.workout.rest_between_exercises = parse_seconds(key, value)?
            }
            "workout.default_set_rest" => {
                self.workout.default_set_rest = parse_seconds(key, value)?
            }
            "workout.default_active_duration" => {
                self.workout.default_active_duration = parse_seconds(key, value)?
            }
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("TITANX_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".titanx")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}

fn parse_seconds(key: &str, value: &str) -> anyhow::Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => anyhow::bail!("{} must be a positive number of seconds, got '{}'", key, value),
    }
}
