use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Low,
    Mid,
    High,
}

impl std::fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Mid => write!(f, "mid"),
            Self::High => write!(f, "high"),
        }
    }
}

impl FromStr for EnergyLevel {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "low" => Ok(Self::Low),
            "mid" => Ok(Self::Mid),
            "high" => Ok(Self::High),
            _ => anyhow::bail!("invalid energy: {} (expected low/mid/high)", s),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SleepQuality {
    Bad,
    Ok,
    Good,
}

impl SleepQuality {
    /// Bucket last night's sleep: under 6h is bad, over 8h is good.
    pub fn from_hours(hours: f64) -> Self {
        if hours < 6.0 {
            Self::Bad
        } else if hours > 8.0 {
            Self::Good
        } else {
            Self::Ok
        }
    }
}

impl std::fmt::Display for SleepQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bad => write!(f, "bad"),
            Self::Ok => write!(f, "ok"),
            Self::Good => write!(f, "good"),
        }
    }
}

impl FromStr for SleepQuality {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "bad" => Ok(Self::Bad),
            "ok" => Ok(Self::Ok),
            "good" => Ok(Self::Good),
            _ => anyhow::bail!("invalid sleep quality: {} (expected bad/ok/good)", s),
        }
    }
}

/// Minutes the user can spare; only these buckets are offered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub enum TimeAvailable {
    Five,
    Ten,
    Twenty,
    Thirty,
    FortyFive,
    Sixty,
}

impl TimeAvailable {
    pub fn minutes(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Thirty => 30,
            Self::FortyFive => 45,
            Self::Sixty => 60,
        }
    }
}

impl TryFrom<u32> for TimeAvailable {
    type Error = anyhow::Error;
    fn try_from(minutes: u32) -> anyhow::Result<Self> {
        match minutes {
            5 => Ok(Self::Five),
            10 => Ok(Self::Ten),
            20 => Ok(Self::Twenty),
            30 => Ok(Self::Thirty),
            45 => Ok(Self::FortyFive),
            60 => Ok(Self::Sixty),
            _ => anyhow::bail!(
                "invalid time available: {} (expected 5/10/20/30/45/60)",
                minutes
            ),
        }
    }
}

impl From<TimeAvailable> for u32 {
    fn from(t: TimeAvailable) -> u32 {
        t.minutes()
    }
}

impl FromStr for TimeAvailable {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let minutes: u32 = s
            .trim_end_matches("min")
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid time available: {}", s))?;
        Self::try_from(minutes)
    }
}

impl std::fmt::Display for TimeAvailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.minutes())
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DailyContext {
    pub energy: EnergyLevel,
    pub sleep_quality: SleepQuality,
    pub time_available: TimeAvailable,
    pub did_workout_yesterday: bool,
    pub streak: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionCategory {
    Recovery,
    QuickHit,
    Comeback,
    OnFire,
    BeastMode,
}

impl std::fmt::Display for SuggestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recovery => write!(f, "RECOVERY"),
            Self::QuickHit => write!(f, "QUICK_HIT"),
            Self::Comeback => write!(f, "COMEBACK"),
            Self::OnFire => write!(f, "ON_FIRE"),
            Self::BeastMode => write!(f, "BEAST_MODE"),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub message: &'static str,
    pub action: String,
}
