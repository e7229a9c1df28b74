pub mod achievements;
pub mod coach;
pub mod export;
pub mod leveling;
pub mod motivation;
pub mod session;
pub mod status;
pub mod streak;
pub mod tracking;
