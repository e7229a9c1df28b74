pub mod achievement;
pub mod coach;
pub mod config;
pub mod level;
pub mod plan;
pub mod snapshot;

pub use snapshot::{ActivityCategory, ActivityEntry, Goals, Snapshot};
