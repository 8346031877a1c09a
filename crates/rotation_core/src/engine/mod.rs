//! # Rotation Engine
//!
//! ## Contents
//! - config: tuning constants and the substitution count policy
//! - target: fair-share outfield minutes per player
//! - priority: who needs outfield minutes most, as a lexicographic key
//! - rotation: per-match keeper choice, line-up and substitutions
//! - series: runs every match in order over one ledger

pub mod config;
pub mod priority;
pub mod rotation;
pub mod series;
pub mod target;

#[cfg(all(test, feature = "proptest"))]
mod proptests;

pub use config::{CapReason, RotationConfig, SubstitutionPolicy};
pub use priority::{priority_key, rank_least_needy, rank_most_needy, MatchContext, PriorityKey};
pub use rotation::{rotate_match, select_role};
pub use series::{run_series, SeriesSchedule};
pub use target::{compute_targets, field_time_pool};
