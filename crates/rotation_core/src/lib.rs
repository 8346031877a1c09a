//! # rotation_core - Fair Playing-Time Rotation for 8-a-side Series
//!
//! Given a roster, a match count and a match length, produces a goalkeeper
//! and a substitution schedule for every match so outfield minutes even out
//! over the series. Players who keep goal are paid back with priority for
//! outfield minutes in later matches.
//!
//! ## Features
//! - Deterministic: same roster order and inputs give the same plans
//! - Greedy single pass, one match at a time
//! - All tuning constants in [`RotationConfig`], loadable from JSON
//!
//! ```rust
//! use rotation_core::{RotationConfig, SeriesSchedule};
//!
//! let roster = ["Alex", "Ben", "Chris", "David", "Emma", "Felix", "George", "Hannah", "Ian"];
//! let schedule = SeriesSchedule::generate(roster, 3, 15, &RotationConfig::default());
//! assert_eq!(schedule.plans.len(), 3);
//! assert_eq!(schedule.plans[0].starters().len(), 7);
//! ```

pub mod engine;
pub mod error;
pub mod models;

pub use engine::{run_series, RotationConfig, SeriesSchedule, SubstitutionPolicy};
pub use error::{ConfigError, Result};
pub use models::{
    CheckpointEvent, KickoffRole, Ledger, Participant, RotationPlan, SeriesSummary, Substitution,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
