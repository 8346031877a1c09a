//! Series Driver
//!
//! Runs the rotation engine for matches 1..=N in order over one ledger, so
//! every match sees the minutes and keeper stints booked by earlier ones.

use serde::Serialize;

use crate::engine::config::RotationConfig;
use crate::engine::priority::MatchContext;
use crate::engine::rotation::rotate_match;
use crate::engine::target::compute_targets;
use crate::models::{Ledger, Participant, RotationPlan, SeriesSummary};

/// Compute targets, then one plan per match. Matches must run strictly in
/// order; later rankings depend on the ledger state left by earlier matches.
pub fn run_series(
    ledger: &mut Ledger,
    match_count: u32,
    match_duration: u32,
    config: &RotationConfig,
) -> Vec<RotationPlan> {
    compute_targets(ledger, match_count, match_duration, config.squad_size);

    (1..=match_count)
        .map(|match_number| {
            let ctx = MatchContext {
                match_number,
                match_count,
                match_duration,
            };
            rotate_match(ledger, ctx, config)
        })
        .collect()
}

/// A finished series: the plans plus the final ledger state.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesSchedule {
    pub match_count: u32,
    pub match_duration: u32,
    pub plans: Vec<RotationPlan>,
    #[serde(skip)]
    pub ledger: Ledger,
}

impl SeriesSchedule {
    /// Build a ledger from roster names and run the whole series.
    pub fn generate<I, S>(
        names: I,
        match_count: u32,
        match_duration: u32,
        config: &RotationConfig,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ledger = Ledger::from_names(names);
        let plans = run_series(&mut ledger, match_count, match_duration, config);
        tracing::info!(
            roster = ledger.len(),
            match_count,
            match_duration,
            "series schedule generated"
        );
        Self {
            match_count,
            match_duration,
            plans,
            ledger,
        }
    }

    /// Participants in roster order.
    pub fn participants(&self) -> &[Participant] {
        self.ledger.participants()
    }

    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary::from_ledger(&self.ledger, self.match_count)
    }
}
