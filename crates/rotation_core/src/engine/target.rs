//! Target Model
//!
//! Every player gets the same share of the outfield minutes pool. Goalkeeping
//! is not priced into the target; the priority ranker compensates keepers
//! after the fact.

use crate::models::Ledger;

/// Total outfield minutes available over the series.
pub fn field_time_pool(match_count: u32, match_duration: u32, squad_size: usize) -> u64 {
    u64::from(match_count) * u64::from(match_duration) * squad_size as u64
}

/// Set `target_field_time` on every participant to pool / roster size.
pub fn compute_targets(
    ledger: &mut Ledger,
    match_count: u32,
    match_duration: u32,
    squad_size: usize,
) {
    if ledger.is_empty() {
        return;
    }
    let pool = field_time_pool(match_count, match_duration, squad_size);
    let target = pool as f64 / ledger.len() as f64;
    for id in ledger.ids() {
        ledger.get_mut(id).target_field_time = target;
    }
    tracing::debug!(pool, target, roster = ledger.len(), "computed field time targets");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_target() {
        let mut ledger = Ledger::from_names(["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);
        compute_targets(&mut ledger, 4, 15, 7);
        // 4 * 15 * 7 = 420 over 10 players
        for p in ledger.iter() {
            assert!((p.target_field_time - 42.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_fractional_target() {
        let mut ledger = Ledger::from_names(["A", "B", "C"]);
        compute_targets(&mut ledger, 1, 10, 7);
        assert!((ledger.get(0).target_field_time - 70.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_ledger_is_noop() {
        let mut ledger = Ledger::default();
        compute_targets(&mut ledger, 3, 20, 7);
        assert!(ledger.is_empty());
    }
}
