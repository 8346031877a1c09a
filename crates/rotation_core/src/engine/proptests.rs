//! Property-based invariants over whole series.

use std::collections::HashMap;

use proptest::prelude::*;

use super::config::RotationConfig;
use super::series::SeriesSchedule;
use crate::models::CheckpointEvent;

fn roster(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("Player{i:02}")).collect()
}

proptest! {
    /// Property: every match books exactly duration x squad minutes, each
    /// player within [0, duration], keeper at 0
    #[test]
    fn prop_minutes_are_conserved(
        size in 8usize..=18,
        matches in 1u32..=6,
        duration in 3u32..=40,
    ) {
        let cfg = RotationConfig::default();
        let schedule = SeriesSchedule::generate(roster(size), matches, duration, &cfg);

        for plan in &schedule.plans {
            let m = plan.match_number;
            let mut total = 0;
            for p in schedule.participants() {
                let minutes = p.minutes_in(m);
                prop_assert!(minutes <= duration);
                total += minutes;
            }
            prop_assert_eq!(total, duration * cfg.squad_size as u32);
            let keeper = schedule.ledger.by_name(&plan.special_role).unwrap();
            prop_assert_eq!(keeper.minutes_in(m), 0);
        }
        let stints: u32 = schedule.participants().iter().map(|p| p.special_role_count).sum();
        prop_assert_eq!(stints, matches);
    }

    /// Property: squad size holds at every checkpoint, incoming players come
    /// from the bench, outgoing players have served a full interval
    #[test]
    fn prop_substitutions_are_legal(
        size in 8usize..=18,
        matches in 1u32..=5,
        duration in 3u32..=30,
    ) {
        let cfg = RotationConfig::default();
        let schedule = SeriesSchedule::generate(roster(size), matches, duration, &cfg);

        for plan in &schedule.plans {
            let mut entered: HashMap<String, u32> = HashMap::new();
            for (&minute, event) in &plan.checkpoints {
                match event {
                    CheckpointEvent::Lineup { on_field } => {
                        prop_assert_eq!(minute, 0);
                        prop_assert!(!on_field.contains(&plan.special_role));
                        for name in on_field {
                            entered.insert(name.clone(), 0);
                        }
                    }
                    CheckpointEvent::Substitutions { swaps } => {
                        prop_assert!(!swaps.is_empty());
                        for swap in swaps {
                            let since = entered.remove(&swap.outgoing);
                            prop_assert!(since.is_some());
                            prop_assert!(minute - since.unwrap() >= cfg.interval_minutes);
                            prop_assert!(!entered.contains_key(&swap.incoming));
                            prop_assert!(swap.incoming != plan.special_role);
                            entered.insert(swap.incoming.clone(), minute);
                        }
                    }
                }
                prop_assert_eq!(entered.len(), cfg.squad_size);
            }
        }
    }

    /// Property: identical inputs give identical plans
    #[test]
    fn prop_deterministic(size in 8usize..=18, matches in 1u32..=4, duration in 3u32..=30) {
        let cfg = RotationConfig::default();
        let a = SeriesSchedule::generate(roster(size), matches, duration, &cfg);
        let b = SeriesSchedule::generate(roster(size), matches, duration, &cfg);
        prop_assert_eq!(a.plans, b.plans);
    }
}
