//! Rotation Plan
//!
//! Per-match output of the rotation engine: who keeps goal, who starts, and
//! the substitutions at each checkpoint. Read-only for every consumer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One swap at a checkpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub outgoing: String,
    pub incoming: String,
}

/// What happens at a checkpoint minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckpointEvent {
    /// Kick-off outfield line-up (minute 0 only)
    Lineup { on_field: Vec<String> },
    /// Swaps made at a later checkpoint
    Substitutions { swaps: Vec<Substitution> },
}

/// Kick-off status of a roster member, as printed in the schedule grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickoffRole {
    /// Starts outfield
    StartsMain,
    /// Starts in goal
    StartsSpecial,
    /// Starts on the bench
    StartsReserve,
}

impl KickoffRole {
    pub fn label(self) -> &'static str {
        match self {
            KickoffRole::StartsMain => "SM",
            KickoffRole::StartsSpecial => "SM(GK)",
            KickoffRole::StartsReserve => "RM",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationPlan {
    pub match_number: u32,
    /// Match length in minutes
    pub duration: u32,
    /// Keeper for the whole match
    pub special_role: String,
    /// Checkpoint minute -> event. Minute 0 always holds the line-up.
    pub checkpoints: BTreeMap<u32, CheckpointEvent>,
}

impl RotationPlan {
    /// Kick-off outfield players in the order they were seeded.
    pub fn starters(&self) -> &[String] {
        match self.checkpoints.get(&0) {
            Some(CheckpointEvent::Lineup { on_field }) => on_field,
            _ => &[],
        }
    }

    /// Substitution checkpoints in minute order.
    pub fn substitutions(&self) -> impl Iterator<Item = (u32, &[Substitution])> {
        self.checkpoints
            .iter()
            .filter_map(|(&minute, event)| match event {
                CheckpointEvent::Substitutions { swaps } => Some((minute, swaps.as_slice())),
                CheckpointEvent::Lineup { .. } => None,
            })
    }

    pub fn kickoff_role(&self, name: &str) -> KickoffRole {
        if self.special_role == name {
            KickoffRole::StartsSpecial
        } else if self.starters().iter().any(|s| s == name) {
            KickoffRole::StartsMain
        } else {
            KickoffRole::StartsReserve
        }
    }

    /// Replay the plan up to and including `minute` and return the outfield
    /// players at that point, in the engine's on-field order.
    pub fn on_field_at(&self, minute: u32) -> Vec<String> {
        let mut on_field = self.starters().to_vec();
        for (_, swaps) in self.substitutions().take_while(|(m, _)| *m <= minute) {
            for swap in swaps {
                on_field.retain(|name| name != &swap.outgoing);
                on_field.push(swap.incoming.clone());
            }
        }
        on_field
    }
}
