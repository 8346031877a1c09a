//! Priority Ranker
//!
//! Orders players by how badly they need outfield minutes right now. The key
//! is lexicographic, lower sorts first (more urgent):
//!
//! 1. goalkeeping history, more stints first
//! 2. minutes already played in this match, fewer first
//! 3. need rate, higher first
//! 4. season total, lower first
//!
//! Any keeper history outranks every other consideration.

use std::cmp::Ordering;

use crate::engine::config::RotationConfig;
use crate::models::{Ledger, Participant, ParticipantId};

/// Position of a match within its series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchContext {
    /// 1-based
    pub match_number: u32,
    pub match_count: u32,
    /// Minutes
    pub match_duration: u32,
}

impl MatchContext {
    /// Matches from this one through the end of the series, inclusive.
    pub fn remaining_matches(&self) -> i64 {
        i64::from(self.match_count) - i64::from(self.match_number) + 1
    }
}

/// Composite ranking key. See the module docs for the field order.
#[derive(Debug, Clone, Copy)]
pub struct PriorityKey {
    pub special_role_count: u32,
    pub match_minutes: u32,
    pub rate: f64,
    pub total_minutes: u32,
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .special_role_count
            .cmp(&self.special_role_count)
            .then(self.match_minutes.cmp(&other.match_minutes))
            // +0.0 and -0.0 compare equal here, unlike total_cmp
            .then_with(|| other.rate.partial_cmp(&self.rate).unwrap_or(Ordering::Equal))
            .then(self.total_minutes.cmp(&other.total_minutes))
    }
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PriorityKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityKey {}

/// Outfield minutes per remaining match this player still needs.
///
/// `holds_special_role` removes the current match from the remaining count.
/// With no matches left the raw need is returned instead of a rate.
pub fn need_rate(
    participant: &Participant,
    ctx: &MatchContext,
    holds_special_role: bool,
    config: &RotationConfig,
) -> f64 {
    let mut remaining = ctx.remaining_matches();
    if holds_special_role {
        remaining -= 1;
    }

    let compensation = f64::from(participant.special_role_count)
        * f64::from(ctx.match_duration)
        * config.compensation_factor;
    let needed =
        participant.target_field_time - f64::from(participant.total_field_time) + compensation;

    let mut rate = if remaining > 0 {
        needed / remaining as f64
    } else {
        needed
    };
    if participant.has_role_history() {
        rate *= config.history_rate_multiplier;
    }
    rate
}

pub fn priority_key(
    participant: &Participant,
    ctx: &MatchContext,
    holds_special_role: bool,
    config: &RotationConfig,
) -> PriorityKey {
    PriorityKey {
        special_role_count: participant.special_role_count,
        match_minutes: participant.minutes_in(ctx.match_number),
        rate: need_rate(participant, ctx, holds_special_role, config),
        total_minutes: participant.total_field_time,
    }
}

/// Most urgent first. Equal keys keep the order of `ids`.
pub fn rank_most_needy(
    ledger: &Ledger,
    ids: &[ParticipantId],
    ctx: &MatchContext,
    special_role: Option<ParticipantId>,
    config: &RotationConfig,
) -> Vec<ParticipantId> {
    let mut keyed = keyed(ledger, ids, ctx, special_role, config);
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    keyed.into_iter().map(|(_, id)| id).collect()
}

/// Least urgent first. Equal keys keep the order of `ids`.
pub fn rank_least_needy(
    ledger: &Ledger,
    ids: &[ParticipantId],
    ctx: &MatchContext,
    special_role: Option<ParticipantId>,
    config: &RotationConfig,
) -> Vec<ParticipantId> {
    let mut keyed = keyed(ledger, ids, ctx, special_role, config);
    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));
    keyed.into_iter().map(|(_, id)| id).collect()
}

fn keyed(
    ledger: &Ledger,
    ids: &[ParticipantId],
    ctx: &MatchContext,
    special_role: Option<ParticipantId>,
    config: &RotationConfig,
) -> Vec<(PriorityKey, ParticipantId)> {
    ids.iter()
        .map(|&id| {
            let key = priority_key(ledger.get(id), ctx, special_role == Some(id), config);
            tracing::trace!(player = ledger.name(id), ?key, "priority");
            (key, id)
        })
        .collect()
}
