//! Rotation Engine - one match
//!
//! `SELECT_ROLE → SEED_FIELD → (STEP)* → CLOSE`
//!
//! - select_role: fewest keeper stints, then fewest season minutes
//! - seed_field: top `squad_size` of the remaining players by priority
//! - step: every `interval_minutes`, credit minutes, then swap the least
//!   needy eligible on-field players for the neediest bench players
//! - close: credit the final partial interval and book the keeper stint
//!
//! The engine is the only writer of the ledger while a match is computed.

use std::collections::BTreeMap;

use crate::engine::config::RotationConfig;
use crate::engine::priority::{rank_least_needy, rank_most_needy, MatchContext};
use crate::models::{CheckpointEvent, Ledger, ParticipantId, RotationPlan, Substitution};

/// Compute the rotation for one match and apply its minutes to `ledger`.
pub fn rotate_match(ledger: &mut Ledger, ctx: MatchContext, config: &RotationConfig) -> RotationPlan {
    let special_role = select_role(ledger);
    let mut state = MatchState::seed(ledger, ctx, config, special_role);

    let interval = config.interval_minutes;
    let mut last_checkpoint = 0;
    let mut minute = interval;
    while minute < ctx.match_duration {
        state.step(minute);
        last_checkpoint = minute;
        minute += interval;
    }

    state.close(ctx.match_duration - last_checkpoint)
}

/// Fewest keeper stints, then fewest season minutes. Ties go to roster order.
pub fn select_role(ledger: &Ledger) -> ParticipantId {
    ledger
        .ids()
        .min_by_key(|&id| {
            let p = ledger.get(id);
            (p.special_role_count, p.total_field_time)
        })
        .unwrap_or(0)
}

struct MatchState<'a> {
    ledger: &'a mut Ledger,
    ctx: MatchContext,
    config: &'a RotationConfig,
    special_role: ParticipantId,
    /// Roster order, keeper excluded
    candidates: Vec<ParticipantId>,
    /// Insertion order matters: swaps remove the outgoing and append the incoming
    on_field: Vec<ParticipantId>,
    /// Minute each on-field player last came on
    last_entry: Vec<u32>,
    checkpoints: BTreeMap<u32, CheckpointEvent>,
}

impl<'a> MatchState<'a> {
    fn seed(
        ledger: &'a mut Ledger,
        ctx: MatchContext,
        config: &'a RotationConfig,
        special_role: ParticipantId,
    ) -> Self {
        let candidates: Vec<ParticipantId> =
            ledger.ids().filter(|&id| id != special_role).collect();

        for &id in &candidates {
            ledger
                .get_mut(id)
                .field_time_by_match
                .entry(ctx.match_number)
                .or_insert(0);
        }

        let ranked = rank_most_needy(ledger, &candidates, &ctx, Some(special_role), config);
        let on_field: Vec<ParticipantId> = ranked.into_iter().take(config.squad_size).collect();

        let mut checkpoints = BTreeMap::new();
        checkpoints.insert(
            0,
            CheckpointEvent::Lineup {
                on_field: on_field.iter().map(|&id| ledger.name(id).to_string()).collect(),
            },
        );

        let last_entry = vec![0; ledger.len()];

        Self {
            ledger,
            ctx,
            config,
            special_role,
            candidates,
            on_field,
            last_entry,
            checkpoints,
        }
    }

    fn step(&mut self, minute: u32) {
        let interval = self.config.interval_minutes;
        let match_number = self.ctx.match_number;

        for &id in &self.on_field {
            self.ledger.get_mut(id).accrue(match_number, interval);
        }

        let eligible: Vec<ParticipantId> = self
            .on_field
            .iter()
            .copied()
            .filter(|&id| minute.saturating_sub(self.last_entry[id]) >= interval)
            .collect();
        if eligible.is_empty() {
            return;
        }

        let bench: Vec<ParticipantId> = self
            .candidates
            .iter()
            .copied()
            .filter(|id| !self.on_field.contains(id))
            .collect();
        if bench.is_empty() {
            return;
        }

        let ledger: &Ledger = &*self.ledger;
        let special_role = Some(self.special_role);
        let bench_ranked = rank_most_needy(ledger, &bench, &self.ctx, special_role, self.config);
        let field_ranked =
            rank_least_needy(ledger, &eligible, &self.ctx, special_role, self.config);

        let bench_minutes: Vec<u32> = bench_ranked
            .iter()
            .map(|&id| ledger.get(id).minutes_in(match_number))
            .collect();
        let field_minutes: Vec<u32> = field_ranked
            .iter()
            .map(|&id| ledger.get(id).minutes_in(match_number))
            .collect();
        let history_on_bench = bench_ranked.iter().any(|&id| ledger.get(id).has_role_history());
        let history_on_field = self
            .on_field
            .iter()
            .any(|&id| ledger.get(id).has_role_history());

        let (cap, reason) = self.config.policy.cap(
            history_on_bench,
            history_on_field,
            &bench_minutes,
            &field_minutes,
        );
        let count = cap.min(field_ranked.len()).min(bench_ranked.len());

        tracing::debug!(
            match_number,
            minute,
            eligible = field_ranked.len(),
            bench = bench_ranked.len(),
            count,
            ?reason,
            "substitution checkpoint"
        );

        if count == 0 {
            return;
        }

        let mut swaps = Vec::with_capacity(count);
        for (&outgoing, &incoming) in field_ranked.iter().zip(&bench_ranked).take(count) {
            self.on_field.retain(|&id| id != outgoing);
            self.on_field.push(incoming);
            self.last_entry[incoming] = minute;
            swaps.push(Substitution {
                outgoing: self.ledger.name(outgoing).to_string(),
                incoming: self.ledger.name(incoming).to_string(),
            });
        }
        self.checkpoints
            .insert(minute, CheckpointEvent::Substitutions { swaps });
    }

    fn close(self, remaining: u32) -> RotationPlan {
        let match_number = self.ctx.match_number;
        if remaining > 0 {
            for &id in &self.on_field {
                self.ledger.get_mut(id).accrue(match_number, remaining);
            }
        }

        let keeper = self.ledger.get_mut(self.special_role);
        keeper.special_role_count += 1;
        keeper.field_time_by_match.insert(match_number, 0);
        let special_role = keeper.name.clone();

        tracing::info!(
            match_number,
            keeper = %special_role,
            substitution_checkpoints = self.checkpoints.len() - 1,
            "match rotation complete"
        );

        RotationPlan {
            match_number,
            duration: self.ctx.match_duration,
            special_role,
            checkpoints: self.checkpoints,
        }
    }
}
