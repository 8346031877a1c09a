//! Participant Ledger
//!
//! Season-long playing-time state for every player on the roster. Created once
//! from the roster, mutated in place by the rotation engine match by match.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One roster entry and the minutes it has accumulated so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique, case-sensitive name
    pub name: String,
    /// Outfield minutes across every match played so far
    pub total_field_time: u32,
    /// Outfield minutes per match number (keeper matches record 0)
    pub field_time_by_match: BTreeMap<u32, u32>,
    /// Matches spent in goal
    pub special_role_count: u32,
    /// Fair-share outfield minutes for the whole series
    pub target_field_time: f64,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_field_time: 0,
            field_time_by_match: BTreeMap::new(),
            special_role_count: 0,
            target_field_time: 0.0,
        }
    }

    /// Outfield minutes in `match_number`, 0 if the match has no entry yet.
    pub fn minutes_in(&self, match_number: u32) -> u32 {
        self.field_time_by_match
            .get(&match_number)
            .copied()
            .unwrap_or(0)
    }

    /// Whether this player has kept goal at least once.
    pub fn has_role_history(&self) -> bool {
        self.special_role_count > 0
    }

    /// Credit outfield minutes to both the match and the season total.
    pub fn accrue(&mut self, match_number: u32, minutes: u32) {
        *self.field_time_by_match.entry(match_number).or_insert(0) += minutes;
        self.total_field_time += minutes;
    }
}

/// Index into [`Ledger`], stable for the lifetime of a series.
pub type ParticipantId = usize;

/// Roster-ordered participants plus an O(1) name index.
///
/// Roster order is the tie-break for every ranking, so it is never changed
/// after construction.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    participants: Vec<Participant>,
    index: FxHashMap<String, ParticipantId>,
}

impl Ledger {
    /// Build a ledger from roster names. Names are expected to be unique;
    /// the input layer rejects duplicates before this is called.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let participants: Vec<Participant> = names.into_iter().map(Participant::new).collect();
        let index = participants
            .iter()
            .enumerate()
            .map(|(id, p)| (p.name.clone(), id))
            .collect();
        Self {
            participants,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, id: ParticipantId) -> &Participant {
        &self.participants[id]
    }

    pub fn get_mut(&mut self, id: ParticipantId) -> &mut Participant {
        &mut self.participants[id]
    }

    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> {
        0..self.participants.len()
    }

    pub fn id_of(&self, name: &str) -> Option<ParticipantId> {
        self.index.get(name).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&Participant> {
        self.id_of(name).map(|id| &self.participants[id])
    }

    pub fn name(&self, id: ParticipantId) -> &str {
        &self.participants[id].name
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.participants.iter()
    }

    pub fn into_participants(self) -> Vec<Participant> {
        self.participants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accrue_tracks_match_and_season() {
        let mut p = Participant::new("Alex");
        p.accrue(1, 3);
        p.accrue(1, 3);
        p.accrue(2, 1);
        assert_eq!(p.minutes_in(1), 6);
        assert_eq!(p.minutes_in(2), 1);
        assert_eq!(p.minutes_in(3), 0);
        assert_eq!(p.total_field_time, 7);
    }

    #[test]
    fn test_ledger_keeps_roster_order_and_index() {
        let ledger = Ledger::from_names(["Ben", "alex", "Alex"]);
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.name(0), "Ben");
        assert_eq!(ledger.id_of("Alex"), Some(2));
        // Names are case-sensitive
        assert_eq!(ledger.id_of("alex"), Some(1));
        assert!(ledger.by_name("ALEX").is_none());
    }

    #[test]
    fn test_role_history() {
        let mut p = Participant::new("Kate");
        assert!(!p.has_role_history());
        p.special_role_count = 1;
        assert!(p.has_role_history());
    }
}
