//! Series Summary
//!
//! Playing-time statistics read from the ledger after a series has run.

use serde::{Deserialize, Serialize};

use super::participant::Ledger;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    /// Outfield minutes for match 1..=N (index 0 is match 1)
    pub minutes_by_match: Vec<u32>,
    pub total_minutes: u32,
    pub special_role_count: u32,
}

/// Min / average / max over a set of minute totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinuteStats {
    pub min: u32,
    pub avg: f64,
    pub max: u32,
}

impl MinuteStats {
    /// `None` for an empty input.
    pub fn from_minutes(minutes: &[u32]) -> Option<Self> {
        let min = *minutes.iter().min()?;
        let max = *minutes.iter().max()?;
        let sum: u64 = minutes.iter().map(|&m| u64::from(m)).sum();
        Some(Self {
            min,
            avg: sum as f64 / minutes.len() as f64,
            max,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    pub match_number: u32,
    #[serde(flatten)]
    pub stats: MinuteStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Roster order
    pub players: Vec<PlayerSummary>,
    pub matches: Vec<MatchStats>,
    /// Statistics over season totals
    pub overall: Option<MinuteStats>,
    /// Players who kept goal at least once
    pub role_experienced: usize,
}

impl SeriesSummary {
    pub fn from_ledger(ledger: &Ledger, match_count: u32) -> Self {
        let players: Vec<PlayerSummary> = ledger
            .iter()
            .map(|p| PlayerSummary {
                name: p.name.clone(),
                minutes_by_match: (1..=match_count).map(|m| p.minutes_in(m)).collect(),
                total_minutes: p.total_field_time,
                special_role_count: p.special_role_count,
            })
            .collect();

        let matches = (1..=match_count)
            .filter_map(|m| {
                let minutes: Vec<u32> = ledger.iter().map(|p| p.minutes_in(m)).collect();
                MinuteStats::from_minutes(&minutes).map(|stats| MatchStats {
                    match_number: m,
                    stats,
                })
            })
            .collect();

        let totals: Vec<u32> = players.iter().map(|p| p.total_minutes).collect();

        Self {
            overall: MinuteStats::from_minutes(&totals),
            role_experienced: ledger.iter().filter(|p| p.has_role_history()).count(),
            players,
            matches,
        }
    }

    pub fn roster_size(&self) -> usize {
        self.players.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_stats() {
        let stats = MinuteStats::from_minutes(&[9, 0, 6]).unwrap();
        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 9);
        assert!((stats.avg - 5.0).abs() < 1e-9);
        assert!(MinuteStats::from_minutes(&[]).is_none());
    }

    #[test]
    fn test_summary_from_ledger() {
        let mut ledger = Ledger::from_names(["A", "B"]);
        ledger.get_mut(0).accrue(1, 9);
        ledger.get_mut(0).accrue(2, 3);
        ledger.get_mut(1).special_role_count = 1;
        ledger.get_mut(1).field_time_by_match.insert(1, 0);

        let summary = SeriesSummary::from_ledger(&ledger, 2);
        assert_eq!(summary.roster_size(), 2);
        assert_eq!(summary.players[0].minutes_by_match, vec![9, 3]);
        assert_eq!(summary.players[1].minutes_by_match, vec![0, 0]);
        assert_eq!(summary.matches.len(), 2);
        assert_eq!(summary.matches[0].stats.max, 9);
        assert_eq!(summary.overall.unwrap().max, 12);
        assert_eq!(summary.role_experienced, 1);
    }
}
