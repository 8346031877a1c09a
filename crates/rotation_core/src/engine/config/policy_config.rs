//! Substitution Count Policy

use serde::{Deserialize, Serialize};

/// How many swaps a checkpoint may perform.
///
/// The gaps compare the average current-match minutes of the neediest bench
/// candidates against those of the least needy on-field candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubstitutionPolicy {
    /// Candidates averaged on each side (default: 5)
    pub sample_size: usize,
    /// Bench lead (minutes) that triggers `strong_cap` (default: 10.0)
    pub strong_gap: f64,
    /// Bench lead (minutes) that triggers `moderate_cap` (default: 5.0)
    pub moderate_gap: f64,

    // === Caps ===
    /// Cap when a former keeper waits on the bench (default: 4)
    pub history_on_bench_cap: usize,
    /// Cap for a large bench lead (default: 4)
    pub strong_cap: usize,
    /// Cap for a moderate bench lead (default: 3)
    pub moderate_cap: usize,
    /// Cap that shields a former keeper already on the pitch (default: 2)
    pub protect_cap: usize,
    /// Cap when no other rule applies (default: 3)
    pub default_cap: usize,
    /// Cap when either side has nothing to average (default: 2)
    pub fallback_cap: usize,
}

impl Default for SubstitutionPolicy {
    fn default() -> Self {
        Self {
            sample_size: 5,
            strong_gap: 10.0,
            moderate_gap: 5.0,

            history_on_bench_cap: 4,
            strong_cap: 4,
            moderate_cap: 3,
            protect_cap: 2,
            default_cap: 3,
            fallback_cap: 2,
        }
    }
}

/// Which rule chose the cap at a checkpoint. Carried into logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapReason {
    HistoryOnBench,
    StrongGap,
    ModerateGap,
    ProtectOnField,
    Default,
    Fallback,
}

impl SubstitutionPolicy {
    /// Select the cap for one checkpoint.
    ///
    /// `bench_minutes` / `field_minutes` are the current-match minutes of the
    /// ranked bench (neediest first) and ranked eligible players (least needy
    /// first); only the first `sample_size` of each are averaged.
    pub fn cap(
        &self,
        history_on_bench: bool,
        history_on_field: bool,
        bench_minutes: &[u32],
        field_minutes: &[u32],
    ) -> (usize, CapReason) {
        if history_on_bench {
            return (self.history_on_bench_cap, CapReason::HistoryOnBench);
        }

        let (Some(avg_bench), Some(avg_field)) = (
            self.sampled_average(bench_minutes),
            self.sampled_average(field_minutes),
        ) else {
            return (self.fallback_cap, CapReason::Fallback);
        };

        if avg_bench < avg_field - self.strong_gap {
            (self.strong_cap, CapReason::StrongGap)
        } else if avg_bench < avg_field - self.moderate_gap {
            (self.moderate_cap, CapReason::ModerateGap)
        } else if history_on_field {
            (self.protect_cap, CapReason::ProtectOnField)
        } else {
            (self.default_cap, CapReason::Default)
        }
    }

    fn sampled_average(&self, minutes: &[u32]) -> Option<f64> {
        let sample = &minutes[..minutes.len().min(self.sample_size)];
        if sample.is_empty() {
            return None;
        }
        let sum: u64 = sample.iter().map(|&m| u64::from(m)).sum();
        Some(sum as f64 / sample.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_on_bench_wins() {
        let policy = SubstitutionPolicy::default();
        let (cap, reason) = policy.cap(true, true, &[0, 0], &[0, 0]);
        assert_eq!(cap, 4);
        assert_eq!(reason, CapReason::HistoryOnBench);
    }

    #[test]
    fn test_gap_thresholds() {
        let policy = SubstitutionPolicy::default();
        // bench 0 vs field 12 -> lead of 12 minutes
        assert_eq!(policy.cap(false, false, &[0], &[12]), (4, CapReason::StrongGap));
        // lead of exactly 10 is not strictly greater -> moderate
        assert_eq!(policy.cap(false, false, &[0], &[10]), (3, CapReason::ModerateGap));
        // lead of 5 falls through
        assert_eq!(policy.cap(false, false, &[0], &[5]), (3, CapReason::Default));
        assert_eq!(policy.cap(false, true, &[0], &[5]), (2, CapReason::ProtectOnField));
    }

    #[test]
    fn test_only_first_sample_is_averaged() {
        let policy = SubstitutionPolicy::default();
        // The sixth field entry would drag the average below the gap.
        let field = [12, 12, 12, 12, 12, 0];
        assert_eq!(policy.cap(false, false, &[0; 6], &field), (4, CapReason::StrongGap));
    }

    #[test]
    fn test_empty_side_falls_back() {
        let policy = SubstitutionPolicy::default();
        assert_eq!(policy.cap(false, false, &[], &[3]), (2, CapReason::Fallback));
        assert_eq!(policy.cap(false, true, &[3], &[]), (2, CapReason::Fallback));
    }
}
