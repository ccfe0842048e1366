//! Pluggable scoring policies
//!
//! The exact formula combining a record's p-value with the significance
//! parameter k is a policy choice, not part of the scoring contract. Any
//! policy must be monotone: non-decreasing in k and non-increasing in the
//! p-value, so that a larger k always yields a more permissive score and
//! therefore larger eventual modules.

use crate::configuration::CONFIGURATION;
use crate::data::DifferentialRecord;

/// Strategy for turning a differential record into an element score
pub trait ScoringPolicy {
    /// Score for an element carrying `record`, scaled by the significance
    /// parameter `k` (guaranteed positive and finite by the scorer)
    fn score_record(&self, record: &DifferentialRecord, k: f64) -> f64;

    /// Fixed score for elements carrying no record
    ///
    /// Must be constant for the lifetime of the policy so the optimizer
    /// treats "no data" uniformly across the graph.
    fn baseline(&self) -> f64;
}

/// Default policy: `-ln(p + 1/k)`
///
/// Approaches `ln(k)` for highly significant records, `-ln(p)` for large k,
/// and goes negative once `p > 1 - 1/k`. Strictly increasing in k and
/// strictly decreasing in p.
#[derive(Debug, Clone)]
pub struct LogPValueScore {
    baseline: f64,
    p_floor: f64,
}

impl LogPValueScore {
    pub fn new(baseline: f64, p_floor: f64) -> LogPValueScore {
        LogPValueScore { baseline, p_floor }
    }
}

impl Default for LogPValueScore {
    fn default() -> Self {
        let configuration = CONFIGURATION.read().unwrap();
        LogPValueScore {
            baseline: configuration.baseline_score,
            p_floor: configuration.p_value_floor,
        }
    }
}

impl ScoringPolicy for LogPValueScore {
    fn score_record(&self, record: &DifferentialRecord, k: f64) -> f64 {
        let p = record.p_value.max(self.p_floor);
        -(p + 1.0 / k).ln()
    }

    fn baseline(&self) -> f64 {
        self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotone_in_k() {
        let policy = LogPValueScore::default();
        let record = DifferentialRecord::new(1.0, 0.01);
        let mut previous = f64::NEG_INFINITY;
        for k in [1.0, 5.0, 25.0, 100.0, 1e6] {
            let score = policy.score_record(&record, k);
            assert!(score >= previous, "score must not decrease with k");
            previous = score;
        }
    }

    #[test]
    fn monotone_in_p() {
        let policy = LogPValueScore::default();
        let k = 5.0;
        let significant = policy.score_record(&DifferentialRecord::new(1.0, 0.001), k);
        let borderline = policy.score_record(&DifferentialRecord::new(1.0, 0.05), k);
        let insignificant = policy.score_record(&DifferentialRecord::new(1.0, 0.9), k);
        assert!(significant > borderline);
        assert!(borderline > insignificant);
        // p = 0.9 is past the 1 - 1/k sign boundary (0.8 at k = 5)
        assert!(insignificant < 0.0);
    }

    #[test]
    fn sign_boundary() {
        let policy = LogPValueScore::default();
        let k = 25.0;
        // Scores change sign at p = 1 - 1/k
        let boundary = 1.0 - 1.0 / k;
        let above = policy.score_record(&DifferentialRecord::new(1.0, boundary + 0.01), k);
        let below = policy.score_record(&DifferentialRecord::new(1.0, boundary - 0.01), k);
        assert!(above < 0.0);
        assert!(below > 0.0);
    }

    #[test]
    fn p_floor_keeps_scores_finite() {
        let policy = LogPValueScore::default();
        let score = policy.score_record(&DifferentialRecord::new(1.0, 0.0), 25.0);
        assert!(score.is_finite());
    }
}
