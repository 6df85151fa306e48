//! # Aggregate Result
//!
//! Combines the three instrument results under fixed weights:
//! Psychometric 30%, Technical 30%, WISCAR 40%.
//!
//! The psychometric and technical contributions are the instrument
//! percentages carried by the sequencer. The WISCAR contribution is the exact
//! mean of its dimension percentages. Rounding happens once, on the weighted
//! sum.

use crate::primitives::{PSYCHOMETRIC_WEIGHT, TECHNICAL_WEIGHT, WISCAR_WEIGHT, round_div};
use crate::{PsychometricResult, TechnicalResult, WiscarResult};
use serde::{Deserialize, Serialize};

/// Overall readiness score plus the per-instrument figures it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Psychometric percentage.
    pub psychometric: u8,
    /// Technical percentage.
    pub technical: u8,
    /// Mean of the WISCAR dimension percentages (rounded for display).
    pub wiscar: u8,
    /// Weighted overall score in [0, 100].
    pub overall: u8,
}

impl AggregateResult {
    /// Combine three completed instrument results.
    #[must_use]
    pub fn compute(
        psychometric: &PsychometricResult,
        technical: &TechnicalResult,
        wiscar: &WiscarResult,
    ) -> Self {
        let (wiscar_num, wiscar_den) = wiscar.mean_fraction();
        let p = u64::from(psychometric.percentage());
        let t = u64::from(technical.percentage());

        // overall = (30p + 30t + 40 * num/den) / 100, over a common denominator
        let weighted = p
            .saturating_mul(u64::from(PSYCHOMETRIC_WEIGHT))
            .saturating_add(t.saturating_mul(u64::from(TECHNICAL_WEIGHT)))
            .saturating_mul(wiscar_den)
            .saturating_add(wiscar_num.saturating_mul(u64::from(WISCAR_WEIGHT)));
        let overall = round_div(weighted, wiscar_den.saturating_mul(100)).min(100) as u8;

        Self {
            psychometric: psychometric.percentage(),
            technical: technical.percentage(),
            wiscar: wiscar.mean_percent(),
            overall,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bucket, Category, Dimension, SkillType, Tag};
    use std::collections::BTreeMap;

    fn psychometric(earned: u32) -> PsychometricResult {
        let mut buckets = BTreeMap::new();
        buckets.insert(Category::Interest, Bucket { earned, max: 40 });
        PsychometricResult::from_buckets(buckets)
    }

    fn technical(correct: u32) -> TechnicalResult {
        let mut buckets = BTreeMap::new();
        buckets.insert(SkillType::Spatial, Bucket { earned: correct, max: 8 });
        TechnicalResult::from_buckets(buckets)
    }

    fn wiscar(points: &[u32; 6]) -> WiscarResult {
        let buckets = Dimension::ALL
            .iter()
            .zip(points)
            .map(|(d, earned)| (*d, Bucket { earned: *earned, max: 10 }))
            .collect();
        WiscarResult::from_buckets(buckets)
    }

    #[test]
    fn perfect_scores_aggregate_to_one_hundred() {
        let agg = AggregateResult::compute(&psychometric(40), &technical(8), &wiscar(&[10; 6]));
        assert_eq!(agg.overall, 100);
        assert_eq!(agg.wiscar, 100);
    }

    #[test]
    fn zero_scores_aggregate_to_zero() {
        let agg = AggregateResult::compute(&psychometric(0), &technical(0), &wiscar(&[0; 6]));
        assert_eq!(agg.overall, 0);
    }

    #[test]
    fn weights_are_applied() {
        // 0.3 * 100 + 0.3 * 0 + 0.4 * 50 = 50
        let agg = AggregateResult::compute(&psychometric(40), &technical(0), &wiscar(&[5; 6]));
        assert_eq!(agg.overall, 50);
    }

    #[test]
    fn wiscar_uses_exact_mean_not_rounded_dimensions() {
        // psychometric 98, technical 63, wiscar 22/60 = 36.67%
        // 29.4 + 18.9 + 14.667 = 62.97 -> 63
        let agg = AggregateResult::compute(
            &psychometric(39),
            &technical(5),
            &wiscar(&[3, 4, 3, 4, 4, 4]),
        );
        assert_eq!(agg.psychometric, 98);
        assert_eq!(agg.technical, 63);
        assert_eq!(agg.wiscar, 37);
        assert_eq!(agg.overall, 63);
    }

    #[test]
    fn tie_rounds_up() {
        // 0.3 * 25 + 0.3 * 0 + 0.4 * 0 = 7.5 -> 8
        let agg = AggregateResult::compute(&psychometric(10), &technical(0), &wiscar(&[0; 6]));
        assert_eq!(agg.psychometric, 25);
        assert_eq!(agg.overall, 8);
    }
}
