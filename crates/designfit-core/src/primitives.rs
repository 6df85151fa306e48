//! # Innate Primitives
//!
//! Hardcoded constants of the scoring engine.
//!
//! These are compiled into the binary and are immutable at runtime.
//! All weights and thresholds are whole percentages so every computation
//! stays in integer arithmetic.

/// Highest point value an option may carry (Psychometric, WISCAR).
pub const MAX_OPTION_POINTS: u8 = 5;

/// Lowest point value an option may carry.
pub const MIN_OPTION_POINTS: u8 = 1;

// =============================================================================
// AGGREGATE WEIGHTS (percent, must sum to 100)
// =============================================================================

/// Weight of the psychometric percentage in the aggregate.
pub const PSYCHOMETRIC_WEIGHT: u32 = 30;

/// Weight of the technical percentage in the aggregate.
pub const TECHNICAL_WEIGHT: u32 = 30;

/// Weight of the WISCAR mean in the aggregate.
pub const WISCAR_WEIGHT: u32 = 40;

// =============================================================================
// TIER LOWER BOUNDS (inclusive)
// =============================================================================

/// Lowest aggregate score classified as `Tier::Excellent`.
pub const EXCELLENT_THRESHOLD: u8 = 85;

/// Lowest aggregate score classified as `Tier::Good`.
pub const GOOD_THRESHOLD: u8 = 70;

/// Lowest aggregate score classified as `Tier::Moderate`.
pub const MODERATE_THRESHOLD: u8 = 55;

// =============================================================================
// ROUNDING
// =============================================================================

/// Round `numerator / denominator` to the nearest integer, ties away from zero.
///
/// Both operands are non-negative, so "away from zero" is "up".
/// A zero denominator yields 0.
#[must_use]
pub const fn round_div(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    numerator
        .saturating_mul(2)
        .saturating_add(denominator)
        / denominator.saturating_mul(2)
}

/// Percentage of `earned` over `max`, rounded once, clamped to 100.
#[must_use]
pub const fn percent(earned: u32, max: u32) -> u8 {
    let p = round_div((earned as u64).saturating_mul(100), max as u64);
    if p > 100 { 100 } else { p as u8 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one_hundred() {
        assert_eq!(PSYCHOMETRIC_WEIGHT + TECHNICAL_WEIGHT + WISCAR_WEIGHT, 100);
    }

    #[test]
    fn tier_thresholds_descend() {
        assert!(EXCELLENT_THRESHOLD > GOOD_THRESHOLD);
        assert!(GOOD_THRESHOLD > MODERATE_THRESHOLD);
    }

    #[test]
    fn round_div_ties_round_up() {
        assert_eq!(round_div(975, 10), 98);
        assert_eq!(round_div(5, 2), 3);
        assert_eq!(round_div(7, 3), 2);
        assert_eq!(round_div(8, 3), 3);
    }

    #[test]
    fn percent_of_empty_denominator_is_zero() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(5, 0), 0);
    }

    #[test]
    fn percent_examples() {
        assert_eq!(percent(39, 40), 98);
        assert_eq!(percent(5, 8), 63);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(10, 10), 100);
        assert_eq!(percent(12, 10), 100);
    }
}
