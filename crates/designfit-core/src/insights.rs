//! # Insights
//!
//! Short textual observations derived from finished instrument results.
//! Every rule is a fixed threshold on a bucket or instrument percentage, so the
//! same result always yields the same lines in the same order.

use crate::{
    Category, Dimension, PsychometricResult, SkillType, Tag, TechnicalResult, WiscarResult,
};
use serde::{Deserialize, Serialize};

/// Category, dimension and instrument level at or above which a result counts
/// as strong.
pub const STRENGTH_PERCENT: u8 = 80;

/// Dimension level below which it is listed as a development area.
pub const DEVELOPMENT_PERCENT: u8 = 60;

/// Correct answers per skill type that count as a strong showing.
pub const SKILL_CORRECT_THRESHOLD: u32 = 2;

// =============================================================================
// PSYCHOMETRIC
// =============================================================================

#[must_use]
pub fn psychometric_insights(result: &PsychometricResult) -> Vec<String> {
    let mut lines = Vec::new();

    for category in Category::ALL {
        if result.category(*category).percent() < STRENGTH_PERCENT {
            continue;
        }
        let line = match category {
            Category::Interest => "Strong natural interest in design and aesthetics",
            Category::Personality => "Personality traits align well with client-focused work",
            Category::Motivation => "Intrinsic motivation for creative expression",
            Category::Cognitive => "Learning style suits design education",
        };
        lines.push(line.to_string());
    }

    if result.percentage() >= STRENGTH_PERCENT {
        lines.push("Excellent psychological fit for interior design career".to_string());
    }
    if result.percentage() < DEVELOPMENT_PERCENT {
        lines.push("Consider exploring related creative fields".to_string());
    }

    lines
}

// =============================================================================
// TECHNICAL
// =============================================================================

#[must_use]
pub fn technical_insights(result: &TechnicalResult) -> Vec<String> {
    let mut lines = Vec::new();

    let readiness = match result.percentage() {
        p if p >= STRENGTH_PERCENT => "Excellent foundation for interior design studies",
        p if p >= DEVELOPMENT_PERCENT => "Good basic understanding, some areas to strengthen",
        _ => "Would benefit from foundational design education",
    };
    lines.push(readiness.to_string());

    for (skill, line) in [
        (SkillType::Spatial, "Strong spatial reasoning abilities"),
        (SkillType::Technical, "Good grasp of design tools and materials"),
        (SkillType::Situational, "Excellent client management instincts"),
    ] {
        if result.skill(skill).earned >= SKILL_CORRECT_THRESHOLD {
            lines.push(line.to_string());
        }
    }

    lines
}

// =============================================================================
// WISCAR
// =============================================================================

/// WISCAR observations split into strengths and development areas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarInsights {
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
}

fn short_name(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Will => "Will",
        Dimension::Interest => "Interest",
        Dimension::Skill => "Skill",
        Dimension::Cognitive => "Cognitive",
        Dimension::Ability => "Ability",
        Dimension::RealWorld => "Real-world",
    }
}

#[must_use]
pub fn wiscar_insights(result: &WiscarResult) -> WiscarInsights {
    let mut insights = WiscarInsights::default();

    for (dimension, percent) in result.percentages() {
        if percent >= STRENGTH_PERCENT {
            insights
                .strengths
                .push(format!("Excellent {}", short_name(dimension)));
        } else if percent < DEVELOPMENT_PERCENT {
            insights
                .development_areas
                .push(format!("Focus on developing {}", short_name(dimension)));
        }
    }

    let overall = result.percentage();
    if overall >= 85 {
        insights
            .strengths
            .push("Outstanding overall readiness for interior design".to_string());
    } else if overall >= 70 {
        insights
            .strengths
            .push("Strong foundation with good potential".to_string());
    } else {
        insights
            .development_areas
            .push("Consider foundational design courses before specializing".to_string());
    }
    insights
        .development_areas
        .push("All areas can be improved with targeted practice".to_string());

    insights
}

// =============================================================================
// ALL INSTRUMENTS
// =============================================================================

/// Insights for all three instruments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub psychometric: Vec<String>,
    pub technical: Vec<String>,
    pub wiscar: WiscarInsights,
}

impl Insights {
    #[must_use]
    pub fn collect(
        psychometric: &PsychometricResult,
        technical: &TechnicalResult,
        wiscar: &WiscarResult,
    ) -> Self {
        Self {
            psychometric: psychometric_insights(psychometric),
            technical: technical_insights(technical),
            wiscar: wiscar_insights(wiscar),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bucket;
    use std::collections::BTreeMap;

    fn psychometric(points: [u32; 4]) -> PsychometricResult {
        let buckets: BTreeMap<_, _> = Category::ALL
            .iter()
            .zip(points)
            .map(|(c, earned)| (*c, Bucket { earned, max: 10 }))
            .collect();
        PsychometricResult::from_buckets(buckets)
    }

    fn technical(correct: [u32; 4], max: [u32; 4]) -> TechnicalResult {
        let buckets: BTreeMap<_, _> = SkillType::ALL
            .iter()
            .zip(correct.iter().zip(max))
            .map(|(s, (earned, max))| (*s, Bucket { earned: *earned, max }))
            .collect();
        TechnicalResult::from_buckets(buckets)
    }

    fn wiscar(points: [u32; 6]) -> WiscarResult {
        let buckets: BTreeMap<_, _> = Dimension::ALL
            .iter()
            .zip(points)
            .map(|(d, earned)| (*d, Bucket { earned, max: 10 }))
            .collect();
        WiscarResult::from_buckets(buckets)
    }

    #[test]
    fn psychometric_strong_profile() {
        let lines = psychometric_insights(&psychometric([10, 8, 9, 8]));
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Strong natural interest in design and aesthetics");
        assert_eq!(lines[4], "Excellent psychological fit for interior design career");
    }

    #[test]
    fn psychometric_weak_profile() {
        let lines = psychometric_insights(&psychometric([4, 5, 5, 6]));
        assert_eq!(lines, vec!["Consider exploring related creative fields".to_string()]);
    }

    #[test]
    fn technical_readiness_bands() {
        let max = [2, 3, 1, 2];
        let top = technical_insights(&technical([2, 3, 1, 2], max));
        assert_eq!(top[0], "Excellent foundation for interior design studies");
        assert_eq!(top.len(), 4);

        // 5/8 = 63%
        let mid = technical_insights(&technical([1, 2, 1, 1], max));
        assert_eq!(mid[0], "Good basic understanding, some areas to strengthen");
        assert_eq!(mid.len(), 2);

        let low = technical_insights(&technical([0, 1, 0, 0], max));
        assert_eq!(low, vec!["Would benefit from foundational design education".to_string()]);
    }

    #[test]
    fn wiscar_splits_strengths_and_development_areas() {
        // will 90, interest 80, skill 70, cognitive 50, ability 90, real-world 40
        let insights = wiscar_insights(&wiscar([9, 8, 7, 5, 9, 4]));
        assert_eq!(
            insights.strengths,
            vec![
                "Excellent Will".to_string(),
                "Excellent Interest".to_string(),
                "Excellent Ability".to_string(),
                "Strong foundation with good potential".to_string(),
            ]
        );
        assert_eq!(
            insights.development_areas,
            vec![
                "Focus on developing Cognitive".to_string(),
                "Focus on developing Real-world".to_string(),
                "All areas can be improved with targeted practice".to_string(),
            ]
        );
    }

    #[test]
    fn wiscar_low_overall_suggests_foundations() {
        let insights = wiscar_insights(&wiscar([3; 6]));
        assert!(insights.strengths.is_empty());
        assert!(
            insights
                .development_areas
                .contains(&"Consider foundational design courses before specializing".to_string())
        );
    }

    #[test]
    fn wiscar_outstanding_overall() {
        let insights = wiscar_insights(&wiscar([10; 6]));
        assert_eq!(insights.strengths.len(), 7);
        assert_eq!(insights.development_areas.len(), 1);
    }
}
