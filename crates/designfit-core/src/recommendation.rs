//! # Recommendation Classifier
//!
//! Maps the aggregate score to a [`Tier`], derives career-path fit flags and
//! looks up the static next steps for the tier.
//!
//! Tier bounds are closed below and open above, so `classify` is a total,
//! non-overlapping partition of `0..=100`.

use crate::primitives::{EXCELLENT_THRESHOLD, GOOD_THRESHOLD, MODERATE_THRESHOLD};
use crate::{AggregateResult, Dimension, WiscarResult};
use serde::{Deserialize, Serialize};

// =============================================================================
// TIER
// =============================================================================

/// Discrete outcome bucket for the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    NeedsDevelopment,
    Moderate,
    Good,
    Excellent,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::Excellent,
        Tier::Good,
        Tier::Moderate,
        Tier::NeedsDevelopment,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Moderate => "moderate",
            Tier::NeedsDevelopment => "needs-development",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent Fit",
            Tier::Good => "Good Fit",
            Tier::Moderate => "Moderate Fit",
            Tier::NeedsDevelopment => "Needs Development",
        }
    }

    /// Inclusive lower bound of the tier.
    #[must_use]
    pub fn lower_bound(&self) -> u8 {
        match self {
            Tier::Excellent => EXCELLENT_THRESHOLD,
            Tier::Good => GOOD_THRESHOLD,
            Tier::Moderate => MODERATE_THRESHOLD,
            Tier::NeedsDevelopment => 0,
        }
    }

    /// Fixed next steps for the tier.
    #[must_use]
    pub fn next_steps(&self) -> &'static [&'static str] {
        match self {
            Tier::Excellent => &[
                "Apply to accredited interior design programs",
                "Start building a portfolio of design projects",
                "Seek internships with design firms",
                "Consider specialization areas (residential, commercial, sustainable design)",
            ],
            Tier::Good => &[
                "Take foundational design courses",
                "Practice with design software (SketchUp, AutoCAD)",
                "Start a design blog or social media presence",
                "Volunteer for design projects to build experience",
            ],
            Tier::Moderate => &[
                "Strengthen weak areas identified in assessment",
                "Take introductory art and design classes",
                "Explore design through online courses and tutorials",
                "Consider design-adjacent fields that interest you",
            ],
            Tier::NeedsDevelopment => &[
                "Explore foundational creative courses",
                "Consider alternative creative careers",
                "Develop technical and spatial skills",
                "Reassess interests and career goals",
            ],
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an aggregate score.
#[must_use]
pub fn classify(score: u8) -> Tier {
    if score >= EXCELLENT_THRESHOLD {
        Tier::Excellent
    } else if score >= GOOD_THRESHOLD {
        Tier::Good
    } else if score >= MODERATE_THRESHOLD {
        Tier::Moderate
    } else {
        Tier::NeedsDevelopment
    }
}

// =============================================================================
// CAREER PATHS
// =============================================================================

/// Career paths the assessment reports fit for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareerPath {
    ResidentialDesigner,
    CommercialDesigner,
    SpacePlanner,
    VisualMerchandiser,
    DesignConsultant,
}

impl CareerPath {
    pub const ALL: [CareerPath; 5] = [
        CareerPath::ResidentialDesigner,
        CareerPath::CommercialDesigner,
        CareerPath::SpacePlanner,
        CareerPath::VisualMerchandiser,
        CareerPath::DesignConsultant,
    ];

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            CareerPath::ResidentialDesigner => "Residential Interior Designer",
            CareerPath::CommercialDesigner => "Commercial Interior Designer",
            CareerPath::SpacePlanner => "Space Planner",
            CareerPath::VisualMerchandiser => "Visual Merchandiser",
            CareerPath::DesignConsultant => "Design Consultant",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            CareerPath::ResidentialDesigner => {
                "Design homes, apartments, and living spaces for private clients"
            }
            CareerPath::CommercialDesigner => {
                "Design offices, retail spaces, restaurants, and other commercial environments"
            }
            CareerPath::SpacePlanner => {
                "Optimize layouts and workflows for efficiency and functionality"
            }
            CareerPath::VisualMerchandiser => "Create appealing displays for retail environments",
            CareerPath::DesignConsultant => "Provide expert advice on design solutions and trends",
        }
    }

    #[must_use]
    pub fn requirements(&self) -> &'static [&'static str] {
        match self {
            CareerPath::ResidentialDesigner => &[
                "Strong aesthetic sense",
                "Client communication",
                "Space planning",
            ],
            CareerPath::CommercialDesigner => &[
                "Technical skills",
                "Building codes",
                "Project management",
            ],
            CareerPath::SpacePlanner => &[
                "Spatial reasoning",
                "Analytical thinking",
                "CAD proficiency",
            ],
            CareerPath::VisualMerchandiser => &[
                "Creative vision",
                "Trend awareness",
                "Quick turnaround",
            ],
            CareerPath::DesignConsultant => &[
                "Extensive experience",
                "Communication skills",
                "Business acumen",
            ],
        }
    }

    /// Threshold predicate for this path.
    #[must_use]
    pub fn fits(&self, aggregate: &AggregateResult, wiscar: &WiscarResult) -> bool {
        match self {
            CareerPath::ResidentialDesigner => aggregate.overall >= 75,
            CareerPath::CommercialDesigner => aggregate.overall >= 70 && aggregate.technical >= 65,
            CareerPath::SpacePlanner => wiscar.dimension_percent(Dimension::Cognitive) >= 75,
            CareerPath::VisualMerchandiser => aggregate.psychometric >= 70,
            CareerPath::DesignConsultant => aggregate.overall >= 80,
        }
    }
}

/// Fit flag for one career path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerFit {
    pub path: CareerPath,
    pub fit: bool,
}

/// Evaluate every career path, in display order.
#[must_use]
pub fn career_fits(aggregate: &AggregateResult, wiscar: &WiscarResult) -> Vec<CareerFit> {
    CareerPath::ALL
        .iter()
        .map(|path| CareerFit {
            path: *path,
            fit: path.fits(aggregate, wiscar),
        })
        .collect()
}

// =============================================================================
// RECOMMENDATION
// =============================================================================

/// Tier, career fits and next steps for a finished assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub tier: Tier,
    pub career_fits: Vec<CareerFit>,
    pub next_steps: &'static [&'static str],
}

impl Recommendation {
    #[must_use]
    pub fn new(aggregate: &AggregateResult, wiscar: &WiscarResult) -> Self {
        let tier = classify(aggregate.overall);
        Self {
            tier,
            career_fits: career_fits(aggregate, wiscar),
            next_steps: tier.next_steps(),
        }
    }

    /// Paths flagged as a fit.
    pub fn fitting_paths(&self) -> impl Iterator<Item = CareerPath> + '_ {
        self.career_fits.iter().filter(|f| f.fit).map(|f| f.path)
    }
}

// =============================================================================
// TESTS
// =============================================================================
