//! Day-master strength classification.
//!
//! The day stem's element is placed into one of seven bands by its relative
//! strength, and a counter-balancing element group is recommended.

use serde::Serialize;

use crate::element::Element;
use crate::pillar::Chart;
use crate::scoring::ElementStrengthVector;

/// Seven strength bands, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StrengthCategory {
    ExtremeDominant,
    Dominant,
    MildlyDominant,
    Balanced,
    MildlyDeficient,
    Deficient,
    ExtremeDeficient,
}

/// Lower bound of each band above the last, strongest first.
const THRESHOLDS: [(f64, StrengthCategory); 6] = [
    (1.5, StrengthCategory::ExtremeDominant),
    (1.2, StrengthCategory::Dominant),
    (1.0, StrengthCategory::MildlyDominant),
    (0.8, StrengthCategory::Balanced),
    (0.6, StrengthCategory::MildlyDeficient),
    (0.4, StrengthCategory::Deficient),
];

impl StrengthCategory {
    /// Band for a relative strength; every lower bound is inclusive.
    pub fn from_relative(relative: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(bound, _)| relative >= *bound)
            .map_or(Self::ExtremeDeficient, |&(_, c)| c)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ExtremeDominant => "Extreme Dominant",
            Self::Dominant => "Dominant",
            Self::MildlyDominant => "Mildly Dominant",
            Self::Balanced => "Balanced",
            Self::MildlyDeficient => "Mildly Deficient",
            Self::Deficient => "Deficient",
            Self::ExtremeDeficient => "Extreme Deficient",
        }
    }

    pub const fn is_dominant(self) -> bool {
        matches!(
            self,
            Self::ExtremeDominant | Self::Dominant | Self::MildlyDominant
        )
    }

    pub const fn is_deficient(self) -> bool {
        matches!(
            self,
            Self::MildlyDeficient | Self::Deficient | Self::ExtremeDeficient
        )
    }
}

/// Classification of the day stem with its recommended elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthAssessment {
    pub day_element: Element,
    pub relative_strength: f64,
    pub category: StrengthCategory,
    /// Elements that counter-balance the day element, most direct first.
    pub favorable: Vec<Element>,
}

/// Counter-balancing elements for a category.
///
/// Dominant bands take the output, wealth and officer elements; deficient
/// bands take the resource and peer elements; a balanced chart follows the
/// month branch, or the strongest element when the month is missing.
pub fn favorable_elements(
    category: StrengthCategory,
    day: Element,
    month_element: Option<Element>,
    strongest: Element,
) -> Vec<Element> {
    if category.is_dominant() {
        vec![day.generates(), day.overcomes(), day.overcome_by()]
    } else if category.is_deficient() {
        vec![day.generated_by(), day]
    } else {
        vec![month_element.unwrap_or(strongest)]
    }
}

/// Classify the chart's day stem. `None` when the day pillar is missing.
pub fn assess_strength(chart: &Chart, vector: &ElementStrengthVector) -> Option<StrengthAssessment> {
    let day_element = chart.day_element()?;
    let relative_strength = vector.relative_strength(day_element);
    let category = StrengthCategory::from_relative(relative_strength);
    let month_element = chart.month_branch().map(|b| b.element());
    Some(StrengthAssessment {
        day_element,
        relative_strength,
        category,
        favorable: favorable_elements(category, day_element, month_element, vector.strongest()),
    })
}
