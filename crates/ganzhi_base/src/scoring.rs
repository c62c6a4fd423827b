//! Weighted five-element strength score.
//!
//! Each element's total is the sum of six sub-scores: primary stems, hidden
//! stems, sound labels, the seasonal delta, the dominant-month bonus and
//! detected combinations. The vector is always computed whole from the
//! chart and its combination set; there is no incremental update.

use serde::Serialize;
use tracing::debug;

use crate::combination::{CombinationPattern, chart_combinations};
use crate::config::ScoringWeights;
use crate::element::{ALL_ELEMENTS, Element, vitality};
use crate::hidden::hidden_stems;
use crate::pillar::Chart;
use crate::sound::sound_element;

/// Grand totals with magnitude below this are treated as zero.
const DEGENERATE_TOTAL: f64 = 1e-12;

/// Relative strengths are scaled so the five sum to this.
pub const RELATIVE_SCALE: f64 = 10.0;

/// Sub-scores and total for one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementScore {
    pub element: Element,
    pub primary_stem: f64,
    pub hidden_stem: f64,
    pub sound: f64,
    pub seasonal: f64,
    pub dominant_month: f64,
    pub combination: f64,
}

impl ElementScore {
    const fn zero(element: Element) -> Self {
        Self {
            element,
            primary_stem: 0.0,
            hidden_stem: 0.0,
            sound: 0.0,
            seasonal: 0.0,
            dominant_month: 0.0,
            combination: 0.0,
        }
    }

    /// The six sub-scores in fixed order.
    pub const fn components(&self) -> [f64; 6] {
        [
            self.primary_stem,
            self.hidden_stem,
            self.sound,
            self.seasonal,
            self.dominant_month,
            self.combination,
        ]
    }

    pub fn total(&self) -> f64 {
        self.components().iter().sum()
    }
}

/// Scores for all five elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementStrengthVector {
    scores: [ElementScore; 5],
}

impl ElementStrengthVector {
    pub fn score(&self, element: Element) -> &ElementScore {
        &self.scores[element.index() as usize]
    }

    pub fn scores(&self) -> &[ElementScore; 5] {
        &self.scores
    }

    pub fn total(&self, element: Element) -> f64 {
        self.score(element).total()
    }

    /// Sum of the five totals.
    pub fn grand_total(&self) -> f64 {
        self.scores.iter().map(ElementScore::total).sum()
    }

    /// `total(e) / Σ total × 10`, or 0 for every element when the sum is zero.
    pub fn relative_strength(&self, element: Element) -> f64 {
        let sum = self.grand_total();
        if sum.abs() < DEGENERATE_TOTAL {
            return 0.0;
        }
        self.total(element) / sum * RELATIVE_SCALE
    }

    /// Element with the highest total; ties go to the earlier element.
    pub fn strongest(&self) -> Element {
        let mut best = self.scores[0];
        for s in &self.scores[1..] {
            if s.total() > best.total() {
                best = *s;
            }
        }
        best.element
    }
}

/// Score a chart against an explicit combination set.
pub fn score_elements(
    chart: &Chart,
    patterns: &[CombinationPattern],
    weights: &ScoringWeights,
) -> ElementStrengthVector {
    let mut scores = ALL_ELEMENTS.map(ElementScore::zero);
    let slot = |e: Element| e.index() as usize;

    for (pos, pillar) in chart.present() {
        scores[slot(pillar.stem.element())].primary_stem += weights.stem_weight(pos);

        let hidden_w = weights.hidden_weight(pos);
        for (tier, stem) in hidden_stems(pillar.branch).iter().enumerate() {
            scores[slot(stem.element())].hidden_stem += hidden_w * weights.hidden_tiers[tier];
        }

        if let Some(e) = sound_element(pillar) {
            scores[slot(e)].sound += weights.sound_weight(pos);
        }
    }

    if let Some(month) = chart.month_branch() {
        let season = month.season();
        for score in &mut scores {
            let level = vitality(season, score.element);
            score.seasonal = weights.seasonal_delta(level);
            score.dominant_month = weights.dominant_month_bonus(level);
        }
    }

    for pattern in patterns {
        scores[slot(pattern.element)].combination +=
            weights.combination_weight(pattern.kind, pattern.completion);
    }

    let vector = ElementStrengthVector { scores };
    debug!(
        wood = vector.total(Element::Wood),
        fire = vector.total(Element::Fire),
        earth = vector.total(Element::Earth),
        metal = vector.total(Element::Metal),
        water = vector.total(Element::Water),
        patterns = patterns.len(),
        "element scores"
    );
    vector
}

/// Score a chart using the combinations detected in it.
pub fn score_chart(chart: &Chart, weights: &ScoringWeights) -> ElementStrengthVector {
    score_elements(chart, &chart_combinations(chart), weights)
}
