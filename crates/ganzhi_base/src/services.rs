//! Descriptive lookup collaborators.
//!
//! Markers, pattern classifications and trend narratives are produced
//! outside the engine. The engine only builds the request keys and passes
//! the payloads through untouched.

use serde::Serialize;

use crate::element::Element;
use crate::fortune::{FortunePeriod, FortuneTimeline};
use crate::markers::MarkerSet;
use crate::pillar::Chart;

/// Description of a special marker (shensha).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MarkerDescription {
    pub name: String,
    pub category: String,
    pub description: String,
    pub affected_domains: Vec<String>,
    pub calculation_notes: String,
}

/// Classification of a named chart configuration (geju).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PatternClassification {
    pub category: String,
    pub explanation: String,
    pub career: String,
    pub health: String,
    pub relationships: String,
    pub wealth: String,
}

/// Tag for a year called out by a trend narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum YearPolarity {
    Favorable,
    Unfavorable,
    Mixed,
}

/// Narrative output of a trend generator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TrendNarrative {
    pub text: String,
    pub notable_years: Vec<(i32, YearPolarity)>,
}

/// Looks up a marker by its label.
pub trait MarkerCatalog {
    fn describe(&self, marker: &str) -> Option<MarkerDescription>;
}

/// Catalog descriptions of every marker in `markers`, skipping labels the
/// catalog does not know.
pub fn describe_markers<C>(catalog: &C, markers: MarkerSet) -> Vec<MarkerDescription>
where
    C: MarkerCatalog + ?Sized,
{
    markers
        .iter()
        .filter_map(|m| catalog.describe(m.symbol()))
        .collect()
}

/// Looks up a configuration by its label.
pub trait PatternCatalog {
    fn classify(&self, label: &str) -> Option<PatternClassification>;
}

/// Minimal keys handed to a [`TrendNarrator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendRequest<'a> {
    pub label: &'a str,
    pub day_element: Element,
    pub birth_year: i32,
    pub decades: &'a [FortunePeriod],
}

/// Produces a narrative for a configuration over the decade periods.
pub trait TrendNarrator {
    fn narrate(&self, request: &TrendRequest<'_>) -> TrendNarrative;
}

/// Request keys for a chart and its timeline.
///
/// `None` when the chart has no day pillar or no birth year.
pub fn trend_request<'a>(
    label: &'a str,
    chart: &Chart,
    timeline: &'a FortuneTimeline,
) -> Option<TrendRequest<'a>> {
    Some(TrendRequest {
        label,
        day_element: chart.day_element()?,
        birth_year: chart.birth_year()?,
        decades: timeline.decades(),
    })
}
