//! One-call analysis of a chart.

use serde::Serialize;
use tracing::debug;

use crate::combination::{
    BranchRelation, CombinationPattern, chart_combinations, detect_branch_relations,
};
use crate::config::ScoringWeights;
use crate::emptiness::{ChartVoids, chart_voids};
use crate::life_stage::{ChartStages, ground_stages, month_command_stages, seat_stages};
use crate::markers::{PositionMarkers, chart_markers};
use crate::pillar::{Chart, Pillar, Position};
use crate::relation::{RelationReading, TenRelation, TenRelationResolver};
use crate::scoring::{ElementStrengthVector, score_elements};
use crate::sound::sound_label;
use crate::strength::{StrengthAssessment, assess_strength};

/// Per-position readings against the day stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarReading {
    pub position: Position,
    pub pillar: Pillar,
    /// Relation of this stem to the day stem; `None` for the day pillar.
    pub stem_relation: Option<TenRelation>,
    pub branch_relation: Option<RelationReading>,
    pub sound_label: Option<&'static str>,
}

/// Everything derived from a chart that does not depend on a selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAnalysis {
    pub pillars: Vec<PillarReading>,
    pub combinations: Vec<CombinationPattern>,
    pub branch_relations: Vec<BranchRelation>,
    pub strength: ElementStrengthVector,
    pub assessment: Option<StrengthAssessment>,
    pub voids: ChartVoids,
    pub ground_stages: ChartStages,
    pub seat_stages: ChartStages,
    pub month_command_stages: ChartStages,
    /// Special markers on each present pillar.
    pub markers: Vec<PositionMarkers>,
    pub conception_pillar: Option<Pillar>,
    pub life_palace_pillar: Option<Pillar>,
}

/// Run every chart-level computation.
pub fn analyze_chart<R>(chart: &Chart, weights: &ScoringWeights, resolver: &R) -> ChartAnalysis
where
    R: TenRelationResolver + ?Sized,
{
    let day = chart.day_stem();
    let pillars = chart
        .present()
        .map(|(position, pillar)| PillarReading {
            position,
            pillar,
            stem_relation: day
                .filter(|_| position != Position::Day)
                .map(|d| resolver.stem_relation(d, pillar.stem)),
            branch_relation: day.map(|d| resolver.branch_relation(d, pillar.branch)),
            sound_label: sound_label(pillar),
        })
        .collect();

    let combinations = chart_combinations(chart);
    let strength = score_elements(chart, &combinations, weights);
    let assessment = assess_strength(chart, &strength);
    if assessment.is_none() {
        debug!("no day pillar; strength assessment skipped");
    }

    ChartAnalysis {
        pillars,
        branch_relations: detect_branch_relations(&chart.branches()),
        combinations,
        strength,
        assessment,
        voids: chart_voids(chart),
        ground_stages: ground_stages(chart),
        seat_stages: seat_stages(chart),
        month_command_stages: month_command_stages(chart),
        markers: chart_markers(chart),
        conception_pillar: chart.conception_pillar(),
        life_palace_pillar: chart.life_palace_pillar(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::ClassicalTenRelations;

    fn p(s: &str) -> Pillar {
        s.parse().unwrap()
    }

    #[test]
    fn full_chart() {
        let chart = Chart::new(p("庚午"), p("戊寅"), p("甲子"), p("丙寅"));
        let a = analyze_chart(&chart, &ScoringWeights::default(), &ClassicalTenRelations);
        assert_eq!(a.pillars.len(), 4);
        assert_eq!(a.pillars[0].stem_relation, Some(TenRelation::SevenKillings));
        assert_eq!(a.pillars[2].stem_relation, None);
        assert!(a.assessment.is_some());
        assert_eq!(a.conception_pillar, Some(p("己巳")));
        assert_eq!(a.markers.len(), 4);
        assert_eq!(a.markers[2].position, Position::Day);
    }

    #[test]
    fn partial_chart_degrades() {
        let chart = Chart::from_slots([Some(p("庚午")), None, None, None]);
        let a = analyze_chart(&chart, &ScoringWeights::default(), &ClassicalTenRelations);
        assert_eq!(a.pillars.len(), 1);
        assert_eq!(a.pillars[0].stem_relation, None);
        assert_eq!(a.pillars[0].branch_relation, None);
        assert!(a.assessment.is_none());
        assert!(a.strength.grand_total() > 0.0);
        // Year-keyed markers still apply; 午 is its own general star.
        assert!(a.markers[0].markers.contains(crate::markers::Marker::GeneralStar));
        assert!(!a.markers[0].markers.contains(crate::markers::Marker::NobleMan));
    }
}
