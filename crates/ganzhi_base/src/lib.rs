//! Sexagenary cycle arithmetic and five-element scoring for four-pillar charts.
//!
//! This crate provides:
//! - Stem/branch alphabets, year indexing and the 60-term pillar cycle
//! - Hidden stems, sound labels, void pairs and the twelve life stages
//! - Special markers (shensha) per pillar
//! - Stem-pair and branch-set combination detection
//! - Weighted element strength scoring and day-master classification
//! - Decade/annual/minor/monthly fortune periods under a selection cursor
//!
//! All computations are pure over an immutable [`Chart`]. Missing pillars
//! and unknown symbols degrade to empty or zero results rather than errors.

pub mod analysis;
pub mod combination;
pub mod config;
pub mod cycle;
pub mod element;
pub mod emptiness;
pub mod error;
pub mod fortune;
pub mod hidden;
pub mod life_stage;
pub mod markers;
pub mod pillar;
pub mod relation;
pub mod scoring;
pub mod services;
pub mod sound;
pub mod strength;

pub use analysis::{ChartAnalysis, PillarReading, analyze_chart};
pub use combination::{
    BRANCH_TRIADS, BRANCH_TRIOS, BranchRelation, BranchRelationKind, CombinationKind,
    CombinationPattern, Completion, STEM_PAIRS, chart_combinations, detect_branch_relations,
    detect_combinations,
};
pub use config::{EngineConfig, FortuneConfig, ScoringWeights};
pub use cycle::{
    ALL_BRANCHES, ALL_STEMS, Branch, Polarity, Stem, branch_index, stem_index,
    year_to_stem_branch,
};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, Season, VitalityLevel, vitality};
pub use emptiness::{ChartVoids, VoidPair, chart_voids, void_pair};
pub use error::GanzhiError;
pub use fortune::{
    AnnualPeriod, DecadeChildren, DecadeSpec, FortuneCache, FortunePeriod, FortuneTimeline,
    MinorPeriod, MonthlyPeriod, SelectionCursor, SelectionView,
};
pub use hidden::{HiddenStem, HiddenTier, TIER_WEIGHTS, hidden_stem_set, hidden_stems};
pub use life_stage::{
    ALL_LIFE_STAGES, ChartStages, LifeStage, StageNature, ground_stages, life_stage,
    life_stage_index, month_command_stages, seat_stages,
};
pub use markers::{
    ALL_MARKERS, Marker, MarkerBasis, MarkerNature, MarkerSet, PositionMarkers, chart_markers,
    pillar_markers,
};
pub use pillar::{ALL_POSITIONS, Chart, Gender, Pillar, Position};
pub use relation::{ClassicalTenRelations, RelationReading, TenRelation, TenRelationResolver};
pub use scoring::{ElementScore, ElementStrengthVector, score_chart, score_elements};
pub use services::{
    MarkerCatalog, MarkerDescription, PatternCatalog, PatternClassification, TrendNarrative,
    TrendNarrator, TrendRequest, YearPolarity, describe_markers, trend_request,
};
pub use sound::{SOUND_LABELS, element_from_label, sound_element, sound_label};
pub use strength::{StrengthAssessment, StrengthCategory, assess_strength, favorable_elements};
