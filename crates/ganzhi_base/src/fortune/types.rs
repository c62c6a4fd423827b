//! Core types for fortune periods.
//!
//! Periods nest in four granularities: decade periods (dayun) cover ten
//! years each, annual periods (liunian) and minor periods (xiaoyun) fill a
//! decade's window one year at a time, and monthly periods (liuyue) split a
//! selected year into twelve solar months.

use serde::Serialize;

use crate::emptiness::{VoidPair, void_pair};
use crate::life_stage::{LifeStage, life_stage};
use crate::markers::{MarkerBasis, MarkerSet, pillar_markers};
use crate::pillar::Pillar;
use crate::relation::{TenRelation, TenRelationResolver};
use crate::sound::sound_label;

/// Years covered by a decade period without an explicit end.
pub const DEFAULT_DECADE_SPAN: i32 = 10;

/// Months per annual period.
pub const MONTHS_PER_YEAR: usize = 12;

/// Readings attached to every period pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodAnnotations {
    /// Relation of the period stem to the day stem.
    pub relation: Option<TenRelation>,
    /// Life stage of the day stem on the period branch.
    pub life_stage: Option<LifeStage>,
    pub void_pair: VoidPair,
    pub sound_label: Option<&'static str>,
    /// Special markers falling on the period pillar.
    pub markers: MarkerSet,
}

impl PeriodAnnotations {
    /// Annotate `pillar` against the chart's reference points; relation and
    /// stage are `None` without a day stem.
    pub fn new<R>(pillar: Pillar, basis: &MarkerBasis, resolver: &R) -> Self
    where
        R: TenRelationResolver + ?Sized,
    {
        let day = basis.day_stem;
        Self {
            relation: day.map(|d| resolver.stem_relation(d, pillar.stem)),
            life_stage: day.map(|d| life_stage(d, pillar.branch)),
            void_pair: void_pair(pillar.stem, pillar.branch),
            sound_label: sound_label(pillar),
            markers: pillar_markers(basis, pillar),
        }
    }
}

/// A decade period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FortunePeriod {
    /// 0-based position in the timeline.
    pub index: usize,
    pub pillar: Pillar,
    /// First year, inclusive.
    pub start_year: i32,
    /// Last year, inclusive.
    pub end_year: i32,
    pub start_age: i32,
    pub end_age: i32,
    pub annotations: PeriodAnnotations,
}

impl FortunePeriod {
    pub const fn contains_year(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }

    /// Number of years covered.
    pub const fn span(&self) -> i32 {
        self.end_year - self.start_year + 1
    }
}

/// One calendar year inside a decade window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnualPeriod {
    pub year: i32,
    /// Completed years since birth.
    pub age: i32,
    pub pillar: Pillar,
    pub annotations: PeriodAnnotations,
}

/// One year of the minor-period sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinorPeriod {
    pub year: i32,
    /// Nominal age: 1 in the birth year.
    pub age: i32,
    pub pillar: Pillar,
    pub annotations: PeriodAnnotations,
}

/// One solar month of an annual period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyPeriod {
    /// 1-based month of the solar year (1 = 寅 month).
    pub order: u8,
    pub pillar: Pillar,
    /// Gregorian year and month in which this month begins.
    pub start_year: i32,
    pub start_month: u8,
    pub annotations: PeriodAnnotations,
}

/// Annual and minor periods of one decade window.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DecadeChildren {
    pub annual: Vec<AnnualPeriod>,
    pub minor: Vec<MinorPeriod>,
}

impl DecadeChildren {
    pub fn is_empty(&self) -> bool {
        self.annual.is_empty() && self.minor.is_empty()
    }
}

/// A decade window supplied by the caller instead of generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecadeSpec {
    pub pillar: Pillar,
    pub start_year: i32,
    /// Inclusive; `start_year + 9` when absent.
    pub end_year: Option<i32>,
}

impl DecadeSpec {
    /// Inclusive last year; `None` when the default end overflows `i32`.
    pub const fn resolved_end(&self) -> Option<i32> {
        match self.end_year {
            Some(end) => Some(end),
            None => self.start_year.checked_add(DEFAULT_DECADE_SPAN - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::Stem;
    use crate::markers::Marker;
    use crate::relation::ClassicalTenRelations;

    fn spec(start_year: i32, end_year: Option<i32>) -> DecadeSpec {
        DecadeSpec {
            pillar: Pillar::from_cycle_index(0),
            start_year,
            end_year,
        }
    }

    #[test]
    fn resolved_end_defaults_to_ten_years() {
        assert_eq!(spec(2000, None).resolved_end(), Some(2009));
        assert_eq!(spec(2000, Some(2004)).resolved_end(), Some(2004));
        assert_eq!(spec(i32::MAX - 9, None).resolved_end(), Some(i32::MAX));
        assert_eq!(spec(i32::MAX - 8, None).resolved_end(), None);
    }

    #[test]
    fn annotations_carry_markers() {
        let basis = MarkerBasis::day_only(Stem::Jia);
        let a = PeriodAnnotations::new("丁卯".parse().unwrap(), &basis, &ClassicalTenRelations);
        assert!(a.markers.contains(Marker::Blade));
        assert!(!a.markers.contains(Marker::Prosperity));

        let none = PeriodAnnotations::new(
            "丁卯".parse().unwrap(),
            &MarkerBasis::default(),
            &ClassicalTenRelations,
        );
        assert_eq!(none.relation, None);
        assert!(none.markers.is_empty());
    }
}
