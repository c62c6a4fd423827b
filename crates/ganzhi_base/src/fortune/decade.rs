//! Decade periods and the fortune timeline.
//!
//! The first decade starts `start_age` years after birth. Decade `k` takes
//! the month pillar advanced by `k + 1` cycle positions; traversal is always
//! forward. Windows are contiguous and never overlap.

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::FortuneConfig;
use crate::markers::MarkerBasis;
use crate::pillar::{Chart, Pillar, Position};
use crate::relation::TenRelationResolver;

use super::annual::{annual_periods, minor_periods};
use super::monthly::monthly_periods;
use super::types::{
    AnnualPeriod, DecadeChildren, DecadeSpec, FortunePeriod, MinorPeriod, MonthlyPeriod,
    PeriodAnnotations,
};

/// Chart facts every period generator reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodContext {
    /// Day stem and the other reference points for annotations.
    pub basis: MarkerBasis,
    pub birth_year: i32,
    /// Seed of the minor-period sequence.
    pub minor_seed: Option<Pillar>,
}

/// Decade periods of a chart plus the minor periods preceding them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FortuneTimeline {
    context: Option<PeriodContext>,
    decades: Vec<FortunePeriod>,
    early_minors: Vec<MinorPeriod>,
}

/// Window of decade `k`, or `None` once a year no longer fits in `i32`.
fn decade_spec(
    month: Pillar,
    birth_year: i32,
    config: &FortuneConfig,
    k: usize,
) -> Option<DecadeSpec> {
    let k = i32::try_from(k).ok()?;
    let start_year = birth_year
        .checked_add(config.start_age)?
        .checked_add(k.checked_mul(config.decade_span)?)?;
    Some(DecadeSpec {
        pillar: month.advance(k.checked_add(1)?),
        start_year,
        end_year: Some(start_year.checked_add(config.decade_span.checked_sub(1)?)?),
    })
}

impl FortuneTimeline {
    /// A timeline with no periods.
    pub const fn empty() -> Self {
        Self {
            context: None,
            decades: Vec::new(),
            early_minors: Vec::new(),
        }
    }

    /// Generate `decade_count` decades seeded from the month pillar.
    ///
    /// Empty when the chart lacks a birth year or a month pillar. Generation
    /// stops early at the first decade whose years overflow `i32`.
    pub fn generate<R>(chart: &Chart, config: &FortuneConfig, resolver: &R) -> Self
    where
        R: TenRelationResolver + ?Sized,
    {
        let (Some(birth_year), Some(month)) = (chart.birth_year(), chart.pillar(Position::Month))
        else {
            debug!("no birth year or month pillar; fortune timeline is empty");
            return Self::empty();
        };
        let specs: Vec<DecadeSpec> = (0..config.decade_count)
            .map_while(|k| decade_spec(month, birth_year, config, k))
            .collect();
        if specs.len() < config.decade_count {
            debug!(
                generated = specs.len(),
                requested = config.decade_count,
                "decade years overflow; timeline truncated"
            );
        }
        Self::from_decades(chart, &specs, resolver)
    }

    /// Build from caller-supplied decade windows, in order.
    ///
    /// Windows must be contiguous: each one starts the year after the
    /// previous one ends and ends no earlier than it starts. The timeline
    /// keeps the longest valid prefix of `specs` and drops the rest. Empty
    /// when the chart lacks a birth year.
    pub fn from_decades<R>(chart: &Chart, specs: &[DecadeSpec], resolver: &R) -> Self
    where
        R: TenRelationResolver + ?Sized,
    {
        let Some(birth_year) = chart.birth_year() else {
            debug!("no birth year; fortune timeline is empty");
            return Self::empty();
        };
        let basis = MarkerBasis::from_chart(chart);
        let mut decades: Vec<FortunePeriod> = Vec::with_capacity(specs.len());
        for (index, spec) in specs.iter().enumerate() {
            let follows = decades
                .last()
                .is_none_or(|prev| prev.end_year.checked_add(1) == Some(spec.start_year));
            let window = spec
                .resolved_end()
                .filter(|&end| follows && end >= spec.start_year)
                .and_then(|end| {
                    Some((
                        end,
                        spec.start_year.checked_sub(birth_year)?,
                        end.checked_sub(birth_year)?,
                    ))
                });
            let Some((end_year, start_age, end_age)) = window else {
                debug!(
                    index,
                    start_year = spec.start_year,
                    "decade window not contiguous; remaining windows dropped"
                );
                break;
            };
            decades.push(FortunePeriod {
                index,
                pillar: spec.pillar,
                start_year: spec.start_year,
                end_year,
                start_age,
                end_age,
                annotations: PeriodAnnotations::new(spec.pillar, &basis, resolver),
            });
        }

        let context = PeriodContext {
            basis,
            birth_year,
            minor_seed: chart
                .pillar(Position::Month)
                .or_else(|| decades.first().map(|d| d.pillar)),
        };

        let early_minors = match decades.first() {
            Some(first) if first.start_year > birth_year => {
                minor_periods(&context, birth_year, first.start_year - 1, resolver)
            }
            _ => Vec::new(),
        };

        trace!(
            decades = decades.len(),
            early_minors = early_minors.len(),
            "fortune timeline built"
        );
        Self {
            context: Some(context),
            decades,
            early_minors,
        }
    }

    pub fn context(&self) -> Option<&PeriodContext> {
        self.context.as_ref()
    }

    pub fn decades(&self) -> &[FortunePeriod] {
        &self.decades
    }

    pub fn decade(&self, index: usize) -> Option<&FortunePeriod> {
        self.decades.get(index)
    }

    /// Minor periods from the birth year up to the first decade.
    pub fn early_minor_periods(&self) -> &[MinorPeriod] {
        &self.early_minors
    }

    /// Index of the decade whose window contains `year`.
    pub fn find_decade(&self, year: i32) -> Option<usize> {
        self.decades.iter().position(|d| d.contains_year(year))
    }

    /// Annual and minor periods of decade `index`; empty when out of range.
    pub fn decade_children<R>(&self, index: usize, resolver: &R) -> DecadeChildren
    where
        R: TenRelationResolver + ?Sized,
    {
        let (Some(ctx), Some(decade)) = (self.context.as_ref(), self.decades.get(index)) else {
            debug!(index, "decade selection out of range");
            return DecadeChildren::default();
        };
        DecadeChildren {
            annual: annual_periods(ctx, decade.start_year, decade.end_year, resolver),
            minor: minor_periods(ctx, decade.start_year, decade.end_year, resolver),
        }
    }

    /// Annual period for `year` inside decade `index`.
    pub fn annual_period<R>(&self, index: usize, year: i32, resolver: &R) -> Option<AnnualPeriod>
    where
        R: TenRelationResolver + ?Sized,
    {
        let ctx = self.context.as_ref()?;
        let decade = self.decades.get(index)?;
        if !decade.contains_year(year) {
            return None;
        }
        annual_periods(ctx, year, year, resolver).into_iter().next()
    }

    /// Monthly periods of `year` inside decade `index`; empty when the year
    /// falls outside that decade.
    pub fn monthly_children<R>(&self, index: usize, year: i32, resolver: &R) -> Vec<MonthlyPeriod>
    where
        R: TenRelationResolver + ?Sized,
    {
        match self.annual_period(index, year, resolver) {
            Some(annual) => {
                let basis = self.context.map(|c| c.basis).unwrap_or_default();
                monthly_periods(annual.pillar.stem, year, &basis, resolver)
            }
            None => {
                debug!(index, year, "annual selection out of range");
                Vec::new()
            }
        }
    }
}
