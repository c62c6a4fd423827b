//! Annual and minor periods.
//!
//! Annual periods take each calendar year's own pillar. Minor periods run a
//! separate sequence from the seed pillar, advancing one cycle position per
//! year of nominal age.

use crate::pillar::Pillar;
use crate::relation::TenRelationResolver;

use super::decade::PeriodContext;
use super::types::{AnnualPeriod, MinorPeriod, PeriodAnnotations};

/// Annual periods for every year in `first..=last`.
pub fn annual_periods<R>(
    ctx: &PeriodContext,
    first: i32,
    last: i32,
    resolver: &R,
) -> Vec<AnnualPeriod>
where
    R: TenRelationResolver + ?Sized,
{
    (first..=last)
        .map(|year| {
            let pillar = Pillar::from_year(year);
            AnnualPeriod {
                year,
                age: year.saturating_sub(ctx.birth_year),
                pillar,
                annotations: PeriodAnnotations::new(pillar, &ctx.basis, resolver),
            }
        })
        .collect()
}

/// Minor periods for every year in `first..=last`; empty without a seed.
pub fn minor_periods<R>(
    ctx: &PeriodContext,
    first: i32,
    last: i32,
    resolver: &R,
) -> Vec<MinorPeriod>
where
    R: TenRelationResolver + ?Sized,
{
    let Some(seed) = ctx.minor_seed else {
        return Vec::new();
    };
    (first..=last)
        .map(|year| {
            let age = year.saturating_sub(ctx.birth_year).saturating_add(1);
            let pillar = seed.advance(age);
            MinorPeriod {
                year,
                age,
                pillar,
                annotations: PeriodAnnotations::new(pillar, &ctx.basis, resolver),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::Stem;
    use crate::markers::{Marker, MarkerBasis};
    use crate::relation::ClassicalTenRelations;

    fn ctx() -> PeriodContext {
        PeriodContext {
            basis: MarkerBasis::day_only(Stem::Jia),
            birth_year: 1990,
            minor_seed: Some("戊寅".parse().unwrap()),
        }
    }

    #[test]
    fn annual_years_and_pillars() {
        let years = annual_periods(&ctx(), 2020, 2024, &ClassicalTenRelations);
        assert_eq!(years.len(), 5);
        assert_eq!(years[0].pillar.to_string(), "庚子");
        assert_eq!(years[4].pillar.to_string(), "甲辰");
        assert_eq!(years[4].age, 34);
    }

    #[test]
    fn empty_range() {
        assert!(annual_periods(&ctx(), 2020, 2019, &ClassicalTenRelations).is_empty());
    }

    #[test]
    fn minor_sequence_advances_per_year() {
        let minors = minor_periods(&ctx(), 1990, 1992, &ClassicalTenRelations);
        let pillars: Vec<String> = minors.iter().map(|m| m.pillar.to_string()).collect();
        assert_eq!(pillars, vec!["己卯", "庚辰", "辛巳"]);
        assert_eq!(minors[2].age, 3);
    }

    #[test]
    fn annual_markers_follow_day_stem() {
        // 2022 壬寅: 寅 is the 甲 day's prosperity branch.
        let years = annual_periods(&ctx(), 2022, 2023, &ClassicalTenRelations);
        assert!(years[0].annotations.markers.contains(Marker::Prosperity));
        // 2023 癸卯: 卯 is the 甲 day's blade.
        assert!(years[1].annotations.markers.contains(Marker::Blade));
    }

    #[test]
    fn ages_saturate_at_extreme_years() {
        let ctx = PeriodContext {
            birth_year: i32::MIN,
            ..ctx()
        };
        let years = annual_periods(&ctx, i32::MAX, i32::MAX, &ClassicalTenRelations);
        assert_eq!(years[0].age, i32::MAX);
        let minors = minor_periods(&ctx, i32::MAX, i32::MAX, &ClassicalTenRelations);
        assert_eq!(minors[0].age, i32::MAX);
    }

    #[test]
    fn minor_without_seed() {
        let ctx = PeriodContext {
            minor_seed: None,
            ..ctx()
        };
        assert!(minor_periods(&ctx, 1990, 1999, &ClassicalTenRelations).is_empty());
    }
}
