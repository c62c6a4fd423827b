//! Monthly periods of an annual period.
//!
//! The solar year opens in the 寅 month. Its stem follows from the year stem
//! (甲/己 → 丙, 乙/庚 → 戊, 丙/辛 → 庚, 丁/壬 → 壬, 戊/癸 → 甲) and then
//! advances one position per month alongside the branch.

use crate::cycle::{Branch, Stem};
use crate::markers::MarkerBasis;
use crate::pillar::Pillar;
use crate::relation::TenRelationResolver;

use super::types::{MONTHS_PER_YEAR, MonthlyPeriod, PeriodAnnotations};

/// Stem of the 寅 month, indexed by year stem modulo 5.
const FIRST_MONTH_STEMS: [Stem; 5] = [Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren, Stem::Jia];

/// Branch of the first solar month.
pub const FIRST_MONTH_BRANCH: Branch = Branch::Yin;

/// Gregorian month in which the 寅 month begins.
const FIRST_MONTH_GREGORIAN: u8 = 2;

/// Stem of the 寅 month in a year with stem `year_stem`.
pub const fn first_month_stem(year_stem: Stem) -> Stem {
    FIRST_MONTH_STEMS[(year_stem.index() % 5) as usize]
}

/// The twelve monthly periods of `year`, whose stem is `year_stem`.
///
/// The closing month starts in January of the next year, which saturates
/// at `i32::MAX`.
pub fn monthly_periods<R>(
    year_stem: Stem,
    year: i32,
    basis: &MarkerBasis,
    resolver: &R,
) -> Vec<MonthlyPeriod>
where
    R: TenRelationResolver + ?Sized,
{
    let first = Pillar::new(first_month_stem(year_stem), FIRST_MONTH_BRANCH);
    (0..MONTHS_PER_YEAR as i32)
        .map(|i| {
            let pillar = first.advance(i);
            let month0 = FIRST_MONTH_GREGORIAN as i32 - 1 + i;
            MonthlyPeriod {
                order: (i + 1) as u8,
                pillar,
                start_year: year.saturating_add(month0 / 12),
                start_month: (month0 % 12 + 1) as u8,
                annotations: PeriodAnnotations::new(pillar, basis, resolver),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::ALL_STEMS;
    use crate::relation::ClassicalTenRelations;

    #[test]
    fn starting_stem_table() {
        assert_eq!(first_month_stem(Stem::Jia), Stem::Bing);
        assert_eq!(first_month_stem(Stem::Ji), Stem::Bing);
        assert_eq!(first_month_stem(Stem::Geng), Stem::Wu);
        assert_eq!(first_month_stem(Stem::Xin), Stem::Geng);
        assert_eq!(first_month_stem(Stem::Ren), Stem::Ren);
        assert_eq!(first_month_stem(Stem::Gui), Stem::Jia);
    }

    #[test]
    fn jia_year_months() {
        let basis = MarkerBasis::day_only(Stem::Jia);
        let months = monthly_periods(Stem::Jia, 2024, &basis, &ClassicalTenRelations);
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].pillar.to_string(), "丙寅");
        assert_eq!(months[1].pillar.to_string(), "丁卯");
        assert_eq!(months[10].pillar.to_string(), "丙子");
        assert_eq!(months[11].pillar.to_string(), "丁丑");
        assert_eq!((months[0].start_year, months[0].start_month), (2024, 2));
        assert_eq!((months[10].start_year, months[10].start_month), (2024, 12));
        assert_eq!((months[11].start_year, months[11].start_month), (2025, 1));
    }

    #[test]
    fn every_year_stem_gives_valid_pillars() {
        for s in ALL_STEMS {
            for m in monthly_periods(s, 2000, &MarkerBasis::default(), &ClassicalTenRelations) {
                assert!(m.pillar.is_sexagenary(), "{s}: {}", m.pillar);
                assert_eq!(m.annotations.relation, None);
            }
        }
    }

    #[test]
    fn last_year_does_not_overflow() {
        let basis = MarkerBasis::default();
        let months = monthly_periods(Stem::Jia, i32::MAX, &basis, &ClassicalTenRelations);
        assert_eq!(months[10].start_year, i32::MAX);
        assert_eq!((months[11].start_year, months[11].start_month), (i32::MAX, 1));
    }
}
