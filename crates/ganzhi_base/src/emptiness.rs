//! Void branches (xunkong).
//!
//! The ten stems of a decade group pair with ten of the twelve branches;
//! the two left over are void for every stem of that group.

use serde::Serialize;

use crate::cycle::{Branch, Stem};
use crate::pillar::{ALL_POSITIONS, Chart, Position};

/// The two void branches of a decade group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VoidPair {
    pub first: Branch,
    pub second: Branch,
}

impl VoidPair {
    pub fn contains(&self, branch: Branch) -> bool {
        self.first == branch || self.second == branch
    }

    pub const fn as_array(&self) -> [Branch; 2] {
        [self.first, self.second]
    }
}

/// Void branches for `stem`.
///
/// `anchor = ⌊stem/2⌋·2`; the pair is `(anchor + 10, anchor + 11) mod 12`.
/// The branch argument is accepted alongside the stem but does not affect
/// the result.
pub const fn void_pair(stem: Stem, _branch: Branch) -> VoidPair {
    let anchor = (stem.index() as i32 / 2) * 2;
    VoidPair {
        first: Branch::from_index(anchor + 10),
        second: Branch::from_index(anchor + 11),
    }
}

/// Void pair computed from one chart position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionVoid {
    pub position: Position,
    pub pair: VoidPair,
}

/// Void pairs across a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartVoids {
    /// Pair for each present pillar.
    pub per_pillar: Vec<PositionVoid>,
    /// Positions whose branch falls in the day pillar's pair.
    pub voided_by_day: Vec<Position>,
    /// Positions whose branch falls in the year pillar's pair.
    pub voided_by_year: Vec<Position>,
}

/// Void pairs for every present pillar plus the branches they void.
pub fn chart_voids(chart: &Chart) -> ChartVoids {
    let per_pillar = chart
        .present()
        .map(|(position, p)| PositionVoid {
            position,
            pair: void_pair(p.stem, p.branch),
        })
        .collect();

    let voided_in = |reference: Position| -> Vec<Position> {
        let Some(r) = chart.pillar(reference) else {
            return Vec::new();
        };
        let pair = void_pair(r.stem, r.branch);
        ALL_POSITIONS
            .into_iter()
            .filter(|&pos| pos != reference)
            .filter(|&pos| chart.pillar(pos).is_some_and(|p| pair.contains(p.branch)))
            .collect()
    };

    ChartVoids {
        per_pillar,
        voided_by_day: voided_in(Position::Day),
        voided_by_year: voided_in(Position::Year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::{ALL_BRANCHES, ALL_STEMS};
    use crate::pillar::Pillar;

    fn p(s: &str) -> Pillar {
        s.parse().unwrap()
    }

    #[test]
    fn jia_voids_xu_hai() {
        let pair = void_pair(Stem::Jia, Branch::Zi);
        assert_eq!(pair.as_array(), [Branch::Xu, Branch::Hai]);
    }

    #[test]
    fn groups_of_two_stems_share_pair() {
        assert_eq!(
            void_pair(Stem::Bing, Branch::Yin),
            void_pair(Stem::Ding, Branch::Mao)
        );
        // 丙/丁 group: (2 + 10, 2 + 11) mod 12 = 子, 丑
        assert_eq!(
            void_pair(Stem::Bing, Branch::Yin).as_array(),
            [Branch::Zi, Branch::Chou]
        );
        assert_eq!(
            void_pair(Stem::Gui, Branch::Hai).as_array(),
            [Branch::Wu, Branch::Wei]
        );
    }

    #[test]
    fn branch_argument_ignored() {
        for s in ALL_STEMS {
            let expected = void_pair(s, Branch::Zi);
            for b in ALL_BRANCHES {
                assert_eq!(void_pair(s, b), expected);
            }
        }
    }

    #[test]
    fn chart_void_report() {
        // Day 甲子 voids 戌/亥; the hour branch 亥 is void.
        let chart = Chart::new(p("庚午"), p("戊寅"), p("甲子"), p("乙亥"));
        let voids = chart_voids(&chart);
        assert_eq!(voids.per_pillar.len(), 4);
        assert_eq!(voids.voided_by_day, vec![Position::Hour]);
        // Year 庚 voids 辰/巳, absent from this chart.
        assert!(voids.voided_by_year.is_empty());
    }

    #[test]
    fn chart_void_without_day() {
        let chart = Chart::from_slots([Some(p("庚午")), None, None, None]);
        let voids = chart_voids(&chart);
        assert_eq!(voids.per_pillar.len(), 1);
        assert!(voids.voided_by_day.is_empty());
    }
}
