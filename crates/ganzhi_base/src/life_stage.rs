//! The twelve life stages (changsheng) of a stem across the branches.
//!
//! Every stem has an anchor branch where it stands at nascent growth.
//! Yang stems walk the branches forward from there, yin stems backward, so
//! for any stem the twelve branches map onto the twelve stages one-to-one.

use serde::Serialize;

use crate::cycle::{Branch, Stem};
use crate::pillar::{ALL_POSITIONS, Chart, Position};

/// The twelve life stages in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LifeStage {
    NascentGrowth,
    Bathing,
    Capping,
    Office,
    Peak,
    Decline,
    Sickness,
    Death,
    Tomb,
    Extinction,
    Conception,
    Nurture,
}

/// All twelve stages (index 0 = nascent growth).
pub const ALL_LIFE_STAGES: [LifeStage; 12] = [
    LifeStage::NascentGrowth,
    LifeStage::Bathing,
    LifeStage::Capping,
    LifeStage::Office,
    LifeStage::Peak,
    LifeStage::Decline,
    LifeStage::Sickness,
    LifeStage::Death,
    LifeStage::Tomb,
    LifeStage::Extinction,
    LifeStage::Conception,
    LifeStage::Nurture,
];

/// Broad reading of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StageNature {
    Auspicious,
    Inauspicious,
    Neutral,
}

impl LifeStage {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::NascentGrowth => "Nascent Growth",
            Self::Bathing => "Bathing",
            Self::Capping => "Capping",
            Self::Office => "Office",
            Self::Peak => "Peak",
            Self::Decline => "Decline",
            Self::Sickness => "Sickness",
            Self::Death => "Death",
            Self::Tomb => "Tomb",
            Self::Extinction => "Extinction",
            Self::Conception => "Conception",
            Self::Nurture => "Nurture",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::NascentGrowth => "长生",
            Self::Bathing => "沐浴",
            Self::Capping => "冠带",
            Self::Office => "临官",
            Self::Peak => "帝旺",
            Self::Decline => "衰",
            Self::Sickness => "病",
            Self::Death => "死",
            Self::Tomb => "墓",
            Self::Extinction => "绝",
            Self::Conception => "胎",
            Self::Nurture => "养",
        }
    }

    pub const fn nature(self) -> StageNature {
        match self {
            Self::NascentGrowth | Self::Capping | Self::Office | Self::Peak | Self::Nurture => {
                StageNature::Auspicious
            }
            Self::Bathing | Self::Decline | Self::Sickness | Self::Death | Self::Extinction => {
                StageNature::Inauspicious
            }
            Self::Tomb | Self::Conception => StageNature::Neutral,
        }
    }
}

/// Branch at which each stem stands at nascent growth, indexed by stem.
const ANCHOR_BRANCHES: [Branch; 10] = [
    Branch::Hai,  // 甲
    Branch::Wu,   // 乙
    Branch::Yin,  // 丙
    Branch::You,  // 丁
    Branch::Yin,  // 戊
    Branch::You,  // 己
    Branch::Si,   // 庚
    Branch::Zi,   // 辛
    Branch::Shen, // 壬
    Branch::Mao,  // 癸
];

/// Nascent-growth branch of a stem.
pub const fn anchor_branch(stem: Stem) -> Branch {
    ANCHOR_BRANCHES[stem.index() as usize]
}

/// Stage index (0..12) of `branch` relative to `stem`.
pub const fn life_stage_index(stem: Stem, branch: Branch) -> u8 {
    let anchor = anchor_branch(stem).index() as i32;
    let stage = (branch.index() as i32 - anchor + 12).rem_euclid(12);
    let stage = if stem.is_yang() {
        stage
    } else {
        (12 - stage).rem_euclid(12)
    };
    stage as u8
}

/// Life stage of `branch` relative to `stem`.
pub const fn life_stage(stem: Stem, branch: Branch) -> LifeStage {
    ALL_LIFE_STAGES[life_stage_index(stem, branch) as usize]
}

// ── Chart-wide modes ────────────────────────────────────────────────────

/// Stages for each chart position, `None` where a pillar is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartStages {
    pub year: Option<LifeStage>,
    pub month: Option<LifeStage>,
    pub day: Option<LifeStage>,
    pub hour: Option<LifeStage>,
}

impl ChartStages {
    fn from_fn(mut f: impl FnMut(Position) -> Option<LifeStage>) -> Self {
        let [year, month, day, hour] = ALL_POSITIONS.map(&mut f);
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    pub const fn get(&self, pos: Position) -> Option<LifeStage> {
        match pos {
            Position::Year => self.year,
            Position::Month => self.month,
            Position::Day => self.day,
            Position::Hour => self.hour,
        }
    }
}

/// Day stem read against every branch of the chart (dishi).
pub fn ground_stages(chart: &Chart) -> ChartStages {
    let day = chart.day_stem();
    ChartStages::from_fn(|pos| {
        let stem = day?;
        chart.pillar(pos).map(|p| life_stage(stem, p.branch))
    })
}

/// Each stem read against its own branch (zizuo).
pub fn seat_stages(chart: &Chart) -> ChartStages {
    ChartStages::from_fn(|pos| chart.pillar(pos).map(|p| life_stage(p.stem, p.branch)))
}

/// Each stem read against the month branch (yueling).
pub fn month_command_stages(chart: &Chart) -> ChartStages {
    let month = chart.month_branch();
    ChartStages::from_fn(|pos| {
        let branch = month?;
        chart.pillar(pos).map(|p| life_stage(p.stem, branch))
    })
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
    fn jia_at_anchor_and_six_later() {
        assert_eq!(life_stage_index(Stem::Jia, Branch::Hai), 0);
        assert_eq!(life_stage(Stem::Jia, Branch::Hai), LifeStage::NascentGrowth);
        let six_later = Branch::Hai.offset(6);
        assert_eq!(six_later, Branch::Si);
        assert_eq!(life_stage_index(Stem::Jia, six_later), 6);
    }

    #[test]
    fn jia_peaks_in_mao() {
        assert_eq!(life_stage(Stem::Jia, Branch::Mao), LifeStage::Peak);
        assert_eq!(life_stage(Stem::Jia, Branch::Wei), LifeStage::Tomb);
    }

    #[test]
    fn yin_stems_run_backward() {
        assert_eq!(life_stage(Stem::Yi, Branch::Wu), LifeStage::NascentGrowth);
        assert_eq!(life_stage(Stem::Yi, Branch::Si), LifeStage::Bathing);
        assert_eq!(life_stage(Stem::Yi, Branch::Yin), LifeStage::Peak);
        assert_eq!(life_stage(Stem::Xin, Branch::You), LifeStage::Office);
    }

    #[test]
    fn every_stem_is_a_permutation() {
        for s in ALL_STEMS {
            let mut seen = [false; 12];
            for b in ALL_BRANCHES {
                seen[life_stage_index(s, b) as usize] = true;
            }
            assert!(seen.iter().all(|&x| x), "{s:?} misses a stage");
        }
    }

    #[test]
    fn natures() {
        assert_eq!(LifeStage::Peak.nature(), StageNature::Auspicious);
        assert_eq!(LifeStage::Nurture.nature(), StageNature::Auspicious);
        assert_eq!(LifeStage::Bathing.nature(), StageNature::Inauspicious);
        assert_eq!(LifeStage::Tomb.nature(), StageNature::Neutral);
        assert_eq!(LifeStage::Conception.nature(), StageNature::Neutral);
    }

    #[test]
    fn chart_modes() {
        let chart = Chart::new(p("庚午"), p("戊寅"), p("甲子"), p("丙寅"));
        let ground = ground_stages(&chart);
        assert_eq!(ground.day, Some(LifeStage::Bathing));
        assert_eq!(ground.month, Some(LifeStage::Office));

        let seat = seat_stages(&chart);
        assert_eq!(seat.year, Some(LifeStage::Bathing));
        assert_eq!(seat.hour, Some(LifeStage::NascentGrowth));

        let month = month_command_stages(&chart);
        assert_eq!(month.get(Position::Day), Some(LifeStage::Office));
        assert_eq!(month.get(Position::Year), Some(LifeStage::Extinction));
    }

    #[test]
    fn chart_modes_without_day() {
        let chart = Chart::from_slots([Some(p("庚午")), Some(p("戊寅")), None, None]);
        let ground = ground_stages(&chart);
        assert_eq!(ground.year, None);
        assert_eq!(ground.month, None);
        assert_eq!(seat_stages(&chart).day, None);
        assert!(month_command_stages(&chart).year.is_some());
    }
}
