//! Pillars, chart positions, and the four-pillar chart.
//!
//! A [`Chart`] always has exactly four slots; any slot may be empty when the
//! birth data is incomplete. Computations that need a missing pillar skip
//! that term instead of failing.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::cycle::{Branch, Stem, year_to_stem_branch};
use crate::element::Element;
use crate::error::GanzhiError;

/// Length of the combined stem/branch cycle.
pub const CYCLE_LENGTH: u8 = 60;

/// A stem/branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Pair any stem with any branch; see [`Pillar::is_sexagenary`].
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar of a calendar year.
    pub const fn from_year(year: i32) -> Self {
        let (stem, branch) = year_to_stem_branch(year);
        Self { stem, branch }
    }

    /// Pillar at a position of the 60-term cycle (甲子 = 0), wrapping.
    pub const fn from_cycle_index(idx: i32) -> Self {
        Self {
            stem: Stem::from_index(idx),
            branch: Branch::from_index(idx),
        }
    }

    /// Position in the 60-term cycle.
    ///
    /// `None` when stem and branch have different parity; such a pair never
    /// occurs in the cycle.
    pub const fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index() as i32;
        let d = self.branch.index() as i32 - s;
        if d.rem_euclid(2) != 0 {
            return None;
        }
        // s + 10k ≡ b (mod 12)  ⇒  k ≡ 5·(b − s)/2 (mod 6)
        let k = (5 * (d / 2)).rem_euclid(6);
        Some((s + 10 * k) as u8)
    }

    /// Move stem and branch together by `offset` cycle positions.
    pub const fn advance(self, offset: i32) -> Self {
        Self {
            stem: self.stem.offset(offset),
            branch: self.branch.offset(offset),
        }
    }

    /// True when the pair occurs in the 60-term cycle.
    pub const fn is_sexagenary(self) -> bool {
        self.cycle_index().is_some()
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

impl FromStr for Pillar {
    type Err = GanzhiError;

    /// Accepts `甲子`, `jia zi` or `jia-zi`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (stem_part, branch_part) = match text.split_once([' ', '-']) {
            Some((a, b)) => (a, b),
            None => {
                let first = text
                    .chars()
                    .next()
                    .ok_or_else(|| GanzhiError::InvalidPillar(s.to_string()))?;
                text.split_at(first.len_utf8())
            }
        };
        let stem: Stem = stem_part
            .parse()
            .map_err(|_| GanzhiError::InvalidPillar(s.to_string()))?;
        let branch: Branch = branch_part
            .parse()
            .map_err(|_| GanzhiError::InvalidPillar(s.to_string()))?;
        let pillar = Self::new(stem, branch);
        if !pillar.is_sexagenary() {
            return Err(GanzhiError::MismatchedPolarity(s.to_string()));
        }
        Ok(pillar)
    }
}

// ── Positions ───────────────────────────────────────────────────────────

/// The four chart positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Position {
    Year,
    Month,
    Day,
    Hour,
}

/// All four positions in chart order.
pub const ALL_POSITIONS: [Position; 4] = [
    Position::Year,
    Position::Month,
    Position::Day,
    Position::Hour,
];

impl Position {
    /// Slot index in chart order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

impl FromStr for Position {
    type Err = GanzhiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_POSITIONS
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GanzhiError::UnknownPosition(s.to_string()))
    }
}

/// Gender flag carried with the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = GanzhiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            _ => Err(GanzhiError::UnknownGender(s.to_string())),
        }
    }
}

// ── Chart ───────────────────────────────────────────────────────────────

/// Four-pillar birth chart. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    pillars: [Option<Pillar>; 4],
    gender: Option<Gender>,
    birth_year: Option<i32>,
}

impl Chart {
    /// Chart from all four pillars.
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self::from_slots([Some(year), Some(month), Some(day), Some(hour)])
    }

    /// Chart from slots in year/month/day/hour order; any may be absent.
    pub const fn from_slots(pillars: [Option<Pillar>; 4]) -> Self {
        Self {
            pillars,
            gender: None,
            birth_year: None,
        }
    }

    /// Same chart with a gender flag.
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Same chart with a birth year; fortune periods need one.
    pub const fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    /// Pillar at `pos`, if present.
    pub const fn pillar(&self, pos: Position) -> Option<Pillar> {
        self.pillars[pos.index()]
    }

    /// All four slots in chart order.
    pub const fn slots(&self) -> &[Option<Pillar>; 4] {
        &self.pillars
    }

    /// Gender flag, if set.
    pub const fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Birth year, if set.
    pub const fn birth_year(&self) -> Option<i32> {
        self.birth_year
    }

    /// Present pillars with their positions, in chart order.
    pub fn present(&self) -> impl Iterator<Item = (Position, Pillar)> + '_ {
        ALL_POSITIONS
            .into_iter()
            .filter_map(|pos| self.pillar(pos).map(|p| (pos, p)))
    }

    /// True when all four pillars are present.
    pub fn is_complete(&self) -> bool {
        self.pillars.iter().all(Option::is_some)
    }

    /// Stems of the present pillars, in chart order.
    pub fn stems(&self) -> Vec<Stem> {
        self.present().map(|(_, p)| p.stem).collect()
    }

    /// Branches of the present pillars, in chart order.
    pub fn branches(&self) -> Vec<Branch> {
        self.present().map(|(_, p)| p.branch).collect()
    }

    /// The day stem, reference point for relations and life stages.
    pub fn day_stem(&self) -> Option<Stem> {
        self.pillar(Position::Day).map(|p| p.stem)
    }

    /// Element of the day stem.
    pub fn day_element(&self) -> Option<Element> {
        self.day_stem().map(Stem::element)
    }

    /// Branch of the month pillar, which sets the season.
    pub fn month_branch(&self) -> Option<Branch> {
        self.pillar(Position::Month).map(|p| p.branch)
    }

    /// Conception pillar (taiyuan): month stem +1, month branch +3.
    pub fn conception_pillar(&self) -> Option<Pillar> {
        self.pillar(Position::Month).map(|m| Pillar {
            stem: m.stem.offset(1),
            branch: m.branch.offset(3),
        })
    }

    /// Life-palace pillar (minggong): hour stem +7, hour branch +1.
    pub fn life_palace_pillar(&self) -> Option<Pillar> {
        self.pillar(Position::Hour).map(|h| Pillar {
            stem: h.stem.offset(7),
            branch: h.branch.offset(1),
        })
    }
}
