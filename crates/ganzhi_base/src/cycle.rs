//! The ten heavenly stems, the twelve earthly branches, and year indexing.
//!
//! Both alphabets are closed cycles: every offset wraps with `rem_euclid`,
//! so negative offsets and years before the epoch stay in range. The
//! combined stem/branch cycle has period 60; CE 4 is 甲子.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::element::{Element, Season};
use crate::error::GanzhiError;

/// First year of a 甲子 cycle in the proleptic Gregorian calendar.
pub const CYCLE_EPOCH_YEAR: i32 = 4;

/// Yin/yang parity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Parity of a 0-based ordinal: even ordinals are yang.
    pub const fn from_ordinal(idx: u8) -> Self {
        if idx % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

// ── Stems ───────────────────────────────────────────────────────────────

/// The ten heavenly stems (tiangan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All ten stems in order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_SYMBOLS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const STEM_NAMES: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem for an index, wrapping modulo 10.
    pub const fn from_index(idx: i32) -> Self {
        ALL_STEMS[idx.rem_euclid(10) as usize]
    }

    /// Chinese character.
    pub const fn symbol(self) -> &'static str {
        STEM_SYMBOLS[self as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self as usize]
    }

    /// Element: consecutive pairs share one element, starting with Wood.
    pub const fn element(self) -> Element {
        Element::from_index(self.index() as i32 / 2)
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_ordinal(self.index())
    }

    pub const fn is_yang(self) -> bool {
        matches!(self.polarity(), Polarity::Yang)
    }

    /// Stem `offset` positions further along the cycle (negative goes back).
    pub const fn offset(self, offset: i32) -> Self {
        ALL_STEMS[(self.index() as i64 + offset as i64).rem_euclid(10) as usize]
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Stem {
    type Err = GanzhiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        stem_index(s)
            .map(|i| ALL_STEMS[i as usize])
            .ok_or_else(|| GanzhiError::UnknownStem(s.to_string()))
    }
}

/// Index of a stem symbol (character or pinyin, case-insensitive).
///
/// Returns `None` for anything outside the alphabet.
pub fn stem_index(symbol: &str) -> Option<u8> {
    let symbol = symbol.trim();
    STEM_SYMBOLS
        .iter()
        .position(|s| *s == symbol)
        .or_else(|| {
            STEM_NAMES
                .iter()
                .position(|n| n.eq_ignore_ascii_case(symbol))
        })
        .map(|i| i as u8)
}

// ── Branches ────────────────────────────────────────────────────────────

/// The twelve earthly branches (dizhi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_SYMBOLS: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_NAMES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water, // 子
    Element::Earth, // 丑
    Element::Wood,  // 寅
    Element::Wood,  // 卯
    Element::Earth, // 辰
    Element::Fire,  // 巳
    Element::Fire,  // 午
    Element::Earth, // 未
    Element::Metal, // 申
    Element::Metal, // 酉
    Element::Earth, // 戌
    Element::Water, // 亥
];

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch for an index, wrapping modulo 12.
    pub const fn from_index(idx: i32) -> Self {
        ALL_BRANCHES[idx.rem_euclid(12) as usize]
    }

    /// Chinese character.
    pub const fn symbol(self) -> &'static str {
        BRANCH_SYMBOLS[self as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self as usize]
    }

    pub const fn element(self) -> Element {
        BRANCH_ELEMENTS[self as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_ordinal(self.index())
    }

    /// Season: 寅卯辰 spring, 巳午未 summer, 申酉戌 autumn, 亥子丑 winter.
    pub const fn season(self) -> Season {
        match self {
            Self::Yin | Self::Mao | Self::Chen => Season::Spring,
            Self::Si | Self::Wu | Self::Wei => Season::Summer,
            Self::Shen | Self::You | Self::Xu => Season::Autumn,
            Self::Hai | Self::Zi | Self::Chou => Season::Winter,
        }
    }

    /// Branch `offset` positions further along the cycle (negative goes back).
    pub const fn offset(self, offset: i32) -> Self {
        ALL_BRANCHES[(self.index() as i64 + offset as i64).rem_euclid(12) as usize]
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Branch {
    type Err = GanzhiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        branch_index(s)
            .map(|i| ALL_BRANCHES[i as usize])
            .ok_or_else(|| GanzhiError::UnknownBranch(s.to_string()))
    }
}

/// Index of a branch symbol (character or pinyin, case-insensitive).
///
/// Returns `None` for anything outside the alphabet.
pub fn branch_index(symbol: &str) -> Option<u8> {
    let symbol = symbol.trim();
    BRANCH_SYMBOLS
        .iter()
        .position(|s| *s == symbol)
        .or_else(|| {
            BRANCH_NAMES
                .iter()
                .position(|n| n.eq_ignore_ascii_case(symbol))
        })
        .map(|i| i as u8)
}

// ── Year indexing ───────────────────────────────────────────────────────

/// Stem and branch of a calendar year.
///
/// `((year − 4) mod 10, (year − 4) mod 12)` with a non-negative modulo, so
/// 4 CE and 1984 are both 甲子 and years before the epoch stay valid.
pub const fn year_to_stem_branch(year: i32) -> (Stem, Branch) {
    let n = year as i64 - CYCLE_EPOCH_YEAR as i64;
    (
        ALL_STEMS[n.rem_euclid(10) as usize],
        ALL_BRANCHES[n.rem_euclid(12) as usize],
    )
}
