//! The five elements, the four seasons, and the seasonal vitality table.
//!
//! Elements are ordered along the generating cycle
//! (Wood → Fire → Earth → Metal → Water → Wood), so "generates" is `+1`
//! and "overcomes" is `+2` modulo 5.

use serde::Serialize;

/// One of the five elements (wuxing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating-cycle order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Element for a 0-based index, wrapping modulo 5.
    pub const fn from_index(idx: i32) -> Self {
        ALL_ELEMENTS[idx.rem_euclid(5) as usize]
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Single-character symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// The element this one feeds.
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() as i32 + 1)
    }

    /// The element this one restrains.
    pub const fn overcomes(self) -> Self {
        Self::from_index(self.index() as i32 + 2)
    }

    /// The element that feeds this one.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() as i32 - 1)
    }

    /// The element that restrains this one.
    pub const fn overcome_by(self) -> Self {
        Self::from_index(self.index() as i32 - 2)
    }

    /// Relation of `other` as seen from `self`.
    pub fn relation_to(self, other: Element) -> ElementRelation {
        match (other.index() as i32 - self.index() as i32).rem_euclid(5) {
            0 => ElementRelation::Same,
            1 => ElementRelation::Generates,
            2 => ElementRelation::Overcomes,
            3 => ElementRelation::OvercomeBy,
            _ => ElementRelation::GeneratedBy,
        }
    }
}

/// How a second element stands relative to a reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementRelation {
    /// Same element (peer).
    Same,
    /// Reference generates the other (output).
    Generates,
    /// Reference overcomes the other (wealth).
    Overcomes,
    /// Other overcomes the reference (officer).
    OvercomeBy,
    /// Other generates the reference (resource).
    GeneratedBy,
}

// ── Seasons ─────────────────────────────────────────────────────────────

/// The four seasons a branch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// All four seasons in calendar order.
pub const ALL_SEASONS: [Season; 4] = [
    Season::Spring,
    Season::Summer,
    Season::Autumn,
    Season::Winter,
];

impl Season {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }

    /// Element in command during this season.
    pub const fn dominant_element(self) -> Element {
        match self {
            Self::Spring => Element::Wood,
            Self::Summer => Element::Fire,
            Self::Autumn => Element::Metal,
            Self::Winter => Element::Water,
        }
    }
}

/// Seasonal vitality of an element (wang/xiang/xiu/qiu/si).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VitalityLevel {
    Dominant,
    Supportive,
    Neutral,
    Imprisoned,
    Dead,
}

/// All five vitality levels, strongest first.
pub const ALL_VITALITY_LEVELS: [VitalityLevel; 5] = [
    VitalityLevel::Dominant,
    VitalityLevel::Supportive,
    VitalityLevel::Neutral,
    VitalityLevel::Imprisoned,
    VitalityLevel::Dead,
];

impl VitalityLevel {
    /// 0-based index (Dominant=0 .. Dead=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dominant => "Dominant",
            Self::Supportive => "Supportive",
            Self::Neutral => "Neutral",
            Self::Imprisoned => "Imprisoned",
            Self::Dead => "Dead",
        }
    }
}

/// Vitality of `element` during `season`.
///
/// The level is the element's distance from the season's dominant element
/// along the generating cycle: the dominant element itself, the element it
/// feeds, then neutral, imprisoned and dead.
pub fn vitality(season: Season, element: Element) -> VitalityLevel {
    let dominant = season.dominant_element();
    let offset = (element.index() as i32 - dominant.index() as i32).rem_euclid(5);
    ALL_VITALITY_LEVELS[offset as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_cycle() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Water.generates(), Element::Wood);
        assert_eq!(Element::Wood.generated_by(), Element::Water);
    }

    #[test]
    fn overcoming_cycle() {
        assert_eq!(Element::Wood.overcomes(), Element::Earth);
        assert_eq!(Element::Metal.overcomes(), Element::Wood);
        assert_eq!(Element::Wood.overcome_by(), Element::Metal);
        assert_eq!(Element::Fire.overcome_by(), Element::Water);
    }

    #[test]
    fn relation_covers_all_five() {
        let day = Element::Fire;
        assert_eq!(day.relation_to(Element::Fire), ElementRelation::Same);
        assert_eq!(day.relation_to(Element::Earth), ElementRelation::Generates);
        assert_eq!(day.relation_to(Element::Metal), ElementRelation::Overcomes);
        assert_eq!(day.relation_to(Element::Water), ElementRelation::OvercomeBy);
        assert_eq!(day.relation_to(Element::Wood), ElementRelation::GeneratedBy);
    }

    #[test]
    fn spring_table() {
        assert_eq!(vitality(Season::Spring, Element::Wood), VitalityLevel::Dominant);
        assert_eq!(vitality(Season::Spring, Element::Fire), VitalityLevel::Supportive);
        assert_eq!(vitality(Season::Spring, Element::Earth), VitalityLevel::Neutral);
        assert_eq!(vitality(Season::Spring, Element::Metal), VitalityLevel::Imprisoned);
        assert_eq!(vitality(Season::Spring, Element::Water), VitalityLevel::Dead);
    }

    #[test]
    fn autumn_and_winter_rows() {
        assert_eq!(vitality(Season::Autumn, Element::Metal), VitalityLevel::Dominant);
        assert_eq!(vitality(Season::Autumn, Element::Earth), VitalityLevel::Dead);
        assert_eq!(vitality(Season::Winter, Element::Wood), VitalityLevel::Supportive);
        assert_eq!(vitality(Season::Winter, Element::Metal), VitalityLevel::Dead);
    }

    #[test]
    fn each_season_has_one_of_each_level() {
        for season in ALL_SEASONS {
            let mut seen = [false; 5];
            for e in ALL_ELEMENTS {
                seen[vitality(season, e).index() as usize] = true;
            }
            assert!(seen.iter().all(|&s| s), "{season:?} misses a level");
        }
    }
}
