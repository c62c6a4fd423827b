//! Ten relations (shishen) between the day stem and other stems.
//!
//! The fortune generator only needs a label per period, so relation lookup
//! sits behind [`TenRelationResolver`]. [`ClassicalTenRelations`] derives the
//! label from the element cycle and stem parity.

use serde::Serialize;

use crate::cycle::{Branch, Stem};
use crate::element::ElementRelation;
use crate::hidden::hidden_stems;

/// The ten canonical relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenRelation {
    /// 比肩: same element, same parity.
    Companion,
    /// 劫财: same element, opposite parity.
    RobWealth,
    /// 食神
    EatingGod,
    /// 伤官
    HurtingOfficer,
    /// 偏财
    IndirectWealth,
    /// 正财
    DirectWealth,
    /// 七杀
    SevenKillings,
    /// 正官
    DirectOfficer,
    /// 偏印
    IndirectResource,
    /// 正印
    DirectResource,
}

impl TenRelation {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "Companion",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }

    /// Chinese label.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Companion => "比肩",
            Self::RobWealth => "劫财",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
            Self::SevenKillings => "七杀",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }
}

/// Relation of a branch: its principal stem plus one entry per hidden stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationReading {
    pub principal: TenRelation,
    pub hidden: Vec<(Stem, TenRelation)>,
}

/// Resolves ten relations against a day stem.
pub trait TenRelationResolver {
    /// Relation of `target` as seen from `day`.
    fn stem_relation(&self, day: Stem, target: Stem) -> TenRelation;

    /// Relation of `branch` with its hidden-stem breakdown.
    fn branch_relation(&self, day: Stem, branch: Branch) -> RelationReading {
        let hidden: Vec<(Stem, TenRelation)> = hidden_stems(branch)
            .iter()
            .map(|&s| (s, self.stem_relation(day, s)))
            .collect();
        let principal = hidden
            .first()
            .map_or(TenRelation::Companion, |&(_, r)| r);
        RelationReading { principal, hidden }
    }
}

/// Element-cycle and parity rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicalTenRelations;

impl TenRelationResolver for ClassicalTenRelations {
    fn stem_relation(&self, day: Stem, target: Stem) -> TenRelation {
        let same_parity = day.is_yang() == target.is_yang();
        let pick = |same, diff| if same_parity { same } else { diff };
        match day.element().relation_to(target.element()) {
            ElementRelation::Same => pick(TenRelation::Companion, TenRelation::RobWealth),
            ElementRelation::Generates => pick(TenRelation::EatingGod, TenRelation::HurtingOfficer),
            ElementRelation::Overcomes => {
                pick(TenRelation::IndirectWealth, TenRelation::DirectWealth)
            }
            ElementRelation::OvercomeBy => {
                pick(TenRelation::SevenKillings, TenRelation::DirectOfficer)
            }
            ElementRelation::GeneratedBy => {
                pick(TenRelation::IndirectResource, TenRelation::DirectResource)
            }
        }
    }
}
