//! Hidden stems (canggan) held inside each branch.
//!
//! Each branch carries one to three subordinate stems, principal first.
//! Tier weights come from one fixed table regardless of how many stems a
//! branch holds; they are not renormalized.

use serde::Serialize;

use crate::cycle::Stem::{Bing, Ding, Geng, Gui, Ji, Jia, Ren, Wu, Xin, Yi};
use crate::cycle::{Branch, Stem};

/// Weights for the principal, middle and residual tiers.
pub const TIER_WEIGHTS: [f64; 3] = [1.0, 0.6, 0.3];

/// Hidden-stem tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HiddenTier {
    Principal,
    Middle,
    Residual,
}

/// All tiers in order.
pub const ALL_TIERS: [HiddenTier; 3] = [
    HiddenTier::Principal,
    HiddenTier::Middle,
    HiddenTier::Residual,
];

impl HiddenTier {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One hidden stem with its tier and weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub tier: HiddenTier,
    pub weight: f64,
}

const HIDDEN_ZI: &[Stem] = &[Gui];
const HIDDEN_CHOU: &[Stem] = &[Ji, Gui, Xin];
const HIDDEN_YIN: &[Stem] = &[Jia, Bing, Wu];
const HIDDEN_MAO: &[Stem] = &[Yi];
const HIDDEN_CHEN: &[Stem] = &[Wu, Yi, Gui];
const HIDDEN_SI: &[Stem] = &[Bing, Geng, Wu];
const HIDDEN_WU: &[Stem] = &[Ding, Ji];
const HIDDEN_WEI: &[Stem] = &[Ji, Ding, Yi];
const HIDDEN_SHEN: &[Stem] = &[Geng, Ren, Wu];
const HIDDEN_YOU: &[Stem] = &[Xin];
const HIDDEN_XU: &[Stem] = &[Wu, Xin, Ding];
const HIDDEN_HAI: &[Stem] = &[Ren, Jia];

const HIDDEN_TABLE: [&[Stem]; 12] = [
    HIDDEN_ZI,
    HIDDEN_CHOU,
    HIDDEN_YIN,
    HIDDEN_MAO,
    HIDDEN_CHEN,
    HIDDEN_SI,
    HIDDEN_WU,
    HIDDEN_WEI,
    HIDDEN_SHEN,
    HIDDEN_YOU,
    HIDDEN_XU,
    HIDDEN_HAI,
];

/// Hidden stems of a branch, principal first.
pub const fn hidden_stems(branch: Branch) -> &'static [Stem] {
    HIDDEN_TABLE[branch.index() as usize]
}

/// Hidden stems of a branch with tiers and weights from `tier_weights`.
pub fn hidden_stem_set_weighted(branch: Branch, tier_weights: &[f64; 3]) -> Vec<HiddenStem> {
    hidden_stems(branch)
        .iter()
        .zip(ALL_TIERS)
        .map(|(&stem, tier)| HiddenStem {
            stem,
            tier,
            weight: tier_weights[tier.index()],
        })
        .collect()
}

/// Hidden stems of a branch with the default [`TIER_WEIGHTS`].
pub fn hidden_stem_set(branch: Branch) -> Vec<HiddenStem> {
    hidden_stem_set_weighted(branch, &TIER_WEIGHTS)
}
