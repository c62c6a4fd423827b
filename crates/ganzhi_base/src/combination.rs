//! Stem pairs, branch triads/trios, and the other branch relations.
//!
//! Stem pairs (wuhe) and the two branch groupings (sanhe triads, sanhui
//! directional trios) each produce an element and feed the strength score.
//! Harmonies, clashes, harms and punishments between branches are reported
//! alongside but not scored.

use serde::Serialize;

use crate::cycle::{ALL_BRANCHES, Branch, Stem};
use crate::element::Element;
use crate::pillar::Chart;

/// Kind of a scoring combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CombinationKind {
    /// Two stems merging (wuhe).
    StemPair,
    /// Three-harmony branch set (sanhe).
    BranchTriad,
    /// Directional branch set (sanhui).
    BranchTrio,
}

impl CombinationKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::StemPair => "Stem Pair",
            Self::BranchTriad => "Branch Triad",
            Self::BranchTrio => "Branch Trio",
        }
    }
}

/// How much of a pattern is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Completion {
    Full,
    Partial,
}

/// A detected combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinationPattern {
    pub kind: CombinationKind,
    pub element: Element,
    pub completion: Completion,
    /// Display form of the fixed set, e.g. `甲己` or `申子辰`.
    pub members: String,
}

/// A fixed stem pair and its resultant element.
#[derive(Debug, Clone, Copy)]
pub struct StemPairRule {
    pub stems: [Stem; 2],
    pub element: Element,
}

/// A fixed three-branch set and its resultant element.
#[derive(Debug, Clone, Copy)]
pub struct BranchSetRule {
    pub branches: [Branch; 3],
    pub element: Element,
}

/// The five stem pairs in canonical order.
pub const STEM_PAIRS: [StemPairRule; 5] = [
    StemPairRule {
        stems: [Stem::Jia, Stem::Ji],
        element: Element::Earth,
    },
    StemPairRule {
        stems: [Stem::Yi, Stem::Geng],
        element: Element::Metal,
    },
    StemPairRule {
        stems: [Stem::Bing, Stem::Xin],
        element: Element::Water,
    },
    StemPairRule {
        stems: [Stem::Ding, Stem::Ren],
        element: Element::Wood,
    },
    StemPairRule {
        stems: [Stem::Wu, Stem::Gui],
        element: Element::Fire,
    },
];

/// The four three-harmony triads in canonical order.
pub const BRANCH_TRIADS: [BranchSetRule; 4] = [
    BranchSetRule {
        branches: [Branch::Yin, Branch::Wu, Branch::Xu],
        element: Element::Fire,
    },
    BranchSetRule {
        branches: [Branch::Shen, Branch::Zi, Branch::Chen],
        element: Element::Water,
    },
    BranchSetRule {
        branches: [Branch::Hai, Branch::Mao, Branch::Wei],
        element: Element::Wood,
    },
    BranchSetRule {
        branches: [Branch::Si, Branch::You, Branch::Chou],
        element: Element::Metal,
    },
];

/// The four directional trios in canonical order.
pub const BRANCH_TRIOS: [BranchSetRule; 4] = [
    BranchSetRule {
        branches: [Branch::Yin, Branch::Mao, Branch::Chen],
        element: Element::Wood,
    },
    BranchSetRule {
        branches: [Branch::Si, Branch::Wu, Branch::Wei],
        element: Element::Fire,
    },
    BranchSetRule {
        branches: [Branch::Shen, Branch::You, Branch::Xu],
        element: Element::Metal,
    },
    BranchSetRule {
        branches: [Branch::Hai, Branch::Zi, Branch::Chou],
        element: Element::Water,
    },
];

fn branch_set_patterns(
    rules: &[BranchSetRule],
    kind: CombinationKind,
    present: &[Branch],
) -> impl Iterator<Item = CombinationPattern> {
    rules.iter().filter_map(move |rule| {
        let matched = rule
            .branches
            .iter()
            .filter(|&b| present.contains(b))
            .count();
        let completion = match matched {
            3 => Completion::Full,
            2 => Completion::Partial,
            _ => return None,
        };
        Some(CombinationPattern {
            kind,
            element: rule.element,
            completion,
            members: rule.branches.iter().map(|b| b.symbol()).collect(),
        })
    })
}

/// Combinations among the given stems and branches.
///
/// Stem pairs first, then triads, then trios, each in canonical order.
/// Branch sets count distinct members, so a repeated branch never upgrades
/// a partial set.
pub fn detect_combinations(stems: &[Stem], branches: &[Branch]) -> Vec<CombinationPattern> {
    let pairs = STEM_PAIRS.iter().filter_map(|rule| {
        let [a, b] = rule.stems;
        (stems.contains(&a) && stems.contains(&b)).then(|| CombinationPattern {
            kind: CombinationKind::StemPair,
            element: rule.element,
            completion: Completion::Full,
            members: format!("{}{}", a.symbol(), b.symbol()),
        })
    });

    pairs
        .chain(branch_set_patterns(
            &BRANCH_TRIADS,
            CombinationKind::BranchTriad,
            branches,
        ))
        .chain(branch_set_patterns(
            &BRANCH_TRIOS,
            CombinationKind::BranchTrio,
            branches,
        ))
        .collect()
}

/// Combinations among a chart's present pillars.
pub fn chart_combinations(chart: &Chart) -> Vec<CombinationPattern> {
    detect_combinations(&chart.stems(), &chart.branches())
}

// ── Branch relations ────────────────────────────────────────────────────

/// Non-scoring relation between branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BranchRelationKind {
    /// Six harmonies (liuhe).
    Harmony,
    /// Six clashes (liuchong).
    Clash,
    /// Six harms (liuhai).
    Harm,
    /// Three-way punishment (寅巳申, 丑戌未).
    Punishment,
    /// Mutual punishment (子卯).
    MutualPunishment,
    /// Self punishment (辰, 午, 酉, 亥 appearing twice).
    SelfPunishment,
}

/// A detected branch relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchRelation {
    pub kind: BranchRelationKind,
    pub branches: Vec<Branch>,
    /// Resultant element, for harmonies only.
    pub element: Option<Element>,
}

/// The six harmonies and their elements.
pub const HARMONIES: [([Branch; 2], Element); 6] = [
    ([Branch::Zi, Branch::Chou], Element::Earth),
    ([Branch::Yin, Branch::Hai], Element::Wood),
    ([Branch::Mao, Branch::Xu], Element::Fire),
    ([Branch::Chen, Branch::You], Element::Metal),
    ([Branch::Si, Branch::Shen], Element::Water),
    ([Branch::Wu, Branch::Wei], Element::Earth),
];

/// The six harms.
pub const HARMS: [[Branch; 2]; 6] = [
    [Branch::Zi, Branch::Wei],
    [Branch::Chou, Branch::Wu],
    [Branch::Yin, Branch::Si],
    [Branch::Mao, Branch::Chen],
    [Branch::Shen, Branch::Hai],
    [Branch::You, Branch::Xu],
];

const PUNISHMENT_SETS: [[Branch; 3]; 2] = [
    [Branch::Yin, Branch::Si, Branch::Shen],
    [Branch::Chou, Branch::Xu, Branch::Wei],
];

const SELF_PUNISHING: [Branch; 4] = [Branch::Chen, Branch::Wu, Branch::You, Branch::Hai];

/// Whether two branches clash (six apart).
pub fn is_clash(a: Branch, b: Branch) -> bool {
    (a.index() as i32 - b.index() as i32).rem_euclid(12) == 6
}

/// Harmonies, clashes, harms and punishments among `branches`.
///
/// Pair relations are reported once per distinct pair. A three-way
/// punishment is reported when at least two of its members are present.
pub fn detect_branch_relations(branches: &[Branch]) -> Vec<BranchRelation> {
    let mut out = Vec::new();
    let has = |b: &Branch| branches.contains(b);

    for ([a, b], element) in HARMONIES {
        if has(&a) && has(&b) {
            out.push(BranchRelation {
                kind: BranchRelationKind::Harmony,
                branches: vec![a, b],
                element: Some(element),
            });
        }
    }

    for a in ALL_BRANCHES.into_iter().take(6) {
        let b = a.offset(6);
        if has(&a) && has(&b) {
            out.push(BranchRelation {
                kind: BranchRelationKind::Clash,
                branches: vec![a, b],
                element: None,
            });
        }
    }

    for [a, b] in HARMS {
        if has(&a) && has(&b) {
            out.push(BranchRelation {
                kind: BranchRelationKind::Harm,
                branches: vec![a, b],
                element: None,
            });
        }
    }

    for set in PUNISHMENT_SETS {
        let present: Vec<Branch> = set.into_iter().filter(|b| has(b)).collect();
        if present.len() >= 2 {
            out.push(BranchRelation {
                kind: BranchRelationKind::Punishment,
                branches: present,
                element: None,
            });
        }
    }

    if has(&Branch::Zi) && has(&Branch::Mao) {
        out.push(BranchRelation {
            kind: BranchRelationKind::MutualPunishment,
            branches: vec![Branch::Zi, Branch::Mao],
            element: None,
        });
    }

    for b in SELF_PUNISHING {
        if branches.iter().filter(|&&x| x == b).count() >= 2 {
            out.push(BranchRelation {
                kind: BranchRelationKind::SelfPunishment,
                branches: vec![b, b],
                element: None,
            });
        }
    }

    out
}
