//! Special markers (shensha).
//!
//! Each marker is a pure predicate over one pillar and a few reference
//! points of the chart: the day stem, the year stem and branch, and the
//! month branch. Branch-group markers key on the three-harmony group of the
//! year branch (申子辰, 巳酉丑, 寅午戌, 亥卯未, which is `branch mod 4`) or
//! on its seasonal group (亥子丑, 寅卯辰, 巳午未, 申酉戌).
//!
//! Markers whose reference point is missing from the chart never apply.

use serde::ser::{Serialize, Serializer};

use crate::cycle::Branch::{Chen, Chou, Hai, Mao, Shen, Si, Wei, Wu, Xu, Yin, You, Zi};
use crate::cycle::{Branch, Stem};
use crate::pillar::{Chart, Pillar, Position};

/// A special marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum Marker {
    /// 天乙贵人, by day stem.
    NobleMan,
    /// 禄神, by day stem.
    Prosperity,
    /// 羊刃, by day stem.
    Blade,
    /// 文昌, by year stem.
    Scholar,
    /// 桃花, by year branch group.
    PeachBlossom,
    /// 华盖, by year branch group.
    Canopy,
    /// 将星, by year branch group.
    GeneralStar,
    /// 驿马, by year branch group.
    TravelingHorse,
    /// 劫煞, by year branch group.
    Robbery,
    /// 灾煞, by year branch group.
    Calamity,
    /// 孤辰, by year branch season.
    Solitary,
    /// 寡宿, by year branch season.
    Widow,
    /// 天德, by month branch.
    HeavenlyVirtue,
    /// 月德, by month branch group.
    MonthlyVirtue,
    /// 天医, by month branch.
    Physician,
    /// 天喜, by year branch.
    HeavenlyJoy,
    /// 魁罡, intrinsic to the pillar.
    KuiGang,
}

/// All markers in reporting order.
pub const ALL_MARKERS: [Marker; 17] = [
    Marker::NobleMan,
    Marker::Prosperity,
    Marker::Blade,
    Marker::Scholar,
    Marker::PeachBlossom,
    Marker::Canopy,
    Marker::GeneralStar,
    Marker::TravelingHorse,
    Marker::Robbery,
    Marker::Calamity,
    Marker::Solitary,
    Marker::Widow,
    Marker::HeavenlyVirtue,
    Marker::MonthlyVirtue,
    Marker::Physician,
    Marker::HeavenlyJoy,
    Marker::KuiGang,
];

/// Whether a marker is read as helpful, harmful, or either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum MarkerNature {
    Auspicious,
    Inauspicious,
    Mixed,
}

impl Marker {
    /// 0-based index in [`ALL_MARKERS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NobleMan => "Noble Man",
            Self::Prosperity => "Prosperity",
            Self::Blade => "Blade",
            Self::Scholar => "Scholar",
            Self::PeachBlossom => "Peach Blossom",
            Self::Canopy => "Canopy",
            Self::GeneralStar => "General Star",
            Self::TravelingHorse => "Traveling Horse",
            Self::Robbery => "Robbery",
            Self::Calamity => "Calamity",
            Self::Solitary => "Solitary",
            Self::Widow => "Widow",
            Self::HeavenlyVirtue => "Heavenly Virtue",
            Self::MonthlyVirtue => "Monthly Virtue",
            Self::Physician => "Physician",
            Self::HeavenlyJoy => "Heavenly Joy",
            Self::KuiGang => "Kui Gang",
        }
    }

    /// Chinese label; the key handed to a marker catalog.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::NobleMan => "天乙贵人",
            Self::Prosperity => "禄神",
            Self::Blade => "羊刃",
            Self::Scholar => "文昌",
            Self::PeachBlossom => "桃花",
            Self::Canopy => "华盖",
            Self::GeneralStar => "将星",
            Self::TravelingHorse => "驿马",
            Self::Robbery => "劫煞",
            Self::Calamity => "灾煞",
            Self::Solitary => "孤辰",
            Self::Widow => "寡宿",
            Self::HeavenlyVirtue => "天德",
            Self::MonthlyVirtue => "月德",
            Self::Physician => "天医",
            Self::HeavenlyJoy => "天喜",
            Self::KuiGang => "魁罡",
        }
    }

    /// How the marker is usually read.
    pub const fn nature(self) -> MarkerNature {
        match self {
            Self::NobleMan
            | Self::Prosperity
            | Self::Scholar
            | Self::TravelingHorse
            | Self::HeavenlyVirtue
            | Self::MonthlyVirtue
            | Self::Physician
            | Self::HeavenlyJoy => MarkerNature::Auspicious,
            Self::Blade
            | Self::Robbery
            | Self::Calamity
            | Self::Solitary
            | Self::Widow
            | Self::KuiGang => MarkerNature::Inauspicious,
            Self::PeachBlossom | Self::Canopy | Self::GeneralStar => MarkerNature::Mixed,
        }
    }

    /// Whether this marker falls on `pillar` under `basis`.
    pub fn applies(self, basis: &MarkerBasis, pillar: Pillar) -> bool {
        let b = pillar.branch;
        match self {
            Self::NobleMan => basis
                .day_stem
                .is_some_and(|d| NOBLE_MAN[d.index() as usize].contains(&b)),
            Self::Prosperity => basis
                .day_stem
                .is_some_and(|d| PROSPERITY[d.index() as usize] == b),
            Self::Blade => basis.day_stem.is_some_and(|d| BLADE[d.index() as usize] == b),
            Self::Scholar => basis
                .year_stem
                .is_some_and(|y| SCHOLAR[y.index() as usize] == b),
            Self::PeachBlossom => by_harmony_group(basis.year_branch, &PEACH_BLOSSOM, b),
            Self::Canopy => by_harmony_group(basis.year_branch, &CANOPY, b),
            Self::GeneralStar => by_harmony_group(basis.year_branch, &GENERAL_STAR, b),
            Self::TravelingHorse => by_harmony_group(basis.year_branch, &TRAVELING_HORSE, b),
            Self::Robbery => by_harmony_group(basis.year_branch, &ROBBERY, b),
            Self::Calamity => by_harmony_group(basis.year_branch, &CALAMITY, b),
            Self::Solitary => basis
                .year_branch
                .is_some_and(|y| SOLITARY[seasonal_group(y)] == b),
            Self::Widow => basis
                .year_branch
                .is_some_and(|y| WIDOW[seasonal_group(y)] == b),
            Self::HeavenlyVirtue => basis.month_branch.is_some_and(|m| {
                match HEAVENLY_VIRTUE[m.index() as usize] {
                    VirtueTarget::Stem(s) => s == pillar.stem,
                    VirtueTarget::Branch(t) => t == b,
                }
            }),
            Self::MonthlyVirtue => basis
                .month_branch
                .is_some_and(|m| MONTHLY_VIRTUE[harmony_group(m)] == pillar.stem),
            Self::Physician => basis.month_branch.is_some_and(|m| m.offset(-1) == b),
            Self::HeavenlyJoy => basis
                .year_branch
                .is_some_and(|y| Branch::from_index(9 - y.index() as i32) == b),
            Self::KuiGang => KUI_GANG.contains(&pillar),
        }
    }
}

// ── Tables ──────────────────────────────────────────────────────────────

/// Noble-man branches by day stem.
const NOBLE_MAN: [[Branch; 2]; 10] = [
    [Chou, Wei],
    [Zi, Shen],
    [Hai, You],
    [Hai, You],
    [Chou, Wei],
    [Zi, Shen],
    [Chou, Wei],
    [Wu, Yin],
    [Si, Mao],
    [Si, Mao],
];

/// Prosperity (lu) branch by day stem.
const PROSPERITY: [Branch; 10] = [Yin, Mao, Si, Wu, Si, Wu, Shen, You, Hai, Zi];

/// Blade branch by day stem.
const BLADE: [Branch; 10] = [Mao, Yin, Wu, Si, Wu, Si, You, Shen, Zi, Hai];

/// Scholar branch by year stem.
const SCHOLAR: [Branch; 10] = [Si, Si, Shen, Shen, Shen, Shen, Hai, Hai, Yin, Yin];

// Indexed by three-harmony group: 申子辰, 巳酉丑, 寅午戌, 亥卯未.
const PEACH_BLOSSOM: [Branch; 4] = [You, Wu, Mao, Zi];
const CANOPY: [Branch; 4] = [Chen, Chou, Xu, Wei];
const GENERAL_STAR: [Branch; 4] = [Zi, You, Wu, Mao];
const TRAVELING_HORSE: [Branch; 4] = [Yin, Hai, Shen, Si];
const ROBBERY: [Branch; 4] = [Si, Yin, Hai, Shen];
const CALAMITY: [Branch; 4] = [Wu, Mao, Zi, You];
const MONTHLY_VIRTUE: [Stem; 4] = [Stem::Ren, Stem::Geng, Stem::Bing, Stem::Jia];

// Indexed by seasonal group: 亥子丑, 寅卯辰, 巳午未, 申酉戌.
const SOLITARY: [Branch; 4] = [Yin, Si, Shen, Hai];
const WIDOW: [Branch; 4] = [Xu, Chou, Chen, Wei];

/// Heavenly virtue names a stem in most months and a branch in four.
#[derive(Debug, Clone, Copy)]
enum VirtueTarget {
    Stem(Stem),
    Branch(Branch),
}

/// Heavenly virtue by month branch (子 .. 亥).
const HEAVENLY_VIRTUE: [VirtueTarget; 12] = [
    VirtueTarget::Branch(Si),
    VirtueTarget::Stem(Stem::Geng),
    VirtueTarget::Stem(Stem::Ding),
    VirtueTarget::Branch(Shen),
    VirtueTarget::Stem(Stem::Ren),
    VirtueTarget::Stem(Stem::Xin),
    VirtueTarget::Branch(Hai),
    VirtueTarget::Stem(Stem::Jia),
    VirtueTarget::Stem(Stem::Gui),
    VirtueTarget::Branch(Yin),
    VirtueTarget::Stem(Stem::Bing),
    VirtueTarget::Stem(Stem::Yi),
];

const KUI_GANG: [Pillar; 4] = [
    Pillar::new(Stem::Geng, Xu),
    Pillar::new(Stem::Geng, Chen),
    Pillar::new(Stem::Wu, Xu),
    Pillar::new(Stem::Ren, Chen),
];

const fn harmony_group(branch: Branch) -> usize {
    (branch.index() % 4) as usize
}

const fn seasonal_group(branch: Branch) -> usize {
    ((branch.index() + 1) % 12 / 3) as usize
}

fn by_harmony_group(reference: Option<Branch>, table: &[Branch; 4], branch: Branch) -> bool {
    reference.is_some_and(|r| table[harmony_group(r)] == branch)
}

// ── Basis and sets ──────────────────────────────────────────────────────

/// Reference points of a chart that markers are read against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct MarkerBasis {
    pub day_stem: Option<Stem>,
    pub year_stem: Option<Stem>,
    pub year_branch: Option<Branch>,
    pub month_branch: Option<Branch>,
}

impl MarkerBasis {
    /// Reference points taken from the chart's year, month and day pillars.
    pub fn from_chart(chart: &Chart) -> Self {
        let year = chart.pillar(Position::Year);
        Self {
            day_stem: chart.day_stem(),
            year_stem: year.map(|p| p.stem),
            year_branch: year.map(|p| p.branch),
            month_branch: chart.month_branch(),
        }
    }

    /// Basis with only a day stem; year- and month-keyed markers never apply.
    pub const fn day_only(day_stem: Stem) -> Self {
        Self {
            day_stem: Some(day_stem),
            year_stem: None,
            year_branch: None,
            month_branch: None,
        }
    }
}

/// A set of markers, serialized as a list of variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MarkerSet(u32);

impl MarkerSet {
    pub const EMPTY: Self = Self(0);

    /// True when `marker` is a member.
    pub const fn contains(self, marker: Marker) -> bool {
        self.0 & (1 << marker.index()) != 0
    }

    /// Same set plus `marker`.
    pub const fn with(self, marker: Marker) -> Self {
        Self(self.0 | (1 << marker.index()))
    }

    /// Number of members.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// True when no marker is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in [`ALL_MARKERS`] order.
    pub fn iter(self) -> impl Iterator<Item = Marker> {
        ALL_MARKERS.into_iter().filter(move |&m| self.contains(m))
    }

    /// Chinese labels of the members, for a marker catalog.
    pub fn labels(self) -> Vec<&'static str> {
        self.iter().map(Marker::symbol).collect()
    }
}

impl FromIterator<Marker> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl Serialize for MarkerSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Every marker that falls on `pillar`.
pub fn pillar_markers(basis: &MarkerBasis, pillar: Pillar) -> MarkerSet {
    ALL_MARKERS
        .into_iter()
        .filter(|m| m.applies(basis, pillar))
        .collect()
}

/// Markers on one chart position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PositionMarkers {
    pub position: Position,
    pub markers: MarkerSet,
}

/// Markers for every present pillar, in chart order.
pub fn chart_markers(chart: &Chart) -> Vec<PositionMarkers> {
    let basis = MarkerBasis::from_chart(chart);
    chart
        .present()
        .map(|(position, pillar)| PositionMarkers {
            position,
            markers: pillar_markers(&basis, pillar),
        })
        .collect()
}
