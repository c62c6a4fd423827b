//! Integration tests for fortune-period generation and selection.

use ganzhi_base::fortune::DEFAULT_DECADE_SPAN;
use ganzhi_base::{
    Branch, Chart, ClassicalTenRelations, DecadeSpec, FortuneCache, FortuneConfig,
    FortuneTimeline, Gender, LifeStage, Marker, Pillar, SelectionCursor, Stem, TenRelation,
    TenRelationResolver, year_to_stem_branch,
};

fn p(s: &str) -> Pillar {
    s.parse().unwrap()
}

fn chart() -> Chart {
    Chart::new(p("庚午"), p("戊寅"), p("甲子"), p("丙寅"))
        .with_gender(Gender::Male)
        .with_birth_year(1990)
}

fn timeline() -> FortuneTimeline {
    FortuneTimeline::generate(&chart(), &FortuneConfig::default(), &ClassicalTenRelations)
}

/// A decade starting at Y with no explicit end covers exactly Y..=Y+9 and
/// the next starts at Y+10.
#[test]
fn decade_window_covers_ten_years() {
    let specs = [
        DecadeSpec {
            pillar: p("己卯"),
            start_year: 2000,
            end_year: None,
        },
        DecadeSpec {
            pillar: p("庚辰"),
            start_year: 2000 + DEFAULT_DECADE_SPAN,
            end_year: None,
        },
    ];
    let t = FortuneTimeline::from_decades(&chart(), &specs, &ClassicalTenRelations);
    let children = t.decade_children(0, &ClassicalTenRelations);
    let years: Vec<i32> = children.annual.iter().map(|a| a.year).collect();
    assert_eq!(years, (2000..=2009).collect::<Vec<_>>());
    assert_eq!(t.decades()[1].start_year, t.decades()[0].end_year + 1);
}

/// Annual pillars are the calendar year's own pillar.
#[test]
fn annual_pillars_follow_calendar() {
    let t = timeline();
    let children = t.decade_children(2, &ClassicalTenRelations);
    for a in &children.annual {
        let (stem, branch) = year_to_stem_branch(a.year);
        assert_eq!(a.pillar, Pillar::new(stem, branch), "year {}", a.year);
        assert_eq!(a.age, a.year - 1990);
    }
}

/// Annual periods carry relation, stage and void annotations.
#[test]
fn annual_annotations() {
    let t = timeline();
    // 2024 甲辰 falls in the third decade (2018..=2027).
    let decade = t.find_decade(2024).unwrap();
    assert_eq!(decade, 2);
    let annual = t
        .annual_period(decade, 2024, &ClassicalTenRelations)
        .unwrap();
    assert_eq!(annual.pillar, p("甲辰"));
    assert_eq!(annual.annotations.relation, Some(TenRelation::Companion));
    // 辰 is five steps past 甲's anchor 亥.
    assert_eq!(annual.annotations.life_stage, Some(LifeStage::Decline));
    assert_eq!(
        annual.annotations.void_pair.as_array(),
        [Branch::Xu, Branch::Hai]
    );
    assert_eq!(annual.annotations.sound_label, Some("覆灯火"));
}

/// Minor periods inside a decade continue the sequence from birth.
#[test]
fn minor_periods_continue_sequence() {
    let t = timeline();
    let early = t.early_minor_periods();
    let first_decade = t.decade_children(0, &ClassicalTenRelations);
    let last_early = early.last().unwrap();
    let first_inside = first_decade.minor.first().unwrap();
    assert_eq!(first_inside.year, last_early.year + 1);
    assert_eq!(first_inside.pillar, last_early.pillar.advance(1));
    assert_eq!(first_inside.age, 9);
}

/// Reselecting a decade replaces its children wholesale.
#[test]
fn reselect_replaces_children() {
    let t = timeline();
    let mut cache = FortuneCache::new(&t);

    let c0 = SelectionCursor::default().select_decade(0);
    let first: Vec<i32> = cache
        .select(c0, &ClassicalTenRelations)
        .children
        .annual
        .iter()
        .map(|a| a.year)
        .collect();

    let c1 = c0.select_decade(1);
    let view = cache.select(c1, &ClassicalTenRelations);
    let second: Vec<i32> = view.children.annual.iter().map(|a| a.year).collect();

    assert_eq!(first[0], 1998);
    assert_eq!(second[0], 2008);
    assert!(second.iter().all(|y| !first.contains(y)));
}

/// Selecting the same key twice gives identical output.
#[test]
fn selection_is_deterministic() {
    let t = timeline();
    let cursor = SelectionCursor::default().select_decade(3).select_annual(2030);
    let mut a = FortuneCache::new(&t);
    let mut b = FortuneCache::new(&t);
    let va = a.select(cursor, &ClassicalTenRelations);
    let vb = b.select(cursor, &ClassicalTenRelations);
    assert_eq!(va, vb);
    assert_eq!(
        serde_json::to_string(&va).unwrap(),
        serde_json::to_string(&vb).unwrap()
    );
}

/// Monthly periods start in 寅 and run stems consecutively.
#[test]
fn monthly_sequence() {
    let t = timeline();
    let cursor = SelectionCursor::default().select_decade(2).select_annual(2024);
    let mut cache = FortuneCache::new(&t);
    let view = cache.select(cursor, &ClassicalTenRelations);
    assert_eq!(view.monthly.len(), 12);
    assert_eq!(view.monthly[0].pillar.branch, Branch::Yin);
    for pair in view.monthly.windows(2) {
        assert_eq!(pair[1].pillar.stem, pair[0].pillar.stem.offset(1));
        assert_eq!(pair[1].pillar.branch, pair[0].pillar.branch.offset(1));
    }
    let mut branches: Vec<u8> = view.monthly.iter().map(|m| m.pillar.branch.index()).collect();
    branches.sort_unstable();
    assert_eq!(branches, (0..12).collect::<Vec<u8>>());
}

/// Out-of-range selections yield empty children.
#[test]
fn out_of_range_is_empty() {
    let t = timeline();
    let mut cache = FortuneCache::new(&t);
    let view = cache.select(SelectionCursor::default().select_decade(99), &ClassicalTenRelations);
    assert!(view.decade.is_none());
    assert!(view.children.is_empty());
    assert!(cache.is_empty());
}

/// A cache filled from one timeline never serves its children to another.
#[test]
fn caches_are_bound_to_their_timeline() {
    let a = timeline();
    let later = Chart::new(p("庚午"), p("戊寅"), p("甲子"), p("丙寅")).with_birth_year(2050);
    let b = FortuneTimeline::generate(&later, &FortuneConfig::default(), &ClassicalTenRelations);
    let cursor = SelectionCursor::default().select_decade(0).select_annual(2000);

    let mut cache_a = FortuneCache::new(&a);
    let view_a = cache_a.select(cursor, &ClassicalTenRelations);
    assert_eq!(view_a.monthly.len(), 12);

    // 2000 is outside every decade of the later chart.
    let mut cache_b = FortuneCache::new(&b);
    let view_b = cache_b.select(cursor, &ClassicalTenRelations);
    assert_eq!(view_b.decade.map(|d| d.start_year), Some(2058));
    assert!(view_b.children.annual.iter().all(|y| y.year >= 2058));
    assert!(view_b.annual.is_none());
    assert!(view_b.monthly.is_empty());
    assert_eq!(cache_b.len(), 1);
}

/// Decade annotations report markers against the chart's reference points.
#[test]
fn period_markers_follow_chart() {
    let t = timeline();
    let children = t.decade_children(2, &ClassicalTenRelations);
    // 2022 壬寅: prosperity of the 甲 day; 2023 癸卯: blade.
    let y2022 = children.annual.iter().find(|a| a.year == 2022).unwrap();
    let y2023 = children.annual.iter().find(|a| a.year == 2023).unwrap();
    assert!(y2022.annotations.markers.contains(Marker::Prosperity));
    assert!(y2023.annotations.markers.contains(Marker::Blade));
    // 午 year: solitary falls on 申.
    assert!(!y2022.annotations.markers.contains(Marker::Solitary));
}

/// Traversal is forward regardless of the gender flag.
#[test]
fn traversal_is_forward_for_both_genders() {
    let female = Chart::new(p("庚午"), p("戊寅"), p("甲子"), p("丙寅"))
        .with_gender(Gender::Female)
        .with_birth_year(1990);
    let t_f = FortuneTimeline::generate(&female, &FortuneConfig::default(), &ClassicalTenRelations);
    assert_eq!(t_f.decades(), timeline().decades());
}

/// A custom resolver is consulted for every annotation.
#[test]
fn custom_resolver_is_used() {
    struct AlwaysOfficer;
    impl TenRelationResolver for AlwaysOfficer {
        fn stem_relation(&self, _day: Stem, _target: Stem) -> TenRelation {
            TenRelation::DirectOfficer
        }
    }
    let t = FortuneTimeline::generate(&chart(), &FortuneConfig::default(), &AlwaysOfficer);
    assert!(
        t.decades()
            .iter()
            .all(|d| d.annotations.relation == Some(TenRelation::DirectOfficer))
    );
    let dyn_resolver: &dyn TenRelationResolver = &AlwaysOfficer;
    let children = t.decade_children(0, dyn_resolver);
    assert_eq!(
        children.annual[0].annotations.relation,
        Some(TenRelation::DirectOfficer)
    );
}
