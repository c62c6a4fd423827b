use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_base::{
    Chart, ClassicalTenRelations, FortuneCache, FortuneConfig, FortuneTimeline, Pillar,
    ScoringWeights, SelectionCursor, chart_combinations, score_chart, year_to_stem_branch,
};

fn sample_chart() -> Chart {
    let p = |s: &str| s.parse::<Pillar>().unwrap();
    Chart::new(p("庚午"), p("戊寅"), p("甲子"), p("丙寅")).with_birth_year(1990)
}

fn cycle_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle");
    group.bench_function("year_to_stem_branch", |b| {
        b.iter(|| year_to_stem_branch(black_box(2024)))
    });
    group.finish();
}

fn scoring_bench(c: &mut Criterion) {
    let chart = sample_chart();
    let weights = ScoringWeights::default();

    let mut group = c.benchmark_group("scoring");
    group.bench_function("chart_combinations", |b| {
        b.iter(|| chart_combinations(black_box(&chart)))
    });
    group.bench_function("score_chart", |b| {
        b.iter(|| score_chart(black_box(&chart), &weights))
    });
    group.finish();
}

fn fortune_bench(c: &mut Criterion) {
    let chart = sample_chart();
    let config = FortuneConfig::default();

    let mut group = c.benchmark_group("fortune");
    group.bench_function("generate_timeline", |b| {
        b.iter(|| FortuneTimeline::generate(black_box(&chart), &config, &ClassicalTenRelations))
    });
    let timeline = FortuneTimeline::generate(&chart, &config, &ClassicalTenRelations);
    let cursor = SelectionCursor::default().select_decade(2).select_annual(2024);
    group.bench_function("select_annual", |b| {
        let mut cache = FortuneCache::new(&timeline);
        b.iter(|| {
            let view = cache.select(black_box(cursor), &ClassicalTenRelations);
            view.monthly.len()
        })
    });
    group.finish();
}

criterion_group!(benches, cycle_bench, scoring_bench, fortune_bench);
criterion_main!(benches);
