use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ganzhi_base::{
    ALL_ELEMENTS, Branch, Chart, ChartAnalysis, ClassicalTenRelations, EngineConfig,
    FortuneCache, FortuneTimeline, Gender, MarkerSet, Pillar, SelectionCursor, Stem,
    analyze_chart, element_from_label, life_stage, sound_label, void_pair, year_to_stem_branch,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ganzhi", about = "Sexagenary cycle and five-element chart CLI")]
struct Cli {
    /// TOML file overriding scoring weights and fortune constants
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stem and branch of a calendar year
    Year {
        /// Gregorian year (negative for BCE, astronomical numbering)
        year: i32,
    },
    /// Void branch pair of a stem
    Void {
        /// Stem symbol or pinyin
        stem: String,
        /// Branch symbol or pinyin (accepted, does not change the result)
        branch: Option<String>,
    },
    /// Life stage of a branch relative to a stem
    Stage {
        /// Stem symbol or pinyin
        stem: String,
        /// Branch symbol or pinyin
        branch: String,
    },
    /// Sound label of a pillar
    Sound {
        /// Pillar, e.g. 甲子 or "jia zi"
        pillar: String,
    },
    /// Element scores, strength, combinations, voids and stages of a chart
    Analyze {
        #[command(flatten)]
        chart: ChartArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Decade, annual, minor and monthly periods of a chart
    Fortune {
        #[command(flatten)]
        chart: ChartArgs,
        /// Birth year (required for periods)
        #[arg(long)]
        birth_year: i32,
        /// Decade index to expand (0-based)
        #[arg(long)]
        decade: Option<usize>,
        /// Year inside the selected decade to expand into months
        #[arg(long, requires = "decade")]
        annual: Option<i32>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ChartArgs {
    /// Year pillar
    #[arg(long)]
    year_pillar: Option<String>,
    /// Month pillar
    #[arg(long)]
    month_pillar: Option<String>,
    /// Day pillar
    #[arg(long)]
    day_pillar: Option<String>,
    /// Hour pillar
    #[arg(long)]
    hour_pillar: Option<String>,
    /// Gender: male or female
    #[arg(long)]
    gender: Option<String>,
}

fn require_stem(s: &str) -> Stem {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_branch(s: &str) -> Branch {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_pillar(s: &str) -> Pillar {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn load_config(path: Option<&PathBuf>) -> EngineConfig {
    match path {
        Some(p) => {
            debug!(path = %p.display(), "loading engine config");
            EngineConfig::load(p).unwrap_or_else(|e| {
                eprintln!("Failed to load config: {e}");
                std::process::exit(1);
            })
        }
        None => EngineConfig::default(),
    }
}

fn build_chart(args: &ChartArgs) -> Chart {
    let slot = |s: &Option<String>| s.as_deref().map(require_pillar);
    let chart = Chart::from_slots([
        slot(&args.year_pillar),
        slot(&args.month_pillar),
        slot(&args.day_pillar),
        slot(&args.hour_pillar),
    ]);
    match args.gender.as_deref() {
        Some(g) => chart.with_gender(g.parse::<Gender>().unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        })),
        None => chart,
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn opt<T: std::fmt::Display>(v: Option<T>) -> String {
    v.map_or_else(|| "-".to_string(), |x| x.to_string())
}

fn marker_list(markers: MarkerSet) -> String {
    if markers.is_empty() {
        "-".to_string()
    } else {
        markers.labels().join(" ")
    }
}

fn print_analysis(a: &ChartAnalysis) {
    println!("Pillars:");
    for r in &a.pillars {
        println!(
            "  {:<5} {}  {:<6} {}",
            r.position.name(),
            r.pillar,
            opt(r.stem_relation.map(|t| t.symbol())),
            opt(r.sound_label)
        );
    }

    println!("Element scores:");
    for e in ALL_ELEMENTS {
        let s = a.strength.score(e);
        println!(
            "  {:<5} total {:>6.2}  rel {:>5.2}  (stem {:.2}, hidden {:.2}, sound {:.2}, season {:.2}, month {:.2}, comb {:.2})",
            e.name(),
            s.total(),
            a.strength.relative_strength(e),
            s.primary_stem,
            s.hidden_stem,
            s.sound,
            s.seasonal,
            s.dominant_month,
            s.combination
        );
    }

    match &a.assessment {
        Some(s) => {
            let favorable: Vec<&str> = s.favorable.iter().map(|e| e.name()).collect();
            println!(
                "Day master: {} {:.2} -> {} (favorable: {})",
                s.day_element.name(),
                s.relative_strength,
                s.category.name(),
                favorable.join(", ")
            );
        }
        None => println!("Day master: - (no day pillar)"),
    }

    if !a.combinations.is_empty() {
        println!("Combinations:");
        for c in &a.combinations {
            println!(
                "  {} {} -> {} ({:?})",
                c.kind.name(),
                c.members,
                c.element.name(),
                c.completion
            );
        }
    }
    if !a.branch_relations.is_empty() {
        println!("Branch relations:");
        for r in &a.branch_relations {
            let members: String = r.branches.iter().map(|b| b.symbol()).collect();
            println!("  {:?} {}", r.kind, members);
        }
    }

    println!("Voids:");
    for v in &a.voids.per_pillar {
        println!(
            "  {:<5} {}{}",
            v.position.name(),
            v.pair.first,
            v.pair.second
        );
    }

    println!("Markers:");
    for m in &a.markers {
        println!("  {:<5} {}", m.position.name(), marker_list(m.markers));
    }

    println!("Ground stages:");
    for r in &a.pillars {
        println!(
            "  {:<5} {}",
            r.position.name(),
            opt(a.ground_stages.get(r.position).map(|s| s.symbol()))
        );
    }
    println!(
        "Conception: {}  Life palace: {}",
        opt(a.conception_pillar),
        opt(a.life_palace_pillar)
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());

    match cli.command {
        Commands::Year { year } => {
            let (stem, branch) = year_to_stem_branch(year);
            let pillar = Pillar::new(stem, branch);
            println!(
                "{year}: {pillar} ({} {}) - {} {} / {}",
                stem.name(),
                branch.name(),
                stem.polarity().name(),
                stem.element().name(),
                opt(sound_label(pillar))
            );
        }

        Commands::Void { stem, branch } => {
            let stem = require_stem(&stem);
            let branch = branch.as_deref().map_or(Branch::Zi, require_branch);
            let pair = void_pair(stem, branch);
            println!("{stem}: {}{}", pair.first, pair.second);
        }

        Commands::Stage { stem, branch } => {
            let stem = require_stem(&stem);
            let branch = require_branch(&branch);
            let stage = life_stage(stem, branch);
            println!(
                "{stem} on {branch}: {} ({}, stage {}) - {:?}",
                stage.symbol(),
                stage.name(),
                stage.index(),
                stage.nature()
            );
        }

        Commands::Sound { pillar } => {
            let pillar = require_pillar(&pillar);
            match sound_label(pillar) {
                Some(label) => println!(
                    "{pillar}: {label} ({})",
                    opt(element_from_label(label).map(|e| e.name()))
                ),
                None => {
                    eprintln!("No sound label for {pillar}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Analyze { chart, json } => {
            let chart = build_chart(&chart);
            let analysis = analyze_chart(&chart, &config.scoring, &ClassicalTenRelations);
            if json {
                print_json(&analysis);
            } else {
                print_analysis(&analysis);
            }
        }

        Commands::Fortune {
            chart,
            birth_year,
            decade,
            annual,
            json,
        } => {
            let chart = build_chart(&chart).with_birth_year(birth_year);
            let timeline =
                FortuneTimeline::generate(&chart, &config.fortune, &ClassicalTenRelations);
            if timeline.decades().is_empty() {
                eprintln!("No decade periods: a month pillar is required");
                std::process::exit(1);
            }

            let mut cursor = SelectionCursor::default();
            if let Some(d) = decade {
                cursor = cursor.select_decade(d);
            }
            if let Some(y) = annual {
                cursor = cursor.select_annual(y);
            }
            let mut cache = FortuneCache::new(&timeline);
            let view = cache.select(cursor, &ClassicalTenRelations);

            if json {
                #[derive(Serialize)]
                struct FortuneOutput<'a> {
                    timeline: &'a FortuneTimeline,
                    selection: ganzhi_base::SelectionView<'a>,
                }
                print_json(&FortuneOutput {
                    timeline: &timeline,
                    selection: view,
                });
                return;
            }

            println!("Decade periods:");
            for d in timeline.decades() {
                let marker = if view.decade.is_some_and(|s| s.index == d.index) {
                    '*'
                } else {
                    ' '
                };
                println!(
                    "{marker} {:>2}  {}  {}-{}  age {}-{}  {}  {}  {}",
                    d.index,
                    d.pillar,
                    d.start_year,
                    d.end_year,
                    d.start_age,
                    d.end_age,
                    opt(d.annotations.relation.map(|r| r.symbol())),
                    opt(d.annotations.life_stage.map(|s| s.symbol())),
                    marker_list(d.annotations.markers)
                );
            }

            if !view.children.annual.is_empty() {
                println!("Annual / minor periods:");
                for (a, m) in view.children.annual.iter().zip(&view.children.minor) {
                    println!(
                        "  {}  age {:>3}  {}  {:<4} {:<4} {} | minor {}",
                        a.year,
                        a.age,
                        a.pillar,
                        opt(a.annotations.relation.map(|r| r.symbol())),
                        opt(a.annotations.life_stage.map(|s| s.symbol())),
                        marker_list(a.annotations.markers),
                        m.pillar
                    );
                }
            } else if decade.is_some() {
                println!("Selected decade is out of range");
            }

            if !view.monthly.is_empty() {
                println!("Monthly periods:");
                for m in view.monthly {
                    println!(
                        "  {:>2}  {}  from {}-{:02}  {}",
                        m.order,
                        m.pillar,
                        m.start_year,
                        m.start_month,
                        opt(m.annotations.relation.map(|r| r.symbol()))
                    );
                }
            } else if annual.is_some() {
                println!("Selected year is outside the decade");
            }
        }
    }
}
