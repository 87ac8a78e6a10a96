//! Command-line timetable search.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use timetabler::ga::{SearchConfig, SearchDriver};
use timetabler::models::ProblemDefinition;
use timetabler::{render, validation};

/// Evolves weekly course timetables with a genetic algorithm.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of timetables in the population.
    #[arg(long, default_value_t = 50)]
    population_size: usize,

    /// Number of generations to evolve.
    #[arg(long, default_value_t = 100)]
    generations: usize,

    /// Path to a JSON problem definition; omit to use the built-in sample campus.
    #[arg(long)]
    problem: Option<PathBuf>,

    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate timetables in parallel.
    #[arg(long)]
    parallel: bool,

    /// Print the week grid in addition to the schedule table.
    #[arg(long)]
    visualize: bool,

    /// Write an SVG rendition of the champion to this path.
    #[arg(long, value_name = "PATH")]
    save_image: Option<PathBuf>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let problem = match &cli.problem {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read problem file {}", path.display()))?;
            ProblemDefinition::from_json(&text)
                .with_context(|| format!("cannot parse problem file {}", path.display()))?
        }
        None => ProblemDefinition::sample(),
    };

    if let Err(errors) = validation::validate_problem(&problem) {
        for error in &errors {
            eprintln!("problem error: {error}");
        }
        bail!(
            "problem definition failed validation with {} error(s)",
            errors.len()
        );
    }

    let mut config = SearchConfig::default()
        .with_population_size(cli.population_size)
        .with_max_generations(cli.generations)
        .with_parallel(cli.parallel);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut driver = SearchDriver::new(&problem, config)?;
    let result = driver.run();

    println!(
        "Champion penalty {} ({}), found in generation {} of {}",
        result.report.penalty,
        if result.is_feasible() {
            "feasible"
        } else {
            "infeasible"
        },
        result.generation_found,
        result.generations_run,
    );
    println!(
        "Violations: {} teacher, {} room, {} overlap, {} lab, {} preference",
        result.report.teacher_conflicts,
        result.report.room_conflicts,
        result.report.slot_overlaps,
        result.report.lab_mismatches,
        result.report.preference_misses,
    );
    match result.first_feasible_generation {
        Some(gen) => println!("First feasible timetable appeared in generation {gen}"),
        None => println!("No feasible timetable found; best effort shown"),
    }
    println!();
    print!("{}", render::table(&result.champion, &problem));

    if cli.visualize {
        println!();
        print!("{}", render::grid(&result.champion, &problem));
    }

    if let Some(path) = &cli.save_image {
        let image = render::svg(&result.champion, &problem, &result.report);
        fs::write(path, image)
            .with_context(|| format!("cannot write image to {}", path.display()))?;
        println!("Saved SVG to {}", path.display());
    }

    Ok(())
}
