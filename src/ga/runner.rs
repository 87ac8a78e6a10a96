//! Evolutionary loop execution.
//!
//! [`SearchDriver`] orchestrates the complete search:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::error::ConfigError;
use crate::ga::chromosome::Timetable;
use crate::ga::config::SearchConfig;
use crate::ga::fitness::{evaluate, PenaltyReport};
use crate::ga::population::next_generation;
use crate::models::ProblemDefinition;

/// What the driver is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Building the initial random population.
    Initializing,
    /// Scoring the current population.
    Evaluating,
    /// Breeding the next population.
    Evolving,
    /// The run has finished.
    Terminated,
}

/// Result of a timetable search.
///
/// Contains the best timetable found, along with statistics about the
/// evolutionary process. Generation 0 is the initial random population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The lowest-penalty timetable seen during the entire run.
    pub champion: Timetable,

    /// The champion's penalty report.
    pub report: PenaltyReport,

    /// Generation that produced the champion.
    pub generation_found: usize,

    /// Number of evolutionary generations executed.
    pub generations_run: usize,

    /// Earliest generation in which any population member was feasible,
    /// or `None` if none ever was.
    pub first_feasible_generation: Option<usize>,

    /// Champion penalty after each generation, starting with the initial
    /// population. Never increases.
    pub penalty_history: Vec<u32>,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

impl SearchResult {
    /// Whether the champion satisfies every hard constraint.
    pub fn is_feasible(&self) -> bool {
        self.report.is_feasible()
    }
}

/// Executes the evolutionary search over timetables.
///
/// The problem is assumed to have passed
/// [`validate_problem`](crate::validation::validate_problem).
///
/// # Usage
///
/// ```
/// use timetabler::ga::{SearchConfig, SearchDriver};
/// use timetabler::models::ProblemDefinition;
///
/// let problem = ProblemDefinition::sample();
/// let config = SearchConfig::default()
///     .with_max_generations(10)
///     .with_seed(42);
/// let mut driver = SearchDriver::new(&problem, config).unwrap();
/// let result = driver.run();
/// assert_eq!(result.champion.len(), problem.course_count());
/// ```
pub struct SearchDriver<'p> {
    problem: &'p ProblemDefinition,
    config: SearchConfig,
    phase: SearchPhase,
}

impl<'p> SearchDriver<'p> {
    /// Creates a driver for the given problem.
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(problem: &'p ProblemDefinition, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            problem,
            config,
            phase: SearchPhase::Initializing,
        })
    }

    /// The driver's current phase.
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Runs the search to completion.
    pub fn run(&mut self) -> SearchResult {
        self.run_with_cancel(None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the search
    /// stops before breeding the next generation and returns the best
    /// timetable found so far.
    pub fn run_with_cancel(&mut self, cancel: Option<Arc<AtomicBool>>) -> SearchResult {
        let problem = self.problem;
        let config = self.config.clone();

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::random()),
        };

        log::info!(
            "starting search: population={}, max_generations={}, selection={:?}",
            config.population_size,
            config.max_generations,
            config.selection
        );

        // 1. Initialize population
        self.phase = SearchPhase::Initializing;
        let mut population: Vec<Timetable> = (0..config.population_size)
            .map(|_| Timetable::random(problem, &mut rng))
            .collect();

        // 2. Evaluate initial population (generation 0)
        self.phase = SearchPhase::Evaluating;
        let mut reports = evaluate_population(&population, problem, &config);

        // 3. Track champion
        let best = best_index(&reports);
        let mut champion = population[best].clone();
        let mut champion_report = reports[best];
        let mut generation_found = 0usize;
        let mut first_feasible_generation = if reports.iter().any(|r| r.is_feasible()) {
            Some(0)
        } else {
            None
        };

        let mut penalty_history = Vec::with_capacity(config.max_generations + 1);
        penalty_history.push(champion_report.penalty);

        let mut generations_run = 0usize;
        let mut cancelled = false;
        let mut qualifying_streak = 0usize;

        // 4. Evolutionary loop
        for gen in 1..=config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    log::info!("search cancelled before generation {gen}");
                    cancelled = true;
                    break;
                }
            }

            self.phase = SearchPhase::Evolving;
            population = next_generation(&population, &reports, problem, &config, &mut rng);

            self.phase = SearchPhase::Evaluating;
            reports = evaluate_population(&population, problem, &config);
            generations_run = gen;

            // Champion only changes on strict improvement, so the earliest
            // generation reaching the final penalty is recorded.
            let best = best_index(&reports);
            if reports[best].penalty < champion_report.penalty {
                champion = population[best].clone();
                champion_report = reports[best];
                generation_found = gen;
            }

            if first_feasible_generation.is_none() && reports.iter().any(|r| r.is_feasible()) {
                first_feasible_generation = Some(gen);
            }

            penalty_history.push(champion_report.penalty);

            if gen % 20 == 0 {
                log::debug!(
                    "generation {gen}: champion penalty {} ({} hard violations)",
                    champion_report.penalty,
                    champion_report.hard_violations()
                );
            }

            if let Some(stop) = config.early_stop {
                if champion_report.is_feasible()
                    && champion_report.penalty <= stop.penalty_threshold
                {
                    qualifying_streak += 1;
                    if qualifying_streak >= stop.patience {
                        log::info!(
                            "early stop at generation {gen}: champion penalty {} within threshold {}",
                            champion_report.penalty,
                            stop.penalty_threshold
                        );
                        break;
                    }
                } else {
                    qualifying_streak = 0;
                }
            }
        }

        self.phase = SearchPhase::Terminated;

        SearchResult {
            champion,
            report: champion_report,
            generation_found,
            generations_run,
            first_feasible_generation,
            penalty_history,
            cancelled,
        }
    }
}

/// Scores every timetable in the population.
///
/// The parallel path maps in index order, so results are identical to the
/// sequential path.
fn evaluate_population(
    population: &[Timetable],
    problem: &ProblemDefinition,
    config: &SearchConfig,
) -> Vec<PenaltyReport> {
    if config.parallel {
        population
            .par_iter()
            .map(|tt| evaluate(tt, problem, &config.weights))
            .collect()
    } else {
        population
            .iter()
            .map(|tt| evaluate(tt, problem, &config.weights))
            .collect()
    }
}

/// Index of the lowest-penalty report; ties go to the earliest index.
fn best_index(reports: &[PenaltyReport]) -> usize {
    reports
        .iter()
        .enumerate()
        .min_by_key(|(_, r)| r.penalty)
        .map(|(i, _)| i)
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::config::EarlyStop;
    use crate::models::{Course, Interval, Room};

    /// One day, one slot, two theory rooms. With a single course every
    /// timetable is feasible; with two courses by the same teacher every
    /// timetable collides.
    fn one_slot_problem(courses: Vec<Course>) -> ProblemDefinition {
        ProblemDefinition {
            days: vec!["Monday".into()],
            morning: vec![Interval::parse("08:00-10:00").unwrap()],
            afternoon: vec![],
            rooms: vec![Room::theory("Room 101"), Room::theory("Room 102")],
            courses,
            single_cohort: true,
            reserve_lab_rooms: false,
        }
    }

    fn small_config() -> SearchConfig {
        SearchConfig::default()
            .with_population_size(20)
            .with_max_generations(30)
            .with_seed(42)
    }

    // ---- Determinism ----

    #[test]
    fn test_same_seed_reproduces_result() {
        let problem = ProblemDefinition::sample();

        let first = SearchDriver::new(&problem, small_config()).unwrap().run();
        let second = SearchDriver::new(&problem, small_config()).unwrap().run();

        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let problem = ProblemDefinition::sample();

        let sequential = SearchDriver::new(&problem, small_config().with_parallel(false))
            .unwrap()
            .run();
        let parallel = SearchDriver::new(&problem, small_config().with_parallel(true))
            .unwrap()
            .run();

        assert_eq!(sequential, parallel);
    }

    // ---- Bookkeeping ----

    #[test]
    fn test_history_tracks_champion() {
        let problem = ProblemDefinition::sample();
        let result = SearchDriver::new(&problem, small_config()).unwrap().run();

        assert_eq!(result.penalty_history.len(), result.generations_run + 1);
        for window in result.penalty_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "champion penalty must never increase: {} > {}",
                window[1],
                window[0]
            );
        }

        assert_eq!(
            result.penalty_history[result.generation_found],
            result.report.penalty
        );
        if result.generation_found > 0 {
            assert!(
                result.penalty_history[result.generation_found - 1] > result.report.penalty,
                "generation_found must be the first generation at the final penalty"
            );
        }
    }

    #[test]
    fn test_single_generation_run() {
        let problem = ProblemDefinition::sample();
        let config = small_config()
            .with_population_size(4)
            .with_max_generations(1);
        let result = SearchDriver::new(&problem, config).unwrap().run();

        assert_eq!(result.generations_run, 1);
        assert_eq!(result.penalty_history.len(), 2);
        assert!(result.generation_found <= 1);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_phase_transitions() {
        let problem = ProblemDefinition::sample();
        let mut driver = SearchDriver::new(&problem, small_config()).unwrap();
        assert_eq!(driver.phase(), SearchPhase::Initializing);

        driver.run();
        assert_eq!(driver.phase(), SearchPhase::Terminated);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = ProblemDefinition::sample();
        let config = SearchConfig::default().with_population_size(1);
        let err = SearchDriver::new(&problem, config).err().unwrap();
        assert_eq!(err, ConfigError::PopulationTooSmall(1));
    }

    // ---- Cancellation ----

    #[test]
    fn test_cancellation_before_first_generation() {
        let problem = ProblemDefinition::sample();
        let cancel = Arc::new(AtomicBool::new(true));

        let mut driver = SearchDriver::new(&problem, small_config()).unwrap();
        let result = driver.run_with_cancel(Some(cancel));

        assert!(result.cancelled);
        assert_eq!(result.generations_run, 0);
        assert_eq!(result.penalty_history.len(), 1);
        assert_eq!(result.generation_found, 0);
        assert_eq!(driver.phase(), SearchPhase::Terminated);
    }

    // ---- Termination quality ----

    #[test]
    fn test_trivial_problem_solved_in_initial_population() {
        let problem = one_slot_problem(vec![Course::new("Calculus I", "Ana")]);
        let config = small_config().with_population_size(4);
        let result = SearchDriver::new(&problem, config).unwrap().run();

        assert!(result.is_feasible());
        assert_eq!(result.report.penalty, 0);
        assert_eq!(result.generation_found, 0);
        assert_eq!(result.first_feasible_generation, Some(0));
    }

    #[test]
    fn test_early_stop_halts_run() {
        let problem = one_slot_problem(vec![Course::new("Calculus I", "Ana")]);
        let config = small_config()
            .with_population_size(4)
            .with_max_generations(100)
            .with_early_stop(EarlyStop::at(10_000));
        let result = SearchDriver::new(&problem, config).unwrap().run();

        assert_eq!(result.generations_run, 1);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_early_stop_patience_waits() {
        let problem = one_slot_problem(vec![Course::new("Calculus I", "Ana")]);
        let config = small_config()
            .with_population_size(4)
            .with_max_generations(100)
            .with_early_stop(EarlyStop::at(10_000).with_patience(3));
        let result = SearchDriver::new(&problem, config).unwrap().run();

        assert_eq!(result.generations_run, 3);
    }

    #[test]
    fn test_unsatisfiable_problem_reports_infeasible() {
        // Two courses by one teacher but only one day-slot: every timetable
        // carries one slot overlap (150) and one teacher conflict (200).
        let problem = one_slot_problem(vec![
            Course::new("Calculus I", "Ana"),
            Course::new("Linear Algebra", "Ana"),
        ]);
        let config = small_config().with_population_size(10);
        let result = SearchDriver::new(&problem, config).unwrap().run();

        assert!(!result.is_feasible());
        assert_eq!(result.report.penalty, 350);
        assert_eq!(result.first_feasible_generation, None);
        assert!(result.penalty_history.iter().all(|&p| p >= 350));
    }

    #[test]
    fn test_sample_campus_becomes_feasible() {
        let problem = ProblemDefinition::sample();
        let config = SearchConfig::default()
            .with_population_size(100)
            .with_max_generations(200)
            .with_seed(42);
        let result = SearchDriver::new(&problem, config).unwrap().run();

        assert!(
            result.is_feasible(),
            "expected a conflict-free timetable for the sample campus, got {:?}",
            result.report
        );
    }
}
