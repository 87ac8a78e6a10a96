//! Search configuration.
//!
//! [`SearchConfig`] holds all parameters that control the evolutionary
//! loop; [`EarlyStop`] describes the optional quality-based termination
//! rule.

use crate::error::ConfigError;
use crate::ga::fitness::PenaltyWeights;
use crate::ga::operators::Crossover;
use crate::ga::selection::Selection;

/// Quality-based termination rule.
///
/// The search stops once the champion has been feasible with a penalty at
/// or below `penalty_threshold` for `patience` consecutive generations.
/// Any generation that misses either condition resets the count.
///
/// ```
/// use timetabler::ga::EarlyStop;
///
/// let stop = EarlyStop::at(0).with_patience(5);
/// assert_eq!(stop.penalty_threshold, 0);
/// assert_eq!(stop.patience, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarlyStop {
    /// Highest champion penalty that counts as good enough.
    pub penalty_threshold: u32,

    /// Consecutive qualifying generations required before stopping.
    pub patience: usize,
}

impl EarlyStop {
    /// Stops the first generation the champion is feasible with a penalty
    /// at or below `threshold`.
    pub fn at(threshold: u32) -> Self {
        Self {
            penalty_threshold: threshold,
            patience: 1,
        }
    }

    /// Sets the number of consecutive qualifying generations required.
    pub fn with_patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }
}

/// Configuration for the timetable search.
///
/// Controls population size, selection strategy, operator rates, penalty
/// weights, termination, and parallelism.
///
/// # Defaults
///
/// ```
/// use timetabler::ga::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use timetabler::ga::{Crossover, SearchConfig, Selection};
///
/// let config = SearchConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Tournament(5))
///     .with_crossover(Crossover::Uniform)
///     .with_mutation_rate(0.05);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of timetables in the population.
    ///
    /// Larger populations increase diversity but slow down each generation.
    /// Typical range: 30–300.
    pub population_size: usize,

    /// Maximum number of generations after the initial population.
    pub max_generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Crossover scheme for recombining parents.
    pub crossover: Crossover,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, a clone of the first parent is used.
    pub crossover_rate: f64,

    /// Probability of redrawing each assignment of an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the population preserved as elites (0.0–1.0).
    ///
    /// The lowest-penalty timetables are copied unchanged to the next
    /// generation. At least one elite always survives.
    pub elite_ratio: f64,

    /// Penalty weights applied by the evaluator.
    pub weights: PenaltyWeights,

    /// Optional quality-based termination rule.
    ///
    /// `None` runs all `max_generations`.
    pub early_stop: Option<EarlyStop>,

    /// Whether to evaluate timetables in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            selection: Selection::default(),
            crossover: Crossover::default(),
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            elite_ratio: 0.2,
            weights: PenaltyWeights::default(),
            early_stop: None,
            parallel: false,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover scheme.
    pub fn with_crossover(mut self, scheme: Crossover) -> Self {
        self.crossover = scheme;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the penalty weights.
    pub fn with_weights(mut self, weights: PenaltyWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the quality-based termination rule.
    pub fn with_early_stop(mut self, stop: EarlyStop) -> Self {
        self.early_stop = Some(stop);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Number of elites carried over each generation.
    ///
    /// Computed as `floor(population_size * elite_ratio)`, but never less
    /// than one.
    pub fn elite_count(&self) -> usize {
        ((self.population_size as f64 * self.elite_ratio) as usize).max(1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("elite_ratio", self.elite_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        if self.elite_count() >= self.population_size {
            return Err(ConfigError::EliteShareTooLarge {
                ratio: self.elite_ratio,
                population_size: self.population_size,
            });
        }
        if self.selection == Selection::Tournament(0) {
            return Err(ConfigError::EmptyTournament);
        }
        if let Some(stop) = &self.early_stop {
            if stop.patience == 0 {
                return Err(ConfigError::ZeroPatience);
            }
        }
        Ok(())
    }
}
