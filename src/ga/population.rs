//! Generational replacement.
//!
//! One call to [`next_generation`] turns the current population and its
//! penalty reports into the next population: the lowest-penalty timetables
//! survive unchanged as elites, and the remaining slots are filled with
//! mutated offspring of selected parents.

use rand::Rng;

use crate::ga::chromosome::Timetable;
use crate::ga::config::SearchConfig;
use crate::ga::fitness::PenaltyReport;
use crate::ga::operators;
use crate::models::ProblemDefinition;

/// Picks two parent indices with the configured selection strategy.
///
/// The draws are independent, so both indices may refer to the same
/// timetable.
pub fn select_parents<R: Rng>(
    reports: &[PenaltyReport],
    config: &SearchConfig,
    rng: &mut R,
) -> (usize, usize) {
    let first = config.selection.select(reports, rng);
    let second = config.selection.select(reports, rng);
    (first, second)
}

/// Breeds the next population from the current one.
///
/// The `config.elite_count()` lowest-penalty timetables are copied over
/// first; a stable sort keeps earlier individuals ahead on penalty ties.
/// Offspring then fill the population back up to `config.population_size`:
/// each is a crossover child with probability `config.crossover_rate`
/// (otherwise a clone of the first parent) and is mutated per assignment at
/// `config.mutation_rate`.
pub fn next_generation<R: Rng>(
    population: &[Timetable],
    reports: &[PenaltyReport],
    problem: &ProblemDefinition,
    config: &SearchConfig,
    rng: &mut R,
) -> Vec<Timetable> {
    debug_assert_eq!(population.len(), reports.len());

    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by_key(|&i| reports[i].penalty);

    let elite_count = config.elite_count().min(population.len());
    let mut next: Vec<Timetable> = order[..elite_count]
        .iter()
        .map(|&i| population[i].clone())
        .collect();

    while next.len() < config.population_size {
        let (first, second) = select_parents(reports, config, rng);
        let mut child = if rng.random_range(0.0..1.0) < config.crossover_rate {
            config
                .crossover
                .recombine(&population[first], &population[second], rng)
        } else {
            population[first].clone()
        };
        operators::mutate(&mut child, problem, config.mutation_rate, rng);
        next.push(child);
    }

    next
}
