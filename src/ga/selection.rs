//! Parent selection strategies.
//!
//! Selection picks parent indices from the evaluated population. Lower
//! penalty is better; strategies differ in how strongly they prefer it.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

use crate::ga::fitness::PenaltyReport;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use timetabler::ga::Selection;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
///
/// // Roulette wheel (fitness-proportionate)
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Tournament selection: pick `k` individuals at random, keep the one
    /// with the lowest penalty.
    ///
    /// Higher `k` = stronger selection pressure.
    /// - k=2: light pressure (good for diversity)
    /// - k=3-5: moderate pressure (typical default)
    /// - k>5: strong pressure (risk of premature convergence)
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection over the bounded
    /// transform `1 / (1 + penalty)`.
    ///
    /// Every weight is positive, so the wheel total never degenerates;
    /// identical penalties make the pick uniform.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Select a parent index from the evaluated population.
    ///
    /// # Panics
    /// Panics if `reports` is empty.
    pub fn select<R: Rng>(&self, reports: &[PenaltyReport], rng: &mut R) -> usize {
        assert!(!reports.is_empty(), "cannot select from empty population");

        match self {
            Selection::Tournament(k) => tournament(reports, *k, rng),
            Selection::Roulette => roulette(reports, rng),
        }
    }
}

/// Tournament selection: pick k random individuals, return the best.
fn tournament<R: Rng>(reports: &[PenaltyReport], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = reports.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if reports[idx].penalty < reports[best_idx].penalty {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel over `1 / (1 + penalty)` weights.
fn roulette<R: Rng>(reports: &[PenaltyReport], rng: &mut R) -> usize {
    let n = reports.len();
    if n == 1 {
        return 0;
    }

    // Weights are in (0, 1], so the total is always positive.
    let weights: Vec<f64> = reports.iter().map(PenaltyReport::fitness).collect();
    let total: f64 = weights.iter().sum();

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}
