//! Shannon entropy of a guess over a candidate set
//!
//! Partitions the candidates by the feedback the guess would receive and
//! measures how evenly it splits them.

use super::candidates::{all_codes, filter_candidates};
use crate::core::{Code, Feedback, evaluate};
use crate::game::HistoryEntry;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// How informative a guess is against a candidate set
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedbacks the guess can receive
    pub outcomes: usize,
}

/// Count candidates by the feedback `guess` would receive against each
#[must_use]
pub fn partition(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();
    for candidate in candidates {
        *counts.entry(evaluate(guess, candidate).feedback).or_insert(0) += 1;
    }
    counts
}

/// H = -Σ p * log₂(p) over a feedback distribution
///
/// # Properties
/// - Returns 0.0 for a certain outcome
/// - Maximized for a uniform distribution
#[must_use]
pub fn shannon_entropy<S>(counts: &std::collections::HashMap<Feedback, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy, expected remaining and worst case for `guess`
///
/// # Examples
/// ```
/// use braincode::analysis::{all_codes, calculate_metrics};
///
/// let codes = all_codes();
/// let metrics = calculate_metrics(&"bbgg".parse().unwrap(), &codes);
/// assert!(metrics.entropy > 2.0);
/// assert!(metrics.max_partition < codes.len());
/// ```
#[must_use]
pub fn calculate_metrics(guess: &Code, candidates: &[Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            outcomes: 0,
        };
    }

    let counts = partition(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining = counts
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition: counts.values().copied().max().unwrap_or(0),
        outcomes: counts.len(),
    }
}

/// Best guess to play next, by entropy against the remaining candidates
///
/// Every code is a legal guess, including ones already ruled out. When only
/// one candidate is left it is returned directly. Returns `None` if the
/// history admits no secret at all.
#[must_use]
pub fn suggest_guess(history: &[HistoryEntry]) -> Option<(Code, GuessMetrics)> {
    let guess_pool = all_codes();
    let candidates = filter_candidates(&guess_pool, history);

    match candidates.as_slice() {
        [] => None,
        [only] => Some((*only, calculate_metrics(only, &candidates))),
        _ => select_best_guess(&guess_pool, &candidates),
    }
}

/// Highest-entropy guess from `guess_pool`, preferring a possible secret on ties
#[must_use]
pub fn select_best_guess(guess_pool: &[Code], candidates: &[Code]) -> Option<(Code, GuessMetrics)> {
    guess_pool
        .par_iter()
        .map(|guess| {
            let metrics = calculate_metrics(guess, candidates);
            let possible = candidates.contains(guess);
            (*guess, metrics, possible)
        })
        .max_by(|(_, a, a_possible), (_, b, b_possible)| {
            a.entropy
                .total_cmp(&b.entropy)
                .then(a_possible.cmp(b_possible))
        })
        .map(|(guess, metrics, _)| (guess, metrics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Round, ScriptedColors};

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn entropy_of_uniform_distribution() {
        let mut uniform = FxHashMap::default();
        uniform.insert(Feedback::new(0, 0), 25);
        uniform.insert(Feedback::new(1, 0), 25);
        uniform.insert(Feedback::new(0, 1), 25);
        uniform.insert(Feedback::new(2, 0), 25);

        assert!((shannon_entropy(&uniform) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn entropy_of_certain_outcome_is_zero() {
        let mut certain = FxHashMap::default();
        certain.insert(Feedback::PERFECT, 10);
        assert!(shannon_entropy(&certain).abs() < f64::EPSILON);
        assert!(shannon_entropy(&FxHashMap::default()).abs() < f64::EPSILON);
    }

    #[test]
    fn partition_covers_all_candidates() {
        let codes = all_codes();
        let counts = partition(&code("bgro"), &codes);
        assert_eq!(counts.values().sum::<usize>(), codes.len());
        assert_eq!(counts.get(&Feedback::PERFECT), Some(&1));
    }

    #[test]
    fn metrics_are_bounded() {
        let codes = all_codes();
        for guess in ["bbbb", "bbgg", "bgro"] {
            let metrics = calculate_metrics(&code(guess), &codes);
            assert!(metrics.entropy > 0.0);
            assert!(metrics.entropy <= (codes.len() as f64).log2());
            assert!(metrics.expected_remaining >= 1.0);
            assert!(metrics.expected_remaining <= codes.len() as f64);
            assert!(metrics.max_partition <= codes.len());
            assert!(metrics.outcomes >= 2);
        }
    }

    #[test]
    fn varied_guess_beats_monochrome() {
        let codes = all_codes();
        let mono = calculate_metrics(&code("bbbb"), &codes);
        let varied = calculate_metrics(&code("bbgg"), &codes);
        assert!(varied.entropy > mono.entropy);
    }

    #[test]
    fn empty_candidates() {
        let metrics = calculate_metrics(&code("bbbb"), &[]);
        assert_eq!(metrics.max_partition, 0);
        assert_eq!(metrics.outcomes, 0);
    }

    #[test]
    fn suggestion_after_win_is_the_secret() {
        let secret = code("prok");
        let mut round = Round::start(&mut ScriptedColors::from_code(secret));
        round.submit(&secret).unwrap();

        let (guess, metrics) = suggest_guess(round.history()).unwrap();
        assert_eq!(guess, secret);
        assert!(metrics.entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn select_best_guess_prefers_informative_codes() {
        let pool = [code("bbbb"), code("bbgg")];
        let candidates = all_codes();
        let (best, _) = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best, code("bbgg"));
    }

    #[test]
    fn select_best_guess_empty_pool() {
        assert!(select_best_guess(&[], &all_codes()).is_none());
    }
}
