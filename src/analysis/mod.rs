//! Code space analysis
//!
//! Enumerates the 2401 possible codes, narrows them by a round's history,
//! and scores guesses by how much information they are expected to reveal.

mod candidates;
mod metrics;

pub use candidates::{CODE_SPACE, all_codes, consistent_codes, filter_candidates, is_consistent};
pub use metrics::{
    GuessMetrics, calculate_metrics, partition, select_best_guess, shannon_entropy, suggest_guess,
};
