//! Code space enumeration and filtering

use crate::core::{CODE_LENGTH, Code, Color, Feedback, evaluate};
use crate::game::HistoryEntry;
use rayon::prelude::*;

/// Number of distinct codes (7^4)
pub const CODE_SPACE: usize = Color::COUNT.pow(CODE_LENGTH as u32);

/// Every possible code, in lexicographic color order
///
/// # Examples
/// ```
/// use braincode::analysis::{CODE_SPACE, all_codes};
///
/// let codes = all_codes();
/// assert_eq!(codes.len(), CODE_SPACE);
/// assert_eq!(codes[0].letters(), "bbbb");
/// assert_eq!(codes[CODE_SPACE - 1].letters(), "kkkk");
/// ```
#[must_use]
pub fn all_codes() -> Vec<Code> {
    (0..CODE_SPACE).map(code_from_rank).collect()
}

/// Decode a rank in `0..CODE_SPACE`; the first slot is the most significant digit
fn code_from_rank(rank: usize) -> Code {
    let mut colors = [Color::Blue; CODE_LENGTH];
    let mut rest = rank;
    for slot in colors.iter_mut().rev() {
        *slot = Color::ALL[rest % Color::COUNT];
        rest /= Color::COUNT;
    }
    Code::new(colors)
}

/// Whether `candidate` as the secret would have produced `feedback` for `guess`
#[inline]
#[must_use]
pub fn is_consistent(candidate: &Code, guess: &Code, feedback: Feedback) -> bool {
    evaluate(guess, candidate).feedback == feedback
}

/// Codes that could still be the secret given every recorded black/white count
#[must_use]
pub fn consistent_codes(history: &[HistoryEntry]) -> Vec<Code> {
    filter_candidates(&all_codes(), history)
}

/// Narrow `candidates` to those matching every history entry
#[must_use]
pub fn filter_candidates(candidates: &[Code], history: &[HistoryEntry]) -> Vec<Code> {
    candidates
        .par_iter()
        .filter(|candidate| {
            history
                .iter()
                .all(|entry| is_consistent(candidate, entry.guess(), entry.feedback()))
        })
        .copied()
        .collect()
}
