//! Guess analysis command
//!
//! Shows how a guess splits the full code space by feedback.

use crate::analysis::{all_codes, calculate_metrics, partition};
use crate::core::{Code, Feedback};
use anyhow::{Context, Result};

/// Result of analyzing a guess
#[derive(Debug)]
pub struct AnalysisResult {
    pub guess: Code,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    /// Feedback buckets, largest first
    pub distribution: Vec<(Feedback, usize)>,
}

/// Analyze `guess` against every possible secret
///
/// # Errors
///
/// Returns an error if the guess does not parse.
pub fn analyze_guess(guess: &str) -> Result<AnalysisResult> {
    let guess: Code = guess
        .parse()
        .with_context(|| format!("Invalid guess '{guess}'"))?;

    let candidates = all_codes();
    let metrics = calculate_metrics(&guess, &candidates);

    let mut distribution: Vec<(Feedback, usize)> =
        partition(&guess, &candidates).into_iter().collect();
    distribution.sort_by(|(fa, a), (fb, b)| {
        b.cmp(a)
            .then(fb.black.cmp(&fa.black))
            .then(fb.white.cmp(&fa.white))
    });

    Ok(AnalysisResult {
        guess,
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: candidates.len(),
        distribution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::CODE_SPACE;

    #[test]
    fn analyze_valid_guess() {
        let result = analyze_guess("bbgg").unwrap();

        assert_eq!(result.guess.letters(), "bbgg");
        assert_eq!(result.total_candidates, CODE_SPACE);
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(
            result.distribution.iter().map(|(_, n)| n).sum::<usize>(),
            CODE_SPACE
        );
        assert_eq!(result.distribution[0].1, result.max_partition);
    }

    #[test]
    fn distribution_is_sorted_largest_first() {
        let result = analyze_guess("bgro").unwrap();
        for pair in result.distribution.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn analyze_invalid_guess() {
        let err = analyze_guess("zzzz").unwrap_err();
        assert!(err.to_string().contains("Invalid guess 'zzzz'"));
    }
}
