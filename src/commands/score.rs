//! Score command
//!
//! Evaluates one guess against a given secret, without playing a round.

use crate::core::{Code, Evaluation, evaluate};
use anyhow::{Context, Result};

/// Result of scoring a guess
#[derive(Debug)]
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub evaluation: Evaluation,
}

/// Parse both codes and score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either code does not parse.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult> {
    let secret: Code = secret
        .parse()
        .with_context(|| format!("Invalid secret '{secret}'"))?;
    let guess: Code = guess
        .parse()
        .with_context(|| format!("Invalid guess '{guess}'"))?;

    Ok(ScoreResult {
        secret,
        guess,
        evaluation: evaluate(&guess, &secret),
    })
}
