//! Guess evaluation
//!
//! Scores a guess against a secret with the standard two-pass rule: exact
//! matches are counted and removed first, then each remaining guess color
//! consumes the lowest-index remaining secret slot of the same color.

use super::code::{CODE_LENGTH, Code};
use super::color::Color;
use super::error::{GameError, InputError};
use super::feedback::{Feedback, Peg, Pegs};

/// Result of scoring one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation {
    pub feedback: Feedback,
    pub pegs: Pegs,
}

/// Score `guess` against `secret`
///
/// # Algorithm
/// 1. First pass: mark exact matches (black) and clear both slots
/// 2. Second pass: for each uncleared guess slot, left to right, clear the
///    first uncleared secret slot of the same color (white), or mark the
///    slot absent
///
/// # Examples
/// ```
/// use braincode::core::{Code, Peg, evaluate};
///
/// let secret: Code = "blue green red orange".parse().unwrap();
/// let guess: Code = "green blue red orange".parse().unwrap();
/// let result = evaluate(&guess, &secret);
///
/// assert_eq!((result.feedback.black, result.feedback.white), (2, 2));
/// assert_eq!(
///     result.pegs.as_array(),
///     &[Peg::Present, Peg::Present, Peg::Exact, Peg::Exact]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Code, secret: &Code) -> Evaluation {
    let mut guess_left: [Option<Color>; CODE_LENGTH] = guess.colors().map(Some);
    let mut secret_left: [Option<Color>; CODE_LENGTH] = secret.colors().map(Some);
    let mut pegs = [Peg::Absent; CODE_LENGTH];
    let mut black = 0u8;
    let mut white = 0u8;

    // First pass: exact matches
    // Allow: Index needed to clear guess_left[i], secret_left[i] and set pegs[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..CODE_LENGTH {
        if guess_left[i] == secret_left[i] {
            black += 1;
            pegs[i] = Peg::Exact;
            guess_left[i] = None;
            secret_left[i] = None;
        }
    }

    // Second pass: colors present elsewhere
    for (i, slot) in guess_left.iter().enumerate() {
        let Some(color) = *slot else { continue };

        if let Some(found) = secret_left.iter_mut().find(|s| **s == Some(color)) {
            white += 1;
            pegs[i] = Peg::Present;
            *found = None;
        }
    }

    Evaluation {
        feedback: Feedback::new(black, white),
        pegs: Pegs(pegs),
    }
}

/// Score raw slots, validating them first
///
/// # Errors
/// Returns `GameError::InvalidInput` if either sequence is not exactly
/// [`CODE_LENGTH`] long or any guess slot is unset.
pub fn evaluate_slots(guess: &[Option<Color>], secret: &[Color]) -> Result<Evaluation, GameError> {
    if secret.len() != CODE_LENGTH {
        return Err(InputError::WrongLength {
            expected: CODE_LENGTH,
            actual: secret.len(),
        }
        .into());
    }

    let guess = Code::from_slots(guess)?;
    let secret = Code::from_colors(secret)?;
    Ok(evaluate(&guess, &secret))
}
