//! Round state machine
//!
//! A [`Round`] owns the secret, the guess being edited, and the history of
//! submitted guesses. It starts [`RoundState::InProgress`] and moves to
//! [`RoundState::Won`] exactly once, on the first fully-correct guess. A won
//! round accepts no further submissions; [`Round::restart`] begins a new one.

use super::share::format_share_text;
use super::source::ColorSource;
use crate::core::{Code, Color, Feedback, GameError, GuessBuffer, Pegs, evaluate};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
}

/// One submitted guess and how it scored
///
/// Entries are created by [`Round::submit`] and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    guess: Code,
    feedback: Feedback,
    pegs: Pegs,
}

impl HistoryEntry {
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &Pegs {
        &self.pegs
    }
}

/// What a successful submission reports back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub feedback: Feedback,
    pub won: bool,
}

/// A single play session from secret generation to win
#[derive(Debug, Clone)]
pub struct Round {
    secret: Code,
    current: GuessBuffer,
    history: Vec<HistoryEntry>,
    state: RoundState,
}

impl Round {
    /// Begin a round with a secret drawn from `source`
    ///
    /// # Examples
    /// ```
    /// use braincode::game::{Round, RoundState, ScriptedColors};
    ///
    /// let secret = "bgro".parse().unwrap();
    /// let mut round = Round::start(&mut ScriptedColors::from_code(secret));
    ///
    /// let outcome = round.submit(&"gbro".parse().unwrap()).unwrap();
    /// assert_eq!((outcome.feedback.black, outcome.feedback.white), (2, 2));
    /// assert!(!outcome.won);
    ///
    /// let outcome = round.submit(&secret).unwrap();
    /// assert!(outcome.won);
    /// assert_eq!(round.state(), RoundState::Won);
    /// assert_eq!(round.history().len(), 2);
    /// ```
    pub fn start<S: ColorSource + ?Sized>(source: &mut S) -> Self {
        Self {
            secret: source.draw_code(),
            current: GuessBuffer::new(),
            history: Vec::new(),
            state: RoundState::InProgress,
        }
    }

    /// Throw away everything about this round and start a new one
    pub fn restart<S: ColorSource + ?Sized>(&mut self, source: &mut S) {
        *self = Self::start(source);
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state == RoundState::Won
    }

    /// Submitted guesses, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The secret code
    ///
    /// Only for callers that deliberately show the answer (debugging, or a
    /// "give up" screen). Nothing in the round calls this.
    #[inline]
    #[must_use]
    pub const fn reveal_secret(&self) -> &Code {
        &self.secret
    }

    /// Score `guess`, record it, and report whether it won the round
    ///
    /// # Errors
    /// Returns `GameError::IllegalState` if the round is already won; the
    /// history is left untouched in that case.
    pub fn submit(&mut self, guess: &Code) -> Result<SubmitOutcome, GameError> {
        self.ensure_in_progress()?;

        let evaluation = evaluate(guess, &self.secret);
        self.history.push(HistoryEntry {
            guess: *guess,
            feedback: evaluation.feedback,
            pegs: evaluation.pegs,
        });

        if evaluation.feedback.is_win() {
            self.state = RoundState::Won;
        }

        Ok(SubmitOutcome {
            feedback: evaluation.feedback,
            won: self.is_won(),
        })
    }

    /// Submit raw slots, as a UI row would hold them
    ///
    /// # Errors
    /// Returns `GameError::IllegalState` if the round is already won, or
    /// `GameError::InvalidInput` if the slots are not a complete code.
    pub fn submit_slots(&mut self, slots: &[Option<Color>]) -> Result<SubmitOutcome, GameError> {
        self.ensure_in_progress()?;
        let guess = Code::from_slots(slots)?;
        self.submit(&guess)
    }

    /// The guess row being edited
    #[inline]
    #[must_use]
    pub const fn current_guess(&self) -> &GuessBuffer {
        &self.current
    }

    /// Advance one slot of the current guess to its next color
    ///
    /// # Errors
    /// Returns `GameError::IllegalState` if the round is won, or
    /// `GameError::InvalidInput` if `index` is not a slot.
    pub fn cycle_slot(&mut self, index: usize) -> Result<Color, GameError> {
        self.ensure_in_progress()?;
        self.current.cycle(index)
    }

    /// Set one slot of the current guess
    ///
    /// # Errors
    /// Returns `GameError::IllegalState` if the round is won, or
    /// `GameError::InvalidInput` if `index` is not a slot.
    pub fn set_slot(&mut self, index: usize, color: Color) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.current.set(index, color)
    }

    /// Unset one slot of the current guess
    ///
    /// # Errors
    /// Returns `GameError::IllegalState` if the round is won, or
    /// `GameError::InvalidInput` if `index` is not a slot.
    pub fn clear_slot(&mut self, index: usize) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.current.clear_slot(index)
    }

    /// Submit the current guess row and empty it
    ///
    /// The row is kept as-is when the submission is rejected.
    ///
    /// # Errors
    /// Same as [`Round::submit_slots`].
    pub fn submit_current(&mut self) -> Result<SubmitOutcome, GameError> {
        let slots = *self.current.slots();
        let outcome = self.submit_slots(&slots)?;
        self.current.clear();
        Ok(outcome)
    }

    /// Shareable transcript of this round's pegs
    ///
    /// Built only from the stored history; nothing is re-scored.
    #[must_use]
    pub fn share_text(&self) -> String {
        format_share_text(&self.history, self.is_won())
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.state {
            RoundState::InProgress => Ok(()),
            RoundState::Won => Err(GameError::IllegalState),
        }
    }
}
