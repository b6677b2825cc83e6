//! Peg feedback for a guess
//!
//! [`Feedback`] is the black/white count shown to the player; [`Pegs`] is the
//! per-slot outcome used for the compact share transcript.

use super::code::CODE_LENGTH;
use std::fmt;

/// Outcome of a single guess slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    /// Right color in the right slot
    Exact,
    /// Color appears elsewhere in the secret
    Present,
    /// Color not left anywhere in the secret
    Absent,
}

impl Peg {
    /// Share-transcript symbol
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Exact => "\u{2B1B}",
            Self::Present => "\u{2B1C}",
            Self::Absent => "\u{2716}\u{FE0F}",
        }
    }
}

/// Per-slot outcomes, in original slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pegs(pub(crate) [Peg; CODE_LENGTH]);

impl Pegs {
    #[inline]
    #[must_use]
    pub const fn new(pegs: [Peg; CODE_LENGTH]) -> Self {
        Self(pegs)
    }

    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[Peg; CODE_LENGTH] {
        &self.0
    }

    /// Transcript line such as `⬜⬜⬛⬛`
    #[must_use]
    pub fn to_symbols(&self) -> String {
        self.0.iter().map(|peg| peg.symbol()).collect()
    }
}

impl fmt::Display for Pegs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_symbols())
    }
}

/// Black and white peg counts
///
/// Always satisfies `black + white <= CODE_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    pub black: u8,
    pub white: u8,
}

impl Feedback {
    /// Every slot exact
    pub const PERFECT: Self = Self {
        black: CODE_LENGTH as u8,
        white: 0,
    };

    #[inline]
    #[must_use]
    pub const fn new(black: u8, white: u8) -> Self {
        debug_assert!(black as usize + white as usize <= CODE_LENGTH);
        Self { black, white }
    }

    /// Whether the guess matched the secret slot for slot
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.black as usize == CODE_LENGTH
    }

    /// Total pegs awarded
    #[inline]
    #[must_use]
    pub const fn total(self) -> u8 {
        self.black + self.white
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} black, {} white", self.black, self.white)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_is_win() {
        assert!(Feedback::PERFECT.is_win());
        assert_eq!(Feedback::PERFECT.total(), 4);
        assert!(!Feedback::new(3, 1).is_win());
    }

    #[test]
    fn symbols_in_slot_order() {
        let pegs = Pegs::new([Peg::Present, Peg::Absent, Peg::Exact, Peg::Exact]);
        assert_eq!(pegs.to_symbols(), "\u{2B1C}\u{2716}\u{FE0F}\u{2B1B}\u{2B1B}");
        assert_eq!(pegs.to_string(), pegs.to_symbols());
    }

    #[test]
    fn feedback_display() {
        assert_eq!(Feedback::new(2, 1).to_string(), "2 black, 1 white");
    }
}
