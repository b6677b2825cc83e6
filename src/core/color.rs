//! Peg colors
//!
//! The fixed set of colors a code is built from, in the cyclic order used by
//! incremental slot selection.

use super::error::{GameError, InputError};
use std::fmt;
use std::str::FromStr;

/// One of the seven code colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Green,
    Red,
    Orange,
    Yellow,
    Purple,
    Black,
}

impl Color {
    /// Number of distinct colors
    pub const COUNT: usize = 7;

    /// All colors in cyclic selection order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Purple,
        Self::Black,
    ];

    /// Position of this color in [`Color::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color at `index` in [`Color::ALL`], if any
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// The color after this one, wrapping from the last back to the first
    ///
    /// # Examples
    /// ```
    /// use braincode::core::Color;
    ///
    /// assert_eq!(Color::Blue.next(), Color::Green);
    /// assert_eq!(Color::Black.next(), Color::Blue);
    /// ```
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Lowercase color name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Black => "black",
        }
    }

    /// One-letter code used for compact input (`k` is black)
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Blue => 'b',
            Self::Green => 'g',
            Self::Red => 'r',
            Self::Orange => 'o',
            Self::Yellow => 'y',
            Self::Purple => 'p',
            Self::Black => 'k',
        }
    }

    /// Parse a one-letter color code, case-insensitively
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let letter = letter.to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.letter() == letter)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = GameError;

    /// Accepts a full color name or its one-letter code, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();

        let mut chars = trimmed.chars();
        if let (Some(letter), None) = (chars.next(), chars.next())
            && let Some(color) = Self::from_letter(letter)
        {
            return Ok(color);
        }

        Self::ALL
            .into_iter()
            .find(|c| c.name() == trimmed)
            .ok_or_else(|| GameError::InvalidInput(InputError::UnknownColor(s.trim().to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_order_visits_every_color() {
        let mut color = Color::Blue;
        let mut seen = Vec::new();
        for _ in 0..Color::COUNT {
            seen.push(color);
            color = color.next();
        }
        assert_eq!(seen, Color::ALL);
        assert_eq!(color, Color::Blue);
    }

    #[test]
    fn index_round_trips() {
        for color in Color::ALL {
            assert_eq!(Color::from_index(color.index()), Some(color));
        }
        assert_eq!(Color::from_index(Color::COUNT), None);
    }

    #[test]
    fn parse_names_and_letters() {
        assert_eq!("blue".parse::<Color>().unwrap(), Color::Blue);
        assert_eq!("PURPLE".parse::<Color>().unwrap(), Color::Purple);
        assert_eq!(" k ".parse::<Color>().unwrap(), Color::Black);
        assert_eq!("B".parse::<Color>().unwrap(), Color::Blue);
    }

    #[test]
    fn parse_unknown_color_fails() {
        let err = "magenta".parse::<Color>().unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidInput(InputError::UnknownColor("magenta".to_string()))
        );
        assert!("x".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn letters_are_unique() {
        for a in Color::ALL {
            for b in Color::ALL {
                if a != b {
                    assert_ne!(a.letter(), b.letter());
                }
            }
        }
    }
}
