//! Color codes and the in-progress guess buffer
//!
//! A [`Code`] is a complete sequence of colors (a secret or a submittable
//! guess). A [`GuessBuffer`] is the editable row a player fills in slot by
//! slot before submitting it.

use super::color::Color;
use super::error::{GameError, InputError};
use std::fmt;
use std::str::FromStr;

/// Number of slots in every code
pub const CODE_LENGTH: usize = 4;

/// A complete sequence of [`CODE_LENGTH`] colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; CODE_LENGTH]);

impl Code {
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    /// Build a code from slots that may be unset
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the slice is not exactly
    /// [`CODE_LENGTH`] long or any slot is `None`.
    pub fn from_slots(slots: &[Option<Color>]) -> Result<Self, GameError> {
        if slots.len() != CODE_LENGTH {
            return Err(InputError::WrongLength {
                expected: CODE_LENGTH,
                actual: slots.len(),
            }
            .into());
        }

        let mut colors = [Color::Blue; CODE_LENGTH];
        for (i, slot) in slots.iter().enumerate() {
            colors[i] = slot.ok_or(InputError::UnsetSlot(i))?;
        }
        Ok(Self(colors))
    }

    /// Build a code from a color slice
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the slice is not exactly
    /// [`CODE_LENGTH`] long.
    pub fn from_colors(colors: &[Color]) -> Result<Self, GameError> {
        let colors: [Color; CODE_LENGTH] =
            colors.try_into().map_err(|_| InputError::WrongLength {
                expected: CODE_LENGTH,
                actual: colors.len(),
            })?;
        Ok(Self(colors))
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// Color at `position` (0-3)
    ///
    /// # Panics
    /// Panics if position >= `CODE_LENGTH`
    #[inline]
    #[must_use]
    pub const fn color_at(&self, position: usize) -> Color {
        self.0[position]
    }

    /// Compact form such as `bgro`
    #[must_use]
    pub fn letters(&self) -> String {
        self.0.iter().map(|c| c.letter()).collect()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = GameError;

    /// Parse either color names separated by spaces or commas
    /// (`blue, green, red, orange`) or a run of letters (`bgro`)
    ///
    /// # Examples
    /// ```
    /// use braincode::core::{Code, Color};
    ///
    /// let a: Code = "bgro".parse().unwrap();
    /// let b: Code = "Blue, green, red, orange".parse().unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.color_at(3), Color::Orange);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        let colors = if let [single] = tokens.as_slice()
            && single.chars().count() > 1
            && single.parse::<Color>().is_err()
        {
            single
                .chars()
                .map(|letter| {
                    Color::from_letter(letter).ok_or_else(|| {
                        InputError::UnknownColor(letter.to_string()).into()
                    })
                })
                .collect::<Result<Vec<_>, GameError>>()?
        } else {
            tokens
                .iter()
                .map(|token| token.parse::<Color>())
                .collect::<Result<Vec<_>, _>>()?
        };

        Self::from_colors(&colors)
    }
}

/// The editable row of a guess in progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuessBuffer {
    slots: [Option<Color>; CODE_LENGTH],
}

impl GuessBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[Option<Color>; CODE_LENGTH] {
        &self.slots
    }

    /// Set the color of one slot
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if `index` is out of range.
    pub fn set(&mut self, index: usize, color: Color) -> Result<(), GameError> {
        *self.slot_mut(index)? = Some(color);
        Ok(())
    }

    /// Unset one slot
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if `index` is out of range.
    pub fn clear_slot(&mut self, index: usize) -> Result<(), GameError> {
        *self.slot_mut(index)? = None;
        Ok(())
    }

    /// Advance one slot to the next color: an unset slot takes the first
    /// color, a set slot moves on in cyclic order
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if `index` is out of range.
    pub fn cycle(&mut self, index: usize) -> Result<Color, GameError> {
        let slot = self.slot_mut(index)?;
        let next = (*slot).map_or(Color::ALL[0], Color::next);
        *slot = Some(next);
        Ok(next)
    }

    /// Unset every slot
    pub fn clear(&mut self) {
        self.slots = [None; CODE_LENGTH];
    }

    /// Whether every slot has a color
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The completed code
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` naming the first unset slot.
    pub fn to_code(&self) -> Result<Code, GameError> {
        Code::from_slots(&self.slots)
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Option<Color>, GameError> {
        self.slots
            .get_mut(index)
            .ok_or_else(|| InputError::SlotOutOfRange(index).into())
    }
}

impl From<Code> for GuessBuffer {
    fn from(code: Code) -> Self {
        Self {
            slots: code.0.map(Some),
        }
    }
}
