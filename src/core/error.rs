//! Errors reported by the game core

use std::fmt;

/// Why a guess or color input was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Sequence did not have exactly one entry per slot
    WrongLength { expected: usize, actual: usize },
    /// Slot left unset at submission time
    UnsetSlot(usize),
    /// Slot index past the end of the code
    SlotOutOfRange(usize),
    /// Text that names no known color
    UnknownColor(String),
}

/// Error type for round and evaluation operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidInput(InputError),
    /// The round is already won; start a new one to keep playing
    IllegalState,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Code must have exactly {expected} colors, got {actual}")
            }
            Self::UnsetSlot(index) => write!(f, "Slot {} has no color", index + 1),
            Self::SlotOutOfRange(index) => write!(f, "There is no slot {}", index + 1),
            Self::UnknownColor(name) => write!(f, "Unknown color '{name}'"),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "Invalid input: {err}"),
            Self::IllegalState => write!(f, "The round is already won"),
        }
    }
}

impl std::error::Error for InputError {}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::IllegalState => None,
        }
    }
}

impl From<InputError> for GameError {
    fn from(err: InputError) -> Self {
        Self::InvalidInput(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_one_based() {
        assert_eq!(InputError::UnsetSlot(0).to_string(), "Slot 1 has no color");
        assert_eq!(
            GameError::from(InputError::SlotOutOfRange(4)).to_string(),
            "Invalid input: There is no slot 5"
        );
    }

    #[test]
    fn wrong_length_message() {
        let err = InputError::WrongLength {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Code must have exactly 4 colors, got 3");
    }
}
