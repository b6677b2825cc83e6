//! Core domain types for Braincode
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Everything here is pure: no randomness, no I/O, no logging.

mod code;
mod color;
mod error;
mod evaluate;
mod feedback;

pub use code::{CODE_LENGTH, Code, GuessBuffer};
pub use color::Color;
pub use error::{GameError, InputError};
pub use evaluate::{Evaluation, evaluate, evaluate_slots};
pub use feedback::{Feedback, Peg, Pegs};
