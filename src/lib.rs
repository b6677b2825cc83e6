//! Braincode
//!
//! A code-breaking puzzle: find the secret sequence of four colors using
//! black/white feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use braincode::core::{Code, evaluate};
//! use braincode::game::{Round, ScriptedColors};
//!
//! // Score a guess directly
//! let secret: Code = "bgro".parse().unwrap();
//! let guess: Code = "gbro".parse().unwrap();
//! let evaluation = evaluate(&guess, &secret);
//! assert_eq!((evaluation.feedback.black, evaluation.feedback.white), (2, 2));
//!
//! // Or play a round with a known secret
//! let mut source = ScriptedColors::from_code(secret);
//! let mut round = Round::start(&mut source);
//! let outcome = round.submit(&guess).unwrap();
//! assert!(!outcome.won);
//! println!("{}", round.share_text());
//! ```

// Core domain types
pub mod core;

// Round state machine and share text
pub mod game;

// Candidate filtering and guess suggestions
pub mod analysis;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
