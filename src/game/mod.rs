//! Round lifecycle
//!
//! The [`Round`] state machine, the secret [`ColorSource`]s it draws from,
//! and the share transcript derived from its history.

mod round;
mod share;
mod source;

pub use round::{HistoryEntry, Round, RoundState, SubmitOutcome};
pub use share::format_share_text;
pub use source::{ColorSource, RandomColors, ScriptedColors};
