//! Command implementations

pub mod analyze;
pub mod score;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_guess};
pub use score::{ScoreResult, score_guess};
pub use simple::{SimpleConfig, run_simple};
