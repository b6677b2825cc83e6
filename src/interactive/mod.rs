//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, HintInfo, InputMode, Message, MessageStyle, Statistics, run_tui};
