//! Formatting utilities for terminal output

use crate::core::{Code, Color, Feedback};
use colored::{ColoredString, Colorize};

/// Terminal RGB for a code color
#[must_use]
pub const fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Blue => (52, 120, 246),
        Color::Green => (52, 199, 89),
        Color::Red => (255, 59, 48),
        Color::Orange => (255, 149, 0),
        Color::Yellow => (255, 214, 10),
        Color::Purple => (175, 82, 222),
        Color::Black => (90, 90, 90),
    }
}

/// A colored dot for one color
#[must_use]
pub fn color_swatch(color: Color) -> ColoredString {
    let (r, g, b) = rgb(color);
    "●".truecolor(r, g, b)
}

/// Colored dots for a whole code, space separated
#[must_use]
pub fn code_swatches(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&color| color_swatch(color).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Peg counts such as `2 black, 1 white`
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    format!(
        "{} black, {} white",
        feedback.black.to_string().bold(),
        feedback.white.to_string().bold()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the largest possible feedback spread
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 14f64.log2(); // 14 distinct black/white outcomes
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatches_one_dot_per_slot() {
        let code: Code = "bgro".parse().unwrap();
        assert_eq!(code_swatches(&code).matches('●').count(), 4);
    }

    #[test]
    fn feedback_text_names_counts() {
        let text = feedback_pegs(Feedback::new(2, 1));
        assert!(text.contains('2'));
        assert!(text.contains("black"));
        assert!(text.contains("white"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn entropy_bar_never_overflows() {
        assert_eq!(entropy_bar(10.0, 8).chars().count(), 8);
    }
}
