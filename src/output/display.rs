//! Display functions for command results

use super::formatters::{code_swatches, entropy_bar, feedback_pegs};
use crate::commands::{AnalysisResult, ScoreResult};
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}  {}",
        code_swatches(&result.secret),
        result.secret.letters().to_uppercase().bright_yellow().bold()
    );
    println!(
        "Guess:  {}  {}",
        code_swatches(&result.guess),
        result.guess.letters().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  Pegs:      {}", result.evaluation.pegs);
    println!("  Feedback:  {}", feedback_pegs(result.evaluation.feedback));

    if result.evaluation.feedback.is_win() {
        println!("\n{}", "✅ Code cracked!".green().bold());
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        code_swatches(&result.guess),
        result.guess.letters().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} secrets remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} secrets remain", result.max_partition);

    println!("\n📈 {}", "Feedback distribution:".bright_cyan().bold());
    for (feedback, count) in &result.distribution {
        let pct = (*count as f64 / result.total_candidates as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!(
            "   {}B {}W: {bar} {count:4} ({pct:5.1}%)",
            feedback.black, feedback.white
        );
    }
}
