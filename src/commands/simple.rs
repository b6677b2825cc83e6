//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::analysis::{consistent_codes, suggest_guess};
use crate::core::Code;
use crate::game::{ColorSource, Round};
use crate::output::formatters::{code_swatches, feedback_pegs};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Options for the text game
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleConfig {
    /// Allow the `secret` command to show the answer
    pub reveal: bool,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading user input or writing output fails.
pub fn run_simple(source: &mut dyn ColorSource, config: SimpleConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    play(&mut input, &mut output, source, config)
}

/// Game loop over arbitrary input and output streams
///
/// Ends on `quit`, on declining another round, or at end of input.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn play<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    source: &mut dyn ColorSource,
    config: SimpleConfig,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                Braincode - Interactive Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(out, "Crack the secret code of 4 colors (repeats allowed).")?;
    writeln!(out, "Enter a guess as letters or names:\n")?;
    writeln!(out, "  - b=blue g=green r=red o=orange y=yellow p=purple k=black")?;
    writeln!(out, "  - e.g. 'bgro' or 'blue green red orange'\n")?;
    writeln!(out, "Feedback: ⬛ right color, right slot · ⬜ right color, wrong slot · ✖️ not left in the code")?;
    writeln!(out, "Commands: 'hint', 'share', 'new', 'quit'\n")?;

    let mut round = Round::start(source);
    info!("round started");

    loop {
        let turn = round.history().len() + 1;
        let Some(line) = get_user_input(input, out, &format!("Guess {turn}"))? else {
            writeln!(out)?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                round.restart(source);
                info!("round restarted");
                writeln!(out, "\n🔄 New round started!\n")?;
            }
            "hint" | "h" => {
                let remaining = consistent_codes(round.history()).len();
                if let Some((code, metrics)) = suggest_guess(round.history()) {
                    writeln!(
                        out,
                        "\n💡 Try {} ({})  {:.2} bits, {} possible codes left\n",
                        code.letters().to_uppercase().bright_yellow().bold(),
                        code,
                        metrics.entropy,
                        remaining
                    )?;
                } else {
                    writeln!(out, "\nNo code fits the feedback so far.\n")?;
                }
            }
            "share" | "s" => {
                writeln!(out, "\n{}\n", round.share_text())?;
            }
            "secret" | "reveal" => {
                if config.reveal {
                    let secret = round.reveal_secret();
                    debug!(secret = %secret, "secret revealed");
                    writeln!(out, "\n🔓 Secret: {} {}\n", code_swatches(secret), secret)?;
                } else {
                    writeln!(out, "\nThe secret stays hidden (run with --reveal to allow this).\n")?;
                }
            }
            text => match text.parse::<Code>() {
                Err(err) => writeln!(out, "❌ {err}\n")?,
                Ok(guess) => {
                    let outcome = round.submit(&guess)?;
                    debug!(
                        guess = %guess.letters(),
                        black = outcome.feedback.black,
                        white = outcome.feedback.white,
                        "guess submitted"
                    );

                    let pegs = round
                        .history()
                        .last()
                        .map(|entry| entry.pegs().to_symbols())
                        .unwrap_or_default();
                    writeln!(
                        out,
                        "   {}  {}  {}  {}\n",
                        code_swatches(&guess),
                        guess.letters().to_uppercase(),
                        pegs,
                        feedback_pegs(outcome.feedback)
                    )?;

                    if outcome.won {
                        info!(guesses = turn, "round won");
                        print_victory(out, &round)?;

                        match get_user_input(input, out, "Play again? (yes/no)")?
                            .unwrap_or_default()
                            .to_lowercase()
                            .as_str()
                        {
                            "yes" | "y" => {
                                round.restart(source);
                                info!("round restarted");
                                writeln!(out, "\n🔄 New round started!\n")?;
                            }
                            _ => {
                                writeln!(out, "\n👋 Thanks for playing!\n")?;
                                return Ok(());
                            }
                        }
                    }
                }
            },
        }
    }
}

fn print_victory<W: Write>(out: &mut W, round: &Round) -> Result<()> {
    let guesses = round.history().len();

    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "        🎉 🎊 ✨  C O D E   C R A C K E D !  ✨ 🎊 🎉        "
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;

    let performance = match guesses {
        1 => "🏆 Lucky shot!",
        2..=4 => "⭐ Excellent!",
        5..=6 => "✨ Well played!",
        _ => "✓ Solved!",
    };
    writeln!(out, "\n  {}", performance.bright_yellow().bold())?;

    writeln!(out, "\n  Share your result:\n")?;
    for line in round.share_text().lines() {
        writeln!(out, "    {line}")?;
    }
    writeln!(out, "\n{}\n", "═".repeat(70).bright_cyan())?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScriptedColors;

    fn run(script: &str, secret: &str, config: SimpleConfig) -> String {
        let mut source = ScriptedColors::from_code(secret.parse().unwrap());
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        play(&mut input, &mut output, &mut source, config).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn winning_game_prints_share_text() {
        let output = run("bbbb\ngbro\nbgro\nno\n", "bgro", SimpleConfig::default());

        assert!(output.contains("I solved the Braincode puzzle in 3 guesses!"));
        assert!(output.contains("⬛✖️✖️✖️"));
        assert!(output.contains("⬜⬜⬛⬛"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn invalid_guess_is_reported_and_not_counted() {
        let output = run("bgr\nbgxo\nbgro\nno\n", "bgro", SimpleConfig::default());

        assert!(output.contains("exactly 4 colors, got 3"));
        assert!(output.contains("Unknown color 'x'"));
        assert!(output.contains("in 1 guesses!"));
    }

    #[test]
    fn share_before_winning_shows_progress() {
        let output = run("kkkk\nshare\nquit\n", "bgro", SimpleConfig::default());
        assert!(output.contains("Braincode puzzle: 1 guesses so far"));
    }

    #[test]
    fn secret_needs_reveal_flag() {
        let hidden = run("secret\nquit\n", "kkyy", SimpleConfig::default());
        assert!(hidden.contains("stays hidden"));
        assert!(!hidden.contains("Secret:"));
        assert!(!hidden.contains("black black yellow yellow"));

        let shown = run("reveal\nquit\n", "kkyy", SimpleConfig { reveal: true });
        assert!(shown.contains("Secret:"));
        assert!(shown.contains("black black yellow yellow"));
        assert!(!shown.contains("stays hidden"));
    }

    #[test]
    fn new_round_resets_guess_counter() {
        let output = run("kkkk\nnew\nquit\n", "bgro", SimpleConfig::default());
        assert!(output.contains("New round started"));
        let after_new = output.rsplit("New round started").next().unwrap();
        assert!(after_new.contains("Guess 1:"));
    }

    #[test]
    fn play_again_starts_fresh_round() {
        let output = run("bgro\nyes\nshare\nquit\n", "bgro", SimpleConfig::default());
        assert!(output.contains("Braincode puzzle: 0 guesses so far"));
    }

    #[test]
    fn hint_after_feedback_names_a_code() {
        let output = run("bbgg\nhint\nquit\n", "bgro", SimpleConfig::default());
        assert!(output.contains("Try "));
        assert!(output.contains("possible codes left"));
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let output = run("kkkk\n", "bgro", SimpleConfig::default());
        assert!(output.contains("Guess 2:"));
    }
}
