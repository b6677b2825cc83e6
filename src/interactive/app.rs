//! TUI application state and logic

use crate::analysis::{CODE_SPACE, consistent_codes, suggest_guess};
use crate::core::{CODE_LENGTH, Code, Color, GameError};
use crate::game::{ColorSource, Round};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App {
    pub round: Round,
    source: Box<dyn ColorSource>,
    pub selected_slot: usize,
    pub input_mode: InputMode,
    pub hint: Option<HintInfo>,
    pub remaining: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub reveal_allowed: bool,
    pub secret_shown: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
    Share,
}

#[derive(Debug, Clone)]
pub struct HintInfo {
    pub code: Code,
    pub entropy: f64,
    pub expected_remaining: f64,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session totals; index `n` of the distribution counts wins in `n` guesses,
/// with the last bucket collecting everything longer
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub guess_distribution: [usize; 11],
}

impl App {
    #[must_use]
    pub fn new(mut source: Box<dyn ColorSource>, reveal_allowed: bool) -> Self {
        let round = Round::start(&mut *source);
        info!("round started");

        Self {
            round,
            source,
            selected_slot: 0,
            input_mode: InputMode::Guessing,
            hint: None,
            remaining: CODE_SPACE,
            messages: vec![
                Message {
                    text: "Crack the 4-color code! Colors may repeat.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "←/→ pick a slot, SPACE cycles, 1-7 set a color, ENTER submits"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                rounds_played: 1,
                ..Statistics::default()
            },
            reveal_allowed,
            secret_shown: false,
            should_quit: false,
        }
    }

    pub fn select_next_slot(&mut self) {
        self.selected_slot = (self.selected_slot + 1) % CODE_LENGTH;
    }

    pub fn select_previous_slot(&mut self) {
        self.selected_slot = (self.selected_slot + CODE_LENGTH - 1) % CODE_LENGTH;
    }

    pub fn cycle_selected(&mut self) {
        let result = self.round.cycle_slot(self.selected_slot).map(|_| ());
        self.report_edit(result);
    }

    /// Set the selected slot and move on to the next one
    pub fn set_selected(&mut self, color: Color) {
        let result = self.round.set_slot(self.selected_slot, color);
        if result.is_ok() {
            self.select_next_slot();
        }
        self.report_edit(result);
    }

    pub fn clear_selected(&mut self) {
        let result = self.round.clear_slot(self.selected_slot);
        self.report_edit(result);
    }

    fn report_edit(&mut self, result: Result<(), GameError>) {
        if let Err(err) = result {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    pub fn submit_guess(&mut self) {
        if !self.round.current_guess().is_complete() {
            self.add_message("Fill every slot before guessing!", MessageStyle::Error);
            return;
        }

        match self.round.submit_current() {
            Ok(outcome) => {
                let guess_count = self.round.history().len();
                debug!(
                    black = outcome.feedback.black,
                    white = outcome.feedback.white,
                    guess_count,
                    "guess submitted"
                );
                self.hint = None;
                self.selected_slot = 0;
                self.remaining = consistent_codes(self.round.history()).len();

                if outcome.won {
                    info!(guesses = guess_count, "round won");
                    self.stats.rounds_won += 1;
                    let bucket = guess_count.min(self.stats.guess_distribution.len() - 1);
                    self.stats.guess_distribution[bucket] += 1;

                    self.input_mode = InputMode::WinCelebration;

                    let celebration = match guess_count {
                        1 => "🎯 FIRST TRY! Were you peeking? 🌟",
                        2..=3 => "🔥 BRILLIANT! Cracked in no time! 🔥",
                        4..=5 => "✨ SPLENDID! Code cracked! ✨",
                        6..=7 => "👏 NICE WORK! Code cracked! 👏",
                        _ => "🎊 CRACKED! 🎊",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message(
                        "Press 's' to share, 'n' for a new round or 'q' to quit.",
                        MessageStyle::Info,
                    );
                } else {
                    self.add_message(
                        &format!(
                            "{} black, {} white · {} codes still possible",
                            outcome.feedback.black, outcome.feedback.white, self.remaining
                        ),
                        MessageStyle::Info,
                    );
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_round(&mut self) {
        self.round.restart(&mut *self.source);
        info!("round restarted");
        self.stats.rounds_played += 1;
        self.selected_slot = 0;
        self.hint = None;
        self.secret_shown = false;
        self.remaining = CODE_SPACE;
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New round started! A fresh secret awaits.", MessageStyle::Info);
    }

    pub fn compute_hint(&mut self) {
        if let Some((code, metrics)) = suggest_guess(self.round.history()) {
            self.add_message(
                &format!("Hint: try {} ({:.2} bits)", code.letters().to_uppercase(), metrics.entropy),
                MessageStyle::Info,
            );
            self.hint = Some(HintInfo {
                code,
                entropy: metrics.entropy,
                expected_remaining: metrics.expected_remaining,
            });
        } else {
            self.hint = None;
            self.add_message("No code fits the feedback so far!", MessageStyle::Error);
        }
    }

    pub fn toggle_secret(&mut self) {
        if !self.reveal_allowed {
            self.add_message("Start with --reveal to peek at the secret", MessageStyle::Error);
            return;
        }
        self.secret_shown = !self.secret_shown;
        if self.secret_shown {
            debug!(secret = %self.round.reveal_secret(), "secret revealed");
        }
    }

    pub fn toggle_share(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Share if self.round.is_won() => InputMode::WinCelebration,
            InputMode::Share => InputMode::Guessing,
            _ => InputMode::Share,
        };
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if let KeyCode::Char('c') = code
            && modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(),
                KeyCode::Char('s') => self.toggle_share(),
                // In celebration mode, ignore other keys
                _ => {}
            },
            InputMode::Share => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(),
                KeyCode::Char('s') | KeyCode::Esc => self.toggle_share(),
                _ => {}
            },
            InputMode::Guessing => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(),
                KeyCode::Char('h') => self.compute_hint(),
                KeyCode::Char('s') => self.toggle_share(),
                KeyCode::Char('r') => self.toggle_secret(),
                KeyCode::Left => self.select_previous_slot(),
                KeyCode::Right | KeyCode::Tab => self.select_next_slot(),
                KeyCode::Char(' ') | KeyCode::Up => self.cycle_selected(),
                KeyCode::Backspace | KeyCode::Delete => self.clear_selected(),
                KeyCode::Char(c @ '1'..='7') => {
                    let index = c as usize - '1' as usize;
                    if let Some(color) = Color::from_index(index) {
                        self.set_selected(color);
                    }
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScriptedColors;

    fn app_with(secrets: &[&str], reveal: bool) -> App {
        let codes: Vec<Code> = secrets.iter().map(|s| s.parse().unwrap()).collect();
        App::new(Box::new(ScriptedColors::from_codes(&codes)), reveal)
    }

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            let code = match c {
                '\n' => KeyCode::Enter,
                '<' => KeyCode::Left,
                '>' => KeyCode::Right,
                other => KeyCode::Char(other),
            };
            app.handle_key(code, KeyModifiers::NONE);
        }
    }

    #[test]
    fn number_keys_fill_slots_left_to_right() {
        let mut app = app_with(&["bgro"], false);
        press(&mut app, "1234");
        assert_eq!(
            app.round.current_guess().to_code().unwrap(),
            "bgro".parse::<Code>().unwrap()
        );
        assert_eq!(app.selected_slot, 0);
    }

    #[test]
    fn space_cycles_selected_slot() {
        let mut app = app_with(&["bgro"], false);
        press(&mut app, ">  ");
        assert_eq!(app.round.current_guess().slots()[1], Some(Color::Green));
        press(&mut app, "<<");
        assert_eq!(app.selected_slot, 3);
    }

    #[test]
    fn incomplete_guess_is_not_submitted() {
        let mut app = app_with(&["bgro"], false);
        press(&mut app, "12\n");
        assert!(app.round.history().is_empty());
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn submitting_updates_remaining_and_clears_row() {
        let mut app = app_with(&["bgro"], false);
        assert_eq!(app.remaining, CODE_SPACE);
        press(&mut app, "7777\n");
        assert_eq!(app.round.history().len(), 1);
        assert!(app.remaining < CODE_SPACE);
        assert!(!app.round.current_guess().is_complete());
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn win_enters_celebration_and_records_stats() {
        let mut app = app_with(&["bgro", "kkkk"], false);
        press(&mut app, "1234\n");
        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.rounds_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        // Slot keys are ignored until a new round starts
        press(&mut app, "1234\n");
        assert_eq!(app.round.history().len(), 1);

        press(&mut app, "n");
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.stats.rounds_played, 2);
        assert!(app.round.history().is_empty());
        press(&mut app, "7777\n");
        assert!(app.round.is_won());
    }

    #[test]
    fn share_toggles_back_to_previous_mode() {
        let mut app = app_with(&["bgro"], false);
        press(&mut app, "s");
        assert_eq!(app.input_mode, InputMode::Share);
        press(&mut app, "s");
        assert_eq!(app.input_mode, InputMode::Guessing);

        press(&mut app, "1234\ns");
        assert_eq!(app.input_mode, InputMode::Share);
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::WinCelebration);
    }

    #[test]
    fn secret_requires_reveal_flag() {
        let mut hidden = app_with(&["bgro"], false);
        press(&mut hidden, "r");
        assert!(!hidden.secret_shown);

        let mut shown = app_with(&["bgro"], true);
        press(&mut shown, "r");
        assert!(shown.secret_shown);
        press(&mut shown, "n");
        assert!(!shown.secret_shown);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = app_with(&["bgro"], false);
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app_with(&["bgro"], false);
        for _ in 0..10 {
            app.add_message("hello", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
