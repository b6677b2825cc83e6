//! TUI rendering with ratatui
//!
//! Board, feedback and hint panels for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::analysis::CODE_SPACE;
use crate::core::{CODE_LENGTH, Code, Color as PegColor};
use crate::output::formatters::rgb;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.input_mode == InputMode::Share {
        render_share_popup(f, app);
    }
}

fn tui_color(color: PegColor) -> Color {
    let (r, g, b) = rgb(color);
    Color::Rgb(r, g, b)
}

fn swatch(color: PegColor) -> Span<'static> {
    Span::styled("●", Style::default().fg(tui_color(color)))
}

fn code_spans(code: &Code) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(CODE_LENGTH * 2);
    for &color in code.colors() {
        spans.push(swatch(color));
        spans.push(Span::raw(" "));
    }
    spans
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧠 BRAINCODE - Crack the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // History
            Constraint::Length(4), // Current row
        ])
        .split(area);

    render_history(f, app, chunks[0]);
    render_current_row(f, app, chunks[1]);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.round.history();
    // Keep the latest rows visible
    let visible = area.height.saturating_sub(2) as usize;
    let skip = history.len().saturating_sub(visible);

    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, entry)| {
            let mut spans = vec![Span::styled(
                format!("{:>2}. ", i + 1),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(code_spans(entry.guess()));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!(" {} ", entry.feedback().black),
                Style::default().fg(Color::White).bg(Color::Black),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" {} ", entry.feedback().white),
                Style::default().fg(Color::Black).bg(Color::White),
            ));
            spans.push(Span::raw("  "));
            spans.push(Span::raw(entry.pegs().to_symbols()));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(" Guesses ({}) ", history.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_current_row(f: &mut Frame, app: &App, area: Rect) {
    let mut slots = Vec::with_capacity(CODE_LENGTH * 2);
    let mut markers = Vec::with_capacity(CODE_LENGTH * 2);

    for (i, slot) in app.round.current_guess().slots().iter().enumerate() {
        slots.push(match slot {
            Some(color) => swatch(*color),
            None => Span::styled("○", Style::default().fg(Color::DarkGray)),
        });
        slots.push(Span::raw(" "));

        let selected = i == app.selected_slot && app.input_mode == InputMode::Guessing;
        markers.push(Span::styled(
            if selected { "▲" } else { " " },
            Style::default().fg(Color::Yellow),
        ));
        markers.push(Span::raw(" "));
    }

    let names: Vec<&str> = app
        .round
        .current_guess()
        .slots()
        .iter()
        .map(|slot| slot.map_or("-", PegColor::name))
        .collect();
    slots.push(Span::styled(
        format!("   {}", names.join(" ")),
        Style::default().fg(Color::DarkGray),
    ));

    let (title, color) = if app.round.current_guess().is_complete() {
        (" Your Guess | ENTER to submit ", Color::Green)
    } else {
        (" Your Guess ", Color::Yellow)
    };

    let paragraph = Paragraph::new(vec![Line::from(slots), Line::from(markers)]).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search space gauge
            Constraint::Length(6), // Hint / secret
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_hint(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = (CODE_SPACE as f64).log2();
    let remaining_bits = (app.remaining.max(1) as f64).log2();
    let bits_gained = total_bits - remaining_bits;
    let progress_pct = ((bits_gained / total_bits * 100.0).clamp(0.0, 100.0)) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{bits_gained:.1}/{total_bits:.1} bits | {} codes possible",
            app.remaining
        ));

    f.render_widget(gauge, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let mut content = Vec::new();

    if let Some(ref hint) = app.hint {
        let mut spans = vec![Span::raw("Try: ")];
        spans.extend(code_spans(&hint.code));
        spans.push(Span::styled(
            hint.code.letters().to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        content.push(Line::from(spans));
        content.push(Line::from(format!("Entropy:  {:.3} bits", hint.entropy)));
        content.push(Line::from(format!(
            "Expected: {:.1} codes remain",
            hint.expected_remaining
        )));
    } else {
        content.push(Line::from(Span::styled(
            "Press 'h' for a hint",
            Style::default().fg(Color::DarkGray),
        )));
    }

    if app.secret_shown {
        let mut spans = vec![Span::styled("Secret: ", Style::default().fg(Color::Red))];
        spans.extend(code_spans(app.round.reveal_secret()));
        content.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Hint ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let palette: Vec<Span> = PegColor::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, &color)| {
            [
                Span::styled(format!("{}", i + 1), Style::default().fg(Color::DarkGray)),
                swatch(color),
                Span::raw("  "),
            ]
        })
        .collect();

    let (title, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CODE CRACKED! 🎉 | 's' share · 'n' new round · 'q' quit ",
            Color::Green,
        ),
        InputMode::Share => (" Share | 's' or ESC to close ", Color::Cyan),
        InputMode::Guessing => (
            " Colors | ←/→ slot · SPACE cycle · 1-7 set · ⌫ clear · ENTER guess ",
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(Line::from(palette)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = if app.round.is_won() {
        "Round: Won".to_string()
    } else {
        format!("Round: Guess {}", app.round.history().len() + 1)
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Rounds: {} | Won: {}",
        app.stats.rounds_played, app.stats.rounds_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let average = average_guesses(&app.stats.guess_distribution);
    let average_text = average.map_or_else(
        || "Avg guesses: -".to_string(),
        |avg| format!("Avg guesses: {avg:.1}"),
    );
    let average = Paragraph::new(average_text).alignment(Alignment::Center);
    f.render_widget(average, chunks[2]);

    let help_text = if app.reveal_allowed {
        "q: Quit | n: New | h: Hint | s: Share | r: Secret"
    } else {
        "q: Quit | n: New | h: Hint | s: Share"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn render_share_popup(f: &mut Frame, app: &App) {
    let text = app.round.share_text();
    let height = text.lines().count() as u16 + 2;

    let [area] = Layout::horizontal([Constraint::Length(50)])
        .flex(Flex::Center)
        .areas(f.area());
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);

    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Share Results ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Mean guesses per won round from a distribution indexed by guess count
fn average_guesses(distribution: &[usize]) -> Option<f64> {
    let wins: usize = distribution.iter().sum();
    if wins == 0 {
        return None;
    }
    let total: usize = distribution
        .iter()
        .enumerate()
        .map(|(guesses, &count)| guesses * count)
        .sum();
    Some(total as f64 / wins as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScriptedColors;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        App::new(
            Box::new(ScriptedColors::from_code("bgro".parse().unwrap())),
            false,
        )
    }

    #[test]
    fn renders_fresh_round() {
        let screen = draw(&app());
        assert!(screen.contains("Guesses (0)"));
        assert!(screen.contains("2401 codes possible"));
    }

    #[test]
    fn renders_history_rows() {
        let mut app = app();
        for c in ['2', '1', '3', '4'] {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        let screen = draw(&app);
        assert!(screen.contains("Guesses (1)"));
        assert!(screen.contains("Guess 2"));
    }

    #[test]
    fn renders_share_popup() {
        let mut app = app();
        for c in ['1', '2', '3', '4'] {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('s'), KeyModifiers::NONE);

        let screen = draw(&app);
        assert!(screen.contains("Share Results"));
        assert!(screen.contains("Round: Won"));
    }

    #[test]
    fn average_of_distribution() {
        assert_eq!(average_guesses(&[0; 11]), None);
        let mut distribution = [0; 11];
        distribution[2] = 1;
        distribution[4] = 1;
        assert_eq!(average_guesses(&distribution), Some(3.0));
    }
}
