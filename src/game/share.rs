//! Share transcript formatting

use super::round::HistoryEntry;

/// Render the share transcript for a history
///
/// The first line states the guess count; each following line is one
/// entry's stored pegs, in submission order.
///
/// # Examples
/// ```
/// use braincode::game::{Round, ScriptedColors};
///
/// let secret = "bgro".parse().unwrap();
/// let mut round = Round::start(&mut ScriptedColors::from_code(secret));
/// round.submit(&"gbro".parse().unwrap()).unwrap();
/// round.submit(&secret).unwrap();
///
/// assert_eq!(
///     round.share_text(),
///     "I solved the Braincode puzzle in 2 guesses!\n⬜⬜⬛⬛\n⬛⬛⬛⬛"
/// );
/// ```
#[must_use]
pub fn format_share_text(history: &[HistoryEntry], won: bool) -> String {
    let count = history.len();

    let mut text = if won {
        format!("I solved the Braincode puzzle in {count} guesses!")
    } else {
        format!("Braincode puzzle: {count} guesses so far")
    };

    for entry in history {
        text.push('\n');
        text.push_str(&entry.pegs().to_symbols());
    }

    text
}

#[cfg(test)]
mod tests {
    use crate::core::Code;
    use crate::game::{Round, ScriptedColors};

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn won_round_has_header_plus_one_line_per_guess() {
        let mut round = Round::start(&mut ScriptedColors::from_code(code("bbgr")));
        round.submit(&code("kkkk")).unwrap();
        round.submit(&code("bgrr")).unwrap();
        round.submit(&code("bbgr")).unwrap();

        let text = round.share_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "I solved the Braincode puzzle in 3 guesses!");
        assert_eq!(lines[1], "\u{2716}\u{FE0F}".repeat(4));
        assert_eq!(lines[2], "\u{2B1B}\u{2B1C}\u{2716}\u{FE0F}\u{2B1B}");
        assert_eq!(lines[3], "\u{2B1B}".repeat(4));
    }

    #[test]
    fn share_text_is_idempotent() {
        let mut round = Round::start(&mut ScriptedColors::from_code(code("bbgr")));
        round.submit(&code("rgbb")).unwrap();
        round.submit(&code("bbgr")).unwrap();

        let first = round.share_text();
        assert_eq!(round.share_text(), first);
        assert_eq!(round.share_text(), first);
        assert_eq!(round.history().len(), 2);
    }

    #[test]
    fn header_wording_is_fixed_for_one_guess() {
        let mut round = Round::start(&mut ScriptedColors::from_code(code("oooo")));
        round.submit(&code("oooo")).unwrap();
        assert_eq!(
            round.share_text().lines().next(),
            Some("I solved the Braincode puzzle in 1 guesses!")
        );
    }

    #[test]
    fn unfinished_round_reports_progress() {
        let mut round = Round::start(&mut ScriptedColors::from_code(code("oooo")));
        assert_eq!(round.share_text(), "Braincode puzzle: 0 guesses so far");

        round.submit(&code("ookk")).unwrap();
        assert_eq!(
            round.share_text(),
            "Braincode puzzle: 1 guesses so far\n\u{2B1B}\u{2B1B}\u{2716}\u{FE0F}\u{2716}\u{FE0F}"
        );
    }
}
