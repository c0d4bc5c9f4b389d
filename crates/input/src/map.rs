//! Mapping from typed menu selections to game actions.

use crate::types::{Action, Level, QUIT_SELECTION};

/// What a menu selection asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Apply(Action),
    Quit,
    /// A number the current level does not offer, or not a number at all.
    Invalid,
}

/// Parse a menu selection ("  3 " -> 3).
pub fn parse_selection(line: &str) -> Option<u8> {
    line.trim().parse::<u8>().ok()
}

/// Map a typed line to a menu choice at `level`.
pub fn choice_for_line(level: Level, line: &str) -> MenuChoice {
    match parse_selection(line) {
        Some(QUIT_SELECTION) => MenuChoice::Quit,
        Some(n) => level
            .action_for(n)
            .map(MenuChoice::Apply)
            .unwrap_or(MenuChoice::Invalid),
        None => MenuChoice::Invalid,
    }
}

/// Map a typed line to a level (name or 1-3).
pub fn level_for_line(line: &str) -> Option<Level> {
    Level::from_str(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1"), Some(1));
        assert_eq!(parse_selection("  7\n"), Some(7));
        assert_eq!(parse_selection("x"), None);
        assert_eq!(parse_selection("-1"), None);
        assert_eq!(parse_selection(""), None);
    }

    #[test]
    fn test_zero_quits_at_every_level() {
        for level in Level::ALL {
            assert_eq!(choice_for_line(level, "0"), MenuChoice::Quit);
        }
    }

    #[test]
    fn test_selection_two_depends_on_level() {
        assert_eq!(
            choice_for_line(Level::Novice, "2"),
            MenuChoice::Apply(Action::Insert)
        );
        assert_eq!(
            choice_for_line(Level::Adventurer, "2"),
            MenuChoice::Apply(Action::Reserve)
        );
    }

    #[test]
    fn test_locked_actions_are_invalid() {
        assert_eq!(choice_for_line(Level::Novice, "3"), MenuChoice::Invalid);
        assert_eq!(choice_for_line(Level::Adventurer, "7"), MenuChoice::Invalid);
        assert_eq!(
            choice_for_line(Level::Master, "7"),
            MenuChoice::Apply(Action::Undo)
        );
        assert_eq!(choice_for_line(Level::Master, "8"), MenuChoice::Invalid);
        assert_eq!(choice_for_line(Level::Master, "play"), MenuChoice::Invalid);
    }

    #[test]
    fn test_level_for_line() {
        assert_eq!(level_for_line("3"), Some(Level::Master));
        assert_eq!(level_for_line(" Novice\n"), Some(Level::Novice));
        assert_eq!(level_for_line("0"), None);
    }
}
