//! GameView: maps a session snapshot and action results into styled lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::style::{piece_color, Line, SpanStyle, ERROR_FG, OK_FG};
use crate::types::{ActionError, Level, Outcome, Piece, QUIT_SELECTION};

/// Builds every line the console shell prints.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    fn push_piece(line: &mut Line, piece: Piece) {
        line.push(piece.to_string(), SpanStyle::fg(piece_color(piece.kind)).bold());
    }

    fn pieces_line(label: &str, pieces: &[Piece]) -> Line {
        let mut line = Line::plain(label);
        if pieces.is_empty() {
            line.push("[empty]", SpanStyle::PLAIN.dim());
            return line;
        }
        for (i, piece) in pieces.iter().enumerate() {
            if i > 0 {
                line.push(" ", SpanStyle::PLAIN);
            }
            Self::push_piece(&mut line, *piece);
        }
        line
    }

    /// Queue, reserve stack and undo availability.
    pub fn render_state(&self, snap: &SessionSnapshot) -> Vec<Line> {
        vec![
            Line::new(),
            Self::pieces_line("Piece queue (front -> back): ", &snap.queue),
            Self::pieces_line("Reserve stack (top -> base): ", &snap.stack),
            if snap.undo_available {
                Line::styled("Undo: available", SpanStyle::PLAIN.dim())
            } else {
                Line::styled("Undo: none", SpanStyle::PLAIN.dim())
            },
        ]
    }

    /// Numbered action menu for `level`, ending with quit.
    pub fn render_menu(&self, level: Level) -> Vec<Line> {
        let mut lines = Vec::with_capacity(level.menu().len() + 3);
        lines.push(Line::new());
        lines.push(Line::styled(
            format!("Actions ({} level):", level.as_str()),
            SpanStyle::PLAIN.bold(),
        ));
        for entry in level.menu() {
            lines.push(Line::plain(format!(
                "{} - {}",
                entry.selection,
                entry.action.label()
            )));
        }
        lines.push(Line::plain(format!("{} - Quit", QUIT_SELECTION)));
        lines
    }

    /// Level selection shown when no level was configured.
    pub fn render_level_menu(&self) -> Vec<Line> {
        let mut lines = vec![Line::styled("Choose a level:", SpanStyle::PLAIN.bold())];
        for (i, level) in Level::ALL.iter().enumerate() {
            lines.push(Line::plain(format!("{} - {}", i + 1, level.as_str())));
        }
        lines
    }

    /// One status line describing what an action did or why it failed.
    pub fn render_result(&self, result: &Result<Outcome, ActionError>) -> Line {
        match result {
            Ok(outcome) => self.render_outcome(outcome),
            Err(err) => Line::styled(format!("Cannot do that: {}.", err), SpanStyle::fg(ERROR_FG)),
        }
    }

    fn render_outcome(&self, outcome: &Outcome) -> Line {
        let ok = SpanStyle::fg(OK_FG);
        let mut line = Line::new();
        match *outcome {
            Outcome::Played {
                played,
                replenished,
            } => {
                line.push("Played ", ok);
                Self::push_piece(&mut line, played);
                line.push("; ", ok);
                Self::push_piece(&mut line, replenished);
                line.push(" joined the queue.", ok);
            }
            Outcome::Inserted { piece } => {
                Self::push_piece(&mut line, piece);
                line.push(" added to the queue.", ok);
            }
            Outcome::Reserved {
                reserved,
                replenished,
            } => {
                line.push("Reserved ", ok);
                Self::push_piece(&mut line, reserved);
                line.push("; ", ok);
                Self::push_piece(&mut line, replenished);
                line.push(" joined the queue.", ok);
            }
            Outcome::UsedReserved { piece } => {
                line.push("Used reserved piece ", ok);
                Self::push_piece(&mut line, piece);
                line.push(".", ok);
            }
            Outcome::SwappedFront { to_queue, to_stack } => {
                line.push("Swapped: ", ok);
                Self::push_piece(&mut line, to_queue);
                line.push(" now leads the queue, ", ok);
                Self::push_piece(&mut line, to_stack);
                line.push(" is on top of the stack.", ok);
            }
            Outcome::SwappedTriple { to_queue, .. } => {
                line.push("Swapped the first 3 queue pieces with the reserve; queue now starts ", ok);
                for (i, piece) in to_queue.iter().enumerate() {
                    if i > 0 {
                        line.push(" ", ok);
                    }
                    Self::push_piece(&mut line, *piece);
                }
                line.push(".", ok);
            }
            Outcome::Transferred {
                queue_len,
                stack_len,
            } => {
                line.push(
                    format!(
                        "Transferred: queue holds {} piece(s), stack holds {}.",
                        queue_len, stack_len
                    ),
                    ok,
                );
            }
            Outcome::Undone => line.push("Last action undone.", ok),
        }
        line
    }

    pub fn render_invalid(&self, level: Level) -> Line {
        Line::styled(
            format!("Invalid option for the {} level, try again.", level.as_str()),
            SpanStyle::fg(ERROR_FG),
        )
    }

    pub fn render_goodbye(&self) -> Line {
        Line::plain("Leaving the game...")
    }
}
