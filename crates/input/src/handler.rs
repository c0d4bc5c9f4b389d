//! Line-oriented menu reader.
//!
//! Reads one selection per line. End of input is treated as quitting, so a
//! piped script never leaves the shell waiting.

use std::io::{self, BufRead};

use crate::map::{choice_for_line, level_for_line, MenuChoice};
use crate::types::Level;

/// Reads menu selections from any buffered source (stdin in the binary).
#[derive(Debug)]
pub struct MenuReader<R> {
    source: R,
    line: String,
}

impl<R: BufRead> MenuReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            line: String::with_capacity(16),
        }
    }

    /// Next non-blank line, trimmed. `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<&str>> {
        loop {
            self.line.clear();
            if self.source.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            if !self.line.trim().is_empty() {
                return Ok(Some(self.line.trim()));
            }
        }
    }

    /// Next menu choice at `level`.
    pub fn read_choice(&mut self, level: Level) -> io::Result<MenuChoice> {
        Ok(match self.next_line()? {
            Some(line) => choice_for_line(level, line),
            None => MenuChoice::Quit,
        })
    }

    /// Next level answer: `Ok(Some(Err(text)))` for an unrecognised line,
    /// `Ok(None)` at end of input.
    pub fn read_level(&mut self) -> io::Result<Option<Result<Level, String>>> {
        Ok(self
            .next_line()?
            .map(|line| level_for_line(line).ok_or_else(|| line.to_string())))
    }
}
