//! Interactive menu loop: level selection, then one action per selection.
//!
//! Generic over the input source and the output sink so the whole loop can be
//! driven from tests with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::core::GameSession;
use crate::input::{MenuChoice, MenuReader};
use crate::journal::Journal;
use crate::term::{ConsoleRenderer, GameView, Line};
use crate::types::Level;

const CHOOSE_PROMPT: &str = "Choose: ";

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub applied: u32,
    pub rejected: u32,
    pub invalid: u32,
}

/// Ask for a level until a valid one is typed. `None` at end of input.
fn choose_level<R: BufRead, W: Write>(
    view: &GameView,
    reader: &mut MenuReader<R>,
    renderer: &mut ConsoleRenderer<W>,
) -> Result<Option<Level>> {
    loop {
        renderer.draw(&view.render_level_menu())?;
        renderer.prompt(CHOOSE_PROMPT)?;
        match reader.read_level()? {
            Some(Ok(level)) => return Ok(Some(level)),
            Some(Err(text)) => {
                renderer.draw_line(&Line::plain(format!("Unknown level: {}", text)))?;
            }
            None => return Ok(None),
        }
    }
}

/// Run the game until the player quits or input ends.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    reader: &mut MenuReader<R>,
    renderer: &mut ConsoleRenderer<W>,
    journal: &mut Journal,
) -> Result<RunSummary> {
    let view = GameView::new();
    let mut summary = RunSummary::default();

    let level = match config.level {
        Some(level) => level,
        None => match choose_level(&view, reader, renderer)? {
            Some(level) => level,
            None => {
                renderer.draw_line(&view.render_goodbye())?;
                return Ok(summary);
            }
        },
    };

    let mut session = GameSession::new(config.seed);
    info!(seed = config.seed, level = level.as_str(), "session started");

    loop {
        renderer.draw(&view.render_state(&session.snapshot()))?;
        renderer.draw(&view.render_menu(level))?;
        renderer.prompt(CHOOSE_PROMPT)?;

        match reader.read_choice(level)? {
            MenuChoice::Quit => {
                renderer.draw_line(&view.render_goodbye())?;
                break;
            }
            MenuChoice::Invalid => {
                summary.invalid += 1;
                renderer.draw_line(&view.render_invalid(level))?;
            }
            MenuChoice::Apply(action) => {
                let result = session.apply(action);
                match result {
                    Ok(_) => summary.applied += 1,
                    Err(_) => summary.rejected += 1,
                }
                renderer.draw_line(&view.render_result(&result))?;
                journal.record(level, action, &result, &session.snapshot());
            }
        }
    }

    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        invalid = summary.invalid,
        "session ended"
    );
    Ok(summary)
}
