//! Console runner (default binary).
//!
//! Reads menu selections from stdin, one per line, and prints the queue, the
//! reserve stack and the result of each action.

use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tetris_stack::config::{Config, USAGE};
use tetris_stack::input::MenuReader;
use tetris_stack::journal::Journal;
use tetris_stack::shell;
use tetris_stack::term::ConsoleRenderer;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = Config::from_env()?;
    config.apply_args(&args)?;

    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut journal = match config.log_path.as_deref() {
        Some(path) => Journal::open(path)?,
        None => Journal::disabled(),
    };

    let stdin = io::stdin();
    let mut reader = MenuReader::new(stdin.lock());
    let mut renderer = ConsoleRenderer::stdout(config.color);

    shell::run(&config, &mut reader, &mut renderer, &mut journal)?;
    Ok(())
}
