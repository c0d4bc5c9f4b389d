//! Console rendering module.
//!
//! A small line-oriented rendering layer: [`GameView`] turns session state and
//! action results into styled [`Line`]s without doing any I/O, and
//! [`ConsoleRenderer`] flushes them through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep every message testable as plain text
//! - Colour piece symbols when the terminal allows it

pub mod renderer;
pub mod style;
pub mod view;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use renderer::{encode_lines_into, ConsoleRenderer};
pub use style::{piece_color, Line, Rgb, Span, SpanStyle};
pub use view::GameView;
