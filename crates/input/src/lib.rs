//! Console input module.
//!
//! Maps typed menu selections (small integers, `0` to quit) into
//! [`crate::types::Action`]s for the current level, and reads them line by
//! line from any buffered source.

pub mod handler;
pub mod map;

pub use tetris_stack_types as types;

pub use handler::MenuReader;
pub use map::{choice_for_line, level_for_line, parse_selection, MenuChoice};
