//! Tetris Stack (workspace facade crate).
//!
//! Re-exports the member crates as `tetris_stack::{core,input,term,types}` and
//! holds the application pieces that tie them together: configuration, the
//! action journal and the interactive shell loop.

pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;

pub mod config;
pub mod journal;
pub mod shell;
