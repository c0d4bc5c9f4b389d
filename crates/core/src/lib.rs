//! Core piece-management logic - pure, deterministic, and testable
//!
//! This module contains the queue/stack engine and nothing else.
//! It has **no dependencies** on the console, stdin, or files, making it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every operation reports a typed outcome or error
//! - **Allocation-free**: containers are fixed-capacity
//!
//! # Module Structure
//!
//! - [`rng`]: LCG and the piece generator (uniform symbol, increasing id)
//! - [`queue`]: 5-slot circular queue of upcoming pieces
//! - [`stack`]: 3-slot reserve stack
//! - [`undo`]: single-slot capture/restore of queue and stack
//! - [`session`]: the operations (play, insert, reserve, use reserved, swaps,
//!   transfer, undo)
//! - [`snapshot`]: read-only copy of a session for views
//!
//! # Rules
//!
//! - Every piece removed from the queue by play or reserve is replaced by a
//!   freshly generated one, so a full queue stays full.
//! - A failed action changes nothing and drops any pending undo.
//! - A successful action (other than undo) replaces the pending undo.
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::GameSession;
//! use tetris_stack_types::{Action, ActionError, Outcome};
//!
//! let mut session = GameSession::new(12345);
//! assert_eq!(session.queue().len(), 5);
//!
//! let Ok(Outcome::Reserved { reserved, .. }) = session.apply(Action::Reserve) else {
//!     panic!("reserve on a fresh session succeeds");
//! };
//! assert_eq!(reserved.id, 0);
//! assert_eq!(session.stack().len(), 1);
//!
//! assert_eq!(session.apply(Action::Undo), Ok(Outcome::Undone));
//! assert_eq!(session.apply(Action::Undo), Err(ActionError::NoPendingUndo));
//! ```

pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stack;
pub mod undo;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use queue::PieceQueue;
pub use rng::{PieceGenerator, SimpleRng};
pub use session::GameSession;
pub use snapshot::SessionSnapshot;
pub use stack::ReserveStack;
pub use undo::{SavedState, UndoSlot};
