//! Undo module - single-slot snapshot of queue and reserve stack
//!
//! Capturing overwrites whatever was saved before, so at most one undo is ever
//! pending. Restoring consumes the slot.

use tracing::trace;

use crate::queue::PieceQueue;
use crate::stack::ReserveStack;
use crate::types::ActionError;

/// Owned copy of both containers.
///
/// Fields are plain values (no shared storage), so mutating the live
/// containers can never reach into a saved state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedState {
    pub queue: PieceQueue,
    pub stack: ReserveStack,
}

/// The one undo slot of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoSlot {
    saved: Option<SavedState>,
}

impl UndoSlot {
    /// Create an empty (invalid) slot
    pub fn new() -> Self {
        Self { saved: None }
    }

    /// Copy both containers into the slot, replacing any earlier capture
    pub fn capture(&mut self, queue: &PieceQueue, stack: &ReserveStack) {
        trace!(queue_len = queue.len(), stack_len = stack.len(), "undo captured");
        self.saved = Some(SavedState {
            queue: queue.clone(),
            stack: stack.clone(),
        });
    }

    /// Overwrite the live containers with the saved copies and empty the slot.
    ///
    /// Without a pending capture the containers are not touched.
    pub fn restore(
        &mut self,
        queue: &mut PieceQueue,
        stack: &mut ReserveStack,
    ) -> Result<(), ActionError> {
        let saved = self.saved.take().ok_or(ActionError::NoPendingUndo)?;
        *queue = saved.queue;
        *stack = saved.stack;
        trace!(queue_len = queue.len(), stack_len = stack.len(), "undo restored");
        Ok(())
    }

    /// Drop the pending capture without touching live state
    pub fn invalidate(&mut self) {
        self.saved = None;
    }

    pub fn is_valid(&self) -> bool {
        self.saved.is_some()
    }

    pub fn saved(&self) -> Option<&SavedState> {
        self.saved.as_ref()
    }
}
