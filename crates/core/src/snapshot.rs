use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY};

/// Read-only copy of a session, for views and the action journal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    /// Front-to-back.
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Top-to-base.
    pub stack: ArrayVec<Piece, STACK_CAPACITY>,
    pub undo_available: bool,
    pub next_id: u32,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.stack.clear();
        self.undo_available = false;
        self.next_id = 0;
    }

    /// Every id currently held, queue first then stack
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.queue.iter().chain(self.stack.iter()).map(|p| p.id)
    }
}
