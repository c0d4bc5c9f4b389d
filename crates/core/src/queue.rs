//! Queue module - fixed-capacity circular queue of upcoming pieces
//!
//! The queue keeps a fixed slot array and a `front` index. Dequeue advances
//! `front` instead of shifting, so both ends are O(1) with no allocation.
//! Callers only ever see the logical front-to-back order.

use arrayvec::ArrayVec;

use crate::types::{ActionError, Piece, QUEUE_CAPACITY};

/// Circular FIFO holding at most [`QUEUE_CAPACITY`] pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    front: usize,
    len: usize,
}

impl PieceQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            front: 0,
            len: 0,
        }
    }

    /// Physical slot of logical position `pos` (0 = front)
    #[inline(always)]
    fn slot_index(&self, pos: usize) -> usize {
        (self.front + pos) % QUEUE_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    /// Append a piece at the back. A full queue is left untouched.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), ActionError> {
        if self.is_full() {
            return Err(ActionError::FullQueue);
        }
        let idx = self.slot_index(self.len);
        self.slots[idx] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front piece
    pub fn dequeue(&mut self) -> Result<Piece, ActionError> {
        if self.is_empty() {
            return Err(ActionError::EmptyQueue);
        }
        let piece = self.slots[self.front]
            .take()
            .ok_or(ActionError::EmptyQueue)?;
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        Ok(piece)
    }

    /// Front piece, if any
    pub fn peek(&self) -> Option<Piece> {
        self.get(0)
    }

    /// Piece at logical position `pos` (0 = front)
    pub fn get(&self, pos: usize) -> Option<Piece> {
        if pos >= self.len {
            return None;
        }
        self.slots[self.slot_index(pos)]
    }

    /// Mutable access to the piece at logical position `pos`, for in-place swaps
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut Piece> {
        if pos >= self.len {
            return None;
        }
        let idx = self.slot_index(pos);
        self.slots[idx].as_mut()
    }

    /// Logical front-to-back order.
    ///
    /// This is stack-only and does not allocate.
    pub fn to_ordered(&self) -> ArrayVec<Piece, QUEUE_CAPACITY> {
        (0..self.len).filter_map(|pos| self.get(pos)).collect()
    }

    /// Remove every piece and reset the front index
    pub fn clear(&mut self) {
        self.slots = [None; QUEUE_CAPACITY];
        self.front = 0;
        self.len = 0;
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
