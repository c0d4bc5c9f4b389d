//! Reserve stack - fixed-capacity LIFO of reserved pieces

use arrayvec::ArrayVec;

use crate::types::{ActionError, Piece, STACK_CAPACITY};

/// LIFO holding at most [`STACK_CAPACITY`] pieces.
///
/// Storage is base-to-top; the last element is the top.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReserveStack {
    items: ArrayVec<Piece, STACK_CAPACITY>,
}

impl ReserveStack {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        STACK_CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Push onto the top. A full stack is left untouched.
    pub fn push(&mut self, piece: Piece) -> Result<(), ActionError> {
        self.items
            .try_push(piece)
            .map_err(|_| ActionError::FullStack)
    }

    /// Remove and return the top piece
    pub fn pop(&mut self) -> Result<Piece, ActionError> {
        self.items.pop().ok_or(ActionError::EmptyStack)
    }

    pub fn peek(&self) -> Option<Piece> {
        self.items.last().copied()
    }

    /// Mutable access to the piece `depth` positions below the top (0 = top)
    pub fn get_mut_from_top(&mut self, depth: usize) -> Option<&mut Piece> {
        let len = self.items.len();
        if depth >= len {
            return None;
        }
        self.items.get_mut(len - 1 - depth)
    }

    /// Top-to-base order (display order)
    pub fn to_ordered(&self) -> ArrayVec<Piece, STACK_CAPACITY> {
        self.items.iter().rev().copied().collect()
    }

    /// Base-to-top order (push order)
    pub fn base_to_top(&self) -> &[Piece] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn piece(id: u32) -> Piece {
        Piece::new(PieceKind::O, id)
    }

    #[test]
    fn test_lifo_order() {
        let mut stack = ReserveStack::new();
        stack.push(piece(1)).unwrap();
        stack.push(piece(2)).unwrap();
        assert_eq!(stack.peek(), Some(piece(2)));
        assert_eq!(stack.pop(), Ok(piece(2)));
        assert_eq!(stack.pop(), Ok(piece(1)));
        assert_eq!(stack.pop(), Err(ActionError::EmptyStack));
    }

    #[test]
    fn test_push_on_full_stack_is_noop() {
        let mut stack = ReserveStack::new();
        for id in 0..3 {
            stack.push(piece(id)).unwrap();
        }
        assert!(stack.is_full());

        let before = stack.clone();
        assert_eq!(stack.push(piece(9)), Err(ActionError::FullStack));
        assert_eq!(stack, before);
    }

    #[test]
    fn test_orders() {
        let mut stack = ReserveStack::new();
        for id in 0..3 {
            stack.push(piece(id)).unwrap();
        }
        let top_down: Vec<u32> = stack.to_ordered().iter().map(|p| p.id).collect();
        assert_eq!(top_down, vec![2, 1, 0]);
        let bottom_up: Vec<u32> = stack.base_to_top().iter().map(|p| p.id).collect();
        assert_eq!(bottom_up, vec![0, 1, 2]);
    }

    #[test]
    fn test_get_mut_from_top() {
        let mut stack = ReserveStack::new();
        stack.push(piece(0)).unwrap();
        stack.push(piece(1)).unwrap();

        *stack.get_mut_from_top(1).unwrap() = piece(10);
        assert_eq!(stack.base_to_top(), &[piece(10), piece(1)]);
        assert!(stack.get_mut_from_top(2).is_none());
    }
}
