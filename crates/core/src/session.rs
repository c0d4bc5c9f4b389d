//! Session module - the game operations layer
//!
//! A [`GameSession`] owns the piece generator, the circular queue, the reserve
//! stack and the undo slot. Every operation follows the same contract:
//!
//! 1. validate its preconditions; on failure drop any pending undo and return
//!    the error with nothing mutated,
//! 2. capture the undo slot,
//! 3. mutate and report the pieces involved.
//!
//! Undo is the only transition that does not capture.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::queue::PieceQueue;
use crate::rng::PieceGenerator;
use crate::snapshot::SessionSnapshot;
use crate::stack::ReserveStack;
use crate::types::{
    Action, ActionError, Outcome, Piece, QUEUE_CAPACITY, STACK_CAPACITY, TRIPLE_SWAP_LEN,
};
use crate::undo::UndoSlot;

/// Complete piece-management state
#[derive(Debug, Clone)]
pub struct GameSession {
    generator: PieceGenerator,
    queue: PieceQueue,
    stack: ReserveStack,
    undo: UndoSlot,
}

impl GameSession {
    /// Create a session with a full queue, an empty stack and nothing to undo
    pub fn new(seed: u32) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let mut queue = PieceQueue::new();
        while !queue.is_full() {
            // Cannot fail: the loop stops as soon as the queue is full.
            let _ = queue.enqueue(generator.generate());
        }

        Self {
            generator,
            queue,
            stack: ReserveStack::new(),
            undo: UndoSlot::new(),
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    pub fn undo_available(&self) -> bool {
        self.undo.is_valid()
    }

    pub fn next_id(&self) -> u32 {
        self.generator.next_id()
    }

    #[cfg(test)]
    pub(crate) fn parts_mut(&mut self) -> (&mut PieceQueue, &mut ReserveStack) {
        (&mut self.queue, &mut self.stack)
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.clear();
        out.queue = self.queue.to_ordered();
        out.stack = self.stack.to_ordered();
        out.undo_available = self.undo.is_valid();
        out.next_id = self.generator.next_id();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply an action by name
    pub fn apply(&mut self, action: Action) -> Result<Outcome, ActionError> {
        let result = match action {
            Action::Play => self.play(),
            Action::Insert => self.insert(),
            Action::Reserve => self.reserve(),
            Action::UseReserved => self.use_reserved(),
            Action::SwapFront => self.swap_front(),
            Action::SwapTriple => self.swap_triple(),
            Action::Transfer => self.transfer(),
            Action::Undo => self.undo(),
        };

        match &result {
            Ok(outcome) => debug!(
                action = action.as_str(),
                ?outcome,
                queue_len = self.queue.len(),
                stack_len = self.stack.len(),
                "action applied"
            ),
            Err(err) => debug!(action = action.as_str(), reason = err.code(), "action rejected"),
        }
        result
    }

    /// Failed precondition: nothing changed, so nothing may be undone into.
    fn reject(&mut self, err: ActionError) -> Result<Outcome, ActionError> {
        self.undo.invalidate();
        Err(err)
    }

    fn checkpoint(&mut self) {
        self.undo.capture(&self.queue, &self.stack);
    }

    /// Append a fresh piece behind a slot that was just freed
    fn replenish(&mut self) -> Result<Piece, ActionError> {
        if self.queue.is_full() {
            return Err(ActionError::FullQueue);
        }
        let piece = self.generator.generate();
        self.queue.enqueue(piece)?;
        Ok(piece)
    }

    /// Play the front piece; the queue is topped up with a new one.
    pub fn play(&mut self) -> Result<Outcome, ActionError> {
        if self.queue.is_empty() {
            return self.reject(ActionError::EmptyQueue);
        }
        self.checkpoint();

        let played = self.queue.dequeue()?;
        let replenished = self.replenish()?;
        Ok(Outcome::Played {
            played,
            replenished,
        })
    }

    /// Add one generated piece at the back of the queue.
    pub fn insert(&mut self) -> Result<Outcome, ActionError> {
        if self.queue.is_full() {
            return self.reject(ActionError::FullQueue);
        }
        self.checkpoint();

        let piece = self.replenish()?;
        Ok(Outcome::Inserted { piece })
    }

    /// Move the front piece onto the reserve stack; the queue is topped up.
    pub fn reserve(&mut self) -> Result<Outcome, ActionError> {
        if self.queue.is_empty() {
            return self.reject(ActionError::EmptyQueue);
        }
        if self.stack.is_full() {
            return self.reject(ActionError::FullStack);
        }
        self.checkpoint();

        let reserved = self.queue.dequeue()?;
        self.stack.push(reserved)?;
        let replenished = self.replenish()?;
        Ok(Outcome::Reserved {
            reserved,
            replenished,
        })
    }

    /// Take the top reserved piece. The queue is not touched.
    pub fn use_reserved(&mut self) -> Result<Outcome, ActionError> {
        if self.stack.is_empty() {
            return self.reject(ActionError::EmptyStack);
        }
        self.checkpoint();

        let piece = self.stack.pop()?;
        Ok(Outcome::UsedReserved { piece })
    }

    /// Exchange queue front and stack top in place.
    pub fn swap_front(&mut self) -> Result<Outcome, ActionError> {
        if self.queue.is_empty() || self.stack.is_empty() {
            return self.reject(ActionError::PreconditionFailed);
        }
        self.checkpoint();

        let (to_queue, to_stack) = self.swap_at(0)?;
        Ok(Outcome::SwappedFront { to_queue, to_stack })
    }

    /// Exchange queue positions 0..3 with stack depths 0..3 pairwise.
    pub fn swap_triple(&mut self) -> Result<Outcome, ActionError> {
        if self.queue.len() < TRIPLE_SWAP_LEN || self.stack.len() < TRIPLE_SWAP_LEN {
            return self.reject(ActionError::PreconditionFailed);
        }
        self.checkpoint();

        let mut to_queue = ArrayVec::<Piece, TRIPLE_SWAP_LEN>::new();
        let mut to_stack = ArrayVec::<Piece, TRIPLE_SWAP_LEN>::new();
        for i in 0..TRIPLE_SWAP_LEN {
            let (q, s) = self.swap_at(i)?;
            to_queue.push(q);
            to_stack.push(s);
        }
        Ok(Outcome::SwappedTriple {
            to_queue: to_queue
                .into_inner()
                .map_err(|_| ActionError::PreconditionFailed)?,
            to_stack: to_stack
                .into_inner()
                .map_err(|_| ActionError::PreconditionFailed)?,
        })
    }

    /// Swap queue position `i` with stack depth `i`; returns (new queue piece, new stack piece)
    fn swap_at(&mut self, i: usize) -> Result<(Piece, Piece), ActionError> {
        let in_queue = self
            .queue
            .get_mut(i)
            .ok_or(ActionError::PreconditionFailed)?;
        let in_stack = self
            .stack
            .get_mut_from_top(i)
            .ok_or(ActionError::PreconditionFailed)?;
        std::mem::swap(in_queue, in_stack);
        Ok((*in_queue, *in_stack))
    }

    /// Rebuild both containers from each other ("invert").
    ///
    /// Fill order: the queue takes the stack base-to-top, then the old queue
    /// front-to-back until full; whatever is left of the old queue goes onto
    /// the stack in the same order. Queue and stack sizes may change, the total
    /// piece count does not. This is not a symmetric swap.
    pub fn transfer(&mut self) -> Result<Outcome, ActionError> {
        self.checkpoint();

        let old_queue: ArrayVec<Piece, QUEUE_CAPACITY> = self.queue.to_ordered();
        let old_stack: ArrayVec<Piece, STACK_CAPACITY> =
            self.stack.base_to_top().iter().copied().collect();
        self.queue.clear();
        self.stack.clear();

        for &piece in &old_stack {
            if self.queue.is_full() {
                break;
            }
            self.queue.enqueue(piece)?;
        }

        let mut rest = old_queue.iter().copied();
        while !self.queue.is_full() {
            match rest.next() {
                Some(piece) => self.queue.enqueue(piece)?,
                None => break,
            }
        }

        for piece in rest {
            if self.stack.is_full() {
                break;
            }
            self.stack.push(piece)?;
        }

        Ok(Outcome::Transferred {
            queue_len: self.queue.len(),
            stack_len: self.stack.len(),
        })
    }

    /// Return to the state captured by the last successful action.
    pub fn undo(&mut self) -> Result<Outcome, ActionError> {
        self.undo.restore(&mut self.queue, &mut self.stack)?;
        Ok(Outcome::Undone)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
