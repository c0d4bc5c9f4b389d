//! Session tests - container invariants, undo law, and the reference scenarios

use std::collections::HashSet;

use tetris_stack::core::{GameSession, SimpleRng};
use tetris_stack::types::{
    Action, ActionError, Outcome, Piece, QUEUE_CAPACITY, STACK_CAPACITY,
};

const ALL_ACTIONS: [Action; 8] = [
    Action::Play,
    Action::Insert,
    Action::Reserve,
    Action::UseReserved,
    Action::SwapFront,
    Action::SwapTriple,
    Action::Transfer,
    Action::Undo,
];

fn queue_ids(session: &GameSession) -> Vec<u32> {
    session.queue().to_ordered().iter().map(|p| p.id).collect()
}

fn stack_ids(session: &GameSession) -> Vec<u32> {
    session.stack().to_ordered().iter().map(|p| p.id).collect()
}

fn sizes(session: &GameSession) -> (usize, usize) {
    (session.queue().len(), session.stack().len())
}

// ============== Scenarios ==============

#[test]
fn test_fresh_queue_and_first_play() {
    let mut session = GameSession::new(2024);
    assert_eq!(queue_ids(&session), vec![0, 1, 2, 3, 4]);

    let outcome = session.apply(Action::Play).unwrap();
    let Outcome::Played {
        played,
        replenished,
    } = outcome
    else {
        panic!("unexpected outcome: {:?}", outcome);
    };
    assert_eq!(played.id, 0);
    assert_eq!(replenished.id, 5);
    assert_eq!(queue_ids(&session), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_reserve_moves_front_to_stack() {
    let mut session = GameSession::new(2024);
    let front = session.queue().peek().unwrap();

    session.apply(Action::Reserve).unwrap();
    assert_eq!(sizes(&session), (5, 1));
    assert_eq!(session.stack().peek(), Some(front));
}

#[test]
fn test_fourth_reserve_fails_with_full_stack() {
    let mut session = GameSession::new(2024);
    for _ in 0..3 {
        session.apply(Action::Reserve).unwrap();
    }
    assert_eq!(sizes(&session), (5, 3));

    assert_eq!(session.apply(Action::Reserve), Err(ActionError::FullStack));
    assert_eq!(sizes(&session), (5, 3));
}

#[test]
fn test_triple_swap_exchanges_front_three_with_stack() {
    let mut session = GameSession::new(2024);
    for _ in 0..3 {
        session.apply(Action::Reserve).unwrap();
    }
    let queue: Vec<Piece> = session.queue().to_ordered().to_vec();
    let stack: Vec<Piece> = session.stack().to_ordered().to_vec(); // top -> base

    session.apply(Action::SwapTriple).unwrap();

    let queue_after = session.queue().to_ordered();
    let stack_after = session.stack().to_ordered();
    assert_eq!(&queue_after[..3], &stack[..]);
    assert_eq!(&stack_after[..], &queue[..3]);
    assert_eq!(&queue_after[3..], &queue[3..]);
}

#[test]
fn test_failed_use_reserved_leaves_nothing_to_undo() {
    let mut session = GameSession::new(2024);
    session.apply(Action::Play).unwrap();

    assert_eq!(
        session.apply(Action::UseReserved),
        Err(ActionError::EmptyStack)
    );
    assert_eq!(session.apply(Action::Undo), Err(ActionError::NoPendingUndo));
}

// ============== Laws ==============

#[test]
fn test_undo_law_for_every_action() {
    for action in ALL_ACTIONS {
        if action == Action::Undo {
            continue;
        }
        let mut session = GameSession::new(7);
        session.apply(Action::Reserve).unwrap();
        session.apply(Action::Reserve).unwrap();
        session.apply(Action::Reserve).unwrap();
        session.apply(Action::UseReserved).unwrap();
        session.apply(Action::Reserve).unwrap();
        let queue_before = session.queue().clone();
        let stack_before = session.stack().clone();

        if session.apply(action).is_err() {
            continue;
        }
        assert_eq!(session.apply(Action::Undo), Ok(Outcome::Undone), "{:?}", action);
        assert_eq!(session.queue(), &queue_before, "{:?}", action);
        assert_eq!(session.stack(), &stack_before, "{:?}", action);

        assert_eq!(session.apply(Action::Undo), Err(ActionError::NoPendingUndo));
        assert_eq!(session.queue(), &queue_before);
        assert_eq!(session.stack(), &stack_before);
    }
}

#[test]
fn test_undo_spans_one_step() {
    let mut session = GameSession::new(7);
    session.apply(Action::Play).unwrap();
    let after_first = queue_ids(&session);
    session.apply(Action::Play).unwrap();

    session.apply(Action::Undo).unwrap();
    assert_eq!(queue_ids(&session), after_first);
    assert_eq!(session.apply(Action::Undo), Err(ActionError::NoPendingUndo));
}

#[test]
fn test_transfer_is_not_an_involution() {
    let mut session = GameSession::new(11);
    for _ in 0..3 {
        session.apply(Action::Reserve).unwrap();
    }
    let q0 = queue_ids(&session);
    let s0 = stack_ids(&session);

    session.apply(Action::Transfer).unwrap();
    session.apply(Action::Transfer).unwrap();
    assert!(queue_ids(&session) != q0 || stack_ids(&session) != s0);
}

// ============== Randomised invariant walk ==============

#[test]
fn test_random_walk_keeps_invariants() {
    let mut rng = SimpleRng::new(0xC0FFEE);
    for seed in 0..20 {
        let mut session = GameSession::new(seed);
        let mut seen_ids: HashSet<u32> = queue_ids(&session).into_iter().collect();
        let mut last_id = *seen_ids.iter().max().unwrap();

        for _ in 0..300 {
            let action = ALL_ACTIONS[rng.next_range(ALL_ACTIONS.len() as u32) as usize];
            let queue_before = session.queue().clone();
            let stack_before = session.stack().clone();
            let total_before = queue_before.len() + stack_before.len();

            let result = session.apply(action);

            let (q, s) = sizes(&session);
            assert!(q <= QUEUE_CAPACITY);
            assert!(s <= STACK_CAPACITY);

            match result {
                Err(_) => {
                    assert_eq!(session.queue(), &queue_before, "{:?} mutated queue", action);
                    assert_eq!(session.stack(), &stack_before, "{:?} mutated stack", action);
                    assert!(!session.undo_available());
                }
                Ok(outcome) => {
                    match outcome {
                        Outcome::Played { replenished, .. }
                        | Outcome::Reserved { replenished, .. } => {
                            assert_eq!(q, queue_before.len());
                            assert!(replenished.id > last_id);
                            assert!(seen_ids.insert(replenished.id));
                            last_id = replenished.id;
                        }
                        Outcome::Inserted { piece } => {
                            assert!(piece.id > last_id);
                            assert!(seen_ids.insert(piece.id));
                            last_id = piece.id;
                        }
                        Outcome::Transferred { .. }
                        | Outcome::SwappedFront { .. }
                        | Outcome::SwappedTriple { .. } => {
                            assert_eq!(q + s, total_before);
                        }
                        Outcome::UsedReserved { .. } | Outcome::Undone => {}
                    }
                    assert_eq!(session.undo_available(), action != Action::Undo);
                }
            }

            // No piece is ever held twice.
            let snap = session.snapshot();
            let held: Vec<u32> = snap.ids().collect();
            let unique: HashSet<u32> = held.iter().copied().collect();
            assert_eq!(held.len(), unique.len());
        }
    }
}
