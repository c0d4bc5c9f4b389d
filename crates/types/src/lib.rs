//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (core logic, console rendering, action journal).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces held by the circular queue |
//! | `STACK_CAPACITY` | 3 | Reserved pieces held by the stack |
//! | `TRIPLE_SWAP_LEN` | 3 | Pieces exchanged by a triple swap |
//!
//! # Levels
//!
//! Levels only gate which actions the menu offers:
//!
//! | Level | Actions |
//! |-------|---------|
//! | Novice | play, insert |
//! | Adventurer | play, reserve, use reserved |
//! | Master | play, reserve, use reserved, swap front, swap triple, transfer, undo |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{Action, Level, PieceKind, QUEUE_CAPACITY, STACK_CAPACITY};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//!
//! // Menu selections depend on the level
//! assert_eq!(Level::Novice.action_for(2), Some(Action::Insert));
//! assert_eq!(Level::Master.action_for(2), Some(Action::Reserve));
//! assert_eq!(Level::Novice.action_for(4), None);
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! assert_eq!(STACK_CAPACITY, 3);
//! ```

use std::fmt;

/// Number of upcoming pieces the queue holds (5)
pub const QUEUE_CAPACITY: usize = 5;

/// Number of pieces the reserve stack holds (3)
pub const STACK_CAPACITY: usize = 3;

/// Pieces exchanged by a triple swap (3)
pub const TRIPLE_SWAP_LEN: usize = 3;

/// Menu selection that always leaves the game
pub const QUIT_SELECTION: u8 = 0;

/// The four piece symbols
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every symbol, in generator sampling order
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("s"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase symbol as displayed in the console
    pub fn symbol(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

/// A piece circulating through the queue and the reserve stack.
///
/// Pieces are only created by the generator; `id` is unique for the whole run
/// and strictly increasing in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.symbol(), self.id)
    }
}

/// Transitions that can be applied to a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Remove the front piece and replenish the queue
    Play,
    /// Append a freshly generated piece to the queue
    Insert,
    /// Move the front piece onto the reserve stack and replenish the queue
    Reserve,
    /// Pop the top reserved piece
    UseReserved,
    /// Exchange queue front with stack top
    SwapFront,
    /// Exchange the first three queue pieces with the three stacked pieces
    SwapTriple,
    /// Refill queue and stack from each other ("invert")
    Transfer,
    /// Restore the state captured before the last successful action
    Undo,
}

impl Action {
    /// Parse action from string (case-insensitive, camelCase or snake_case)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::Action;
    ///
    /// assert_eq!(Action::from_str("swapTriple"), Some(Action::SwapTriple));
    /// assert_eq!(Action::from_str("use_reserved"), Some(Action::UseReserved));
    /// assert_eq!(Action::from_str("invert"), Some(Action::Transfer));
    /// assert_eq!(Action::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "").as_str() {
            "play" => Some(Action::Play),
            "insert" => Some(Action::Insert),
            "reserve" => Some(Action::Reserve),
            "usereserved" => Some(Action::UseReserved),
            "swapfront" => Some(Action::SwapFront),
            "swaptriple" => Some(Action::SwapTriple),
            "transfer" | "invert" => Some(Action::Transfer),
            "undo" => Some(Action::Undo),
            _ => None,
        }
    }

    /// Convert to camelCase string (journal records)
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Play => "play",
            Action::Insert => "insert",
            Action::Reserve => "reserve",
            Action::UseReserved => "useReserved",
            Action::SwapFront => "swapFront",
            Action::SwapTriple => "swapTriple",
            Action::Transfer => "transfer",
            Action::Undo => "undo",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Action::Play => "Play piece",
            Action::Insert => "Insert new piece",
            Action::Reserve => "Reserve front piece",
            Action::UseReserved => "Use reserved piece",
            Action::SwapFront => "Swap queue front with stack top",
            Action::SwapTriple => "Swap first 3 of queue with the 3 in stack",
            Action::Transfer => "Transfer between queue and stack",
            Action::Undo => "Undo last action",
        }
    }
}

/// What a successful action did, with the pieces it touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Played {
        played: Piece,
        replenished: Piece,
    },
    Inserted {
        piece: Piece,
    },
    Reserved {
        reserved: Piece,
        replenished: Piece,
    },
    UsedReserved {
        piece: Piece,
    },
    /// `to_queue` came off the stack top; `to_stack` came off the queue front.
    SwappedFront {
        to_queue: Piece,
        to_stack: Piece,
    },
    /// Index `i` pairs queue position `i` with stack depth `i` (0 = top).
    SwappedTriple {
        to_queue: [Piece; TRIPLE_SWAP_LEN],
        to_stack: [Piece; TRIPLE_SWAP_LEN],
    },
    Transferred {
        queue_len: usize,
        stack_len: usize,
    },
    Undone,
}

impl Outcome {
    /// Action that produced this outcome
    pub fn action(&self) -> Action {
        match self {
            Outcome::Played { .. } => Action::Play,
            Outcome::Inserted { .. } => Action::Insert,
            Outcome::Reserved { .. } => Action::Reserve,
            Outcome::UsedReserved { .. } => Action::UseReserved,
            Outcome::SwappedFront { .. } => Action::SwapFront,
            Outcome::SwappedTriple { .. } => Action::SwapTriple,
            Outcome::Transferred { .. } => Action::Transfer,
            Outcome::Undone => Action::Undo,
        }
    }
}

/// One numbered line of the action menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub selection: u8,
    pub action: Action,
}

const fn entry(selection: u8, action: Action) -> MenuEntry {
    MenuEntry { selection, action }
}

const NOVICE_MENU: [MenuEntry; 2] = [entry(1, Action::Play), entry(2, Action::Insert)];

const ADVENTURER_MENU: [MenuEntry; 3] = [
    entry(1, Action::Play),
    entry(2, Action::Reserve),
    entry(3, Action::UseReserved),
];

const MASTER_MENU: [MenuEntry; 7] = [
    entry(1, Action::Play),
    entry(2, Action::Reserve),
    entry(3, Action::UseReserved),
    entry(4, Action::SwapFront),
    entry(5, Action::SwapTriple),
    entry(6, Action::Transfer),
    entry(7, Action::Undo),
];

/// Difficulty level, gating the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Novice,
    Adventurer,
    Master,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Novice, Level::Adventurer, Level::Master];

    /// Parse a level by name or by its 1-based number
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::Level;
    ///
    /// assert_eq!(Level::from_str("MASTER"), Some(Level::Master));
    /// assert_eq!(Level::from_str("2"), Some(Level::Adventurer));
    /// assert_eq!(Level::from_str("4"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "novice" | "1" => Some(Level::Novice),
            "adventurer" | "2" => Some(Level::Adventurer),
            "master" | "3" => Some(Level::Master),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Novice => "novice",
            Level::Adventurer => "adventurer",
            Level::Master => "master",
        }
    }

    /// Menu entries offered at this level, in selection order
    pub fn menu(&self) -> &'static [MenuEntry] {
        match self {
            Level::Novice => &NOVICE_MENU,
            Level::Adventurer => &ADVENTURER_MENU,
            Level::Master => &MASTER_MENU,
        }
    }

    /// Resolve a menu selection at this level
    pub fn action_for(&self, selection: u8) -> Option<Action> {
        self.menu()
            .iter()
            .find(|e| e.selection == selection)
            .map(|e| e.action)
    }

    pub fn allows(&self, action: Action) -> bool {
        self.menu().iter().any(|e| e.action == action)
    }
}

/// Why an action could not be applied.
///
/// Every failure is all-or-nothing: the session is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ActionError {
    #[error("the queue is empty, there is no piece to take")]
    EmptyQueue,
    #[error("the queue is full, no piece can be added")]
    FullQueue,
    #[error("the reserve stack is empty, there is no reserved piece")]
    EmptyStack,
    #[error("the reserve stack is full, no piece can be reserved")]
    FullStack,
    #[error("not enough pieces in the queue or the reserve stack to swap")]
    PreconditionFailed,
    #[error("there is no action to undo")]
    NoPendingUndo,
}

impl ActionError {
    /// Stable identifier (journal records)
    pub fn code(&self) -> &'static str {
        match self {
            ActionError::EmptyQueue => "empty_queue",
            ActionError::FullQueue => "full_queue",
            ActionError::EmptyStack => "empty_stack",
            ActionError::FullStack => "full_stack",
            ActionError::PreconditionFailed => "precondition_failed",
            ActionError::NoPendingUndo => "no_pending_undo",
        }
    }
}
