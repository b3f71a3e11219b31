//! Rules oracle abstraction consumed by the search engine.
//!
//! The engine never generates or validates moves itself. Everything it knows
//! about a game comes through this trait: which moves are legal, what position
//! a move leads to, whether the game is over, and whose turn it is.
//!
//! Positions are treated as immutable values. `apply` returns a fresh position
//! and must leave its input untouched, which lets the search explore the tree
//! without make/unmake bookkeeping.

use std::fmt;

use smallvec::SmallVec;

use crate::error::IllegalMoveError;

/// Stack-allocated move list; 64 covers almost every chess position.
pub type MoveList<M> = SmallVec<[M; 64]>;

/// The two players. `First` is the maximizer (White in chess).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// True for the side whose score the search tries to increase.
    pub fn is_maximizer(&self) -> bool {
        *self == Side::First
    }
}

/// Legal-move generation and move application for a two-player,
/// perfect-information game.
pub trait RulesOracle {
    type Position: Clone;
    type Move: Clone + fmt::Debug + fmt::Display;

    /// All moves legal for the side to move. Empty iff there are none.
    fn legal_moves(&self, pos: &Self::Position) -> MoveList<Self::Move>;

    /// Position reached by playing `mv`. Fails if `mv` is not currently legal.
    fn apply(
        &self,
        pos: &Self::Position,
        mv: &Self::Move,
    ) -> Result<Self::Position, IllegalMoveError>;

    /// Whether the game is over (checkmate, stalemate, draw).
    fn is_terminal(&self, pos: &Self::Position) -> bool;

    fn side_to_move(&self, pos: &Self::Position) -> Side;
}

impl<O: RulesOracle + ?Sized> RulesOracle for &O {
    type Position = O::Position;
    type Move = O::Move;

    fn legal_moves(&self, pos: &Self::Position) -> MoveList<Self::Move> {
        (**self).legal_moves(pos)
    }

    fn apply(
        &self,
        pos: &Self::Position,
        mv: &Self::Move,
    ) -> Result<Self::Position, IllegalMoveError> {
        (**self).apply(pos, mv)
    }

    fn is_terminal(&self, pos: &Self::Position) -> bool {
        (**self).is_terminal(pos)
    }

    fn side_to_move(&self, pos: &Self::Position) -> Side {
        (**self).side_to_move(pos)
    }
}
