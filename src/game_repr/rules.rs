//! Chess rules oracle backed by the `chess` crate.
//!
//! Move generation and legality come straight from `chess::MoveGen`; this
//! module adds the bits the crate leaves to the caller: move clocks, the
//! fifty-move rule and insufficient-material draws.

use chess::{BitBoard, BoardStatus, Color, MoveGen, Piece, Square, EMPTY};

use super::moves::Move;
use super::oracle::{MoveList, RulesOracle, Side};
use super::position::Position;
use crate::error::IllegalMoveError;

/// Half-move clock value at which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 100;

const DARK_SQUARES: BitBoard = BitBoard(0xAA55_AA55_AA55_AA55);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::Ongoing
    }
}

/// Standard chess. Stateless; every query works on the position it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChessRules;

impl ChessRules {
    pub fn new() -> Self {
        Self
    }

    pub fn status(&self, pos: &Position) -> GameStatus {
        match pos.board.status() {
            BoardStatus::Checkmate => return GameStatus::Checkmate,
            BoardStatus::Stalemate => return GameStatus::Stalemate,
            BoardStatus::Ongoing => {}
        }

        if pos.halfmove_clock >= FIFTY_MOVE_LIMIT {
            GameStatus::FiftyMoveRule
        } else if is_insufficient_material(pos) {
            GameStatus::InsufficientMaterial
        } else {
            GameStatus::Ongoing
        }
    }

    /// Number of legal moves for the piece on `square`.
    ///
    /// Only the side to move has legal moves, so a piece of the other side
    /// (or an empty square) counts zero. Each promotion choice counts once.
    pub fn moves_from(&self, pos: &Position, square: Square) -> usize {
        if pos.board.color_on(square) != Some(pos.board.side_to_move()) {
            return 0;
        }
        MoveGen::new_legal(&pos.board)
            .filter(|m| m.get_source() == square)
            .count()
    }

    /// Legal-move counts for every origin square, indexed by square index.
    /// One move generation pass instead of one per piece.
    pub fn mobility_by_square(&self, pos: &Position) -> [u32; 64] {
        let mut counts = [0u32; 64];
        for m in MoveGen::new_legal(&pos.board) {
            counts[m.get_source().to_index()] += 1;
        }
        counts
    }

    pub fn is_legal(&self, pos: &Position, mv: &Move) -> bool {
        pos.board.legal(mv.raw())
    }
}

impl RulesOracle for ChessRules {
    type Position = Position;
    type Move = Move;

    fn legal_moves(&self, pos: &Position) -> MoveList<Move> {
        MoveGen::new_legal(&pos.board).map(Move::from).collect()
    }

    fn apply(&self, pos: &Position, mv: &Move) -> Result<Position, IllegalMoveError> {
        if !self.is_legal(pos, mv) {
            return Err(IllegalMoveError::new(mv.to_string(), pos.to_fen()));
        }

        let board = &pos.board;
        let is_pawn_move = board.piece_on(mv.source()) == Some(Piece::Pawn);
        // En passant lands on an empty square but is a pawn move anyway.
        let is_capture = board.piece_on(mv.destination()).is_some();

        let halfmove_clock = if is_pawn_move || is_capture {
            0
        } else {
            pos.halfmove_clock.saturating_add(1)
        };
        let fullmove_number = match board.side_to_move() {
            Color::White => pos.fullmove_number,
            Color::Black => pos.fullmove_number.saturating_add(1),
        };

        Ok(Position {
            board: board.make_move_new(mv.raw()),
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Bitboard-only draw checks run first; `Board::status` counts legal
    /// moves and is only reached when neither draw rule applies.
    fn is_terminal(&self, pos: &Position) -> bool {
        pos.halfmove_clock >= FIFTY_MOVE_LIMIT
            || is_insufficient_material(pos)
            || pos.board.status() != BoardStatus::Ongoing
    }

    fn side_to_move(&self, pos: &Position) -> Side {
        match pos.board.side_to_move() {
            Color::White => Side::First,
            Color::Black => Side::Second,
        }
    }
}

/// Neither side can ever deliver mate: bare kings, a single minor piece, or
/// any number of bishops all standing on squares of one colour.
fn is_insufficient_material(pos: &Position) -> bool {
    let board = &pos.board;
    let heavy = *board.pieces(Piece::Pawn) | *board.pieces(Piece::Rook) | *board.pieces(Piece::Queen);
    if heavy != EMPTY {
        return false;
    }

    let knights = *board.pieces(Piece::Knight);
    let bishops = *board.pieces(Piece::Bishop);
    let minors = (knights | bishops).popcnt();

    if minors <= 1 {
        return true;
    }
    if knights != EMPTY {
        return false;
    }

    let on_dark = (bishops & DARK_SQUARES).popcnt();
    on_dark == 0 || on_dark == bishops.popcnt()
}
