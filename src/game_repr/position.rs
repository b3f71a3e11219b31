use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chess::{Board, Color, Piece, Square};

use crate::error::PositionError;

/*
 * Immutable chess position: the `chess` crate's board plus the two move
 * clocks it does not track. The six-field FEN is the canonical encoding;
 * equality and hashing go through it.
 */

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Copy)]
pub struct Position {
    pub(crate) board: Board,
    /// Plies since the last capture or pawn move (fifty-move rule)
    pub(crate) halfmove_clock: u32,
    /// Starts at 1, incremented after Black moves
    pub(crate) fullmove_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Position {
        Self {
            board: Board::default(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Parse a FEN string. The two clock fields are optional and default to `0 1`.
    pub fn from_fen(fen_str: &str) -> Result<Position, PositionError> {
        let invalid = |reason: &str| PositionError::InvalidFen {
            fen: fen_str.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = fen_str.split_whitespace().collect();
        if parts.len() < 4 || parts.len() > 6 {
            return Err(invalid("expected 4 to 6 space-separated fields"));
        }

        check_fields(&parts[..4]).map_err(invalid)?;
        let board = Board::from_str(&parts[..4].join(" ")).map_err(|e| invalid(&e.to_string()))?;

        let halfmove_clock = match parts.get(4) {
            Some(s) => s.parse().map_err(|_| invalid("bad half-move clock"))?,
            None => 0,
        };
        let fullmove_number = match parts.get(5) {
            Some(s) => s.parse().map_err(|_| invalid("bad full-move number"))?,
            None => 1,
        };
        if fullmove_number == 0 {
            return Err(invalid("full-move number starts at 1"));
        }

        Ok(Self {
            board,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Six-field FEN.
    pub fn to_fen(&self) -> String {
        // The chess crate writes its own placeholder clocks; keep only the
        // placement, side, castling and en passant fields.
        let board_fen = self.board.to_string();
        let fields: Vec<&str> = board_fen.split_whitespace().take(4).collect();
        format!(
            "{} {} {}",
            fields.join(" "),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn piece_at(&self, square: Square) -> Option<(Piece, Color)> {
        let piece = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some((piece, color))
    }

    pub fn is_in_check(&self) -> bool {
        self.board.checkers().popcnt() > 0
    }
}

/// Strict shape check of the placement, side, castling and en passant fields.
/// `Board::from_str` accepts out-of-range ranks and files, so this runs first.
fn check_fields(fields: &[&str]) -> Result<(), &'static str> {
    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != 8 {
        return Err("placement must have 8 ranks");
    }
    for rank in ranks {
        let mut files = 0;
        for c in rank.chars() {
            match c {
                '1'..='8' => files += c as u32 - '0' as u32,
                'p' | 'n' | 'b' | 'r' | 'q' | 'k' | 'P' | 'N' | 'B' | 'R' | 'Q' | 'K' => files += 1,
                _ => return Err("unexpected character in placement"),
            }
        }
        if files != 8 {
            return Err("every rank must cover 8 files");
        }
    }

    if fields[1] != "w" && fields[1] != "b" {
        return Err("side to move must be w or b");
    }

    let castling = fields[2];
    if castling != "-" {
        let mut seen = Vec::with_capacity(4);
        for c in castling.chars() {
            if !matches!(c, 'K' | 'Q' | 'k' | 'q') || seen.contains(&c) {
                return Err("castling must be - or a subset of KQkq");
            }
            seen.push(c);
        }
    }

    let ep = fields[3].as_bytes();
    let ep_ok = fields[3] == "-" || (ep.len() == 2 && (b'a'..=b'h').contains(&ep[0]) && (ep[1] == b'3' || ep[1] == b'6'));
    if !ep_ok {
        return Err("en passant must be - or a square on rank 3 or 6");
    }

    Ok(())
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.to_fen() == other.to_fen()
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_fen().hash(state);
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Position").field(&self.to_fen()).finish()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}
