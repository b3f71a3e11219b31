use std::fmt;

use chess::{ChessMove, File, Piece, Rank, Square};

use crate::error::PositionError;

// | source | destination | promotion |
// UCI long algebraic on the outside: e2e4, e7e8q

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    inner: ChessMove,
}

impl Move {
    pub fn new(source: Square, destination: Square, promotion: Option<Piece>) -> Move {
        Self {
            inner: ChessMove::new(source, destination, promotion),
        }
    }

    /// Parse UCI long algebraic notation. Legality is not checked here.
    pub fn from_uci(text: &str) -> Result<Move, PositionError> {
        let invalid = || PositionError::InvalidMove(text.to_string());
        let bytes = text.trim().as_bytes();
        if bytes.len() != 4 && bytes.len() != 5 {
            return Err(invalid());
        }

        let source = parse_square(bytes[0], bytes[1]).ok_or_else(invalid)?;
        let destination = parse_square(bytes[2], bytes[3]).ok_or_else(invalid)?;
        let promotion = match bytes.get(4) {
            None => None,
            Some(b'q') => Some(Piece::Queen),
            Some(b'r') => Some(Piece::Rook),
            Some(b'b') => Some(Piece::Bishop),
            Some(b'n') => Some(Piece::Knight),
            Some(_) => return Err(invalid()),
        };

        Ok(Move::new(source, destination, promotion))
    }

    pub fn source(&self) -> Square {
        self.inner.get_source()
    }

    pub fn destination(&self) -> Square {
        self.inner.get_dest()
    }

    pub fn promotion(&self) -> Option<Piece> {
        self.inner.get_promotion()
    }

    pub(crate) fn raw(&self) -> ChessMove {
        self.inner
    }
}

impl From<ChessMove> for Move {
    fn from(inner: ChessMove) -> Self {
        Self { inner }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_square(f, self.source())?;
        write_square(f, self.destination())?;
        if let Some(piece) = self.promotion() {
            let c = match piece {
                Piece::Queen => 'q',
                Piece::Rook => 'r',
                Piece::Bishop => 'b',
                Piece::Knight => 'n',
                // never produced by move generation
                Piece::Pawn | Piece::King => '?',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

fn parse_square(file: u8, rank: u8) -> Option<Square> {
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some(Square::make_square(
        Rank::from_index((rank - b'1') as usize),
        File::from_index((file - b'a') as usize),
    ))
}

fn write_square(f: &mut fmt::Formatter<'_>, sq: Square) -> fmt::Result {
    let file = (b'a' + sq.get_file().to_index() as u8) as char;
    let rank = (b'1' + sq.get_rank().to_index() as u8) as char;
    write!(f, "{}{}", file, rank)
}
