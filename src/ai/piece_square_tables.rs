// Piece values, mobility weights and piece-square tables.
// Tables are written as the board is seen from White's side: row 0 is rank 8,
// row 7 is rank 1, column 0 is the a-file. A White piece on rank r reads row
// 7 - r; a Black piece reads row r. Files are never mirrored.

use chess::{Color, Piece, Square};

pub type Table = [[i32; 8]; 8];

// Material values
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 20000;

// Score per legal move of a piece
pub const PAWN_MOBILITY: f64 = 0.1;
pub const KNIGHT_MOBILITY: f64 = 0.3;
pub const BISHOP_MOBILITY: f64 = 0.3;
pub const ROOK_MOBILITY: f64 = 0.5;
pub const QUEEN_MOBILITY: f64 = 0.8;
pub const KING_MOBILITY: f64 = 0.1;

// Pawn position values - encourage advancement and central control
pub const PAWN_TABLE: Table = [
    [  0,  0,  0,  0,  0,  0,  0,  0],  // Rank 8
    [ 50, 50, 50, 50, 50, 50, 50, 50],  // Rank 7 (near promotion)
    [ 10, 10, 20, 30, 30, 20, 10, 10],  // Rank 6
    [  5,  5, 10, 25, 25, 10,  5,  5],  // Rank 5
    [  0,  0,  0, 20, 20,  0,  0,  0],  // Rank 4
    [  5, -5,-10,  0,  0,-10, -5,  5],  // Rank 3
    [  5, 10, 10,-20,-20, 10, 10,  5],  // Rank 2
    [  0,  0,  0,  0,  0,  0,  0,  0],  // Rank 1
];

// Knight position values - prefer center squares
pub const KNIGHT_TABLE: Table = [
    [-50,-40,-30,-30,-30,-30,-40,-50],  // Rank 8
    [-40,-20,  0,  5,  5,  0,-20,-40],  // Rank 7
    [-30,  0, 10, 15, 15, 10,  0,-30],  // Rank 6
    [-30,  5, 15, 20, 20, 15,  5,-30],  // Rank 5
    [-30,  0, 15, 20, 20, 15,  0,-30],  // Rank 4
    [-30,  5, 10, 15, 15, 10,  5,-30],  // Rank 3
    [-40,-20,  0,  0,  0,  0,-20,-40],  // Rank 2
    [-50,-40,-30,-30,-30,-30,-40,-50],  // Rank 1
];

// Bishop position values - prefer center and long diagonals
pub const BISHOP_TABLE: Table = [
    [-20,-10,-10,-10,-10,-10,-10,-20],  // Rank 8
    [-10,  0,  0,  0,  0,  0,  0,-10],  // Rank 7
    [-10,  0,  5, 10, 10,  5,  0,-10],  // Rank 6
    [-10,  5,  5, 10, 10,  5,  5,-10],  // Rank 5
    [-10,  0, 10, 10, 10, 10,  0,-10],  // Rank 4
    [-10, 10, 10, 10, 10, 10, 10,-10],  // Rank 3
    [-10,  5,  0,  0,  0,  0,  5,-10],  // Rank 2
    [-20,-10,-10,-10,-10,-10,-10,-20],  // Rank 1
];

// Rook position values - 7th rank bonus
pub const ROOK_TABLE: Table = [
    [  0,  0,  0,  0,  0,  0,  0,  0],  // Rank 8
    [  5, 10, 10, 10, 10, 10, 10,  5],  // Rank 7
    [ -5,  0,  0,  0,  0,  0,  0, -5],  // Rank 6
    [ -5,  0,  0,  0,  0,  0,  0, -5],  // Rank 5
    [ -5,  0,  0,  0,  0,  0,  0, -5],  // Rank 4
    [ -5,  0,  0,  0,  0,  0,  0, -5],  // Rank 3
    [ -5,  0,  0,  0,  0,  0,  0, -5],  // Rank 2
    [  0,  0,  0,  5,  5,  0,  0,  0],  // Rank 1
];

// Queen position values - slight central preference
pub const QUEEN_TABLE: Table = [
    [-20,-10,-10, -5, -5,-10,-10,-20],  // Rank 8
    [-10,  0,  0,  0,  0,  0,  0,-10],  // Rank 7
    [-10,  0,  5,  5,  5,  5,  0,-10],  // Rank 6
    [ -5,  0,  5,  5,  5,  5,  0, -5],  // Rank 5
    [  0,  0,  5,  5,  5,  5,  0, -5],  // Rank 4
    [-10,  5,  5,  5,  5,  5,  0,-10],  // Rank 3
    [-10,  0,  5,  0,  0,  0,  0,-10],  // Rank 2
    [-20,-10,-10, -5, -5,-10,-10,-20],  // Rank 1
];

// King position values - stay home behind the pawns
pub const KING_TABLE: Table = [
    [-30,-40,-40,-50,-50,-40,-40,-30],  // Rank 8
    [-30,-40,-40,-50,-50,-40,-40,-30],  // Rank 7
    [-30,-40,-40,-50,-50,-40,-40,-30],  // Rank 6
    [-30,-40,-40,-50,-50,-40,-40,-30],  // Rank 5
    [-20,-30,-30,-40,-40,-30,-30,-20],  // Rank 4
    [-10,-20,-20,-20,-20,-20,-20,-10],  // Rank 3
    [ 20, 20,  0,  0,  0,  0, 20, 20],  // Rank 2
    [ 20, 30, 10,  0,  0, 10, 30, 20],  // Rank 1 (castled position)
];

pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}

pub fn mobility_weight(piece: Piece) -> f64 {
    match piece {
        Piece::Pawn => PAWN_MOBILITY,
        Piece::Knight => KNIGHT_MOBILITY,
        Piece::Bishop => BISHOP_MOBILITY,
        Piece::Rook => ROOK_MOBILITY,
        Piece::Queen => QUEEN_MOBILITY,
        Piece::King => KING_MOBILITY,
    }
}

fn table_for(piece: Piece) -> &'static Table {
    match piece {
        Piece::Pawn => &PAWN_TABLE,
        Piece::Knight => &KNIGHT_TABLE,
        Piece::Bishop => &BISHOP_TABLE,
        Piece::Rook => &ROOK_TABLE,
        Piece::Queen => &QUEEN_TABLE,
        Piece::King => &KING_TABLE,
    }
}

/// Table value for `piece` of `color` standing on `square`, unsigned by owner.
pub fn pst_value(piece: Piece, color: Color, square: Square) -> i32 {
    let rank = square.get_rank().to_index();
    let file = square.get_file().to_index();
    let row = match color {
        Color::White => 7 - rank,
        Color::Black => rank,
    };
    table_for(piece)[row][file]
}
