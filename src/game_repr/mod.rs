mod moves;
mod position;
pub mod oracle;
pub mod rules;

pub use moves::*;
pub use oracle::*;
pub use position::*;
pub use rules::*;

// Board-level types come from the `chess` crate and are re-exported so callers
// do not need a direct dependency on it.
pub use chess::{Color, Piece, Square, ALL_SQUARES};
