//! Error types shared by the rules layer and the search engine.

/// Raised by a rules oracle when asked to apply a move that is not legal in
/// the given position.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("illegal move {mv} in position {position}")]
pub struct IllegalMoveError {
    /// Notation of the rejected move
    pub mv: String,
    /// Canonical encoding of the position it was applied to
    pub position: String,
}

impl IllegalMoveError {
    pub fn new(mv: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            mv: mv.into(),
            position: position.into(),
        }
    }
}

/// Errors produced while parsing positions or move notation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("invalid move notation {0:?}")]
    InvalidMove(String),
}

/// Errors returned by the search entry points.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Depth below 1 or a negative time budget. Rejected before any work starts.
    #[error("invalid search parameters: depth {depth} (must be >= 1), time budget {time_budget_ms} ms (must be >= 0)")]
    InvalidSearchParameters { depth: i32, time_budget_ms: i64 },

    /// The rules oracle refused a move it had itself reported as legal.
    #[error("rules oracle contract violated: {0}")]
    Oracle(#[from] IllegalMoveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_converts_into_search_error() {
        let err: SearchError = IllegalMoveError::new("e2e5", "8/8/8/8/8/8/8/8 w - - 0 1").into();
        assert!(matches!(err, SearchError::Oracle(_)));
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_invalid_parameters_message_names_both_values() {
        let err = SearchError::InvalidSearchParameters {
            depth: 0,
            time_budget_ms: -5,
        };
        let msg = err.to_string();
        assert!(msg.contains("depth 0"), "{}", msg);
        assert!(msg.contains("-5 ms"), "{}", msg);
    }
}
