//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by board mutation, the
//! session state machine and the parsing helpers. Every variant is locally
//! recoverable: a call that returns an error has left the board and session
//! exactly as they were.
//!
//! Selecting a square that leads nowhere is not an error; the session
//! reports it as `SelectOutcome::Deselected`.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};

pub type ChessResult<T> = Result<T, ChessErrors>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// `resolve_promotion` was called while no promotion is pending.
    #[error("no promotion is pending")]
    InvalidPromotionResolution,

    /// A pawn may only become a queen, rook, bishop or knight.
    #[error("cannot promote to {0:?}")]
    NotPromotable(PieceKind),

    /// The last move still waits for its promotion piece.
    #[error("a promotion must be resolved before the game can continue")]
    PromotionPending,

    /// The game is over; only `undo` is accepted.
    #[error("the game has already ended")]
    TerminalStateViolation,

    /// A move that does not fit the position it is applied to or undone from.
    #[error("malformed move {from}->{to}: {reason}")]
    MalformedMove {
        from: Square,
        to: Square,
        reason: &'static str,
    },

    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    #[error("invalid placement string: {0}")]
    InvalidPlacement(String),

    /// A replayed move was not legal at its ply.
    #[error("replayed move {from}->{to} at ply {ply} is not legal")]
    ReplayRejected { ply: usize, from: Square, to: Square },
}

#[cfg(test)]
mod tests {
    use super::ChessErrors;

    #[test]
    fn malformed_move_message_names_the_squares() {
        let err = ChessErrors::MalformedMove {
            from: 52,
            to: 36,
            reason: "no piece on from-square",
        };
        assert_eq!(
            err.to_string(),
            "malformed move 52->36: no piece on from-square"
        );
    }
}
