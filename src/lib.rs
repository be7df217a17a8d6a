//! Crate root module declarations for the tile chess rules engine.
//!
//! Exposes the board model, per-piece move generation, the legality filter,
//! apply/undo, and the `GameSession` state machine that drives a game.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_session;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod geometry;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding;
    pub mod wire_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod placement;
    pub mod render_board;
}

pub mod chess_errors;

pub use chess_errors::{ChessErrors, ChessResult};
pub use game_state::board::Board;
pub use game_state::chess_types::{Color, Piece, PieceKind, Square, Tile};
pub use game_state::game_session::{GameSession, GameStatus, SelectOutcome};
pub use moves::chess_move::{ChessMove, MoveEffects, RookMove};
pub use moves::wire_move::WireMove;
