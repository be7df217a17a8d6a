//! Pseudo-legal move dispatch.
//!
//! Maps the piece kind on a square to its candidate generator. Candidates
//! ignore whether the mover's own king is left attacked; the legality filter
//! prunes those.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Candidates for the piece on `from`, generated as if it were `as_color`.
/// An empty square yields nothing.
pub fn generate_pseudo_legal_moves(
    board: &Board,
    last_move: Option<&ChessMove>,
    from: Square,
    as_color: Color,
    out: &mut Vec<ChessMove>,
) {
    let Some(kind) = board.tile(from).kind() else {
        return;
    };

    match kind {
        PieceKind::Pawn => generate_pawn_moves(board, last_move, from, as_color, out),
        PieceKind::Knight => generate_knight_moves(board, from, as_color, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, as_color, out),
        PieceKind::Rook => generate_rook_moves(board, from, as_color, out),
        PieceKind::Queen => generate_queen_moves(board, from, as_color, out),
        PieceKind::King => generate_king_moves(board, from, as_color, out),
    }
}

/// Candidates for the piece on `from` in its own color.
pub fn pseudo_legal_moves(board: &Board, last_move: Option<&ChessMove>, from: Square) -> Vec<ChessMove> {
    let mut moves = Vec::with_capacity(32);
    if let Some(color) = board.tile(from).color() {
        generate_pseudo_legal_moves(board, last_move, from, color, &mut moves);
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal_moves;
    use crate::game_state::board::Board;

    #[test]
    fn start_position_candidates_total_twenty_per_side() {
        let board = Board::standard();
        let light: usize = (48u8..64).map(|sq| pseudo_legal_moves(&board, None, sq).len()).sum();
        let dark: usize = (0u8..16).map(|sq| pseudo_legal_moves(&board, None, sq).len()).sum();
        assert_eq!(light, 20);
        assert_eq!(dark, 20);
    }

    #[test]
    fn empty_square_yields_nothing() {
        assert!(pseudo_legal_moves(&Board::standard(), None, 36).is_empty());
    }
}
