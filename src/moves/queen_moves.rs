use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::chess_move::ChessMove;
use crate::moves::geometry::Direction;
use crate::moves::sliding::generate_sliding_moves;

#[inline]
pub fn generate_queen_moves(board: &Board, from: Square, as_color: Color, out: &mut Vec<ChessMove>) {
    generate_sliding_moves(board, from, as_color, &Direction::DIAGONAL, out);
    generate_sliding_moves(board, from, as_color, &Direction::ORTHOGONAL, out);
}
