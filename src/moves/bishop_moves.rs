use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::chess_move::ChessMove;
use crate::moves::geometry::Direction;
use crate::moves::sliding::generate_sliding_moves;

#[inline]
pub fn generate_bishop_moves(board: &Board, from: Square, as_color: Color, out: &mut Vec<ChessMove>) {
    generate_sliding_moves(board, from, as_color, &Direction::DIAGONAL, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;

    #[test]
    fn bishop_on_d5_covers_thirteen_squares_on_empty_board() {
        let mut moves = Vec::new();
        generate_bishop_moves(&Board::empty(), 27, Color::Light, &mut moves);
        assert_eq!(moves.len(), 13);
    }

    #[test]
    fn starting_bishops_are_boxed_in() {
        let mut moves = Vec::new();
        generate_bishop_moves(&Board::standard(), 58, Color::Light, &mut moves);
        assert!(moves.is_empty());
    }
}
