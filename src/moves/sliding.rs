use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::chess_move::ChessMove;
use crate::moves::geometry::{edge_distance, Direction};

/// Walk each ray from `from` as a piece of `as_color`, stopping at the first
/// occupied square and keeping it only when it holds an opposing piece.
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    as_color: Color,
    directions: &[Direction],
    out: &mut Vec<ChessMove>,
) {
    for &direction in directions {
        let offset = direction.offset();
        let mut to = from;

        for _ in 0..edge_distance(from, direction) {
            to = (to as i8 + offset) as Square;
            match board.piece_at(to) {
                None => out.push(ChessMove::quiet(from, to)),
                Some(piece) if piece.color == as_color => break,
                Some(piece) => {
                    out.push(ChessMove::with_capture(from, to, Some(piece.kind)));
                    break;
                }
            }
        }
    }
}
