use crate::game_state::board::Board;
use crate::game_state::chess_rules::{king_home, CastlingSide};
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::moves::chess_move::{ChessMove, RookMove};
use crate::moves::knight_moves::generate_step_moves;

pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub fn generate_king_moves(board: &Board, from: Square, as_color: Color, out: &mut Vec<ChessMove>) {
    generate_king_steps(board, from, as_color, out);
    generate_castling_moves(board, from, as_color, out);
}

/// Adjacent squares only, without castling.
#[inline]
pub fn generate_king_steps(board: &Board, from: Square, as_color: Color, out: &mut Vec<ChessMove>) {
    generate_step_moves(board, from, as_color, &KING_STEPS, out);
}

/// Castling candidates. Attack safety of the king's path is left to the
/// legality filter; here only the unmoved pieces and empty gap are checked.
fn generate_castling_moves(board: &Board, from: Square, as_color: Color, out: &mut Vec<ChessMove>) {
    if from != king_home(as_color)
        || !board.tile(from).holds_piece(as_color, PieceKind::King)
        || board.vacate_count(from) != 0
    {
        return;
    }

    for side in CastlingSide::ALL {
        let rook_home = side.rook_home(as_color);
        let rook_tile = board.tile(rook_home);
        if rook_tile.vacate_count != 0 || !rook_tile.holds_piece(as_color, PieceKind::Rook) {
            continue;
        }

        let gap_is_empty = (1..side.rook_distance())
            .map(|i| (from as i8 + side.step() * i) as Square)
            .all(|sq| board.tile(sq).is_empty());
        if !gap_is_empty {
            continue;
        }

        let mut mv = ChessMove::quiet(from, side.king_target(as_color));
        mv.castle_rook_move = Some(RookMove {
            from: rook_home,
            to: side.rook_target(as_color),
        });
        out.push(mv);
    }
}
