use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_home_rank, promotion_rank};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;

/// Pawn candidates for a pawn of `as_color` on `from`. `last_move` is the
/// most recent committed move, consulted for en passant.
pub fn generate_pawn_moves(
    board: &Board,
    last_move: Option<&ChessMove>,
    from: Square,
    as_color: Color,
    out: &mut Vec<ChessMove>,
) {
    let file = file_of(from) as i8;
    let rank = rank_of(from) as i8;
    let rank_step = as_color.forward() / 8;

    if let Some(one_step) = square_at(file, rank + rank_step) {
        if board.tile(one_step).is_empty() {
            push_with_promotions(ChessMove::quiet(from, one_step), as_color, out);

            let unmoved =
                rank as u8 == pawn_home_rank(as_color) && board.vacate_count(from) == 0;
            if unmoved {
                if let Some(two_step) = square_at(file, rank + 2 * rank_step) {
                    if board.tile(two_step).is_empty() {
                        out.push(ChessMove::quiet(from, two_step));
                    }
                }
            }
        }
    }

    let en_passant_victim = last_move.and_then(|mv| double_step_landing(board, mv, as_color));

    for file_delta in [-1i8, 1i8] {
        let Some(to) = square_at(file + file_delta, rank + rank_step) else {
            continue;
        };

        if let Some(piece) = board.piece_at(to) {
            if piece.color != as_color {
                push_with_promotions(
                    ChessMove::with_capture(from, to, Some(piece.kind)),
                    as_color,
                    out,
                );
            }
            continue;
        }

        let beside = square_at(file + file_delta, rank);
        if beside.is_some() && beside == en_passant_victim {
            let mut mv = ChessMove::with_capture(from, to, Some(PieceKind::Pawn));
            mv.en_passant_capture = beside;
            out.push(mv);
        }
    }
}

/// Landing square of `mv` when it was an opposing pawn's two-square advance.
fn double_step_landing(board: &Board, mv: &ChessMove, as_color: Color) -> Option<Square> {
    let is_opposing_pawn = board
        .tile(mv.to)
        .holds_piece(as_color.opposite(), PieceKind::Pawn);
    let two_ranks = file_of(mv.from) == file_of(mv.to) && rank_of(mv.from).abs_diff(rank_of(mv.to)) == 2;
    (is_opposing_pawn && two_ranks).then_some(mv.to)
}

fn push_with_promotions(mv: ChessMove, as_color: Color, out: &mut Vec<ChessMove>) {
    if rank_of(mv.to) != promotion_rank(as_color) {
        out.push(mv);
        return;
    }
    for kind in PROMOTION_KINDS {
        out.push(ChessMove {
            promotion: Some(kind),
            ..mv
        });
    }
}
