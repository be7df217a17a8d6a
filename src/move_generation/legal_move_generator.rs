//! Legality filter.
//!
//! Takes the pseudo-legal candidates for a square, simulates each on a
//! scratch copy of the board and keeps those that leave the mover's king
//! unattacked. Castling additionally may not start from, pass through or
//! land on an attacked square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::move_generator::pseudo_legal_moves;
use crate::moves::chess_move::ChessMove;

/// Legal moves of the piece on `from`. `king_square` is the mover's king,
/// `None` on boards without one (nothing is then pruned for self-check).
pub fn legal_moves_from(
    board: &Board,
    last_move: Option<&ChessMove>,
    from: Square,
    king_square: Option<Square>,
) -> Vec<ChessMove> {
    let Some(color) = board.tile(from).color() else {
        return Vec::new();
    };

    pseudo_legal_moves(board, last_move, from)
        .into_iter()
        .filter(|mv| is_legal(board, mv, color, king_square))
        .collect()
}

/// Every legal move for `color`, in square order.
pub fn legal_moves_for_color(board: &Board, last_move: Option<&ChessMove>, color: Color) -> Vec<ChessMove> {
    let king_square = board.king_square(color);
    board
        .squares_of(color)
        .flat_map(|from| legal_moves_from(board, last_move, from, king_square))
        .collect()
}

fn is_legal(board: &Board, mv: &ChessMove, color: Color, king_square: Option<Square>) -> bool {
    if mv.castle_rook_move.is_some() && !castling_path_is_safe(board, mv, color) {
        return false;
    }

    let mut scratch = board.clone();
    if apply_move(&mut scratch, mv).is_err() {
        return false;
    }

    let king_after = if king_square == Some(mv.from) {
        Some(mv.to)
    } else {
        king_square
    };

    match king_after {
        Some(king) => !is_square_attacked(&scratch, king, color),
        None => true,
    }
}

/// The king's start, transit and landing squares must be unattacked, and
/// every square between king and rook must still be empty.
fn castling_path_is_safe(board: &Board, mv: &ChessMove, color: Color) -> bool {
    let Some(rook) = mv.castle_rook_move else {
        return true;
    };

    let king_step: i8 = if mv.to > mv.from { 1 } else { -1 };
    let mut square = mv.from;
    loop {
        if is_square_attacked(board, square, color) {
            return false;
        }
        if square == mv.to {
            break;
        }
        square = (square as i8 + king_step) as Square;
    }

    let (low, high) = if rook.from < mv.from {
        (rook.from, mv.from)
    } else {
        (mv.from, rook.from)
    };
    (low + 1..high).all(|sq| board.tile(sq).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).expect("placement parses")
    }

    fn has_castle_to(board: &Board, target: &str) -> bool {
        let king = board.king_square(Color::Light);
        legal_moves_from(board, None, sq("e1"), king)
            .iter()
            .any(|m| m.is_castle() && m.to == sq(target))
    }

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let board = Board::standard();
        assert_eq!(legal_moves_for_color(&board, None, Color::Light).len(), 20);
        assert_eq!(legal_moves_for_color(&board, None, Color::Dark).len(), 20);
    }

    #[test]
    fn pinned_piece_may_not_leave_the_line() {
        // Light knight on e2 pinned by the Dark rook on e8.
        let board = board("4r2k/8/8/8/8/8/4N3/4K3");
        let king = board.king_square(Color::Light);
        assert!(legal_moves_from(&board, None, sq("e2"), king).is_empty());
    }

    #[test]
    fn king_may_not_step_into_attack() {
        let board = board("3r3k/8/8/8/8/8/8/4K3");
        let king = board.king_square(Color::Light);
        let targets: Vec<Square> = legal_moves_from(&board, None, sq("e1"), king)
            .iter()
            .map(|m| m.to)
            .collect();
        assert!(!targets.contains(&sq("d1")));
        assert!(!targets.contains(&sq("d2")));
        assert!(targets.contains(&sq("f2")));
    }

    #[test]
    fn check_must_be_answered() {
        let board = board("4r2k/8/8/8/8/8/3P4/R3K3");
        assert!(is_king_in_check(&board, Color::Light));
        for mv in legal_moves_for_color(&board, None, Color::Light) {
            let mut scratch = board.clone();
            apply_move(&mut scratch, &mv).expect("legal move applies");
            assert!(!is_king_in_check(&scratch, Color::Light), "{mv} leaves king in check");
        }
    }

    #[test]
    fn castling_allowed_with_safe_empty_path() {
        let board = board("4k3/8/8/8/8/8/8/R3K2R");
        assert!(has_castle_to(&board, "g1"));
        assert!(has_castle_to(&board, "c1"));
    }

    #[test]
    fn castling_refused_through_or_into_attack() {
        // Dark rook covers f1: king would pass through check.
        assert!(!has_castle_to(&board("4kr2/8/8/8/8/8/8/4K2R"), "g1"));
        // Dark rook covers g1: king would land in check.
        assert!(!has_castle_to(&board("4k1r1/8/8/8/8/8/8/4K2R"), "g1"));
        // King in check may not castle out of it.
        assert!(!has_castle_to(&board("4r1k1/8/8/8/8/8/8/4K2R"), "g1"));
        // b1 attacked does not stop queen-side castling; d1 does.
        assert!(has_castle_to(&board("1r2k3/8/8/8/8/8/8/R3K3"), "c1"));
        assert!(!has_castle_to(&board("3rk3/8/8/8/8/8/8/R3K3"), "c1"));
    }

    #[test]
    fn castling_refused_when_path_occupied_or_pieces_moved() {
        assert!(!has_castle_to(&board("4k3/8/8/8/8/8/8/4KB1R"), "g1"));
        assert!(!has_castle_to(&board("4k3/8/8/8/8/8/8/RN2K3"), "c1"));

        let mut moved = board("4k3/8/8/8/8/8/8/4K2R");
        moved.tile_mut(sq("h1")).vacate_count = 1;
        assert!(!has_castle_to(&moved, "g1"));

        let mut moved = board("4k3/8/8/8/8/8/8/4K2R");
        moved.tile_mut(sq("e1")).vacate_count = 2;
        assert!(!has_castle_to(&moved, "g1"));
    }

    #[test]
    fn en_passant_that_exposes_king_is_rejected() {
        // Capturing d5 en passant would open the fifth rank to the Dark rook.
        let board = board("7k/8/8/r2pP2K/8/8/8/8");
        let last = ChessMove::quiet(sq("d7"), sq("d5"));
        let king = board.king_square(Color::Light);
        let moves = legal_moves_from(&board, Some(&last), sq("e5"), king);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq("e6"));
    }

    #[test]
    fn promotion_candidates_survive_filter_in_order() {
        let board = board("7k/P7/8/8/8/8/8/K7");
        let king = board.king_square(Color::Light);
        let kinds: Vec<Option<PieceKind>> = legal_moves_from(&board, None, sq("a7"), king)
            .iter()
            .map(|m| m.promotion)
            .collect();
        assert_eq!(
            kinds,
            vec![
                Some(PieceKind::Queen),
                Some(PieceKind::Rook),
                Some(PieceKind::Bishop),
                Some(PieceKind::Knight)
            ]
        );
    }
}
