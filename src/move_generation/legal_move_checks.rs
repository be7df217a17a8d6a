//! Attack oracle.
//!
//! A square is attacked by a color when a piece of that color could capture
//! on it. Rather than scanning every attacker, the oracle walks the
//! defender's movement shapes outward from the square itself: a diagonal ray
//! from `S` that first meets an enemy bishop or queen means that piece sees
//! `S`, and likewise for rook, knight and king shapes. Pawns are looked up
//! directly.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::geometry::{edge_distance, Direction};
use crate::moves::king_moves::KING_STEPS;
use crate::moves::knight_moves::KNIGHT_JUMPS;

const DIAGONAL_ATTACKERS: [PieceKind; 2] = [PieceKind::Bishop, PieceKind::Queen];
const ORTHOGONAL_ATTACKERS: [PieceKind; 2] = [PieceKind::Rook, PieceKind::Queen];

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color)
}

/// Whether the occupant of `square` is attacked by the other color. Empty
/// squares have no defender and report `false`.
pub fn is_attacked(board: &Board, square: Square) -> bool {
    board
        .tile(square)
        .color()
        .is_some_and(|defender| is_square_attacked(board, square, defender))
}

/// Whether `square`, treated as held by `defender`, is attacked by
/// `defender.opposite()`.
pub fn is_square_attacked(board: &Board, square: Square, defender: Color) -> bool {
    let attacker = defender.opposite();

    is_attacked_along_rays(board, square, attacker, &Direction::DIAGONAL, &DIAGONAL_ATTACKERS)
        || is_attacked_along_rays(board, square, attacker, &Direction::ORTHOGONAL, &ORTHOGONAL_ATTACKERS)
        || is_attacked_by_step(board, square, attacker, &KNIGHT_JUMPS, PieceKind::Knight)
        || is_attacked_by_step(board, square, attacker, &KING_STEPS, PieceKind::King)
        || is_attacked_by_pawn(board, square, attacker)
}

/// First occupant along each ray decides; anything behind it is shielded.
fn is_attacked_along_rays(
    board: &Board,
    square: Square,
    attacker: Color,
    directions: &[Direction],
    sliders: &[PieceKind],
) -> bool {
    directions.iter().any(|&direction| {
        let offset = direction.offset();
        let mut current = square;

        for _ in 0..edge_distance(square, direction) {
            current = (current as i8 + offset) as Square;
            if let Some(piece) = board.piece_at(current) {
                return piece.color == attacker && sliders.contains(&piece.kind);
            }
        }
        false
    })
}

fn is_attacked_by_step(
    board: &Board,
    square: Square,
    attacker: Color,
    steps: &[(i8, i8)],
    kind: PieceKind,
) -> bool {
    let file = file_of(square) as i8;
    let rank = rank_of(square) as i8;

    steps
        .iter()
        .filter_map(|&(file_step, rank_step)| square_at(file + file_step, rank + rank_step))
        .any(|sq| board.tile(sq).holds_piece(attacker, kind))
}

fn is_attacked_by_pawn(board: &Board, square: Square, attacker: Color) -> bool {
    // An attacking pawn sits one rank behind `square` from its own point of view.
    let pawn_rank = rank_of(square) as i8 - attacker.forward() / 8;
    let file = file_of(square) as i8;

    [file - 1, file + 1]
        .into_iter()
        .filter_map(|f| square_at(f, pawn_rank))
        .any(|sq| board.tile(sq).holds_piece(attacker, PieceKind::Pawn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).expect("placement parses")
    }

    #[test]
    fn start_position_third_rank_is_covered_by_light() {
        let board = Board::standard();
        assert!(is_square_attacked(&board, sq("e3"), Color::Dark));
        assert!(is_square_attacked(&board, sq("f3"), Color::Dark));
        assert!(!is_square_attacked(&board, sq("e4"), Color::Dark));
        assert!(!is_king_in_check(&board, Color::Light));
    }

    #[test]
    fn sliders_are_blocked_by_intervening_pieces() {
        let open = board("4k3/8/8/8/8/8/8/r3K3");
        assert!(is_king_in_check(&open, Color::Light));

        let shielded = board("4k3/8/8/8/8/8/8/r1N1K3");
        assert!(!is_king_in_check(&shielded, Color::Light));
    }

    #[test]
    fn diagonal_queen_and_knight_attacks() {
        let queen = board("4k3/8/8/8/7q/8/8/4K3");
        assert!(is_king_in_check(&queen, Color::Light));

        let knight = board("4k3/8/8/8/8/3n4/8/4K3");
        assert!(is_king_in_check(&knight, Color::Light));
        assert!(is_attacked(&knight, sq("e1")));
    }

    #[test]
    fn pawns_attack_forward_diagonals_only() {
        // Dark pawn on d2 attacks e1 and c1 but not d1.
        let dark_pawn = board("4k3/8/8/8/8/8/3p4/4K3");
        assert!(is_king_in_check(&dark_pawn, Color::Light));
        assert!(!is_square_attacked(&dark_pawn, sq("d1"), Color::Light));

        // Light pawn on e7 attacks d8 and f8, not e8 or backwards.
        let light_pawn = board("3k4/4P3/8/8/8/8/8/4K3");
        assert!(is_king_in_check(&light_pawn, Color::Dark));
        assert!(!is_square_attacked(&light_pawn, sq("e6"), Color::Dark));
    }

    #[test]
    fn pawn_lookup_does_not_wrap_files() {
        // Light pawn on h2 must not be seen as attacking a-file squares.
        let board = board("4k3/8/8/8/8/8/7P/4K3");
        assert!(!is_square_attacked(&board, sq("a3"), Color::Dark));
        assert!(is_square_attacked(&board, sq("g3"), Color::Dark));
    }

    #[test]
    fn adjacent_kings_attack_each_other() {
        let board = board("8/8/8/3k4/4K3/8/8/8");
        assert!(is_king_in_check(&board, Color::Light));
        assert!(is_king_in_check(&board, Color::Dark));
    }

    #[test]
    fn ray_attacks_need_the_matching_slider_first_in_line() {
        // Dark bishop on the e-file does not attack along it.
        assert!(!is_king_in_check(&board("4k3/8/8/4b3/8/8/8/4K3"), Color::Light));
        // Dark knight in front of a Dark rook shields the king.
        assert!(!is_king_in_check(&board("4k3/8/8/4r3/4n3/8/8/4K3"), Color::Light));
        // Dark queen on the e-file does.
        assert!(is_king_in_check(&board("4k3/8/8/4q3/8/8/8/4K3"), Color::Light));
        // A rook on a diagonal does not.
        assert!(!is_king_in_check(&board("4k3/8/8/8/r7/8/8/4K3"), Color::Light));
    }

    #[test]
    fn empty_square_is_never_reported_attacked() {
        assert!(!is_attacked(&Board::standard(), sq("e3")));
    }
}
