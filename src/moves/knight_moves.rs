use crate::game_state::board::Board;
use crate::game_state::chess_types::{file_of, rank_of, square_at, Color, Square};
use crate::moves::chess_move::ChessMove;

/// (file step, rank step) of the eight knight jumps.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn generate_knight_moves(board: &Board, from: Square, as_color: Color, out: &mut Vec<ChessMove>) {
    generate_step_moves(board, from, as_color, &KNIGHT_JUMPS, out);
}

/// Single-step movers (knight, king): each offset that stays on the board and
/// does not land on a friendly piece is a candidate.
pub(crate) fn generate_step_moves(
    board: &Board,
    from: Square,
    as_color: Color,
    steps: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    let file = file_of(from) as i8;
    let rank = rank_of(from) as i8;

    for &(file_step, rank_step) in steps {
        let Some(to) = square_at(file + file_step, rank + rank_step) else {
            continue;
        };
        match board.piece_at(to) {
            Some(piece) if piece.color == as_color => {}
            occupant => out.push(ChessMove::with_capture(from, to, occupant.map(|p| p.kind))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;

    #[test]
    fn knight_on_d5_has_eight_targets() {
        let mut moves = Vec::new();
        generate_knight_moves(&Board::empty(), 27, Color::Light, &mut moves);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn corner_knight_has_two_targets() {
        let mut moves = Vec::new();
        generate_knight_moves(&Board::empty(), 63, Color::Light, &mut moves);
        let mut targets: Vec<u8> = moves.iter().map(|m| m.to).collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![46, 53]);
    }

    #[test]
    fn starting_knight_skips_friendly_pawn() {
        let mut moves = Vec::new();
        generate_knight_moves(&Board::standard(), 62, Color::Light, &mut moves);
        let mut targets: Vec<u8> = moves.iter().map(|m| m.to).collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![45, 47]);
    }
}
