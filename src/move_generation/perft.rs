//! Perft node counting.
//!
//! Walks the legal move tree to a fixed depth with in-place apply/undo,
//! tallying leaf moves by kind. Used to cross-check the generator against
//! published counts and to benchmark it.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves_for_color;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

/// Count leaf moves `depth` plies below `board` with `turn` to move.
/// `last_move` seeds en passant detection for the first ply.
pub fn perft(
    board: &Board,
    last_move: Option<&ChessMove>,
    turn: Color,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut scratch = board.clone();
    let mut total = PerftCounts::default();
    perft_recurse(&mut scratch, last_move.copied(), turn, depth, &mut total)?;
    Ok(total)
}

fn perft_recurse(
    board: &mut Board,
    last_move: Option<ChessMove>,
    turn: Color,
    depth: u8,
    total: &mut PerftCounts,
) -> ChessResult<()> {
    let moves = legal_moves_for_color(board, last_move.as_ref(), turn);

    for mv in moves {
        apply_move(board, &mv)?;

        if depth == 1 {
            tally_leaf(board, &mv, turn, total);
        } else {
            perft_recurse(board, Some(mv), turn.opposite(), depth - 1, total)?;
        }

        undo_move(board, &mv)?;
    }

    Ok(())
}

fn tally_leaf(board: &Board, mv: &ChessMove, mover: Color, total: &mut PerftCounts) {
    total.nodes += 1;
    if mv.is_capture() {
        total.captures += 1;
    }
    if mv.is_en_passant() {
        total.en_passant += 1;
    }
    if mv.is_castle() {
        total.castles += 1;
    }
    if mv.promotion.is_some() {
        total.promotions += 1;
    }

    let defender = mover.opposite();
    if is_king_in_check(board, defender) {
        total.checks += 1;
        if legal_moves_for_color(board, Some(mv), defender).is_empty() {
            total.checkmates += 1;
        }
    }
}
