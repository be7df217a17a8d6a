//! In-place move application and reversal.
//!
//! Both directions check every precondition before touching the board, so a
//! rejected move leaves the position exactly as it was. A move applied and
//! then undone restores every tile, vacate counters included.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::{ChessMove, MoveEffects};

pub fn apply_move(board: &mut Board, mv: &ChessMove) -> ChessResult<MoveEffects> {
    let malformed = |reason: &'static str| ChessErrors::MalformedMove {
        from: mv.from,
        to: mv.to,
        reason,
    };

    if mv.from > 63 || mv.to > 63 || mv.from == mv.to {
        return Err(malformed("squares out of range"));
    }

    let mover = board
        .piece_at(mv.from)
        .ok_or_else(|| malformed("no piece on from-square"))?;
    let target = board.piece_at(mv.to);

    if target.is_some_and(|p| p.color == mover.color) {
        return Err(malformed("destination holds a friendly piece"));
    }

    if let Some(victim) = mv.en_passant_capture {
        let victim_ok = victim <= 63
            && board
                .tile(victim)
                .holds_piece(mover.color.opposite(), PieceKind::Pawn);
        if mover.kind != PieceKind::Pawn || target.is_some() || !victim_ok {
            return Err(malformed("en passant does not match the board"));
        }
    } else if mv.captured != target.map(|p| p.kind) {
        return Err(malformed("captured piece does not match destination"));
    }

    if let Some(rook) = mv.castle_rook_move {
        let rook_ok = rook.from <= 63
            && rook.to <= 63
            && rook.to != mv.to
            && board.tile(rook.from).holds_piece(mover.color, PieceKind::Rook)
            && board.tile(rook.to).is_empty();
        if mover.kind != PieceKind::King || !rook_ok {
            return Err(malformed("castling rook does not match the board"));
        }
    }

    if let Some(kind) = mv.promotion {
        let on_last_rank = rank_of(mv.to) == promotion_rank(mover.color);
        if mover.kind != PieceKind::Pawn || !kind.is_promotable() || !on_last_rank {
            return Err(malformed("invalid promotion"));
        }
    }

    // Validated; mutate.
    board.tile_mut(mv.from).vacate_count += 1;
    board.put(mv.from, None);

    if let Some(victim) = mv.en_passant_capture {
        board.tile_mut(victim).vacate_count += 1;
        board.put(victim, None);
    } else if target.is_some() {
        board.tile_mut(mv.to).vacate_count += 1;
    }

    let placed_kind = mv.promotion.unwrap_or(mover.kind);
    board.put(mv.to, Some(Piece::new(mover.color, placed_kind)));

    if let Some(rook) = mv.castle_rook_move {
        board.tile_mut(rook.from).vacate_count += 1;
        board.put(rook.from, None);
        board.put(rook.to, Some(Piece::new(mover.color, PieceKind::Rook)));
    }

    Ok(MoveEffects {
        capture: mv.captured.is_some(),
        castle: mv.castle_rook_move.is_some(),
        en_passant: mv.en_passant_capture.is_some(),
        promotion_pending: mover.kind == PieceKind::Pawn
            && rank_of(mv.to) == promotion_rank(mover.color)
            && mv.promotion.is_none(),
    })
}

/// Reverse `mv`, which must be the last move applied to `board`. Returns the
/// color of the side that made it.
pub fn undo_move(board: &mut Board, mv: &ChessMove) -> ChessResult<Color> {
    let malformed = |reason: &'static str| ChessErrors::MalformedMove {
        from: mv.from,
        to: mv.to,
        reason,
    };

    if mv.from > 63 || mv.to > 63 || mv.from == mv.to {
        return Err(malformed("squares out of range"));
    }

    let mover = board
        .piece_at(mv.to)
        .ok_or_else(|| malformed("no piece on destination"))?;
    if board.piece_at(mv.from).is_some() || board.vacate_count(mv.from) == 0 {
        return Err(malformed("from-square was not vacated by this move"));
    }

    if let Some(kind) = mv.promotion {
        if mover.kind != kind {
            return Err(malformed("promoted piece does not match"));
        }
    }

    if let Some(victim) = mv.en_passant_capture {
        if victim > 63 || board.piece_at(victim).is_some() || board.vacate_count(victim) == 0 {
            return Err(malformed("en passant square cannot be restored"));
        }
    } else if mv.captured.is_some() && board.vacate_count(mv.to) == 0 {
        return Err(malformed("capture counter missing on destination"));
    }

    if let Some(rook) = mv.castle_rook_move {
        let rook_ok = rook.from <= 63
            && rook.to <= 63
            && board.tile(rook.to).holds_piece(mover.color, PieceKind::Rook)
            && board.piece_at(rook.from).is_none()
            && board.vacate_count(rook.from) > 0;
        if !rook_ok {
            return Err(malformed("castling rook cannot be restored"));
        }
    }

    // Validated; mutate.
    let restored_kind = if mv.promotion.is_some() {
        PieceKind::Pawn
    } else {
        mover.kind
    };
    board.put(mv.from, Some(Piece::new(mover.color, restored_kind)));
    board.tile_mut(mv.from).vacate_count -= 1;

    let opponent = mover.color.opposite();
    match (mv.en_passant_capture, mv.captured) {
        (Some(victim), _) => {
            board.put(mv.to, None);
            board.put(victim, Some(Piece::new(opponent, PieceKind::Pawn)));
            board.tile_mut(victim).vacate_count -= 1;
        }
        (None, Some(kind)) => {
            board.put(mv.to, Some(Piece::new(opponent, kind)));
            board.tile_mut(mv.to).vacate_count -= 1;
        }
        (None, None) => board.put(mv.to, None),
    }

    if let Some(rook) = mv.castle_rook_move {
        board.put(rook.to, None);
        board.put(rook.from, Some(Piece::new(mover.color, PieceKind::Rook)));
        board.tile_mut(rook.from).vacate_count -= 1;
    }

    Ok(mover.color)
}
