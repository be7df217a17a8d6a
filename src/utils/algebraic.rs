//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! square index, where rank 8 is rank index 0.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file_index = file - b'a';
    let rank_index = b'8' - rank;
    Ok(rank_index * 8 + file_index)
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square > 63 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_string()));
    }
    Ok(square_name(square))
}

/// Infallible variant used by `Display` impls; out-of-range squares print as `??`.
pub fn square_name(square: Square) -> String {
    if square > 63 {
        return "??".to_owned();
    }
    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'8' - square / 8);
    format!("{file_char}{rank_char}")
}
