//! Canonical chess-rule constants.
//!
//! Home squares, pawn ranks and the standard starting placement, expressed
//! in this crate's square indexing (`0 == a8`, `63 == h1`).

use crate::game_state::chess_types::{Color, Square};

/// Standard starting placement, rank 8 first.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

pub const LIGHT_KING_HOME: Square = 60;
pub const DARK_KING_HOME: Square = 4;

#[inline]
pub const fn king_home(color: Color) -> Square {
    match color {
        Color::Light => LIGHT_KING_HOME,
        Color::Dark => DARK_KING_HOME,
    }
}

/// Rank index the side's pawns start on.
#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}

/// Rank index on which the side's pawns promote.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

/// Castling wing, described relative to the king's home square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];

    /// Direction the king travels (+1 toward the h-file).
    #[inline]
    pub const fn step(self) -> i8 {
        match self {
            CastlingSide::KingSide => 1,
            CastlingSide::QueenSide => -1,
        }
    }

    /// Distance from the king's home square to the rook's home square.
    #[inline]
    pub const fn rook_distance(self) -> i8 {
        match self {
            CastlingSide::KingSide => 3,
            CastlingSide::QueenSide => 4,
        }
    }

    #[inline]
    pub const fn rook_home(self, color: Color) -> Square {
        (king_home(color) as i8 + self.step() * self.rook_distance()) as Square
    }

    #[inline]
    pub const fn king_target(self, color: Color) -> Square {
        (king_home(color) as i8 + self.step() * 2) as Square
    }

    #[inline]
    pub const fn rook_target(self, color: Color) -> Square {
        (king_home(color) as i8 + self.step()) as Square
    }
}
