//! Relay-facing move shape.
//!
//! A session relay carries only `{from, to, promotion?}` per committed move;
//! the engine rebuilds everything else (captures, castling, en passant) by
//! replaying these through its own legal-move table.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WireMove {
    pub from: Square,
    pub to: Square,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub promotion: Option<PieceKind>,
}

impl WireMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

impl From<&ChessMove> for WireMove {
    fn from(mv: &ChessMove) -> Self {
        Self {
            from: mv.from,
            to: mv.to,
            promotion: mv.promotion,
        }
    }
}
