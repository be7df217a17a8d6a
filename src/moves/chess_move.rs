//! Move record produced by the generators and consumed by apply/undo.
//!
//! A `ChessMove` doubles as its own undo record: it carries everything needed
//! to reverse it (captured kind, rook relocation, en passant square,
//! promotion) so no separate undo stack is kept.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::square_name;

/// The rook's half of a castling move, executed atomically with the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RookMove {
    pub from: Square,
    pub to: Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub castle_rook_move: Option<RookMove>,
    /// Piece the pawn becomes. On a generated move this is the offered
    /// choice; on a committed move it is set once the promotion is resolved.
    pub promotion: Option<PieceKind>,
    /// Square of the pawn removed by an en passant capture (never `to`).
    pub en_passant_capture: Option<Square>,
    /// King square left in check by this move, annotated after commit.
    pub check_square: Option<Square>,
}

impl ChessMove {
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
            castle_rook_move: None,
            promotion: None,
            en_passant_capture: None,
            check_square: None,
        }
    }

    #[inline]
    pub const fn with_capture(from: Square, to: Square, captured: Option<PieceKind>) -> Self {
        let mut mv = Self::quiet(from, to);
        mv.captured = captured;
        mv
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.castle_rook_move.is_some()
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        self.en_passant_capture.is_some()
    }

    /// Same move ignoring the post-commit check annotation.
    #[inline]
    pub fn same_move(&self, other: &ChessMove) -> bool {
        ChessMove {
            check_square: None,
            ..*self
        } == ChessMove {
            check_square: None,
            ..*other
        }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_name(self.from), square_name(self.to))?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

/// Side effects of applying a move, returned instead of firing callbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveEffects {
    pub capture: bool,
    pub castle: bool,
    pub en_passant: bool,
    /// The pawn reached its last rank and still waits for its new kind.
    pub promotion_pending: bool,
}
