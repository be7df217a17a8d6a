//! Core piece and square vocabulary shared by the board, the move
//! generators and the session.
//!
//! Pieces carry no identity across moves: a piece is whatever occupies a
//! square, and the only history a square keeps is its vacate counter.

/// Board square index (`0..=63`), `rank_index * 8 + file_index`.
///
/// `rank_index` 0 is the Dark back rank, 7 the Light back rank, so Light
/// moves toward lower indices.
pub type Square = u8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Square offset of one step forward for this side's pawns.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => -8,
            Color::Dark => 8,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Light => f.write_str("light"),
            Color::Dark => f.write_str("dark"),
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    pub const fn is_promotable(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    /// Lowercase letter used by placement strings and move display.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// Promotion choices in the order the pawn generator emits them. The first
/// entry is the default until the caller resolves otherwise.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// One board square: its occupant plus the number of times a piece has
/// left (or been captured off) it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tile {
    pub piece: Option<Piece>,
    pub vacate_count: u32,
}

impl Tile {
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.piece.map(|p| p.color)
    }

    #[inline]
    pub fn kind(&self) -> Option<PieceKind> {
        self.piece.map(|p| p.kind)
    }

    #[inline]
    pub fn holds(&self, color: Color) -> bool {
        self.color() == Some(color)
    }

    #[inline]
    pub fn holds_piece(&self, color: Color, kind: PieceKind) -> bool {
        self.piece == Some(Piece::new(color, kind))
    }
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

/// Square at (`file`, `rank`) or `None` off the board.
#[inline]
pub const fn square_at(file: i8, rank: i8) -> Option<Square> {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        None
    } else {
        Some((rank * 8 + file) as Square)
    }
}
