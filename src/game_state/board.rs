//! Fixed 64-square position store.
//!
//! `Board` is a plain array of tiles mutated in place by apply/undo and
//! cloned wholesale when the legality filter needs a scratch position.

use std::fmt;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::utils::placement::parse_placement;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [Tile; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self {
            tiles: [Tile::default(); 64],
        }
    }

    /// Board at the standard starting position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.init_standard_position();
        board
    }

    /// Reset every tile, counters included, to the standard starting position.
    pub fn init_standard_position(&mut self) {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        self.tiles = [Tile::default(); 64];
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            self.tiles[file].piece = Some(Piece::new(Color::Dark, kind));
            self.tiles[8 + file].piece = Some(Piece::new(Color::Dark, PieceKind::Pawn));
            self.tiles[48 + file].piece = Some(Piece::new(Color::Light, PieceKind::Pawn));
            self.tiles[56 + file].piece = Some(Piece::new(Color::Light, kind));
        }
    }

    /// Board from a rank-by-rank placement string; see [`parse_placement`].
    pub fn from_placement(placement: &str) -> ChessResult<Self> {
        parse_placement(placement)
    }

    #[inline]
    pub fn tile(&self, square: Square) -> &Tile {
        &self.tiles[square as usize]
    }

    #[inline]
    pub fn tile_mut(&mut self, square: Square) -> &mut Tile {
        &mut self.tiles[square as usize]
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.tiles[square as usize].piece
    }

    /// Replace the occupant of `square`, leaving its vacate counter alone.
    #[inline]
    pub fn put(&mut self, square: Square, piece: Option<Piece>) {
        self.tiles[square as usize].piece = piece;
    }

    #[inline]
    pub fn vacate_count(&self, square: Square) -> u32 {
        self.tiles[square as usize].vacate_count
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile; 64] {
        &self.tiles
    }

    pub fn occupied_squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0u8..64).filter(move |&sq| !self.tiles[sq as usize].is_empty())
    }

    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        (0u8..64).filter(move |&sq| self.tiles[sq as usize].holds(color))
    }

    /// Square of `color`'s king. At most one king per color is assumed.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        (0u8..64).find(|&sq| self.tiles[sq as usize].holds_piece(color, PieceKind::King))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
