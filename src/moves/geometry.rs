//! Precomputed ray lengths to the board edge.
//!
//! For each square and each of the eight ray directions the table stores how
//! many steps fit before leaving the board, so sliders never do per-step edge
//! arithmetic.

use crate::game_state::chess_types::Square;

/// Ray directions. `Up` points toward rank index 0 (the Dark back rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    pub const ORTHOGONAL: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpRight,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpLeft,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
            Direction::UpLeft => 4,
            Direction::UpRight => 5,
            Direction::DownLeft => 6,
            Direction::DownRight => 7,
        }
    }

    /// (file step, rank step).
    #[inline]
    pub const fn steps(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Square offset of a single step.
    #[inline]
    pub const fn offset(self) -> i8 {
        let (file_step, rank_step) = self.steps();
        rank_step * 8 + file_step
    }
}

pub const EDGE_DISTANCES: [[u8; 8]; 64] = generate_edge_distances();

/// Number of steps from `square` in `direction` before the board edge.
#[inline]
pub const fn edge_distance(square: Square, direction: Direction) -> u8 {
    EDGE_DISTANCES[square as usize][direction.index()]
}

const fn generate_edge_distances() -> [[u8; 8]; 64] {
    let mut table = [[0u8; 8]; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as u8;
        let rank = (sq / 8) as u8;

        let up = rank;
        let down = 7 - rank;
        let left = file;
        let right = 7 - file;

        table[sq][Direction::Up.index()] = up;
        table[sq][Direction::Down.index()] = down;
        table[sq][Direction::Left.index()] = left;
        table[sq][Direction::Right.index()] = right;
        table[sq][Direction::UpLeft.index()] = min(up, left);
        table[sq][Direction::UpRight.index()] = min(up, right);
        table[sq][Direction::DownLeft.index()] = min(down, left);
        table[sq][Direction::DownRight.index()] = min(down, right);

        sq += 1;
    }

    table
}

const fn min(a: u8, b: u8) -> u8 {
    if a < b {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::{edge_distance, Direction, EDGE_DISTANCES};

    #[test]
    fn corner_a8_only_reaches_down_and_right() {
        assert_eq!(edge_distance(0, Direction::Up), 0);
        assert_eq!(edge_distance(0, Direction::Left), 0);
        assert_eq!(edge_distance(0, Direction::Down), 7);
        assert_eq!(edge_distance(0, Direction::Right), 7);
        assert_eq!(edge_distance(0, Direction::DownRight), 7);
        assert_eq!(edge_distance(0, Direction::UpRight), 0);
    }

    #[test]
    fn d5_rays_sum_to_queen_mobility_on_empty_board() {
        let d5 = 27usize;
        let total: u32 = EDGE_DISTANCES[d5].iter().map(|&d| d as u32).sum();
        assert_eq!(total, 27);
    }

    #[test]
    fn every_ray_stays_on_board() {
        for sq in 0u8..64 {
            for dir in Direction::ALL {
                let last = sq as i32 + dir.offset() as i32 * edge_distance(sq, dir) as i32;
                assert!((0..64).contains(&last), "ray from {sq} {dir:?} leaves board");
            }
        }
    }
}
