//! Geometry primitives: [`Pos`] and the [`Positions`] iterator.
//!
//! Boards are square and indexed `(row, col)` from the top-left corner, so
//! coordinates are unsigned and neighbour lookups return `Option`.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell coordinate. Row grows down, column grows right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    /// Top-left corner.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the position lies on a `size`×`size` board.
    #[inline]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// The neighbour to the right, if it is still on the board.
    #[inline]
    pub fn right(self, size: usize) -> Option<Pos> {
        let p = Self::new(self.row, self.col + 1);
        p.in_bounds(size).then_some(p)
    }

    /// The neighbour below, if it is still on the board.
    #[inline]
    pub fn down(self, size: usize) -> Option<Pos> {
        let p = Self::new(self.row + 1, self.col);
        p.in_bounds(size).then_some(p)
    }

    /// Where this cell lands after rotating a `size`×`size` board one
    /// quarter turn clockwise.
    ///
    /// `(row, col)` maps to `(col, size - 1 - row)`.
    #[inline]
    pub const fn rotated_cw(self, size: usize) -> Self {
        Self::new(self.col, size - 1 - self.row)
    }

    /// Apply [`rotated_cw`](Self::rotated_cw) `turns` times (modulo 4).
    pub fn rotated(self, size: usize, turns: usize) -> Self {
        (0..turns % 4).fold(self, |p, _| p.rotated_cw(size))
    }

    /// Row-major index on a board of the given side length.
    #[inline]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub const fn from_index(idx: usize, size: usize) -> Self {
        Self::new(idx / size, idx % size)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

/// Row-major iterator over every cell of a `size`×`size` board.
#[derive(Clone, Debug)]
pub struct Positions {
    size: usize,
    next: usize,
}

impl Positions {
    /// Iterate the cells of a board with side length `size`.
    #[inline]
    pub fn new(size: usize) -> Self {
        Self { size, next: 0 }
    }
}

impl Iterator for Positions {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.next >= self.size * self.size {
            return None;
        }
        let p = Pos::from_index(self.next, self.size);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.size * self.size).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_stop_at_edges() {
        let p = Pos::new(2, 3);
        assert_eq!(p.right(4), None);
        assert_eq!(p.down(4), Some(Pos::new(3, 3)));
        assert_eq!(Pos::new(3, 0).down(4), None);
        assert_eq!(Pos::new(3, 0).right(4), Some(Pos::new(3, 1)));
    }

    #[test]
    fn rotate_cw_corners() {
        // Top-left goes to top-right, top-right to bottom-right.
        assert_eq!(Pos::new(0, 0).rotated_cw(4), Pos::new(0, 3));
        assert_eq!(Pos::new(0, 3).rotated_cw(4), Pos::new(3, 3));
        assert_eq!(Pos::new(3, 3).rotated_cw(4), Pos::new(3, 0));
        assert_eq!(Pos::new(3, 0).rotated_cw(4), Pos::new(0, 0));
    }

    #[test]
    fn four_turns_is_identity() {
        for p in Positions::new(5) {
            assert_eq!(p.rotated(5, 4), p);
            assert_eq!(p.rotated(5, 3).rotated_cw(5), p);
        }
    }

    #[test]
    fn index_round_trip() {
        let p = Pos::new(2, 1);
        assert_eq!(p.index(4), 9);
        assert_eq!(Pos::from_index(9, 4), p);
    }

    #[test]
    fn positions_are_row_major() {
        let pts: Vec<_> = Positions::new(3).collect();
        assert_eq!(pts.len(), 9);
        assert_eq!(pts[0], Pos::new(0, 0));
        assert_eq!(pts[1], Pos::new(0, 1));
        assert_eq!(pts[3], Pos::new(1, 0));
        assert_eq!(pts[8], Pos::new(2, 2));
        assert!(pts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn positions_len() {
        let mut it = Positions::new(4);
        assert_eq!(it.len(), 16);
        it.next();
        assert_eq!(it.len(), 15);
        assert_eq!(Positions::new(0).count(), 0);
    }
}
