//! The [`Grid`] type — an owned, square 2D grid of values.
//!
//! Unlike a shared-buffer view, a `Grid` owns its cells: cloning copies them,
//! and every transformation ([`map`](Grid::map), [`rotated_cw`](Grid::rotated_cw))
//! returns a new grid. That keeps older boards valid after a move.

use crate::geom::{Pos, Positions};

/// A `size`×`size` grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    size: usize,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            cells: vec![value; size * size],
            size,
        }
    }

    /// The grid turned one quarter clockwise: the left column becomes the
    /// top row.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size;
        Self::from_fn(n, |p| {
            // p = src.rotated_cw(n) solved for src.
            let src = Pos::new(n - 1 - p.col, p.row);
            self.cells[src.index(n)].clone()
        })
    }

    /// Apply [`rotated_cw`](Self::rotated_cw) `turns` times (modulo 4).
    pub fn rotated(&self, turns: usize) -> Self {
        let mut g = self.clone();
        for _ in 0..turns % 4 {
            g = g.rotated_cw();
        }
        g
    }
}

impl<T: Default + Clone> Grid<T> {
    /// Create a grid filled with `T::default()`.
    pub fn new(size: usize) -> Self {
        Self::filled(size, T::default())
    }
}

impl<T> Grid<T> {
    /// Build a grid by calling `f` for every position in row-major order.
    pub fn from_fn(size: usize, mut f: impl FnMut(Pos) -> T) -> Self {
        Self {
            cells: Positions::new(size).map(&mut f).collect(),
            size,
        }
    }

    /// Build a grid from rows. Returns `None` unless the input is square.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            cells: rows.into_iter().flatten().collect(),
            size,
        })
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is on the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.in_bounds(self.size)
    }

    /// Borrow the value at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<&T> {
        if !self.contains(p) {
            return None;
        }
        self.cells.get(p.index(self.size))
    }

    /// Mutably borrow the value at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at_mut(&mut self, p: Pos) -> Option<&mut T> {
        if !self.contains(p) {
            return None;
        }
        self.cells.get_mut(p.index(self.size))
    }

    /// Set the value at `p`. No-op if `p` is outside the grid.
    pub fn set(&mut self, p: Pos, value: T) {
        if let Some(slot) = self.at_mut(p) {
            *slot = value;
        }
    }

    /// Row `r` as a slice. Panics if `r >= size`.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        &self.cells[r * self.size..(r + 1) * self.size]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, and a zero-sized grid has no rows anyway.
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    /// Every position of the grid in row-major order.
    #[inline]
    pub fn positions(&self) -> Positions {
        Positions::new(self.size)
    }

    /// Row-major iterator over `(Pos, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
        self.positions().zip(self.cells.iter())
    }

    /// All cells as a row-major slice.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// A new grid with `f` applied to every cell.
    pub fn map<U>(&self, mut f: impl FnMut(Pos, &T) -> U) -> Grid<U> {
        Grid {
            cells: self.iter().map(|(p, v)| f(p, v)).collect(),
            size: self.size,
        }
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Pos, &T) -> bool) -> usize {
        self.iter().filter(|(p, v)| f(*p, v)).count()
    }

    /// Consume the grid, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        let size = self.size;
        let mut rows = Vec::with_capacity(size);
        let mut it = self.cells.into_iter();
        for _ in 0..size {
            rows.push(it.by_ref().take(size).collect());
        }
        rows
    }
}
