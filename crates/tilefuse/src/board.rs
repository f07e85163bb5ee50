//! The [`Board`]: a square grid where each cell holds at most one [`Tile`].

use std::fmt;

use tilefuse_core::{Grid, Pos};

use crate::error::GameError;
use crate::spawn::TileSource;
use crate::tile::{MAX_TILE_VALUE, Tile};

/// An N×N board of tiles.
///
/// Every tile's `pos` equals the cell it occupies. All transformations
/// return a new board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    grid: Grid<Option<Tile>>,
}

impl Board {
    /// A board with no tiles.
    pub fn empty(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
        }
    }

    /// Build a board from rows of tile values, `0` meaning an empty cell.
    ///
    /// Each tile gets a fresh id from `source`. Rows must form a square and
    /// every non-zero value must be a power of two no larger than
    /// [`MAX_TILE_VALUE`].
    pub fn from_values(rows: &[Vec<u32>], source: &mut impl TileSource) -> Result<Self, GameError> {
        let size = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(GameError::RaggedBoard {
                rows: size,
                row,
                len: r.len(),
            });
        }
        let mut board = Self::empty(size);
        for p in board.grid.positions() {
            let value = rows[p.row][p.col];
            if value == 0 {
                continue;
            }
            if !value.is_power_of_two() || !(2..=MAX_TILE_VALUE).contains(&value) {
                return Err(GameError::InvalidTileValue { value, pos: p });
            }
            board.place(Tile::new(source.next_id(), value, p));
        }
        Ok(board)
    }

    /// Rebuild a board from a grid, moving each tile's `pos` to its cell.
    pub(crate) fn from_grid(grid: Grid<Option<Tile>>) -> Self {
        let grid = grid.map(|p, cell| cell.clone().map(|t| t.at(p)));
        Self { grid }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// The tile at `p`, if any.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<&Tile> {
        self.grid.at(p).and_then(Option::as_ref)
    }

    /// The underlying grid of cells.
    #[inline]
    pub fn grid(&self) -> &Grid<Option<Tile>> {
        &self.grid
    }

    /// Row `r` as a slice of cells.
    #[inline]
    pub fn row(&self, r: usize) -> &[Option<Tile>] {
        self.grid.row(r)
    }

    /// Put `tile` into the cell named by its own position, replacing
    /// whatever was there.
    pub(crate) fn place(&mut self, tile: Tile) {
        self.grid.set(tile.pos(), Some(tile));
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.grid.cells().iter().flatten()
    }

    /// Number of tiles on the board.
    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Empty cells in row-major order.
    pub fn empty_positions(&self) -> Vec<Pos> {
        self.grid
            .iter()
            .filter(|(_, cell)| cell.is_none())
            .map(|(p, _)| p)
            .collect()
    }

    /// Whether every cell holds a tile.
    pub fn is_full(&self) -> bool {
        self.grid.cells().iter().all(Option::is_some)
    }

    /// Whether any move could change the board: an empty cell exists, or
    /// some tile would merge with its right or bottom neighbour.
    pub fn can_move(&self) -> bool {
        let n = self.size();
        self.grid.iter().any(|(p, cell)| {
            let Some(tile) = cell else {
                return true;
            };
            let merges = |q: Option<Pos>| {
                q.and_then(|q| self.at(q))
                    .is_some_and(|other| tile.merges_with(other))
            };
            merges(p.right(n)) || merges(p.down(n))
        })
    }

    /// Largest tile value, or 0 on an empty board.
    pub fn max_value(&self) -> u32 {
        self.tiles().map(Tile::value).max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn value_sum(&self) -> u64 {
        self.tiles().map(|t| u64::from(t.value())).sum()
    }

    /// Tile values as rows, `0` for empty cells.
    pub fn values(&self) -> Vec<Vec<u32>> {
        self.grid
            .rows()
            .map(|row| row.iter().map(|c| c.as_ref().map_or(0, Tile::value)).collect())
            .collect()
    }

    /// The board turned one quarter clockwise, with every tile's position
    /// rewritten to its new cell.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size();
        let grid = self
            .grid
            .map(|_, cell| cell.as_ref().map(|t| t.rotated_cw(n)))
            .rotated_cw();
        Self { grid }
    }

    /// Apply [`rotated_cw`](Self::rotated_cw) `turns` times (modulo 4).
    pub fn rotated(&self, turns: usize) -> Self {
        let mut b = self.clone();
        for _ in 0..turns % 4 {
            b = b.rotated_cw();
        }
        b
    }
}

/// Free-function form of [`Board::can_move`].
#[inline]
pub fn can_move(board: &Board) -> bool {
    board.can_move()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_value().max(1).to_string().len();
        for row in self.grid.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|c| match c {
                    Some(t) => format!("{:>width$}", t.value()),
                    None => format!("{:>width$}", "."),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawn::testing::Scripted;

    fn board(rows: &[Vec<u32>]) -> Board {
        Board::from_values(rows, &mut Scripted::default()).unwrap()
    }

    #[test]
    fn from_values_places_tiles_at_their_cells() {
        let b = board(&[vec![2, 0, 0], vec![0, 4, 0], vec![0, 0, 8]]);
        assert_eq!(b.size(), 3);
        assert_eq!(b.tile_count(), 3);
        for (p, cell) in b.grid().iter() {
            if let Some(t) = cell {
                assert_eq!(t.pos(), p);
            }
        }
        assert_eq!(b.at(Pos::new(1, 1)).map(Tile::value), Some(4));
        assert_eq!(b.values()[2], vec![0, 0, 8]);
    }

    #[test]
    fn from_values_rejects_bad_input() {
        let mut src = Scripted::default();
        assert_eq!(
            Board::from_values(&[vec![2, 0], vec![0]], &mut src),
            Err(GameError::RaggedBoard { rows: 2, row: 1, len: 1 })
        );
        assert_eq!(
            Board::from_values(&[vec![2, 0], vec![6, 0]], &mut src),
            Err(GameError::InvalidTileValue {
                value: 6,
                pos: Pos::new(1, 0)
            })
        );
        assert!(Board::from_values(&[vec![1, 0], vec![0, 0]], &mut src).is_err());
    }

    #[test]
    fn tile_ids_are_unique() {
        let b = board(&[vec![2, 2], vec![2, 2]]);
        let mut ids: Vec<_> = b.tiles().map(Tile::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn empty_positions_row_major() {
        let b = board(&[vec![2, 0], vec![0, 4]]);
        assert_eq!(b.empty_positions(), vec![Pos::new(0, 1), Pos::new(1, 0)]);
        assert!(!b.is_full());
        assert!(Board::empty(3).empty_positions().len() == 9);
    }

    #[test]
    fn can_move_with_empty_cell() {
        let b = board(&[vec![2, 4], vec![8, 0]]);
        assert!(b.can_move());
        assert!(can_move(&b));
    }

    #[test]
    fn can_move_with_horizontal_pair() {
        let b = board(&[vec![2, 4, 8], vec![16, 32, 32], vec![2, 4, 8]]);
        assert!(b.is_full());
        assert!(b.can_move());
    }

    #[test]
    fn can_move_with_vertical_pair() {
        let b = board(&[vec![2, 4, 8], vec![16, 32, 64], vec![2, 4, 64]]);
        assert!(b.can_move());
    }

    #[test]
    fn cannot_move_on_checkerboard() {
        let b = board(&[
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
        ]);
        assert!(b.is_full());
        assert!(!b.can_move());
    }

    #[test]
    fn max_value_pair_is_not_a_move() {
        let m = MAX_TILE_VALUE;
        let b = board(&[vec![m, m], vec![2, 4]]);
        assert!(b.is_full());
        assert!(!b.can_move());
        assert!(board(&[vec![m / 2, m / 2], vec![2, 4]]).can_move());
    }

    #[test]
    fn rotation_rewrites_positions() {
        let b = board(&[vec![2, 4], vec![8, 16]]);
        let r = b.rotated_cw();
        assert_eq!(r.values(), vec![vec![8, 2], vec![16, 4]]);
        for (p, cell) in r.grid().iter() {
            assert_eq!(cell.as_ref().map(Tile::pos), Some(p));
        }
        // Identity follows the value.
        assert_eq!(
            r.at(Pos::new(0, 1)).map(Tile::id),
            b.at(Pos::new(0, 0)).map(Tile::id)
        );
    }

    #[test]
    fn four_rotations_restore_board() {
        let b = board(&[
            vec![2, 0, 4, 0],
            vec![0, 8, 0, 16],
            vec![32, 0, 0, 0],
            vec![0, 0, 64, 2],
        ]);
        assert_eq!(b.rotated(4), b);
        assert_eq!(b.rotated(1).rotated(3), b);
        assert_eq!(b.rotated(2).rotated(2), b);
    }

    #[test]
    fn aggregates() {
        let b = board(&[vec![2, 0], vec![128, 4]]);
        assert_eq!(b.max_value(), 128);
        assert_eq!(b.value_sum(), 134);
        assert_eq!(Board::empty(4).max_value(), 0);
    }

    #[test]
    fn display_grid() {
        let b = board(&[vec![2, 0], vec![128, 4]]);
        assert_eq!(b.to_string(), "  2   .\n128   4\n");
    }
}
