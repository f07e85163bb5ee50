//! Slide-and-merge toward the left edge.
//!
//! Every direction is resolved by rotating the board so that it points left,
//! running [`slide_left`], and rotating back. All merge rules live here.

use tilefuse_core::{Grid, Pos};

use crate::board::Board;
use crate::spawn::TileSource;
use crate::tile::Tile;

/// Result of sliding one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSlide {
    /// The line after the slide, same length as the input.
    pub cells: Vec<Option<Tile>>,
    /// Sum of the values of the merged tiles.
    pub gained: u64,
    pub merges: usize,
}

/// Slide the tiles of row `row` to the left, merging equal neighbours.
///
/// Tiles keep their order. Scanning from the left, a tile equal to the next
/// one merges with it into a new tile and both are consumed, so a merged tile
/// never merges again in the same slide: `[2, 2, 2, 2]` becomes `[4, 4, _, _]`.
/// Tiles already at [`MAX_TILE_VALUE`](crate::tile::MAX_TILE_VALUE) never merge.
/// Output tiles get their positions from their index in the output.
pub fn slide_row(row: usize, line: &[Option<Tile>], source: &mut impl TileSource) -> LineSlide {
    let tiles: Vec<&Tile> = line.iter().flatten().collect();
    let mut cells: Vec<Option<Tile>> = Vec::with_capacity(line.len());
    let mut gained = 0u64;
    let mut merges = 0usize;

    let mut i = 0;
    while i < tiles.len() {
        let pos = Pos::new(row, cells.len());
        let merged = match tiles.get(i + 1) {
            Some(next) if tiles[i].merges_with(next) => {
                Tile::merged(source.next_id(), tiles[i], next)
            }
            _ => None,
        };
        match merged {
            Some(merged) => {
                let merged = merged.at(pos);
                gained += u64::from(merged.value());
                merges += 1;
                cells.push(Some(merged));
                i += 2;
            }
            None => {
                cells.push(Some(tiles[i].settled().at(pos)));
                i += 1;
            }
        }
    }
    cells.resize(line.len(), None);

    LineSlide {
        cells,
        gained,
        merges,
    }
}

/// Result of sliding a whole board to the left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideOutcome {
    pub board: Board,
    /// Whether any cell now holds a different tile than before.
    pub moved: bool,
    pub gained: u64,
    pub merges: usize,
}

/// Slide every row of `board` to the left.
///
/// `moved` is set when any cell's resident tile changed identity: a tile
/// left it, arrived in it, or was replaced by a merge. Ids are only drawn
/// from `source` for merges, so a slide that changes nothing mints none.
pub fn slide_left(board: &Board, source: &mut impl TileSource) -> SlideOutcome {
    let n = board.size();
    let mut rows: Vec<Vec<Option<Tile>>> = Vec::with_capacity(n);
    let mut gained = 0;
    let mut merges = 0;
    let mut moved = false;

    for r in 0..n {
        let before = board.row(r);
        let line = slide_row(r, before, source);
        moved |= before
            .iter()
            .zip(&line.cells)
            .any(|(a, b)| a.as_ref().map(Tile::id) != b.as_ref().map(Tile::id));
        gained += line.gained;
        merges += line.merges;
        rows.push(line.cells);
    }

    let grid = Grid::from_fn(n, |p| rows[p.row][p.col].take());
    SlideOutcome {
        board: Board::from_grid(grid),
        moved,
        gained,
        merges,
    }
}
