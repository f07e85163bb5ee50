//! Tiles and their identities.

use std::fmt;

use tilefuse_core::Pos;

/// Largest value a tile can hold. Two tiles of this value do not merge.
pub const MAX_TILE_VALUE: u32 = 1 << 31;

/// Stable identity of a tile, assigned once by a
/// [`TileSource`](crate::spawn::TileSource) and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile-{}", self.0)
    }
}

/// A numbered piece on the board.
///
/// `id` and `value` are fixed for the tile's lifetime: a merge creates a new
/// tile instead of growing one of its sources. `pos` always names the cell
/// holding the tile and is rewritten whenever the board moves or rotates.
///
/// `merged_from` and `is_new` are hints for animation. They describe the
/// move that produced the tile and are dropped once the tile is carried into
/// a later move.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    id: TileId,
    value: u32,
    pos: Pos,
    merged_from: Option<Box<[Tile; 2]>>,
    is_new: bool,
}

impl Tile {
    /// A settled tile with no hints.
    pub fn new(id: TileId, value: u32, pos: Pos) -> Self {
        Self {
            id,
            value,
            pos,
            merged_from: None,
            is_new: false,
        }
    }

    /// A freshly spawned tile.
    pub fn spawned(id: TileId, value: u32, pos: Pos) -> Self {
        Self {
            is_new: true,
            ..Self::new(id, value, pos)
        }
    }

    /// The tile produced by merging `first` with `second`, or `None` if
    /// [`merges_with`](Self::merges_with) says they cannot merge.
    ///
    /// It takes the position of `first`, the leading tile in the slide, and
    /// twice its value. Both sources are kept, without their own hints.
    pub fn merged(id: TileId, first: &Tile, second: &Tile) -> Option<Self> {
        if !first.merges_with(second) {
            return None;
        }
        Some(Self {
            id,
            value: first.value.checked_mul(2)?,
            pos: first.pos,
            merged_from: Some(Box::new([first.settled(), second.settled()])),
            is_new: false,
        })
    }

    /// Whether the two tiles merge when they meet: equal values, and the
    /// doubled value still fits under [`MAX_TILE_VALUE`].
    #[inline]
    pub fn merges_with(&self, other: &Tile) -> bool {
        self.value == other.value && self.value <= MAX_TILE_VALUE / 2
    }

    #[inline]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// The two tiles consumed to create this one, if it was created by a
    /// merge on the latest move.
    #[inline]
    pub fn merged_from(&self) -> Option<&[Tile; 2]> {
        self.merged_from.as_deref()
    }

    /// Whether the tile was spawned on the latest move.
    #[inline]
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Same tile, hints dropped.
    pub fn settled(&self) -> Tile {
        Self::new(self.id, self.value, self.pos)
    }

    /// Same tile at another cell.
    pub fn at(mut self, pos: Pos) -> Tile {
        self.pos = pos;
        self
    }

    /// Same tile after a clockwise quarter turn of a `size`×`size` board.
    /// Merge sources turn with it.
    pub fn rotated_cw(&self, size: usize) -> Tile {
        Self {
            id: self.id,
            value: self.value,
            pos: self.pos.rotated_cw(size),
            merged_from: self
                .merged_from
                .as_ref()
                .map(|src| Box::new([src[0].rotated_cw(size), src[1].rotated_cw(size)])),
            is_new: self.is_new,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}={}", self.id, self.pos, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_doubles_and_keeps_leading_position() {
        let a = Tile::new(TileId(1), 8, Pos::new(0, 1));
        let b = Tile::spawned(TileId(2), 8, Pos::new(0, 3));
        let m = Tile::merged(TileId(3), &a, &b).unwrap();
        assert_eq!(m.id(), TileId(3));
        assert_eq!(m.value(), 16);
        assert_eq!(m.pos(), Pos::new(0, 1));
        assert!(!m.is_new());
        let src = m.merged_from().unwrap();
        assert_eq!(src[0].id(), TileId(1));
        assert_eq!(src[1].id(), TileId(2));
        // Sources lose their own hints.
        assert!(!src[1].is_new());
    }

    #[test]
    fn merge_sources_do_not_nest() {
        let a = Tile::new(TileId(1), 2, Pos::new(0, 0));
        let b = Tile::new(TileId(2), 2, Pos::new(0, 1));
        let ab = Tile::merged(TileId(3), &a, &b).unwrap();
        let c = Tile::new(TileId(4), 4, Pos::new(0, 2));
        let abc = Tile::merged(TileId(5), &ab, &c).unwrap();
        let src = abc.merged_from().unwrap();
        assert!(src[0].merged_from().is_none());
    }

    #[test]
    fn unequal_tiles_do_not_merge() {
        let a = Tile::new(TileId(1), 2, Pos::new(0, 0));
        let b = Tile::new(TileId(2), 4, Pos::new(0, 1));
        assert!(!a.merges_with(&b));
        assert_eq!(Tile::merged(TileId(3), &a, &b), None);
    }

    #[test]
    fn largest_pair_merges_to_max_value() {
        let a = Tile::new(TileId(1), MAX_TILE_VALUE / 2, Pos::new(0, 0));
        let b = Tile::new(TileId(2), MAX_TILE_VALUE / 2, Pos::new(0, 1));
        let m = Tile::merged(TileId(3), &a, &b).unwrap();
        assert_eq!(m.value(), MAX_TILE_VALUE);
    }

    #[test]
    fn max_value_tiles_do_not_merge() {
        let a = Tile::new(TileId(1), MAX_TILE_VALUE, Pos::new(0, 0));
        let b = Tile::new(TileId(2), MAX_TILE_VALUE, Pos::new(0, 1));
        assert!(!a.merges_with(&b));
        assert_eq!(Tile::merged(TileId(3), &a, &b), None);
    }

    #[test]
    fn settled_drops_hints() {
        let t = Tile::spawned(TileId(7), 2, Pos::new(1, 1));
        assert!(t.is_new());
        let s = t.settled();
        assert!(!s.is_new());
        assert_eq!((s.id(), s.value(), s.pos()), (t.id(), t.value(), t.pos()));
    }

    #[test]
    fn rotation_moves_sources_too() {
        let a = Tile::new(TileId(1), 2, Pos::new(0, 0));
        let b = Tile::new(TileId(2), 2, Pos::new(0, 1));
        let m = Tile::merged(TileId(3), &a, &b).unwrap().rotated_cw(4);
        assert_eq!(m.pos(), Pos::new(0, 3));
        let src = m.merged_from().unwrap();
        assert_eq!(src[0].pos(), Pos::new(0, 3));
        assert_eq!(src[1].pos(), Pos::new(1, 3));
    }

    #[test]
    fn display() {
        let t = Tile::new(TileId(12), 64, Pos::new(2, 0));
        assert_eq!(t.to_string(), "tile-12@(2, 0)=64");
    }
}
