//! Random tile spawning and the source of randomness and tile ids.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::tile::{Tile, TileId};

/// Chance that a spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Every choice the engine cannot make deterministically.
///
/// The engine draws fresh tile ids and spawn decisions only through this
/// trait, so a seeded or scripted source makes whole games reproducible.
pub trait TileSource {
    /// A tile id never handed out before by this source.
    fn next_id(&mut self) -> TileId;

    /// Pick one of `n` empty cells, uniformly. Called with `n > 0`.
    fn pick_cell(&mut self, n: usize) -> usize;

    /// Value of a newly spawned tile: 2 or 4.
    fn spawn_value(&mut self) -> u32;
}

impl<S: TileSource + ?Sized> TileSource for &mut S {
    fn next_id(&mut self) -> TileId {
        (**self).next_id()
    }

    fn pick_cell(&mut self, n: usize) -> usize {
        (**self).pick_cell(n)
    }

    fn spawn_value(&mut self) -> u32 {
        (**self).spawn_value()
    }
}

/// [`TileSource`] backed by an RNG and a counter.
///
/// Ids count up from 1, so they stay unique for as long as the source is
/// used. Share one source across every board of a game.
#[derive(Debug, Clone)]
pub struct RandomSource<R: Rng = SmallRng> {
    rng: R,
    next_id: u64,
}

impl<R: Rng> RandomSource<R> {
    /// Wrap an RNG.
    pub fn new(rng: R) -> Self {
        Self { rng, next_id: 1 }
    }

    /// Number of ids handed out so far.
    #[inline]
    pub fn issued(&self) -> u64 {
        self.next_id - 1
    }
}

impl RandomSource<SmallRng> {
    /// A reproducible source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// A source seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> TileSource for RandomSource<R> {
    fn next_id(&mut self) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        id
    }

    fn pick_cell(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }

    fn spawn_value(&mut self) -> u32 {
        if self.rng.random_bool(SPAWN_TWO_PROBABILITY) {
            2
        } else {
            4
        }
    }
}

/// Choose where the next tile appears and what it is worth.
///
/// Returns `None` when the board is full. The board is only inspected; the
/// caller places the returned tile.
pub fn add_random_tile(board: &Board, source: &mut impl TileSource) -> Option<Tile> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return None;
    }
    let pos = empty[source.pick_cell(empty.len())];
    let value = source.spawn_value();
    Some(Tile::spawned(source.next_id(), value, pos))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::*;

    /// A source that replays fixed choices, then falls back to the first
    /// empty cell and a 2.
    #[derive(Debug, Default)]
    pub(crate) struct Scripted {
        cells: VecDeque<usize>,
        values: VecDeque<u32>,
        next_id: u64,
    }

    impl Scripted {
        pub(crate) fn new(cells: &[usize], values: &[u32]) -> Self {
            Self {
                cells: cells.iter().copied().collect(),
                values: values.iter().copied().collect(),
                next_id: 1,
            }
        }

        pub(crate) fn issued(&self) -> u64 {
            self.next_id.saturating_sub(1)
        }
    }

    impl TileSource for Scripted {
        fn next_id(&mut self) -> TileId {
            self.next_id = self.next_id.max(1);
            let id = TileId(self.next_id);
            self.next_id += 1;
            id
        }

        fn pick_cell(&mut self, n: usize) -> usize {
            self.cells.pop_front().unwrap_or(0).min(n - 1)
        }

        fn spawn_value(&mut self) -> u32 {
            self.values.pop_front().unwrap_or(2)
        }
    }
}
