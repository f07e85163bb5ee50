//! A running game: the current state plus what it takes to advance it.
//!
//! [`Session`] is the caller the engine expects. It feeds directions to
//! [`make_move`], keeps the newest state, ignores input once the game is
//! over, and reports new best scores to a [`ScoreStore`].

use crate::config::GameConfig;
use crate::direction::Direction;
use crate::error::GameError;
use crate::game::{GameState, initialize_game, make_move};
use crate::spawn::{RandomSource, TileSource};

/// Where the best score lives between games. The engine never reads it.
pub trait ScoreStore {
    /// Best score recorded so far, 0 if none.
    fn best(&self) -> u64;

    /// Record a new best score.
    fn set_best(&mut self, score: u64);
}

/// A [`ScoreStore`] that forgets everything when dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    best: u64,
}

impl MemoryScoreStore {
    pub fn new(best: u64) -> Self {
        Self { best }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn best(&self) -> u64 {
        self.best
    }

    fn set_best(&mut self, score: u64) {
        self.best = score;
    }
}

/// One player's game.
pub struct Session<S: TileSource = RandomSource, B: ScoreStore = MemoryScoreStore> {
    config: GameConfig,
    state: GameState,
    source: S,
    store: B,
}

impl Session {
    /// A session with an OS-seeded source and an in-memory best score.
    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        Self::new(config, RandomSource::from_os_rng(), MemoryScoreStore::default())
    }
}

impl<S: TileSource, B: ScoreStore> Session<S, B> {
    /// Start the first game.
    pub fn new(config: GameConfig, mut source: S, store: B) -> Result<Self, GameError> {
        let state = initialize_game(&config, &mut source)?;
        Ok(Self {
            config,
            state,
            source,
            store,
        })
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn best_score(&self) -> u64 {
        self.store.best()
    }

    #[inline]
    pub fn store(&self) -> &B {
        &self.store
    }

    /// Play `direction`. Returns whether the board changed.
    ///
    /// Input is ignored once the game is over. The state is replaced only
    /// when something moved.
    pub fn handle_move(&mut self, direction: Direction) -> bool {
        if self.state.game_over() {
            log::trace!("{direction} ignored: game over");
            return false;
        }
        let result = make_move(self.state.clone(), direction, &mut self.source);
        if result.moved {
            self.state = result.state;
            let score = self.state.score();
            if score > self.store.best() {
                self.store.set_best(score);
            }
        }
        result.moved
    }

    /// Play the direction bound to `key`, if any. Returns whether the board
    /// changed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => self.handle_move(direction),
            None => false,
        }
    }

    /// Keep playing after a win.
    pub fn continue_game(&mut self) {
        self.state = self.state.clone().continue_game();
    }

    /// Throw the current game away and start a fresh one.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.state = initialize_game(&self.config, &mut self.source)?;
        Ok(())
    }

    /// Start a fresh game on a board of another size.
    ///
    /// On error the current game is kept.
    pub fn resize(&mut self, size: usize) -> Result<(), GameError> {
        let config = self.config.clone().with_size(size);
        self.state = initialize_game(&config, &mut self.source)?;
        log::debug!("board resized to {size}");
        self.config = config;
        Ok(())
    }
}
