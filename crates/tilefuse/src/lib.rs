//! **tilefuse** — rules engine for a 2048-style sliding-tile puzzle.
//!
//! A game is a [`GameState`] value. [`initialize_game`] deals the opening
//! board, and [`make_move`] turns a state and a [`Direction`] into the next
//! state, reporting whether anything moved. Every direction is resolved by
//! rotating the board so that the move points left, sliding, and rotating
//! back, so the merge rules exist in exactly one place ([`slide`]).
//!
//! Randomness and tile ids come from a [`TileSource`]; seed a
//! [`RandomSource`] to replay a game exactly.
//!
//! ```
//! use tilefuse::{Direction, GameConfig, RandomSource, initialize_game, make_move};
//!
//! let mut source = RandomSource::seeded(42);
//! let state = initialize_game(&GameConfig::default(), &mut source).unwrap();
//! let result = make_move(state, Direction::Left, &mut source);
//! println!("moved: {}, score: {}", result.moved, result.state.score());
//! ```

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod game;
pub mod session;
pub mod slide;
pub mod spawn;
pub mod tile;

pub use board::{Board, can_move};
pub use config::{DEFAULT_WINNING_VALUE, GameConfig, MIN_BOARD_SIZE, ScoringRule};
pub use direction::Direction;
pub use error::GameError;
pub use game::{GameState, MoveResult, initialize_game, make_move, shift};
pub use session::{MemoryScoreStore, ScoreStore, Session};
pub use spawn::{RandomSource, TileSource, add_random_tile};
pub use tile::{MAX_TILE_VALUE, Tile, TileId};
pub use tilefuse_core::{Grid, Pos};
