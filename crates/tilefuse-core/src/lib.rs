//! **tilefuse-core** — geometry for square tile boards.
//!
//! This crate holds the game-agnostic pieces of *tilefuse*: the [`Pos`]
//! cell coordinate and the owned, square [`Grid`] with row-major iteration
//! and quarter-turn rotation. The rules engine lives in the `tilefuse` crate.

pub mod geom;
pub mod grid;

pub use geom::{Pos, Positions};
pub use grid::Grid;
