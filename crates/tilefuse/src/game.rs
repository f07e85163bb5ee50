//! Game state and the move function.

use crate::board::Board;
use crate::config::{GameConfig, ScoringRule};
use crate::direction::Direction;
use crate::error::GameError;
use crate::slide::{SlideOutcome, slide_left};
use crate::spawn::{TileSource, add_random_tile};
use crate::tile::{Tile, TileId};

/// Everything a caller needs to show and continue a game.
///
/// States are values: [`make_move`] builds a new one and never alters the
/// one it was given, so older states stay valid for replay.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    board: Board,
    tiles: Vec<Tile>,
    score: u64,
    game_over: bool,
    game_won: bool,
    keep_playing: bool,
    winning_value: u32,
    scoring: ScoringRule,
}

impl GameState {
    /// Wrap an arbitrary board, for example one restored by the caller.
    ///
    /// The board's own side length overrides `config.size`. `game_over` and
    /// `game_won` are derived from the board; the score starts at zero.
    pub fn from_board(board: Board, config: &GameConfig) -> Result<Self, GameError> {
        config.clone().with_size(board.size()).validate()?;
        let game_won = board.max_value() >= config.winning_value;
        let game_over = !board.can_move();
        Ok(Self {
            tiles: board.tiles().cloned().collect(),
            board,
            score: 0,
            game_over,
            game_won,
            keep_playing: false,
            winning_value: config.winning_value,
            scoring: config.scoring,
        })
    }

    /// Same state with another score (builder).
    pub fn with_score(mut self, score: u64) -> Self {
        self.score = score;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Tiles on the board, row-major. Always the non-empty cells of
    /// [`board`](Self::board).
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Board side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// No move can change the board any more.
    #[inline]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// A tile reached the winning value. Once set, later moves keep it set.
    #[inline]
    pub fn game_won(&self) -> bool {
        self.game_won
    }

    /// The player chose to keep going after winning.
    #[inline]
    pub fn keep_playing(&self) -> bool {
        self.keep_playing
    }

    #[inline]
    pub fn winning_value(&self) -> u32 {
        self.winning_value
    }

    #[inline]
    pub fn scoring(&self) -> ScoringRule {
        self.scoring
    }

    /// The configuration this game runs under.
    pub fn config(&self) -> GameConfig {
        GameConfig::default()
            .with_size(self.size())
            .with_winning_value(self.winning_value)
            .with_scoring(self.scoring)
    }

    /// Dismiss the win and keep playing on the same board.
    ///
    /// Clears `game_won`; later moves will not raise it again.
    pub fn continue_game(mut self) -> Self {
        self.game_won = false;
        self.keep_playing = true;
        self
    }
}

/// Outcome of [`make_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub state: GameState,
    /// Whether the board changed. When false, `state` is the input state.
    pub moved: bool,
    /// Sum of the values of tiles created by merges on this move.
    pub gained: u64,
    pub merges: usize,
    /// The tile spawned after the slide, if the board had room.
    pub spawned: Option<TileId>,
}

/// Start a game: an empty board with two random tiles.
pub fn initialize_game(
    config: &GameConfig,
    source: &mut impl TileSource,
) -> Result<GameState, GameError> {
    config.validate()?;
    let mut board = Board::empty(config.size);
    for _ in 0..2 {
        if let Some(tile) = add_random_tile(&board, source) {
            board.place(tile);
        }
    }
    log::debug!("new {0}x{0} game, target {1}", config.size, config.winning_value);
    Ok(GameState {
        tiles: board.tiles().cloned().collect(),
        board,
        score: 0,
        game_over: false,
        game_won: false,
        keep_playing: false,
        winning_value: config.winning_value,
        scoring: config.scoring,
    })
}

/// Slide and merge every tile toward `direction`, without spawning.
///
/// The board is turned so that `direction` points left, slid with
/// [`slide_left`], and turned back; tile positions follow every turn.
pub fn shift(board: &Board, direction: Direction, source: &mut impl TileSource) -> SlideOutcome {
    let rotated = board.rotated(direction.turns_in());
    let mut out = slide_left(&rotated, source);
    out.board = out.board.rotated(direction.turns_out());
    out
}

/// Play one move.
///
/// If nothing on the board can move toward `direction`, the input state is
/// handed back untouched with `moved = false`: no tile is spawned, the score
/// is unchanged, and no ids are drawn from `source`.
///
/// Otherwise one tile is spawned on an empty cell (if any), the score is
/// updated by the game's [`ScoringRule`], `game_won` is raised when a tile
/// reaches the winning value, and `game_over` is set when the new board
/// admits no further move.
///
/// Once [`GameState::continue_game`] has set `keep_playing`, later moves
/// never raise `game_won` again, even with a winning tile on the board.
pub fn make_move(state: GameState, direction: Direction, source: &mut impl TileSource) -> MoveResult {
    let slid = shift(&state.board, direction, source);
    if !slid.moved {
        log::trace!("{direction}: nothing moves");
        return MoveResult {
            state,
            moved: false,
            gained: 0,
            merges: 0,
            spawned: None,
        };
    }

    let mut board = slid.board;
    let spawned = add_random_tile(&board, source).map(|tile| {
        let id = tile.id();
        board.place(tile);
        id
    });

    let score = match state.scoring {
        ScoringRule::Cumulative => state.score + slid.gained,
        ScoringRule::MaxTile => u64::from(board.max_value()),
    };
    let reached = board.max_value() >= state.winning_value;
    let game_won = state.game_won || (reached && !state.keep_playing);
    let game_over = !board.can_move();

    log::debug!(
        "{direction}: {} merges, +{}, spawned {:?}, score {score}",
        slid.merges,
        slid.gained,
        spawned
    );
    if game_won && !state.game_won {
        log::info!("reached {} with score {score}", state.winning_value);
    }
    if game_over {
        log::info!("game over with score {score}");
    }

    MoveResult {
        state: GameState {
            tiles: board.tiles().cloned().collect(),
            board,
            score,
            game_over,
            game_won,
            ..state
        },
        moved: true,
        gained: slid.gained,
        merges: slid.merges,
        spawned,
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::spawn::RandomSource;

    #[test]
    fn state_round_trip() {
        let mut src = RandomSource::seeded(11);
        let s = initialize_game(&GameConfig::default(), &mut src).unwrap();
        let s = make_move(s, Direction::Down, &mut src).state;
        let json = serde_json::to_string(&s).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
