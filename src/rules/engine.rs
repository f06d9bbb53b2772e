//! The game interface consumed by search and training code.
//!
//! External collaborators (tree search, self-play, learners) only ever talk
//! to a game through this trait: build an initial state, query the action
//! space, list legal moves, apply an action, check for a result, and
//! project a player's canonical view.

use ndarray::Array2;
use smallvec::SmallVec;

use crate::core::{GameConfig, Player, Result};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }

    /// External value: `1` if player A won, `-1` if player B won.
    #[must_use]
    pub fn value(&self) -> i8 {
        match self {
            GameResult::Winner(p) => p.value(),
        }
    }
}

/// Symmetric `(board, policy)` training pairs.
pub type SymmetricForms = SmallVec<[(Array2<f64>, Vec<f64>); 8]>;

/// Two-player, turn-based game.
///
/// ## Implementation Notes
///
/// - `next_state` mutates the state in place and returns the next player.
///   It does not check legality: callers consult `valid_moves` first.
/// - `game_ended` returns `None` while the game continues.
/// - `canonical_form` must depend only on what `player` is allowed to see.
pub trait Game {
    /// The mutable per-game state.
    type State;

    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Build a fresh game state.
    fn init_board(&self) -> Result<Self::State>;

    /// Board dimensions `(n, n)`.
    fn board_size(&self) -> (usize, usize);

    /// Number of actions, legal or not.
    fn action_size(&self) -> usize;

    /// Legality bitmap of length `action_size()`: `1` legal, `0` illegal.
    ///
    /// Fails if `state` was built for a different board size.
    fn valid_moves(&self, state: &Self::State, player: Player) -> Result<Vec<u8>>;

    /// Apply `action` for `player`, returning the player to move next.
    fn next_state(&self, state: &mut Self::State, player: Player, action: usize) -> Result<Player>;

    /// Check if the game is over.
    fn game_ended(&self, state: &Self::State, player: Player) -> Option<GameResult>;

    /// `player`'s view of the board as a dense numeric grid.
    fn canonical_form(&self, state: &Self::State, player: Player) -> Array2<f64>;

    /// The eight dihedral variants of a canonical board and its policy.
    fn symmetries(&self, board: &Array2<f64>, policy: &[f64]) -> Result<SymmetricForms>;

    /// Byte key of a canonical board, equal for equal boards.
    fn string_representation(&self, board: &Array2<f64>) -> Result<Vec<u8>>;

    // === Convenience Methods ===

    /// Game result as `1` (A won), `-1` (B won) or `0` (ongoing).
    fn game_ended_value(&self, state: &Self::State, player: Player) -> i8 {
        self.game_ended(state, player).map_or(0, |result| result.value())
    }

    /// Indices of all legal actions.
    fn legal_actions(&self, state: &Self::State, player: Player) -> Result<Vec<usize>> {
        Ok(self
            .valid_moves(state, player)?
            .iter()
            .enumerate()
            .filter(|&(_, &valid)| valid == 1)
            .map(|(action, _)| action)
            .collect())
    }
}
