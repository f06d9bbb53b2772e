//! Pattern game implementation.

use ndarray::Array2;

use crate::board::evidence::round_to;
use crate::board::{BoardState, CellView, Guess};
use crate::core::{ActionCodec, GameConfig, GameError, GameRng, Move, Player, Result};
use crate::rules::{symmetric_forms, Game, GameResult, SymmetricForms};

/// The pattern guessing game for one board configuration.
///
/// Holds only immutable rules; every game in progress lives in its own
/// `BoardState`.
#[derive(Clone, Debug)]
pub struct PatternGame {
    config: GameConfig,
    codec: ActionCodec,
}

/// Builder for creating a PatternGame.
#[derive(Clone, Debug, Default)]
pub struct PatternGameBuilder {
    config: GameConfig,
}

impl PatternGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, n: usize) -> Self {
        self.config.size = n;
        self
    }

    pub fn black_ratio(mut self, ratio: f64) -> Self {
        self.config.black_ratio = ratio;
        self
    }

    pub fn truthful_probability(mut self, probability: f64) -> Self {
        self.config.truthful_probability = probability;
        self
    }

    pub fn estimate_precision(mut self, digits: u32) -> Self {
        self.config.estimate_precision = digits;
        self
    }

    /// Validate the configuration and build the game.
    pub fn build(self) -> Result<PatternGame> {
        PatternGame::new(self.config)
    }
}

impl PatternGame {
    /// Create a game from a configuration.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let codec = ActionCodec::new(config.size)?;
        Ok(Self { config, codec })
    }

    /// The action encoding for this board size.
    #[must_use]
    pub fn codec(&self) -> &ActionCodec {
        &self.codec
    }

    /// Build a fresh random state whose every draw derives from `seed`.
    pub fn init_board_seeded(&self, seed: u64) -> Result<BoardState> {
        self.init_board_with_rng(GameRng::new(seed))
    }

    /// Build a fresh random state drawing from `rng`.
    pub fn init_board_with_rng(&self, rng: GameRng) -> Result<BoardState> {
        BoardState::random(&self.config, rng)
    }

    /// Build a state with fixed pieces (`0` white, `1` black).
    pub fn init_board_from_pieces(&self, pieces: &Array2<u8>, seed: u64) -> Result<BoardState> {
        let (rows, cols) = pieces.dim();
        if rows != self.config.size || cols != self.config.size {
            return Err(GameError::InvalidBoardShape { rows, cols });
        }
        BoardState::from_pieces(pieces, GameRng::new(seed))
    }

    /// Legal moves for `player`: every discover × query pair, then both guesses.
    ///
    /// Discover cells come from the opponent's mask, query cells from the
    /// player's own mask.
    pub fn legal_moves(&self, state: &BoardState, player: Player) -> Vec<Move> {
        let queries: Vec<_> = state.masked_cells(player).collect();
        let mut moves: Vec<Move> = state
            .masked_cells(player.opponent())
            .flat_map(|discover| queries.iter().map(move |&query| Move::Probe { discover, query }))
            .collect();
        moves.push(Move::GuessPattern);
        moves.push(Move::GuessNoPattern);
        moves
    }

    /// Whether `action` is currently legal for `player`.
    pub fn is_valid_action(&self, state: &BoardState, player: Player, action: usize) -> Result<bool> {
        self.check_state(state)?;
        Ok(match self.codec.decode(action)? {
            Move::Probe { discover, query } => {
                state.mask(player.opponent())[[discover.0, discover.1]]
                    && state.mask(player)[[query.0, query.1]]
            }
            Move::GuessPattern | Move::GuessNoPattern => true,
        })
    }

    /// Apply a symbolic move for `player`, returning the next player.
    ///
    /// Legality is not checked. A state of the wrong size and coordinates
    /// outside the board are rejected before anything changes.
    pub fn apply_move(&self, state: &mut BoardState, player: Player, mv: Move) -> Result<Player> {
        self.check_state(state)?;
        match mv {
            Move::GuessPattern => {
                log::debug!("{player} guesses the pattern is present");
                state.set_guess(player, Guess::PatternPresent);
            }
            Move::GuessNoPattern => {
                log::debug!("{player} guesses the pattern is absent");
                state.set_guess(player, Guess::PatternAbsent);
            }
            Move::Probe { discover, query } => {
                // Validate the query cell first so a bad move changes nothing.
                state.color_at(query)?;
                state.discover(player, discover)?;
                let reported = state.query(player, query, self.config.truthful_probability)?;
                log::trace!("{player}: {mv}, reported {reported}");
            }
        }
        Ok(player.opponent())
    }

    fn check_state(&self, state: &BoardState) -> Result<()> {
        if state.size() == self.config.size {
            Ok(())
        } else {
            Err(GameError::BoardSizeMismatch {
                expected: self.config.size,
                actual: state.size(),
            })
        }
    }
}

impl Game for PatternGame {
    type State = BoardState;

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn init_board(&self) -> Result<BoardState> {
        self.init_board_with_rng(GameRng::from_entropy())
    }

    fn board_size(&self) -> (usize, usize) {
        (self.config.size, self.config.size)
    }

    fn action_size(&self) -> usize {
        self.codec.action_size()
    }

    fn valid_moves(&self, state: &BoardState, player: Player) -> Result<Vec<u8>> {
        self.check_state(state)?;
        let mut valid = vec![0u8; self.codec.action_size()];
        let queries: Vec<_> = state.masked_cells(player).collect();
        for discover in state.masked_cells(player.opponent()) {
            for &query in &queries {
                valid[self.codec.probe_action(discover, query)] = 1;
            }
        }
        valid[self.codec.guess_pattern_action()] = 1;
        valid[self.codec.guess_no_pattern_action()] = 1;
        Ok(valid)
    }

    fn next_state(&self, state: &mut BoardState, player: Player, action: usize) -> Result<Player> {
        let mv = self.codec.decode(action)?;
        self.apply_move(state, player, mv)
    }

    /// The result does not depend on `player`.
    ///
    /// Player A's guess is compared with the pattern flag first, then
    /// player B's. With no pattern the flag is `0`, so an undecided guess
    /// already matches it: such a game counts as won by A before anyone
    /// guesses.
    fn game_ended(&self, state: &BoardState, _player: Player) -> Option<GameResult> {
        let flag = state.pattern_flag();
        let a = state.guess(Player::A).value();
        let b = state.guess(Player::B).value();

        if a == flag {
            Some(GameResult::Winner(Player::A))
        } else if a == -flag {
            Some(GameResult::Winner(Player::B))
        } else if b == flag {
            Some(GameResult::Winner(Player::B))
        } else if b == -flag {
            Some(GameResult::Winner(Player::A))
        } else {
            None
        }
    }

    fn canonical_form(&self, state: &BoardState, player: Player) -> Array2<f64> {
        let digits = self.config.estimate_precision;
        state.cell_views(player).mapv(|view| match view {
            CellView::Known(color) => f64::from(color.value()),
            CellView::Estimated(evidence) => round_to(evidence.estimate(), digits),
        })
    }

    fn symmetries(&self, board: &Array2<f64>, policy: &[f64]) -> Result<SymmetricForms> {
        symmetric_forms(&self.codec, board, policy)
    }

    fn string_representation(&self, board: &Array2<f64>) -> Result<Vec<u8>> {
        Ok(bincode::serialize(board)?)
    }
}
