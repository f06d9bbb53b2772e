//! The mutable state of one game.
//!
//! ## Layout
//!
//! - `pieces`: ground truth, fixed at construction.
//! - `masks`: one boolean grid per player. At construction the two masks
//!   partition the board: player B's mask has `⌈n²/2⌉` cells set and
//!   player A's mask is its complement. A set bit marks a cell the player
//!   may still query and that the opponent may still discover; the
//!   player's canonical view shows an estimate there. A cleared bit shows
//!   the true color.
//! - `evidence`: per player, per cell tallies of the reports that player
//!   received from its own query moves.
//! - `guesses`: each player's final declaration, if any.
//! - `pattern`: whether `pieces` contains the pattern, computed once.
//!
//! A discover move only ever clears the opponent's mask. The mover's own
//! mask is untouched, so after the first move the masks are no longer
//! guaranteed to partition the board.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::cell::{Color, Coord, ToNdIndex};
use super::evidence::Evidence;
use super::pattern::exist_pattern;
use crate::core::{GameConfig, GameError, GameRng, Player, PlayerMap, Result};

/// A player's declaration about the pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guess {
    /// No declaration yet (`0`).
    #[default]
    Undecided,
    /// "The pattern is present" (`1`).
    PatternPresent,
    /// "The pattern is absent" (`-1`).
    PatternAbsent,
}

impl Guess {
    /// External signed value: `0`, `1` or `-1`.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Guess::Undecided => 0,
            Guess::PatternPresent => 1,
            Guess::PatternAbsent => -1,
        }
    }

    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Guess::Undecided)
    }
}

/// What one player's canonical view holds for a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellView {
    /// Mask bit cleared: the true color is shown.
    Known(Color),
    /// Mask bit set: only the player's accumulated reports are shown.
    Estimated(Evidence),
}

/// Complete state of one game.
///
/// Serializable together with its RNG position, so a checkpoint taken
/// mid-game replays the same reports after [`BoardState::from_bytes`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardState {
    size: usize,
    pieces: Array2<Color>,
    masks: PlayerMap<Array2<bool>>,
    evidence: PlayerMap<Array2<Evidence>>,
    guesses: PlayerMap<Guess>,
    pattern: bool,
    rng: GameRng,
}

impl BoardState {
    /// Create a board with random pieces and a random mask partition.
    ///
    /// The masks are drawn before the pieces, both from `rng`.
    pub fn random(config: &GameConfig, mut rng: GameRng) -> Result<Self> {
        config.validate()?;
        let n = config.size;
        let masks = random_partition(n, &mut rng)?;
        let pieces = scatter(n, config.black_count(), &mut rng)?
            .mapv(|black| if black { Color::Black } else { Color::White });
        Ok(Self::assemble(pieces, masks, rng))
    }

    /// Create a board with fixed pieces (`0` white, `1` black) and a random
    /// mask partition.
    pub fn from_pieces(pieces: &Array2<u8>, mut rng: GameRng) -> Result<Self> {
        let (rows, cols) = pieces.dim();
        if rows != cols {
            return Err(GameError::InvalidBoardShape { rows, cols });
        }
        if rows < 2 {
            return Err(GameError::BoardTooSmall(rows));
        }
        let mut colors = Array2::default((rows, cols));
        for (slot, &value) in colors.iter_mut().zip(pieces.iter()) {
            *slot = Color::from_value(value)?;
        }
        let masks = random_partition(rows, &mut rng)?;
        Ok(Self::assemble(colors, masks, rng))
    }

    fn assemble(pieces: Array2<Color>, mask_b: Array2<bool>, rng: GameRng) -> Self {
        let size = pieces.nrows();
        let mask_a = mask_b.mapv(|bit| !bit);
        let pattern = exist_pattern(&pieces);
        log::debug!(
            "new {size}x{size} board: {} black, pattern {}, seed {}",
            pieces.iter().filter(|c| c.is_black()).count(),
            if pattern { "present" } else { "absent" },
            rng.seed()
        );
        Self {
            size,
            pieces,
            masks: PlayerMap::new(|p| match p {
                Player::A => mask_a.clone(),
                Player::B => mask_b.clone(),
            }),
            evidence: PlayerMap::new(|_| Array2::default((size, size))),
            guesses: PlayerMap::with_default(),
            pattern,
            rng,
        }
    }

    /// Board dimension `n`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Ground truth.
    #[must_use]
    pub fn pieces(&self) -> &Array2<Color> {
        &self.pieces
    }

    /// Ground truth as `0`/`1` values.
    #[must_use]
    pub fn piece_values(&self) -> Array2<u8> {
        self.pieces.mapv(Color::value)
    }

    pub fn color_at(&self, coord: Coord) -> Result<Color> {
        self.check_coord(coord)?;
        Ok(self.pieces[coord.to_nd_index()])
    }

    /// A player's mask.
    #[must_use]
    pub fn mask(&self, player: Player) -> &Array2<bool> {
        &self.masks[player]
    }

    /// A player's reports table.
    #[must_use]
    pub fn evidence(&self, player: Player) -> &Array2<Evidence> {
        &self.evidence[player]
    }

    pub fn evidence_at(&self, player: Player, coord: Coord) -> Result<Evidence> {
        self.check_coord(coord)?;
        Ok(self.evidence[player][coord.to_nd_index()])
    }

    #[must_use]
    pub fn guess(&self, player: Player) -> Guess {
        self.guesses[player]
    }

    /// Whether the pieces contain the pattern.
    #[must_use]
    pub fn has_pattern(&self) -> bool {
        self.pattern
    }

    /// The pattern flag as `0`/`1`.
    #[must_use]
    pub fn pattern_flag(&self) -> i8 {
        i8::from(self.pattern)
    }

    /// Cells set in `player`'s mask, in row-major order.
    pub fn masked_cells(&self, player: Player) -> impl Iterator<Item = Coord> + '_ {
        self.masks[player]
            .indexed_iter()
            .filter(|&(_, &bit)| bit)
            .map(|(coord, _)| coord)
    }

    /// Clear `player`'s opponent's mask at `coord`.
    pub fn discover(&mut self, player: Player, coord: Coord) -> Result<()> {
        self.check_coord(coord)?;
        self.masks[player.opponent()][coord.to_nd_index()] = false;
        Ok(())
    }

    /// Ask for a noisy report on `coord` and add it to `player`'s evidence.
    ///
    /// The report is the true color with probability `truthful_probability`
    /// and the opposite color otherwise. Returns the reported color.
    pub fn query(&mut self, player: Player, coord: Coord, truthful_probability: f64) -> Result<Color> {
        let truth = self.color_at(coord)?;
        let reported = if self.rng.uniform() < truthful_probability {
            truth
        } else {
            truth.flipped()
        };
        self.record_report(player, coord, reported)?;
        Ok(reported)
    }

    /// Add a report of `color` at `coord` to `player`'s evidence.
    pub fn record_report(&mut self, player: Player, coord: Coord, color: Color) -> Result<()> {
        self.check_coord(coord)?;
        self.evidence[player][coord.to_nd_index()].record(color);
        Ok(())
    }

    /// Set `player`'s guess. A later guess replaces an earlier one.
    pub fn set_guess(&mut self, player: Player, guess: Guess) {
        self.guesses[player] = guess;
    }

    /// What `player` sees at every cell.
    #[must_use]
    pub fn cell_views(&self, player: Player) -> Array2<CellView> {
        let mut views = Array2::from_elem((self.size, self.size), CellView::Known(Color::White));
        for ((coord, view), &masked) in views.indexed_iter_mut().zip(self.masks[player].iter()) {
            *view = if masked {
                CellView::Estimated(self.evidence[player][coord])
            } else {
                CellView::Known(self.pieces[coord])
            };
        }
        views
    }

    /// Black cells shown to `player` minus black cells shown to the
    /// opponent, where "shown" means the mask bit is cleared.
    #[must_use]
    pub fn black_count_difference(&self, player: Player) -> i64 {
        self.revealed_blacks(player) - self.revealed_blacks(player.opponent())
    }

    fn revealed_blacks(&self, player: Player) -> i64 {
        self.pieces
            .iter()
            .zip(self.masks[player].iter())
            .filter(|&(color, &masked)| !masked && color.is_black())
            .count() as i64
    }

    /// Seed of the state's RNG. Logging it is enough to replay the game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Checkpoint the whole state, RNG position included.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a checkpoint written by [`BoardState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let state: Self = bincode::deserialize(bytes)?;
        state.check_shapes()?;
        Ok(state)
    }

    fn check_shapes(&self) -> Result<()> {
        let dim = (self.size, self.size);
        let consistent = self.pieces.dim() == dim
            && Player::ALL
                .iter()
                .all(|&p| self.masks[p].dim() == dim && self.evidence[p].dim() == dim);
        if consistent {
            Ok(())
        } else {
            let (rows, cols) = self.pieces.dim();
            Err(GameError::InvalidBoardShape { rows, cols })
        }
    }

    /// Clone the state with a forked RNG, so the copy draws an independent
    /// but reproducible sequence of reports.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        let rng = self.rng.fork();
        Self {
            rng,
            ..self.clone()
        }
    }

    fn check_coord(&self, coord: Coord) -> Result<()> {
        if coord.0 < self.size && coord.1 < self.size {
            Ok(())
        } else {
            Err(GameError::InvalidCoord(coord.0, coord.1))
        }
    }
}

/// Player B's mask: exactly `⌈n²/2⌉` cells set, uniformly at random.
fn random_partition(n: usize, rng: &mut GameRng) -> Result<Array2<bool>> {
    let cells = n * n;
    scatter(n, cells.div_ceil(2), rng)
}

/// An `n×n` grid with exactly `count` cells set, uniformly at random.
fn scatter(n: usize, count: usize, rng: &mut GameRng) -> Result<Array2<bool>> {
    let mut cells = vec![false; n * n];
    cells[..count].fill(true);
    rng.shuffle(&mut cells);
    Array2::from_shape_vec((n, n), cells).map_err(|_| GameError::InvalidBoardShape { rows: n, cols: n })
}
