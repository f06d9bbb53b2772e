//! Deterministic random number generation.
//!
//! Every random draw a game makes goes through one `GameRng` owned by its
//! `BoardState`: the mask partition and piece placement at construction,
//! and the noisy color report of each query move. Seeding the RNG makes a
//! whole game reproducible.
//!
//! ```
//! use find_pattern::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//! assert_eq!(rng.uniform(), replay.uniform());
//!
//! // Forks produce an independent but deterministic branch.
//! let mut branch = rng.fork();
//! let mut replay_branch = replay.fork();
//! assert_eq!(branch.uniform(), replay_branch.uniform());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backed by ChaCha8.
///
/// Serializes as its [`GameRngState`], so a checkpointed game resumes the
/// exact report sequence.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "GameRngState", from = "GameRngState")]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is still recorded, so `seed()` can be logged to
    /// replay the game afterwards.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Draw a uniform value in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl From<GameRng> for GameRngState {
    fn from(rng: GameRng) -> Self {
        rng.state()
    }
}

impl From<GameRngState> for GameRng {
    fn from(state: GameRngState) -> Self {
        GameRng::from_state(&state)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture and restore cost the same
/// no matter how many values were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_reports() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let truthful1: Vec<_> = (0..100).map(|_| rng1.uniform() < 0.7).collect();
        let truthful2: Vec<_> = (0..100).map(|_| rng2.uniform() < 0.7).collect();
        assert_eq!(truthful1, truthful2);
    }

    #[test]
    fn test_uniform_range() {
        let mut rng = GameRng::new(7);
        assert!((0..1000).map(|_| rng.uniform()).all(|x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_forks_diverge_reproducibly() {
        let mut rng = GameRng::new(42);
        let mut twin = GameRng::new(42);
        let mut branch = rng.fork();
        let mut twin_branch = twin.fork();

        let draws: Vec<_> = (0..10).map(|_| branch.uniform()).collect();
        let parent: Vec<_> = (0..10).map(|_| rng.uniform()).collect();
        let replay: Vec<_> = (0..10).map(|_| twin_branch.uniform()).collect();

        assert_ne!(draws, parent);
        assert_eq!(draws, replay);
        assert_ne!(rng.fork().seed(), branch.seed());
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut live = rng.clone();

        assert_eq!(live.uniform(), replay.uniform());
    }

    #[test]
    fn test_shuffle_keeps_cell_count() {
        let mut rng = GameRng::new(42);
        let mut cells = vec![false; 25];
        cells[..13].fill(true);

        rng.shuffle(&mut cells);

        assert_eq!(cells.iter().filter(|&&c| c).count(), 13);
        assert!(cells[..13].iter().any(|&c| !c));
    }

    #[test]
    fn test_restore_mid_game() {
        let mut rng = GameRng::new(42);
        let _ = rng.fork();
        (0..57).for_each(|_| {
            rng.uniform();
        });

        let state = rng.state();
        let mut restored = GameRng::from_state(&state);

        assert_eq!(restored.state(), state);
        for _ in 0..10 {
            assert_eq!(rng.uniform(), restored.uniform());
        }
        assert_eq!(rng.fork().seed(), restored.fork().seed());
    }

    #[test]
    fn test_rng_serializes_as_state() {
        let mut rng = GameRng::new(11);
        rng.uniform();

        let bytes = bincode::serialize(&rng).unwrap();
        let mut restored: GameRng = bincode::deserialize(&bytes).unwrap();

        assert_eq!(restored.state(), rng.state());
        assert_eq!(restored.uniform(), rng.uniform());
    }

    #[test]
    fn test_state_json_round_trip() {
        let state = GameRng::new(3).state();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<GameRngState>(&json).unwrap(), state);
    }
}
