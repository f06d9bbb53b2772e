//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The game always has exactly two players. Externally they are addressed
//! by the values `1` (player A, who moves first) and `-1` (player B).
//!
//! ## PlayerMap
//!
//! Per-player data storage with one slot per player, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::{GameError, Result};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player, external value `1`.
    A,
    /// Second player, external value `-1`.
    B,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// External signed value: `1` for A, `-1` for B.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Player::A => 1,
            Player::B => -1,
        }
    }

    /// Parse an external signed value.
    pub fn from_value(value: i8) -> Result<Self> {
        match value {
            1 => Ok(Player::A),
            -1 => Ok(Player::B),
            other => Err(GameError::InvalidPlayer(other)),
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Slot index (0 for A, 1 for B).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

impl TryFrom<i8> for Player {
    type Error = GameError;

    fn try_from(value: i8) -> Result<Self> {
        Self::from_value(value)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// Per-player data storage.
///
/// ```
/// use find_pattern::core::{Player, PlayerMap};
///
/// let mut guesses: PlayerMap<i8> = PlayerMap::with_value(0);
/// guesses[Player::B] = -1;
///
/// assert_eq!(guesses[Player::A], 0);
/// assert_eq!(guesses[Player::B], -1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Player) -> T) -> Self {
        Self {
            data: [factory(Player::A), factory(Player::B)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_values() {
        assert_eq!(Player::A.value(), 1);
        assert_eq!(Player::B.value(), -1);
        assert_eq!(Player::from_value(1).unwrap(), Player::A);
        assert_eq!(Player::try_from(-1).unwrap(), Player::B);
        assert_eq!(Player::from_value(0), Err(GameError::InvalidPlayer(0)));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::A.opponent(), Player::B);
        assert_eq!(Player::B.opponent(), Player::A);
        assert_eq!(Player::A.opponent().opponent(), Player::A);
    }

    #[test]
    fn test_player_map_factory() {
        let map = PlayerMap::new(|p| p.value() * 10);

        assert_eq!(map[Player::A], 10);
        assert_eq!(map[Player::B], -10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<u32> = PlayerMap::with_default();
        map[Player::A] += 3;
        *map.get_mut(Player::B) = 7;

        let collected: Vec<_> = map.iter().map(|(p, v)| (p, *v)).collect();
        assert_eq!(collected, vec![(Player::A, 3), (Player::B, 7)]);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::A.to_string(), "Player A");
        assert_eq!(Player::B.to_string(), "Player B");
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::new(|p| p.index());
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<usize> = serde_json::from_str(&json).unwrap();

        assert_eq!(map, deserialized);
    }
}
