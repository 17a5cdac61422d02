//! Seat identification, turn direction, and per-seat storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Seats are 0-based and fixed once a game starts.
//!
//! ## Direction
//!
//! The sign of turn progression; flipped by Reverse cards.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier supporting up to 255 players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The neighbouring seat in `direction`, wrapping around the table.
    ///
    /// ```
    /// use duo_cards::core::{Direction, PlayerId};
    ///
    /// assert_eq!(PlayerId::new(3).step(Direction::Forward, 4), PlayerId::new(0));
    /// assert_eq!(PlayerId::new(0).step(Direction::Backward, 4), PlayerId::new(3));
    /// ```
    #[must_use]
    pub fn step(self, direction: Direction, player_count: usize) -> PlayerId {
        assert!(player_count > 0, "Must have at least 1 player");
        let count = player_count as i64;
        let next = (self.0 as i64 + direction.sign() + count).rem_euclid(count);
        PlayerId(next as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Direction of play around the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Increasing seat index (+1).
    #[default]
    Forward,
    /// Decreasing seat index (-1).
    Backward,
}

impl Direction {
    /// +1 or -1.
    #[must_use]
    pub const fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use duo_cards::core::{PlayerId, PlayerMap};
///
/// let mut hands: PlayerMap<u32> = PlayerMap::new(4, |_| 7);
/// hands[PlayerId::new(1)] += 2;
/// assert_eq!(hands[PlayerId::new(1)], 9);
/// ```
#[derive(Clone, Debug)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Create a PlayerMap from values already in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Mutable access to all values, in seat order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Seat 1");
    }

    #[test]
    fn test_forward_cycles_all_seats() {
        for player_count in 2..=8 {
            for start in 0..player_count {
                let mut seat = PlayerId::new(start as u8);
                let mut seen = Vec::new();
                for _ in 0..player_count {
                    seen.push(seat);
                    seat = seat.step(Direction::Forward, player_count);
                }
                // Back where we started after exactly P steps
                assert_eq!(seat, PlayerId::new(start as u8));
                seen.sort();
                seen.dedup();
                assert_eq!(seen.len(), player_count);
            }
        }
    }

    #[test]
    fn test_backward_wraps() {
        let seat = PlayerId::new(0);
        assert_eq!(seat.step(Direction::Backward, 3), PlayerId::new(2));
        assert_eq!(PlayerId::new(2).step(Direction::Backward, 3), PlayerId::new(1));
    }

    #[test]
    fn test_direction_reversal() {
        assert_eq!(Direction::Forward.sign(), 1);
        assert_eq!(Direction::Forward.reversed(), Direction::Backward);
        assert_eq!(Direction::Backward.reversed().sign(), 1);
        assert_eq!(Direction::default(), Direction::Forward);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(4, |p| p.index() * 10);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_from_vec_and_iter() {
        let mut map = PlayerMap::from_vec(vec!["a", "b", "c"]);
        map[PlayerId::new(1)] = "z";

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[1], (PlayerId::new(1), &"z"));
        assert_eq!(map.values().count(), 3);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<u32> = PlayerMap::from_vec(Vec::new());
    }
}
