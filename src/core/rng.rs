//! Randomness for market seeding and replacement draws.
//!
//! The engine never touches a concrete RNG. It asks a `Randomizer` for
//! indices and builds a Fisher–Yates shuffle on top, so tests can script
//! every draw exactly.
//!
//! ## Usage
//!
//! ```
//! use raccoon_market::core::{GameRng, Randomizer};
//!
//! let mut rng = GameRng::new(42);
//! let mut cards = vec!["Acorn", "Bottle Cap", "Pizza Crust"];
//! rng.shuffle(&mut cards);
//!
//! assert_eq!(cards.len(), 3);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform indices.
///
/// Implementors only provide `next_index`; `shuffle` and `choose` are
/// derived from it.
pub trait Randomizer {
    /// Return an index uniformly drawn from `0..bound`.
    ///
    /// Callers never pass `bound == 0`.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Fisher–Yates shuffle, walking from the back of the slice.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }

    /// Shuffle a copy of `items` and take the first element.
    fn choose<T: Clone>(&mut self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        let mut pool = items.to_vec();
        self.shuffle(&mut pool);
        pool.into_iter().next()
    }
}

impl<R: Randomizer + ?Sized> Randomizer for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Seeded production randomizer.
///
/// Uses ChaCha8 so the same seed replays the same market.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Randomizer for GameRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// Scripted randomizer that replays a fixed list of raw draws.
///
/// Each draw is reduced modulo the requested bound. The script wraps
/// around when exhausted and an empty script always yields 0. Use
/// [`SequenceRandomizer::identity`] when order must be preserved.
#[derive(Clone, Debug, Default)]
pub struct SequenceRandomizer {
    draws: Vec<usize>,
    cursor: usize,
    identity: bool,
}

impl SequenceRandomizer {
    /// Replay the given draws.
    #[must_use]
    pub fn new(draws: Vec<usize>) -> Self {
        Self {
            draws,
            cursor: 0,
            identity: false,
        }
    }

    /// A randomizer whose `shuffle` leaves every slice untouched.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            draws: Vec::new(),
            cursor: 0,
            identity: true,
        }
    }

    /// Number of draws consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl Randomizer for SequenceRandomizer {
    fn next_index(&mut self, bound: usize) -> usize {
        self.cursor += 1;
        if self.identity {
            // j == i keeps every element in place
            return bound - 1;
        }
        if self.draws.is_empty() {
            return 0;
        }
        let raw = self.draws[(self.cursor - 1) % self.draws.len()];
        raw % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_index(1000), rng2.next_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = GameRng::new(7);
        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![9];
        rng.shuffle(&mut single);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items).unwrap();
        assert!(items.contains(&chosen));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_identity_sequence_keeps_order() {
        let mut rng = SequenceRandomizer::identity();
        let mut data = vec!['a', 'b', 'c', 'd'];
        rng.shuffle(&mut data);

        assert_eq!(data, vec!['a', 'b', 'c', 'd']);
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn test_scripted_sequence() {
        // i = 2: swap(2, 0); i = 1: swap(1, 1)
        let mut rng = SequenceRandomizer::new(vec![0, 1]);
        let mut data = vec!['a', 'b', 'c'];
        rng.shuffle(&mut data);

        assert_eq!(data, vec!['c', 'b', 'a']);
    }

    #[test]
    fn test_scripted_draws_wrap_modulo_bound() {
        let mut rng = SequenceRandomizer::new(vec![7]);
        assert_eq!(rng.next_index(3), 1);
        assert_eq!(rng.next_index(5), 2);
    }

    #[test]
    fn test_mut_ref_is_randomizer() {
        fn draw<R: Randomizer>(mut rng: R) -> usize {
            rng.next_index(10)
        }

        let mut rng = SequenceRandomizer::new(vec![4, 6]);
        assert_eq!(draw(&mut rng), 4);
        assert_eq!(draw(&mut rng), 6);
        assert_eq!(rng.consumed(), 2);
    }
}
