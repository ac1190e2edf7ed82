//! Production random source.

use std::cell::RefCell;

use battle_core::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest value `next()` returns, inclusive.
const MAX_DRAW: i32 = 65_534;

/// [`RandomSource`] backed by `rand`'s standard generator.
///
/// Seed it for reproducible battles; the default draws its seed from the
/// operating system.
#[derive(Debug)]
pub struct ThreadRandom {
    rng: RefCell<StdRng>,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next(&self) -> i32 {
        self.rng.borrow_mut().gen_range(1..=MAX_DRAW)
    }

    fn next_range(&self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.borrow_mut().gen_range(min..max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_range() {
        let random = ThreadRandom::seeded(7);
        for _ in 0..10_000 {
            let value = random.next();
            assert!((1..=MAX_DRAW).contains(&value));
            let ranged = random.next_range(1, 11);
            assert!((1..11).contains(&ranged));
        }
        assert_eq!(random.next_range(5, 5), 5);
    }

    #[test]
    fn same_seed_same_stream() {
        let (a, b) = (ThreadRandom::seeded(99), ThreadRandom::seeded(99));
        let left: Vec<i32> = (0..32).map(|_| a.next()).collect();
        let right: Vec<i32> = (0..32).map(|_| b.next()).collect();
        assert_eq!(left, right);
    }
}
