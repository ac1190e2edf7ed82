//! Random source consumed by the engine.
//!
//! Every formula is written in terms of "the next value from the stream",
//! and several checks within one action reuse a single draw. The engine
//! therefore consumes one ordered stream through `&self`; implementations
//! keep their cursor behind interior mutability.

use core::cell::Cell;

/// Source of pseudo-random integers.
pub trait RandomSource {
    /// Next value, uniform over `1..65535`.
    fn next(&self) -> i32;

    /// Next value in `min..max` (`max` exclusive). Returns `min` when the
    /// range is empty.
    fn next_range(&self, min: i32, max: i32) -> i32;
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
    fn next(&self) -> i32 {
        (**self).next()
    }

    fn next_range(&self, min: i32, max: i32) -> i32 {
        (**self).next_range(min, max)
    }
}

/// Cycles through a fixed list of values.
///
/// `next_range(min, max)` maps the current value into the range as
/// `min + value % (max - min)`.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<i32>,
    index: Cell<usize>,
}

impl SequenceRandom {
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "SequenceRandom needs at least one value");
        Self {
            values,
            index: Cell::new(0),
        }
    }

    /// A stream that always yields `value`.
    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn position(&self) -> usize {
        self.index.get()
    }

    fn advance(&self) -> i32 {
        let index = self.index.get();
        self.index.set(index + 1);
        self.values[index % self.values.len()]
    }
}

impl RandomSource for SequenceRandom {
    fn next(&self) -> i32 {
        self.advance()
    }

    fn next_range(&self, min: i32, max: i32) -> i32 {
        let value = self.advance();
        if max <= min {
            return min;
        }
        min + value.rem_euclid(max - min)
    }
}

/// PCG-XSH-RR generator with 64-bit state. Deterministic per seed.
#[derive(Clone, Debug)]
pub struct PcgRandom {
    state: Cell<u64>,
}

impl PcgRandom {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self {
            state: Cell::new(seed),
        }
    }

    fn next_u32(&self) -> u32 {
        let state = self
            .state
            .get()
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state.set(state);

        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRandom {
    fn next(&self) -> i32 {
        1 + (self.next_u32() % 65534) as i32
    }

    fn next_range(&self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (i64::from(max) - i64::from(min)) as u64;
        min + (u64::from(self.next_u32()) % span) as i32
    }
}
