//! Injectable randomness.
//!
//! All randomness in the generator and the directive mapper flows through
//! [`RandomSource`]. Production code uses [`SeededRandom`]: a ChaCha8 stream
//! keyed by a `u64` seed, so any run can be replayed from its logged seed.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Stream used by the identity generator.
pub const GENERATOR_STREAM: u64 = 0;
/// Stream used by the directive mapper.
pub const MAPPER_STREAM: u64 = 1;

/// A source of uniform random draws.
pub trait RandomSource {
    /// Uniform integer in `low..=high`. Returns `low` when the range is empty.
    fn int_in(&mut self, low: u64, high: u64) -> u64;

    /// Uniform float in `low..high`. Returns `low` when the range is empty.
    fn float_in(&mut self, low: f64, high: f64) -> f64;

    /// Uniform index below `len`. Returns 0 when `len` is 0.
    fn index(&mut self, len: usize) -> usize;

    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Pick one element uniformly, or `None` for an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let index = self.index(items.len());
        items.get(index)
    }

    fn digit(&mut self) -> u8 {
        self.int_in(0, 9) as u8
    }

    /// `count` random decimal digits as text.
    fn digits(&mut self, count: usize) -> String {
        (0..count)
            .map(|_| char::from(b'0' + self.digit()))
            .collect()
    }

    fn coin(&mut self) -> bool {
        self.index(2) == 1
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn int_in(&mut self, low: u64, high: u64) -> u64 {
        (**self).int_in(low, high)
    }

    fn float_in(&mut self, low: f64, high: f64) -> f64 {
        (**self).float_in(low, high)
    }

    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest);
    }
}

/// ChaCha8-backed [`RandomSource`].
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64, stream: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream);
        Self { seed, rng }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn int_in(&mut self, low: u64, high: u64) -> u64 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn float_in(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..high)
    }

    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }
}

/// How the run seed is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPolicy {
    Fixed(u64),
    /// Current time in milliseconds since the Unix epoch.
    Time,
}

impl SeedPolicy {
    pub fn from_option(seed: Option<u64>) -> Self {
        seed.map_or(SeedPolicy::Time, SeedPolicy::Fixed)
    }

    pub fn resolve(self) -> u64 {
        match self {
            SeedPolicy::Fixed(seed) => seed,
            SeedPolicy::Time => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_millis() as u64)
                .unwrap_or_default(),
        }
    }
}
