// File: crates/chart-core/src/random.rs
// Summary: Injectable randomness for bar colors; thread RNG by default, seeded for reproducible output.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::color::Color;

/// Source of color channels for bars without a fixed color.
pub trait RandomSource {
    /// Uniform channel value in `0..=255`.
    fn next_channel(&mut self) -> u8;
}

/// Independent random red, green and blue channels, fully opaque.
pub fn random_rgb<R: RandomSource + ?Sized>(src: &mut R) -> Color {
    let r = src.next_channel();
    let g = src.next_channel();
    let b = src.next_channel();
    Color::rgb(r, g, b)
}

/// Unseeded; colors differ on every run.
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    pub fn new() -> Self { Self(rand::thread_rng()) }
}

impl Default for ThreadRandom {
    fn default() -> Self { Self::new() }
}

impl RandomSource for ThreadRandom {
    fn next_channel(&mut self) -> u8 { self.0.gen() }
}

/// Same seed, same colors.
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self { Self(StdRng::seed_from_u64(seed)) }
}

impl RandomSource for SeededRandom {
    fn next_channel(&mut self) -> u8 { self.0.gen() }
}
