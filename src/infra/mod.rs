//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для engine::RandomSource;
//! - воспроизводимые seed'ы раздач.

pub mod rng;
pub mod rng_seed;

pub use rng::{DeterministicRng, SystemRng};
pub use rng_seed::RngSeed;
