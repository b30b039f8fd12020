//! Identifier generation.
//!
//! - [`Base62KeyGenerator`] - Scrambled-counter generator with a pre-generated buffer
//! - [`RandomSource`] / [`OsRandom`] - Injectable randomness

mod base62_generator;
mod random;

pub use base62_generator::{Base62KeyGenerator, ID_LENGTH, LOW_WATER_MARK, REFILL_BATCH};
pub use random::{OsRandom, RandomSource};
