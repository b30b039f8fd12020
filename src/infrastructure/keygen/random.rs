//! Randomness sources for key generation.

use crate::domain::id_generator::GenerationError;

/// Source of random bytes for the key generator.
///
/// Failures must surface as errors so generation never silently becomes
/// predictable.
pub trait RandomSource: Send + Sync {
    /// Fills `buf` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Randomness`] if the source is unavailable.
    fn fill(&self, buf: &mut [u8]) -> Result<(), GenerationError>;

    /// Draws a value in `0..bound`. `bound` must be non-zero.
    ///
    /// Uses a plain modulo; the bias is negligible for the small bounds used here.
    fn below(&self, bound: u32) -> Result<u32, GenerationError> {
        let mut bytes = [0u8; 4];
        self.fill(&mut bytes)?;
        Ok(u32::from_le_bytes(bytes) % bound)
    }
}

/// Operating system CSPRNG via `getrandom`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<(), GenerationError> {
        getrandom::fill(buf).map_err(|e| GenerationError::Randomness(e.to_string()))
    }
}
