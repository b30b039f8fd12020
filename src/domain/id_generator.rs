//! Identifier generation contract.

/// Errors raised while generating identifiers.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The randomness source failed. Generation never falls back to a
    /// predictable sequence.
    #[error("randomness source failed: {0}")]
    Randomness(String),

    /// Every attempt produced an identifier that was already taken.
    #[error("no unused identifier after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Produces short, URL-safe identifiers.
///
/// # Implementations
///
/// - [`crate::infrastructure::keygen::Base62KeyGenerator`] - scrambled counter with a
///   pre-generated buffer
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Returns one identifier, taking it from the buffer when one is ready.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Randomness`] if the randomness source fails.
    fn generate_one(&self) -> Result<String, GenerationError>;

    /// Synthesizes `count` identifiers in a single critical section.
    ///
    /// A `count` of zero yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Randomness`] if the randomness source fails.
    fn generate_many(&self, count: usize) -> Result<Vec<String>, GenerationError>;

    /// Tops up the buffer when it runs low. No-op otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Randomness`] if the randomness source fails.
    fn refill_buffer(&self) -> Result<(), GenerationError>;

    /// Number of identifiers currently buffered.
    fn buffered(&self) -> usize;
}
