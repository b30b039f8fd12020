//! Repository implementations.
//!
//! # Repositories
//!
//! - [`MemoryShortUrlRepository`] - In-memory short URL storage

pub mod memory_short_url_repository;

pub use memory_short_url_repository::MemoryShortUrlRepository;
