//! Base62 key generation service.
//!
//! Identifiers come from a monotonically advancing counter that is scrambled
//! before encoding, so consecutive identifiers do not look consecutive:
//!
//! 1. XOR the counter with the low 16 bits of the current nanosecond clock
//! 2. Add a random value below 1000
//! 3. Rotate the 64-bit result left by 13 bits
//! 4. Take the unsigned absolute value and reduce it into the 7-symbol space
//! 5. Base62-encode and left-pad with `'0'` to 7 characters
//!
//! The counter is seeded from a random offset plus the current Unix time so
//! restarts do not replay the same sequence.

use std::collections::VecDeque;

use chrono::Utc;
use parking_lot::Mutex;
use tracing::debug;

use super::random::{OsRandom, RandomSource};
use crate::domain::id_generator::{GenerationError, IdGenerator};
use crate::utils::base62::{encode, pad_to_length};

/// Length of every generated identifier.
pub const ID_LENGTH: usize = 7;

/// Buffer size below which [`IdGenerator::refill_buffer`] tops it up.
pub const LOW_WATER_MARK: usize = 100;

/// Number of identifiers appended per refill.
pub const REFILL_BATCH: usize = 1000;

/// Number of distinct 7-symbol Base62 strings (62^7).
pub const ID_SPACE: u64 = 3_521_614_606_208;

const SEED_BOUND: u32 = 1_000_000;
const JITTER_BOUND: u32 = 1000;
const CLOCK_MASK: i64 = 0xFFFF;
const ROTATION: u32 = 13;

#[derive(Debug)]
struct State {
    counter: i64,
    buffer: VecDeque<String>,
}

/// Collision-resistant generator of 7-character Base62 identifiers.
///
/// Counter and buffer live behind a single mutex; every critical section
/// either completes or leaves both untouched.
pub struct Base62KeyGenerator<R: RandomSource = OsRandom> {
    state: Mutex<State>,
    random: R,
}

impl Base62KeyGenerator<OsRandom> {
    /// Creates a generator backed by the operating system CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Randomness`] if the seed cannot be drawn.
    pub fn new() -> Result<Self, GenerationError> {
        Self::with_source(OsRandom)
    }
}

impl<R: RandomSource> Base62KeyGenerator<R> {
    /// Creates a generator drawing randomness from `random`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Randomness`] if the seed cannot be drawn.
    pub fn with_source(random: R) -> Result<Self, GenerationError> {
        let offset = i64::from(random.below(SEED_BOUND)?);
        let counter = offset + Utc::now().timestamp();

        debug!("Key generator seeded");

        Ok(Self {
            state: Mutex::new(State {
                counter,
                buffer: VecDeque::new(),
            }),
            random,
        })
    }

    /// Current counter value.
    pub fn counter(&self) -> i64 {
        self.state.lock().counter
    }

    /// Synthesizes `count` identifiers, committing the counter only on success.
    fn synthesize(&self, state: &mut State, count: usize) -> Result<Vec<String>, GenerationError> {
        let mut counter = state.counter;
        let mut ids = Vec::with_capacity(count);

        for _ in 0..count {
            let jitter = i64::from(self.random.below(JITTER_BOUND)?);
            let value = scramble(counter, clock_seed(), jitter);
            ids.push(format_id(value));
            counter = counter.wrapping_add(1);
        }

        state.counter = counter;
        Ok(ids)
    }
}

impl<R: RandomSource> IdGenerator for Base62KeyGenerator<R> {
    fn generate_one(&self) -> Result<String, GenerationError> {
        let mut state = self.state.lock();

        if let Some(id) = state.buffer.pop_front() {
            return Ok(id);
        }

        let mut ids = self.synthesize(&mut state, 1)?;
        ids.pop().ok_or(GenerationError::Exhausted { attempts: 1 })
    }

    fn generate_many(&self, count: usize) -> Result<Vec<String>, GenerationError> {
        let mut state = self.state.lock();
        self.synthesize(&mut state, count)
    }

    fn refill_buffer(&self) -> Result<(), GenerationError> {
        let mut state = self.state.lock();

        if state.buffer.len() >= LOW_WATER_MARK {
            return Ok(());
        }

        let ids = self.synthesize(&mut state, REFILL_BATCH)?;
        state.buffer.extend(ids);
        debug!(buffered = state.buffer.len(), "Key buffer refilled");

        Ok(())
    }

    fn buffered(&self) -> usize {
        self.state.lock().buffer.len()
    }
}

/// Low 16 bits of the nanosecond clock.
fn clock_seed() -> i64 {
    i64::from(Utc::now().timestamp_subsec_nanos()) & CLOCK_MASK
}

/// Scrambles a counter value into a non-sequential, non-negative integer.
fn scramble(counter: i64, clock_seed: i64, jitter: i64) -> u64 {
    let mixed = (counter ^ clock_seed).wrapping_add(jitter);
    let rotated = (mixed as u64).rotate_left(ROTATION) as i64;
    rotated.unsigned_abs()
}

/// Encodes a scrambled value as exactly [`ID_LENGTH`] Base62 characters.
fn format_id(value: u64) -> String {
    pad_to_length(&encode(value % ID_SPACE), ID_LENGTH)
}
