//! Deterministic integer stream.
//!
//! The stream is a Lehmer-style linear congruential generator chosen for
//! reproducibility across language runtimes rather than for statistical
//! quality. Every call to [`Stream::next`] returns the current state and only
//! then advances it, so the first value drawn is always the seed itself.
//!
//! ```rust
//! use synth_core::Stream;
//!
//! let mut stream = Stream::new(373);
//! assert_eq!(stream.next(), 373);
//! assert_eq!(stream.next(), 6269011);
//! ```

use rand::{RngCore, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;

/// LCG multiplier.
pub const MULTIPLIER: i64 = 16807;

/// LCG modulus, `2^31 - 1`.
pub const MODULUS: i64 = (1 << 31) - 1;

/// Seeded linear congruential generator producing signed 64-bit integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    /// Seed the stream was created with
    seed: i64,
    /// Value returned by the next draw
    state: i64,
    /// Number of values drawn so far
    draws: u64,
}

impl Stream {
    /// Create a new stream starting at `seed`.
    pub fn new(seed: i64) -> Self {
        Self {
            seed,
            state: seed,
            draws: 0,
        }
    }

    /// Return the current value and advance the state.
    ///
    /// The multiplication wraps on overflow and the remainder truncates toward
    /// zero, so negative seeds keep producing negative values.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> i64 {
        let result = self.state;
        self.state = MULTIPLIER.wrapping_mul(result) % MODULUS;
        self.draws += 1;
        result
    }

    /// Draw a value in `(-n, n)` as `next() % n`.
    ///
    /// The result takes the sign of the raw draw, so it is only guaranteed to
    /// lie in `[0, n)` while the stream stays non-negative.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not positive.
    pub fn int_n(&mut self, n: i64) -> i64 {
        assert!(n > 0, "int_n bound must be positive, got {n}");
        self.next() % n
    }

    /// Seed this stream was created with.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Wrap this stream in a [`SharedStream`] handle.
    pub fn into_shared(self) -> SharedStream {
        SharedStream(Rc::new(RefCell::new(self)))
    }
}

impl RngCore for Stream {
    fn next_u32(&mut self) -> u32 {
        self.next() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Stream {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i64::from_le_bytes(seed))
    }

    /// Use `state` verbatim as the seed instead of scrambling it.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as i64)
    }
}

/// Cloneable single-threaded handle to one [`Stream`].
///
/// Every generator that needs randomness holds a clone of the same handle, so
/// draws from all of them interleave on one sequence. The handle is neither
/// `Send` nor `Sync`; threads that need data must seed their own stream.
#[derive(Debug, Clone)]
pub struct SharedStream(Rc<RefCell<Stream>>);

impl SharedStream {
    /// Create a handle to a fresh stream starting at `seed`.
    pub fn new(seed: i64) -> Self {
        Stream::new(seed).into_shared()
    }

    /// Draw the next raw value.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> i64 {
        self.0.borrow_mut().next()
    }

    /// Draw a bounded value, see [`Stream::int_n`].
    pub fn int_n(&self, n: i64) -> i64 {
        self.0.borrow_mut().int_n(n)
    }

    /// Seed of the underlying stream.
    pub fn seed(&self) -> i64 {
        self.0.borrow().seed()
    }

    /// Number of values drawn from the underlying stream so far.
    pub fn draws(&self) -> u64 {
        self.0.borrow().draws()
    }

    /// Whether both handles refer to the same stream.
    pub fn same_stream(&self, other: &SharedStream) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
