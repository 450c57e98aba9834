//! Repeat-then-replay combinator.

use super::Generator;
use crate::generator::GeneratorError;
use synth_core::ProducedValue;

/// Records the first `count` values of a generator, then replays them.
///
/// Calls `0..count` invoke the child and return its fresh values. Call
/// `count + k` returns the value of call `k % count`, forever; the child is
/// never invoked again.
pub struct RepeatThenReplay<G> {
    generator: G,
    count: usize,
    saved: Vec<ProducedValue>,
    position: usize,
}

impl<G: Generator> RepeatThenReplay<G> {
    /// Create a repeat over `generator`.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn new(generator: G, count: usize) -> Self {
        Self::try_new(generator, count).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(generator: G, count: usize) -> Result<Self, GeneratorError> {
        if count == 0 {
            return Err(GeneratorError::ZeroRepeatCount);
        }
        Ok(Self {
            generator,
            count,
            saved: Vec::new(),
            position: 0,
        })
    }

    /// Whether all `count` values have been recorded.
    pub fn is_replaying(&self) -> bool {
        self.saved.len() == self.count
    }
}

impl<G: Generator> Generator for RepeatThenReplay<G> {
    fn produce(&mut self) -> ProducedValue {
        if !self.is_replaying() {
            let value = self.generator.produce();
            self.saved.push(value.clone());
            return value;
        }

        let value = self.saved[self.position].clone();
        self.position = (self.position + 1) % self.count;
        value
    }
}
