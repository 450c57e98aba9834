//! Combinators that pick among generators or values.

use super::{non_negative, BoxedGenerator, Generator};
use crate::generator::GeneratorError;
use std::rc::Rc;
use synth_core::{ProducedValue, SharedStream};

/// Invokes one child picked by `int_n(len)` on every call.
pub struct RandomChoice {
    stream: SharedStream,
    generators: Vec<BoxedGenerator>,
}

impl RandomChoice {
    /// Create a random choice over `generators`.
    ///
    /// # Panics
    ///
    /// Panics if `generators` is empty.
    pub fn new(stream: SharedStream, generators: Vec<BoxedGenerator>) -> Self {
        Self::try_new(stream, generators).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(
        stream: SharedStream,
        generators: Vec<BoxedGenerator>,
    ) -> Result<Self, GeneratorError> {
        if generators.is_empty() {
            return Err(GeneratorError::EmptyGenerators {
                combinator: "random_choice",
            });
        }
        Ok(Self { stream, generators })
    }
}

impl Generator for RandomChoice {
    fn produce(&mut self) -> ProducedValue {
        let draw = self.stream.int_n(self.generators.len() as i64);
        let index = non_negative(draw, "random_choice");
        self.generators[index].produce()
    }
}

/// Invokes its children round-robin, starting with the first.
pub struct Cycle {
    generators: Vec<BoxedGenerator>,
    index: usize,
}

impl Cycle {
    /// Create a cycle over `generators`.
    ///
    /// # Panics
    ///
    /// Panics if `generators` is empty.
    pub fn new(generators: Vec<BoxedGenerator>) -> Self {
        Self::try_new(generators).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(generators: Vec<BoxedGenerator>) -> Result<Self, GeneratorError> {
        if generators.is_empty() {
            return Err(GeneratorError::EmptyGenerators { combinator: "cycle" });
        }
        Ok(Self {
            generators,
            index: 0,
        })
    }
}

impl Generator for Cycle {
    fn produce(&mut self) -> ProducedValue {
        let result = self.generators[self.index].produce();
        self.index = (self.index + 1) % self.generators.len();
        result
    }
}

/// Picks a random element of a fixed collection.
///
/// The collection is shared, not copied, between clones of the generator.
#[derive(Debug, Clone)]
pub struct ElementOf {
    stream: SharedStream,
    values: Rc<[ProducedValue]>,
}

impl ElementOf {
    /// Create a generator over `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(stream: SharedStream, values: impl Into<Rc<[ProducedValue]>>) -> Self {
        Self::try_new(stream, values).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(
        stream: SharedStream,
        values: impl Into<Rc<[ProducedValue]>>,
    ) -> Result<Self, GeneratorError> {
        let values = values.into();
        if values.is_empty() {
            return Err(GeneratorError::EmptyCollection);
        }
        Ok(Self { stream, values })
    }

    /// The collection elements are drawn from.
    pub fn values(&self) -> &[ProducedValue] {
        &self.values
    }
}

impl Generator for ElementOf {
    fn produce(&mut self) -> ProducedValue {
        let draw = self.stream.int_n(self.values.len() as i64);
        self.values[non_negative(draw, "element_of")].clone()
    }
}
