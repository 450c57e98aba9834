//! Array and map generators.

use super::policy::{SoftFailure, SoftFailurePolicy};
use super::{non_negative, Generator};
use crate::generator::GeneratorError;
use std::collections::BTreeMap;
use synth_core::{ProducedValue, SharedStream};

/// Stream bound for lengths in `0..=max_len`.
fn length_bound(max_len: usize) -> Result<i64, GeneratorError> {
    i64::try_from(max_len)
        .ok()
        .and_then(|n| n.checked_add(1))
        .ok_or(GeneratorError::MaxLenTooLarge(max_len))
}

/// Arrays of `0..=max_len` elements.
///
/// The length is drawn first, then the element generator is invoked once
/// per element, in order.
#[derive(Debug, Clone)]
pub struct ArrayOf<G> {
    stream: SharedStream,
    element: G,
    bound: i64,
}

impl<G: Generator> ArrayOf<G> {
    /// Create an array generator.
    ///
    /// # Panics
    ///
    /// Panics if `max_len + 1` does not fit in an `i64`.
    pub fn new(stream: SharedStream, element: G, max_len: usize) -> Self {
        Self::try_new(stream, element, max_len).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(
        stream: SharedStream,
        element: G,
        max_len: usize,
    ) -> Result<Self, GeneratorError> {
        Ok(Self {
            stream,
            element,
            bound: length_bound(max_len)?,
        })
    }
}

impl<G: Generator> Generator for ArrayOf<G> {
    fn produce(&mut self) -> ProducedValue {
        let len = non_negative(self.stream.int_n(self.bound), "array length");
        let items = (0..len).map(|_| self.element.produce()).collect();
        ProducedValue::Array(items)
    }
}

/// Maps built from up to `max_len` key/value insertions.
///
/// The number of insertions is drawn first; each insertion invokes the key
/// generator, then the value generator. A repeated key overwrites the earlier
/// value, so the map can end up smaller than the drawn count. A negative
/// draw performs no insertions.
#[derive(Debug, Clone)]
pub struct MapOf<K, V> {
    stream: SharedStream,
    key: K,
    value: V,
    bound: i64,
    policy: SoftFailurePolicy,
}

impl<K: Generator, V: Generator> MapOf<K, V> {
    /// Create a map generator.
    ///
    /// # Panics
    ///
    /// Panics if `max_len + 1` does not fit in an `i64`.
    pub fn new(stream: SharedStream, key: K, value: V, max_len: usize) -> Self {
        Self::try_new(stream, key, value, max_len).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(
        stream: SharedStream,
        key: K,
        value: V,
        max_len: usize,
    ) -> Result<Self, GeneratorError> {
        Ok(Self {
            stream,
            key,
            value,
            bound: length_bound(max_len)?,
            policy: SoftFailurePolicy::default(),
        })
    }

    /// Set the policy for key collisions.
    pub fn with_policy(mut self, policy: SoftFailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<K: Generator, V: Generator> Generator for MapOf<K, V> {
    fn produce(&mut self) -> ProducedValue {
        let len = self.stream.int_n(self.bound);
        let mut map = BTreeMap::new();

        for _ in 0..len {
            let key = self.key.produce();
            let value = self.value.produce();
            if map.contains_key(&key) {
                self.policy.report(SoftFailure::MapKeyCollision, &key);
            }
            map.insert(key, value);
        }

        ProducedValue::Map(map)
    }
}
