//! Record generator producing one value per schema field.

use crate::generators::{build_generator, BoxedGenerator, SoftFailurePolicy};
use std::collections::BTreeMap;
use synth_core::{ProducedValue, ScenarioSchema, SchemaError, SharedStream};
use tracing::{info, trace};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Combinator constructed without children
    #[error("No generators supplied to {combinator}")]
    EmptyGenerators { combinator: &'static str },

    /// Repeat constructed with a zero count
    #[error("Repeat count must be at least 1")]
    ZeroRepeatCount,

    /// Element selection over an empty collection
    #[error("Cannot pick an element from an empty collection")]
    EmptyCollection,

    /// Maximum length that cannot be used as a stream bound
    #[error("Maximum length {0} is too large")]
    MaxLenTooLarge(usize),

    /// Constant that has no produced value
    #[error("Invalid constant: {0}")]
    InvalidConstant(String),

    /// Schema error
    #[error("Schema error: {0}")]
    SchemaError(#[from] SchemaError),
}

/// One generated record.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Record index (0 for the first record of a generator)
    pub index: u64,

    /// Field values in schema order
    pub fields: Vec<(String, ProducedValue)>,
}

impl Record {
    /// Get a field value by name.
    pub fn get_field(&self, name: &str) -> Option<&ProducedValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Get the number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Convert into a map keyed by field name.
    pub fn into_value(self) -> ProducedValue {
        let map: BTreeMap<ProducedValue, ProducedValue> = self
            .fields
            .into_iter()
            .map(|(name, value)| (ProducedValue::String(name), value))
            .collect();
        ProducedValue::Map(map)
    }
}

/// Generator producing deterministic records from a scenario schema.
///
/// All field generators share one stream and are invoked in declaration
/// order, so the same schema and seed always produce the same records.
pub struct RecordGenerator {
    /// Schema defining the fields and their generators
    schema: ScenarioSchema,
    /// Stream shared by every field generator
    stream: SharedStream,
    /// Built field generators, in schema order
    fields: Vec<(String, BoxedGenerator)>,
    /// Index of the next record
    index: u64,
}

impl RecordGenerator {
    /// Create a record generator with an explicit seed.
    ///
    /// The schema's own `seed` is ignored.
    pub fn new(schema: ScenarioSchema, seed: i64) -> Result<Self, GeneratorError> {
        schema.validate()?;

        let stream = SharedStream::new(seed);
        let policy = SoftFailurePolicy::from_strict(schema.strict);
        let fields = schema
            .fields
            .iter()
            .map(|field| {
                build_generator(&field.generator, &stream, policy)
                    .map(|generator| (field.name.clone(), generator))
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            seed,
            fields = fields.len(),
            strict = schema.strict,
            "Created record generator"
        );

        Ok(Self {
            schema,
            stream,
            fields,
            index: 0,
        })
    }

    /// Create a record generator seeded from the schema (0 when absent).
    pub fn from_schema(schema: ScenarioSchema) -> Result<Self, GeneratorError> {
        let seed = schema.seed.unwrap_or(0);
        Self::new(schema, seed)
    }

    /// Get the index of the next record.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get the stream shared by the field generators.
    pub fn stream(&self) -> &SharedStream {
        &self.stream
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &ScenarioSchema {
        &self.schema
    }

    /// Generate the next record.
    pub fn next_record(&mut self) -> Record {
        let index = self.index;
        let fields = self
            .fields
            .iter_mut()
            .map(|(name, generator)| (name.clone(), generator.produce()))
            .collect();

        self.index += 1;
        trace!(index, draws = self.stream.draws(), "Generated record");

        Record { index, fields }
    }

    /// Generate multiple records.
    ///
    /// Returns an iterator that lazily generates records.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
