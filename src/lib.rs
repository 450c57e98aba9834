//! synthgen
//!
//! Deterministic synthetic data generators for tests. A seeded integer
//! stream that is reproducible across language runtimes drives a small set
//! of scalar generators, and combinators compose them into arbitrarily deep
//! trees of structured data.
//!
//! # Crates
//!
//! - `synth_core` - Stream, produced values and generator schemas
//! - `synth_generator` - Scalar generators, combinators and record generation
//!
//! # Example
//!
//! ```rust
//! use synthgen::generators::{ArrayOf, Generator, Integer, MapOf, PatternedString};
//! use synthgen::{ProducedValue, SharedStream};
//!
//! let stream = SharedStream::new(99);
//! let mut generator = MapOf::new(
//!     stream.clone(),
//!     PatternedString::new("key"),
//!     ArrayOf::new(stream.clone(), Integer::new(stream.clone()), 10),
//!     25,
//! );
//!
//! match generator.produce() {
//!     ProducedValue::Map(map) => assert!(map.len() <= 25),
//!     other => panic!("unexpected value: {other}"),
//! }
//! ```

use std::path::Path;
use tracing::info;

pub use synth_core::{
    FieldDefinition, GeneratorConfig, ProducedValue, ScenarioSchema, SchemaError, SharedStream,
    Stream,
};
pub use synth_generator::generators;
pub use synth_generator::{
    build_generator, from_fn, BoxedGenerator, Generator, GeneratorError, GeneratorExt, Record,
    RecordGenerator, RecordIterator, SoftFailure, SoftFailurePolicy,
};

/// Load a scenario schema file and build its record generator.
///
/// `seed` overrides the schema's own seed when given.
pub fn load_scenario<P: AsRef<Path>>(
    path: P,
    seed: Option<i64>,
) -> Result<RecordGenerator, GeneratorError> {
    let path = path.as_ref();
    let schema = ScenarioSchema::from_file(path)?;
    let seed = seed.or(schema.seed).unwrap_or(0);

    info!(
        path = %path.display(),
        seed,
        fields = schema.fields.len(),
        "Loaded scenario schema"
    );

    RecordGenerator::new(schema, seed)
}
