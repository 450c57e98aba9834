//! Core types for the synthgen deterministic data generator.
//!
//! This crate provides the foundational pieces every generator builds on:
//!
//! - [`Stream`] - Seeded linear congruential integer stream
//! - [`SharedStream`] - Single-threaded handle shared by all generators of a scenario
//! - [`ProducedValue`] - Closed set of values a generator can return
//! - [`ScenarioSchema`] - Generator trees and record layouts loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! synth-core (this crate)
//!    │
//!    └─── synth-generator  (scalar generators, combinators, schema builder)
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::{ProducedValue, SharedStream};
//!
//! let stream = SharedStream::new(373);
//! let value = ProducedValue::Int(stream.next());
//! assert_eq!(value.as_i64(), Some(373));
//! ```

pub mod schema;
pub mod stream;
pub mod values;

// Re-exports for convenience
pub use schema::{FieldDefinition, GeneratorConfig, ScenarioSchema, SchemaError};
pub use stream::{SharedStream, Stream, MODULUS, MULTIPLIER};
pub use values::ProducedValue;
