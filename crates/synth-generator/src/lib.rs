//! Generators and combinators for the synthgen deterministic data generator.
//!
//! Every generator implements [`Generator`]: a single `produce` operation
//! returning one [`ProducedValue`](synth_core::ProducedValue) per call.
//! Generators that need randomness share one
//! [`SharedStream`](synth_core::SharedStream), so a whole tree of generators
//! replays the same values for the same seed.
//!
//! # Architecture
//!
//! ```text
//! ScenarioSchema (YAML)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ RecordGenerator  │
//! │                  │
//! │  - stream        │──── shared by every field generator
//! │  - fields        │
//! │  - index         │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    Record { index, fields }
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::ProducedValue;
//! use synth_generator::generators::{Constant, Cycle, Generator, GeneratorExt, PatternedString};
//!
//! let mut generator = Cycle::new(vec![
//!     Constant::new(44i64).boxed(),
//!     PatternedString::new("foo").boxed(),
//! ]);
//!
//! assert_eq!(generator.produce(), ProducedValue::Int(44));
//! assert_eq!(generator.produce(), ProducedValue::string("foo1"));
//! assert_eq!(generator.produce(), ProducedValue::Int(44));
//! ```
//!
//! # Generators
//!
//! Scalars:
//!
//! - `constant` - The same value on every call
//! - `integer` - Raw stream draws
//! - `boolean` - `true` when `int_n(2)` is zero
//! - `character` - Characters from a letter-heavy alphabet
//! - `float64` - Quotient of two draws
//! - `big_integer` - Square of a draw
//! - `big_float` - Decimal quotient `a / (b + 1)`
//! - `big_rational` - Exact rational with a non-zero denominator
//! - `string` - Strings of zero to nine characters
//! - `patterned_string` - `prefix1`, `prefix2`, ...
//!
//! Combinators:
//!
//! - `random_choice` - One randomly picked child per call
//! - `cycle` - Children round-robin
//! - `repeat` - `count` fresh values, then replays them
//! - `array` - Arrays of up to `max_len` elements
//! - `map` - Maps of up to `max_len` entries
//! - `element_of` - Random element of a fixed collection
//! - `url` - `http://{host}/{path}` URLs

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{GeneratorError, Record, RecordGenerator, RecordIterator};
pub use generators::{
    build_generator, from_fn, BoxedGenerator, Generator, GeneratorExt, SoftFailure,
    SoftFailurePolicy,
};
