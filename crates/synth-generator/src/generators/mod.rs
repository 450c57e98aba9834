//! Individual generators and the combinators that compose them.
//!
//! Every generator is a small struct owning whatever state it needs (a
//! [`SharedStream`] handle, a counter, a replay buffer, child generators)
//! behind the single [`Generator::produce`] operation.

pub mod array;
pub mod choice;
pub mod numeric;
pub mod pattern;
pub mod policy;
pub mod repeat;
pub mod scalar;
pub mod static_value;
pub mod url;

use crate::generator::GeneratorError;
use synth_core::{GeneratorConfig, ProducedValue, SharedStream};
use tracing::debug;

pub use array::{ArrayOf, MapOf};
pub use choice::{Cycle, ElementOf, RandomChoice};
pub use numeric::{BigFloat, BigInteger, BigRational, Float64, Integer};
pub use pattern::PatternedString;
pub use policy::{SoftFailure, SoftFailurePolicy};
pub use repeat::RepeatThenReplay;
pub use scalar::{Boolean, Character, Text, ALPHABET};
pub use self::url::UrlOf;
pub use static_value::{yaml_to_produced_value, Constant};

/// Trait for producing values.
///
/// Each call may advance private state or the shared stream; calling the
/// same instance again continues where the previous call left off.
pub trait Generator {
    /// Produce the next value.
    fn produce(&mut self) -> ProducedValue;
}

/// Type-erased generator, as stored by combinators over many children.
pub type BoxedGenerator = Box<dyn Generator>;

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn produce(&mut self) -> ProducedValue {
        (**self).produce()
    }
}

/// Generator backed by a closure.
pub struct FromFn<F>(F);

/// Turn a closure into a generator.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut() -> ProducedValue,
{
    FromFn(f)
}

impl<F> Generator for FromFn<F>
where
    F: FnMut() -> ProducedValue,
{
    fn produce(&mut self) -> ProducedValue {
        (self.0)()
    }
}

/// Convenience methods available on every generator.
pub trait GeneratorExt: Generator {
    /// Produce `count` values in sequence.
    fn take_values(&mut self, count: usize) -> Vec<ProducedValue> {
        (0..count).map(|_| self.produce()).collect()
    }

    /// Erase the concrete generator type.
    fn boxed(self) -> BoxedGenerator
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<G: Generator + ?Sized> GeneratorExt for G {}

/// Convert a draw into an index or length.
///
/// Negative draws come from negative stream values and cannot address
/// anything, so they abort the call.
pub(crate) fn non_negative(draw: i64, what: &str) -> usize {
    usize::try_from(draw)
        .unwrap_or_else(|_| panic!("{what}: negative draw {draw} cannot be used as an index"))
}

/// Build a generator tree from its configuration.
///
/// All generators in the tree share `stream`. Building draws nothing from
/// the stream; children are constructed in the order they appear.
pub fn build_generator(
    config: &GeneratorConfig,
    stream: &SharedStream,
    policy: SoftFailurePolicy,
) -> Result<BoxedGenerator, GeneratorError> {
    config.validate(config.name())?;
    let generator = build_node(config, stream, policy)?;
    debug!(
        generator = config.name(),
        seed = stream.seed(),
        ?policy,
        "Built generator tree"
    );
    Ok(generator)
}

fn build_node(
    config: &GeneratorConfig,
    stream: &SharedStream,
    policy: SoftFailurePolicy,
) -> Result<BoxedGenerator, GeneratorError> {
    let generator = match config {
        GeneratorConfig::Constant { value } => {
            Constant::new(yaml_to_produced_value(value)?).boxed()
        }

        GeneratorConfig::Integer => Integer::new(stream.clone()).boxed(),

        GeneratorConfig::Boolean => Boolean::new(stream.clone()).boxed(),

        GeneratorConfig::Character => Character::new(stream.clone()).boxed(),

        GeneratorConfig::Float64 => Float64::new(stream.clone()).with_policy(policy).boxed(),

        GeneratorConfig::BigInteger => BigInteger::new(stream.clone()).boxed(),

        GeneratorConfig::BigFloat => BigFloat::new(stream.clone()).with_policy(policy).boxed(),

        GeneratorConfig::BigRational => BigRational::new(stream.clone()).boxed(),

        GeneratorConfig::String => Text::new(stream.clone()).boxed(),

        GeneratorConfig::PatternedString { prefix } => {
            PatternedString::new(prefix.clone()).boxed()
        }

        GeneratorConfig::RandomChoice { generators } => {
            let children = build_children(generators, stream, policy)?;
            RandomChoice::try_new(stream.clone(), children)?.boxed()
        }

        GeneratorConfig::Cycle { generators } => {
            Cycle::try_new(build_children(generators, stream, policy)?)?.boxed()
        }

        GeneratorConfig::Repeat { generator, count } => {
            RepeatThenReplay::try_new(build_node(generator, stream, policy)?, *count)?.boxed()
        }

        GeneratorConfig::Array { element, max_len } => {
            ArrayOf::try_new(stream.clone(), build_node(element, stream, policy)?, *max_len)?
                .boxed()
        }

        GeneratorConfig::Map {
            key,
            value,
            max_len,
        } => {
            let key = build_node(key, stream, policy)?;
            let value = build_node(value, stream, policy)?;
            MapOf::try_new(stream.clone(), key, value, *max_len)?
                .with_policy(policy)
                .boxed()
        }

        GeneratorConfig::ElementOf { values } => {
            let values = values
                .iter()
                .map(yaml_to_produced_value)
                .collect::<Result<Vec<_>, _>>()?;
            ElementOf::try_new(stream.clone(), values)?.boxed()
        }

        GeneratorConfig::Url { host, path } => {
            let host = build_node(host, stream, policy)?;
            let path = build_node(path, stream, policy)?;
            UrlOf::new(host, path).with_policy(policy).boxed()
        }
    };

    Ok(generator)
}

fn build_children(
    configs: &[GeneratorConfig],
    stream: &SharedStream,
    policy: SoftFailurePolicy,
) -> Result<Vec<BoxedGenerator>, GeneratorError> {
    configs
        .iter()
        .map(|c| build_node(c, stream, policy))
        .collect()
}
