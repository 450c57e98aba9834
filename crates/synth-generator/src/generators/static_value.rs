//! Constant generator and YAML to ProducedValue conversion.

use super::Generator;
use crate::generator::GeneratorError;
use serde_yaml::Value as YamlValue;
use std::collections::BTreeMap;
use synth_core::ProducedValue;

/// Generator returning the same value on every call.
#[derive(Debug, Clone)]
pub struct Constant {
    value: ProducedValue,
}

impl Constant {
    /// Create a constant generator.
    pub fn new(value: impl Into<ProducedValue>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Generator for Constant {
    fn produce(&mut self) -> ProducedValue {
        self.value.clone()
    }
}

/// Convert a YAML value to a ProducedValue.
///
/// Null has no produced counterpart and is rejected, including when nested
/// inside a sequence or mapping.
pub fn yaml_to_produced_value(yaml: &YamlValue) -> Result<ProducedValue, GeneratorError> {
    let value = match yaml {
        YamlValue::Null => {
            return Err(GeneratorError::InvalidConstant(
                "null cannot be produced".to_string(),
            ))
        }
        YamlValue::Bool(b) => ProducedValue::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                ProducedValue::Int(i)
            } else if let Some(f) = n.as_f64() {
                ProducedValue::Float(f)
            } else {
                ProducedValue::String(n.to_string())
            }
        }
        YamlValue::String(s) => ProducedValue::String(s.clone()),
        YamlValue::Sequence(arr) => ProducedValue::Array(
            arr.iter()
                .map(yaml_to_produced_value)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        YamlValue::Mapping(map) => {
            let mut values = BTreeMap::new();
            for (k, v) in map {
                values.insert(yaml_to_produced_value(k)?, yaml_to_produced_value(v)?);
            }
            ProducedValue::Map(values)
        }
        YamlValue::Tagged(tagged) => yaml_to_produced_value(&tagged.value)?,
    };

    Ok(value)
}
