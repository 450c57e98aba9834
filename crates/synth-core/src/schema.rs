//! Declarative generator schemas.
//!
//! A [`GeneratorConfig`] describes one generator tree in YAML. A
//! [`ScenarioSchema`] names a list of fields, each with its own tree, and is
//! what a record generator is built from.
//!
//! ```yaml
//! version: 1
//! seed: 99
//! fields:
//!   - name: tags
//!     generator:
//!       type: map
//!       max_len: 25
//!       key:
//!         type: patterned_string
//!         prefix: key
//!       value:
//!         type: array
//!         max_len: 10
//!         element:
//!           type: integer
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Generator tree that cannot be built
    #[error("Invalid generator at {path}: {reason}")]
    InvalidGenerator { path: String, reason: String },

    /// Two fields share a name
    #[error("Duplicate field: {0}")]
    DuplicateField(String),

    /// Field not found in schema
    #[error("Field not found: {0}")]
    FieldNotFound(String),
}

// ============================================================================
// Generator Types
// ============================================================================

/// Generator configuration.
///
/// Each variant maps to exactly one generator. Combinator variants nest
/// further configurations, so a single value describes a whole tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Always produce the same value
    Constant {
        /// Value to produce
        value: serde_yaml::Value,
    },

    /// Raw stream draws
    Integer,

    /// Coin flips
    Boolean,

    /// Characters from the fixed alphabet
    Character,

    /// Quotient of two draws
    Float64,

    /// Square of one draw
    BigInteger,

    /// Arbitrary-precision quotient of two draws
    BigFloat,

    /// Exact rational with a non-zero denominator
    BigRational,

    /// Short strings of up to nine characters
    String,

    /// `prefix1`, `prefix2`, ...
    PatternedString {
        /// Prefix placed before the counter
        prefix: String,
    },

    /// Pick one child at random on every call
    RandomChoice {
        /// Children to choose from
        generators: Vec<GeneratorConfig>,
    },

    /// Call children round-robin
    Cycle {
        /// Children to cycle through
        generators: Vec<GeneratorConfig>,
    },

    /// Produce `count` fresh values, then replay them forever
    Repeat {
        /// Child producing the fresh values
        generator: Box<GeneratorConfig>,
        /// Number of values to record
        count: usize,
    },

    /// Arrays of up to `max_len` elements
    Array {
        /// Element generator
        element: Box<GeneratorConfig>,
        /// Maximum array length (inclusive)
        max_len: usize,
    },

    /// Maps of up to `max_len` entries
    Map {
        /// Key generator
        key: Box<GeneratorConfig>,
        /// Value generator
        value: Box<GeneratorConfig>,
        /// Maximum number of insertions (inclusive)
        max_len: usize,
    },

    /// Random element of a fixed collection
    ElementOf {
        /// Collection to pick from
        values: Vec<serde_yaml::Value>,
    },

    /// `http://{host}/{path}` URLs
    Url {
        /// Host generator
        host: Box<GeneratorConfig>,
        /// Path generator
        path: Box<GeneratorConfig>,
    },
}

impl GeneratorConfig {
    /// Short name of the generator, matching the YAML `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Constant { .. } => "constant",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Character => "character",
            Self::Float64 => "float64",
            Self::BigInteger => "big_integer",
            Self::BigFloat => "big_float",
            Self::BigRational => "big_rational",
            Self::String => "string",
            Self::PatternedString { .. } => "patterned_string",
            Self::RandomChoice { .. } => "random_choice",
            Self::Cycle { .. } => "cycle",
            Self::Repeat { .. } => "repeat",
            Self::Array { .. } => "array",
            Self::Map { .. } => "map",
            Self::ElementOf { .. } => "element_of",
            Self::Url { .. } => "url",
        }
    }

    /// Check that the tree can be built.
    ///
    /// `path` names the root of the tree in error messages.
    pub fn validate(&self, path: &str) -> Result<(), SchemaError> {
        let invalid = |reason: &str| SchemaError::InvalidGenerator {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        match self {
            Self::RandomChoice { generators } | Self::Cycle { generators } => {
                if generators.is_empty() {
                    return Err(invalid("at least one generator is required"));
                }
                for (i, child) in generators.iter().enumerate() {
                    child.validate(&format!("{path}.generators[{i}]"))?;
                }
            }
            Self::Repeat { generator, count } => {
                if *count == 0 {
                    return Err(invalid("count must be at least 1"));
                }
                generator.validate(&format!("{path}.generator"))?;
            }
            Self::Array { element, max_len } => {
                check_max_len(*max_len).map_err(|reason| invalid(&reason))?;
                element.validate(&format!("{path}.element"))?;
            }
            Self::Map {
                key,
                value,
                max_len,
            } => {
                check_max_len(*max_len).map_err(|reason| invalid(&reason))?;
                key.validate(&format!("{path}.key"))?;
                value.validate(&format!("{path}.value"))?;
            }
            Self::ElementOf { values } => {
                if values.is_empty() {
                    return Err(invalid("values must not be empty"));
                }
            }
            Self::Url { host, path: p } => {
                host.validate(&format!("{path}.host"))?;
                p.validate(&format!("{path}.path"))?;
            }
            _ => {}
        }

        Ok(())
    }
}

/// `max_len + 1` must still be a valid stream bound.
fn check_max_len(max_len: usize) -> Result<(), String> {
    match i64::try_from(max_len) {
        Ok(n) if n < i64::MAX => Ok(()),
        _ => Err(format!("max_len {max_len} is too large")),
    }
}

// ============================================================================
// Scenario Types
// ============================================================================

/// Named field with its generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,

    /// Generator producing the field's values
    pub generator: GeneratorConfig,
}

impl FieldDefinition {
    /// Create a new field definition.
    pub fn new(name: impl Into<String>, generator: GeneratorConfig) -> Self {
        Self {
            name: name.into(),
            generator,
        }
    }
}

fn default_version() -> u32 {
    1
}

/// Scenario schema: the fields of one generated record.
///
/// Fields are produced in declaration order, which is part of the
/// determinism contract because every field draws from the same stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Seed used when the caller does not supply one
    #[serde(default)]
    pub seed: Option<i64>,

    /// Turn degenerate outputs into panics
    #[serde(default)]
    pub strict: bool,

    /// Field definitions
    pub fields: Vec<FieldDefinition>,
}

impl ScenarioSchema {
    /// Create a schema from field definitions.
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        Self {
            version: default_version(),
            seed: None,
            strict: false,
            fields,
        }
    }

    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let schema: ScenarioSchema = serde_yaml::from_str(yaml)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Check field names are unique and every generator tree can be built.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
            field
                .generator
                .validate(&format!("fields.{}.generator", field.name))?;
        }
        Ok(())
    }

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Result<&FieldDefinition, SchemaError> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| SchemaError::FieldNotFound(name.to_string()))
    }

    /// Get all field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
