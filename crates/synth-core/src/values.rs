//! Produced value representation.
//!
//! `ProducedValue` is the closed set of things a generator can return.
//! Containers hold produced values themselves, so any generator tree can be
//! matched on recursively.

use num_bigint::BigInt;
use num_rational::BigRational;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use url::Url;

/// Value produced by a single generator invocation.
///
/// Produced values are totally ordered and hashable so that any of them,
/// including floats and containers, can serve as a map key. Floats compare
/// by [`f64::total_cmp`], so two NaNs with the same bit pattern are equal.
#[derive(Debug, Clone)]
pub enum ProducedValue {
    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point, may be NaN or infinite
    Float(f64),

    /// Arbitrary-precision integer
    BigInt(BigInt),

    /// Arbitrary-precision decimal
    BigFloat(Decimal),

    /// Exact rational number
    BigRational(BigRational),

    /// Single character
    Char(char),

    /// String value
    String(String),

    /// Parsed URL, `None` when the formatted URL did not parse
    Url(Option<Url>),

    /// Ordered sequence of values
    Array(Vec<ProducedValue>),

    /// Mapping from value to value
    Map(BTreeMap<ProducedValue, ProducedValue>),
}

impl ProducedValue {
    /// Create a string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Tag name of this value.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::BigInt(_) => "big_int",
            Self::BigFloat(_) => "big_float",
            Self::BigRational(_) => "big_rational",
            Self::Char(_) => "char",
            Self::String(_) => "string",
            Self::Url(_) => "url",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a big integer.
    pub fn as_big_int(&self) -> Option<&BigInt> {
        match self {
            Self::BigInt(i) => Some(i),
            _ => None,
        }
    }

    /// Try to get this value as a decimal.
    pub fn as_big_float(&self) -> Option<&Decimal> {
        match self {
            Self::BigFloat(d) => Some(d),
            _ => None,
        }
    }

    /// Try to get this value as a rational.
    pub fn as_big_rational(&self) -> Option<&BigRational> {
        match self {
            Self::BigRational(r) => Some(r),
            _ => None,
        }
    }

    /// Try to get this value as a character.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a URL.
    ///
    /// Returns `None` both for non-URL values and for the zero URL.
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            Self::Url(u) => u.as_ref(),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&Vec<ProducedValue>> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get this value as a map.
    pub fn as_map(&self) -> Option<&BTreeMap<ProducedValue, ProducedValue>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Position of the variant in the total order across kinds.
    fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Int(_) => 1,
            Self::Float(_) => 2,
            Self::BigInt(_) => 3,
            Self::BigFloat(_) => 4,
            Self::BigRational(_) => 5,
            Self::Char(_) => 6,
            Self::String(_) => 7,
            Self::Url(_) => 8,
            Self::Array(_) => 9,
            Self::Map(_) => 10,
        }
    }
}

impl Ord for ProducedValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::BigInt(a), Self::BigInt(b)) => a.cmp(b),
            (Self::BigFloat(a), Self::BigFloat(b)) => a.cmp(b),
            (Self::BigRational(a), Self::BigRational(b)) => a.cmp(b),
            (Self::Char(a), Self::Char(b)) => a.cmp(b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::Url(a), Self::Url(b)) => a.cmp(b),
            (Self::Array(a), Self::Array(b)) => a.cmp(b),
            (Self::Map(a), Self::Map(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for ProducedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ProducedValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ProducedValue {}

impl Hash for ProducedValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Self::Bool(b) => b.hash(state),
            Self::Int(i) => i.hash(state),
            Self::Float(f) => f.to_bits().hash(state),
            Self::BigInt(i) => i.hash(state),
            Self::BigFloat(d) => d.hash(state),
            Self::BigRational(r) => r.hash(state),
            Self::Char(c) => c.hash(state),
            Self::String(s) => s.hash(state),
            Self::Url(u) => u.hash(state),
            Self::Array(arr) => arr.hash(state),
            Self::Map(map) => map.hash(state),
        }
    }
}

impl fmt::Display for ProducedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::BigInt(i) => write!(f, "{i}"),
            Self::BigFloat(d) => write!(f, "{d}"),
            Self::BigRational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Self::Char(c) => write!(f, "{c}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Url(Some(u)) => write!(f, "{u}"),
            Self::Url(None) => Ok(()),
            Self::Array(arr) => {
                write!(f, "[")?;
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for ProducedValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ProducedValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ProducedValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<char> for ProducedValue {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for ProducedValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ProducedValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<BigInt> for ProducedValue {
    fn from(value: BigInt) -> Self {
        Self::BigInt(value)
    }
}

impl From<Decimal> for ProducedValue {
    fn from(value: Decimal) -> Self {
        Self::BigFloat(value)
    }
}

impl From<BigRational> for ProducedValue {
    fn from(value: BigRational) -> Self {
        Self::BigRational(value)
    }
}

impl From<Url> for ProducedValue {
    fn from(value: Url) -> Self {
        Self::Url(Some(value))
    }
}

impl From<Vec<ProducedValue>> for ProducedValue {
    fn from(value: Vec<ProducedValue>) -> Self {
        Self::Array(value)
    }
}

impl From<BTreeMap<ProducedValue, ProducedValue>> for ProducedValue {
    fn from(value: BTreeMap<ProducedValue, ProducedValue>) -> Self {
        Self::Map(value)
    }
}
