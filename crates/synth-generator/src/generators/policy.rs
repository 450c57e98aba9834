//! Handling of degenerate but accepted outputs.
//!
//! A few generators can produce values that are almost certainly not what a
//! test author wanted: a NaN quotient, a map that silently lost entries, a
//! URL that did not parse. By default these are accepted unchanged. Under
//! [`SoftFailurePolicy::Strict`] they abort the call instead.

use std::fmt;
use tracing::debug;

/// Kind of degenerate output detected by a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftFailure {
    /// `float64` produced NaN or an infinity
    FloatQuotient,
    /// `big_float` divisor was zero
    BigFloatDivisor,
    /// `map` overwrote an earlier key
    MapKeyCollision,
    /// `url` formatted a string that does not parse
    UrlParse,
}

impl SoftFailure {
    /// Name of the check that detected the failure.
    pub fn check_name(&self) -> &'static str {
        match self {
            Self::FloatQuotient => "float_quotient",
            Self::BigFloatDivisor => "big_float_divisor",
            Self::MapKeyCollision => "map_key_collision",
            Self::UrlParse => "url_parse",
        }
    }
}

impl fmt::Display for SoftFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.check_name())
    }
}

/// What to do when a generator detects a [`SoftFailure`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SoftFailurePolicy {
    /// Log and return the degenerate value
    #[default]
    Lenient,
    /// Panic with a message naming the check
    Strict,
}

impl SoftFailurePolicy {
    /// Policy matching a schema's `strict` flag.
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }

    /// Report a degenerate output.
    ///
    /// Returns normally only under the lenient policy.
    pub fn report(self, failure: SoftFailure, detail: impl fmt::Display) {
        match self {
            Self::Lenient => {
                debug!(check = failure.check_name(), "Accepted degenerate value: {detail}")
            }
            Self::Strict => panic!("{failure} check failed: {detail}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_strict() {
        assert_eq!(SoftFailurePolicy::from_strict(true), SoftFailurePolicy::Strict);
        assert_eq!(SoftFailurePolicy::from_strict(false), SoftFailurePolicy::Lenient);
        assert_eq!(SoftFailurePolicy::default(), SoftFailurePolicy::Lenient);
    }

    #[test]
    fn test_lenient_report_returns() {
        SoftFailurePolicy::Lenient.report(SoftFailure::UrlParse, "http://a b/");
    }

    #[test]
    #[should_panic(expected = "map_key_collision check failed: key1")]
    fn test_strict_report_panics() {
        SoftFailurePolicy::Strict.report(SoftFailure::MapKeyCollision, "key1");
    }
}
