//! Numeric value generators.

use super::policy::{SoftFailure, SoftFailurePolicy};
use super::Generator;
use num_bigint::BigInt;
use rust_decimal::Decimal;
use synth_core::{ProducedValue, SharedStream};

/// Raw stream draws.
#[derive(Debug, Clone)]
pub struct Integer {
    stream: SharedStream,
}

impl Integer {
    pub fn new(stream: SharedStream) -> Self {
        Self { stream }
    }
}

impl Generator for Integer {
    fn produce(&mut self) -> ProducedValue {
        ProducedValue::Int(self.stream.next())
    }
}

/// Quotient `i / j` of two consecutive draws.
///
/// A zero divisor yields NaN or an infinity, reported through the
/// `float_quotient` check.
#[derive(Debug, Clone)]
pub struct Float64 {
    stream: SharedStream,
    policy: SoftFailurePolicy,
}

impl Float64 {
    pub fn new(stream: SharedStream) -> Self {
        Self {
            stream,
            policy: SoftFailurePolicy::default(),
        }
    }

    /// Set the policy for non-finite quotients.
    pub fn with_policy(mut self, policy: SoftFailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Generator for Float64 {
    fn produce(&mut self) -> ProducedValue {
        let i = self.stream.next();
        let j = self.stream.next();
        let quotient = i as f64 / j as f64;
        if !quotient.is_finite() {
            self.policy
                .report(SoftFailure::FloatQuotient, format_args!("{i} / {j} = {quotient}"));
        }
        ProducedValue::Float(quotient)
    }
}

/// Square of one draw as an arbitrary-precision integer.
#[derive(Debug, Clone)]
pub struct BigInteger {
    stream: SharedStream,
}

impl BigInteger {
    pub fn new(stream: SharedStream) -> Self {
        Self { stream }
    }
}

impl Generator for BigInteger {
    fn produce(&mut self) -> ProducedValue {
        let x = BigInt::from(self.stream.next());
        ProducedValue::BigInt(&x * &x)
    }
}

/// Decimal quotient `a / (b + 1)` of two consecutive draws.
///
/// Both operands pass through `f64` and the quotient is rounded to 53 bits,
/// the precision of the operands, before it is widened to a decimal. A zero
/// divisor is reported through the `big_float_divisor` check and produces
/// zero under the lenient policy.
#[derive(Debug, Clone)]
pub struct BigFloat {
    stream: SharedStream,
    policy: SoftFailurePolicy,
}

impl BigFloat {
    pub fn new(stream: SharedStream) -> Self {
        Self {
            stream,
            policy: SoftFailurePolicy::default(),
        }
    }

    /// Set the policy for zero divisors.
    pub fn with_policy(mut self, policy: SoftFailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Generator for BigFloat {
    fn produce(&mut self) -> ProducedValue {
        let x = self.stream.next() as f64;
        let y = self.stream.next() as f64 + 1.0;

        let quotient = if y == 0.0 {
            None
        } else {
            Decimal::from_f64_retain(x / y)
        };

        match quotient {
            Some(q) => ProducedValue::BigFloat(q),
            None => {
                self.policy
                    .report(SoftFailure::BigFloatDivisor, format_args!("{x} / {y}"));
                ProducedValue::BigFloat(Decimal::ZERO)
            }
        }
    }
}

/// Exact rational `numerator / denominator`.
///
/// The denominator is drawn first and redrawn while it is zero; the
/// numerator is drawn last. A stream stuck at zero never terminates.
#[derive(Debug, Clone)]
pub struct BigRational {
    stream: SharedStream,
}

impl BigRational {
    pub fn new(stream: SharedStream) -> Self {
        Self { stream }
    }
}

impl Generator for BigRational {
    fn produce(&mut self) -> ProducedValue {
        let mut denominator = self.stream.next();
        while denominator == 0 {
            denominator = self.stream.next();
        }
        let numerator = self.stream.next();

        ProducedValue::BigRational(num_rational::BigRational::new(
            BigInt::from(numerator),
            BigInt::from(denominator),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorExt;

    #[test]
    fn test_integer_returns_raw_draws() {
        let mut generator = Integer::new(SharedStream::new(373));
        assert_eq!(
            generator.take_values(3),
            vec![
                ProducedValue::Int(373),
                ProducedValue::Int(6269011),
                ProducedValue::Int(136569174)
            ]
        );
    }

    #[test]
    fn test_float64_divides_consecutive_draws() {
        let stream = SharedStream::new(373);
        let mut generator = Float64::new(stream.clone());

        assert_eq!(
            generator.produce(),
            ProducedValue::Float(373.0 / 6269011.0)
        );
        assert_eq!(
            generator.produce(),
            ProducedValue::Float(136569174.0 / 1805572422.0)
        );
        assert_eq!(stream.draws(), 4);
    }

    #[test]
    fn test_float64_zero_divisor_is_nan() {
        let mut generator = Float64::new(SharedStream::new(0));
        let value = generator.produce().as_f64().unwrap();
        assert!(value.is_nan());
    }

    #[test]
    fn test_float64_zero_divisor_is_infinite() {
        // 16807 * (2^31 - 1) is a multiple of the modulus, so the second draw is 0.
        let mut generator = Float64::new(SharedStream::new(2147483647));
        assert_eq!(generator.produce(), ProducedValue::Float(f64::INFINITY));

        let mut generator = Float64::new(SharedStream::new(-2147483647));
        assert_eq!(generator.produce(), ProducedValue::Float(f64::NEG_INFINITY));
    }

    #[test]
    #[should_panic(expected = "float_quotient check failed: 2147483647 / 0")]
    fn test_float64_strict_panics_on_infinity() {
        let mut generator =
            Float64::new(SharedStream::new(2147483647)).with_policy(SoftFailurePolicy::Strict);
        generator.produce();
    }

    #[test]
    #[should_panic(expected = "float_quotient check failed")]
    fn test_float64_strict_panics_on_nan() {
        let mut generator =
            Float64::new(SharedStream::new(0)).with_policy(SoftFailurePolicy::Strict);
        generator.produce();
    }

    #[test]
    fn test_big_integer_squares_draw() {
        let mut generator = BigInteger::new(SharedStream::new(373));
        assert_eq!(generator.produce(), ProducedValue::BigInt(BigInt::from(139129)));
        assert_eq!(
            generator.produce(),
            ProducedValue::BigInt(BigInt::from(39300498918121i64))
        );
    }

    #[test]
    fn test_big_integer_exceeds_i64() {
        let mut generator = BigInteger::new(SharedStream::new(i64::MAX));
        let value = generator.produce();
        let expected = BigInt::from(i64::MAX) * BigInt::from(i64::MAX);
        assert_eq!(value.as_big_int(), Some(&expected));
    }

    #[test]
    fn test_big_float_quotient() {
        let stream = SharedStream::new(373);
        let mut generator = BigFloat::new(stream.clone());

        let value = *generator.produce().as_big_float().unwrap();
        assert_eq!(value, Decimal::from_f64_retain(373.0 / 6269012.0).unwrap());
        assert_eq!(stream.draws(), 2);
    }

    #[test]
    fn test_big_float_rounds_to_double_precision() {
        let mut generator = BigFloat::new(SharedStream::new(373));

        let value = *generator.produce().as_big_float().unwrap();
        let exact = Decimal::from(373) / Decimal::from(6269012);
        assert_ne!(value, exact);
        assert!((value - exact).abs() < Decimal::new(1, 19));
    }

    #[test]
    fn test_big_float_zero_divisor_lenient() {
        // Second draw is -1, so the divisor b + 1 is zero.
        let mut generator = BigFloat::new(SharedStream::new(-1407677000));
        assert_eq!(generator.produce(), ProducedValue::BigFloat(Decimal::ZERO));
    }

    #[test]
    #[should_panic(expected = "big_float_divisor check failed")]
    fn test_big_float_zero_divisor_strict() {
        let mut generator = BigFloat::new(SharedStream::new(-1407677000))
            .with_policy(SoftFailurePolicy::Strict);
        generator.produce();
    }

    #[test]
    fn test_big_rational_draws_denominator_first() {
        let stream = SharedStream::new(373);
        let mut generator = BigRational::new(stream.clone());

        // 6269011 / 373 reduces to 16807
        let value = generator.produce();
        assert_eq!(
            value,
            ProducedValue::BigRational(num_rational::BigRational::from_integer(
                BigInt::from(16807)
            ))
        );

        let value = generator.produce();
        assert_eq!(
            value,
            ProducedValue::BigRational(num_rational::BigRational::new(
                BigInt::from(1805572422),
                BigInt::from(136569174)
            ))
        );
        assert_eq!(stream.draws(), 4);
    }
}
