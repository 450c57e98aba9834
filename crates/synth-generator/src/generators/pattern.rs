//! Sequential patterned string generator.

use super::Generator;
use synth_core::ProducedValue;

/// Produces `prefix1`, `prefix2`, ... independent of any stream.
#[derive(Debug, Clone)]
pub struct PatternedString {
    prefix: String,
    counter: u64,
}

impl PatternedString {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }
}

impl Generator for PatternedString {
    fn produce(&mut self) -> ProducedValue {
        self.counter += 1;
        ProducedValue::String(format!("{}{}", self.prefix, self.counter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_one() {
        let mut generator = PatternedString::new("foo");

        for i in 0..100 {
            let expected = format!("foo{}", i + 1);
            assert_eq!(generator.produce(), ProducedValue::String(expected));
        }
    }

    #[test]
    fn test_instances_count_independently() {
        let mut a = PatternedString::new("key");
        let mut b = PatternedString::new("key");

        a.produce();
        a.produce();
        assert_eq!(a.produce(), ProducedValue::string("key3"));
        assert_eq!(b.produce(), ProducedValue::string("key1"));
    }

    #[test]
    fn test_empty_prefix() {
        let mut generator = PatternedString::new("");
        assert_eq!(generator.produce(), ProducedValue::string("1"));
    }
}
