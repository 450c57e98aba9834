//! Boolean, character and string generators.

use super::{non_negative, Generator};
use synth_core::{ProducedValue, SharedStream};

/// Alphabet for [`Character`].
///
/// Letters appear twice so they are drawn more often than digits.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzabcdefghijklmnopqrstuvwxyz01234567890";

/// Exclusive upper bound of the text length.
const MAX_TEXT_LEN: i64 = 10;

/// Lowest byte value drawn for text.
const TEXT_BYTE_OFFSET: i64 = 12;

/// Coin flips: `true` iff `int_n(2)` is zero.
#[derive(Debug, Clone)]
pub struct Boolean {
    stream: SharedStream,
}

impl Boolean {
    pub fn new(stream: SharedStream) -> Self {
        Self { stream }
    }
}

impl Generator for Boolean {
    fn produce(&mut self) -> ProducedValue {
        ProducedValue::Bool(self.stream.int_n(2) == 0)
    }
}

/// Characters picked from [`ALPHABET`].
#[derive(Debug, Clone)]
pub struct Character {
    stream: SharedStream,
}

impl Character {
    pub fn new(stream: SharedStream) -> Self {
        Self { stream }
    }
}

impl Generator for Character {
    fn produce(&mut self) -> ProducedValue {
        let alphabet = ALPHABET.as_bytes();
        let index = non_negative(self.stream.int_n(alphabet.len() as i64), "character");
        ProducedValue::Char(char::from(alphabet[index]))
    }
}

/// Strings of zero to nine characters.
///
/// The length is drawn first, then one byte per character as
/// `int_n(100) + 12`. Bytes map to characters one to one, so a negative draw
/// that wraps past 127 still yields a single (Latin-1) character.
#[derive(Debug, Clone)]
pub struct Text {
    stream: SharedStream,
}

impl Text {
    pub fn new(stream: SharedStream) -> Self {
        Self { stream }
    }
}

impl Generator for Text {
    fn produce(&mut self) -> ProducedValue {
        let len = non_negative(self.stream.int_n(MAX_TEXT_LEN), "string length");
        let text: String = (0..len)
            .map(|_| {
                let byte = (self.stream.int_n(100) + TEXT_BYTE_OFFSET) as u8;
                char::from(byte)
            })
            .collect();
        ProducedValue::String(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorExt;

    #[test]
    fn test_alphabet_length() {
        assert_eq!(ALPHABET.len(), 63);
    }

    #[test]
    fn test_boolean_true_on_even_draw() {
        let mut generator = Boolean::new(SharedStream::new(373));
        let values: Vec<Option<bool>> = generator
            .take_values(6)
            .iter()
            .map(ProducedValue::as_bool)
            .collect();
        assert_eq!(
            values,
            vec![
                Some(false),
                Some(false),
                Some(true),
                Some(true),
                Some(false),
                Some(true)
            ]
        );
    }

    #[test]
    fn test_boolean_negative_draw_is_false() {
        let mut generator = Boolean::new(SharedStream::new(-5));
        assert_eq!(generator.produce(), ProducedValue::Bool(false));
    }

    #[test]
    fn test_character_indexes_alphabet() {
        let mut generator = Character::new(SharedStream::new(373));
        assert_eq!(generator.produce(), ProducedValue::Char('6'));
        assert_eq!(generator.produce(), ProducedValue::Char('h'));
        assert_eq!(generator.produce(), ProducedValue::Char('q'));
    }

    #[test]
    fn test_character_stays_in_alphabet() {
        let mut generator = Character::new(SharedStream::new(99));
        for value in generator.take_values(500) {
            let c = value.as_char().unwrap();
            assert!(ALPHABET.contains(c));
        }
    }

    #[test]
    #[should_panic(expected = "character: negative draw")]
    fn test_character_negative_draw_panics() {
        Character::new(SharedStream::new(-5)).produce();
    }

    #[test]
    fn test_text_length_then_bytes() {
        let stream = SharedStream::new(373);
        let mut generator = Text::new(stream.clone());

        assert_eq!(generator.produce(), ProducedValue::string("\u{17}V\""));
        assert_eq!(stream.draws(), 4);
    }

    #[test]
    fn test_text_length_bounds() {
        let mut generator = Text::new(SharedStream::new(99));
        for value in generator.take_values(200) {
            let s = value.as_str().unwrap();
            assert!(s.chars().count() <= 9);
            assert!(s.chars().all(|c| (12..112).contains(&(c as u32))));
        }
    }

    #[test]
    fn test_text_wraps_negative_bytes() {
        // 2^62 overflows on the first step, so every later draw is negative.
        let mut generator = Text::new(SharedStream::new(1 << 62));
        assert_eq!(
            generator.produce(),
            ProducedValue::string("\u{b}\u{5}\u{db}\u{c3}")
        );
    }

    #[test]
    #[should_panic(expected = "string length: negative draw -5")]
    fn test_text_negative_length_panics() {
        Text::new(SharedStream::new(-5)).produce();
    }
}
