use serde::{Deserialize, Serialize};

use crate::{
    CHECK_DIGIT_MODULUS, FILLER, FormatError, WEIGHTS, consts::LETTER_OFFSET, prelude::*,
};

/// A single ICAO 9303 check digit (0-9).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "u8", into = "u8")]
pub struct CheckDigit(u8);

impl CheckDigit {
    /// Wraps an already computed digit.
    ///
    /// # Errors
    /// Returns `FormatError::InvalidCheckDigit` if the value is not a single decimal digit.
    pub fn new(value: u8) -> Result<Self, FormatError> {
        if u32::from(value) >= CHECK_DIGIT_MODULUS {
            return Err(FormatError::InvalidCheckDigit(value));
        }
        Ok(Self(value))
    }

    /// Computes the check digit of `data`. See [`check_digit`].
    pub fn compute(data: &str) -> Self {
        Self(check_digit(data))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CheckDigit {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CheckDigit> for u8 {
    fn from(digit: CheckDigit) -> Self {
        digit.0
    }
}

/// Numeric value of a single MRZ character.
///
/// Digits map to themselves, ASCII letters (either case) to 10..=35, and
/// everything else, the filler `<` included, to 0.
pub fn char_value(c: char) -> u32 {
    match c {
        '0'..='9' => u32::from(c) - u32::from('0'),
        'A'..='Z' => u32::from(c) - LETTER_OFFSET,
        'a'..='z' => u32::from(c.to_ascii_uppercase()) - LETTER_OFFSET,
        _ => 0,
    }
}

/// Computes the ICAO 9303 check digit of `data`.
///
/// Each character's [`char_value`] is multiplied by the repeating weights
/// 7, 3, 1 according to its position, and the sum is taken modulo 10.
/// Unrecognized characters contribute nothing; an empty string yields 0.
#[allow(clippy::cast_possible_truncation)]
pub fn check_digit(data: &str) -> u8 {
    let sum = data
        .chars()
        .zip(WEIGHTS.iter().cycle())
        .fold(0u32, |acc, (c, weight)| {
            (acc + char_value(c) * weight) % CHECK_DIGIT_MODULUS
        });
    // sum < CHECK_DIGIT_MODULUS
    sum as u8
}

/// Returns `field` followed by its check digit.
pub fn append_check_digit(field: &str) -> String {
    format!("{field}{}", CheckDigit::compute(field))
}

/// Checks a field whose last character is its check digit.
///
/// Returns `false` for an empty field or when the trailing character is not
/// a decimal digit.
pub fn verify_check_digit(field_with_digit: &str) -> bool {
    let mut chars = field_with_digit.chars();
    let Some(last) = chars.next_back() else {
        return false;
    };
    last.to_digit(CHECK_DIGIT_MODULUS)
        .is_some_and(|expected| expected == u32::from(check_digit(chars.as_str())))
}

/// Right-pads `value` with the filler character up to `width` characters.
/// Values already at or beyond `width` are returned unchanged.
pub fn pad_field(value: &str, width: usize) -> String {
    let missing = width.saturating_sub(value.chars().count());
    let mut padded = String::with_capacity(value.len() + missing);
    padded.push_str(value);
    padded.extend(std::iter::repeat_n(FILLER, missing));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit_cases() {
        struct TestCase {
            data: &'static str,
            expected: u8,
            description: &'static str,
        }

        let cases = [
            TestCase {
                data: "123456789",
                expected: 7,
                description: "numeric",
            },
            TestCase {
                data: "A12B34C",
                expected: 9,
                description: "alphanumeric",
            },
            TestCase {
                data: "123<567<9",
                expected: 5,
                description: "filler characters",
            },
            TestCase {
                data: "",
                expected: 0,
                description: "empty input",
            },
            TestCase {
                data: "<<<<<<",
                expected: 0,
                description: "filler only",
            },
            // ICAO 9303 part 3 specimen document number
            TestCase {
                data: "L898902C3",
                expected: 6,
                description: "specimen document number",
            },
            TestCase {
                data: "740812",
                expected: 2,
                description: "specimen birth date",
            },
            TestCase {
                data: "120415",
                expected: 9,
                description: "specimen expiry date",
            },
        ];

        for case in &cases {
            assert_eq!(
                check_digit(case.data),
                case.expected,
                "{:?} ({})",
                case.data,
                case.description
            );
        }
    }

    #[test]
    fn test_check_digit_is_case_insensitive() {
        assert_eq!(check_digit("a12b34c"), check_digit("A12B34C"));
        assert_eq!(check_digit("l898902c3"), 6);
    }

    #[test]
    fn test_check_digit_unrecognized_chars_count_as_zero() {
        assert_eq!(check_digit("123 567-9"), check_digit("123<567<9"));
        assert_eq!(check_digit("1é3"), check_digit("1<3"));
        assert_eq!(check_digit("ß"), 0);
    }

    #[test]
    fn test_check_digit_is_position_dependent() {
        assert_ne!(check_digit("12"), check_digit("21"));
    }

    #[test]
    fn test_check_digit_repeated_calls_agree() {
        for data in ["123456789", "A12B34C", "123<567<9", ""] {
            let first = check_digit(data);
            for _ in 0..3 {
                assert_eq!(check_digit(data), first);
            }
        }
    }

    #[test]
    fn test_check_digit_long_input_does_not_overflow() {
        let data = "Z".repeat(100_000);
        // 33_333 full cycles of 35 * 11 plus one trailing Z at weight 7
        assert_eq!(check_digit(&data), 0);
        assert_eq!(check_digit(&format!("{data}1")), 3);
    }

    #[test]
    fn test_char_value() {
        assert_eq!(char_value('0'), 0);
        assert_eq!(char_value('9'), 9);
        assert_eq!(char_value('A'), 10);
        assert_eq!(char_value('Z'), 35);
        assert_eq!(char_value('z'), 35);
        assert_eq!(char_value('<'), 0);
        assert_eq!(char_value('Ä'), 0);
    }

    #[test]
    fn test_check_digit_type() {
        let digit = CheckDigit::compute("123456789");
        assert_eq!(digit.get(), 7);
        assert_eq!(*digit, 7);
        assert_eq!(digit.to_string(), "7");

        assert!(CheckDigit::new(9).is_ok());
        assert!(matches!(
            CheckDigit::new(10),
            Err(FormatError::InvalidCheckDigit(10))
        ));
    }

    #[test]
    fn test_check_digit_serde() {
        let digit = CheckDigit::new(4).unwrap();
        let json = serde_json::to_string(&digit).unwrap();
        assert_eq!(json, "4");

        let parsed: CheckDigit = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, digit);
        assert!(serde_json::from_str::<CheckDigit>("12").is_err());
    }

    #[test]
    fn test_append_and_verify() {
        assert_eq!(append_check_digit("L898902C3"), "L898902C36");
        assert!(verify_check_digit("L898902C36"));
        assert!(verify_check_digit("7408122"));
        assert!(!verify_check_digit("7408123"));
        assert!(!verify_check_digit("740812<"));
        assert!(!verify_check_digit(""));
        // A lone digit is checked against the empty string
        assert!(verify_check_digit("0"));
    }

    #[test]
    fn test_pad_field() {
        assert_eq!(pad_field("L898902C", 9), "L898902C<");
        assert_eq!(pad_field("", 3), "<<<");
        assert_eq!(pad_field("ABCDE", 3), "ABCDE");
    }
}
