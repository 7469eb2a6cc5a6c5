//! Numeric helpers: approximate float comparison, bounding, rounding to
//! multiples, normalization, and loose evaluation of numeric strings.
//!
//! Loose evaluation accepts forms `str::parse` rejects: comma-grouped
//! numbers (`"1,000.5"`), fractions and mixed numbers (`"1 1/2"`), ordinal
//! suffixes (`"2nd"`), and English number words (`"one hundred and five"`).

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::NumericError;

/// Comma-grouped decimal numbers, e.g. `"1,000"` or `"1,000.5"`.
static COMMA_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([1-9](?:\d*|(?:\d{0,2})(?:,\d{3})*)(?:\.\d*[0-9])?|0?\.\d*[0-9]|0)$")
        .expect("comma-number pattern is valid")
});

/// Fractions and mixed numbers, e.g. `"3/2"`, `"3\2"`, or `"1 1/2"`.
static MIXED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)\s+)?(\d+)[/\\](\d+)$").expect("mixed-number pattern is valid")
});

static CARDINALS: LazyLock<HashMap<&'static str, i64>> = LazyLock::new(|| {
    HashMap::from([
        ("one", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
        ("ten", 10),
        ("eleven", 11),
        ("twelve", 12),
        ("thirteen", 13),
        ("fourteen", 14),
        ("fifteen", 15),
        ("sixteen", 16),
        ("seventeen", 17),
        ("eighteen", 18),
        ("nineteen", 19),
        ("twenty", 20),
        ("thirty", 30),
        ("forty", 40),
        ("fifty", 50),
        ("sixty", 60),
        ("seventy", 70),
        ("eighty", 80),
        ("ninety", 90),
    ])
});

static ORDINALS: LazyLock<HashMap<&'static str, i64>> = LazyLock::new(|| {
    HashMap::from([
        ("first", 1),
        ("second", 2),
        ("third", 3),
        ("fourth", 4),
        ("fifth", 5),
        ("sixth", 6),
        ("seventh", 7),
        ("eighth", 8),
        ("ninth", 9),
        ("tenth", 10),
        ("eleventh", 11),
        ("twelfth", 12),
        ("thirteenth", 13),
        ("fourteenth", 14),
        ("fifteenth", 15),
        ("sixteenth", 16),
        ("seventeenth", 17),
        ("eighteenth", 18),
        ("nineteenth", 19),
        ("twentieth", 20),
        ("thirtieth", 30),
        ("fortieth", 40),
        ("fiftieth", 50),
        ("sixtieth", 60),
        ("seventieth", 70),
        ("eightieth", 80),
        ("ninetieth", 90),
    ])
});

static POWERS: LazyLock<HashMap<&'static str, i64>> = LazyLock::new(|| {
    HashMap::from([
        ("hundred", 100),
        ("thousand", 1_000),
        ("million", 1_000_000),
        ("billion", 1_000_000_000),
    ])
});

/// A loosely evaluated numeric value.
///
/// Integral forms stay integers (`"1,000"` is `Int(1000)`); decimals and
/// fractions become floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// An integral value.
    Int(i64),
    /// A fractional value.
    Float(f64),
}

impl Number {
    /// This value as a float.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    /// Returns true for integer zero and float zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(value) => value == 0,
            Self::Float(value) => value == 0.0,
        }
    }
}

/// The default tolerance for [`almost_equal`].
pub const DEFAULT_EPSILON: f64 = 0.00001;

/// Returns true if `a` and `b` differ by less than `epsilon`.
///
/// Floats should never be compared with `==` after arithmetic; this uses an
/// explicit tolerance instead ([`DEFAULT_EPSILON`] is a reasonable one).
///
/// # Errors
///
/// [`NumericError::NonPositiveEpsilon`] when `epsilon <= 0`.
pub fn almost_equal(a: f64, b: f64, epsilon: f64) -> Result<bool, NumericError> {
    if epsilon <= 0.0 {
        return Err(NumericError::NonPositiveEpsilon(epsilon));
    }
    Ok((a - b).abs() < epsilon)
}

/// Bounds `number` inclusively between optional lower and upper bounds.
///
/// ```
/// use kitbag::numeric::bound;
///
/// assert_eq!(bound(0.0, Some(1.0), None).unwrap(), 1.0);
/// assert_eq!(bound(3.0, None, Some(2.0)).unwrap(), 2.0);
/// assert_eq!(bound(2.0, Some(1.0), Some(3.0)).unwrap(), 2.0);
/// ```
///
/// # Errors
///
/// [`NumericError::BoundsReversed`] when both bounds are given and the
/// upper is below the lower.
pub fn bound(number: f64, lower: Option<f64>, upper: Option<f64>) -> Result<f64, NumericError> {
    if let (Some(low), Some(up)) = (lower, upper) {
        if up < low {
            return Err(NumericError::BoundsReversed {
                lower: low,
                upper: up,
            });
        }
    }

    let mut value = number;
    if let Some(low) = lower {
        value = value.max(low);
    }
    if let Some(up) = upper {
        value = value.min(up);
    }
    Ok(value)
}

/// Returns `number` rounded up to the nearest `multiple`.
///
/// # Errors
///
/// [`NumericError::NonPositiveMultiple`] when `multiple <= 0`.
pub fn ceil_to(number: f64, multiple: f64) -> Result<f64, NumericError> {
    if multiple <= 0.0 {
        return Err(NumericError::NonPositiveMultiple(multiple));
    }
    Ok((number / multiple).ceil() * multiple)
}

/// Returns `number` rounded down to the nearest `multiple`.
///
/// # Errors
///
/// [`NumericError::NonPositiveMultiple`] when `multiple <= 0`.
pub fn floor_to(number: f64, multiple: f64) -> Result<f64, NumericError> {
    if multiple <= 0.0 {
        return Err(NumericError::NonPositiveMultiple(multiple));
    }
    Ok((number / multiple).floor() * multiple)
}

/// Returns `number` rounded to the nearest `multiple`, halves away from
/// zero.
///
/// # Errors
///
/// [`NumericError::NonPositiveMultiple`] when `multiple <= 0`.
pub fn round_to(number: f64, multiple: f64) -> Result<f64, NumericError> {
    if multiple <= 0.0 {
        return Err(NumericError::NonPositiveMultiple(multiple));
    }
    Ok((number / multiple).round() * multiple)
}

/// Normalizes `number` against `max`, yielding a value in `[0, 1]`.
///
/// # Errors
///
/// [`NumericError::NonPositiveMax`] when `max <= 0`,
/// [`NumericError::AboveMax`] when `number > max`.
pub fn normalize(number: f64, max: f64) -> Result<f64, NumericError> {
    if max <= 0.0 {
        return Err(NumericError::NonPositiveMax(max));
    }
    if number > max {
        return Err(NumericError::AboveMax { number, max });
    }
    bound(number / max, Some(0.0), Some(1.0))
}

/// Loosely evaluates a string as a number.
///
/// Recognized forms, tried in order: plain integer and float literals,
/// comma-grouped numbers, fractions and mixed numbers, ordinal-suffixed
/// digits (`"2nd"`), and English number words (hyphens and `"and"` are
/// fine: `"twenty-one"`, `"one hundred and five"`). Unrecognized strings
/// evaluate to `Int(0)`, which [`is_numeric`] relies on to stay cheap.
///
/// ```
/// use kitbag::numeric::{value_of, Number};
///
/// assert_eq!(value_of("1,000"), Number::Int(1000));
/// assert_eq!(value_of("1 1/2"), Number::Float(1.5));
/// assert_eq!(value_of("second"), Number::Int(2));
/// assert_eq!(value_of("abc"), Number::Int(0));
/// ```
#[must_use]
pub fn value_of(input: &str) -> Number {
    evaluate(input).unwrap_or(Number::Int(0))
}

/// Returns true if [`value_of`] recognizes `input` as one of its numeric
/// forms, including zero literals.
#[must_use]
pub fn is_numeric(input: &str) -> bool {
    evaluate(input).is_some()
}

fn evaluate(input: &str) -> Option<Number> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(Number::Int(int));
    }

    // Only digit-built forms reach the float parser, which would otherwise
    // also accept "inf" and "NaN".
    if trimmed.chars().any(|c| c.is_ascii_digit()) {
        if let Ok(float) = trimmed.parse::<f64>() {
            return Some(Number::Float(float));
        }

        if COMMA_NUMBER.is_match(trimmed) {
            let plain = trimmed.replace(',', "");
            if let Ok(int) = plain.parse::<i64>() {
                return Some(Number::Int(int));
            }
            if let Ok(float) = plain.parse::<f64>() {
                return Some(Number::Float(float));
            }
        }

        if let Some(caps) = MIXED_NUMBER.captures(trimmed) {
            let whole: f64 = caps
                .get(1)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0.0);
            let numerator: f64 = caps.get(2).and_then(|m| m.as_str().parse().ok())?;
            let denominator: f64 = caps.get(3).and_then(|m| m.as_str().parse().ok())?;
            if denominator == 0.0 {
                return None;
            }
            return Some(Number::Float(whole + numerator / denominator));
        }

        return ordinal_digits(trimmed);
    }

    words_to_number(trimmed).map(Number::Int)
}

/// Parses digit strings with an ordinal suffix, e.g. `"1st"` or `"22nd"`.
fn ordinal_digits(input: &str) -> Option<Number> {
    let lower = input.to_ascii_lowercase();
    let stripped = lower
        .strip_suffix("th")
        .or_else(|| lower.strip_suffix("st"))
        .or_else(|| lower.strip_suffix("nd"))
        .or_else(|| lower.strip_suffix("rd"))?;

    if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    stripped.parse().ok().map(Number::Int)
}

/// Evaluates a phrase of English number words.
///
/// Words accumulate on a stack: a value larger than the stack top multiplies
/// it (`"two hundred"`), a smaller one adds (`"seventy one"`), and dropping
/// past a thousands boundary flushes the finished phrase into the running
/// sum (`"two thousand one hundred"`).
fn words_to_number(input: &str) -> Option<i64> {
    let lowered = input.to_lowercase().replace(',', "");
    let spaced = lowered.replace('-', " ").replace(" and ", " ");
    let words: Vec<&str> = spaced.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }

    let mut parts = Vec::with_capacity(words.len());
    for word in words {
        let value = CARDINALS
            .get(word)
            .or_else(|| ORDINALS.get(word))
            .or_else(|| POWERS.get(word))
            .copied()?;
        parts.push(value);
    }

    let mut stack: Vec<i64> = Vec::new();
    let mut sum = 0_i64;
    let mut last = 0_i64;

    for part in parts {
        match stack.last().copied() {
            Some(top) if top > part => {
                if last >= 1_000 {
                    sum += stack.pop().unwrap_or(0);
                    stack.push(part);
                } else {
                    let top = stack.pop().unwrap_or(0);
                    stack.push(top + part);
                }
            }
            Some(_) => {
                let top = stack.pop().unwrap_or(0);
                stack.push(top * part);
            }
            None => stack.push(part),
        }
        last = part;
    }

    Some(sum + stack.pop().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_almost_equal() {
        assert!(almost_equal(0.1 + 0.2, 0.3, DEFAULT_EPSILON).unwrap());
        assert!(!almost_equal(0.1, 0.2, DEFAULT_EPSILON).unwrap());
        assert!(almost_equal(1.0, 1.0, -1.0).is_err());
    }

    #[test]
    fn test_bound_examples() {
        assert_eq!(bound(1.0, Some(0.0), None).unwrap(), 1.0);
        assert_eq!(bound(0.0, Some(1.0), None).unwrap(), 1.0);
        assert_eq!(bound(-1.0, None, Some(2.0)).unwrap(), -1.0);
        assert_eq!(bound(3.0, None, Some(2.0)).unwrap(), 2.0);
        assert_eq!(bound(2.0, Some(1.0), Some(3.0)).unwrap(), 2.0);
        assert_eq!(bound(4.0, Some(1.0), Some(3.0)).unwrap(), 3.0);
        assert_eq!(bound(5.0, None, None).unwrap(), 5.0);
    }

    #[test]
    fn test_bound_rejects_reversed_bounds() {
        assert!(matches!(
            bound(1.0, Some(3.0), Some(2.0)),
            Err(NumericError::BoundsReversed { .. })
        ));
        // Equal bounds pin the value.
        assert_eq!(bound(5.0, Some(2.0), Some(2.0)).unwrap(), 2.0);
    }

    #[test]
    fn test_ceil_to_examples() {
        assert_eq!(ceil_to(5.0, 2.0).unwrap(), 6.0);
        assert_eq!(ceil_to(15.0, 10.0).unwrap(), 20.0);
        assert_eq!(ceil_to(25.0, 40.0).unwrap(), 40.0);
        assert!(ceil_to(5.0, 0.0).is_err());
    }

    #[test]
    fn test_floor_to_examples() {
        assert_eq!(floor_to(19.0, 10.0).unwrap(), 10.0);
        assert_eq!(floor_to(0.99, 0.5).unwrap(), 0.5);
        assert_eq!(floor_to(101.0, 100.0).unwrap(), 100.0);
    }

    #[test]
    fn test_round_to_examples() {
        assert_eq!(round_to(7.0, 2.0).unwrap(), 8.0);
        assert_eq!(round_to(7.0, 4.0).unwrap(), 8.0);
        assert_eq!(round_to(7.0, 8.0).unwrap(), 8.0);
        assert!(round_to(7.0, -1.0).is_err());
    }

    #[test]
    fn test_normalize_examples() {
        assert!(almost_equal(normalize(1.0, 100.0).unwrap(), 0.01, 1e-12).unwrap());
        assert_eq!(normalize(50.0, 100.0).unwrap(), 0.5);
        assert_eq!(normalize(0.0, 100.0).unwrap(), 0.0);
        assert!(matches!(
            normalize(150.0, 100.0),
            Err(NumericError::AboveMax { .. })
        ));
        assert!(normalize(1.0, 0.0).is_err());
    }

    #[test]
    fn test_value_of_plain_literals() {
        assert_eq!(value_of("1"), Number::Int(1));
        assert_eq!(value_of("-5"), Number::Int(-5));
        assert_eq!(value_of("1.5"), Number::Float(1.5));
        assert_eq!(value_of("1000"), Number::Int(1000));
    }

    #[test]
    fn test_value_of_comma_numbers() {
        assert_eq!(value_of("1,000"), Number::Int(1000));
        assert_eq!(value_of("1,000.5"), Number::Float(1000.5));
        assert_eq!(value_of("1,0,0"), Number::Int(0));
    }

    #[test]
    fn test_value_of_fractions() {
        assert_eq!(value_of("3/2"), Number::Float(1.5));
        assert_eq!(value_of("3\\2"), Number::Float(1.5));
        assert_eq!(value_of("1 1/2"), Number::Float(1.5));
        assert_eq!(value_of("1/0"), Number::Int(0));
    }

    #[test]
    fn test_value_of_ordinal_suffixes() {
        assert_eq!(value_of("1st"), Number::Int(1));
        assert_eq!(value_of("22nd"), Number::Int(22));
        assert_eq!(value_of("103rd"), Number::Int(103));
        assert_eq!(value_of("1xy"), Number::Int(0));
    }

    #[test]
    fn test_value_of_number_words() {
        assert_eq!(value_of("second"), Number::Int(2));
        assert_eq!(value_of("one hundred"), Number::Int(100));
        assert_eq!(value_of("one hundred and five"), Number::Int(105));
        assert_eq!(value_of("twenty-one"), Number::Int(21));
        assert_eq!(value_of("two thousand one hundred"), Number::Int(2100));
        assert_eq!(
            value_of("one million two hundred thousand"),
            Number::Int(1_200_000)
        );
    }

    #[test]
    fn test_value_of_garbage() {
        assert_eq!(value_of("abc"), Number::Int(0));
        assert_eq!(value_of(""), Number::Int(0));
        assert_eq!(value_of("one hundred potatoes"), Number::Int(0));
        assert_eq!(value_of("inf"), Number::Int(0));
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0"));
        assert!(is_numeric("1,000"));
        assert!(is_numeric("1 1/2"));
        assert!(is_numeric("twentieth"));
        assert!(!is_numeric("abc"));
        assert!(!is_numeric(""));
    }

    #[test]
    fn test_number_helpers() {
        assert!(Number::Int(0).is_zero());
        assert!(Number::Float(0.0).is_zero());
        assert!(!Number::Int(3).is_zero());
        assert_eq!(Number::Int(2).as_f64(), 2.0);
    }
}
