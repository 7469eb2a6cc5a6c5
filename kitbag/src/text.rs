//! String helpers: case-insensitive affix checks, splitting, byte-shorthand
//! parsing, casing, truncation, and random generation.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TextError;

/// Returns true if `haystack` starts with `needle`, ignoring case.
///
/// An empty haystack or needle never matches.
#[must_use]
pub fn starts_with_ignore_case(haystack: &str, needle: &str) -> bool {
    if haystack.is_empty() || needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().starts_with(&needle.to_lowercase())
}

/// Returns true if `haystack` ends with `needle`, ignoring case.
///
/// An empty haystack or needle never matches.
#[must_use]
pub fn ends_with_ignore_case(haystack: &str, needle: &str) -> bool {
    if haystack.is_empty() || needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().ends_with(&needle.to_lowercase())
}

/// Replaces every occurrence of `search` in `haystack` with `replacement`,
/// matching ASCII characters case-insensitively.
#[must_use]
pub fn replace_ignore_case(haystack: &str, search: &str, replacement: &str) -> String {
    if search.is_empty() {
        return haystack.to_string();
    }

    let bytes = haystack.as_bytes();
    let pattern = search.as_bytes();
    let mut result = String::with_capacity(haystack.len());
    let mut index = 0;

    while index < haystack.len() {
        if index + pattern.len() <= bytes.len()
            && bytes[index..index + pattern.len()].eq_ignore_ascii_case(pattern)
        {
            result.push_str(replacement);
            index += pattern.len();
        } else if let Some(ch) = haystack[index..].chars().next() {
            result.push(ch);
            index += ch.len_utf8();
        } else {
            break;
        }
    }

    result
}

/// Splits a string at its first ASCII letter, trimming both parts.
///
/// ```
/// use kitbag::text::split_on_first_alpha;
///
/// assert_eq!(split_on_first_alpha("123 abc"), ("123".to_string(), "abc".to_string()));
/// assert_eq!(split_on_first_alpha("abc"), (String::new(), "abc".to_string()));
/// assert_eq!(split_on_first_alpha("123"), ("123".to_string(), String::new()));
/// ```
#[must_use]
pub fn split_on_first_alpha(input: &str) -> (String, String) {
    let trimmed = input.trim();

    match trimmed.find(|c: char| c.is_ascii_alphabetic()) {
        Some(position) => (
            trimmed[..position].trim().to_string(),
            trimmed[position..].trim().to_string(),
        ),
        None => (trimmed.to_string(), String::new()),
    }
}

/// Converts a php.ini-style byte shorthand to a number of bytes:
/// `"1K"` is 1024, `"8M"` is 8388608, `"1G"` is 1073741824.
///
/// The suffix is case-insensitive; a missing numeric prefix counts as 1.
///
/// # Errors
///
/// [`TextError::UnknownByteSuffix`] when the string does not end in `k`,
/// `m`, or `g`; [`TextError::InvalidBytePrefix`] when the prefix is not an
/// unsigned integer.
pub fn parse_bytes(input: &str) -> Result<u64, TextError> {
    let trimmed = input.trim();
    let Some(last) = trimmed.chars().last() else {
        return Err(TextError::UnknownByteSuffix {
            input: input.to_string(),
        });
    };

    let unit: u64 = match last.to_ascii_lowercase() {
        'k' => 1024,
        'm' => 1024 * 1024,
        'g' => 1024 * 1024 * 1024,
        _ => {
            return Err(TextError::UnknownByteSuffix {
                input: input.to_string(),
            })
        }
    };

    let prefix = trimmed[..trimmed.len() - last.len_utf8()].trim();
    let count: u64 = if prefix.is_empty() {
        1
    } else {
        prefix.parse().map_err(|_| TextError::InvalidBytePrefix {
            input: input.to_string(),
        })?
    };

    Ok(count * unit)
}

/// Camel-cases a string: words split on hyphens, underscores, and
/// whitespace; the first word stays lower-case, the rest are capitalized;
/// anything not ASCII alphanumeric is dropped.
///
/// ```
/// use kitbag::text::to_camel_case;
///
/// assert_eq!(to_camel_case("Hello world"), "helloWorld");
/// assert_eq!(to_camel_case("H3LLO WORLD!"), "h3lloWorld");
/// assert_eq!(to_camel_case("hello_world"), "helloWorld");
/// ```
#[must_use]
pub fn to_camel_case(input: &str) -> String {
    let words = input
        .trim()
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty());

    let mut result = String::with_capacity(input.len());
    for (position, word) in words.enumerate() {
        let cleaned: String = word
            .to_lowercase()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();

        if position == 0 {
            result.push_str(&cleaned);
        } else {
            let mut chars = cleaned.chars();
            if let Some(first) = chars.next() {
                result.push(first.to_ascii_uppercase());
                result.push_str(chars.as_str());
            }
        }
    }

    result
}

/// Truncates `input` to at most `limit` bytes at a word boundary, appending
/// `"..."`. Equivalent to [`truncate_with`] with a space break and ellipsis
/// pad.
#[must_use]
pub fn truncate(input: &str, limit: usize) -> String {
    truncate_with(input, limit, Some(" "), "...")
}

/// Truncates `input` to at most `limit` bytes, then backs up to the last
/// occurrence of `break_on` (when given and present past the start), and
/// appends `pad`.
///
/// Strings already within the limit are returned unchanged, without the
/// pad. The cut never splits a UTF-8 character.
#[must_use]
pub fn truncate_with(input: &str, limit: usize, break_on: Option<&str>, pad: &str) -> String {
    if input.len() <= limit {
        return input.to_string();
    }

    let mut end = limit;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    let mut cut = &input[..end];

    if let Some(breaker) = break_on {
        if !breaker.is_empty() {
            if let Some(position) = cut.rfind(breaker) {
                if position > 0 {
                    cut = &cut[..position];
                }
            }
        }
    }

    let mut result = String::with_capacity(cut.len() + pad.len());
    result.push_str(cut);
    result.push_str(pad);
    result
}

/// Character sets available to [`random_string`] and [`password`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Lower-case ASCII letters.
    Lower,
    /// Upper-case ASCII letters.
    Upper,
    /// Both letter cases.
    Alpha,
    /// Decimal digits.
    Digit,
    /// A conservative punctuation set.
    Symbol,
}

impl Charset {
    /// The characters this set draws from.
    #[must_use]
    pub const fn chars(self) -> &'static str {
        match self {
            Self::Lower => "abcdefghijklmnopqrstuvwxyz",
            Self::Upper => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Self::Alpha => "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Self::Digit => "0123456789",
            Self::Symbol => "!@#*()-_+=[]",
        }
    }
}

/// The default password rule set: at least one lower-case letter, one
/// upper-case letter, one digit, and one symbol.
pub const DEFAULT_PASSWORD_RULES: &[(Charset, usize)] = &[
    (Charset::Lower, 1),
    (Charset::Upper, 1),
    (Charset::Digit, 1),
    (Charset::Symbol, 1),
];

/// Returns a random string of `length` characters drawn uniformly from the
/// union of `charsets`. Empty `charsets` or zero `length` yield an empty
/// string.
#[must_use]
pub fn random_string(length: usize, charsets: &[Charset]) -> String {
    let pool: Vec<char> = charsets
        .iter()
        .flat_map(|charset| charset.chars().chars())
        .collect();
    if pool.is_empty() || length == 0 {
        return String::new();
    }

    let mut rng = rand::thread_rng();
    (0..length).map(|_| pool[rng.gen_range(0..pool.len())]).collect()
}

/// Builds a random password of `length` characters satisfying `rules`, a
/// list of `(charset, minimum count)` pairs. Characters beyond the required
/// counts are drawn from letters, digits, and symbols, and the result is
/// shuffled so the rule-driven characters are not clustered.
///
/// ```
/// use kitbag::text::{password, DEFAULT_PASSWORD_RULES};
///
/// let p = password(12, DEFAULT_PASSWORD_RULES).unwrap();
/// assert_eq!(p.chars().count(), 12);
/// assert!(p.chars().any(|c| c.is_ascii_digit()));
/// ```
///
/// # Errors
///
/// [`TextError::RulesExceedLength`] when the required counts sum past
/// `length`.
pub fn password(length: usize, rules: &[(Charset, usize)]) -> Result<String, TextError> {
    let required: usize = rules.iter().map(|(_, count)| count).sum();
    if required > length {
        return Err(TextError::RulesExceedLength { required, length });
    }

    let mut chars: Vec<char> = Vec::with_capacity(length);
    for &(charset, count) in rules {
        chars.extend(random_string(count, &[charset]).chars());
    }

    let remainder = length - chars.len();
    if remainder > 0 {
        chars.extend(
            random_string(remainder, &[Charset::Alpha, Charset::Digit, Charset::Symbol]).chars(),
        );
    }

    let mut rng = rand::thread_rng();
    chars.shuffle(&mut rng);
    Ok(chars.into_iter().collect())
}
