//! Error types for the crate.
//!
//! One structured hierarchy using `thiserror`: each helper area gets its
//! own enum, and [`Error`] aggregates them for callers that want a single
//! result type. The diff engine defines no error type; it is total over
//! well-formed inputs.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type aggregating every helper area.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from a text helper.
    #[error("text error: {0}")]
    Text(#[from] TextError),

    /// Error from a numeric helper.
    #[error("numeric error: {0}")]
    Numeric(#[from] NumericError),

    /// Error from a boolean helper.
    #[error("boolean error: {0}")]
    Boolean(#[from] BooleanError),

    /// Error from a collection sort.
    #[error("sort error: {0}")]
    Sort(#[from] SortError),

    /// Error from a directory operation.
    #[error("directory error: {0}")]
    Dir(#[from] DirError),
}

/// Errors from the string helpers.
#[derive(Error, Debug)]
pub enum TextError {
    /// A password rule set requires more characters than the password holds.
    #[error("required character counts ({required}) exceed the password length ({length})")]
    RulesExceedLength {
        /// Total characters the rules demand.
        required: usize,
        /// Requested password length.
        length: usize,
    },

    /// A byte-shorthand string does not end in a known unit suffix.
    #[error("unknown byte-size suffix in '{input}'; expected 'k', 'm', or 'g'")]
    UnknownByteSuffix {
        /// The offending input.
        input: String,
    },

    /// A byte-shorthand string has a non-numeric prefix.
    #[error("invalid numeric prefix in byte-size string '{input}'")]
    InvalidBytePrefix {
        /// The offending input.
        input: String,
    },
}

/// Errors from the numeric helpers.
#[derive(Error, Debug)]
pub enum NumericError {
    /// Epsilon for an approximate comparison must be positive.
    #[error("epsilon should be greater than zero, got {0}")]
    NonPositiveEpsilon(f64),

    /// An upper bound below the lower bound.
    #[error("upper bound {upper} is less than lower bound {lower}")]
    BoundsReversed {
        /// The lower bound given.
        lower: f64,
        /// The upper bound given.
        upper: f64,
    },

    /// A rounding multiple must be positive and non-zero.
    #[error("multiple should be a positive, non-zero number, got {0}")]
    NonPositiveMultiple(f64),

    /// A normalization maximum must be positive.
    #[error("max should be a positive number, got {0}")]
    NonPositiveMax(f64),

    /// The number to normalize exceeds the maximum.
    #[error("number {number} is greater than max {max}")]
    AboveMax {
        /// The number being normalized.
        number: f64,
        /// The maximum it was normalized against.
        max: f64,
    },
}

/// Errors from the boolean helpers.
#[derive(Error, Debug)]
pub enum BooleanError {
    /// An unrecognized style name was given to [`crate::boolean::BoolStyle`].
    #[error("unknown boolean style '{0}'; expected a 'true-false', 'yes-no', or 'on-off' spelling")]
    UnknownStyle(String),
}

/// Errors from [`crate::collections::sort_by_field`].
#[derive(Error, Debug)]
pub enum SortError {
    /// An unrecognized sort-order name.
    #[error("unknown sort order '{0}'; expected 'asc[ending]' or 'desc[ending]'")]
    UnknownOrder(String),

    /// A row is missing the sort field.
    #[error("row {index} is missing the field '{field}'")]
    MissingField {
        /// Index of the offending row.
        index: usize,
        /// The field that was absent.
        field: String,
    },
}

/// Errors from the directory helpers.
#[derive(Error, Debug)]
pub enum DirError {
    /// The copy source is missing or not a directory.
    #[error("source should be an existing directory: {path}")]
    SourceNotDirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// The copy destination exists but is not a directory.
    #[error("destination exists and is not a directory: {path}")]
    DestinationNotDirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// The removal target is missing or not a directory.
    #[error("directory should exist: {path}")]
    MissingDirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// The removal target is not strictly inside its container.
    #[error("{path} is not inside {container}")]
    OutsideContainer {
        /// The directory that was to be removed.
        path: PathBuf,
        /// The required ancestor.
        container: PathBuf,
    },

    /// A path could not be expressed relative to a base.
    #[error("path {path} is not relative to {base}")]
    NotRelative {
        /// The path being re-rooted.
        path: PathBuf,
        /// The base it was stripped against.
        base: PathBuf,
    },

    /// A directory traversal failed part-way.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_error_display() {
        let err = TextError::RulesExceedLength {
            required: 12,
            length: 8,
        };
        assert_eq!(
            err.to_string(),
            "required character counts (12) exceed the password length (8)"
        );
    }

    #[test]
    fn test_sort_error_display() {
        let err = SortError::MissingField {
            index: 2,
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "row 2 is missing the field 'name'");
    }

    #[test]
    fn test_dir_error_wraps_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DirError::from(io);
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_top_level_aggregation() {
        let err = Error::from(NumericError::NonPositiveEpsilon(0.0));
        assert!(err.to_string().starts_with("numeric error:"));
    }
}
