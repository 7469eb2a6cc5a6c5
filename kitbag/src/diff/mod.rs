//! Sequence diff engine.
//!
//! Computes a longest-common-subsequence alignment between two slices and
//! emits an ordered edit script describing how to turn the first into the
//! second. Elements are compared with their own `PartialEq`; callers that
//! need a looser relation (e.g. numbers versus numeric strings) diff over a
//! common representation.
//!
//! The engine is a pure function: no shared state, no I/O, deterministic
//! output for a deterministic equality. Table memory is proportional to the
//! product of the input lengths, which is fine for the short sequences this
//! library targets (words of a sentence, lines of a small file).

mod table;

use serde::{Deserialize, Serialize};
use table::LcsTable;
use tracing::trace;

/// Per-entry tag distinguishing deleted, unchanged, and inserted elements.
///
/// Serializes as its bare integer value (`-1`, `0`, or `1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
#[repr(i8)]
pub enum Mask {
    /// Present in `from` only.
    Deleted = -1,
    /// Present in both sequences.
    Unchanged = 0,
    /// Present in `to` only.
    Inserted = 1,
}

impl Mask {
    /// The integer form of the tag.
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    /// Returns true for insertions and deletions.
    #[must_use]
    pub const fn is_change(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

impl From<Mask> for i8 {
    fn from(mask: Mask) -> Self {
        mask.as_i8()
    }
}

impl TryFrom<i8> for Mask {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Deleted),
            0 => Ok(Self::Unchanged),
            1 => Ok(Self::Inserted),
            other => Err(format!("mask must be -1, 0, or 1, got {other}")),
        }
    }
}

/// One entry of an edit script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change<T> {
    /// The element being described.
    pub value: T,
    /// Whether the element was deleted, kept, or inserted.
    pub mask: Mask,
}

/// Computes the edit script that transforms `from` into `to`.
///
/// The result is ordered left-to-right along both inputs and satisfies:
///
/// - dropping [`Mask::Deleted`] entries reproduces `to` exactly;
/// - dropping [`Mask::Inserted`] entries reproduces `from` exactly;
/// - the script length is between `max(from.len(), to.len())` and
///   `from.len() + to.len()`;
/// - the [`Mask::Unchanged`] entries form a longest common subsequence of
///   the inputs.
///
/// Where several equal-length alignments exist, the backtrack resolves ties
/// deterministically by preferring an insertion step over a deletion step.
///
/// ```
/// use kitbag::diff;
///
/// let script = diff(&["foo", "bar", "baz"], &["bar", "qux"]);
/// let masks: Vec<i8> = script.iter().map(|c| c.mask.as_i8()).collect();
/// assert_eq!(masks, vec![-1, 0, -1, 1]);
/// ```
#[must_use]
pub fn diff<T>(from: &[T], to: &[T]) -> Vec<Change<T>>
where
    T: PartialEq + Clone,
{
    let table = LcsTable::build(from, to);
    let script = table.backtrack(from, to);

    trace!(
        "diffed {} -> {} elements into {} entries ({} common)",
        from.len(),
        to.len(),
        script.len(),
        table.common_len()
    );

    script
}

/// Extracts the left-hand sequence back out of an edit script, i.e. every
/// value whose mask is not [`Mask::Inserted`], in order.
#[must_use]
pub fn reconstruct_from<T: Clone>(script: &[Change<T>]) -> Vec<T> {
    script
        .iter()
        .filter(|change| change.mask != Mask::Inserted)
        .map(|change| change.value.clone())
        .collect()
}

/// Extracts the right-hand sequence back out of an edit script, i.e. every
/// value whose mask is not [`Mask::Deleted`], in order.
#[must_use]
pub fn reconstruct_to<T: Clone>(script: &[Change<T>]) -> Vec<T> {
    script
        .iter()
        .filter(|change| change.mask != Mask::Deleted)
        .map(|change| change.value.clone())
        .collect()
}
