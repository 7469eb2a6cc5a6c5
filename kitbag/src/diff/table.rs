//! LCS alignment table construction and backtracking.
//!
//! The table is dense, `(from.len() + 1) x (to.len() + 1)`, with row 0 and
//! column 0 standing for the empty prefix so no negative indices are needed.

use super::{Change, Mask};

/// A filled longest-common-subsequence length table.
///
/// `cells[i][j]` is the LCS length of `from[..i]` and `to[..j]`.
pub(super) struct LcsTable {
    cells: Vec<Vec<usize>>,
}

impl LcsTable {
    /// Fills the table for `from` x `to` in O(n*m) time and space.
    pub(super) fn build<T: PartialEq>(from: &[T], to: &[T]) -> Self {
        let mut cells = vec![vec![0_usize; to.len() + 1]; from.len() + 1];

        for i in 0..from.len() {
            for j in 0..to.len() {
                cells[i + 1][j + 1] = if from[i] == to[j] {
                    cells[i][j] + 1
                } else {
                    cells[i][j + 1].max(cells[i + 1][j])
                };
            }
        }

        Self { cells }
    }

    /// Walks the filled table from its final cell back to the origin and
    /// returns the edit script in left-to-right order.
    ///
    /// The check order is load-bearing for determinism: an insertion step is
    /// taken whenever the cell to the left equals the current cell, a
    /// deletion step only when the insertion check failed and the cell above
    /// equals it, and a diagonal (unchanged) step only when neither neighbor
    /// matches, which is exactly the case where `from[i - 1] == to[j - 1]`
    /// contributed to the diagonal. Emissions are collected in reverse and
    /// flipped once at the end.
    pub(super) fn backtrack<T>(&self, from: &[T], to: &[T]) -> Vec<Change<T>>
    where
        T: PartialEq + Clone,
    {
        let mut script = Vec::with_capacity(from.len().max(to.len()));
        let mut i = from.len();
        let mut j = to.len();

        while i > 0 || j > 0 {
            if j > 0 && self.cells[i][j - 1] == self.cells[i][j] {
                script.push(Change {
                    value: to[j - 1].clone(),
                    mask: Mask::Inserted,
                });
                j -= 1;
            } else if i > 0 && self.cells[i - 1][j] == self.cells[i][j] {
                script.push(Change {
                    value: from[i - 1].clone(),
                    mask: Mask::Deleted,
                });
                i -= 1;
            } else {
                script.push(Change {
                    value: from[i - 1].clone(),
                    mask: Mask::Unchanged,
                });
                i -= 1;
                j -= 1;
            }
        }

        script.reverse();
        script
    }

    /// LCS length of the full sequences, i.e. the bottom-right cell.
    pub(super) fn common_len(&self) -> usize {
        self.cells
            .last()
            .and_then(|row| row.last())
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_cells_count_common_prefixes() {
        let table = LcsTable::build(&["a", "b", "c"], &["a", "c"]);
        assert_eq!(table.cells[0], vec![0, 0, 0]);
        assert_eq!(table.cells[1], vec![0, 1, 1]);
        assert_eq!(table.cells[2], vec![0, 1, 1]);
        assert_eq!(table.cells[3], vec![0, 1, 2]);
        assert_eq!(table.common_len(), 2);
    }

    #[test]
    fn test_backtrack_prefers_insertion_over_deletion() {
        // Both an insert step and a delete step are valid from the final
        // cell of this table; the insert check runs first.
        let from = vec!["a", "b"];
        let to = vec!["b", "a"];
        let table = LcsTable::build(&from, &to);
        let script = table.backtrack(&from, &to);

        assert_eq!(script[0].mask, Mask::Deleted);
        assert_eq!(script[1].mask, Mask::Unchanged);
        assert_eq!(script[2].mask, Mask::Inserted);
    }

    #[test]
    fn test_empty_table_has_no_common_elements() {
        let table = LcsTable::build::<&str>(&[], &[]);
        assert_eq!(table.common_len(), 0);
    }
}
