//! Collection helpers: wildcard membership search, key-preserving map
//! filters, permutation enumeration, and row sorting.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortError;
use crate::text;

/// Searches `haystack` for `needle`, honoring wildcard notation.
///
/// Without the wildcard character this is plain membership. A trailing
/// wildcard (`"fo*"`) matches values that start with the rest, a leading
/// wildcard (`"*oo"`) matches values that end with it, and both
/// (`"*o*"`) matches values that contain it.
///
/// ```
/// use kitbag::collections::wildcard_contains;
///
/// assert!(wildcard_contains("foo", &["foo", "bar"], '*'));
/// assert!(!wildcard_contains("qux", &["foo", "bar"], '*'));
/// assert!(wildcard_contains("fo*", &["foo", "bar"], '*'));
/// assert!(wildcard_contains("*oo", &["foo", "bar"], '*'));
/// assert!(wildcard_contains("*o*", &["foo", "bar"], '*'));
/// ```
#[must_use]
pub fn wildcard_contains<S: AsRef<str>>(needle: &str, haystack: &[S], wildcard: char) -> bool {
    if !needle.contains(wildcard) {
        return haystack.iter().any(|value| value.as_ref() == needle);
    }

    let leading = needle.starts_with(wildcard);
    let trailing = needle.ends_with(wildcard);
    let bare: String = needle.chars().filter(|&c| c != wildcard).collect();

    haystack.iter().map(AsRef::as_ref).any(|value| {
        if leading && trailing {
            value.contains(&bare)
        } else if leading {
            value.ends_with(&bare)
        } else {
            value.starts_with(&bare)
        }
    })
}

/// Keeps the entries of `map` whose key satisfies `predicate`.
#[must_use]
pub fn filter_by_key<V, F>(map: &BTreeMap<String, V>, predicate: F) -> BTreeMap<String, V>
where
    V: Clone,
    F: Fn(&str) -> bool,
{
    map.iter()
        .filter(|(key, _)| predicate(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Keeps the entries of `map` whose key starts with `prefix`.
#[must_use]
pub fn filter_by_key_prefix<V: Clone>(map: &BTreeMap<String, V>, prefix: &str) -> BTreeMap<String, V> {
    filter_by_key(map, |key| key.starts_with(prefix))
}

/// Rewrites every key of `map`, replacing occurrences of `search`
/// (case-insensitively) with `replacement`.
///
/// When two rewritten keys collide, the entry with the greater original key
/// wins.
#[must_use]
pub fn replace_in_keys<V: Clone>(
    map: &BTreeMap<String, V>,
    search: &str,
    replacement: &str,
) -> BTreeMap<String, V> {
    map.iter()
        .map(|(key, value)| {
            (
                text::replace_ignore_case(key, search, replacement),
                value.clone(),
            )
        })
        .collect()
}

/// Returns every ordering of `items`, in lexicographic order of indices.
///
/// Permutations grow with the factorial; eight items already mean 40320
/// orderings.
#[must_use]
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..items.len()).collect();
    let mut all = Vec::new();

    loop {
        all.push(order.iter().map(|&index| items[index].clone()).collect());
        if !next_permutation(&mut order) {
            break;
        }
    }

    all
}

/// Advances `order` to its lexicographic successor, returning false once the
/// sequence is fully descending.
fn next_permutation(order: &mut [usize]) -> bool {
    let len = order.len();
    if len < 2 {
        return false;
    }

    // Rightmost position that is smaller than its successor.
    let mut pivot = len - 1;
    while pivot > 0 && order[pivot - 1] >= order[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }

    // Rightmost element greater than the pivot's predecessor.
    let mut swap = len - 1;
    while order[swap] <= order[pivot - 1] {
        swap -= 1;
    }

    order.swap(pivot - 1, swap);
    order[pivot..].reverse();
    true
}

/// Sort direction for [`sort_by_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest field value first.
    Ascending,
    /// Largest field value first.
    Descending,
}

impl FromStr for SortOrder {
    type Err = SortError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(SortError::UnknownOrder(other.to_string())),
        }
    }
}

/// Sorts rows (string-keyed maps) by the value under `field`.
///
/// Every row must carry the field; the first row that does not aborts the
/// sort. The sort is stable, so rows with equal field values keep their
/// relative order.
///
/// # Errors
///
/// Returns [`SortError::MissingField`] naming the first offending row.
pub fn sort_by_field<V>(
    rows: &[BTreeMap<String, V>],
    field: &str,
    order: SortOrder,
) -> Result<Vec<BTreeMap<String, V>>, SortError>
where
    V: Ord + Clone,
{
    for (index, row) in rows.iter().enumerate() {
        if !row.contains_key(field) {
            return Err(SortError::MissingField {
                index,
                field: field.to_string(),
            });
        }
    }

    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| a.get(field).cmp(&b.get(field)));
    if order == SortOrder::Descending {
        sorted.reverse();
    }

    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> BTreeMap<String, i32> {
        BTreeMap::from([
            ("foo".to_string(), 1),
            ("baz".to_string(), 2),
            ("bar".to_string(), 3),
        ])
    }

    #[test]
    fn test_wildcard_exact_membership() {
        assert!(wildcard_contains("foo", &["foo", "bar"], '*'));
        assert!(!wildcard_contains("fo", &["foo", "bar"], '*'));
    }

    #[test]
    fn test_wildcard_affixes() {
        let haystack = ["foo", "bar"];
        assert!(wildcard_contains("fo*", &haystack, '*'));
        assert!(wildcard_contains("*oo", &haystack, '*'));
        assert!(wildcard_contains("*o*", &haystack, '*'));
        assert!(!wildcard_contains("*zz", &haystack, '*'));
    }

    #[test]
    fn test_wildcard_alone_matches_anything_nonempty() {
        assert!(wildcard_contains("*", &["x"], '*'));
    }

    #[test]
    fn test_alternate_wildcard_character() {
        assert!(wildcard_contains("fo%", &["foo"], '%'));
        assert!(!wildcard_contains("fo*", &["foo"], '%'));
    }

    #[test]
    fn test_filter_by_key() {
        let filtered = filter_by_key(&sample_map(), |key| key.starts_with('b'));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.contains_key("bar"));
        assert!(filtered.contains_key("baz"));
    }

    #[test]
    fn test_filter_by_key_prefix() {
        let filtered = filter_by_key_prefix(&sample_map(), "f");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.get("foo"), Some(&1));
    }

    #[test]
    fn test_filter_empty_map() {
        let empty: BTreeMap<String, i32> = BTreeMap::new();
        assert!(filter_by_key_prefix(&empty, "x").is_empty());
    }

    #[test]
    fn test_replace_in_keys_is_case_insensitive() {
        let map = BTreeMap::from([("FOO_bar".to_string(), 1)]);
        let replaced = replace_in_keys(&map, "foo", "qux");
        assert_eq!(replaced.get("qux_bar"), Some(&1));
    }

    #[test]
    fn test_permutations_of_three() {
        let perms = permutations(&["foo", "bar", "baz"]);
        assert_eq!(perms.len(), 6);
        assert_eq!(perms[0], vec!["foo", "bar", "baz"]);
        assert!(perms.contains(&vec!["baz", "bar", "foo"]));

        // All orderings are distinct.
        let mut seen = perms.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_permutations_of_empty_and_single() {
        assert!(permutations::<i32>(&[]).is_empty());
        assert_eq!(permutations(&[7]), vec![vec![7]]);
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert_eq!(
            "Descending".parse::<SortOrder>().unwrap(),
            SortOrder::Descending
        );
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_sort_by_field_ascending() {
        let rows = vec![
            BTreeMap::from([("a".to_string(), 3)]),
            BTreeMap::from([("a".to_string(), 1)]),
            BTreeMap::from([("a".to_string(), 2)]),
        ];
        let sorted = sort_by_field(&rows, "a", SortOrder::Ascending).unwrap();
        let values: Vec<i32> = sorted.iter().map(|row| row["a"]).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_field_descending() {
        let rows = vec![
            BTreeMap::from([("a".to_string(), 1)]),
            BTreeMap::from([("a".to_string(), 3)]),
        ];
        let sorted = sort_by_field(&rows, "a", SortOrder::Descending).unwrap();
        let values: Vec<i32> = sorted.iter().map(|row| row["a"]).collect();
        assert_eq!(values, vec![3, 1]);
    }

    #[test]
    fn test_sort_by_field_missing_field() {
        let rows = vec![
            BTreeMap::from([("a".to_string(), 1)]),
            BTreeMap::from([("b".to_string(), 2)]),
        ];
        let err = sort_by_field(&rows, "a", SortOrder::Ascending).unwrap_err();
        assert_eq!(err.to_string(), "row 1 is missing the field 'a'");
    }
}
