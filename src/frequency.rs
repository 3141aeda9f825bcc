//! Value frequency summaries for distribution charts.

use crate::table::Table;
use foldhash::{HashMap, HashMapExt};
use serde::{Deserialize, Serialize};

/// Maximum number of entries returned by [`value_frequencies`].
pub const TOP_VALUES_LIMIT: usize = 10;

/// Label used for absent and empty cells.
pub const NULL_LABEL: &str = "null";

/// Number of rows holding one distinct value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFrequency {
    pub value: String,
    pub count: usize,
}

impl ValueFrequency {
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// Count raw values of `column`, keeping the order in which they first occur.
///
/// Null cells are counted under [`NULL_LABEL`], sharing the bucket with any
/// literal `"null"` text. Only the first [`TOP_VALUES_LIMIT`] distinct values
/// are returned and they are never re-ordered by count, so this is the
/// first-seen values rather than the most frequent ones.
///
/// Returns `None` if the table has no such column.
pub fn value_frequencies(table: &Table, column: &str) -> Option<Vec<ValueFrequency>> {
    let idx = table.column_index(column)?;
    Some(count_first_seen(
        table.rows().iter().map(|row| row.get(idx)),
        TOP_VALUES_LIMIT,
    ))
}

/// Insertion-ordered counting over raw values, truncated to `limit` keys.
pub fn count_first_seen<'a>(
    values: impl IntoIterator<Item = Option<&'a str>>,
    limit: usize,
) -> Vec<ValueFrequency> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<ValueFrequency> = Vec::new();

    for value in values {
        let key = value.filter(|v| !v.is_empty()).unwrap_or(NULL_LABEL);

        match positions.get(key) {
            Some(&pos) => counts[pos].count += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push(ValueFrequency::new(key, 1));
            }
        }
    }

    counts.truncate(limit);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(pairs: &[(&str, usize)]) -> Vec<ValueFrequency> {
        pairs.iter().map(|(v, c)| ValueFrequency::new(*v, *c)).collect()
    }

    #[test]
    fn test_first_seen_order() {
        let values = vec![Some("a"), Some("b"), Some("a"), Some("c"), None, Some("b")];
        let result = count_first_seen(values, TOP_VALUES_LIMIT);

        assert_eq!(
            result,
            freq(&[("a", 2), ("b", 2), ("c", 1), ("null", 1)])
        );
    }

    #[test]
    fn test_not_sorted_by_count() {
        let values = vec![Some("rare"), Some("common"), Some("common"), Some("common")];
        let result = count_first_seen(values, TOP_VALUES_LIMIT);

        assert_eq!(result, freq(&[("rare", 1), ("common", 3)]));
    }

    #[test]
    fn test_null_label_merges_with_literal() {
        let values = vec![Some("null"), Some(""), None, Some("x")];
        let result = count_first_seen(values, TOP_VALUES_LIMIT);

        assert_eq!(result, freq(&[("null", 3), ("x", 1)]));
    }

    #[test]
    fn test_truncated_to_limit() {
        let owned: Vec<String> = (0..25).map(|i| format!("v{i}")).collect();
        let mut values: Vec<Option<&str>> = owned.iter().map(|s| Some(s.as_str())).collect();
        // a late repeat of the first value still lands on its original slot
        values.push(Some("v0"));

        let result = count_first_seen(values, TOP_VALUES_LIMIT);

        assert_eq!(result.len(), TOP_VALUES_LIMIT);
        assert_eq!(result[0], ValueFrequency::new("v0", 2));
        assert_eq!(result[9], ValueFrequency::new("v9", 1));
    }

    #[test]
    fn test_value_frequencies_from_table() {
        let rows = vec![
            vec![Some("1".to_string()), Some("red".to_string())],
            vec![Some("2".to_string()), Some(String::new())],
            vec![Some("3".to_string())],
        ];
        let table = Table::new(["id", "color"], rows);

        assert_eq!(
            value_frequencies(&table, "color").unwrap(),
            freq(&[("red", 1), ("null", 2)])
        );
        assert!(value_frequencies(&table, "size").is_none());
    }
}
