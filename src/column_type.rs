use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// More than 80% of the non-null values parse as numbers.
    Numeric,
    /// Anything else, including columns with no non-null values.
    #[default]
    Text,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Numeric => write!(f, "numeric"),
            ColumnType::Text => write!(f, "text"),
        }
    }
}

impl ColumnType {
    /// Returns true if this type is numeric.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ColumnType::Numeric.to_string(), "numeric");
        assert_eq!(ColumnType::Text.to_string(), "text");
        assert_eq!(ColumnType::default(), ColumnType::Text);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&ColumnType::Numeric).unwrap(),
            "\"numeric\""
        );
        let parsed: ColumnType = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(parsed, ColumnType::Text);
    }
}
