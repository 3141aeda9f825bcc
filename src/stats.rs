//! Column classification and descriptive statistics.

use crate::column_type::ColumnType;
use crate::numeric::parse_numeric;
use crate::table::Table;
use foldhash::{HashSet, HashSetExt};
use serde::{Deserialize, Serialize};

/// A column is numeric when parsed values exceed this share of the non-null
/// values, expressed as `NUMERIC_RATIO_NUM / NUMERIC_RATIO_DEN` (80%).
const NUMERIC_RATIO_NUM: usize = 4;
const NUMERIC_RATIO_DEN: usize = 5;

/// Aggregates over the values of a numeric column that parsed as numbers.
///
/// A column holding both `Infinity` and `-Infinity` has a NaN mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl NumericSummary {
    /// Compute the summary of `values`, or `None` if there are none.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut mean = values.iter().sum::<f64>() / n;
        if !mean.is_finite() && min.is_finite() && max.is_finite() {
            // the running sum overflowed; scale before adding
            mean = values.iter().map(|v| v / n).sum::<f64>();
        }
        // Rounding can push the average of identical values past its extrema.
        let mean = mean.clamp(min, max);

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            sorted[mid - 1].midpoint(sorted[mid])
        } else {
            sorted[mid]
        };

        Some(Self {
            mean,
            min,
            max,
            median,
        })
    }
}

/// Type-specific part of a column's statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColumnSummary {
    Numeric(NumericSummary),
    Text,
}

/// Read-only summary of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Column name, as it appears in the table.
    pub name: String,
    /// Total number of rows, nulls included.
    pub count: usize,
    /// Number of distinct non-null raw values.
    pub unique: usize,
    /// Number of absent or empty cells.
    pub nulls: usize,
    #[serde(flatten)]
    pub summary: ColumnSummary,
}

impl ColumnStats {
    /// The column's classification.
    pub fn column_type(&self) -> ColumnType {
        match self.summary {
            ColumnSummary::Numeric(_) => ColumnType::Numeric,
            ColumnSummary::Text => ColumnType::Text,
        }
    }

    /// Numeric aggregates, present only for numeric columns.
    pub fn numeric(&self) -> Option<&NumericSummary> {
        match &self.summary {
            ColumnSummary::Numeric(n) => Some(n),
            ColumnSummary::Text => None,
        }
    }

    /// Number of non-null values.
    #[inline]
    pub fn non_null(&self) -> usize {
        self.count - self.nulls
    }
}

/// Absent cells and exact empty strings are null; whitespace is not.
#[inline]
pub fn is_null(value: Option<&str>) -> bool {
    matches!(value, None | Some(""))
}

/// Classify a column and compute its statistics.
///
/// `values` holds one raw cell per row. The result depends only on the input.
pub fn analyze_column(name: &str, values: &[Option<&str>]) -> ColumnStats {
    let mut distinct: HashSet<&str> = HashSet::new();
    let mut parsed = Vec::new();
    let mut non_null = 0;

    for value in values.iter().copied() {
        let Some(raw) = value.filter(|v| !v.is_empty()) else {
            continue;
        };
        non_null += 1;
        distinct.insert(raw);
        if let Some(n) = parse_numeric(raw) {
            parsed.push(n);
        }
    }

    let is_numeric = parsed.len() * NUMERIC_RATIO_DEN > non_null * NUMERIC_RATIO_NUM;
    let summary = if is_numeric {
        NumericSummary::compute(&parsed).map_or(ColumnSummary::Text, ColumnSummary::Numeric)
    } else {
        ColumnSummary::Text
    };

    tracing::trace!(
        column = name,
        non_null,
        parsed = parsed.len(),
        numeric = is_numeric,
        "classified column"
    );

    ColumnStats {
        name: name.to_string(),
        count: values.len(),
        unique: distinct.len(),
        nulls: values.len() - non_null,
        summary,
    }
}

/// Compute statistics for every column of `table`, in column order.
pub fn analyze_table(table: &Table) -> Vec<ColumnStats> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, name)| analyze_column(name, &table.column_values(idx)))
        .collect()
}
