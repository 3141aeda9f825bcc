//! csv-glance: per-column descriptive statistics for CSV files
//!
//! Loads a CSV file with a header row, classifies every column as numeric or
//! text, and computes count, uniqueness, null count and, for numeric columns,
//! mean, min, max and median.
//!
//! # Quick Start
//!
//! ```no_run
//! use csv_glance::{ColumnSummary, Session};
//!
//! let mut session = Session::new();
//! let analysis = session.load_path("data.csv").unwrap();
//!
//! println!("{} ({} rows)", analysis.file_name(), analysis.row_count());
//! for stats in analysis.column_stats() {
//!     print!("{}: {} nulls={}", stats.name, stats.column_type(), stats.nulls);
//!     if let ColumnSummary::Numeric(n) = &stats.summary {
//!         print!(" mean={:.2} median={:.2}", n.mean, n.median);
//!     }
//!     println!();
//! }
//! ```
//!
//! # Classification
//!
//! A value is null when it is absent (the row was too short) or exactly the
//! empty string. Every other value is parsed with a lenient numeric prefix
//! parse, so `"42kg"` reads as `42`. A column is numeric when strictly more
//! than 80% of its non-null values parse; the numeric aggregates only cover
//! the values that did.
//!
//! ```
//! use csv_glance::{analyze_column, ColumnType};
//!
//! let stats = analyze_column("weight", &[Some("5kg"), Some("7"), Some(""), None]);
//! assert_eq!(stats.column_type(), ColumnType::Numeric);
//! assert_eq!(stats.nulls, 2);
//! assert_eq!(stats.numeric().unwrap().median, 6.0);
//! ```

mod column_type;
mod encoding;
mod error;
mod frequency;
mod numeric;
mod reader;
mod session;
mod stats;
mod table;

pub use column_type::ColumnType;
pub use error::{GlanceError, Result};
pub use frequency::{NULL_LABEL, TOP_VALUES_LIMIT, ValueFrequency, count_first_seen, value_frequencies};
pub use numeric::{NumericPrefix, parse_numeric, parse_numeric_prefix};
pub use reader::{Quote, TableReader};
pub use session::{Analysis, PREVIEW_ROWS, Session};
pub use stats::{ColumnStats, ColumnSummary, NumericSummary, analyze_column, analyze_table, is_null};
pub use table::{Record, Table};

// Re-export for advanced usage
pub use encoding::{Decoded, decode, is_utf8};
