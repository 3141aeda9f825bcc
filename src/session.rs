//! Per-file analysis and the session that owns it.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::frequency::{ValueFrequency, value_frequencies};
use crate::reader::TableReader;
use crate::stats::{ColumnStats, analyze_table};
use crate::table::{Record, Table};

/// Default number of rows shown in a preview.
pub const PREVIEW_ROWS: usize = 10;

/// Everything derived from one loaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    file_name: String,
    table: Table,
    column_stats: Vec<ColumnStats>,
}

impl Analysis {
    /// Analyze every column of `table`.
    pub fn from_table(file_name: impl Into<String>, table: Table) -> Self {
        let column_stats = analyze_table(&table);
        Self {
            file_name: file_name.into(),
            table,
            column_stats,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Statistics for each column, in column order.
    pub fn column_stats(&self) -> &[ColumnStats] {
        &self.column_stats
    }

    pub fn row_count(&self) -> usize {
        self.table.num_rows()
    }

    /// First-seen value counts of a column; see [`value_frequencies`].
    pub fn distribution(&self, column: &str) -> Option<Vec<ValueFrequency>> {
        value_frequencies(&self.table, column)
    }

    /// The first `limit` rows of the table.
    pub fn preview(&self, limit: usize) -> &[Record] {
        self.table.head(limit)
    }
}

/// Holds the analysis of the most recently loaded file.
///
/// Each successful load replaces the previous analysis as a whole; a failed
/// load leaves it in place.
#[derive(Debug, Clone, Default)]
pub struct Session {
    reader: TableReader,
    current: Option<Analysis>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session that loads files with the given reader settings.
    pub fn with_reader(reader: TableReader) -> Self {
        Self {
            reader,
            current: None,
        }
    }

    /// Reader settings, for adjusting before the next load.
    pub fn reader_mut(&mut self) -> &mut TableReader {
        &mut self.reader
    }

    /// The current analysis, if a file has been loaded.
    pub fn current(&self) -> Option<&Analysis> {
        self.current.as_ref()
    }

    /// Load and analyze a file from disk.
    ///
    /// The file name recorded in the analysis is the last path component.
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<&Analysis> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        let table = self.reader.read_path(path).inspect_err(|e| {
            debug!(file = %path.display(), error = %e, "load failed, keeping previous analysis");
        })?;
        Ok(self.replace(file_name, table))
    }

    /// Load and analyze in-memory CSV data.
    pub fn load_bytes(&mut self, file_name: impl Into<String>, data: &[u8]) -> Result<&Analysis> {
        let file_name = file_name.into();
        let table = self.reader.read_bytes(data).inspect_err(|e| {
            debug!(file = %file_name, error = %e, "load failed, keeping previous analysis");
        })?;
        Ok(self.replace(file_name, table))
    }

    /// Drop the current analysis.
    pub fn clear(&mut self) {
        self.current = None;
    }

    fn replace(&mut self, file_name: String, table: Table) -> &Analysis {
        debug!(file = %file_name, rows = table.num_rows(), "replacing analysis");
        self.current.insert(Analysis::from_table(file_name, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column_type::ColumnType;

    #[test]
    fn test_analysis_from_table() {
        let table = TableReader::new()
            .read_bytes(b"id,city\n1,Oslo\n2,\n3,Oslo\n")
            .unwrap();
        let analysis = Analysis::from_table("cities.csv", table);

        assert_eq!(analysis.file_name(), "cities.csv");
        assert_eq!(analysis.row_count(), 3);
        assert_eq!(analysis.column_stats().len(), 2);
        assert_eq!(analysis.column_stats()[0].column_type(), ColumnType::Numeric);
        assert_eq!(analysis.column_stats()[1].unique, 1);
        assert_eq!(analysis.preview(2).len(), 2);

        let dist = analysis.distribution("city").unwrap();
        assert_eq!(dist, vec![ValueFrequency::new("Oslo", 2), ValueFrequency::new("null", 1)]);
    }

    #[test]
    fn test_load_replaces_previous() {
        let mut session = Session::new();
        session.load_bytes("first.csv", b"a,b\n1,2\n3,4\n5,6\n").unwrap();
        session.load_bytes("second.csv", b"z\nq\n").unwrap();

        let current = session.current().unwrap();
        assert_eq!(current.file_name(), "second.csv");
        assert_eq!(current.table().columns(), &["z"]);
        assert_eq!(current.row_count(), 1);
        assert_eq!(current.column_stats().len(), 1);
    }

    #[test]
    fn test_failed_load_keeps_previous() {
        let mut session = Session::new();
        session.load_bytes("good.csv", b"a\n1\n").unwrap();

        assert!(session.load_bytes("bad.csv", b"").is_err());
        assert_eq!(session.current().unwrap().file_name(), "good.csv");

        session.clear();
        assert!(session.current().is_none());
    }

    #[test]
    fn test_reader_settings_apply_to_loads() {
        let mut session = Session::new();
        session.reader_mut().delimiter(b'|');
        let analysis = session.load_bytes("pipes.csv", b"a|b\n1|2\n").unwrap();

        assert_eq!(analysis.table().columns(), &["a", "b"]);
    }
}
