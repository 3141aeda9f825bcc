//! CSV ingestion: raw bytes to [`Table`].

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::encoding::decode;
use crate::error::{GlanceError, Result};
use crate::table::Table;

/// Quote character configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    /// No quoting.
    None,
    /// Quote with the specified character.
    Some(u8),
}

impl Default for Quote {
    fn default() -> Self {
        Quote::Some(b'"')
    }
}

impl Quote {
    /// Returns the quote character if set.
    pub fn char(&self) -> Option<u8> {
        match self {
            Quote::None => None,
            Quote::Some(c) => Some(*c),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quote::None => write!(f, "none"),
            Quote::Some(c) => write!(f, "{}", *c as char),
        }
    }
}

/// Loads CSV data with a header row into a [`Table`].
///
/// # Example
///
/// ```no_run
/// use csv_glance::{Quote, TableReader};
///
/// let mut reader = TableReader::new();
/// reader.delimiter(b';').quote(Quote::None);
///
/// let table = reader.read_path("data.csv").unwrap();
/// println!("{} rows, columns: {:?}", table.num_rows(), table.columns());
/// ```
#[derive(Debug, Clone)]
pub struct TableReader {
    /// Field delimiter.
    delimiter: u8,
    /// Quote character configuration.
    quote: Quote,
    /// Stop after this many data records.
    max_records: Option<usize>,
}

impl Default for TableReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TableReader {
    /// Create a reader for comma-delimited, double-quoted CSV.
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            quote: Quote::Some(b'"'),
            max_records: None,
        }
    }

    /// Set the field delimiter.
    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character.
    pub fn quote(&mut self, quote: Quote) -> &mut Self {
        self.quote = quote;
        self
    }

    /// Limit the number of data records read (`None` reads everything).
    pub fn max_records(&mut self, max_records: Option<usize>) -> &mut Self {
        self.max_records = max_records;
        self
    }

    /// Read a CSV file at the given path.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        let file = File::open(path.as_ref())?;
        self.read_reader(BufReader::new(file))
    }

    /// Read CSV data from a reader.
    pub fn read_reader<R: Read>(&self, mut reader: R) -> Result<Table> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.read_bytes(&data)
    }

    /// Read CSV data from bytes.
    pub fn read_bytes(&self, data: &[u8]) -> Result<Table> {
        self.validate()?;

        if data.is_empty() {
            return Err(GlanceError::EmptyData);
        }

        let decoded = decode(data);
        debug!(
            encoding = decoded.encoding.name(),
            transcoded = decoded.was_transcoded(),
            bom = decoded.had_bom,
            "decoded input"
        );

        let text = decoded.text.as_bytes();
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true);

        match self.quote {
            Quote::None => {
                builder.quoting(false);
            }
            Quote::Some(q) => {
                builder.quoting(true);
                builder.quote(q);
            }
        }

        let mut reader = builder.from_reader(text);
        let header = reader.headers()?.clone();
        if header.is_empty() {
            return Err(GlanceError::EmptyData);
        }

        let limit = self.max_records.unwrap_or(usize::MAX);
        let mut rows: Vec<Vec<Option<String>>> =
            Vec::with_capacity(bytecount::count(text, b'\n').min(limit));
        let mut record = csv::StringRecord::new();

        while rows.len() < limit && reader.read_record(&mut record)? {
            rows.push(record.iter().map(|f| Some(f.to_string())).collect());
        }

        let table = Table::new(header.iter(), rows);
        debug!(
            columns = table.num_columns(),
            rows = table.num_rows(),
            "parsed table"
        );

        Ok(table)
    }

    fn validate(&self) -> Result<()> {
        if matches!(self.delimiter, b'\n' | b'\r') {
            return Err(GlanceError::InvalidConfig(
                "delimiter cannot be a line terminator".to_string(),
            ));
        }
        if self.quote.char() == Some(self.delimiter) {
            return Err(GlanceError::InvalidConfig(format!(
                "delimiter and quote are both {:?}",
                self.delimiter as char
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_builder() {
        let mut reader = TableReader::new();
        reader
            .delimiter(b';')
            .quote(Quote::None)
            .max_records(Some(5));

        assert_eq!(reader.delimiter, b';');
        assert_eq!(reader.quote, Quote::None);
        assert_eq!(reader.max_records, Some(5));
    }

    #[test]
    fn test_read_simple() {
        let table = TableReader::new()
            .read_bytes(b"name,age\nAlice,30\nBob,25\n")
            .unwrap();

        assert_eq!(table.columns(), &["name", "age"]);
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.value(1, "age"), Some("25"));
    }

    #[test]
    fn test_read_quoted_and_untrimmed() {
        let table = TableReader::new()
            .read_bytes(b"a,b\n\"x, y\", z \n")
            .unwrap();

        assert_eq!(table.value(0, "a"), Some("x, y"));
        assert_eq!(table.value(0, "b"), Some(" z "));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = TableReader::new()
            .read_bytes(b"a,b\n1,2\n\n3,4\n\n")
            .unwrap();

        assert_eq!(table.num_rows(), 2);
    }

    #[test]
    fn test_ragged_rows() {
        let table = TableReader::new()
            .read_bytes(b"a,b,c\n1,2\n1,2,3,4\n")
            .unwrap();

        assert_eq!(table.value(0, "c"), None);
        assert_eq!(table.value(1, "c"), Some("3"));
        assert_eq!(table.rows()[1].len(), 3);
    }

    #[test]
    fn test_max_records() {
        let mut reader = TableReader::new();
        reader.max_records(Some(2));
        let table = reader.read_bytes(b"n\n1\n2\n3\n4\n").unwrap();

        assert_eq!(table.num_rows(), 2);
    }

    #[test]
    fn test_header_only() {
        let table = TableReader::new().read_bytes(b"a,b\n").unwrap();

        assert_eq!(table.num_columns(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let reader = TableReader::new();

        assert!(matches!(reader.read_bytes(b""), Err(GlanceError::EmptyData)));
        assert!(matches!(reader.read_bytes(b"\n\n"), Err(GlanceError::EmptyData)));
    }

    #[test]
    fn test_invalid_config() {
        let mut reader = TableReader::new();
        reader.delimiter(b'"');

        assert!(matches!(
            reader.read_bytes(b"a\n1\n"),
            Err(GlanceError::InvalidConfig(_))
        ));
    }
}
