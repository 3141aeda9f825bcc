//! In-memory representation of a parsed CSV file.

use foldhash::{HashMap, HashMapExt};

/// One row of a table.
///
/// Cells are aligned with the owning table's column list. `None` marks a cell
/// the row never supplied (the row was shorter than the header); an empty
/// cell is `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    cells: Vec<Option<String>>,
}

impl Record {
    /// Create a record from already-aligned cells.
    pub const fn new(cells: Vec<Option<String>>) -> Self {
        Self { cells }
    }

    /// Raw value at the given column position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|c| c.as_deref())
    }

    /// Number of cells, including absent ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the record has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the raw cell values in column order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.cells.iter().map(|c| c.as_deref())
    }
}

/// A parsed CSV table: ordered unique column names plus ordered records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Record>,
    index: HashMap<String, usize>,
}

impl Table {
    /// Build a table from header names and rows.
    ///
    /// Duplicate header names are renamed with a numeric suffix (`id`, `id_1`,
    /// `id_2`, ...) so that every column stays addressable by name. Rows are
    /// padded with absent cells or truncated to the header width.
    pub fn new<S: Into<String>>(
        header: impl IntoIterator<Item = S>,
        rows: impl IntoIterator<Item = Vec<Option<String>>>,
    ) -> Self {
        let mut columns = Vec::new();
        let mut index = HashMap::new();

        for name in header {
            let name = unique_name(name.into(), &index);
            index.insert(name.clone(), columns.len());
            columns.push(name);
        }

        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut cells| {
                cells.resize(width, None);
                Record::new(cells)
            })
            .collect();

        Self {
            columns,
            rows,
            index,
        }
    }

    /// Column names in header order.
    #[inline]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All records in file order.
    #[inline]
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Returns the number of rows (the header is not counted).
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name.
    #[inline]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Raw value of `column` in row `row`.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    /// All raw values of the column at `index`, one per row.
    pub fn column_values(&self, index: usize) -> Vec<Option<&str>> {
        self.rows.iter().map(|r| r.get(index)).collect()
    }

    /// All raw values of a named column, or `None` if there is no such column.
    pub fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        self.column_index(name).map(|idx| self.column_values(idx))
    }

    /// The first `limit` rows.
    pub fn head(&self, limit: usize) -> &[Record] {
        &self.rows[..limit.min(self.rows.len())]
    }
}

fn unique_name(name: String, taken: &HashMap<String, usize>) -> String {
    if !taken.contains_key(&name) {
        return name;
    }

    let mut n = 1;
    loop {
        let candidate = format!("{name}_{n}");
        if !taken.contains_key(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
