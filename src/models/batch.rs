/// Tabular result of one (state, period) fetch.
///
/// Column names are provider-defined (case may vary between competence
/// months) and values are kept as strings, which is all the CSV output
/// needs. Row order follows the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordBatch {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RecordBatch {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (the header is not a row).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by its exact (original-cased) name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}
