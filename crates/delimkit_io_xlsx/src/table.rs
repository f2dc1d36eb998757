//! Jagged text table built from delimited records.

use log::debug;

/// Ordered rows of raw text fields.
///
/// Rows keep the field count they were split into; the table width is the
/// widest row seen so far. Short rows are never backfilled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    l_rows: Vec<Vec<String>>,
    n_width: usize,
}

impl Table {
    /// Split each record on `delimiter` and collect the fields row by row.
    ///
    /// An empty input yields an empty table (`height() == 0`, `width() == 0`);
    /// entry points that need data reject empty input before calling this.
    pub fn build<R: AsRef<str>>(records: &[R], delimiter: char) -> Self {
        Self::build_with(records, delimiter, |record| record.as_ref().to_string())
    }

    /// Like [`Self::build`], rendering each item to text with `stringify` first.
    pub fn build_with<T, F>(items: &[T], delimiter: char, stringify: F) -> Self
    where
        F: Fn(&T) -> String,
    {
        let mut table = Self {
            l_rows: Vec::with_capacity(items.len()),
            n_width: 0,
        };
        for item in items {
            table.push_record(&stringify(item), delimiter);
        }
        debug!(
            "built table: rows={} cols={} delimiter={delimiter:?}",
            table.height(),
            table.width()
        );
        table
    }

    /// Append one record as a new row, widening the table if needed.
    pub fn push_record(&mut self, record: &str, delimiter: char) {
        let l_fields: Vec<String> = record.split(delimiter).map(str::to_string).collect();
        if l_fields.len() > self.n_width {
            self.n_width = l_fields.len();
        }
        self.l_rows.push(l_fields);
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.l_rows.len()
    }

    /// Column count: the widest row so far.
    pub fn width(&self) -> usize {
        self.n_width
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.l_rows.is_empty()
    }

    /// All rows, each with its own field count.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.l_rows
    }

    /// Row at `idx`, if any.
    pub fn row(&self, idx: usize) -> Option<&[String]> {
        self.l_rows.get(idx).map(Vec::as_slice)
    }

    /// Field count of every row, in row order.
    pub fn row_widths(&self) -> Vec<usize> {
        self.l_rows.iter().map(Vec::len).collect()
    }
}
