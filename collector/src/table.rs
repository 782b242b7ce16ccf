//! Ordered, flat tables of records with CSV and JSON export.

use eyre::Context;
use serde::Serialize;
use std::io;

/// A flat row type with a fixed set of named columns.
///
/// `COLUMNS` must list the serialized field names in declaration order, so that the CSV header
/// lines up with the values `serde` writes.
pub trait Record: Serialize {
    const COLUMNS: &'static [&'static str];
}

/// Rows of one record type, in the order they were collected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R> Table<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }
}

impl<R: Record> Table<R> {
    /// The column names, in output order.
    pub fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    /// Writes the table as CSV, header first.
    ///
    /// The header is written even when there are no rows.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> eyre::Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv_writer
            .write_record(R::COLUMNS)
            .context("write CSV header")?;
        for row in &self.rows {
            csv_writer.serialize(row).context("write CSV row")?;
        }
        csv_writer.flush().context("flush CSV output")?;
        Ok(())
    }

    /// Writes the table as a pretty-printed JSON array of objects.
    pub fn write_json<W: io::Write>(&self, writer: W) -> eyre::Result<()> {
        serde_json::to_writer_pretty(writer, &self.rows).context("write JSON table")
    }
}

impl<R> From<Vec<R>> for Table<R> {
    fn from(rows: Vec<R>) -> Self {
        Self::new(rows)
    }
}

impl<R> FromIterator<R> for Table<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R> IntoIterator for Table<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
