use serde::{Deserialize, Serialize};

use crate::error::CsvError;

/// An ordered header plus rectangular rows of cell values.
///
/// Column order is fixed at construction and preserved through every edit
/// and serialization; rows are rejected unless their width matches the
/// header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Result<Self, CsvError> {
        if columns.is_empty() {
            return Err(CsvError::EmptyHeader);
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, CsvError> {
        let mut table = Self::new(columns)?;
        table.replace_rows(rows)?;
        Ok(table)
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), CsvError> {
        self.check_width(&row)?;
        self.rows.push(row);
        Ok(())
    }

    /// Append several rows at once. Nothing is appended unless every row
    /// has the header's width.
    pub fn append_rows(&mut self, rows: Vec<Vec<String>>) -> Result<(), CsvError> {
        for row in &rows {
            self.check_width(row)?;
        }
        self.rows.extend(rows);
        Ok(())
    }

    /// Replace all rows wholesale, keeping the original header. Nothing is
    /// replaced unless every incoming row has the header's width.
    pub fn replace_rows(&mut self, rows: Vec<Vec<String>>) -> Result<(), CsvError> {
        for row in &rows {
            self.check_width(row)?;
        }
        self.rows = rows;
        Ok(())
    }

    fn check_width(&self, row: &[String]) -> Result<(), CsvError> {
        if row.len() != self.columns.len() {
            return Err(CsvError::RowWidth {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        Ok(())
    }
}
