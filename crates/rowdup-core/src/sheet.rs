//! Sheet type

use crate::error::{Error, Result};
use crate::value::CellValue;
use crate::{MAX_COLS, MAX_ROWS};

/// A single sheet of tabular data, stored row-major.
///
/// Row 0 is the header row by convention; everything after it is data.
/// Rows may be ragged (shorter than the widest row); [`Sheet::value_at`]
/// returns [`CellValue::Empty`] past the end of a row.
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Sheet name
    name: String,
    /// Rows, each a vector of cell values
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Create a new empty sheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Create a sheet from existing rows
    pub fn with_rows<S: Into<String>>(name: S, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        if rows.len() as u64 > MAX_ROWS as u64 {
            return Err(Error::TooManyRows(rows.len() as u64, MAX_ROWS));
        }
        for row in &rows {
            Self::validate_row_width(row)?;
        }
        Ok(Self {
            name: name.into(),
            rows,
        })
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Get the number of rows (header included)
    pub fn row_count(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Get the number of data rows (rows after the header)
    pub fn data_row_count(&self) -> u32 {
        self.row_count().saturating_sub(1)
    }

    /// Get the width of the widest row
    pub fn column_count(&self) -> u16 {
        // Rows are validated against MAX_COLS on the way in
        self.rows
            .iter()
            .map(|r| r.len().min(MAX_COLS as usize))
            .max()
            .unwrap_or(0) as u16
    }

    /// Check if the sheet has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by 0-based index
    pub fn row(&self, index: u32) -> Option<&[CellValue]> {
        self.rows.get(index as usize).map(|r| r.as_slice())
    }

    /// Iterate over all rows
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Get a cell value by 0-based row and column indices
    ///
    /// Returns [`CellValue::Empty`] for positions past the end of a row or
    /// past the last row.
    pub fn value_at(&self, row: u32, col: u16) -> &CellValue {
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .unwrap_or(&CellValue::Empty)
    }

    /// Set a cell value by 0-based row and column indices
    ///
    /// The row must exist; the row is padded with [`CellValue::Empty`] up to
    /// the target column if it is shorter.
    pub fn set_value_at<V: Into<CellValue>>(&mut self, row: u32, col: u16, value: V) -> Result<()> {
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        let row_count = self.row_count();
        let cells = self
            .rows
            .get_mut(row as usize)
            .ok_or(Error::RowOutOfBounds(row, row_count.saturating_sub(1)))?;

        if cells.len() <= col as usize {
            cells.resize(col as usize + 1, CellValue::Empty);
        }
        cells[col as usize] = value.into();
        Ok(())
    }

    /// Append a row to the sheet
    ///
    /// Fails with [`Error::TooManyColumns`] for rows wider than
    /// [`MAX_COLS`](crate::MAX_COLS), and with [`Error::TooManyRows`] once
    /// the sheet is at the row limit.
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<()> {
        Self::validate_row_width(&row)?;
        if self.rows.len() as u64 + 1 > MAX_ROWS as u64 {
            return Err(Error::TooManyRows(self.rows.len() as u64 + 1, MAX_ROWS));
        }
        self.rows.push(row);
        Ok(())
    }

    fn validate_row_width(row: &[CellValue]) -> Result<()> {
        if row.len() > MAX_COLS as usize {
            return Err(Error::TooManyColumns(row.len() as u64, MAX_COLS));
        }
        Ok(())
    }

    /// Take the rows out of the sheet, leaving it empty
    pub(crate) fn take_rows(&mut self) -> Vec<Vec<CellValue>> {
        std::mem::take(&mut self.rows)
    }

    /// Replace all rows in the sheet
    pub(crate) fn replace_rows(&mut self, rows: Vec<Vec<CellValue>>) {
        self.rows = rows;
    }

    /// Get mutable access to the rows (internal use)
    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<CellValue>> {
        &mut self.rows
    }
}
