//! Row duplication operations

use crate::column::ColumnRef;
use crate::error::{Error, Result};
use crate::sheet::Sheet;
use crate::value::CellValue;
use crate::MAX_ROWS;

/// Summary of a full-sheet expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandReport {
    /// Row count before the rewrite (header included)
    pub rows_before: u32,
    /// Row count after the rewrite (header included)
    pub rows_after: u32,
    /// Total number of extra copies inserted
    pub copies_added: u32,
}

impl Sheet {
    /// Duplicate a single row, inserting `copies` clones immediately after it.
    ///
    /// `row` is 0-based and must address an existing row. `copies == 0` is a
    /// no-op. Returns the number of rows inserted. On error the sheet is
    /// unmodified.
    pub fn duplicate_row(&mut self, row: u32, copies: u32) -> Result<u32> {
        let row_count = self.row_count();
        if row >= row_count {
            return Err(Error::RowOutOfBounds(row, row_count.saturating_sub(1)));
        }

        if copies == 0 {
            return Ok(0);
        }

        let total = row_count as u64 + copies as u64;
        if total > MAX_ROWS as u64 {
            return Err(Error::TooManyRows(total, MAX_ROWS));
        }

        let rows = self.rows_mut();
        let source = rows[row as usize].clone();
        let at = row as usize + 1;
        rows.splice(at..at, std::iter::repeat(source).take(copies as usize));

        log::debug!("duplicated row {} x{}", row, copies);
        Ok(copies)
    }

    /// Rewrite the whole sheet, expanding every data row into 1 + N copies.
    ///
    /// N is read from `copies_col` in each row and coerced with
    /// [`copy_count`]. The header row (row 0) passes through exactly once and
    /// is never expanded. On error the sheet is unmodified.
    pub fn expand_by_column(&mut self, copies_col: ColumnRef) -> Result<ExpandReport> {
        let rows_before = self.row_count();
        let col = copies_col.index();

        // Size the rewrite up front so the limit check happens before any
        // rows move.
        let mut total: u64 = rows_before.min(1) as u64;
        let mut copies_added: u64 = 0;
        for row in self.rows().skip(1) {
            let n = copy_count(row.get(col as usize).unwrap_or(&CellValue::Empty));
            copies_added += n as u64;
            total += 1 + n as u64;
        }
        if total > MAX_ROWS as u64 {
            return Err(Error::TooManyRows(total, MAX_ROWS));
        }

        let old_rows = self.take_rows();
        let mut new_rows = Vec::with_capacity(total as usize);
        let mut iter = old_rows.into_iter();

        // Header passes through unchanged
        if let Some(header) = iter.next() {
            new_rows.push(header);
        }

        for row in iter {
            let n = copy_count(row.get(col as usize).unwrap_or(&CellValue::Empty));
            for _ in 0..n {
                new_rows.push(row.clone());
            }
            new_rows.push(row);
        }

        self.replace_rows(new_rows);

        Ok(ExpandReport {
            rows_before,
            rows_after: self.row_count(),
            copies_added: copies_added as u32,
        })
    }
}

/// Coerce a cell value to a non-negative copy count.
///
/// Numbers truncate toward zero; strings are parsed as numbers first (so
/// "3" and "3.9" both give 3). Negative values, NaN, non-numeric text,
/// booleans, and empty cells all coerce to 0.
pub fn copy_count(value: &CellValue) -> u32 {
    let n = match value {
        CellValue::Number(n) => *n,
        CellValue::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return 0;
            }
            match s.parse::<f64>() {
                Ok(n) => n,
                Err(_) => {
                    log::debug!("ignoring non-numeric copy count {:?}", s);
                    return 0;
                }
            }
        }
        _ => return 0,
    };

    if n.is_nan() || n < 0.0 {
        return 0;
    }
    // Clamp before truncating so huge values stay within the row limit check
    n.min(MAX_ROWS as f64) as u32
}
