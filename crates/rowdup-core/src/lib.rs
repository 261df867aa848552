//! # rowdup-core
//!
//! Core data structures for the rowdup row-duplication tool.
//!
//! This crate provides the fundamental types used throughout rowdup:
//! - [`CellValue`] - Represents cell values (numbers, strings, booleans)
//! - [`ColumnRef`] - Column addressing by letters ("A", "L", "AA")
//! - [`Sheet`], [`Workbook`] - The main document structures
//! - Row duplication operations: [`Sheet::duplicate_row`] and
//!   [`Sheet::expand_by_column`]
//!
//! ## Example
//!
//! ```rust
//! use rowdup_core::{CellValue, ColumnRef, Sheet};
//!
//! let mut sheet = Sheet::new("Guests");
//! sheet.push_row(vec!["Name".into(), "Copies".into()]).unwrap();
//! sheet.push_row(vec!["Alice".into(), CellValue::Number(2.0)]).unwrap();
//!
//! // Expand every data row by its "Copies" column (B)
//! let col = ColumnRef::parse("B").unwrap();
//! let report = sheet.expand_by_column(col).unwrap();
//! assert_eq!(report.rows_after, 4); // header + Alice x3
//! ```

pub mod column;
pub mod duplicate;
pub mod error;
pub mod sheet;
pub mod value;
pub mod workbook;

// Re-exports for convenience
pub use column::ColumnRef;
pub use duplicate::{copy_count, ExpandReport};
pub use error::{Error, Result};
pub use sheet::Sheet;
pub use value::CellValue;
pub use workbook::Workbook;

/// Maximum number of rows in a sheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a sheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
