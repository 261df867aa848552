//! Column addressing by letters

use crate::error::{Error, Result};
use crate::MAX_COLS;
use std::fmt;
use std::str::FromStr;

/// A validated column reference (0-based index, A=0, B=1, ..., XFD=16383)
///
/// Parsed from spreadsheet-style column letters, case-insensitive:
///
/// ```
/// use rowdup_core::ColumnRef;
///
/// assert_eq!(ColumnRef::parse("A").unwrap().index(), 0);
/// assert_eq!(ColumnRef::parse("L").unwrap().index(), 11);
/// assert_eq!(ColumnRef::parse("aa").unwrap().index(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnRef(u16);

impl ColumnRef {
    /// Create a column reference from a 0-based index
    pub fn new(index: u16) -> Result<Self> {
        if index >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(index, MAX_COLS - 1));
        }
        Ok(Self(index))
    }

    /// Parse column letters into a reference (A = 0, Z = 25, AA = 26, etc.)
    pub fn parse(letters: &str) -> Result<Self> {
        let letters = letters.trim();
        if letters.is_empty() {
            return Err(Error::InvalidColumn("empty column letters".into()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidColumn(format!(
                    "invalid column letter '{}' in '{}'",
                    c, letters
                )));
            }
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
            if col > MAX_COLS as u32 {
                return Err(Error::InvalidColumn(format!(
                    "column '{}' out of bounds",
                    letters
                )));
            }
        }

        // Convert to 0-based
        Ok(Self((col - 1) as u16))
    }

    /// Get the 0-based column index
    pub fn index(self) -> u16 {
        self.0
    }

    /// Convert the index back to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn to_letters(self) -> String {
        let mut result = String::new();
        let mut n = self.0 as u32 + 1; // 1-based for calculation

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_letters())
    }
}

impl FromStr for ColumnRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
