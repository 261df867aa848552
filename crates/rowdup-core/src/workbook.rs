//! Workbook type - an ordered collection of sheets

use crate::error::{Error, Result};
use crate::sheet::Sheet;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook holding one or more sheets.
///
/// Sheet names are unique within a workbook; operations that target a sheet
/// by name fail with [`Error::SheetNotFound`] when it is missing.
#[derive(Debug, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create an empty workbook with no sheets
    pub fn new() -> Self {
        Self { sheets: Vec::new() }
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the workbook has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a mutable sheet by index
    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    /// Get a sheet by name, failing if it does not exist
    pub fn sheet_by_name(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))
    }

    /// Get a mutable sheet by name, failing if it does not exist
    pub fn sheet_by_name_mut(&mut self, name: &str) -> Result<&mut Sheet> {
        self.sheets
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))
    }

    /// Get the index of a sheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.sheets.iter().position(|s| s.name() == name)
    }

    /// Iterate over all sheets
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Add an existing sheet to the workbook
    pub fn add_sheet(&mut self, sheet: Sheet) -> Result<usize> {
        self.validate_sheet_name(sheet.name())?;
        let index = self.sheets.len();
        self.sheets.push(sheet);
        Ok(index)
    }

    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() || name.len() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(name.to_string()));
        }
        if self.sheet_index(name).is_some() {
            return Err(Error::DuplicateSheetName(name.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_find() {
        let mut wb = Workbook::new();
        assert!(wb.is_empty());

        wb.add_sheet(Sheet::new("Guests")).unwrap();
        wb.add_sheet(Sheet::new("Other")).unwrap();

        assert_eq!(wb.sheet_count(), 2);
        assert_eq!(wb.sheet_by_name("Guests").unwrap().name(), "Guests");
        assert_eq!(wb.sheet_index("Other"), Some(1));
        assert!(matches!(
            wb.sheet_by_name("Missing"),
            Err(Error::SheetNotFound(_))
        ));
    }

    #[test]
    fn test_sheet_name_validation() {
        let mut wb = Workbook::new();
        wb.add_sheet(Sheet::new("Guests")).unwrap();

        assert!(matches!(
            wb.add_sheet(Sheet::new("Guests")),
            Err(Error::DuplicateSheetName(_))
        ));
        assert!(matches!(
            wb.add_sheet(Sheet::new("")),
            Err(Error::InvalidSheetName(_))
        ));
        assert!(matches!(
            wb.add_sheet(Sheet::new("a".repeat(32))),
            Err(Error::InvalidSheetName(_))
        ));
    }
}
