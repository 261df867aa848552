//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use rowdup_core::{CellValue, Sheet};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a sheet
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a sheet
    ///
    /// Every record lands in the sheet, the header included as row 0: the
    /// duplication operations need the header carried as data, so the csv
    /// reader must not consume it.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut sheet = Sheet::new(options.sheet_name.clone());

        for result in csv_reader.records() {
            let record = result?;
            let row = record
                .iter()
                .map(|field| {
                    if options.detect_types {
                        Self::detect_type(field)
                    } else {
                        CellValue::string(field)
                    }
                })
                .collect();
            sheet.push_row(row)?;
        }

        Ok(sheet)
    }

    /// Detect the type of a field value
    ///
    /// Bare "1"/"0" stay numeric: a copies column full of 0s and 1s must not
    /// come back as booleans.
    fn detect_type(field: &str) -> CellValue {
        let trimmed = field.trim();

        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        match trimmed.to_lowercase().as_str() {
            "true" => return CellValue::Boolean(true),
            "false" => return CellValue::Boolean(false),
            _ => {}
        }

        if let Ok(n) = trimmed.parse::<f64>() {
            return CellValue::Number(n);
        }

        CellValue::string(field)
    }
}
