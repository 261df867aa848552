//! End-to-end tests for the duplication pipeline (read CSV -> expand -> write)

use rowdup_core::{CellValue, ColumnRef};
use rowdup_csv::{CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};

fn expand(input: &str, copies_col: &str) -> String {
    let mut sheet = CsvReader::read(input.as_bytes(), &CsvReadOptions::default()).unwrap();
    sheet
        .expand_by_column(ColumnRef::parse(copies_col).unwrap())
        .unwrap();

    let mut buf = Vec::new();
    CsvWriter::write(&sheet, &mut buf, &CsvWriteOptions::default()).unwrap();
    String::from_utf8(buf).unwrap()
}

/// Expand a sheet by its copies column and verify the rewritten output
#[test]
fn test_expand_pipeline() {
    let input = "\
Name,Seats,Copies
Alice,2,2
Bob,1,0
Carol,4,1
";
    let expected = "\
Name,Seats,Copies
Alice,2,2
Alice,2,2
Alice,2,2
Bob,1,0
Carol,4,1
Carol,4,1
";
    assert_eq!(expand(input, "C"), expected);
}

/// Invalid counts pass the row through unexpanded
#[test]
fn test_expand_pipeline_invalid_counts() {
    let input = "\
Name,Copies
Alice,abc
Bob,-3
Carol,
";
    let expected = "\
Name,Copies
Alice,abc
Bob,-3
Carol,
";
    assert_eq!(expand(input, "B"), expected);
}

/// Single-row duplication through the CSV layer
#[test]
fn test_duplicate_pipeline() {
    let input = "Name,Copies\nAlice,\nBob,\n";
    let mut sheet = CsvReader::read(input.as_bytes(), &CsvReadOptions::default()).unwrap();

    // Row 2 on a spreadsheet is index 1 here
    let added = sheet.duplicate_row(1, 2).unwrap();
    assert_eq!(added, 2);

    let mut buf = Vec::new();
    CsvWriter::write(&sheet, &mut buf, &CsvWriteOptions::default()).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Name,Copies\nAlice,\nAlice,\nAlice,\nBob,\n"
    );
}

/// Quoted fields survive the rewrite intact
#[test]
fn test_expand_preserves_quoted_fields() {
    let input = "Name,Copies\n\"Last, First\",1\n";
    let expected = "Name,Copies\n\"Last, First\",1\n\"Last, First\",1\n";
    assert_eq!(expand(input, "B"), expected);
}

/// A row wider than the column limit is rejected at read time instead of
/// being silently truncated on the way back out
#[test]
fn test_wide_rows_rejected_not_truncated() {
    let wide = vec!["x"; rowdup_core::MAX_COLS as usize + 1].join(",");
    let input = format!("{}\n", wide);

    let result = CsvReader::read(input.as_bytes(), &CsvReadOptions::default());
    assert!(result.is_err());

    // The widest accepted row survives a rewrite field-for-field
    let at_limit = vec!["x"; rowdup_core::MAX_COLS as usize].join(",");
    let input = format!("{}\n", at_limit);
    let sheet = CsvReader::read(input.as_bytes(), &CsvReadOptions::default()).unwrap();
    assert_eq!(sheet.column_count(), rowdup_core::MAX_COLS);

    let mut buf = Vec::new();
    CsvWriter::write(&sheet, &mut buf, &CsvWriteOptions::default()).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out.trim_end().split(',').count(),
        rowdup_core::MAX_COLS as usize
    );
}

/// Values that read as numbers write back in their plain form
#[test]
fn test_types_survive_rewrite() {
    let mut sheet = CsvReader::read(
        "Name,Active,Copies\nAlice,true,1\n".as_bytes(),
        &CsvReadOptions::default(),
    )
    .unwrap();

    assert_eq!(sheet.value_at(1, 1), &CellValue::Boolean(true));
    sheet.expand_by_column(ColumnRef::parse("C").unwrap()).unwrap();

    let mut buf = Vec::new();
    CsvWriter::write(&sheet, &mut buf, &CsvWriteOptions::default()).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Name,Active,Copies\nAlice,TRUE,1\nAlice,TRUE,1\n"
    );
}
