//! rowdup CLI - duplicate spreadsheet rows from the command line

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rowdup_core::{copy_count, CellValue, ColumnRef, Sheet, Workbook};
use rowdup_csv::{CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rowdup")]
#[command(author, version, about = "Duplicate spreadsheet rows, one at a time or per-row in bulk")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Duplicate a single row, inserting the copies right after it
    #[command(alias = "dup")]
    Duplicate {
        /// Input CSV file
        input: PathBuf,

        /// Row to duplicate (1-based, as shown in a spreadsheet)
        #[arg(short, long)]
        row: u32,

        /// Number of additional copies to create
        #[arg(short, long)]
        copies: u32,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Rewrite the whole sheet, expanding every data row by its copies column
    Expand {
        /// Input CSV file
        input: PathBuf,

        /// Column holding the per-row copy count, as letters (e.g. "L")
        #[arg(long, default_value = "L")]
        copies_column: ColumnRef,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Show information about a sheet
    Info {
        /// Input CSV file
        input: PathBuf,

        /// Column holding the per-row copy count, as letters (e.g. "L")
        #[arg(long, default_value = "L")]
        copies_column: ColumnRef,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        /// Sheet to target by name (default: the file's sheet)
        #[arg(short, long)]
        sheet: Option<String>,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Output CSV file (default: stdout)
    #[arg(short, long, conflicts_with = "in_place")]
    output: Option<PathBuf>,

    /// Rewrite the input file in place
    #[arg(long)]
    in_place: bool,

    /// Field delimiter (default: comma)
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Sheet to target by name (default: the file's sheet)
    #[arg(short, long)]
    sheet: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Duplicate {
            input,
            row,
            copies,
            common,
        } => duplicate(&input, row, copies, &common),
        Commands::Expand {
            input,
            copies_column,
            common,
        } => expand(&input, copies_column, &common),
        Commands::Info {
            input,
            copies_column,
            delimiter,
            sheet,
        } => show_info(&input, copies_column, delimiter, sheet.as_deref()),
    }
}

fn duplicate(input: &Path, row: u32, copies: u32, common: &CommonArgs) -> Result<()> {
    if row == 0 {
        bail!("Row numbers are 1-based; row 0 does not exist");
    }

    if copies == 0 {
        eprintln!("0 additional copies requested; nothing to do.");
        return Ok(());
    }

    let delimiter = delimiter_byte(common.delimiter)?;
    let mut workbook = load_workbook(input, delimiter)?;
    let sheet = select_sheet(&mut workbook, common.sheet.as_deref())?;

    let added = sheet
        .duplicate_row(row - 1, copies)
        .with_context(|| format!("Failed to duplicate row {}", row))?;

    write_output(sheet, input, common, delimiter)?;
    eprintln!(
        "Added {} copies of row {}; the sheet now has {} identical rows there.",
        added,
        row,
        added + 1
    );
    Ok(())
}

fn expand(input: &Path, copies_column: ColumnRef, common: &CommonArgs) -> Result<()> {
    let delimiter = delimiter_byte(common.delimiter)?;
    let mut workbook = load_workbook(input, delimiter)?;
    let sheet = select_sheet(&mut workbook, common.sheet.as_deref())?;

    let report = sheet
        .expand_by_column(copies_column)
        .with_context(|| format!("Failed to expand by column {}", copies_column))?;

    write_output(sheet, input, common, delimiter)?;
    eprintln!(
        "Expanded by column {}: {} rows -> {} rows ({} copies added).",
        copies_column, report.rows_before, report.rows_after, report.copies_added
    );
    Ok(())
}

fn show_info(
    input: &Path,
    copies_column: ColumnRef,
    delimiter: char,
    sheet_name: Option<&str>,
) -> Result<()> {
    let delimiter = delimiter_byte(delimiter)?;
    let mut workbook = load_workbook(input, delimiter)?;
    let sheet = select_sheet(&mut workbook, sheet_name)?;

    println!("File: {}", input.display());
    println!("Sheet: \"{}\"", sheet.name());
    println!(
        "Size: {} rows x {} columns ({} data rows)",
        sheet.row_count(),
        sheet.column_count(),
        sheet.data_row_count()
    );

    let col = copies_column.index() as usize;
    let pending: u64 = sheet
        .rows()
        .skip(1)
        .map(|row| copy_count(row.get(col).unwrap_or(&CellValue::Empty)) as u64)
        .sum();
    println!(
        "Expanding by column {} would add {} copies ({} rows total).",
        copies_column,
        pending,
        sheet.row_count() as u64 + pending
    );

    Ok(())
}

/// Load a CSV file into a single-sheet workbook named after the file stem
fn load_workbook(input: &Path, delimiter: u8) -> Result<Workbook> {
    let sheet_name = input
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty() && s.len() <= rowdup_core::MAX_SHEET_NAME_LEN)
        .unwrap_or("Sheet1")
        .to_string();

    let options = CsvReadOptions {
        delimiter,
        sheet_name,
        ..Default::default()
    };
    let sheet = CsvReader::read_file(input, &options)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    let mut workbook = Workbook::new();
    workbook.add_sheet(sheet)?;
    Ok(workbook)
}

/// Pick the target sheet: by name when given, the first sheet otherwise
fn select_sheet<'a>(workbook: &'a mut Workbook, name: Option<&str>) -> Result<&'a mut Sheet> {
    match name {
        Some(name) => Ok(workbook.sheet_by_name_mut(name)?),
        None => workbook
            .sheet_mut(0)
            .context("The workbook has no sheets"),
    }
}

/// Write the result to stdout, a file, or back over the input
fn write_output(sheet: &Sheet, input: &Path, common: &CommonArgs, delimiter: u8) -> Result<()> {
    let options = CsvWriteOptions {
        delimiter,
        ..Default::default()
    };

    if common.in_place {
        CsvWriter::write_file(sheet, input, &options)
            .with_context(|| format!("Failed to rewrite '{}'", input.display()))?;
        return Ok(());
    }

    match &common.output {
        Some(path) => CsvWriter::write_file(sheet, path, &options)
            .with_context(|| format!("Failed to write '{}'", path.display()))?,
        None => CsvWriter::write(sheet, io::stdout().lock(), &options)
            .context("Failed to write to stdout")?,
    }
    Ok(())
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    u8::try_from(delimiter)
        .map_err(|_| anyhow::anyhow!("Delimiter must be a single ASCII character"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_copies_column_defaults_to_l() {
        let cli = Cli::try_parse_from(["rowdup", "info", "guests.csv"]).unwrap();
        match cli.command {
            Commands::Info { copies_column, .. } => {
                assert_eq!(copies_column, ColumnRef::parse("L").unwrap());
            }
            _ => panic!("expected info subcommand"),
        }
    }

    #[test]
    fn test_expand_copies_column_defaults_to_l() {
        let cli = Cli::try_parse_from(["rowdup", "expand", "guests.csv"]).unwrap();
        match cli.command {
            Commands::Expand { copies_column, .. } => {
                assert_eq!(copies_column, ColumnRef::parse("L").unwrap());
            }
            _ => panic!("expected expand subcommand"),
        }
    }

    #[test]
    fn test_output_conflicts_with_in_place() {
        let result = Cli::try_parse_from([
            "rowdup", "expand", "guests.csv", "-o", "out.csv", "--in-place",
        ]);
        assert!(result.is_err());
    }
}
