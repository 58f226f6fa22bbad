//! CSV table source.
//!
//! Reads a delimited text file with a header row into a [`Table`]. Cell
//! typing is deterministic and purely local: `true`/`false` become
//! booleans, integer strings become integers, the empty string becomes
//! null, and everything else (names, dates, free text) stays a string.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::TabularError;
use crate::table::{Table, Value};

/// Reads a CSV table from any reader. The first record is the header row
/// and becomes the column list, order preserved.
///
/// # Errors
///
/// Returns [`TabularError::Csv`] when the input is not well-formed CSV.
pub fn read_csv<R: Read>(reader: R) -> Result<Table, TabularError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(ToOwned::to_owned)
        .collect();
    let mut table = Table::new(columns);

    for record in csv_reader.records() {
        let record = record?;
        let row: Vec<Value> = record.iter().map(parse_cell).collect();
        table.push_row(row)?;
    }
    Ok(table)
}

/// Reads a CSV table from a file path.
///
/// # Errors
///
/// Returns [`TabularError::Io`] when the file cannot be opened and
/// [`TabularError::Csv`] when its content is not well-formed CSV.
pub fn read_csv_file(path: &Path) -> Result<Table, TabularError> {
    let file = File::open(path).map_err(|source| TabularError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file)
}

/// Types a single raw cell.
fn parse_cell(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Int(i);
    }
    Value::Str(raw.to_owned())
}
