use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use polars::prelude::*;

use crate::error::EnrichError;
use crate::schema::{crosswalk, inventory};

/// Load the inventory from the `Forestree` sheet of an Excel workbook.
///
/// Required columns: genus, species
/// All columns are loaded as strings; empty cells become nulls.
/// All other columns are preserved and passed through unchanged.
pub fn load_inventory(path: impl AsRef<Path>) -> Result<DataFrame, EnrichError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook.worksheet_range(inventory::SHEET_NAME)?;
    let df = range_to_dataframe(&range)?;
    require_columns(&df, &[inventory::GENUS, inventory::SPECIES])?;
    Ok(df)
}

/// Load the crosswalk CSV.
///
/// Required columns: Genus, Species, asset_file
/// All columns are loaded as strings.
pub fn load_crosswalk(path: impl AsRef<Path>) -> Result<DataFrame, EnrichError> {
    let df = read_csv_as_strings(path)?;
    require_columns(
        &df,
        &[crosswalk::GENUS, crosswalk::SPECIES, crosswalk::ASSET_FILE],
    )?;
    Ok(df)
}

/// Read a CSV file with all columns as String dtype.
/// Trims whitespace from column names.
pub fn read_csv_as_strings(path: impl AsRef<Path>) -> Result<DataFrame, EnrichError> {
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0)) // all columns as String
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;

    let trimmed: Vec<String> = df
        .get_column_names_str()
        .iter()
        .map(|c| c.trim().to_string())
        .collect();
    df.set_column_names(trimmed.as_slice())?;

    Ok(df)
}

fn require_columns(df: &DataFrame, required: &[&str]) -> Result<(), EnrichError> {
    for &col_name in required {
        if df.column(col_name).is_err() {
            return Err(EnrichError::MissingColumn(col_name.to_string()));
        }
    }
    Ok(())
}

/// Convert a rectangular calamine cell range to a DataFrame.
///
/// The first row supplies (trimmed) column names; every data cell becomes
/// an optional string so that downstream handling matches the CSV loader.
fn range_to_dataframe(range: &Range<Data>) -> Result<DataFrame, EnrichError> {
    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| {
        EnrichError::InvalidData(format!("sheet '{}' is empty", inventory::SHEET_NAME))
    })?;

    let names: Vec<String> = header
        .iter()
        .map(|cell| cell_to_string(cell).unwrap_or_default().trim().to_string())
        .collect();

    let mut values: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
    for row in rows {
        for (i, column) in values.iter_mut().enumerate() {
            column.push(row.get(i).and_then(cell_to_string));
        }
    }

    let columns: Vec<Column> = names
        .iter()
        .zip(values)
        .map(|(name, vals)| Column::new(name.as_str().into(), vals))
        .collect();

    Ok(DataFrame::new(columns)?)
}

/// Render a spreadsheet cell as text, or None for an empty cell.
///
/// Whole-number floats are rendered without the trailing `.0` so that
/// numeric pass-through columns read back the way they were typed.
/// Datetime cells become ISO text; the raw Excel serial is only the
/// fallback for values outside the representable range.
fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 {
                Some(format!("{}", *f as i64))
            } else {
                Some(f.to_string())
            }
        }
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(
            dt.as_datetime()
                .map(|d| d.to_string())
                .unwrap_or_else(|| dt.as_f64().to_string()),
        ),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(e) => Some(format!("{e:?}")),
    }
}
