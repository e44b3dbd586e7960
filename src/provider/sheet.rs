//! # Spreadsheet Tables
//!
//! The tabular layout a spreadsheet-backed provider reads: a header row
//! followed by data rows whose columns are declared by a schema of
//! [`SheetField`]s.
//!
//! The host's drive and spreadsheet APIs are modelled by [`Drive`],
//! [`Spreadsheet`] and [`Sheet`], so the reading logic can run anywhere.
//! [`InMemoryDrive`] is the implementation used by tests and demos.

use crate::error::ProviderError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

/// Declared type of a sheet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Number,
    String,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Number => f.write_str("number"),
            FieldType::String => f.write_str("string"),
        }
    }
}

/// One column of a sheet schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetField {
    pub field: &'static str,
    pub field_type: FieldType,
}

impl SheetField {
    pub const fn new(field: &'static str, field_type: FieldType) -> Self {
        Self { field, field_type }
    }
}

/// A raw cell as the host hands it over.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// A named grid of cells. Row 0 is the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

/// A spreadsheet file holding one or more sheets.
#[derive(Debug, Clone, PartialEq)]
pub struct Spreadsheet {
    pub name: String,
    pub sheets: Vec<Sheet>,
}

impl Spreadsheet {
    pub fn new(name: impl Into<String>, sheets: Vec<Sheet>) -> Self {
        Self {
            name: name.into(),
            sheets,
        }
    }

    /// First sheet whose name matches exactly.
    pub fn sheet_by_name(&self, sheet_name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == sheet_name)
    }
}

/// Lists the spreadsheet files visible to the script.
pub trait Drive: Send + Sync {
    fn spreadsheets(&self) -> &[Spreadsheet];
}

/// A [`Drive`] backed by a plain vector.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDrive {
    files: Vec<Spreadsheet>,
}

impl InMemoryDrive {
    pub fn new(files: Vec<Spreadsheet>) -> Self {
        Self { files }
    }
}

impl Drive for InMemoryDrive {
    fn spreadsheets(&self) -> &[Spreadsheet] {
        &self.files
    }
}

/// First spreadsheet whose file name (without extension) matches exactly.
pub fn get_spreadsheet_by_name<'a>(
    drive: &'a dyn Drive,
    file_name: &str,
) -> Option<&'a Spreadsheet> {
    drive.spreadsheets().iter().find(|doc| doc.name == file_name)
}

/// Converts a cell to the column's declared type.
///
/// Numbers keep only their integer part, rendered as decimal text, so ids
/// typed as numbers in the sheet still land in string-typed record fields.
///
/// # Errors
/// [`ProviderError::Cast`] when a `number` column holds something that is not
/// a number.
pub fn to_cast(value: &CellValue, field: &SheetField) -> Result<Value, ProviderError> {
    match field.field_type {
        FieldType::String => Ok(Value::String(value.to_string())),
        FieldType::Number => {
            let number = match value {
                CellValue::Number(n) => Some(*n),
                CellValue::Text(s) => parse_leading_number(s),
                CellValue::Empty | CellValue::Bool(_) => None,
            };
            match number {
                Some(n) if n.is_finite() => Ok(Value::String(render_integer_part(n))),
                _ => Err(ProviderError::Cast {
                    field: field.field.to_string(),
                    field_type: field.field_type.to_string(),
                    value: value.to_string(),
                }),
            }
        }
    }
}

// Accepts a numeric prefix ("42px" -> 42), the way host spreadsheets coerce text.
fn parse_leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let end = trimmed
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    trimmed[..end].parse::<f64>().ok()
}

// Integer part as plain decimal, at any magnitude. `-0` renders as `0`.
fn render_integer_part(n: f64) -> String {
    let whole = n.trunc();
    if whole == 0.0 {
        "0".to_string()
    } else {
        format!("{whole:.0}")
    }
}

/// Reads every data row of `sheet` into `T`, mapping column `i` to `scheme[i]`.
///
/// The header row is skipped. Cells missing at the end of a short row read as
/// empty.
///
/// # Errors
/// [`ProviderError::Cast`] for a bad cell, [`ProviderError::Record`] when a row
/// does not fit `T`.
pub fn get_sheet_records<T: DeserializeOwned>(
    sheet: &Sheet,
    scheme: &[SheetField],
) -> Result<Vec<T>, ProviderError> {
    let empty = CellValue::Empty;
    sheet
        .rows
        .iter()
        .skip(1)
        .map(|row| {
            let mut object = Map::new();
            for (i, field) in scheme.iter().enumerate() {
                let cell = row.get(i).unwrap_or(&empty);
                object.insert(field.field.to_string(), to_cast(cell, field)?);
            }
            serde_json::from_value(Value::Object(object))
                .map_err(|e| ProviderError::Record(e.to_string()))
        })
        .collect()
}

/// Opens `file_name` on `drive` and reads the sheet `sheet_name` into `T`.
///
/// # Errors
/// [`ProviderError::SpreadsheetNotFound`], [`ProviderError::SheetNotFound`], or
/// any error from [`get_sheet_records`].
pub fn get_spreadsheet_records<T: DeserializeOwned>(
    drive: &dyn Drive,
    file_name: &str,
    sheet_name: &str,
    scheme: &[SheetField],
) -> Result<Vec<T>, ProviderError> {
    let spreadsheet = get_spreadsheet_by_name(drive, file_name)
        .ok_or_else(|| ProviderError::SpreadsheetNotFound(file_name.to_string()))?;
    let sheet = spreadsheet
        .sheet_by_name(sheet_name)
        .ok_or_else(|| ProviderError::SheetNotFound(sheet_name.to_string()))?;
    debug!(file_name, sheet_name, rows = sheet.rows.len(), "Reading sheet");
    get_sheet_records(sheet, scheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Accounts;
    use crate::resource::Resource;

    const NUMBER_ID: SheetField = SheetField::new("id", FieldType::Number);

    fn accounts_drive() -> InMemoryDrive {
        let sheet = Sheet::new(
            "accounts",
            vec![
                vec!["id".into(), "name".into()],
                vec![CellValue::Number(1.0), "Alice".into()],
                vec![CellValue::Number(2.0), "Bob".into()],
            ],
        );
        InMemoryDrive::new(vec![
            Spreadsheet::new("other", vec![]),
            Spreadsheet::new("db", vec![Sheet::new("tasks", vec![]), sheet]),
        ])
    }

    #[test]
    fn test_to_cast_number_truncates() {
        assert_eq!(to_cast(&CellValue::Number(12.9), &NUMBER_ID).unwrap(), "12");
        assert_eq!(to_cast(&CellValue::Number(-3.7), &NUMBER_ID).unwrap(), "-3");
        assert_eq!(to_cast(&"42px".into(), &NUMBER_ID).unwrap(), "42");
    }

    #[test]
    fn test_to_cast_number_keeps_large_values() {
        let expected = "100000000000000000000";
        assert_eq!(to_cast(&CellValue::Number(1e20), &NUMBER_ID).unwrap(), expected);
        assert_eq!(to_cast(&"99999999999999999999".into(), &NUMBER_ID).unwrap(), expected);
        assert_eq!(to_cast(&CellValue::Number(-0.5), &NUMBER_ID).unwrap(), "0");
    }

    #[test]
    fn test_to_cast_number_rejects_text() {
        let err = to_cast(&"abc".into(), &NUMBER_ID).unwrap_err();
        assert!(matches!(err, ProviderError::Cast { ref field, .. } if field == "id"));
        assert!(to_cast(&CellValue::Empty, &NUMBER_ID).is_err());
    }

    #[test]
    fn test_to_cast_string_renders_cell() {
        let field = SheetField::new("name", FieldType::String);
        assert_eq!(to_cast(&CellValue::Number(7.0), &field).unwrap(), "7");
        assert_eq!(to_cast(&CellValue::Bool(true), &field).unwrap(), "true");
        assert_eq!(to_cast(&CellValue::Empty, &field).unwrap(), "");
    }

    #[test]
    fn test_get_spreadsheet_records_reads_rows_after_header() {
        let drive = accounts_drive();
        let rows: Vec<Accounts> =
            get_spreadsheet_records(&drive, "db", "accounts", Resource::Accounts.scheme()).unwrap();
        assert_eq!(rows, vec![Accounts::new("1", "Alice"), Accounts::new("2", "Bob")]);
    }

    #[test]
    fn test_short_rows_read_as_empty() {
        let sheet = Sheet::new("accounts", vec![vec![], vec!["9".into()]]);
        let rows: Vec<Accounts> = get_sheet_records(&sheet, Resource::Accounts.scheme()).unwrap();
        assert_eq!(rows, vec![Accounts::new("9", "")]);
    }

    #[test]
    fn test_missing_file_and_sheet() {
        let drive = accounts_drive();
        let err = get_spreadsheet_records::<Accounts>(&drive, "nope", "accounts", &[]).unwrap_err();
        assert_eq!(err, ProviderError::SpreadsheetNotFound("nope".into()));

        let err = get_spreadsheet_records::<Accounts>(&drive, "db", "nope", &[]).unwrap_err();
        assert_eq!(err, ProviderError::SheetNotFound("nope".into()));
    }

    #[test]
    fn test_row_that_does_not_fit_record() {
        let sheet = Sheet::new("accounts", vec![vec![], vec!["1".into()]]);
        let scheme = [SheetField::new("id", FieldType::String)];
        let err = get_sheet_records::<Accounts>(&sheet, &scheme).unwrap_err();
        assert!(matches!(err, ProviderError::Record(_)));
    }
}
