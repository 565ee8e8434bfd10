//! Tabular extraction: CSV and spreadsheet workbooks.
//!
//! Output format is shared by both paths: every data row becomes
//! `Row N: cell | cell | ...`, and workbooks additionally get a
//! `=== Sheet: name ===` header per sheet.

use std::fmt::Write as _;
use std::path::Path;

use calamine::Reader;
use embedchat_core::error::{EmbedChatError, Result};

const CELL_SEPARATOR: &str = " | ";

/// Parses a CSV file into numbered, separator-joined rows.
pub(crate) fn extract_csv(path: &Path) -> Result<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|err| EmbedChatError::extraction(format!("Could not open CSV file: {err}")))?;

    let mut out = String::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|err| {
            EmbedChatError::extraction(format!("Could not parse CSV row {}: {err}", index + 1))
        })?;
        let cells: Vec<&str> = record.iter().map(str::trim).collect();
        let _ = writeln!(out, "Row {}: {}", index + 1, cells.join(CELL_SEPARATOR));
    }
    Ok(out)
}

/// Parses every sheet of an XLSX/XLS workbook into numbered rows under a
/// sheet-name header.
pub(crate) fn extract_workbook(path: &Path) -> Result<String> {
    let mut workbook = calamine::open_workbook_auto(path)
        .map_err(|err| EmbedChatError::extraction(format!("Could not open spreadsheet: {err}")))?;

    let mut out = String::new();
    for sheet_name in workbook.sheet_names().to_owned() {
        let range = workbook.worksheet_range(&sheet_name).map_err(|err| {
            EmbedChatError::extraction(format!("Could not read sheet '{sheet_name}': {err}"))
        })?;

        let _ = writeln!(out, "=== Sheet: {sheet_name} ===");
        for (index, row) in range.rows().enumerate() {
            let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            let _ = writeln!(out, "Row {}: {}", index + 1, cells.join(CELL_SEPARATOR));
        }
    }
    Ok(out)
}
