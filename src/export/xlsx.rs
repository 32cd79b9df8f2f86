//! XLSX encoder, delegated to `rust_xlsxwriter`
//!
//! One worksheet named from the sanitized filename prefix; header row
//! from column headers, one row per data row. Writer failures surface
//! as [`ExportError::Encoder`] instead of crashing the caller.

use rust_xlsxwriter::Workbook;

use crate::export::{encoder_err, ExportError, Grid};

// Excel caps worksheet names at 31 characters
const SHEET_NAME_MAX: usize = 31;

pub(crate) fn encode(grid: &Grid, filename_prefix: &str) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name(filename_prefix))
        .map_err(|e| encoder_err("xlsx", e))?;

    for (col, header) in grid.headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, header.as_str())
            .map_err(|e| encoder_err("xlsx", e))?;
    }
    for (row_idx, row) in grid.rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32 + 1, col as u16, cell.as_str())
                .map_err(|e| encoder_err("xlsx", e))?;
        }
    }

    workbook.save_to_buffer().map_err(|e| encoder_err("xlsx", e))
}

/// Non-alphanumeric characters become `_`; clipped to Excel's limit
fn sheet_name(prefix: &str) -> String {
    let cleaned: String = prefix
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(SHEET_NAME_MAX)
        .collect();
    if cleaned.is_empty() {
        "Sheet1".to_string()
    } else {
        cleaned
    }
}
