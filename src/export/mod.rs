//! Tabular export module - serialize a finalized table into one of
//! seven download formats
//!
//! The entry point is [`export_table_data`]: it stringifies every cell
//! exactly once into a [`Grid`] and hands that to a per-format encoder.
//! "Nothing to export" (no rows, no matching columns) is a silent no-op
//! returning `Ok(None)`, never an error.

pub mod sink;

mod csv;
mod html;
mod json;
mod pdf;
mod txt;
mod xlsx;
mod xml;

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use thiserror::Error;

/// Errors that can occur while producing an export payload
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("{format} encoder failed: {source}")]
    Encoder {
        format: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub(crate) fn encoder_err(
    format: &'static str,
    source: impl std::error::Error + Send + Sync + 'static,
) -> ExportError {
    ExportError::Encoder {
        format,
        source: Box::new(source),
    }
}

/// Target format of an export job
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Txt,
    Html,
    Xml,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 7] = [
        ExportFormat::Csv,
        ExportFormat::Json,
        ExportFormat::Txt,
        ExportFormat::Html,
        ExportFormat::Xml,
        ExportFormat::Xlsx,
        ExportFormat::Pdf,
    ];

    /// Lowercase file extension
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Txt => "txt",
            ExportFormat::Html => "html",
            ExportFormat::Xml => "xml",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Uppercase token used in generated filenames
    pub fn token(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Txt => "TXT",
            ExportFormat::Html => "HTML",
            ExportFormat::Xml => "XML",
            ExportFormat::Xlsx => "XLSX",
            ExportFormat::Pdf => "PDF",
        }
    }

    /// MIME type for the delivery sink
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
            ExportFormat::Txt => "text/plain",
            ExportFormat::Html => "text/html",
            ExportFormat::Xml => "application/xml",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// Case-insensitive parse of a format token
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "txt" => Ok(ExportFormat::Txt),
            "html" => Ok(ExportFormat::Html),
            "xml" => Ok(ExportFormat::Xml),
            "xlsx" => Ok(ExportFormat::Xlsx),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Format-specific hints for an export job
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Root element name for XML output
    pub root_tag: String,
    /// Per-row element name for XML output
    pub item_tag: String,
    /// Document title for HTML output
    pub html_title: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            root_tag: "data".to_string(),
            item_tag: "item".to_string(),
            html_title: "Data Export".to_string(),
        }
    }
}

/// A finalized, exportable column over rows of type `T`
///
/// `C` is an opaque context value passed unmodified to every accessor
/// call, for computed columns that need table-level state.
pub struct ExportColumn<T, C = ()> {
    pub id: String,
    pub header: String,
    pub key: String,
    accessor: Box<dyn Fn(&T, &C) -> String>,
}

impl<T, C> ExportColumn<T, C> {
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        key: impl Into<String>,
        accessor: impl Fn(&T, &C) -> String + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            key: key.into(),
            accessor: Box::new(accessor),
        }
    }

    /// Materialize one cell
    pub fn value(&self, row: &T, context: &C) -> String {
        (self.accessor)(row, context)
    }
}

impl<T, C> fmt::Debug for ExportColumn<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportColumn")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// The payload handed to the file-delivery sink
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub filename: String,
}

/// Once-stringified table shared by every format encoder
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Grid {
    pub headers: Vec<String>,
    pub keys: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Serialize a table into the requested format
///
/// `selected_ids` controls which columns are included; the order of
/// `columns` controls left-to-right output order. Returns `Ok(None)`
/// when there is nothing to export (empty rows or no matching column).
pub fn export_table_data<T, C>(
    rows: &[T],
    columns: &[ExportColumn<T, C>],
    selected_ids: &[String],
    format: ExportFormat,
    filename_prefix: &str,
    context: &C,
    options: &ExportOptions,
) -> Result<Option<ExportFile>, ExportError> {
    if rows.is_empty() {
        return Ok(None);
    }
    let selected: Vec<&ExportColumn<T, C>> = columns
        .iter()
        .filter(|c| selected_ids.iter().any(|id| *id == c.id))
        .collect();
    if selected.is_empty() {
        return Ok(None);
    }

    let grid = Grid {
        headers: selected.iter().map(|c| c.header.clone()).collect(),
        keys: selected.iter().map(|c| c.key.clone()).collect(),
        rows: rows
            .iter()
            .map(|row| selected.iter().map(|c| c.value(row, context)).collect())
            .collect(),
    };

    let bytes = match format {
        ExportFormat::Csv => csv::encode(&grid).into_bytes(),
        ExportFormat::Json => json::encode(&grid).into_bytes(),
        ExportFormat::Txt => txt::encode(&grid).into_bytes(),
        ExportFormat::Html => html::encode(&grid, options).into_bytes(),
        ExportFormat::Xml => xml::encode(&grid, options).into_bytes(),
        ExportFormat::Xlsx => xlsx::encode(&grid, filename_prefix)?,
        ExportFormat::Pdf => pdf::encode(&grid)?,
    };

    Ok(Some(ExportFile {
        bytes,
        mime_type: format.mime_type(),
        filename: build_filename(filename_prefix, format, Local::now().date_naive()),
    }))
}

/// Build the deterministic export filename:
/// `{prefix}-{FORMAT}-{YYYY-MM-DD}.{ext}`
pub fn build_filename(prefix: &str, format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "{}-{}-{}.{}",
        prefix,
        format.token(),
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Escape the five XML/HTML entities
pub(crate) fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
pub(crate) fn sample_grid() -> Grid {
    Grid {
        headers: vec!["Name".to_string(), "Status".to_string()],
        keys: vec!["name".to_string(), "status".to_string()],
        rows: vec![
            vec!["Pump A".to_string(), "active".to_string()],
            vec!["Valve B".to_string(), "retired".to_string()],
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ExportColumn<Vec<String>, ()>> {
        vec![
            ExportColumn::new("name", "Name", "name", |row: &Vec<String>, _: &()| {
                row[0].clone()
            }),
            ExportColumn::new("status", "Status", "status", |row: &Vec<String>, _: &()| {
                row[1].clone()
            }),
        ]
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_parse_case_insensitive() {
        assert_eq!("CSV".parse::<ExportFormat>().ok(), Some(ExportFormat::Csv));
        assert_eq!(
            "Xlsx".parse::<ExportFormat>().ok(),
            Some(ExportFormat::Xlsx)
        );
        assert!(matches!(
            "docx".parse::<ExportFormat>(),
            Err(ExportError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_build_filename_deterministic() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date");
        assert_eq!(
            build_filename("assets", ExportFormat::Csv, date),
            "assets-CSV-2025-01-15.csv"
        );
        assert_eq!(
            build_filename("assets", ExportFormat::Xlsx, date),
            "assets-XLSX-2025-01-15.xlsx"
        );
    }

    #[test]
    fn test_empty_rows_is_silent_noop() {
        let rows: Vec<Vec<String>> = Vec::new();
        let result = export_table_data(
            &rows,
            &columns(),
            &ids(&["name"]),
            ExportFormat::Csv,
            "x",
            &(),
            &ExportOptions::default(),
        );
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_no_matching_columns_is_silent_noop() {
        let rows = vec![vec!["a".to_string(), "b".to_string()]];
        let result = export_table_data(
            &rows,
            &columns(),
            &ids(&["ghost"]),
            ExportFormat::Csv,
            "x",
            &(),
            &ExportOptions::default(),
        );
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_selection_controls_inclusion_schema_controls_order() {
        let rows = vec![vec!["a".to_string(), "b".to_string()]];
        // Selection lists status first, but column order wins
        let file = export_table_data(
            &rows,
            &columns(),
            &ids(&["status", "name"]),
            ExportFormat::Txt,
            "x",
            &(),
            &ExportOptions::default(),
        )
        .expect("no encoder error")
        .expect("payload produced");
        let text = String::from_utf8(file.bytes).expect("utf8");
        assert_eq!(text.lines().next(), Some("Name\tStatus"));
    }

    #[test]
    fn test_context_reaches_accessors() {
        let rows = vec![vec!["a".to_string(), "b".to_string()]];
        let column: ExportColumn<Vec<String>, String> =
            ExportColumn::new("tag", "Tag", "tag", |row: &Vec<String>, site: &String| {
                format!("{}/{}", site, row[0])
            });
        let file = export_table_data(
            &rows,
            &[column],
            &ids(&["tag"]),
            ExportFormat::Txt,
            "x",
            &"plant-7".to_string(),
            &ExportOptions::default(),
        )
        .expect("no encoder error")
        .expect("payload produced");
        let text = String::from_utf8(file.bytes).expect("utf8");
        assert!(text.contains("plant-7/a"));
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ExportFormat::Csv.mime_type(), "text/csv");
        assert_eq!(ExportFormat::Pdf.mime_type(), "application/pdf");
        assert!(ExportFormat::Xlsx.mime_type().contains("spreadsheetml"));
    }

    #[test]
    fn test_escape_markup_all_five_entities() {
        assert_eq!(
            escape_markup("<tag> & \"quoted\" 'single'"),
            "&lt;tag&gt; &amp; &quot;quoted&quot; &apos;single&apos;"
        );
    }
}
