//! `tabkit export` command - export rows from a CSV/JSON file
//!
//! The command plays the role of a table view: it builds a column schema
//! from the input's header (or the first JSON object's keys), drives a
//! [`ColumnSet`] with the locked/visible/order flags, and hands the
//! displayed columns plus rows to the exporter.

use console::style;
use miette::{bail, IntoDiagnostic, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::GlobalOpts;
use crate::columns::{ColumnDescriptor, ColumnSet, ColumnSetOptions};
use crate::export::sink::write_export;
use crate::export::{export_table_data, ExportColumn, ExportFormat, ExportOptions};

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Input file: .csv with a header row, or a .json array of objects
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Output format
    #[arg(long, short = 'F', value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Filename prefix for the generated file
    #[arg(long, short = 'p', default_value = "export")]
    pub prefix: String,

    /// Column ids to include (default: all displayed columns)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Initially visible column ids, in display order
    #[arg(long, value_delimiter = ',')]
    pub visible: Vec<String>,

    /// Locked column ids (always exported first)
    #[arg(long, value_delimiter = ',')]
    pub locked: Vec<String>,

    /// Reorder the visible columns (comma-separated ids)
    #[arg(long, value_delimiter = ',')]
    pub order: Vec<String>,

    /// Root element name for XML output
    #[arg(long, default_value = "data")]
    pub root_tag: String,

    /// Per-row element name for XML output
    #[arg(long, default_value = "item")]
    pub item_tag: String,

    /// Document title for HTML output
    #[arg(long, default_value = "Data Export")]
    pub title: String,

    /// Output directory
    #[arg(long, short = 'o', default_value = ".")]
    pub out: PathBuf,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let (fields, rows) = load_rows(&args.input)?;

    if global.verbose && !global.quiet {
        eprintln!(
            "{} {} row(s), {} field(s) loaded from {}",
            style("→").blue(),
            rows.len(),
            fields.len(),
            args.input.display()
        );
    }

    let schema: Vec<ColumnDescriptor> = fields
        .iter()
        .map(|field| ColumnDescriptor::with_id(field, field))
        .collect();
    let mut set = ColumnSet::new(
        &schema,
        ColumnSetOptions {
            locked_ids: args.locked.clone(),
            initial_visible_ids: if args.visible.is_empty() {
                None
            } else {
                Some(args.visible.clone())
            },
        },
    );
    if !args.order.is_empty() {
        set.reorder(&args.order);
    }
    let displayed = set.displayed();

    let export_columns: Vec<ExportColumn<Value, ()>> = displayed
        .iter()
        .map(|column| {
            let key = column.key.clone();
            ExportColumn::new(
                column.key.clone(),
                column.header().to_string(),
                column.key.clone(),
                move |row: &Value, _: &()| cell_text(row, &key),
            )
        })
        .collect();

    let selected: Vec<String> = if args.columns.is_empty() {
        displayed.iter().map(|c| c.key.clone()).collect()
    } else {
        args.columns.clone()
    };

    let options = ExportOptions {
        root_tag: args.root_tag.clone(),
        item_tag: args.item_tag.clone(),
        html_title: args.title.clone(),
    };

    let payload = export_table_data(
        &rows,
        &export_columns,
        &selected,
        args.format,
        &args.prefix,
        &(),
        &options,
    )
    .into_diagnostic()?;

    match payload {
        Some(file) => {
            let path = write_export(&file, &args.out).into_diagnostic()?;
            if !global.quiet {
                println!(
                    "{} Exported {} row(s) to {}",
                    style("✓").green(),
                    rows.len(),
                    style(path.display()).cyan()
                );
            }
        }
        None => {
            // Nothing to export is not an error (empty input or selection)
            if !global.quiet {
                println!(
                    "{}",
                    style("Nothing to export (no rows or no matching columns)").dim()
                );
            }
        }
    }
    Ok(())
}

/// Load rows as JSON objects plus the ordered field names of the schema
fn load_rows(path: &Path) -> Result<(Vec<String>, Vec<Value>)> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        load_json_rows(path)
    } else {
        load_csv_rows(path)
    }
}

fn load_json_rows(path: &Path) -> Result<(Vec<String>, Vec<Value>)> {
    let text = fs::read_to_string(path).into_diagnostic()?;
    let value: Value = serde_json::from_str(&text).into_diagnostic()?;
    let Some(rows) = value.as_array() else {
        bail!("expected a JSON array of objects in {}", path.display());
    };
    // Field order comes from the first object's key order
    let fields = rows
        .iter()
        .find_map(|row| row.as_object())
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default();
    Ok((fields, rows.clone()))
}

fn load_csv_rows(path: &Path) -> Result<(Vec<String>, Vec<Value>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .into_diagnostic()?;
    let fields: Vec<String> = reader
        .headers()
        .into_diagnostic()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.into_diagnostic()?;
        let mut object = Map::new();
        for (field, cell) in fields.iter().zip(record.iter()) {
            object.insert(field.clone(), Value::String(cell.to_string()));
        }
        rows.push(Value::Object(object));
    }
    Ok((fields, rows))
}

/// Stringify one cell; missing fields and nulls export as empty
fn cell_text(row: &Value, key: &str) -> String {
    match row.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
