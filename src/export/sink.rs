//! File-delivery sink
//!
//! The exporter produces `(bytes, mime type, filename)`; how those bytes
//! reach the user is the sink's business. This one writes to a directory
//! on disk, which is what the CLI front end wants.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::export::ExportFile;

/// Write an export payload into `dir` under its generated filename
pub fn write_export(file: &ExportFile, dir: &Path) -> std::io::Result<PathBuf> {
    let path = dir.join(&file.filename);
    let out = File::create(&path)?;
    let mut writer = BufWriter::new(out);
    writer.write_all(&file.bytes)?;
    writer.flush()?;
    Ok(path)
}
