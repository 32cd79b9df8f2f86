//! Tabkit: column state and tabular export toolkit
//!
//! Keeps a user's column visibility and order choices stable as the
//! underlying column schema changes, and serializes an in-memory table
//! (columns + rows) into CSV/JSON/TXT/HTML/XML/XLSX/PDF payloads with
//! format-correct escaping.

pub mod cli;
pub mod columns;
pub mod export;
