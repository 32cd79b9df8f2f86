//! XML encoder: one element per row, one child element per column key
//!
//! Cell values get full 5-entity escaping. Element names are taken from
//! column keys verbatim; callers own key hygiene (keys come from field
//! identifiers, not user data).

use std::fmt::Write;

use crate::export::{escape_markup, ExportOptions, Grid};

pub(crate) fn encode(grid: &Grid, options: &ExportOptions) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(xml, "<{}>", options.root_tag);
    for row in &grid.rows {
        let _ = writeln!(xml, "  <{}>", options.item_tag);
        for (key, cell) in grid.keys.iter().zip(row) {
            let _ = writeln!(xml, "    <{}>{}</{}>", key, escape_markup(cell), key);
        }
        let _ = writeln!(xml, "  </{}>", options.item_tag);
    }
    let _ = writeln!(xml, "</{}>", options.root_tag);
    xml
}
