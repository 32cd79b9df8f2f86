//! CSV encoder
//!
//! Every field is wrapped in double quotes with internal quotes doubled,
//! whether or not the value needs it.

use crate::export::Grid;

pub(crate) fn encode(grid: &Grid) -> String {
    let mut lines = Vec::with_capacity(grid.rows.len() + 1);
    lines.push(encode_row(&grid.headers));
    for row in &grid.rows {
        lines.push(encode_row(row));
    }
    lines.join("\n")
}

fn encode_row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| quote_field(cell))
        .collect::<Vec<_>>()
        .join(",")
}

fn quote_field(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
