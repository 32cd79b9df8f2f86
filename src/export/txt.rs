//! Plain-text encoder: tab-joined header and body rows, no escaping

use crate::export::Grid;

pub(crate) fn encode(grid: &Grid) -> String {
    let mut lines = Vec::with_capacity(grid.rows.len() + 1);
    lines.push(grid.headers.join("\t"));
    for row in &grid.rows {
        lines.push(row.join("\t"));
    }
    lines.join("\n")
}
