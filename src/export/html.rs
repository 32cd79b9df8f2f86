//! HTML encoder: a standalone document with an inline stylesheet
//!
//! Cell and header text is entity-escaped before interpolation, so
//! markup in cell values cannot break out of the table.

use std::fmt::Write;

use crate::export::{escape_markup, ExportOptions, Grid};

const STYLE: &str = "table { border-collapse: collapse; width: 100%; }\n\
th, td { border: 1px solid #ccc; padding: 6px 10px; text-align: left; }\n\
th { background: #f0f0f0; }\n\
tr:nth-child(even) { background: #fafafa; }";

pub(crate) fn encode(grid: &Grid, options: &ExportOptions) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n<table>\n",
        escape_markup(&options.html_title),
        STYLE
    );

    html.push_str("<thead>\n<tr>");
    for header in &grid.headers {
        let _ = write!(html, "<th>{}</th>", escape_markup(header));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &grid.rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", escape_markup(cell));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}
