//! PDF encoder, delegated to `printpdf`
//!
//! Landscape A4, header row + body rows at font size 7 with a tinted
//! header. Layout here is a presentation concern only: rows are rendered
//! in header+body order and long cells are clipped to their column.

use printpdf::{BuiltinFont, Color, Mm, PdfDocument, Rgb};

use crate::export::{encoder_err, ExportError, Grid};

const PAGE_WIDTH: f64 = 297.0;
const PAGE_HEIGHT: f64 = 210.0;
const MARGIN: f64 = 10.0;
const ROW_HEIGHT: f64 = 5.0;
// Rough glyph advance at 7pt Helvetica, used only for clipping
const CHAR_WIDTH: f64 = 1.6;

pub(crate) fn encode(grid: &Grid) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new("Data Export", Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "table");
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| encoder_err("pdf", e))?;
    let header_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| encoder_err("pdf", e))?;

    let column_count = grid.headers.len().max(1);
    let column_width = (PAGE_WIDTH - 2.0 * MARGIN) / column_count as f64;
    let max_chars = (column_width / CHAR_WIDTH).floor().max(1.0) as usize;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT - MARGIN - ROW_HEIGHT;

    // Tinted header band
    layer.set_fill_color(Color::Rgb(Rgb::new(0.15, 0.3, 0.55, None)));
    for (col, header) in grid.headers.iter().enumerate() {
        let x = MARGIN + col as f64 * column_width;
        layer.use_text(clip(header, max_chars), 7.0, Mm(x as f32), Mm(y as f32), &header_font);
    }
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));

    for row in &grid.rows {
        y -= ROW_HEIGHT;
        if y < MARGIN {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "table");
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT - MARGIN - ROW_HEIGHT;
        }
        for (col, cell) in row.iter().enumerate().take(column_count) {
            let x = MARGIN + col as f64 * column_width;
            layer.use_text(clip(cell, max_chars), 7.0, Mm(x as f32), Mm(y as f32), &body_font);
        }
    }

    doc.save_to_bytes().map_err(|e| encoder_err("pdf", e))
}

fn clip(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}\u{2026}", kept)
    }
}
