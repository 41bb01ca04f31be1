//! Table rendering utilities for CLI outputs.

use crate::table::{Table, Value};
use unicode_width::UnicodeWidthStr;

/// Display text of a cell. Averages are shown with two decimals; the
/// stored value stays unrounded.
pub fn cell_text(v: &Value) -> String {
    match v {
        Value::Real(r) => format!("{r:.2}"),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{text}{}", " ".repeat(fill))
}

/// Left-aligned columns sized to their widest cell (by display width, so
/// umlauts and wide glyphs line up).
pub fn render(table: &Table) -> String {
    let cells: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|r| r.iter().map(cell_text).collect())
        .collect();

    let widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|r| UnicodeWidthStr::width(r[i].as_str()))
                .chain(std::iter::once(UnicodeWidthStr::width(h.as_str())))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    // Header
    for (h, w) in table.columns().iter().zip(&widths) {
        out.push_str(&pad(h, *w));
        out.push(' ');
    }
    out.push('\n');

    for w in &widths {
        out.push_str(&"-".repeat(*w));
        out.push(' ');
    }
    out.push('\n');

    // Rows
    for row in &cells {
        for (c, w) in row.iter().zip(&widths) {
            out.push_str(&pad(c, *w));
            out.push(' ');
        }
        out.push('\n');
    }

    out
}
