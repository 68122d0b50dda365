//! Fixed-width markdown rendering of the retained inputs.

use indexmap::IndexMap;
use itertools::Itertools;
use serde_json::Value;

use crate::document::InputSpec;

/// Column headers, in table order.
pub const HEADERS: [&str; 4] = ["Parameter", "Description", "Required", "Default"];

/// Cell marker for a required input.
pub const REQUIRED_MARK: &str = "📍";

/// Render the inputs reference table.
///
/// Each column is padded to the width of its widest cell so the raw
/// markdown reads as an aligned ASCII table. Widths are measured in
/// Unicode scalar values, which is what keeps the marker column
/// aligned.
pub fn render(inputs: &IndexMap<String, InputSpec>) -> String {
    let rows: Vec<[String; 4]> = inputs
        .iter()
        .map(|(name, spec)| row(name, spec))
        .collect();

    let mut widths = HEADERS.map(char_width);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(char_width(cell));
        }
    }

    let header_cells = HEADERS.map(ToOwned::to_owned);
    let mut lines = vec![format_row(&header_cells, &widths), separator(&widths)];
    for cells in &rows {
        lines.push(format_row(cells, &widths));
    }
    lines.join("\n")
}

fn row(name: &str, spec: &InputSpec) -> [String; 4] {
    [
        format!("`{name}`"),
        spec.description.clone(),
        if spec.is_required() {
            REQUIRED_MARK.to_owned()
        } else {
            String::new()
        },
        default_cell(spec.default.as_ref()),
    ]
}

fn default_cell(default: Option<&Value>) -> String {
    match default {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => format!("`{text}`"),
        Some(other) => format!("`{other}`"),
    }
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let joined = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .join(" | ");
    format!("| {joined} |")
}

fn separator(widths: &[usize; 4]) -> String {
    let joined = widths.iter().map(|width| "-".repeat(width + 2)).join("|");
    format!("|{joined}|")
}

fn char_width(text: &str) -> usize {
    text.chars().count()
}
