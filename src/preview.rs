use std::fmt::Write;

use crate::process::normalize::Table;
use crate::process::utils::flatten_cell;

/// Human-readable dump of a validated table: the detected columns, then each
/// row under an aligned header.
pub fn render_preview(table: &Table) -> String {
    let mut columns: Vec<String> = Vec::with_capacity(table.headers.len() + 1);
    columns.push("#".to_string());
    columns.extend(table.headers.iter().cloned());

    let body: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            std::iter::once(row.index().to_string())
                .chain(row.iter().map(|(_, v)| flatten_cell(v)))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for cells in &body {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "Detected Columns: {}", table.headers.join(", "));
    push_line(&mut out, &columns, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for cells in &body {
        push_line(&mut out, cells, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{:<width$}", c, width = *w))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}
