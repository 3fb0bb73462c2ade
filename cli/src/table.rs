//! Plain-text table rendering for terminal output

/// Render rows as a left-aligned table with a header separator
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    render_row(&mut out, &widths, headers.iter().map(|h| h.to_string()));
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    render_row(&mut out, &widths, separator.into_iter());
    for row in rows {
        render_row(&mut out, &widths, row.iter().cloned());
    }
    out
}

fn render_row(out: &mut String, widths: &[usize], cells: impl Iterator<Item = String>) {
    let cells: Vec<String> = cells.collect();
    let line: Vec<String> = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| format!("{:<width$}", cell, width = widths.get(i).copied().unwrap_or(0)))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
