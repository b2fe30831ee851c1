use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Plain aligned table view
// ---------------------------------------------------------------------------

/// Render every row (header first) as plain text with each cell left-padded
/// to its column's display width.  Widths are recomputed here on every call
/// since normalization changes cell text lengths.
pub fn render(table: &Table) -> Vec<String> {
    let widths = table.column_widths();

    (0..table.row_count())
        .map(|row| {
            let mut line = String::new();
            for (col, width) in widths.iter().enumerate() {
                let cell = table.cell(row, col);
                line.push_str(&format!("{cell:<w$} ", w = width + 1));
            }
            line.trim_end().to_string()
        })
        .collect()
}
