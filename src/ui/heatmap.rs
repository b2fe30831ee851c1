use crate::color::{ClassMap, Rgb};
use crate::data::model::Table;
use crate::data::stats::ColumnStats;

// ---------------------------------------------------------------------------
// Styled cells – abstract render output
// ---------------------------------------------------------------------------

/// One rendered cell: display text plus optional foreground/background
/// colors.  Turning this into escape sequences is `ui::term`'s job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledCell {
    pub text: String,
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
}

impl StyledCell {
    fn plain(text: String) -> Self {
        StyledCell { text, fg: None, bg: None }
    }
}

// ---------------------------------------------------------------------------
// Heatmap rendering
// ---------------------------------------------------------------------------

/// Map a value's position between its column bounds to `[0, 255]`.
///
/// With `max == min` (or NaN bounds) there is no spread and the intensity
/// is 0.  The clamp matters: unparsable cells enter as 0.0, which can fall
/// below a column's minimum.
pub fn intensity(value: f64, min: f64, max: f64) -> u8 {
    if max > min {
        (((value - min) / (max - min)) * 255.0).round().clamp(0.0, 255.0) as u8
    } else {
        0
    }
}

/// The padded, unstyled header row.
pub fn render_header(table: &Table, widths: &[usize]) -> Vec<StyledCell> {
    table
        .header()
        .iter()
        .enumerate()
        .map(|(j, h)| StyledCell::plain(pad(h, widths[j])))
        .collect()
}

/// Render one data row as styled cells.
///
/// Numeric columns get a red-to-blue background gradient: low values trend
/// blue, high values red.  Unparsable cells count as 0.0 here (unlike
/// normalization, which skips them — the two policies are deliberately kept
/// apart).  The class column gets its label's registry color as foreground.
pub fn render_row(
    table: &Table,
    row: usize,
    stats: &ColumnStats,
    class_column: Option<usize>,
    class_map: &ClassMap,
    widths: &[usize],
) -> Vec<StyledCell> {
    (0..table.column_count())
        .map(|col| {
            let cell = table.cell(row, col);
            let text = pad(cell, widths[col]);

            if Some(col) == class_column {
                return StyledCell {
                    text,
                    fg: class_map.color_for(cell),
                    bg: None,
                };
            }

            let value = cell.trim().parse::<f64>().unwrap_or(0.0);
            let (min, max) = stats.bounds(col);
            let i = intensity(value, min, max);
            StyledCell {
                text,
                fg: None,
                bg: Some(Rgb::new(i, 0, 255 - i)),
            }
        })
        .collect()
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}
