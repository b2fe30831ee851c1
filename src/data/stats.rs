use std::collections::BTreeMap;

use super::model::Table;

// ---------------------------------------------------------------------------
// Per-column min/max statistics
// ---------------------------------------------------------------------------

/// Parse a cell as a finite `f64`, tolerating surrounding whitespace.
/// Non-numeric, empty, and non-finite text all yield `None`.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Per-column (min, max) over the data rows.
///
/// The class column and columns without a single numeric cell carry
/// `(NaN, NaN)`: they are never scaled or heat-mapped.  Always computed
/// fresh from the current table; there is no incremental update.
#[derive(Debug, Clone, Default)]
pub struct ColumnStats {
    bounds: BTreeMap<usize, (f64, f64)>,
}

impl ColumnStats {
    /// Scan all data rows and compute each column's bounds.
    pub fn compute(table: &Table, class_column: Option<usize>) -> Self {
        let mut bounds = BTreeMap::new();

        for col in 0..table.column_count() {
            if Some(col) == class_column {
                bounds.insert(col, (f64::NAN, f64::NAN));
                continue;
            }

            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for row in table.data_rows() {
                if let Some(v) = parse_numeric(&row[col]) {
                    min = min.min(v);
                    max = max.max(v);
                }
            }

            // Seeds never updated means no numeric cell contributed.
            if min > max {
                bounds.insert(col, (f64::NAN, f64::NAN));
            } else {
                bounds.insert(col, (min, max));
            }
        }

        ColumnStats { bounds }
    }

    /// The (min, max) bounds for a column; `(NaN, NaN)` when the column has
    /// no numeric data or is the class column.
    pub fn bounds(&self, col: usize) -> (f64, f64) {
        self.bounds.get(&col).copied().unwrap_or((f64::NAN, f64::NAN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Table {
        Table::new(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn computes_min_max_over_data_rows() {
        let t = table(&[
            &["sepal_length", "class"],
            &["5.1", "A"],
            &["6.9", "B"],
            &["5.1", "A"],
        ]);
        let stats = ColumnStats::compute(&t, Some(1));
        assert_eq!(stats.bounds(0), (5.1, 6.9));
    }

    #[test]
    fn class_column_bounds_are_nan() {
        let t = table(&[&["x", "class"], &["1", "A"], &["2", "B"]]);
        let stats = ColumnStats::compute(&t, Some(1));
        let (min, max) = stats.bounds(1);
        assert!(min.is_nan() && max.is_nan());
    }

    #[test]
    fn non_numeric_cells_do_not_contribute() {
        let t = table(&[&["x"], &["1.0"], &["oops"], &["3.0"], &[""]]);
        let stats = ColumnStats::compute(&t, None);
        assert_eq!(stats.bounds(0), (1.0, 3.0));
    }

    #[test]
    fn all_text_column_yields_nan_not_infinities() {
        let t = table(&[&["notes"], &["hello"], &["world"]]);
        let stats = ColumnStats::compute(&t, None);
        let (min, max) = stats.bounds(0);
        assert!(min.is_nan() && max.is_nan());
    }

    #[test]
    fn whitespace_is_tolerated_infinities_are_not() {
        assert_eq!(parse_numeric(" 2.5 "), Some(2.5));
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric(""), None);
    }
}
