// ---------------------------------------------------------------------------
// Table – rectangular grid of text cells with a header row
// ---------------------------------------------------------------------------

/// The loaded dataset: an owned grid of text cells.  Row 0 is the header.
///
/// Rectangularity is established by the loader; every row holds exactly
/// `column_count()` cells.  The structure never changes after load — only
/// cell text is rewritten (by normalization).
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Wrap already-rectangular rows.  The loader is the only producer.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));
        Table { rows }
    }

    /// Total number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, as defined by the header row.
    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Cell text at (row, col).  Row 0 is the header.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.rows[row][col]
    }

    /// Rewrite the text of a single cell.
    pub fn set_cell(&mut self, row: usize, col: usize, text: String) {
        self.rows[row][col] = text;
    }

    /// The header row.
    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// Data rows (everything below the header).
    pub fn data_rows(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    /// Index of the first header cell case-insensitively equal to "class".
    /// Absent is valid: it disables class-aware coloring.
    pub fn find_class_column(&self) -> Option<usize> {
        self.rows[0]
            .iter()
            .position(|h| h.eq_ignore_ascii_case("class"))
    }

    /// Maximum text length per column over the header and all data rows.
    ///
    /// Recomputed per render pass: normalization changes cell text lengths,
    /// so cached widths would go stale.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0usize; self.column_count()];
        for row in &self.rows {
            for (j, cell) in row.iter().enumerate() {
                widths[j] = widths[j].max(cell.chars().count());
            }
        }
        widths
    }

    /// Deep copy of all cell text, for the normalization backup.
    pub fn snapshot_cells(&self) -> Vec<Vec<String>> {
        self.rows.clone()
    }

    /// Overwrite every cell from a snapshot taken by [`snapshot_cells`].
    ///
    /// [`snapshot_cells`]: Table::snapshot_cells
    pub fn restore_cells(&mut self, snapshot: &[Vec<String>]) {
        debug_assert_eq!(snapshot.len(), self.rows.len());
        for (row, saved) in self.rows.iter_mut().zip(snapshot) {
            row.clone_from(saved);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(vec![
            vec!["sepal_length".into(), "Class".into()],
            vec!["5.1".into(), "A".into()],
            vec!["6.9".into(), "B".into()],
        ])
    }

    #[test]
    fn class_column_is_found_case_insensitively() {
        assert_eq!(sample().find_class_column(), Some(1));
    }

    #[test]
    fn missing_class_column_is_none() {
        let t = Table::new(vec![
            vec!["a".into(), "b".into()],
            vec!["1".into(), "2".into()],
        ]);
        assert_eq!(t.find_class_column(), None);
    }

    #[test]
    fn widths_cover_header_and_data() {
        // "sepal_length" (12) dominates column 0, "Class" (5) column 1.
        assert_eq!(sample().column_widths(), vec![12, 5]);
    }

    #[test]
    fn snapshot_restores_exact_text() {
        let mut t = sample();
        let snap = t.snapshot_cells();
        t.set_cell(1, 0, "0.000000".into());
        t.restore_cells(&snap);
        assert_eq!(t.cell(1, 0), "5.1");
    }
}
