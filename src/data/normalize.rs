use thiserror::Error;

use super::model::Table;
use super::stats::{parse_numeric, ColumnStats};

// ---------------------------------------------------------------------------
// Reversible min-max normalization
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Denormalize was requested but no backup snapshot exists.
    #[error("no backup exists; the table was never normalized")]
    NoBackup,
}

/// Outcome of a normalization pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Cells rewritten with normalized text.
    pub rewritten: usize,
    /// Non-empty cells that failed numeric parsing and were left untouched.
    pub skipped: usize,
}

/// Rewrites numeric columns to `[0, 1]` and restores them from a one-shot
/// backup of the original cell text.
///
/// Normalization is lossy (fixed 6-decimal formatting), so restoration must
/// come from the saved copy, never from recomputation.  The backup is a
/// fully independent deep copy: later mutation of the live table cannot
/// touch it.
#[derive(Debug, Default)]
pub struct Normalizer {
    backup: Option<Vec<Vec<String>>>,
}

impl Normalizer {
    pub fn has_backup(&self) -> bool {
        self.backup.is_some()
    }

    /// Drop the backup.  Called on reload, when the snapshot no longer
    /// corresponds to the live table.
    pub fn reset(&mut self) {
        self.backup = None;
    }

    /// Rewrite every numeric cell outside the class column to its min-max
    /// normalized value, formatted to exactly 6 decimal digits.
    ///
    /// The first call snapshots the table's original text.  Repeated calls
    /// reuse that snapshot: re-snapshotting here would capture
    /// already-normalized text as the "original" and corrupt restore.
    ///
    /// Empty cells are left untouched.  Non-numeric non-empty cells are left
    /// untouched with a per-cell warning.  A column with `max == min`
    /// (including NaN bounds) zero-fills every parseable cell.
    pub fn normalize(
        &mut self,
        table: &mut Table,
        stats: &ColumnStats,
        class_column: Option<usize>,
    ) -> NormalizeReport {
        if self.backup.is_none() {
            self.backup = Some(table.snapshot_cells());
        }

        let mut report = NormalizeReport::default();

        for col in 0..table.column_count() {
            if Some(col) == class_column {
                continue;
            }
            let (min, max) = stats.bounds(col);

            for row in 1..table.row_count() {
                let cell = table.cell(row, col);
                if cell.is_empty() {
                    continue;
                }
                let Some(v) = parse_numeric(cell) else {
                    log::warn!(
                        "row {row}, column {col}: '{cell}' is not numeric, leaving as-is"
                    );
                    report.skipped += 1;
                    continue;
                };

                let text = if max > min {
                    format!("{:.6}", (v - min) / (max - min))
                } else {
                    // Degenerate column: a single repeated value (or NaN
                    // bounds) has no spread to scale against.
                    format!("{:.6}", 0.0)
                };
                table.set_cell(row, col, text);
                report.rewritten += 1;
            }
        }

        report
    }

    /// Restore every cell byte-for-byte from the backup snapshot.
    ///
    /// The backup is retained afterwards so normalize/denormalize can be
    /// toggled repeatedly against the same original text.
    pub fn denormalize(&self, table: &mut Table) -> Result<(), NormalizeError> {
        let backup = self.backup.as_ref().ok_or(NormalizeError::NoBackup)?;
        table.restore_cells(backup);
        Ok(())
    }
}
