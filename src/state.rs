use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::color::ClassMap;
use crate::data::loader;
use crate::data::model::Table;
use crate::data::normalize::Normalizer;
use crate::data::stats::ColumnStats;

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// The full session state, independent of terminal rendering.
///
/// The table and everything derived from it (stats, class map, backup) are
/// owned here exclusively and torn down together: a reload replaces the
/// table wholesale and discards the backup and the normalized flag with it.
#[derive(Default)]
pub struct AppState {
    /// Loaded table (None until a file loads successfully).
    table: Option<Table>,

    /// Path the table was loaded from, for reload.
    source_path: Option<PathBuf>,

    /// Index of the "class" column, if the header has one.
    class_column: Option<usize>,

    /// Per-column (min, max); recomputed after every mutation.
    stats: ColumnStats,

    /// Class label → color registry; rebuilt per load.
    class_map: ClassMap,

    /// Normalization backup holder.
    normalizer: Normalizer,

    /// Whether the table currently holds normalized text.
    normalized: bool,
}

impl AppState {
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn stats(&self) -> &ColumnStats {
        &self.stats
    }

    pub fn class_map(&self) -> &ClassMap {
        &self.class_map
    }

    pub fn class_column(&self) -> Option<usize> {
        self.class_column
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// Load a CSV file and make it the session's table.
    ///
    /// On failure the previous table (and its backup) stays in place and the
    /// error describes the failed attempt only.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let table = loader::load_file(path)
            .with_context(|| format!("loading {}", path.display()))?;
        self.install(table, path.to_path_buf());
        Ok(())
    }

    /// Re-load the current file from disk.  Forces normalization OFF and
    /// discards the backup regardless of prior state.
    pub fn reload(&mut self) -> Result<()> {
        let Some(path) = self.source_path.clone() else {
            bail!("no table loaded");
        };
        self.load(&path)
    }

    /// Install a freshly loaded table and rebuild everything derived.
    fn install(&mut self, table: Table, path: PathBuf) {
        self.class_column = table.find_class_column();
        if self.class_column.is_none() {
            log::warn!("no 'class' column in header; class coloring disabled");
        }

        self.stats = ColumnStats::compute(&table, self.class_column);
        self.class_map = ClassMap::build(&table, self.class_column);
        self.normalizer.reset();
        self.normalized = false;
        self.table = Some(table);
        self.source_path = Some(path);
    }

    /// Flip the normalization toggle: OFF→ON normalizes, ON→OFF restores
    /// from the backup.  The flag only changes when the operation applied.
    pub fn toggle_normalize(&mut self) -> Result<()> {
        let Some(table) = self.table.as_mut() else {
            bail!("no table loaded");
        };

        if self.normalized {
            match self.normalizer.denormalize(table) {
                Ok(()) => self.normalized = false,
                Err(e) => log::warn!("denormalize skipped: {e}"),
            }
        } else {
            // Stats must reflect the table as it is right now, not a
            // cached copy from before some earlier mutation.
            let stats = ColumnStats::compute(table, self.class_column);
            let report = self.normalizer.normalize(table, &stats, self.class_column);
            if report.skipped > 0 {
                log::warn!("{} non-numeric cells left untouched", report.skipped);
            }
            log::info!("normalized {} cells", report.rewritten);
            self.normalized = true;
        }

        self.stats = ColumnStats::compute(table, self.class_column);
        Ok(())
    }
}
