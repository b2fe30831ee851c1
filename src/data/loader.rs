use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use super::model::Table;

// ---------------------------------------------------------------------------
// Directory enumeration
// ---------------------------------------------------------------------------

/// List the `.csv` files (extension matched case-insensitively) in a
/// directory, sorted by name so the selection menu is stable.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("reading directory {}", dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
        })
        .collect();
    files.sort();
    Ok(files)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a CSV file into a [`Table`].
///
/// The format is plain comma-delimited text with no quoting or escaping:
/// the first row is the header and defines the column count.  Data rows
/// with fewer fields than the header are padded with empty cells (the
/// common unescaped-trailing-field case); rows with more fields are
/// rejected.
pub fn load_file(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)
        .with_context(|| format!("opening CSV file {}", path.display()))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut columns = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let mut cells: Vec<String> = record.iter().map(|c| c.to_string()).collect();

        if row_no == 0 {
            columns = cells.len();
        } else if cells.len() > columns {
            bail!(
                "CSV row {row_no}: {} fields but the header has {columns}",
                cells.len()
            );
        } else if cells.len() < columns {
            log::warn!(
                "CSV row {row_no}: {} fields, padding to {columns}",
                cells.len()
            );
            cells.resize(columns, String::new());
        }

        rows.push(cells);
    }

    if rows.is_empty() {
        bail!("CSV file {} is empty (no header row)", path.display());
    }

    log::info!(
        "Loaded {} data rows × {columns} columns from {}",
        rows.len() - 1,
        path.display()
    );
    Ok(Table::new(rows))
}
