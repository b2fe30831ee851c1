mod app;
mod color;
mod data;
mod state;
mod ui;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use app::App;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let arg = std::env::args().nth(1);
    let path = match arg {
        Some(a) if Path::new(&a).is_file() => PathBuf::from(a),
        Some(a) => pick_csv(Path::new(&a))?,
        None => pick_csv(Path::new("."))?,
    };

    let mut state = AppState::default();
    state.load(&path)?;

    App::new(state).run()
}

/// List the directory's CSV files and prompt for one, mirroring the
/// original filename prompt but with an enumerated menu.
fn pick_csv(dir: &Path) -> Result<PathBuf> {
    let files = data::loader::list_csv_files(dir)?;
    if files.is_empty() {
        bail!("no .csv files found in {}", dir.display());
    }

    println!("CSV files in {}:", dir.display());
    for (i, f) in files.iter().enumerate() {
        println!("  [{}] {}", i + 1, f.display());
    }
    print!("Enter the file number to open: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let choice: usize = line
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a file number", line.trim()))?;

    files
        .get(choice.wrapping_sub(1))
        .cloned()
        .with_context(|| format!("no file numbered {choice}"))
}
