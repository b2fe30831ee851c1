use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::state::AppState;
use crate::ui::{heatmap, table, term};

// ---------------------------------------------------------------------------
// Interactive command loop
// ---------------------------------------------------------------------------

const MENU: &str = "\nOptions:\n  'd' display           show the table\n  'h' heatmap           color the table by value and class\n  'n' toggle-normalize  min-max scale numeric columns to [0,1]\n  'r' reload            re-read the file from disk\n  'q' quit\n";

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(state: AppState) -> Self {
        App { state }
    }

    /// Run the command loop until `quit`.  Command failures are reported
    /// and the loop continues; only I/O loss on stdin/stdout ends it.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            print!("{MENU}Enter your choice: ");
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }

            match line.trim().to_ascii_lowercase().as_str() {
                "d" | "display" => self.display(&mut stdout)?,
                "h" | "heatmap" => self.heatmap(&mut stdout)?,
                "n" | "toggle-normalize" => {
                    match self.state.toggle_normalize() {
                        Ok(()) => println!(
                            "Normalization: {}",
                            if self.state.is_normalized() { "ON" } else { "OFF" }
                        ),
                        Err(e) => println!("Error: {e:#}"),
                    }
                }
                "r" | "reload" => match self.state.reload() {
                    Ok(()) => println!("Reloaded."),
                    Err(e) => println!("Error: {e:#}"),
                },
                "q" | "quit" => {
                    println!("Exiting...");
                    break;
                }
                "" => {}
                other => println!("Invalid option '{other}'. Try again."),
            }
        }
        Ok(())
    }

    fn display(&self, out: &mut impl Write) -> Result<()> {
        let Some(t) = self.state.table() else {
            println!("No table loaded.");
            return Ok(());
        };
        writeln!(out, "\nLoaded CSV Data:")?;
        for line in table::render(t) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }

    fn heatmap(&self, out: &mut impl Write) -> Result<()> {
        let Some(t) = self.state.table() else {
            println!("No table loaded.");
            return Ok(());
        };

        writeln!(out, "\nHeatmap View:")?;
        let widths = t.column_widths();

        term::write_row(out, &heatmap::render_header(t, &widths))?;
        for row in 1..t.row_count() {
            let cells = heatmap::render_row(
                t,
                row,
                self.state.stats(),
                self.state.class_column(),
                self.state.class_map(),
                &widths,
            );
            term::write_row(out, &cells)?;
        }

        let legend = self.state.class_map().legend_entries();
        if !legend.is_empty() {
            term::write_legend(out, &legend)?;
        }
        out.flush()?;
        Ok(())
    }
}
