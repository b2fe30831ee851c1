use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use crate::color::Rgb;
use super::heatmap::StyledCell;

// ---------------------------------------------------------------------------
// Terminal emission of styled cells
// ---------------------------------------------------------------------------

fn term_color(c: Rgb) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

/// Write one row of styled cells followed by a newline.  Colors are reset
/// after every cell so the separator space stays unstyled.
pub fn write_row(out: &mut impl Write, cells: &[StyledCell]) -> io::Result<()> {
    for cell in cells {
        if let Some(bg) = cell.bg {
            queue!(out, SetBackgroundColor(term_color(bg)))?;
        }
        if let Some(fg) = cell.fg {
            queue!(out, SetForegroundColor(term_color(fg)))?;
        }
        queue!(out, Print(&cell.text), ResetColor, Print(" "))?;
    }
    queue!(out, Print("\n"))?;
    Ok(())
}

/// Write a legend line: each class label in its assigned color.
pub fn write_legend(out: &mut impl Write, entries: &[(&str, Rgb)]) -> io::Result<()> {
    queue!(out, Print("Classes: "))?;
    for (label, color) in entries {
        queue!(
            out,
            SetForegroundColor(term_color(*color)),
            Print(label),
            ResetColor,
            Print(" ")
        )?;
    }
    queue!(out, Print("\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_cells_carry_no_escape_codes() {
        let cells = vec![StyledCell { text: "id ".into(), fg: None, bg: None }];
        let mut buf = Vec::new();
        write_row(&mut buf, &cells).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.starts_with("id "));
        assert!(s.ends_with('\n'));
    }

    #[test]
    fn background_color_is_emitted_and_reset() {
        let cells = vec![StyledCell {
            text: "5.1".into(),
            fg: None,
            bg: Some(Rgb::new(0, 0, 255)),
        }];
        let mut buf = Vec::new();
        write_row(&mut buf, &cells).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.contains("48;2;0;0;255"));
        assert!(s.contains("5.1"));
        assert!(s.contains("\x1b[0m"));
    }

    #[test]
    fn foreground_color_is_emitted_for_class_cells() {
        let cells = vec![StyledCell {
            text: "A".into(),
            fg: Some(Rgb::new(255, 0, 0)),
            bg: None,
        }];
        let mut buf = Vec::new();
        write_row(&mut buf, &cells).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.contains("38;2;255;0;0"));
    }
}
