use palette::{Hsv, IntoColor, Srgb};

use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Rgb – abstract color carried by styled cells
// ---------------------------------------------------------------------------

/// An 8-bit RGB triple.  The core hands these to the terminal layer; only
/// `ui::term` turns them into escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colors using evenly spaced hues at full
/// saturation and value: label `i` of `n` gets hue `i·360/n` degrees.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsv = Hsv::new(hue, 1.0, 1.0);
            let rgb: Srgb = hsv.into_color();
            Rgb::new(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Class registry: label → color
// ---------------------------------------------------------------------------

/// Distinct class labels in first-seen row order, each mapped to a hue.
///
/// Identity is case-insensitive; the casing of the first occurrence is
/// preserved.  Render color stability depends on this exact ordering, so
/// the registry never reorders or deduplicates differently.
#[derive(Debug, Clone, Default)]
pub struct ClassMap {
    labels: Vec<String>,
    colors: Vec<Rgb>,
}

impl ClassMap {
    /// Scan the table's class column top to bottom and assign each distinct
    /// label an evenly spaced hue.  Empty when there is no class column.
    pub fn build(table: &Table, class_column: Option<usize>) -> Self {
        let Some(col) = class_column else {
            return ClassMap::default();
        };

        let mut labels: Vec<String> = Vec::new();
        for row in table.data_rows() {
            let label = &row[col];
            if !labels.iter().any(|l| l.eq_ignore_ascii_case(label)) {
                labels.push(label.clone());
            }
        }

        let colors = generate_palette(labels.len());
        ClassMap { labels, colors }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Distinct labels in first-seen order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Look up a label's color, case-insensitively.
    pub fn color_for(&self, label: &str) -> Option<Rgb> {
        self.labels
            .iter()
            .position(|l| l.eq_ignore_ascii_case(label))
            .map(|i| self.colors[i])
    }

    /// Legend entries (label, color) for the heatmap view.
    pub fn legend_entries(&self) -> Vec<(&str, Rgb)> {
        self.labels
            .iter()
            .map(|l| l.as_str())
            .zip(self.colors.iter().copied())
            .collect()
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
    fn empty_palette_for_zero_labels() {
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn single_label_gets_pure_red() {
        // Hue 0°, S=V=100% is (255, 0, 0).
        assert_eq!(generate_palette(1), vec![Rgb::new(255, 0, 0)]);
    }

    #[test]
    fn two_labels_are_red_and_cyan() {
        // Hues 0° and 180°.
        let palette = generate_palette(2);
        assert_eq!(palette[0], Rgb::new(255, 0, 0));
        assert_eq!(palette[1], Rgb::new(0, 255, 255));
    }

    #[test]
    fn hues_are_pairwise_distinct() {
        for n in 2..=12 {
            let palette = generate_palette(n);
            for i in 0..n {
                for j in (i + 1)..n {
                    assert_ne!(palette[i], palette[j], "n={n}, i={i}, j={j}");
                }
            }
        }
    }

    #[test]
    fn labels_keep_first_seen_order_and_casing() {
        let t = table(&[
            &["x", "class"],
            &["1", "Setosa"],
            &["2", "virginica"],
            &["3", "SETOSA"],
            &["4", "Versicolor"],
        ]);
        let map = ClassMap::build(&t, Some(1));
        assert_eq!(map.labels(), &["Setosa", "virginica", "Versicolor"]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let t = table(&[&["x", "class"], &["1", "A"], &["2", "B"]]);
        let map = ClassMap::build(&t, Some(1));
        assert_eq!(map.color_for("a"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(map.color_for("B"), Some(Rgb::new(0, 255, 255)));
        assert_eq!(map.color_for("C"), None);
    }

    #[test]
    fn no_class_column_means_empty_registry() {
        let t = table(&[&["x"], &["1"]]);
        let map = ClassMap::build(&t, None);
        assert!(map.is_empty());
        assert!(map.legend_entries().is_empty());
    }
}
