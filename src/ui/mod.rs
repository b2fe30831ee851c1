/// Presentation layer: the core produces [`heatmap::StyledCell`]s and plain
/// aligned lines; only [`term`] knows about escape sequences.
pub mod heatmap;
pub mod table;
pub mod term;
