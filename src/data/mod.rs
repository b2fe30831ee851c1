/// Data layer: the table model, loading, statistics, and normalization.
///
/// Architecture:
/// ```text
///       .csv file
///           │
///           ▼
///      ┌─────────┐
///      │ loader   │  parse + pad rows → Table
///      └─────────┘
///           │
///           ▼
///      ┌─────────┐
///      │  Table   │  header + data rows of owned text cells
///      └─────────┘
///        │      │
///        ▼      ▼
///  ┌──────────┐ ┌────────────┐
///  │  stats    │ │ normalize   │  min/max per column; reversible
///  └──────────┘ │             │  [0,1] rewrite with backup
///               └────────────┘
/// ```
pub mod loader;
pub mod model;
pub mod normalize;
pub mod stats;
