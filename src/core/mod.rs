pub mod merge;
pub mod table;
pub mod types;

pub use merge::{deep_merge, deep_merge_maps};
pub use table::Table;
pub use types::{ChartDescription, ChartKind, Trace};
