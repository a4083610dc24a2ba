use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    #[error("columns not found in table: {}", .columns.join(", "))]
    MissingColumn { columns: Vec<String> },

    #[error("trace name count {actual} does not match y-column count {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("unsupported chart kind: {0}")]
    UnsupportedKind(String),
}
