use thiserror::Error;

/// Failures raised while resolving menu indices or assembling statements
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("table {index} is out of range (1-{count})")]
    TableIndexOutOfRange { index: usize, count: usize },

    #[error("column {index} of {table} is out of range (1-{count})")]
    ColumnIndexOutOfRange {
        table: String,
        index: usize,
        count: usize,
    },

    #[error("row {index} of {table} is out of range (1-{count})")]
    RowIndexOutOfRange {
        table: String,
        index: usize,
        count: usize,
    },

    #[error("table {0} has no columns")]
    NoColumns(String),

    #[error("{table} has {columns} columns but {values} values were given")]
    ValueCountMismatch {
        table: String,
        columns: usize,
        values: usize,
    },

    #[error("unknown table: {0}")]
    UnknownTable(String),

    #[error("no flight with number {0}")]
    UnknownFlight(String),
}
