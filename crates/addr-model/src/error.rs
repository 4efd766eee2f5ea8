use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("{table}: missing required column `{column}`")]
    MissingColumn { table: String, column: String },
    #[error("{table}: expected {expected} values for `{column}`, got {actual}")]
    LengthMismatch {
        table: String,
        column: String,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, ReconcileError>;
