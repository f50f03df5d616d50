//! Core data model for benchmark comparison reports.
//!
//! This crate provides the fixed-height benchmark matrix, the column
//! selections applied to it, and the chart model built from a matrix and its
//! series labels. Nothing here touches the filesystem or a drawing surface;
//! loading lives in `qbench_io` and rendering in the host binary.

use thiserror::Error;

/// Figure model: one labelled series per matrix column.
///
/// Converts a benchmark matrix into plot-ready points on the problem-size
/// axis, with timings in milliseconds, and enforces that every column has
/// exactly one legend label.
pub mod figure;

/// Fixed-height benchmark matrix.
///
/// Row-major storage of timings with one row per problem size and one
/// column per compared series. Provides the reshape, slicing,
/// concatenation and rescaling operations used by the report scenarios.
pub mod matrix;

/// Column selections in slice notation.
///
/// Describes a `start..end` range with a step, resolved against a concrete
/// matrix width when applied.
pub mod selection;

pub use figure::{Figure, Series};
pub use matrix::BenchMatrix;
pub use selection::Columns;

/// Error types returned while shaping benchmark data.
///
/// Every variant describes a contract violation between the data on disk,
/// the scenario description, and the labels supplied for the chart. None of
/// them are recoverable; callers propagate them to the top level.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// The number of values does not fill a `rows x cols` matrix exactly.
    ///
    /// Raised by the reshape step when a data file holds more or fewer
    /// values than the scenario expects, usually because the file belongs to
    /// a different benchmark or was truncated.
    #[error("cannot reshape {found} values into a {rows}x{cols} matrix")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        found: usize,
    },

    /// The label list and the matrix disagree on the number of series.
    ///
    /// Labels are never truncated or padded to fit; a mismatch is a bug in
    /// the scenario description.
    #[error("{labels} labels supplied for {columns} series")]
    LabelMismatch { labels: usize, columns: usize },

    /// A column index or slice bound lies outside the matrix.
    #[error("column {index} out of range for a matrix with {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },

    /// A matrix was requested with zero series.
    #[error("a benchmark matrix needs at least one series")]
    NoSeries,
}
