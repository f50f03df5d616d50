//! Fixed-height benchmark matrix.
//!
//! Every benchmark file records one timing per (problem size, series) pair.
//! The matrix stores those timings row-major: row `r` belongs to the problem
//! size `PROBLEM_SIZES[r]`, column `c` to the `c`-th compared series. The
//! row count is fixed by the problem-size axis; only the column count varies.

use crate::BenchError;
use crate::selection::Columns;
use qbench_common::axis::ROWS;

/// Benchmark timings with one row per problem size.
///
/// Values are kept in whatever unit the source recorded (microseconds for
/// every report file once the Yao nanoseconds are normalised). Conversion to
/// milliseconds happens when a figure is built.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchMatrix {
    /// Row-major values, `ROWS * cols` long.
    data: Vec<f64>,

    /// Number of series.
    cols: usize,
}

impl BenchMatrix {
    /// Reshapes a flat, row-major sequence into a `ROWS x cols` matrix.
    ///
    /// The first `cols` values become row 0, the next `cols` row 1, and so
    /// on. The sequence must hold exactly `ROWS * cols` values.
    ///
    /// # Arguments
    ///
    /// * `values` - Flat timings as read from a benchmark file
    /// * `cols` - Number of series, normally the number of legend labels
    ///
    /// # Returns
    ///
    /// The reshaped matrix, `ShapeMismatch` if the length is wrong, or
    /// `NoSeries` if `cols` is zero.
    pub fn from_flat(values: Vec<f64>, cols: usize) -> Result<Self, BenchError> {
        if cols == 0 {
            return Err(BenchError::NoSeries);
        }
        if values.len() != ROWS * cols {
            return Err(BenchError::ShapeMismatch {
                rows: ROWS,
                cols,
                found: values.len(),
            });
        }
        Ok(Self { data: values, cols })
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major view of every value.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.cols, "column {col} out of bounds");
        self.data[row * self.cols + col]
    }

    /// The timings of every series at one problem size.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// One series across all problem sizes, top to bottom.
    pub fn column(&self, col: usize) -> Result<Vec<f64>, BenchError> {
        self.check_column(col)?;
        Ok(self.data.iter().skip(col).step_by(self.cols).copied().collect())
    }

    /// Copies the columns described by a slice selection.
    pub fn select(&self, columns: &Columns) -> Result<Self, BenchError> {
        let indices = columns.indices(self.cols)?;
        self.select_indices(&indices)
    }

    /// Copies the given columns, in the given order, into a new matrix.
    pub fn select_indices(&self, indices: &[usize]) -> Result<Self, BenchError> {
        if indices.is_empty() {
            return Err(BenchError::NoSeries);
        }
        for &col in indices {
            self.check_column(col)?;
        }

        let mut data = Vec::with_capacity(ROWS * indices.len());
        for row in 0..ROWS {
            let row = self.row(row);
            data.extend(indices.iter().map(|&c| row[c]));
        }
        Ok(Self {
            data,
            cols: indices.len(),
        })
    }

    /// Concatenates two matrices column-wise, `self` on the left.
    ///
    /// Both operands always have `ROWS` rows, so concatenation cannot fail.
    pub fn hconcat(&self, other: &BenchMatrix) -> Self {
        let cols = self.cols + other.cols;
        let mut data = Vec::with_capacity(ROWS * cols);
        for row in 0..ROWS {
            data.extend_from_slice(self.row(row));
            data.extend_from_slice(other.row(row));
        }
        Self { data, cols }
    }

    /// Returns a copy with every value divided by `divisor`.
    pub fn scaled(&self, divisor: f64) -> Self {
        Self {
            data: self.data.iter().map(|v| v / divisor).collect(),
            cols: self.cols,
        }
    }

    /// Divides one column in place.
    ///
    /// Used to normalise a repeated-gate measurement by its repetition
    /// count while leaving the other series untouched.
    pub fn divide_column(&mut self, col: usize, divisor: f64) -> Result<(), BenchError> {
        self.check_column(col)?;
        for value in self.data.iter_mut().skip(col).step_by(self.cols) {
            *value /= divisor;
        }
        Ok(())
    }

    /// Element-wise ratio `numerator / denominator` between two columns.
    pub fn column_ratio(&self, numerator: usize, denominator: usize) -> Result<Vec<f64>, BenchError> {
        let num = self.column(numerator)?;
        let den = self.column(denominator)?;
        Ok(num.iter().zip(&den).map(|(n, d)| n / d).collect())
    }

    fn check_column(&self, col: usize) -> Result<(), BenchError> {
        if col >= self.cols {
            return Err(BenchError::ColumnOutOfRange {
                index: col,
                columns: self.cols,
            });
        }
        Ok(())
    }
}
