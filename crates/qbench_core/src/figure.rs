//! Plot-ready view of a benchmark matrix.
//!
//! A `Figure` pairs every matrix column with its legend label and converts
//! the recorded microseconds into milliseconds on the problem-size axis. The
//! host renderer draws exactly what this model holds, so legend order and
//! unit handling are decided here and can be checked without a canvas.

use crate::BenchError;
use crate::matrix::BenchMatrix;
use qbench_common::axis::PROBLEM_SIZES;
use qbench_common::units::MICROS_PER_MILLI;

/// One labelled line of a comparison chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Legend text, used verbatim.
    pub label: String,

    /// `(problem size, milliseconds)` pairs in problem-size order.
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Consecutive points that can be placed on a logarithmic axis.
    ///
    /// Zero, negative and non-finite timings split the series, so a line
    /// drawn through each run breaks at the missing samples instead of
    /// bridging them. Returns no runs if nothing is drawable.
    pub fn log_runs(&self) -> Vec<Vec<(f64, f64)>> {
        let mut runs = Vec::new();
        let mut current = Vec::new();
        for &(x, y) in &self.points {
            if y.is_finite() && y > 0.0 {
                current.push((x, y));
            } else if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}

/// All series of a single comparison chart, in legend order.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    series: Vec<Series>,
}

impl Figure {
    /// Builds the chart model for `matrix`, labelling column `i` with
    /// `labels[i]`.
    ///
    /// The label list must have exactly one entry per column; it is never
    /// truncated or padded to fit.
    ///
    /// # Arguments
    ///
    /// * `matrix` - Timings in microseconds, one column per series
    /// * `labels` - Legend entries in column order
    ///
    /// # Returns
    ///
    /// The figure, or `LabelMismatch` if the counts disagree.
    pub fn new<S: AsRef<str>>(matrix: &BenchMatrix, labels: &[S]) -> Result<Self, BenchError> {
        if labels.len() != matrix.cols() {
            return Err(BenchError::LabelMismatch {
                labels: labels.len(),
                columns: matrix.cols(),
            });
        }

        let series = labels
            .iter()
            .enumerate()
            .map(|(col, label)| Series {
                label: AsRef::<str>::as_ref(label).to_owned(),
                points: PROBLEM_SIZES
                    .iter()
                    .enumerate()
                    .map(|(row, &n)| (f64::from(n), matrix.get(row, col) / MICROS_PER_MILLI))
                    .collect(),
            })
            .collect();

        Ok(Self { series })
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Legend entries in drawing order.
    pub fn legend(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.label.as_str())
    }
}
