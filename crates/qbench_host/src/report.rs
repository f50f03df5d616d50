//! Per-problem-size ratio between two benchmark series.
//!
//! Used to check how far a normalised repeated-gate measurement lands from
//! the single-gate measurement it is compared against. The report is
//! printed to stdout alongside the rendered chart.

use anyhow::Result;
use qbench_common::axis::PROBLEM_SIZES;
use qbench_core::BenchMatrix;
use std::fmt;

/// Ratio of one matrix column to another at every problem size.
pub struct RatioReport {
    pub numerator: String,
    pub denominator: String,
    pub ratios: Vec<(u32, f64)>,
}

impl RatioReport {
    /// Computes `numerator / denominator` for every row of `matrix`.
    ///
    /// # Arguments
    ///
    /// * `matrix` - Benchmark timings
    /// * `numerator` - Label and column index of the dividend series
    /// * `denominator` - Label and column index of the divisor series
    pub fn new(
        matrix: &BenchMatrix,
        numerator: (&str, usize),
        denominator: (&str, usize),
    ) -> Result<Self> {
        let ratios = matrix.column_ratio(numerator.1, denominator.1)?;
        Ok(Self {
            numerator: numerator.0.to_owned(),
            denominator: denominator.0.to_owned(),
            ratios: PROBLEM_SIZES.iter().copied().zip(ratios).collect(),
        })
    }

    /// Prints the ratio table to stdout.
    pub fn print_report(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for RatioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ratio {} / {}", self.numerator, self.denominator)?;
        writeln!(f, "{:>4}  {:>10}", "N", "ratio")?;
        for (n, ratio) in &self.ratios {
            writeln!(f, "{:>4}  {:>10.4}", n, ratio)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabulates_ratio_per_problem_size() {
        let values: Vec<f64> = (1..=6).flat_map(|r| [r as f64, 0.0, 2.0 * r as f64]).collect();
        let matrix = BenchMatrix::from_flat(values, 3).unwrap();
        let report = RatioReport::new(&matrix, ("H(2-7)", 2), ("H", 0)).unwrap();

        assert_eq!(report.ratios.len(), 6);
        assert_eq!(report.ratios[0], (10, 2.0));
        assert_eq!(report.ratios[5], (25, 2.0));

        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Ratio H(2-7) / H");
        assert_eq!(lines[1], "   N       ratio");
        assert_eq!(lines[2], "  10      2.0000");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn rejects_unknown_column() {
        let matrix = BenchMatrix::from_flat(vec![1.0; 6], 1).unwrap();
        assert!(RatioReport::new(&matrix, ("a", 1), ("b", 0)).is_err());
    }
}
