//! Common definitions and constants shared across the benchmark report tools.
//!
//! This crate fixes the problem-size axis every benchmark was recorded on,
//! the unit conversions applied before plotting, the chart bounds, and the
//! file names the report scenarios read and write. Both the core shaping
//! code and the host binary depend on these values, so they live here
//! without pulling in the standard library.

#![no_std]

/// Problem-size axis and chart geometry shared by every report.
///
/// All benchmark files were recorded on the same six problem sizes, so the
/// row count of every benchmark matrix and the x coordinates of every chart
/// are derived from a single table.
pub mod axis {
    /// Problem sizes (qubit counts) the benchmarks were recorded at.
    ///
    /// Arithmetic progression starting at 10 with step 3. Row `r` of a
    /// benchmark matrix holds the timings measured at `PROBLEM_SIZES[r]`.
    pub const PROBLEM_SIZES: [u32; 6] = [10, 13, 16, 19, 22, 25];

    /// Number of rows in every benchmark matrix.
    pub const ROWS: usize = PROBLEM_SIZES.len();

    /// Lower display bound of the logarithmic time axis, in milliseconds.
    pub const Y_MIN_MS: f64 = 1e-2;

    /// Upper display bound of the logarithmic time axis, in milliseconds.
    pub const Y_MAX_MS: f64 = 1e2;

    /// Description drawn along the time axis.
    pub const Y_DESC: &str = "time in milliseconds";

    /// Description drawn along the problem-size axis.
    pub const X_DESC: &str = "N";
}

/// Unit conversions applied to raw timings.
pub mod units {
    /// Divisor turning the recorded microseconds into plotted milliseconds.
    pub const MICROS_PER_MILLI: f64 = 1e3;

    /// Divisor turning nanosecond recordings into microseconds.
    ///
    /// The Yao results were written in nanoseconds while every other file
    /// uses microseconds, so they are normalised before concatenation.
    pub const NANOS_PER_MICRO: f64 = 1e3;

    /// Number of gate repetitions in the "repeated gate" benchmarks.
    ///
    /// Those benchmarks apply the gate to qubits 2 through 7, so their
    /// timings are divided by this count to compare with a single gate.
    pub const REPEAT_COUNT: f64 = 6.0;
}

/// Fixed input and output file names used by the report scenarios.
///
/// Input paths are relative to the data directory, output names relative
/// to the output directory. Both default to the working directory.
pub mod files {
    /// ProjectQ single and controlled X/Y/Z timings, in the comparison tree.
    pub const PROJECTQ_XYZ: &str = "projectq/xyz-report.dat";

    /// Yao X/CX/Y/CY/Z/CZ timings in nanoseconds, in the comparison tree.
    pub const YAO_XYZ: &str = "yao/xyzcxyz.dat";

    /// Single and controlled X/Y/Z timings for the local simulator.
    pub const XYZ: &str = "xyz-report.dat";

    /// X/Y/Z applied to qubits 2 through 7.
    pub const REPEAT_XYZ: &str = "repeatxyz-report.dat";

    /// H, CH and H applied to qubits 2 through 7.
    pub const HGATE: &str = "h-report.dat";

    /// Toffoli gate timings.
    pub const TOFFOLI: &str = "toffoli-report.dat";

    /// Rx/Ry/Rz and their controlled variants.
    pub const ROT: &str = "rot-report.dat";

    pub const OUT_XYZ: &str = "comparexyz.png";
    pub const OUT_CXYZ: &str = "comparecxyz.png";
    pub const OUT_REPEAT_XYZ: &str = "projectq-repeatxyz.png";
    pub const OUT_COMPARE_REPEAT: &str = "projectq-comparerepeat.png";
    pub const OUT_HGATE: &str = "projectq-h.png";
    pub const OUT_TOFFOLI: &str = "projectq-toffoli.png";
    pub const OUT_ROT: &str = "projectq-rot.png";
}
