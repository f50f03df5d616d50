//! Named benchmark report scenarios.
//!
//! Each scenario selects one or two benchmark files, slices and rescales
//! their columns, concatenates the pieces side by side, and renders the
//! result as a single comparison chart. The set of scenarios is closed, so
//! each one is an enum case with a fixed configuration record.

use crate::plot::{self, PlotStyle};
use crate::report::RatioReport;
use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use qbench_common::files;
use qbench_common::units::{NANOS_PER_MICRO, REPEAT_COUNT};
use qbench_core::{BenchMatrix, Columns, Figure};
use qbench_io::MatrixSource;
use std::path::{Path, PathBuf};

/// Where scenarios read from and write to, and how charts are drawn.
#[derive(Clone, Debug)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
    pub style: PlotStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            out_dir: PathBuf::from("."),
            style: PlotStyle::default(),
        }
    }
}

/// One input file contributing columns to a scenario's matrix.
#[derive(Clone, Debug)]
pub struct Part {
    /// Path relative to the data directory.
    pub file: &'static str,

    /// Number of series stored in the file.
    pub width: usize,

    /// Columns taken from the file, in order.
    pub columns: Columns,

    /// Divisor applied to every taken value.
    pub divisor: f64,
}

impl Part {
    fn whole(file: &'static str, width: usize) -> Self {
        Self {
            file,
            width,
            columns: Columns::all(),
            divisor: 1.0,
        }
    }
}

/// Everything a scenario needs besides the data directory.
#[derive(Clone, Debug)]
pub struct ScenarioConfig {
    /// Inputs, concatenated left to right.
    pub parts: Vec<Part>,

    /// Column of the concatenated matrix divided in place, and the divisor.
    pub rescale: Option<(usize, f64)>,

    /// Columns `(numerator, denominator)` whose ratio is printed.
    pub ratio: Option<(usize, usize)>,

    pub labels: &'static [&'static str],

    /// File name relative to the output directory.
    pub output: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    Xyz,
    Cxyz,
    RepeatXyz,
    CompareRepeat,
    HGate,
    Toffoli,
    Rot,
}

impl Scenario {
    pub const ALL: [Scenario; 7] = [
        Scenario::Xyz,
        Scenario::Cxyz,
        Scenario::RepeatXyz,
        Scenario::CompareRepeat,
        Scenario::HGate,
        Scenario::Toffoli,
        Scenario::Rot,
    ];

    /// Command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Scenario::Xyz => "xyz",
            Scenario::Cxyz => "cxyz",
            Scenario::RepeatXyz => "repeatxyz",
            Scenario::CompareRepeat => "comparer",
            Scenario::HGate => "hgate",
            Scenario::Toffoli => "toffoli",
            Scenario::Rot => "rot",
        }
    }

    pub fn config(self) -> ScenarioConfig {
        match self {
            Scenario::Xyz => ScenarioConfig {
                parts: vec![
                    Part {
                        columns: Columns::range(0, 3),
                        ..Part::whole(files::PROJECTQ_XYZ, 6)
                    },
                    Part {
                        columns: Columns::stepped(0, 6, 2),
                        divisor: NANOS_PER_MICRO,
                        ..Part::whole(files::YAO_XYZ, 6)
                    },
                ],
                rescale: None,
                ratio: None,
                labels: &["Q-X", "Q-Y", "Q-Z", "Y-X", "Y-Y", "Y-Z"],
                output: files::OUT_XYZ,
            },
            Scenario::Cxyz => ScenarioConfig {
                parts: vec![
                    Part {
                        columns: Columns::tail(3),
                        ..Part::whole(files::PROJECTQ_XYZ, 6)
                    },
                    Part {
                        columns: Columns::stepped(1, 6, 2),
                        divisor: NANOS_PER_MICRO,
                        ..Part::whole(files::YAO_XYZ, 6)
                    },
                ],
                rescale: None,
                ratio: None,
                labels: &["Q-CX", "Q-CY", "Q-CZ", "Y-CX", "Y-CY", "Y-CZ"],
                output: files::OUT_CXYZ,
            },
            Scenario::RepeatXyz => ScenarioConfig {
                parts: vec![Part::whole(files::REPEAT_XYZ, 3)],
                rescale: None,
                ratio: None,
                labels: &["X(2-7)", "Y(2-7)", "Z(2-7)"],
                output: files::OUT_REPEAT_XYZ,
            },
            Scenario::CompareRepeat => ScenarioConfig {
                parts: vec![
                    Part {
                        columns: Columns::range(0, 1),
                        ..Part::whole(files::XYZ, 6)
                    },
                    Part {
                        columns: Columns::range(0, 1),
                        divisor: REPEAT_COUNT,
                        ..Part::whole(files::REPEAT_XYZ, 3)
                    },
                ],
                rescale: None,
                ratio: None,
                labels: &["X(2)", "X(2-7) (time divided by 6)"],
                output: files::OUT_COMPARE_REPEAT,
            },
            Scenario::HGate => ScenarioConfig {
                parts: vec![Part::whole(files::HGATE, 3)],
                rescale: Some((2, REPEAT_COUNT)),
                ratio: Some((2, 0)),
                labels: &["H", "CH", "H(2-7) (time / 6)"],
                output: files::OUT_HGATE,
            },
            Scenario::Toffoli => ScenarioConfig {
                parts: vec![Part::whole(files::TOFFOLI, 1)],
                rescale: None,
                ratio: None,
                labels: &["toffoli"],
                output: files::OUT_TOFFOLI,
            },
            Scenario::Rot => ScenarioConfig {
                parts: vec![Part::whole(files::ROT, 6)],
                rescale: None,
                ratio: None,
                labels: &["Rx", "Ry", "Rz", "C-Rx", "C-Ry", "C-Rz"],
                output: files::OUT_ROT,
            },
        }
    }

    /// Loads, slices, rescales and concatenates the scenario's inputs.
    ///
    /// Nothing is drawn; the returned matrix is exactly what would be
    /// plotted, still in microseconds.
    pub fn assemble(self, data_dir: &Path) -> Result<BenchMatrix> {
        let config = self.config();
        let mut assembled: Option<BenchMatrix> = None;

        for part in &config.parts {
            let path = data_dir.join(part.file);
            info!("{}: loading {}", self.name(), path.display());
            let picked = MatrixSource::File(path)
                .resolve(part.width)?
                .select(&part.columns)
                .with_context(|| format!("Bad column selection for {}", part.file))?
                .scaled(part.divisor);

            assembled = Some(match assembled {
                Some(left) => left.hconcat(&picked),
                None => picked,
            });
        }

        let mut matrix =
            assembled.ok_or_else(|| anyhow!("scenario {} has no inputs", self.name()))?;
        if let Some((col, divisor)) = config.rescale {
            matrix.divide_column(col, divisor)?;
        }
        debug!("{}: {}x{} matrix", self.name(), matrix.rows(), matrix.cols());
        Ok(matrix)
    }

    /// The plotting input for this scenario.
    ///
    /// A scenario that plots one file unchanged hands over the path and
    /// leaves the reshape to `resolve`; anything sliced, joined or rescaled
    /// is assembled here and handed over in memory.
    pub fn source(self, data_dir: &Path) -> Result<MatrixSource> {
        let config = self.config();
        match config.parts.as_slice() {
            [part]
                if part.columns == Columns::all()
                    && part.divisor == 1.0
                    && config.rescale.is_none() =>
            {
                let path = data_dir.join(part.file);
                info!("{}: loading {}", self.name(), path.display());
                Ok(path.into())
            }
            _ => Ok(self.assemble(data_dir)?.into()),
        }
    }

    /// Runs the scenario to completion and returns the written image path.
    pub fn run(self, settings: &Settings) -> Result<PathBuf> {
        let config = self.config();
        let matrix = self
            .source(&settings.data_dir)?
            .resolve(config.labels.len())?;

        if let Some((numerator, denominator)) = config.ratio {
            let report = RatioReport::new(
                &matrix,
                (config.labels[numerator], numerator),
                (config.labels[denominator], denominator),
            )?;
            report.print_report();
        }

        let figure = Figure::new(&matrix, config.labels)?;
        debug!(
            "{}: series {}",
            self.name(),
            figure.legend().collect::<Vec<_>>().join(", ")
        );
        let output = settings.out_dir.join(config.output);
        plot::render(&figure, &output, &settings.style)?;
        info!("{}: wrote {}", self.name(), output.display());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbench_core::BenchError;
    use std::fs;

    /// Writes a `6 x width` file whose value at (r, c) is `f(r, c)`.
    fn write_dat(dir: &Path, rel: &str, width: usize, f: impl Fn(usize, usize) -> f64) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut text = String::new();
        for r in 0..6 {
            let row: Vec<String> = (0..width).map(|c| f(r, c).to_string()).collect();
            text.push_str(&row.join(" "));
            text.push('\n');
        }
        fs::write(path, text).unwrap();
    }

    #[test]
    fn labels_match_assembled_width() {
        for scenario in Scenario::ALL {
            let config = scenario.config();
            let width: usize = config
                .parts
                .iter()
                .map(|p| p.columns.indices(p.width).unwrap().len())
                .sum();
            assert_eq!(width, config.labels.len(), "{}", scenario.name());
        }
    }

    #[test]
    fn names_and_outputs_are_unique() {
        let mut names: Vec<_> = Scenario::ALL.iter().map(|s| s.name()).collect();
        let mut outputs: Vec<_> = Scenario::ALL.iter().map(|s| s.config().output).collect();
        names.sort();
        names.dedup();
        outputs.sort();
        outputs.dedup();
        assert_eq!(names.len(), 7);
        assert_eq!(outputs.len(), 7);
    }

    #[test]
    fn hgate_divides_repeated_column_by_six() {
        let dir = tempfile::tempdir().unwrap();
        let value = |r: usize, c: usize| 137.0 * (r + 1) as f64 + 11.0 * c as f64;
        write_dat(dir.path(), files::HGATE, 3, value);

        let m = Scenario::HGate.assemble(dir.path()).unwrap();
        assert_eq!(m.cols(), 3);
        for r in 0..6 {
            assert_eq!(m.get(r, 0), value(r, 0));
            assert_eq!(m.get(r, 1), value(r, 1));
            assert_eq!(m.get(r, 2), value(r, 2) / 6.0);
        }
    }

    #[test]
    fn xyz_joins_projectq_with_normalised_yao() {
        let dir = tempfile::tempdir().unwrap();
        let q = |r: usize, c: usize| (10 * r + c) as f64;
        let y = |r: usize, c: usize| (1000 * (10 * r + c)) as f64;
        write_dat(dir.path(), files::PROJECTQ_XYZ, 6, q);
        write_dat(dir.path(), files::YAO_XYZ, 6, y);

        let m = Scenario::Xyz.assemble(dir.path()).unwrap();
        for r in 0..6 {
            let expected = [q(r, 0), q(r, 1), q(r, 2), y(r, 0) / 1e3, y(r, 2) / 1e3, y(r, 4) / 1e3];
            assert_eq!(m.row(r), &expected);
        }

        let m = Scenario::Cxyz.assemble(dir.path()).unwrap();
        for r in 0..6 {
            let expected = [q(r, 3), q(r, 4), q(r, 5), y(r, 1) / 1e3, y(r, 3) / 1e3, y(r, 5) / 1e3];
            assert_eq!(m.row(r), &expected);
        }
    }

    #[test]
    fn comparer_scales_repeated_x() {
        let dir = tempfile::tempdir().unwrap();
        write_dat(dir.path(), files::XYZ, 6, |r, c| (r * 6 + c) as f64);
        write_dat(dir.path(), files::REPEAT_XYZ, 3, |r, c| 60.0 * (r + c + 1) as f64);

        let m = Scenario::CompareRepeat.assemble(dir.path()).unwrap();
        assert_eq!(m.cols(), 2);
        for r in 0..6 {
            assert_eq!(m.row(r), &[(r * 6) as f64, 60.0 * (r + 1) as f64 / 6.0]);
        }
    }

    #[test]
    fn unchanged_files_are_passed_by_path() {
        let dir = tempfile::tempdir().unwrap();
        for scenario in [Scenario::RepeatXyz, Scenario::Toffoli, Scenario::Rot] {
            let source = scenario.source(dir.path()).unwrap();
            let expected = dir.path().join(scenario.config().parts[0].file);
            assert!(matches!(source, MatrixSource::File(path) if path == expected));
        }
    }

    #[test]
    fn shaped_inputs_are_passed_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        write_dat(dir.path(), files::HGATE, 3, |r, c| (r * 3 + c + 1) as f64);

        let source = Scenario::HGate.source(dir.path()).unwrap();
        let assembled = Scenario::HGate.assemble(dir.path()).unwrap();
        assert!(matches!(&source, MatrixSource::InMemory(m) if *m == assembled));
        assert_eq!(source.resolve(3).unwrap(), assembled);
    }

    #[test]
    fn path_source_resolves_to_the_label_width() {
        let dir = tempfile::tempdir().unwrap();
        write_dat(dir.path(), files::ROT, 6, |r, c| (r * 6 + c) as f64);

        let labels = Scenario::Rot.config().labels.len();
        let matrix = Scenario::Rot.source(dir.path()).unwrap().resolve(labels).unwrap();
        assert_eq!(matrix, Scenario::Rot.assemble(dir.path()).unwrap());
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = Scenario::Toffoli.assemble(dir.path()).unwrap_err();
        let io = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn wrong_width_is_a_shape_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        write_dat(dir.path(), files::ROT, 5, |r, c| (r + c) as f64);

        let err = Scenario::Rot.assemble(dir.path()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<BenchError>(),
            Some(&BenchError::ShapeMismatch {
                rows: 6,
                cols: 6,
                found: 30
            })
        );
    }

    #[test]
    fn failed_run_writes_nothing() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let settings = Settings {
            data_dir: data.path().to_path_buf(),
            out_dir: out.path().to_path_buf(),
            ..Settings::default()
        };

        assert!(Scenario::RepeatXyz.run(&settings).is_err());
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    #[ignore = "needs a system sans-serif font"]
    fn run_writes_the_named_image() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_dat(data.path(), files::TOFFOLI, 1, |r, _| 100.0 * (r + 1) as f64);
        let settings = Settings {
            data_dir: data.path().to_path_buf(),
            out_dir: out.path().to_path_buf(),
            ..Settings::default()
        };

        let written = Scenario::Toffoli.run(&settings).unwrap();
        assert_eq!(written, out.path().join(files::OUT_TOFFOLI));
        assert!(written.is_file());
    }
}
