use crate::parser::parse_values;
use anyhow::{Context, Result};
use log::debug;
use qbench_core::BenchMatrix;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads a benchmark `.dat` file as a flat sequence of values.
pub fn load_dat_file<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read benchmark file {}", path.display()))?;
    let values =
        parse_values(&text).with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!("{}: {} values", path.display(), values.len());
    Ok(values)
}

/// Loads a benchmark file and reshapes it to `cols` series.
pub fn load_matrix<P: AsRef<Path>>(path: P, cols: usize) -> Result<BenchMatrix> {
    let path = path.as_ref();
    let values = load_dat_file(path)?;
    let matrix = BenchMatrix::from_flat(values, cols)
        .with_context(|| format!("Unexpected shape in {}", path.display()))?;
    Ok(matrix)
}

/// Input to the reshape step: a file still to be read, or a matrix that
/// was already computed in memory.
#[derive(Clone, Debug)]
pub enum MatrixSource {
    File(PathBuf),
    InMemory(BenchMatrix),
}

impl MatrixSource {
    /// Produces a matrix with exactly `cols` series.
    ///
    /// Files are read and reshaped. In-memory matrices are passed through
    /// unchanged after checking their width, since they were shaped by
    /// whoever built them.
    pub fn resolve(self, cols: usize) -> Result<BenchMatrix> {
        match self {
            MatrixSource::File(path) => load_matrix(&path, cols),
            MatrixSource::InMemory(matrix) => {
                if matrix.cols() != cols {
                    return Err(qbench_core::BenchError::ShapeMismatch {
                        rows: matrix.rows(),
                        cols,
                        found: matrix.as_slice().len(),
                    }
                    .into());
                }
                Ok(matrix)
            }
        }
    }
}

impl From<PathBuf> for MatrixSource {
    fn from(path: PathBuf) -> Self {
        MatrixSource::File(path)
    }
}

impl From<BenchMatrix> for MatrixSource {
    fn from(matrix: BenchMatrix) -> Self {
        MatrixSource::InMemory(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbench_core::BenchError;
    use std::io::ErrorKind;

    fn write_dat(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn loads_and_reshapes_file() {
        let dir = tempfile::tempdir().unwrap();
        let text: String = (1..=18)
            .map(|v| format!("{}\n", v * 1000))
            .collect();
        let path = write_dat(dir.path(), "abc.dat", &text);

        let m = load_matrix(&path, 3).unwrap();
        assert_eq!(m.row(0), &[1000.0, 2000.0, 3000.0]);
        assert_eq!(m.row(5), &[16000.0, 17000.0, 18000.0]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dat_file(dir.path().join("nope.dat")).unwrap_err();
        let io = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("nope.dat"));
    }

    #[test]
    fn wrong_count_is_a_shape_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dat(dir.path(), "short.dat", "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17");

        let err = load_matrix(&path, 3).unwrap_err();
        assert_eq!(
            err.downcast_ref::<BenchError>(),
            Some(&BenchError::ShapeMismatch {
                rows: 6,
                cols: 3,
                found: 17
            })
        );
    }

    #[test]
    fn unparsable_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dat(dir.path(), "bad.dat", "1 2\nx\n");
        let err = load_dat_file(&path).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("bad.dat"));
        assert!(chain.contains("line 2"));
    }

    #[test]
    fn source_resolves_both_variants() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dat(dir.path(), "one.dat", "1 2 3 4 5 6");

        let from_file = MatrixSource::from(path).resolve(1).unwrap();
        assert_eq!(from_file.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let from_memory = MatrixSource::from(from_file.clone()).resolve(1).unwrap();
        assert_eq!(from_memory, from_file);
    }

    #[test]
    fn in_memory_source_checks_width() {
        let m = BenchMatrix::from_flat(vec![0.5; 12], 2).unwrap();
        let err = MatrixSource::InMemory(m).resolve(3).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BenchError>(),
            Some(BenchError::ShapeMismatch { cols: 3, found: 12, .. })
        ));
    }
}
