//! I/O utilities for loading benchmark timing files.
//!
//! Provides functions for reading the flat `.dat` files written by the
//! simulator benchmarks and turning them into benchmark matrices. These
//! utilities handle file access, token parsing, and the reshape into the
//! fixed problem-size layout.

/// File loading and matrix sources.
///
/// Reads `.dat` files from disk, reshapes them into benchmark matrices, and
/// defines the path-or-matrix input accepted by the report scenarios.
pub mod loader;

/// Parser for whitespace separated numeric text.
///
/// Tokenises benchmark files line by line into a flat sequence of floats,
/// skipping blank lines and `#` comments and reporting the first invalid
/// token with its line number.
pub mod parser;

pub use loader::{MatrixSource, load_dat_file, load_matrix};
pub use parser::parse_values;
