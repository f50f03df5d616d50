use crate::BenchError;

/// A column slice `start..end` taken every `step` columns.
///
/// `end` may be left open to mean "through the last column". Bounds are
/// checked against the matrix width when the slice is resolved; an explicit
/// end past the width is an error rather than being clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Columns {
    pub start: usize,
    pub end: Option<usize>,
    pub step: usize,
}

impl Columns {
    /// Every column.
    pub const fn all() -> Self {
        Self {
            start: 0,
            end: None,
            step: 1,
        }
    }

    /// Contiguous columns `start..end`.
    pub const fn range(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
            step: 1,
        }
    }

    /// Columns `start..` through the last one.
    pub const fn tail(start: usize) -> Self {
        Self {
            start,
            end: None,
            step: 1,
        }
    }

    /// Every `step`-th column in `start..end`.
    pub const fn stepped(start: usize, end: usize, step: usize) -> Self {
        Self {
            start,
            end: Some(end),
            step,
        }
    }

    /// Resolves the slice into column indices for a matrix `width` wide.
    pub fn indices(&self, width: usize) -> Result<Vec<usize>, BenchError> {
        let end = self.end.unwrap_or(width);
        if end > width {
            return Err(BenchError::ColumnOutOfRange {
                index: end - 1,
                columns: width,
            });
        }
        if self.start >= end || self.step == 0 {
            return Err(BenchError::ColumnOutOfRange {
                index: self.start,
                columns: width,
            });
        }
        Ok((self.start..end).step_by(self.step).collect())
    }
}
