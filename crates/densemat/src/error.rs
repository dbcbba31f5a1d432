use std::error::Error;
use std::fmt;

/// Errors raised by matrix construction, access, and arithmetic.
///
/// Indexing failures (`OutOfRange`, `RowOutOfRange`) and shape-compatibility
/// failures (`DimensionMismatch`) are separate variants so callers can treat
/// an indexing bug differently from a shape contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// An element coordinate fell outside the matrix bounds.
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// A row index fell outside the matrix bounds.
    RowOutOfRange { row: usize, rows: usize },
    /// Operand shapes do not satisfy the operation's compatibility rule.
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// A flat buffer's length does not match the requested shape.
    BufferLength {
        rows: usize,
        cols: usize,
        len: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::OutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({}, {}) out of range for {}x{} matrix",
                row, col, rows, cols
            ),
            MatrixError::RowOutOfRange { row, rows } => {
                write!(f, "row {} out of range for matrix with {} rows", row, rows)
            }
            MatrixError::DimensionMismatch { op, lhs, rhs } => write!(
                f,
                "cannot {} {}x{} matrix with {}x{} matrix",
                op, lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::BufferLength { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
        }
    }
}

impl Error for MatrixError {}
