//! densemat: a dense, row-major matrix type with elementary row operations.
//!
//! Provides a generic [`Matrix<T>`] with checked element access, element-wise
//! arithmetic, matrix products, transposition, and in-place row operations,
//! together with factory functions for the elementary matrices that perform
//! the same row operations when left-multiplied.
//!
//! The types are intentionally small and dependency-light. Numeric behavior
//! follows the element type's native arithmetic with no extra checks, so
//! integer overflow and floating-point rounding behave exactly as they would
//! on the element type itself.
pub mod error;
pub mod matrix;

mod arith;
mod row_ops;

pub use error::MatrixError;
pub use matrix::Matrix;
