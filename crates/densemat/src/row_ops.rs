//! In-place elementary row operations and their matrix counterparts.
//!
//! Each factory builds the elementary matrix by applying the matching
//! in-place operation to an identity matrix, so left-multiplying by a
//! factory result always reproduces the in-place operation exactly.

use std::ops::{AddAssign, Mul, MulAssign};

use num_traits::{One, Zero};

use crate::error::MatrixError;
use crate::matrix::Matrix;

impl<T> Matrix<T> {
    /// Exchange the full contents of rows `i` and `j`, column by column.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<(), MatrixError> {
        let a = self.row_offset(i)?;
        let b = self.row_offset(j)?;
        if i == j {
            return Ok(());
        }
        for col in 0..self.ncols() {
            self.as_mut_slice().swap(a + col, b + col);
        }
        Ok(())
    }
}

impl<T> Matrix<T>
where
    T: Clone + MulAssign,
{
    /// Multiply every element of `row` by `factor` in place.
    pub fn scale_row(&mut self, row: usize, factor: T) -> Result<(), MatrixError> {
        let start = self.row_offset(row)?;
        let cols = self.ncols();
        for value in &mut self.as_mut_slice()[start..start + cols] {
            *value *= factor.clone();
        }
        Ok(())
    }
}

impl<T> Matrix<T>
where
    T: Clone + AddAssign + Mul<Output = T>,
{
    /// For every column, `dest[col] += factor * src[col]`.
    ///
    /// The source row is read in full before the destination is updated, so
    /// `src == dest` scales the row by `1 + factor` rather than reading
    /// half-written values.
    pub fn add_scaled_row(
        &mut self,
        src: usize,
        dest: usize,
        factor: T,
    ) -> Result<(), MatrixError> {
        let dest_start = self.row_offset(dest)?;
        let src_row = self.row_slice(src)?.to_vec();
        let cols = self.ncols();
        let dest_row = &mut self.as_mut_slice()[dest_start..dest_start + cols];
        for (value, s) in dest_row.iter_mut().zip(src_row) {
            *value += factor.clone() * s;
        }
        Ok(())
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + One,
{
    /// The `n` x `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Matrix::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Elementary matrix that swaps rows `i` and `j` when left-multiplied.
    pub fn row_swap_matrix(n: usize, i: usize, j: usize) -> Result<Self, MatrixError> {
        let mut m = Self::identity(n);
        m.swap_rows(i, j)?;
        Ok(m)
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + One + MulAssign,
{
    /// Elementary matrix that scales `row` by `scalar` when left-multiplied.
    pub fn row_scale_matrix(n: usize, row: usize, scalar: T) -> Result<Self, MatrixError> {
        let mut m = Self::identity(n);
        m.scale_row(row, scalar)?;
        Ok(m)
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + One + AddAssign + Mul<Output = T>,
{
    /// Elementary matrix that adds `factor` times row `src` into row `dest`
    /// when left-multiplied. With `src == dest` the diagonal entry becomes
    /// `1 + factor`, matching [`Matrix::add_scaled_row`].
    pub fn row_add_matrix(
        n: usize,
        src: usize,
        dest: usize,
        factor: T,
    ) -> Result<Self, MatrixError> {
        let mut m = Self::identity(n);
        m.add_scaled_row(src, dest, factor)?;
        Ok(m)
    }
}
