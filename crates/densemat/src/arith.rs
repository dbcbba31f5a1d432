//! Matrix arithmetic: element-wise sums, matrix products, transposition.
//!
//! The checked methods (`add`, `sub`, `mat_mul`) surface shape violations as
//! [`MatrixError::DimensionMismatch`]. The `std::ops` impls on references are
//! sugar over the same methods and panic with the error message instead.

use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

use crate::error::MatrixError;
use crate::matrix::Matrix;

impl<T> Matrix<T>
where
    T: Clone + Add<Output = T>,
{
    /// Element-wise sum. Requires identical shapes.
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if !self.same_size(other) {
            return Err(MatrixError::DimensionMismatch {
                op: "add",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(Matrix::from_fn(self.nrows(), self.ncols(), |i, j| {
            self[(i, j)].clone() + other[(i, j)].clone()
        }))
    }
}

impl<T> Matrix<T>
where
    T: Clone + Sub<Output = T>,
{
    /// Element-wise difference. Requires identical shapes.
    pub fn sub(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if !self.same_size(other) {
            return Err(MatrixError::DimensionMismatch {
                op: "subtract",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(Matrix::from_fn(self.nrows(), self.ncols(), |i, j| {
            self[(i, j)].clone() - other[(i, j)].clone()
        }))
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + Mul<Output = T>,
{
    /// Matrix product `self * other`. Requires `self.ncols() == other.nrows()`.
    ///
    /// Textbook triple loop with a zero-initialized accumulator; O(n^3).
    pub fn mat_mul(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.ncols() != other.nrows() {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let mut out = Matrix::zeros(self.nrows(), other.ncols());
        for i in 0..self.nrows() {
            for j in 0..other.ncols() {
                let mut acc = T::zero();
                for k in 0..self.ncols() {
                    acc = acc + self[(i, k)].clone() * other[(k, j)].clone();
                }
                out[(i, j)] = acc;
            }
        }
        Ok(out)
    }
}

impl<T> Matrix<T>
where
    T: Clone,
{
    /// Transposed copy: `result[(j, i)] == self[(i, j)]`. Never mutates `self`.
    pub fn transpose(&self) -> Matrix<T> {
        Matrix::from_fn(self.ncols(), self.nrows(), |i, j| self[(j, i)].clone())
    }
}

impl<T> Matrix<T>
where
    T: Clone + Mul<Output = T>,
{
    /// Scalar multiple of the whole matrix.
    pub fn scale(&self, factor: T) -> Matrix<T> {
        Matrix::from_fn(self.nrows(), self.ncols(), |i, j| {
            self[(i, j)].clone() * factor.clone()
        })
    }
}

impl<'a, 'b, T> Add<&'b Matrix<T>> for &'a Matrix<T>
where
    T: Clone + Add<Output = T>,
{
    type Output = Matrix<T>;

    fn add(self, rhs: &'b Matrix<T>) -> Matrix<T> {
        match Matrix::add(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b, T> Sub<&'b Matrix<T>> for &'a Matrix<T>
where
    T: Clone + Sub<Output = T>,
{
    type Output = Matrix<T>;

    fn sub(self, rhs: &'b Matrix<T>) -> Matrix<T> {
        match Matrix::sub(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b, T> Mul<&'b Matrix<T>> for &'a Matrix<T>
where
    T: Clone + Zero + Mul<Output = T>,
{
    type Output = Matrix<T>;

    fn mul(self, rhs: &'b Matrix<T>) -> Matrix<T> {
        match Matrix::mat_mul(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}
