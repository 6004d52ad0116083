/// Module that contains addition, transposition and multiplication
pub mod arithmetic;
/// Module that contains conversions between `Matrix` and `ndarray::Array2`
pub mod conversion;

use crate::error::MatrixError;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul};

/// Capability set required from a matrix element.
///
/// Any `Copy` type with an additive identity, addition and multiplication qualifies,
/// which covers every primitive integer and float type.
pub trait Scalar: Copy + Zero + Add<Output = Self> + Mul<Output = Self> {}

impl<T> Scalar for T where T: Copy + Zero + Add<Output = T> + Mul<Output = T> {}

/// Dense two-dimensional matrix with row-major flat storage.
///
/// The element at logical position `(r, c)` lives at flat index `r * columns + c`,
/// and `data.len() == rows * columns` holds for every instance.
///
/// # Fields
///
/// - `rows` - Number of rows
/// - `columns` - Number of columns
/// - `data` - Flat row-major element buffer
///
/// # Examples
/// ```rust
/// use rustyann::matrix::Matrix;
///
/// let a = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
/// let b = Matrix::from_vec(vec![7, 8, 9, 10, 11, 12], 3, 2).unwrap();
///
/// let product = a.multiply(&b).unwrap();
/// assert_eq!(product.as_slice(), &[58, 64, 139, 154]);
/// assert_eq!(product.describe(), "58, 64\n139, 154\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    columns: usize,
    data: Vec<T>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            rows: 0,
            columns: 0,
            data: Vec::new(),
        }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Creates a zero-filled matrix of the given shape.
    ///
    /// # Parameters
    ///
    /// - `rows` - Number of rows
    /// - `columns` - Number of columns
    ///
    /// # Returns
    ///
    /// * `Matrix<T>` - A matrix whose every element is `T::zero()`
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows `usize`.
    pub fn new(rows: usize, columns: usize) -> Self {
        let len = rows
            .checked_mul(columns)
            .unwrap_or_else(|| panic!("matrix shape {}x{} overflows usize", rows, columns));
        Self {
            rows,
            columns,
            data: vec![T::zero(); len],
        }
    }

    /// Creates an `n x n` matrix with ones on the diagonal and zeros elsewhere.
    pub fn identity(n: usize) -> Self
    where
        T: One,
    {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix.set(i, i, T::one());
        }
        matrix
    }

    /// Returns the elements of row `index` in column order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= rows`.
    pub fn row(&self, index: usize) -> Vec<T> {
        self.row_slice(index).to_vec()
    }

    /// Returns the elements of column `index` in row order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= columns`.
    pub fn col(&self, index: usize) -> Vec<T> {
        assert!(
            index < self.columns,
            "column index {} out of range for a {}x{} matrix",
            index,
            self.rows,
            self.columns
        );
        (0..self.rows).map(|row| self.data[self.offset(row, index)]).collect()
    }

    /// Returns the element at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the matrix. Use [`Matrix::try_get`] for a checked variant.
    pub fn get(&self, row: usize, column: usize) -> T {
        self[(row, column)]
    }

    /// Overwrites the element at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the matrix. Use [`Matrix::try_set`] for a checked variant.
    pub fn set(&mut self, row: usize, column: usize, value: T) {
        self[(row, column)] = value;
    }

    /// Checked variant of [`Matrix::get`].
    ///
    /// # Returns
    ///
    /// - `Ok(T)` - The element at `(row, column)`
    /// - `Err(MatrixError::OutOfRange)` - If the position lies outside the matrix
    pub fn try_get(&self, row: usize, column: usize) -> Result<T, MatrixError> {
        self.check_bounds(row, column)?;
        Ok(self.data[self.offset(row, column)])
    }

    /// Checked variant of [`Matrix::set`].
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The element was written
    /// - `Err(MatrixError::OutOfRange)` - If the position lies outside the matrix, in which case nothing is written
    pub fn try_set(&mut self, row: usize, column: usize, value: T) -> Result<(), MatrixError> {
        self.check_bounds(row, column)?;
        let offset = self.offset(row, column);
        self.data[offset] = value;
        Ok(())
    }

    /// Returns a deep copy with the same shape and contents and independent storage.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Replaces every stored value with `f(value)`, in place.
    ///
    /// Shape and element order are preserved.
    ///
    /// # Parameters
    ///
    /// - `f` - Scalar transform applied to each element in row-major order
    pub fn apply<F>(&mut self, mut f: F)
    where
        F: FnMut(T) -> T,
    {
        for value in self.data.iter_mut() {
            *value = f(*value);
        }
    }
}

impl<T> Matrix<T> {
    /// Wraps a flat row-major buffer in a matrix of the given shape.
    ///
    /// # Parameters
    ///
    /// - `data` - Row-major element buffer
    /// - `rows` - Number of rows
    /// - `columns` - Number of columns
    ///
    /// # Returns
    ///
    /// - `Ok(Matrix<T>)` - The matrix owning `data`
    /// - `Err(MatrixError::ConstructionMismatch)` - If `data.len() != rows * columns`
    pub fn from_vec(data: Vec<T>, rows: usize, columns: usize) -> Result<Self, MatrixError> {
        match rows.checked_mul(columns) {
            Some(len) if len == data.len() => Ok(Self {
                rows,
                columns,
                data,
            }),
            _ => Err(MatrixError::ConstructionMismatch {
                rows,
                columns,
                len: data.len(),
            }),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Borrows row `index` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `index >= rows`.
    pub fn row_slice(&self, index: usize) -> &[T] {
        assert!(
            index < self.rows,
            "row index {} out of range for a {}x{} matrix",
            index,
            self.rows,
            self.columns
        );
        let start = self.offset(index, 0);
        &self.data[start..start + self.columns]
    }

    /// Renders the matrix as newline-terminated rows of `", "`-separated values.
    pub fn describe(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    #[inline]
    fn offset(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    fn check_bounds(&self, row: usize, column: usize) -> Result<(), MatrixError> {
        if row < self.rows && column < self.columns {
            Ok(())
        } else {
            Err(MatrixError::OutOfRange {
                row,
                column,
                shape: self.shape(),
            })
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        if let Err(e) = self.check_bounds(row, column) {
            panic!("{}", e);
        }
        &self.data[self.offset(row, column)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        if let Err(e) = self.check_bounds(row, column) {
            panic!("{}", e);
        }
        let offset = self.offset(row, column);
        &mut self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for (column, value) in self.row_slice(row).iter().enumerate() {
                if column > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
