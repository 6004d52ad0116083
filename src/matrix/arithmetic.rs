use super::{Matrix, Scalar};
use crate::error::MatrixError;
use std::borrow::Cow;

impl<T: Scalar> Matrix<T> {
    /// Elementwise sum of two matrices of identical shape.
    ///
    /// # Parameters
    ///
    /// - `other` - Right-hand operand, must have the same shape as `self`
    ///
    /// # Returns
    ///
    /// - `Ok(Matrix<T>)` - A new matrix with the same shape, sharing storage with neither operand
    /// - `Err(MatrixError::ShapeMismatch)` - If the shapes differ
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                operation: "add",
                left: self.shape(),
                right: other.shape(),
            });
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();

        Ok(Matrix {
            rows: self.rows,
            columns: self.columns,
            data,
        })
    }

    /// Returns a new `(columns, rows)` matrix with `result[c, r] == self[r, c]`.
    pub fn transpose(&self) -> Matrix<T> {
        let mut result = Matrix::new(self.columns, self.rows);
        for row in 0..self.rows {
            for column in 0..self.columns {
                result.data[column * self.rows + row] = self.data[self.offset(row, column)];
            }
        }
        result
    }

    /// Matrix product with broadcast disambiguation for vector-shaped operands.
    ///
    /// Before the standard product is taken, operands are adjusted as follows:
    ///
    /// 1. If both operands are `1 x n` row vectors, the right operand is transposed.
    /// 2. Otherwise, if both are `n x 1` column vectors, the left operand is transposed.
    ///
    /// The row-vector rule wins for `1 x 1` operands. Neither operand is modified.
    ///
    /// # Parameters
    ///
    /// - `other` - Right-hand operand
    ///
    /// # Returns
    ///
    /// - `Ok(Matrix<T>)` - A `(left.rows, right.columns)` matrix with `result[i, j] = sum_k left[i, k] * right[k, j]`
    /// - `Err(MatrixError::ShapeMismatch)` - If `left.columns != right.rows` after adjustment
    ///
    /// # Examples
    /// ```rust
    /// use rustyann::matrix::Matrix;
    ///
    /// let a = Matrix::from_vec(vec![1, 2, 3], 1, 3).unwrap();
    /// let b = Matrix::from_vec(vec![4, 5, 6], 1, 3).unwrap();
    ///
    /// // (1 x 3) * (1 x 3) is read as a * b^T
    /// let dot = a.multiply(&b).unwrap();
    /// assert_eq!(dot.shape(), (1, 1));
    /// assert_eq!(dot.get(0, 0), 32);
    /// ```
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        let (left, right): (Cow<'_, Matrix<T>>, Cow<'_, Matrix<T>>) =
            if self.rows == 1 && other.rows == 1 && self.columns == other.columns {
                (Cow::Borrowed(self), Cow::Owned(other.transpose()))
            } else if self.columns == 1 && other.columns == 1 && self.rows == other.rows {
                (Cow::Owned(self.transpose()), Cow::Borrowed(other))
            } else {
                (Cow::Borrowed(self), Cow::Borrowed(other))
            };

        if left.columns != right.rows {
            return Err(MatrixError::ShapeMismatch {
                operation: "multiply",
                left: left.shape(),
                right: right.shape(),
            });
        }

        let mut product = Matrix::new(left.rows, right.columns);
        for left_row in 0..left.rows {
            let row = left.row_slice(left_row);
            for right_column in 0..right.columns {
                let column = right.col(right_column);
                product.data[left_row * right.columns + right_column] =
                    vector_product(row, &column);
            }
        }
        Ok(product)
    }
}

/// Sum of pairwise products, accumulated from `T::zero()` in index order.
pub(crate) fn vector_product<T: Scalar>(left: &[T], right: &[T]) -> T {
    left.iter()
        .zip(right.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
}
