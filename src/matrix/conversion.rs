use super::Matrix;
use crate::error::MatrixError;
use ndarray::Array2;

/// Builds a matrix from an `ndarray` 2D array.
///
/// Elements are read in logical row-major order, so arrays with a transposed or
/// otherwise non-standard memory layout convert correctly.
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rustyann::matrix::Matrix;
///
/// let a = array![[1.0, 2.0], [3.0, 4.0]];
/// let m = Matrix::from(a.t().to_owned());
/// assert_eq!(m.row(0), vec![1.0, 3.0]);
/// ```
impl<T: Clone> From<Array2<T>> for Matrix<T> {
    fn from(array: Array2<T>) -> Self {
        let (rows, columns) = array.dim();
        Matrix {
            rows,
            columns,
            data: array.iter().cloned().collect(),
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Copies the matrix into an `ndarray` 2D array of the same shape.
    ///
    /// # Returns
    ///
    /// - `Ok(Array2<T>)` - An array in standard (row-major) layout
    /// - `Err(MatrixError::ConstructionMismatch)` - If ndarray rejects the shape
    pub fn to_array2(&self) -> Result<Array2<T>, MatrixError> {
        Array2::from_shape_vec((self.rows, self.columns), self.data.clone()).map_err(|_| {
            MatrixError::ConstructionMismatch {
                rows: self.rows,
                columns: self.columns,
                len: self.data.len(),
            }
        })
    }
}
