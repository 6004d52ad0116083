pub use crate::error::MatrixError;
pub use crate::math::sigmoid;
pub use crate::matrix::{Matrix, Scalar};
