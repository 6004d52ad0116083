/// Module `error` contains the error types returned by matrix and network operations.
///
/// - `MatrixError` - shape mismatches, out-of-range element access and invalid construction buffers
/// - `ModelError` - invalid network parameters, processing failures and wrapped `MatrixError`s
pub mod error;

pub use error::{MatrixError, ModelError};

/// Module `matrix` provides `Matrix<T>`, a dense two-dimensional container with row-major flat storage.
///
/// The element type only needs an additive identity, addition and multiplication (the `Scalar`
/// capability set), so every primitive integer and float type can be stored.
///
/// # Operations
///
/// ## Construction
/// - `Matrix::new` - Zero-filled matrix of a given shape
/// - `Matrix::from_vec` - Wraps a flat row-major buffer, rejecting buffers of the wrong length
/// - `Matrix::identity` - Square matrix with ones on the diagonal
/// - `From<ndarray::Array2<T>>` - Conversion from ndarray
///
/// ## Access
/// - `get` / `set` - Unchecked element access that panics on out-of-range positions
/// - `try_get` / `try_set` - Checked element access
/// - `row` / `col` - Copies of a single row or column
///
/// ## Arithmetic
/// - `add` - Elementwise sum of equally shaped matrices
/// - `transpose` - Swaps rows and columns
/// - `multiply` - Matrix product with broadcast disambiguation for vector-shaped operands
/// - `apply` - In-place elementwise transform
///
/// # Example
/// ```rust
/// use rustyann::matrix::Matrix;
///
/// let a = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
///
/// let doubled = a.add(&a).unwrap();
/// assert_eq!(doubled.as_slice(), &[2, 4, 6, 8, 10, 12]);
///
/// let t = a.transpose();
/// assert_eq!(t.shape(), (3, 2));
/// assert_eq!(t.describe(), "1, 4\n2, 5\n3, 6\n");
/// ```
pub mod matrix;

/// Module `math` contains scalar functions shared across the crate.
///
/// - `sigmoid` - Logistic function used as the default normalizing function
pub mod math;

/// Module `traits` defines the strategy interfaces of the network driver.
#[cfg(feature = "neural_network")]
pub mod traits;

/// Module `neural_network` provides a single-layer feed-forward network built on `Matrix<f64>`.
///
/// # Core Components
/// - **SingleLayerNetwork**: Owns the training set and synaptic weights and runs forward passes
/// - **Normalization**: Built-in normalizing functions (sigmoid)
/// - **InitialWeights**: Built-in initial weight generators (uniform)
///
/// Any `Fn(f64) -> f64` closure can be used as a normalizing function, and the random source
/// for weight initialization is always passed in explicitly.
///
/// # Examples
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rustyann::prelude::*;
///
/// let inputs = Matrix::from_vec(vec![0.0, 0.0, 1.0, 1.0, 1.0, 1.0], 2, 3).unwrap();
/// let outputs = Matrix::from_vec(vec![0.0, 1.0], 2, 1).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let mut network = SingleLayerNetwork::new(
///     inputs,
///     outputs,
///     Normalization::Sigmoid,
///     InitialWeights::uniform(-1.0, 1.0).unwrap(),
///     &mut rng,
/// )
/// .unwrap();
///
/// let history = network.train(2).unwrap();
/// assert_eq!(history[0], history[1]);
/// ```
#[cfg(feature = "neural_network")]
pub mod neural_network;

/// A convenience module that re-exports the most commonly used types and traits.
pub mod prelude;
