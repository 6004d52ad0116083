use crate::ModelError;
use crate::matrix::Matrix;
use rand::Rng;

/// Scalar squashing function applied elementwise to a layer's raw output.
///
/// Implemented by [`crate::neural_network::Normalization`] and by any `Fn(f64) -> f64`,
/// so a closure can stand in for a built-in variant.
pub trait NormalizingFunction {
    /// Maps a single raw value to its normalized value.
    ///
    /// # Parameters
    ///
    /// * `x` - Raw output value
    ///
    /// # Returns
    ///
    /// * `f64` - The normalized value
    fn calculate(&self, x: f64) -> f64;
}

impl<F> NormalizingFunction for F
where
    F: Fn(f64) -> f64,
{
    fn calculate(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Strategy for producing the initial synaptic weight matrix.
///
/// The random source is always supplied by the caller, which keeps initialization
/// reproducible when a seeded generator is passed in.
pub trait WeightGenerator {
    /// Generates a `rows x columns` weight matrix.
    ///
    /// # Parameters
    ///
    /// - `rows` - Number of rows of the weight matrix
    /// - `columns` - Number of columns of the weight matrix
    /// - `rng` - Random number generator to draw from
    ///
    /// # Returns
    ///
    /// * `Result<Matrix<f64>, ModelError>` - The generated weights or an error
    fn matrix<R: Rng + ?Sized>(
        &self,
        rows: usize,
        columns: usize,
        rng: &mut R,
    ) -> Result<Matrix<f64>, ModelError>;
}

/// Defines the interface of a single-layer feed-forward network.
///
/// The network owns its training data and synaptic weights and exposes the
/// strategies it was built with.
pub trait ArtificialNeuralNetwork {
    /// Normalizing function type used by the network
    type Normalizer: NormalizingFunction;
    /// Weight generator type used by the network
    type Generator: WeightGenerator;

    /// Returns the normalizing function applied after each forward product.
    fn normalizing_function(&self) -> &Self::Normalizer;

    /// Returns the generator that produced the initial synaptic weights.
    fn weight_generator(&self) -> &Self::Generator;

    /// Returns the current synaptic weights, shape `(input_columns, 1)`.
    fn synaptic_weights(&self) -> &Matrix<f64>;

    /// Replaces the synaptic weights.
    ///
    /// # Parameters
    ///
    /// * `weights` - New weight matrix, must have shape `(input_columns, 1)`
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The weights were replaced
    /// - `Err(ModelError::InputValidationError)` - If the shape is wrong
    fn set_synaptic_weights(&mut self, weights: Matrix<f64>) -> Result<(), ModelError>;

    fn training_inputs(&self) -> &Matrix<f64>;

    fn training_outputs(&self) -> &Matrix<f64>;

    /// Runs the given number of forward iterations.
    ///
    /// # Parameters
    ///
    /// * `iterations` - Number of forward passes to run
    ///
    /// # Returns
    ///
    /// * `Result<Vec<Matrix<f64>>, ModelError>` - The normalized output of every iteration, in order
    fn train(&mut self, iterations: usize) -> Result<Vec<Matrix<f64>>, ModelError>;
}
