use super::input_validation_function::{validate_training_data, validate_weight_shape};
use super::{InitialWeights, Normalization};
use crate::ModelError;
use crate::matrix::Matrix;
use crate::traits::{ArtificialNeuralNetwork, NormalizingFunction, WeightGenerator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Single-layer feed-forward network.
///
/// The network holds a training set and a `(input_columns, 1)` synaptic weight matrix.
/// A forward pass computes `inputs x weights` and normalizes every element of the
/// product. Training runs forward passes only: no loss is computed and the weights
/// are never updated.
///
/// # Fields
///
/// - `training_inputs` - Input samples with shape (n_samples, n_features)
/// - `training_outputs` - Expected outputs with shape (n_samples, 1)
/// - `synaptic_weights` - Weight matrix with shape (n_features, 1)
/// - `normalizing_function` - Function applied elementwise after the forward product
/// - `weight_generator` - Generator that produced the initial weights
///
/// # Example
/// ```rust
/// use rustyann::prelude::*;
///
/// let inputs = Matrix::from_vec(vec![0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0], 4, 3).unwrap();
/// let outputs = Matrix::from_vec(vec![0.0, 1.0, 1.0, 0.0], 4, 1).unwrap();
///
/// let mut network = SingleLayerNetwork::from_seed(inputs, outputs, 7).unwrap();
/// let history = network.train(3).unwrap();
///
/// assert_eq!(history.len(), 3);
/// assert_eq!(history[0].shape(), (4, 1));
/// ```
#[derive(Debug, Clone)]
pub struct SingleLayerNetwork<N = Normalization, G = InitialWeights> {
    training_inputs: Matrix<f64>,
    training_outputs: Matrix<f64>,
    synaptic_weights: Matrix<f64>,
    normalizing_function: N,
    weight_generator: G,
}

impl<N, G> SingleLayerNetwork<N, G>
where
    N: NormalizingFunction,
    G: WeightGenerator,
{
    /// Creates a network and draws its initial weights.
    ///
    /// # Parameters
    ///
    /// - `inputs` - Training inputs with shape (n_samples, n_features)
    /// - `outputs` - Training outputs with shape (n_samples, 1)
    /// - `normalizing_function` - Function applied elementwise after each forward product
    /// - `weight_generator` - Generator for the `(n_features, 1)` initial weights
    /// - `rng` - Random number generator passed to `weight_generator`
    ///
    /// # Returns
    ///
    /// - `Ok(SingleLayerNetwork)` - The initialized network
    /// - `Err(ModelError::InputValidationError)` - If the training data is empty or the shapes disagree
    pub fn new<R: Rng + ?Sized>(
        inputs: Matrix<f64>,
        outputs: Matrix<f64>,
        normalizing_function: N,
        weight_generator: G,
        rng: &mut R,
    ) -> Result<Self, ModelError> {
        validate_training_data(&inputs, &outputs)?;

        let synaptic_weights = weight_generator.matrix(inputs.columns(), 1, rng)?;
        validate_weight_shape(&synaptic_weights, inputs.columns())?;

        Ok(Self {
            training_inputs: inputs,
            training_outputs: outputs,
            synaptic_weights,
            normalizing_function,
            weight_generator,
        })
    }

    /// Runs a single forward pass over the training inputs.
    ///
    /// # Returns
    ///
    /// * `Result<Matrix<f64>, ModelError>` - The normalized product with shape (n_samples, 1)
    pub fn forward(&self) -> Result<Matrix<f64>, ModelError> {
        let mut result = self.training_inputs.multiply(&self.synaptic_weights)?;
        log::trace!("Forward product:\n{}", result);

        result.apply(|x| self.normalizing_function.calculate(x));
        log::trace!("Normalized output:\n{}", result);

        Ok(result)
    }
}

impl SingleLayerNetwork {
    /// Creates a network with sigmoid normalization and uniform `[0, 1)` weights
    /// drawn from a `StdRng` seeded with `seed`.
    ///
    /// The same seed always yields the same initial weights.
    pub fn from_seed(
        inputs: Matrix<f64>,
        outputs: Matrix<f64>,
        seed: u64,
    ) -> Result<Self, ModelError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(
            inputs,
            outputs,
            Normalization::Sigmoid,
            InitialWeights::random(),
            &mut rng,
        )
    }
}

impl<N, G> ArtificialNeuralNetwork for SingleLayerNetwork<N, G>
where
    N: NormalizingFunction,
    G: WeightGenerator,
{
    type Normalizer = N;
    type Generator = G;

    fn normalizing_function(&self) -> &N {
        &self.normalizing_function
    }

    fn weight_generator(&self) -> &G {
        &self.weight_generator
    }

    fn synaptic_weights(&self) -> &Matrix<f64> {
        &self.synaptic_weights
    }

    fn set_synaptic_weights(&mut self, weights: Matrix<f64>) -> Result<(), ModelError> {
        validate_weight_shape(&weights, self.training_inputs.columns())?;
        self.synaptic_weights = weights;
        Ok(())
    }

    fn training_inputs(&self) -> &Matrix<f64> {
        &self.training_inputs
    }

    fn training_outputs(&self) -> &Matrix<f64> {
        &self.training_outputs
    }

    fn train(&mut self, iterations: usize) -> Result<Vec<Matrix<f64>>, ModelError> {
        log::info!(
            "Starting training: {} samples, {} features, {} iterations",
            self.training_inputs.rows(),
            self.training_inputs.columns(),
            iterations
        );
        log::trace!("Training inputs:\n{}", self.training_inputs);

        let mut history = Vec::with_capacity(iterations);
        for iteration in 0..iterations {
            log::debug!("Iteration: {}", iteration);
            history.push(self.forward()?);
        }

        log::info!("Training completed: {} iterations", iterations);

        Ok(history)
    }
}
