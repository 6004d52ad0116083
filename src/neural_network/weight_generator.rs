use super::input_validation_function::validate_weight_range;
use crate::ModelError;
use crate::matrix::Matrix;
use crate::traits::WeightGenerator;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Built-in initial weight generators
///
/// # Variants
///
/// - `Uniform` - Every weight is drawn independently and uniformly from `[low, high)`
///
/// # Example
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rustyann::neural_network::{InitialWeights, WeightGenerator};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let weights = InitialWeights::random().matrix(3, 1, &mut rng).unwrap();
///
/// assert_eq!(weights.shape(), (3, 1));
/// assert!(weights.as_slice().iter().all(|w| (0.0..1.0).contains(w)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitialWeights {
    Uniform { low: f64, high: f64 },
}

impl InitialWeights {
    /// Uniform weights on `[0, 1)`.
    pub fn random() -> Self {
        InitialWeights::Uniform {
            low: 0.0,
            high: 1.0,
        }
    }

    /// Uniform weights on `[low, high)`.
    ///
    /// # Parameters
    ///
    /// - `low` - Inclusive lower bound
    /// - `high` - Exclusive upper bound
    ///
    /// # Returns
    ///
    /// - `Ok(InitialWeights)` - The generator
    /// - `Err(ModelError::InputValidationError)` - If a bound is not finite or `low >= high`
    pub fn uniform(low: f64, high: f64) -> Result<Self, ModelError> {
        validate_weight_range(low, high)?;
        Ok(InitialWeights::Uniform { low, high })
    }
}

impl Default for InitialWeights {
    fn default() -> Self {
        Self::random()
    }
}

impl WeightGenerator for InitialWeights {
    fn matrix<R: Rng + ?Sized>(
        &self,
        rows: usize,
        columns: usize,
        rng: &mut R,
    ) -> Result<Matrix<f64>, ModelError> {
        let len = rows.checked_mul(columns).ok_or_else(|| {
            ModelError::InputValidationError(format!(
                "weight matrix shape {}x{} overflows usize",
                rows, columns
            ))
        })?;

        let data: Vec<f64> = match *self {
            InitialWeights::Uniform { low, high } => {
                // Fields are public, bounds may bypass `uniform()`
                validate_weight_range(low, high)?;
                let distribution = Uniform::new(low, high).map_err(|e| {
                    ModelError::ProcessingError(format!(
                        "Failed to create uniform distribution: {}",
                        e
                    ))
                })?;
                (0..len).map(|_| distribution.sample(rng)).collect()
            }
        };

        log::debug!("Generated initial weights with shape {}x{}", rows, columns);

        Ok(Matrix::from_vec(data, rows, columns)?)
    }
}
