use crate::math::sigmoid;
use crate::traits::NormalizingFunction;

/// Built-in normalizing functions
///
/// # Variants
///
/// - `Sigmoid` - Logistic function `1 / (1 + e^(-x))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    #[default]
    Sigmoid,
}

impl NormalizingFunction for Normalization {
    fn calculate(&self, x: f64) -> f64 {
        match self {
            Normalization::Sigmoid => sigmoid(x),
        }
    }
}
