pub use crate::error::ModelError;
pub use crate::neural_network::{InitialWeights, Normalization, SingleLayerNetwork};
pub use crate::traits::{ArtificialNeuralNetwork, NormalizingFunction, WeightGenerator};
