/// Module that contains validation helpers for network construction parameters
pub mod input_validation_function;
/// Module that contains normalizing function implementations
pub mod normalization;
/// Module that contains the single-layer feed-forward network
pub mod single_layer;
/// Module that contains initial weight generator implementations
pub mod weight_generator;

pub use normalization::*;
pub use single_layer::*;
pub use weight_generator::*;

pub use crate::traits::ArtificialNeuralNetwork;
pub use crate::traits::NormalizingFunction;
pub use crate::traits::WeightGenerator;
