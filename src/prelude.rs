/// Prelude module for the matrix engine.
pub mod matrix_prelude;
/// Prelude module for the neural network driver.
#[cfg(feature = "neural_network")]
pub mod neural_network_prelude;

pub use matrix_prelude::*;
#[cfg(feature = "neural_network")]
pub use neural_network_prelude::*;
