//! Runs the single-layer network on a four-sample training set and prints the
//! matrix engine's arithmetic on a pair of small integer matrices.
//!
//! Run with `RUST_LOG=trace cargo run --example playground` to see every
//! intermediate matrix.

use rustyann::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let matrix1: Matrix<i64> = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3)?;
    let matrix2: Matrix<i64> = Matrix::from_vec(vec![7, 8, 9, 10, 11, 12], 3, 2)?;

    println!("matrix1 * matrix2:\n{}", matrix1.multiply(&matrix2)?);
    println!("transpose(matrix1):\n{}", matrix1.transpose());
    println!("matrix1 + matrix1:\n{}", matrix1.add(&matrix1)?);

    let training_inputs = Matrix::from_vec(
        vec![0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0],
        4,
        3,
    )?;
    let training_outputs = Matrix::from_vec(vec![0.0, 1.0, 1.0, 0.0], 4, 1)?;

    let mut network = SingleLayerNetwork::from_seed(training_inputs, training_outputs, 42)?;
    println!("Initial synaptic weights:\n{}", network.synaptic_weights());

    for (iteration, output) in network.train(3)?.iter().enumerate() {
        println!("Iteration {} output:\n{}", iteration, output);
    }

    Ok(())
}
