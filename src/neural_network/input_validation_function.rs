use crate::error::ModelError;
use crate::matrix::Matrix;

/// Validates that the training inputs and outputs describe the same samples.
///
/// # Parameters
///
/// - `inputs` - Training inputs, one sample per row
/// - `outputs` - Training outputs, one sample per row
///
/// # Returns
///
/// - `Ok(())` if the inputs are non-empty, the row counts match and the outputs have a single column
/// - `Err(ModelError::InputValidationError)` otherwise
pub(super) fn validate_training_data(
    inputs: &Matrix<f64>,
    outputs: &Matrix<f64>,
) -> Result<(), ModelError> {
    if inputs.is_empty() {
        return Err(ModelError::InputValidationError(format!(
            "training inputs must not be empty, got shape {}x{}",
            inputs.rows(),
            inputs.columns()
        )));
    }

    if inputs.rows() != outputs.rows() {
        return Err(ModelError::InputValidationError(format!(
            "training inputs and outputs must have the same number of rows, got {} and {}",
            inputs.rows(),
            outputs.rows()
        )));
    }

    if outputs.columns() != 1 {
        return Err(ModelError::InputValidationError(format!(
            "training outputs must have exactly one column, got {}",
            outputs.columns()
        )));
    }

    Ok(())
}

/// Validates that a weight matrix fits a layer fed by `input_columns` features.
///
/// # Parameters
///
/// - `weights` - Candidate weight matrix
/// - `input_columns` - Number of columns of the training inputs
///
/// # Returns
///
/// - `Ok(())` if `weights` has shape `(input_columns, 1)`
/// - `Err(ModelError::InputValidationError)` otherwise
pub(super) fn validate_weight_shape(
    weights: &Matrix<f64>,
    input_columns: usize,
) -> Result<(), ModelError> {
    if weights.shape() != (input_columns, 1) {
        return Err(ModelError::InputValidationError(format!(
            "synaptic weights must have shape {}x1, got {}x{}",
            input_columns,
            weights.rows(),
            weights.columns()
        )));
    }
    Ok(())
}

/// Validates the bounds of a uniform weight range.
///
/// # Parameters
///
/// - `low` - Inclusive lower bound
/// - `high` - Exclusive upper bound
///
/// # Returns
///
/// - `Ok(())` if both bounds are finite and `low < high`
/// - `Err(ModelError::InputValidationError)` otherwise
pub(super) fn validate_weight_range(low: f64, high: f64) -> Result<(), ModelError> {
    if !(low.is_finite() && high.is_finite()) {
        return Err(ModelError::InputValidationError(format!(
            "weight range bounds must be finite, got [{}, {})",
            low, high
        )));
    }

    if low >= high {
        return Err(ModelError::InputValidationError(format!(
            "weight range lower bound must be less than upper bound, got [{}, {})",
            low, high
        )));
    }

    Ok(())
}
