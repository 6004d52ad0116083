/// Calculates the sigmoid function value for a given input.
///
/// The sigmoid function maps any real number into the open interval (0, 1)
/// and is defined as `f(z) = 1 / (1 + e^(-z))`.
///
/// # Parameters
///
/// - `z` - Input value
///
/// # Returns
///
/// - `f64` - Sigmoid value in the range (0, 1), saturating to exactly `0.0` or `1.0` for extreme inputs
///
/// # Examples
/// ```rust
/// use rustyann::math::sigmoid;
///
/// assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
/// assert!(sigmoid(10.0) > 0.99);
/// assert!(sigmoid(-10.0) < 0.01);
/// ```
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    // Saturate before exp() can overflow
    const MAX_SIGMOID_INPUT: f64 = 500.0;
    const MIN_SIGMOID_INPUT: f64 = -500.0;

    if z > MAX_SIGMOID_INPUT {
        return 1.0;
    } else if z < MIN_SIGMOID_INPUT {
        return 0.0;
    }

    1.0 / (1.0 + (-z).exp())
}
