use super::*;
use crate::math::sigmoid;

#[test]
fn sigmoid_variant_test() {
    let f = Normalization::Sigmoid;
    for &x in &[-3.0, -0.5, 0.0, 0.5, 3.0] {
        assert_eq!(f.calculate(x), sigmoid(x));
    }
    assert_abs_diff_eq!(f.calculate(0.0), 0.5, epsilon = 1e-12);
}

#[test]
fn default_is_sigmoid_test() {
    assert_eq!(Normalization::default(), Normalization::Sigmoid);
}

#[test]
fn closure_as_normalizing_function_test() {
    let halve = |x: f64| x / 2.0;
    assert_eq!(halve.calculate(3.0), 1.5);

    let relu = |x: f64| x.max(0.0);
    assert_eq!(NormalizingFunction::calculate(&relu, -2.0), 0.0);
}
