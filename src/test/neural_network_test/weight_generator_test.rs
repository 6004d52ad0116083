use super::*;

#[test]
fn random_weights_shape_and_range_test() {
    let mut rng = StdRng::seed_from_u64(1);
    let weights = InitialWeights::random().matrix(5, 1, &mut rng).unwrap();

    assert_eq!(weights.shape(), (5, 1));
    for &w in weights.as_slice() {
        assert!((0.0..1.0).contains(&w), "weight {} outside [0, 1)", w);
    }
}

#[test]
fn uniform_weights_range_test() {
    let mut rng = StdRng::seed_from_u64(2);
    let generator = InitialWeights::uniform(-0.5, 0.5).unwrap();
    let weights = generator.matrix(10, 10, &mut rng).unwrap();

    assert_eq!(weights.shape(), (10, 10));
    assert!(weights.as_slice().iter().all(|w| (-0.5..0.5).contains(w)));
}

#[test]
fn same_seed_same_weights_test() {
    let generator = InitialWeights::random();
    let a = generator
        .matrix(3, 2, &mut StdRng::seed_from_u64(42))
        .unwrap();
    let b = generator
        .matrix(3, 2, &mut StdRng::seed_from_u64(42))
        .unwrap();
    let c = generator
        .matrix(3, 2, &mut StdRng::seed_from_u64(43))
        .unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn uniform_rejects_invalid_range_test() {
    assert!(matches!(
        InitialWeights::uniform(1.0, 1.0),
        Err(crate::ModelError::InputValidationError(_))
    ));
    assert!(InitialWeights::uniform(2.0, -2.0).is_err());
    assert!(InitialWeights::uniform(f64::NAN, 1.0).is_err());
    assert!(InitialWeights::uniform(0.0, f64::INFINITY).is_err());
}

#[test]
fn hand_built_invalid_range_is_rejected_on_generate_test() {
    let generator = InitialWeights::Uniform {
        low: 3.0,
        high: 1.0,
    };
    let mut rng = StdRng::seed_from_u64(0);
    assert!(generator.matrix(2, 1, &mut rng).is_err());
}

#[test]
fn empty_weight_matrix_test() {
    let mut rng = StdRng::seed_from_u64(0);
    let weights = InitialWeights::random().matrix(0, 1, &mut rng).unwrap();
    assert_eq!(weights.shape(), (0, 1));
    assert!(weights.is_empty());
}
