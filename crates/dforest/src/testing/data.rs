use ndarray::{Array1, Array2, ArrayView1};
use rand::prelude::*;

/// Random feature-major features, `[n_features, n_samples]`.
///
/// Values are uniform in `[min, max]`.
pub fn random_features(n_samples: usize, n_features: usize, seed: u64, min: f64, max: f64) -> Array2<f64> {
	assert!(max >= min);
	let mut rng = StdRng::seed_from_u64(seed);
	let width = max - min;
	Array2::from_shape_fn((n_features, n_samples), |_| min + rng.r#gen::<f64>() * width)
}

/// Three-class data with axis-aligned boundaries on the first two features.
///
/// Features are uniform in `[-1, 1]`. Label 1 when `x0 > 0 && x1 > 0`,
/// label 2 when `x0 <= 0 && x1 <= 0`, label 3 otherwise. Needs
/// `n_features >= 2`.
pub fn synthetic_quadrants(n_samples: usize, n_features: usize, seed: u64) -> (Array2<f64>, Array1<i64>) {
	assert!(n_features >= 2);
	let features = random_features(n_samples, n_features, seed, -1.0, 1.0);
	let labels = (0..n_samples)
		.map(|i| {
			let (x0, x1) = (features[[0, i]], features[[1, i]]);
			if x0 > 0.0 && x1 > 0.0 {
				1
			} else if x0 <= 0.0 && x1 <= 0.0 {
				2
			} else {
				3
			}
		})
		.collect();
	(features, labels)
}

/// Fraction of positions where `predicted` equals `truth`.
pub fn accuracy(predicted: ArrayView1<u32>, truth: ArrayView1<i64>) -> f64 {
	assert_eq!(predicted.len(), truth.len());
	if truth.is_empty() {
		return 0.0;
	}
	let hits = predicted
		.iter()
		.zip(truth.iter())
		.filter(|&(&p, &t)| i64::from(p) == t)
		.count();
	hits as f64 / truth.len() as f64
}
