//! Entropy-based split scoring.

use crate::data::Dataset;
use crate::utils::EPSILON;

use super::candidates::Candidate;

/// Shannon entropy (natural log) of raw class counts.
///
/// Frequencies at or below [`EPSILON`] contribute nothing.
pub fn entropy(counts: &[f64]) -> f64 {
    let total: f64 = counts.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    counts
        .iter()
        .map(|&c| c / total)
        .filter(|&p| p > EPSILON)
        .map(|p| -p * p.ln())
        .sum()
}

/// Scratch buffers reused across candidates.
#[derive(Debug, Clone)]
pub struct SplitScorer {
    left: Vec<f64>,
    right: Vec<f64>,
}

impl SplitScorer {
    pub fn new(n_classes: usize) -> Self {
        Self {
            left: vec![0.0; n_classes],
            right: vec![0.0; n_classes],
        }
    }

    /// Entropy decrease of splitting `instances` by `candidate`.
    ///
    /// Returns `-(|L|/|N|) H(L) - (|R|/|N|) H(R)`: higher is better, 0 for a
    /// split into two pure sides. Empty sides contribute nothing.
    pub fn score(&mut self, dataset: &Dataset, instances: &[usize], candidate: &Candidate) -> f64 {
        self.left.fill(0.0);
        self.right.fill(0.0);
        let (mut n_left, mut n_right) = (0usize, 0usize);

        for &i in instances {
            let class = dataset.label(i) as usize - 1;
            if dataset.feature(i, candidate.feature) <= candidate.threshold {
                self.left[class] += 1.0;
                n_left += 1;
            } else {
                self.right[class] += 1.0;
                n_right += 1;
            }
        }

        let n = instances.len() as f64;
        let mut score = 0.0;
        if n_left > 0 {
            score -= n_left as f64 / n * entropy(&self.left);
        }
        if n_right > 0 {
            score -= n_right as f64 / n * entropy(&self.right);
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn entropy_of_pure_and_uniform() {
        assert_abs_diff_eq!(entropy(&[4.0, 0.0]), 0.0);
        assert_abs_diff_eq!(entropy(&[2.0, 2.0]), std::f64::consts::LN_2, epsilon = 1e-12);
        assert_abs_diff_eq!(entropy(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn perfect_split_beats_useless_split() {
        let features = array![[0.0, 1.0, 2.0, 3.0]];
        let labels = array![1, 1, 2, 2];
        let ds = Dataset::new(features.view(), labels.view()).unwrap();
        let all = [0, 1, 2, 3];
        let mut scorer = SplitScorer::new(ds.n_classes());

        let perfect = scorer.score(&ds, &all, &Candidate { feature: 0, threshold: 1.5 });
        let useless = scorer.score(&ds, &all, &Candidate { feature: 0, threshold: 10.0 });
        let partial = scorer.score(&ds, &all, &Candidate { feature: 0, threshold: 0.5 });

        assert_abs_diff_eq!(perfect, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(useless, -std::f64::consts::LN_2, epsilon = 1e-12);
        assert!(perfect > partial && partial > useless);
    }
}
