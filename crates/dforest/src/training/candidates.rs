//! Split candidate generation.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::data::Dataset;

/// A proposed axis-aligned split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub feature: usize,
    pub threshold: f64,
}

/// Source of split candidates for a decision node.
pub trait SplitProposer {
    /// Replace `out` with up to `n_candidates` candidates.
    fn propose(&mut self, dataset: &Dataset, n_candidates: usize, out: &mut Vec<Candidate>);
}

/// Random thresholds around each feature's mean.
///
/// Candidate `i` splits feature `i mod n_features` at
/// `mean + std * search_range * r` with `r ~ U[-1, 1]`. One generator is
/// seeded per training run and advanced in node order, so a fixed seed
/// reproduces the same tree.
#[derive(Debug, Clone)]
pub struct RandomProposer {
    rng: Xoshiro256PlusPlus,
    search_range: f64,
}

impl RandomProposer {
    pub fn new(seed: u64, search_range: f64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            search_range,
        }
    }
}

impl SplitProposer for RandomProposer {
    fn propose(&mut self, dataset: &Dataset, n_candidates: usize, out: &mut Vec<Candidate>) {
        out.clear();
        let n_features = dataset.n_features();
        for i in 0..n_candidates {
            let feature = i % n_features;
            let r: f64 = self.rng.gen_range(-1.0..=1.0);
            let threshold = dataset.mean(feature) + dataset.std(feature) * self.search_range * r;
            out.push(Candidate { feature, threshold });
        }
    }
}

/// Always proposes the same candidates, ignoring `n_candidates`.
#[derive(Debug, Clone)]
pub struct FixedProposer {
    candidates: Vec<Candidate>,
}

impl FixedProposer {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

impl SplitProposer for FixedProposer {
    fn propose(&mut self, _dataset: &Dataset, _n_candidates: usize, out: &mut Vec<Candidate>) {
        out.clear();
        out.extend_from_slice(&self.candidates);
    }
}
