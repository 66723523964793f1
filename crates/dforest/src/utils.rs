//! Common utilities used across the crate.
//!
//! This module provides the parallelism hint used by forest training and
//! prediction, plus small numeric helpers shared by training and inference.

use rayon::prelude::*;

/// Small constant guarding `ln(0)`, empty partitions and all-zero leaves.
pub const EPSILON: f64 = 1e-11;

// =============================================================================
// Numeric Helpers
// =============================================================================

/// Index of the largest value, preferring the lowest index on ties.
///
/// Scans in increasing order and only moves the winner on a strictly larger
/// value. Returns 0 for an empty slice.
#[inline]
pub fn argmax_first(values: &[f64]) -> usize {
    let mut best_idx = 0;
    let mut best = match values.first() {
        Some(&v) => v,
        None => return 0,
    };
    for (idx, &v) in values.iter().enumerate().skip(1) {
        if v > best {
            best = v;
            best_idx = idx;
        }
    }
    best_idx
}

/// Normalize raw class counts into probabilities, writing into `out`.
///
/// Each count is divided by `sum + EPSILON`. An all-zero accumulator therefore
/// yields an all-zero vector rather than a division by zero.
#[inline]
pub fn normalize_counts_into(counts: &[f64], out: &mut [f64]) {
    debug_assert_eq!(counts.len(), out.len());
    let denom = counts.iter().sum::<f64>() + EPSILON;
    for (p, &c) in out.iter_mut().zip(counts) {
        *p = c / denom;
    }
}

// =============================================================================
// Parallelism Configuration
// =============================================================================

/// Whether parallel execution is allowed.
///
/// Single trees are always built and evaluated sequentially. Forests may
/// train and evaluate their members on the current `rayon` pool when this is
/// `Parallel`. Results never depend on the choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Parallelism {
    #[default]
    Sequential,
    Parallel,
}

impl Parallelism {
    /// Returns `true` if parallel execution is allowed.
    #[inline]
    pub fn is_parallel(self) -> bool {
        matches!(self, Parallelism::Parallel)
    }

    /// Map `f` over `iter`, in parallel when allowed. Output order matches input order.
    #[inline]
    pub fn maybe_par_map<T, B, I, F>(self, iter: I, f: F) -> Vec<B>
    where
        T: Send,
        B: Send,
        I: IntoIterator<Item = T> + IntoParallelIterator<Item = T>,
        F: Fn(T) -> B + Sync + Send,
    {
        if self.is_parallel() {
            iter.into_par_iter().map(f).collect()
        } else {
            iter.into_iter().map(f).collect()
        }
    }
}
