//! Instance lists and their stable partitioning.

use crate::data::Dataset;

use super::candidates::Candidate;

/// Indices of the training instances that reach one node.
pub type InstanceList = Vec<usize>;

/// Every instance shares the first instance's label. Empty lists are pure.
pub fn is_pure(dataset: &Dataset, instances: &[usize]) -> bool {
    match instances.split_first() {
        None => true,
        Some((&first, rest)) => {
            let label = dataset.label(first);
            rest.iter().all(|&i| dataset.label(i) == label)
        }
    }
}

/// Split `instances` into `(<= threshold, > threshold)`, keeping relative order.
pub fn partition(
    dataset: &Dataset,
    instances: InstanceList,
    split: &Candidate,
) -> (InstanceList, InstanceList) {
    instances
        .into_iter()
        .partition(|&i| dataset.feature(i, split.feature) <= split.threshold)
}

/// Raw per-class counts of `instances`; slot `c` counts label `c + 1`.
pub fn class_counts(dataset: &Dataset, instances: &[usize]) -> Vec<f64> {
    let mut counts = vec![0.0; dataset.n_classes()];
    for &i in instances {
        counts[dataset.label(i) as usize - 1] += 1.0;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn dataset() -> Dataset {
        let features = array![[3.0, 0.0, 2.0, 1.0, 1.5]];
        let labels = array![2, 1, 2, 1, 3];
        Dataset::new(features.view(), labels.view()).unwrap()
    }

    #[test]
    fn partition_is_stable() {
        let ds = dataset();
        let split = Candidate {
            feature: 0,
            threshold: 1.5,
        };
        let (left, right) = partition(&ds, vec![0, 1, 2, 3, 4], &split);
        assert_eq!(left, vec![1, 3, 4]);
        assert_eq!(right, vec![0, 2]);
    }

    #[test]
    fn purity() {
        let ds = dataset();
        assert!(is_pure(&ds, &[]));
        assert!(is_pure(&ds, &[0, 2]));
        assert!(!is_pure(&ds, &[0, 1]));
    }

    #[test]
    fn counts_per_class() {
        let ds = dataset();
        assert_eq!(class_counts(&ds, &[0, 1, 2, 4]), vec![1.0, 2.0, 1.0]);
        assert_eq!(class_counts(&ds, &[]), vec![0.0, 0.0, 0.0]);
    }
}
