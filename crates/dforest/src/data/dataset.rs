//! Dataset container.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use super::error::DatasetError;

/// View a flat column-major `n_samples x n_features` buffer as a
/// feature-major `[n_features, n_samples]` matrix.
///
/// Zero-copy. Fails when `data.len() != n_samples * n_features`.
pub fn col_major_view(
    data: &[f64],
    n_samples: usize,
    n_features: usize,
) -> Result<ArrayView2<'_, f64>, DatasetError> {
    let expected = n_samples * n_features;
    if data.len() != expected {
        return Err(DatasetError::BufferLenMismatch {
            expected,
            got: data.len(),
        });
    }
    ArrayView2::from_shape((n_features, n_samples), data).map_err(|_| {
        DatasetError::BufferLenMismatch {
            expected,
            got: data.len(),
        }
    })
}

/// Labeled training data with precomputed per-feature statistics.
///
/// Immutable after construction. Every label lies in `[1, n_classes]` where
/// `n_classes` is the largest label observed.
///
/// # Example
///
/// ```
/// use dforest::data::Dataset;
/// use ndarray::array;
///
/// // 1 feature, 4 samples
/// let features = array![[0.0, 1.0, 2.0, 3.0]];
/// let labels = array![1, 1, 2, 2];
/// let ds = Dataset::new(features.view(), labels.view()).unwrap();
///
/// assert_eq!(ds.n_samples(), 4);
/// assert_eq!(ds.n_classes(), 2);
/// assert_eq!(ds.mean(0), 1.5);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    /// `[n_features, n_samples]`.
    features: Array2<f64>,
    labels: Array1<u32>,
    n_classes: usize,
    mean: Array1<f64>,
    std: Array1<f64>,
}

impl Dataset {
    /// Create a dataset from a feature-major matrix and 1-based labels.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::EmptyFeatures`] if the matrix has no feature rows
    /// - [`DatasetError::LabelLenMismatch`] if label and sample counts differ
    /// - [`DatasetError::NoClasses`] if there are no labels at all
    /// - [`DatasetError::InvalidLabel`] for any label `<= 0`
    pub fn new(
        features: ArrayView2<f64>,
        labels: ArrayView1<i64>,
    ) -> Result<Self, DatasetError> {
        let n_features = features.nrows();
        let n_samples = features.ncols();

        if n_features == 0 {
            return Err(DatasetError::EmptyFeatures);
        }
        if labels.len() != n_samples {
            return Err(DatasetError::LabelLenMismatch {
                samples: n_samples,
                labels: labels.len(),
            });
        }
        if labels.is_empty() {
            return Err(DatasetError::NoClasses);
        }

        let mut max_label = 0i64;
        for (index, &label) in labels.iter().enumerate() {
            if label <= 0 || label > i64::from(u32::MAX) {
                return Err(DatasetError::InvalidLabel { index, label });
            }
            max_label = max_label.max(label);
        }

        let labels: Array1<u32> = labels.iter().map(|&l| l as u32).collect();
        let (mean, std) = feature_stats(features);

        Ok(Self {
            features: features.to_owned(),
            labels,
            n_classes: max_label as usize,
            mean,
            std,
        })
    }

    /// Create a dataset from a flat column-major buffer (`X[i + j * n]`).
    pub fn from_col_major(
        data: &[f64],
        n_samples: usize,
        n_features: usize,
        labels: &[i64],
    ) -> Result<Self, DatasetError> {
        let features = col_major_view(data, n_samples, n_features)?;
        Self::new(features, ArrayView1::from(labels))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.ncols()
    }

    /// Number of features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.nrows()
    }

    /// Number of classes (the largest label).
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Raw value of `feature` for `sample`.
    #[inline]
    pub fn feature(&self, sample: usize, feature: usize) -> f64 {
        self.features[[feature, sample]]
    }

    /// 1-based class label of `sample`.
    #[inline]
    pub fn label(&self, sample: usize) -> u32 {
        self.labels[sample]
    }

    /// Mean of `feature` over all samples.
    #[inline]
    pub fn mean(&self, feature: usize) -> f64 {
        self.mean[feature]
    }

    /// Population standard deviation of `feature` over all samples.
    #[inline]
    pub fn std(&self, feature: usize) -> f64 {
        self.std[feature]
    }

    /// Feature matrix view, `[n_features, n_samples]`.
    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    /// Labels view.
    pub fn labels(&self) -> ArrayView1<'_, u32> {
        self.labels.view()
    }
}

/// Per-feature mean and population std, two passes per feature.
fn feature_stats(features: ArrayView2<f64>) -> (Array1<f64>, Array1<f64>) {
    let n = features.ncols() as f64;
    let mut mean = Array1::zeros(features.nrows());
    let mut std = Array1::zeros(features.nrows());

    for (j, row) in features.rows().into_iter().enumerate() {
        let m = row.sum() / n;
        let var = row.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / n;
        mean[j] = m;
        std[j] = var.sqrt();
    }

    (mean, std)
}
