//! Tree and forest configuration with builder pattern.
//!
//! # Example
//!
//! ```
//! use dforest::model::{ForestConfig, TreeConfig};
//!
//! // All defaults
//! let config = TreeConfig::builder().build().unwrap();
//! assert_eq!(config.max_depth, 5);
//!
//! let forest = ForestConfig::builder()
//!     .tree(TreeConfig::builder().max_depth(8).n_candidates(20).build().unwrap())
//!     .n_trees(25)
//!     .build()
//!     .unwrap();
//! assert_eq!(forest.n_trees, 25);
//! ```

use bon::Builder;

use crate::repr::index::MAX_LEVEL;
use crate::training::{TreeParams, Verbosity};
use crate::utils::Parallelism;

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Depth must lie in `1..=64`.
    InvalidMaxDepth(u32),
    /// At least one split candidate per node.
    InvalidCandidates,
    /// Minimum split size must be at least 1.
    InvalidMinSplitSize,
    /// Search range must be finite and positive.
    InvalidSearchRange(f64),
    /// A forest needs at least one tree.
    InvalidNTrees,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMaxDepth(v) => {
                write!(f, "max_depth must be in 1..={}, got {}", MAX_LEVEL, v)
            }
            Self::InvalidCandidates => write!(f, "n_candidates must be at least 1"),
            Self::InvalidMinSplitSize => write!(f, "min_split_size must be at least 1"),
            Self::InvalidSearchRange(v) => {
                write!(f, "search_range must be finite and positive, got {}", v)
            }
            Self::InvalidNTrees => write!(f, "n_trees must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// TreeConfig
// =============================================================================

/// Configuration for training a single tree.
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct TreeConfig {
    /// Maximum number of levels, root included. Default: 5.
    #[builder(default = 5)]
    pub max_depth: u32,

    /// Random split candidates scored per decision node. Default: 10.
    #[builder(default = 10)]
    pub n_candidates: usize,

    /// Nodes reached by fewer instances become leaves. Default: 10.
    ///
    /// Raised to `n_samples / 1000` for large datasets.
    #[builder(default = 10)]
    pub min_split_size: usize,

    /// Thresholds are drawn within `mean ± search_range * std`. Default: 3.0.
    #[builder(default = 3.0)]
    pub search_range: f64,

    /// Random seed. Default: 42.
    #[builder(default = 42)]
    pub seed: u64,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

/// Custom finishing function that validates the config.
impl<S: tree_config_builder::IsComplete> TreeConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is invalid:
    /// - `max_depth` outside `1..=64`
    /// - `n_candidates == 0` or `min_split_size == 0`
    /// - non-finite or non-positive `search_range`
    pub fn build(self) -> Result<TreeConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::builder().__build_internal()
    }
}

impl TreeConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 || self.max_depth > MAX_LEVEL {
            return Err(ConfigError::InvalidMaxDepth(self.max_depth));
        }
        if self.n_candidates == 0 {
            return Err(ConfigError::InvalidCandidates);
        }
        if self.min_split_size == 0 {
            return Err(ConfigError::InvalidMinSplitSize);
        }
        if !self.search_range.is_finite() || self.search_range <= 0.0 {
            return Err(ConfigError::InvalidSearchRange(self.search_range));
        }
        Ok(())
    }

    /// Convert to builder parameters.
    pub fn to_params(&self) -> TreeParams {
        TreeParams {
            max_depth: self.max_depth,
            n_candidates: self.n_candidates,
            min_split_size: self.min_split_size,
            search_range: self.search_range,
            seed: self.seed,
            verbosity: self.verbosity,
        }
    }
}

// =============================================================================
// ForestConfig
// =============================================================================

/// Configuration for training a forest of independent trees.
///
/// Tree `t` is trained with seed `tree.seed + t`.
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct ForestConfig {
    /// Per-tree settings.
    #[builder(default)]
    pub tree: TreeConfig,

    /// Number of trees. Default: 10.
    #[builder(default = 10)]
    pub n_trees: usize,

    /// Whether members may be trained and evaluated in parallel.
    /// Results do not depend on it.
    #[builder(default)]
    pub parallelism: Parallelism,
}

impl<S: forest_config_builder::IsComplete> ForestConfigBuilder<S> {
    /// Build and validate the configuration.
    pub fn build(self) -> Result<ForestConfig, ConfigError> {
        let config = self.__build_internal();
        config.tree.validate()?;
        if config.n_trees == 0 {
            return Err(ConfigError::InvalidNTrees);
        }
        Ok(config)
    }
}

impl ForestConfig {
    /// Parameters for member `t`.
    pub fn member_params(&self, t: usize) -> TreeParams {
        let mut params = self.tree.to_params();
        params.seed = self.tree.seed.wrapping_add(t as u64);
        params
    }
}
