//! Tree induction.
//!
//! - [`TreeBuilder`]: work-list driven greedy splitting
//! - [`SplitProposer`]: candidate generation ([`RandomProposer`], [`FixedProposer`])
//! - [`SplitScorer`]: entropy-decrease scoring
//! - [`TrainingLogger`], [`Verbosity`]: structured logging

mod builder;
mod candidates;
mod entropy;
mod logger;
mod partition;

pub use builder::{TreeBuilder, TreeParams};
pub use candidates::{Candidate, FixedProposer, RandomProposer, SplitProposer};
pub use entropy::{SplitScorer, entropy};
pub use logger::{TrainingLogger, Verbosity};
pub use partition::{InstanceList, class_counts, is_pure, partition};
