//! Tree representation.
//!
//! - [`index`]: implicit binary-heap index algebra
//! - [`Node`]: decision node or leaf
//! - [`NodeStore`]: sparse, insertion-ordered node map
//! - [`Tree`]: a node store plus its shape metadata and validation

pub mod index;
mod node;
mod store;
mod tree;

pub use index::{NodeIndex, ROOT};
pub use node::{LEAF_FEATURE, Node};
pub use store::{Cursor, NodeStore, StoreError};
pub use tree::{Tree, TreeValidationError};
