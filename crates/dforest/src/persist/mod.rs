//! Tree and forest persistence.
//!
//! - [`text`]: the tab-separated tree format over any reader/writer
//! - [`save_tree`] / [`load_tree`]: atomic single-file persistence
//! - [`save_forest`] / [`load_forest`]: one directory per forest
//!
//! Loading always validates tree structure, so a corrupt file is reported as
//! a [`ReadError`] rather than surfacing later during inference.

mod error;
mod file;
pub mod text;

pub use error::{ReadError, WriteError};
pub use file::{FOREST_MANIFEST, load_forest, load_tree, member_file_name, save_forest, save_tree};
pub(crate) use file::check_members;
pub use text::{read_tree, tree_from_str, tree_to_string, write_tree};
