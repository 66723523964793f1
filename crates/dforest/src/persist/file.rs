//! Filesystem persistence for trees and forests.
//!
//! Every file is written to a temporary sibling and renamed into place, so
//! readers never observe a partially written tree. Forests are staged in a
//! temporary sibling directory and swapped in whole, so a failed save never
//! mixes members of two forests.
//!
//! A forest is a directory:
//!
//! ```text
//! forest.txt      number of trees
//! tree_0.txt      one tree per member, text format
//! tree_1.txt
//! ...
//! ```

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::repr::Tree;

use super::error::{ReadError, WriteError};
use super::text::{read_tree, write_tree};

/// Forest manifest file name.
pub const FOREST_MANIFEST: &str = "forest.txt";

/// File name of forest member `k`.
pub fn member_file_name(k: usize) -> String {
    format!("tree_{k}.txt")
}

/// Directory holding `path`, `.` for bare file names.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Write through `write` into a temporary file next to `path`, then rename.
fn write_atomic<F>(path: &Path, write: F) -> Result<(), WriteError>
where
    F: FnOnce(&mut BufWriter<&File>) -> std::io::Result<()>,
{
    let tmp = NamedTempFile::new_in(parent_dir(path))?;
    {
        let mut out = BufWriter::new(tmp.as_file());
        write(&mut out)?;
        out.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}

/// Save `tree` to `path`, replacing any existing file atomically.
pub fn save_tree(tree: &Tree, path: impl AsRef<Path>) -> Result<(), WriteError> {
    write_atomic(path.as_ref(), |out| write_tree(tree, out))
}

/// Load and validate a tree from `path`.
pub fn load_tree(path: impl AsRef<Path>) -> Result<Tree, ReadError> {
    let file = File::open(path)?;
    read_tree(BufReader::new(file))
}

/// Save forest members as directory `dir`.
///
/// Any existing directory at `dir` is replaced as a whole. On failure the
/// previous contents are left in place.
pub fn save_forest(trees: &[Tree], dir: impl AsRef<Path>) -> Result<(), WriteError> {
    save_forest_with(trees, dir.as_ref(), |tree, path| save_tree(tree, path))
}

fn save_forest_with<F>(trees: &[Tree], dir: &Path, mut save_member: F) -> Result<(), WriteError>
where
    F: FnMut(&Tree, &Path) -> Result<(), WriteError>,
{
    if trees.is_empty() {
        return Err(WriteError::EmptyForest);
    }
    let parent = parent_dir(dir);
    fs::create_dir_all(parent)?;

    // Dropped on any early return, removing the partial forest.
    let staging = tempfile::Builder::new()
        .prefix(".forest-")
        .tempdir_in(parent)?;
    for (k, tree) in trees.iter().enumerate() {
        save_member(tree, &staging.path().join(member_file_name(k)))?;
    }
    write_atomic(&staging.path().join(FOREST_MANIFEST), |out| {
        writeln!(out, "{}", trees.len())
    })?;

    // The old forest is moved aside before the swap and deleted with `retired`.
    let retired = tempfile::Builder::new()
        .prefix(".forest-old-")
        .tempdir_in(parent)?;
    let previous = retired.path().join("forest");
    let had_previous = dir.exists();
    if had_previous {
        fs::rename(dir, &previous)?;
    }
    if let Err(err) = fs::rename(staging.path(), dir) {
        if had_previous {
            let _ = fs::rename(&previous, dir);
        }
        return Err(err.into());
    }
    Ok(())
}

/// Load every member listed by the manifest in `dir`.
///
/// Members must agree on feature and class counts.
pub fn load_forest(dir: impl AsRef<Path>) -> Result<Vec<Tree>, ReadError> {
    let dir = dir.as_ref();
    let manifest = fs::read_to_string(dir.join(FOREST_MANIFEST))?;
    let token = manifest.trim();
    if token.is_empty() {
        return Err(ReadError::MissingField {
            line: 1,
            field: "n_trees",
        });
    }
    let n_trees: usize = token.parse().map_err(|e| ReadError::InvalidValue {
        line: 1,
        field: "n_trees",
        message: format!("{token:?}: {e}"),
    })?;
    if n_trees == 0 {
        return Err(ReadError::EmptyForest);
    }

    let paths: Vec<PathBuf> = (0..n_trees).map(|k| dir.join(member_file_name(k))).collect();
    let trees = paths.iter().map(load_tree).collect::<Result<Vec<_>, _>>()?;
    check_members(&trees)?;
    Ok(trees)
}

/// All members share the first member's feature and class counts.
pub(crate) fn check_members(trees: &[Tree]) -> Result<(), ReadError> {
    let Some(first) = trees.first() else {
        return Err(ReadError::EmptyForest);
    };
    for (k, tree) in trees.iter().enumerate().skip(1) {
        if tree.n_features() != first.n_features() {
            return Err(ReadError::MemberMismatch {
                tree: k,
                field: "n_features",
                expected: first.n_features(),
                got: tree.n_features(),
            });
        }
        if tree.n_classes() != first.n_classes() {
            return Err(ReadError::MemberMismatch {
                tree: k,
                field: "n_classes",
                expected: first.n_classes(),
                got: tree.n_classes(),
            });
        }
    }
    Ok(())
}
