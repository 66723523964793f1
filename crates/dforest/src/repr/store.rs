//! Sparse node storage keyed by implicit tree index.

use std::collections::HashMap;

use super::index::NodeIndex;
use super::node::Node;

/// Upper bound on the capacity reserved up front.
const MAX_INITIAL_CAPACITY: usize = 10_000;

/// Errors raised by [`NodeStore`] lookups and cursors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("no node stored under index {0}")]
    MissingKey(NodeIndex),

    #[error("cursor advanced past the last of {len} nodes")]
    Exhausted { len: usize },
}

/// Map from node index to node with first-insertion-order iteration.
///
/// Overwriting a key replaces its node in place: the entry keeps the position
/// of its first insertion.
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    slots: HashMap<NodeIndex, usize>,
    entries: Vec<(NodeIndex, Node)>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store sized for a tree of at most `max_depth` levels.
    ///
    /// Reserves `2^max_depth - 1` slots, capped.
    pub fn for_depth(max_depth: u32) -> Self {
        let full = 1usize
            .checked_shl(max_depth)
            .map_or(usize::MAX, |n| n - 1);
        Self::with_capacity(full.min(MAX_INITIAL_CAPACITY))
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert `node` under `key`, replacing any existing node.
    pub fn add(&mut self, key: NodeIndex, node: Node) {
        match self.slots.get(&key) {
            Some(&slot) => self.entries[slot].1 = node,
            None => {
                self.slots.insert(key, self.entries.len());
                self.entries.push((key, node));
            }
        }
    }

    #[inline]
    pub fn has(&self, key: NodeIndex) -> bool {
        self.slots.contains_key(&key)
    }

    /// Node stored under `key`.
    pub fn get(&self, key: NodeIndex) -> Result<&Node, StoreError> {
        self.slots
            .get(&key)
            .map(|&slot| &self.entries[slot].1)
            .ok_or(StoreError::MissingKey(key))
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, node)` pairs in first-insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (NodeIndex, &Node)> + '_ {
        self.entries.iter().map(|(k, n)| (*k, n))
    }

    /// Cursor positioned before the first entry.
    pub fn begin(&self) -> Cursor<'_> {
        Cursor {
            store: self,
            pos: 0,
        }
    }
}

/// Explicit forward cursor over a [`NodeStore`].
///
/// Unlike [`NodeStore::iter`], advancing past the end is an error rather than
/// a silent `None`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    store: &'a NodeStore,
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn has_next(&self) -> bool {
        self.pos < self.store.entries.len()
    }

    /// Return the current entry and move forward.
    pub fn advance(&mut self) -> Result<(NodeIndex, &'a Node), StoreError> {
        let (key, node) = self
            .store
            .entries
            .get(self.pos)
            .ok_or(StoreError::Exhausted {
                len: self.store.len(),
            })?;
        self.pos += 1;
        Ok((*key, node))
    }
}
