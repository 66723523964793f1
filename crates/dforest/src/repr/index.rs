//! Implicit binary-heap node indexing.
//!
//! The root is index 0 and node `n` has children `2n + 1` (left) and
//! `2n + 2` (right). Indices are only ever materialized for nodes that exist,
//! so a deep, unbalanced tree costs nothing for the gaps.

/// Implicit tree index of a node.
pub type NodeIndex = u64;

/// Index of the root node.
pub const ROOT: NodeIndex = 0;

/// Deepest level whose indices still fit in a [`NodeIndex`].
pub const MAX_LEVEL: u32 = 64;

#[inline]
pub fn left_child(node: NodeIndex) -> NodeIndex {
    2 * node + 1
}

#[inline]
pub fn right_child(node: NodeIndex) -> NodeIndex {
    2 * node + 2
}

/// Both children of `node`, or `None` when they fall outside the index range.
#[inline]
pub fn children(node: NodeIndex) -> Option<(NodeIndex, NodeIndex)> {
    let left = node.checked_mul(2)?.checked_add(1)?;
    Some((left, left.checked_add(1)?))
}

/// Parent of `node`, or `None` for the root.
#[inline]
pub fn parent(node: NodeIndex) -> Option<NodeIndex> {
    if node == ROOT {
        None
    } else {
        Some((node - 1) / 2)
    }
}

/// 1-based depth level: the root is on level 1, its children on level 2.
#[inline]
pub fn level(node: NodeIndex) -> u32 {
    (u128::from(node) + 1).ilog2() + 1
}

/// Map a raw signed key onto a node index by absolute value.
#[inline]
pub fn normalize_key(raw: i64) -> NodeIndex {
    raw.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(2, 2)]
    #[case(3, 3)]
    #[case(6, 3)]
    #[case(7, 4)]
    #[case(14, 4)]
    #[case(15, 5)]
    fn level_of_index(#[case] node: NodeIndex, #[case] expected: u32) {
        assert_eq!(level(node), expected);
    }

    #[test]
    fn root_has_no_parent() {
        assert_eq!(parent(ROOT), None);
        assert_eq!(parent(1), Some(0));
        assert_eq!(parent(2), Some(0));
    }

    #[test]
    fn normalize_takes_absolute_value() {
        assert_eq!(normalize_key(-5), 5);
        assert_eq!(normalize_key(5), 5);
        assert_eq!(normalize_key(i64::MIN), 1u64 << 63);
    }

    #[test]
    fn deepest_level_does_not_overflow() {
        let last = u64::MAX - 1;
        assert_eq!(level(last), MAX_LEVEL);
        assert_eq!(level(u64::MAX), 65);
    }

    #[test]
    fn children_stop_at_the_last_level() {
        assert_eq!(children(0), Some((1, 2)));
        let last_inner = (1u64 << 63) - 2;
        assert_eq!(level(last_inner), MAX_LEVEL - 1);
        assert_eq!(children(last_inner), Some((u64::MAX - 2, u64::MAX - 1)));
        assert_eq!(children(u64::MAX - 1), None);
        assert_eq!(children(1u64 << 63), None);
    }

    proptest! {
        #[test]
        fn children_point_back_to_parent(node in 0u64..(1u64 << 62)) {
            prop_assert_eq!(parent(left_child(node)), Some(node));
            prop_assert_eq!(parent(right_child(node)), Some(node));
        }

        #[test]
        fn children_are_one_level_deeper(node in 0u64..(1u64 << 62)) {
            prop_assert_eq!(level(left_child(node)), level(node) + 1);
            prop_assert_eq!(level(right_child(node)), level(node) + 1);
        }
    }
}
