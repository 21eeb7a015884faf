//! WebTree coordinates: (tree, branch) pairs and their flat slot indices.

use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// The flat fallback list, consulted only after trees 1-3 are exhausted.
pub const FALLBACK_TREE: u8 = 4;

/// Total number of preference slots: 7 per binary tree, 4 in the fallback list.
pub const SLOT_COUNT: usize = 25;

/// One preference slot within a student's WebTree.
///
/// Trees 1-3 are complete binary trees of depth 3 with branches numbered
/// 1..=7 in level order (1 is the root, 2 and 3 its children, 4..=7 the
/// grandchildren). Tree 4 is a flat list with branches 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TreePosition {
    tree: u8,
    branch: u8,
}

impl TreePosition {
    /// First slot every traversal starts from: tree 1, branch 1.
    pub const ROOT: TreePosition = TreePosition { tree: 1, branch: 1 };

    /// Validate and construct a position.
    pub fn new(tree: u8, branch: u8) -> DomainResult<Self> {
        let valid = match tree {
            1..=3 => (1..=7).contains(&branch),
            FALLBACK_TREE => (1..=4).contains(&branch),
            _ => false,
        };
        if valid {
            Ok(Self { tree, branch })
        } else {
            Err(DomainError::InvalidPosition { tree, branch })
        }
    }

    /// Construct without validation. Callers must pass coordinates that are
    /// valid by construction (the cursor transition tables do).
    pub(crate) const fn new_unchecked(tree: u8, branch: u8) -> Self {
        Self { tree, branch }
    }

    pub fn tree(&self) -> u8 {
        self.tree
    }

    pub fn branch(&self) -> u8 {
        self.branch
    }

    /// Flat slot index into the 25-slot preference array.
    ///
    /// Trees 1-3 occupy slots 0..=20 via `(tree-1)*7 + (branch-1)`; tree 4
    /// occupies slots 21..=24 via `20 + branch`. The source history also
    /// carries a fixed-offset variant for tree 4; `20 + branch` is the
    /// chosen behavior (see DESIGN.md).
    pub fn slot(&self) -> usize {
        if self.tree < FALLBACK_TREE {
            (self.tree as usize - 1) * 7 + (self.branch as usize - 1)
        } else {
            20 + self.branch as usize
        }
    }

}

impl fmt::Display for TreePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.tree, self.branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1, 0)]
    #[case(1, 7, 6)]
    #[case(2, 1, 7)]
    #[case(3, 7, 20)]
    #[case(4, 1, 21)]
    #[case(4, 4, 24)]
    fn given_valid_coordinates_when_computing_slot_then_matches_layout(
        #[case] tree: u8,
        #[case] branch: u8,
        #[case] slot: usize,
    ) {
        let pos = TreePosition::new(tree, branch).unwrap();
        assert_eq!(pos.slot(), slot);
        assert!(pos.slot() < SLOT_COUNT);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(5, 1)]
    #[case(1, 0)]
    #[case(1, 8)]
    #[case(4, 5)]
    fn given_out_of_range_coordinates_when_constructing_then_rejects(
        #[case] tree: u8,
        #[case] branch: u8,
    ) {
        assert_eq!(
            TreePosition::new(tree, branch),
            Err(DomainError::InvalidPosition { tree, branch })
        );
    }
}
