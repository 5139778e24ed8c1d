use alloc::vec::Vec;

use crate::snapshot::LevelNode;

use super::BstSet;

impl<T> BstSet<T> {
    /// Returns the number of edges on the longest root-to-node path; 0
    /// for an empty or single-value set.
    ///
    /// Nothing bounds this: sorted insertion produces `len - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use garnet_tree::BstSet;
    ///
    /// let chain: BstSet<i32> = (1..=7).collect();
    /// assert_eq!(chain.height(), 6);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the number of levels; one more than the height for a
    /// non-empty set, 0 for an empty one.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.tree.level_count()
    }

    /// Returns the number of values stored in nodes with no children.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }

    /// Returns the maximum number of nodes on any single level.
    ///
    /// # Complexity
    ///
    /// O(2^height): the snapshot grid doubles per level, so this is only
    /// practical on shallow trees.
    #[must_use]
    pub fn width(&self) -> usize {
        self.tree.width()
    }

    /// Returns the longest path through the root, computed as
    /// `3 + height(left) + height(right)` with an absent subtree
    /// contributing 0; 0 for an empty set.
    #[must_use]
    pub fn diameter(&self) -> usize {
        self.tree.diameter()
    }

    /// Returns `true` if every node has zero or two children. Vacuously
    /// true for an empty set.
    #[must_use]
    pub fn is_full_tree(&self) -> bool {
        self.tree.is_full_tree()
    }

    /// Returns the smallest value in the set, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns the largest value in the set, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Returns the number of nodes on each level, top to bottom.
    ///
    /// # Complexity
    ///
    /// O(2^height): only practical on shallow trees.
    #[must_use]
    pub fn level_widths(&self) -> Vec<usize> {
        self.tree.level_widths()
    }
}

impl<T: Clone> BstSet<T> {
    /// Returns level-indexed value snapshots with explicit empty slots,
    /// in the layout described at
    /// [`RbTreeSet::levels`](crate::RbTreeSet::levels).
    ///
    /// # Complexity
    ///
    /// O(2^height): only practical on shallow trees.
    #[must_use]
    pub fn levels(&self) -> Vec<Vec<Option<T>>> {
        self.tree.levels()
    }

    /// Returns level-indexed node snapshots carrying value, color and
    /// parent presence. Plain trees keep every node black.
    ///
    /// # Complexity
    ///
    /// O(2^height): only practical on shallow trees.
    #[must_use]
    pub fn level_nodes(&self) -> Vec<Vec<Option<LevelNode<T>>>> {
        self.tree.level_nodes()
    }
}
