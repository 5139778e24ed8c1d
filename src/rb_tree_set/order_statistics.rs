use alloc::vec::Vec;

use crate::snapshot::LevelNode;

use super::RbTreeSet;

impl<T> RbTreeSet<T> {
    /// Returns the number of edges on the longest root-to-node path; 0
    /// for an empty or single-value set.
    ///
    /// The red-black rules keep this at most `2 * log2(n + 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use garnet_tree::RbTreeSet;
    ///
    /// let set = RbTreeSet::from([10, 5, 15, 3, 7, 12, 18]);
    /// assert_eq!(set.height(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the number of levels; one more than the height for a
    /// non-empty set, 0 for an empty one.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.tree.level_count()
    }

    /// Returns the number of values stored in nodes with no children.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }

    /// Returns the maximum number of nodes on any single level.
    ///
    /// # Examples
    ///
    /// ```
    /// use garnet_tree::RbTreeSet;
    ///
    /// let set = RbTreeSet::from([10, 5, 15, 3, 7, 12, 18]);
    /// assert_eq!(set.width(), 4);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(2^height); meaningful on balanced trees.
    #[must_use]
    pub fn width(&self) -> usize {
        self.tree.width()
    }

    /// Returns the longest path through the root, computed as
    /// `3 + height(left) + height(right)` with an absent subtree
    /// contributing 0; 0 for an empty set.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn diameter(&self) -> usize {
        self.tree.diameter()
    }

    /// Returns `true` if every node has zero or two children. Vacuously
    /// true for an empty set.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn is_full_tree(&self) -> bool {
        self.tree.is_full_tree()
    }

    /// Returns the smallest value in the set, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use garnet_tree::RbTreeSet;
    ///
    /// let mut set = RbTreeSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns the largest value in the set, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use garnet_tree::RbTreeSet;
    ///
    /// let mut set = RbTreeSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.last(), Some(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Returns the number of nodes on each level, top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use garnet_tree::RbTreeSet;
    ///
    /// let set = RbTreeSet::from([10, 5, 15, 3, 7, 12, 18]);
    /// assert_eq!(set.level_widths(), [1, 2, 4]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(2^height); meaningful on balanced trees.
    #[must_use]
    pub fn level_widths(&self) -> Vec<usize> {
        self.tree.level_widths()
    }
}

impl<T: Clone> RbTreeSet<T> {
    /// Returns level-indexed value snapshots with explicit empty slots.
    ///
    /// Level `h` has `1 << h` slots; the children of the node in slot `i`
    /// sit in slots `2i` and `2i + 1` on the next level, so a slot's
    /// position alone determines where layout code should draw it.
    ///
    /// # Examples
    ///
    /// ```
    /// use garnet_tree::RbTreeSet;
    ///
    /// let set = RbTreeSet::from([2, 1, 3]);
    /// assert_eq!(set.levels(), [vec![Some(2)], vec![Some(1), Some(3)]]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(2^height); meaningful on balanced trees.
    #[must_use]
    pub fn levels(&self) -> Vec<Vec<Option<T>>> {
        self.tree.levels()
    }

    /// Returns level-indexed node snapshots carrying value, color and
    /// parent presence, in the same slot layout as
    /// [`levels`](RbTreeSet::levels). This is the feed for rendering
    /// code; it never refers back into the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use garnet_tree::{Color, RbTreeSet};
    ///
    /// let set = RbTreeSet::from([2, 1, 3]);
    /// let levels = set.level_nodes();
    /// assert_eq!(levels[0][0].as_ref().unwrap().color, Color::Black);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(2^height); meaningful on balanced trees.
    #[must_use]
    pub fn level_nodes(&self) -> Vec<Vec<Option<LevelNode<T>>>> {
        self.tree.level_nodes()
    }
}
