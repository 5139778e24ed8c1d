//! Shape queries over the structural core: heights, level snapshots,
//! widths, diameters and extrema. These are the data the rendering side
//! consumes; none of them mutate the tree.

use alloc::vec;
use alloc::vec::Vec;

use smallvec::{SmallVec, smallvec};

use crate::snapshot::LevelNode;

use super::handle::Handle;
use super::tree::RawTree;

impl<T> RawTree<T> {
    /// Number of edges on the longest root-to-node path; 0 for an empty
    /// or single-node tree.
    pub(crate) fn height(&self) -> usize {
        self.root().map_or(0, |root| self.subtree_height(root))
    }

    /// Height of the subtree rooted at `node`, in edges.
    fn subtree_height(&self, node: Handle) -> usize {
        let mut deepest = 0;
        let mut stack: SmallVec<[(Handle, usize); 16]> = smallvec![(node, 0)];
        while let Some((handle, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Some(left) = self.node(handle).left() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = self.node(handle).right() {
                stack.push((right, depth + 1));
            }
        }
        deepest
    }

    /// Number of levels; one more than the height for a non-empty tree, 0
    /// for an empty one.
    pub(crate) fn level_count(&self) -> usize {
        if self.root().is_some() { self.height() + 1 } else { 0 }
    }

    /// Number of nodes with no children.
    pub(crate) fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack: SmallVec<[Handle; 16]> = self.root().into_iter().collect();
        while let Some(handle) = stack.pop() {
            let node = self.node(handle);
            if node.degree() == 0 {
                count += 1;
            }
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// Whether every node has zero or two children. Vacuously true for an
    /// empty tree.
    pub(crate) fn is_full_tree(&self) -> bool {
        let mut stack: SmallVec<[Handle; 16]> = self.root().into_iter().collect();
        while let Some(handle) = stack.pop() {
            let node = self.node(handle);
            if node.degree() == 1 {
                return false;
            }
            stack.extend(node.left());
            stack.extend(node.right());
        }
        true
    }

    /// Longest path through the root, as `3 + height(left) + height(right)`
    /// with an absent subtree contributing 0; 0 for an empty tree.
    pub(crate) fn diameter(&self) -> usize {
        let Some(root) = self.root() else { return 0 };
        let left = self.node(root).left().map_or(0, |left| self.subtree_height(left));
        let right = self.node(root).right().map_or(0, |right| self.subtree_height(right));
        3 + left + right
    }

    /// The smallest (leftmost) value.
    pub(crate) fn first(&self) -> Option<&T> {
        let mut current = self.root()?;
        while let Some(left) = self.node(current).left() {
            current = left;
        }
        Some(self.node(current).value())
    }

    /// The largest (rightmost) value.
    pub(crate) fn last(&self) -> Option<&T> {
        let mut current = self.root()?;
        while let Some(right) = self.node(current).right() {
            current = right;
        }
        Some(self.node(current).value())
    }

    /// Level-indexed handles with explicit empty slots. Level `h` has
    /// `1 << h` slots and slot `i`'s children land at `2i` and `2i + 1`,
    /// so a slot's position alone determines where to draw it. The slot
    /// count doubles per level; callers render shallow (balanced) trees.
    fn level_handles(&self) -> Vec<Vec<Option<Handle>>> {
        let levels = self.level_count();
        let mut rows: Vec<Vec<Option<Handle>>> = Vec::with_capacity(levels);
        let Some(root) = self.root() else { return rows };

        rows.push(vec![Some(root)]);
        for h in 1..levels {
            let mut row: Vec<Option<Handle>> = vec![None; 1 << h];
            for (i, slot) in rows[h - 1].iter().enumerate() {
                if let Some(parent) = *slot {
                    row[2 * i] = self.node(parent).left();
                    row[2 * i + 1] = self.node(parent).right();
                }
            }
            rows.push(row);
        }
        rows
    }

    /// Number of occupied slots per level.
    pub(crate) fn level_widths(&self) -> Vec<usize> {
        self.level_handles().iter().map(|row| row.iter().filter(|slot| slot.is_some()).count()).collect()
    }

    /// Maximum number of nodes on any single level.
    pub(crate) fn width(&self) -> usize {
        self.level_widths().into_iter().max().unwrap_or(0)
    }
}

impl<T: Clone> RawTree<T> {
    /// Level-indexed value snapshots with explicit empty slots.
    pub(crate) fn levels(&self) -> Vec<Vec<Option<T>>> {
        self.level_handles()
            .into_iter()
            .map(|row| row.into_iter().map(|slot| slot.map(|handle| self.node(handle).value().clone())).collect())
            .collect()
    }

    /// Level-indexed node snapshots carrying value, color and parent
    /// presence.
    pub(crate) fn level_nodes(&self) -> Vec<Vec<Option<LevelNode<T>>>> {
        self.level_handles()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|slot| {
                        slot.map(|handle| {
                            let node = self.node(handle);
                            LevelNode {
                                value: node.value().clone(),
                                color: node.color(),
                                has_parent: node.parent().is_some(),
                            }
                        })
                    })
                    .collect()
            })
            .collect()
    }
}
