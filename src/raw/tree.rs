use core::borrow::Borrow;
use core::cmp::Ordering;
use core::iter::FusedIterator;

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::observer::TreeObserver;
use crate::snapshot::Color;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{ChildType, Node};

/// Balancing discipline applied at the tree's extension points.
///
/// Injected at construction. `Plain` leaves the structure wherever the
/// insertion order puts it; `RedBlack` restores logarithmic height after
/// every mutation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Balancing {
    Plain,
    RedBlack,
}

/// The node-level ordered-tree core backing both public set types.
///
/// Owns a single root slot; ownership of every node lives in the arena
/// and the structure on top is pure handles. The balancing policy is
/// consulted at three points: while the insertion descent moves through a
/// node, after a new leaf is attached, and in place of the plain splice
/// on removal.
pub(crate) struct RawTree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Handle>,
    len: usize,
    balancing: Balancing,
}

impl<T> RawTree<T> {
    pub(crate) const fn new(balancing: Balancing) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            balancing,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.nodes.get(handle)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<T> {
        self.nodes.get_mut(handle)
    }

    /// Drops every node. All handles become invalid.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Makes `child` the left child of `parent`, updating the child's
    /// back-reference in the same step.
    pub(crate) fn link_left(&mut self, parent: Handle, child: Option<Handle>) {
        self.node_mut(parent).set_left(child);
        if let Some(child) = child {
            self.node_mut(child).set_parent(Some(parent));
        }
    }

    /// Mirror image of [`RawTree::link_left`].
    pub(crate) fn link_right(&mut self, parent: Handle, child: Option<Handle>) {
        self.node_mut(parent).set_right(child);
        if let Some(child) = child {
            self.node_mut(child).set_parent(Some(parent));
        }
    }

    /// Clears `node`'s back-reference and installs it as the tree root.
    pub(crate) fn make_root(&mut self, node: Handle) {
        self.node_mut(node).set_parent(None);
        self.root = Some(node);
    }

    /// The slot `node` occupies relative to its parent.
    pub(crate) fn child_type(&self, node: Handle) -> ChildType {
        match self.node(node).parent() {
            None => ChildType::Root,
            Some(parent) if self.node(parent).left() == Some(node) => ChildType::Left,
            Some(_) => ChildType::Right,
        }
    }

    /// The parent's other child, if both the parent and that child exist.
    pub(crate) fn sibling(&self, node: Handle) -> Option<Handle> {
        let parent = self.node(node).parent()?;
        if self.node(parent).left() == Some(node) {
            self.node(parent).right()
        } else {
            self.node(parent).left()
        }
    }

    /// Whether `node` is red; an absent node counts as black.
    pub(crate) fn is_red(&self, node: Option<Handle>) -> bool {
        node.is_some_and(|handle| self.node(handle).color().is_red())
    }

    /// Colors `node` black; a no-op for an absent node.
    pub(crate) fn make_black(&mut self, node: Option<Handle>) {
        if let Some(handle) = node {
            self.node_mut(handle).set_color(Color::Black);
        }
    }

    /// Removes a node with at most one child, moving that child (or
    /// nothing) into the node's exact position. Returns the child.
    pub(crate) fn splice(&mut self, target: Handle) -> Option<Handle> {
        debug_assert!(self.node(target).degree() <= 1, "`RawTree::splice()` - `target` has two children!");
        let node = self.node(target);
        let child = node.left().or(node.right());
        let parent = node.parent();

        match self.child_type(target) {
            ChildType::Left => self.link_left(parent.unwrap(), child),
            ChildType::Right => self.link_right(parent.unwrap(), child),
            ChildType::Root => {
                self.root = child;
                if let Some(child) = child {
                    self.node_mut(child).set_parent(None);
                }
            }
        }

        self.nodes.free(target);
        child
    }

    /// Consumes the structure, yielding every value in ascending order.
    pub(crate) fn drain_in_order(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: SmallVec<[Handle; 16]> = SmallVec::new();
        let mut next = self.root;

        while next.is_some() || !stack.is_empty() {
            while let Some(handle) = next {
                stack.push(handle);
                next = self.node(handle).left();
            }
            let handle = stack.pop().unwrap();
            next = self.node(handle).right();
            out.push(self.nodes.take(handle).into_value());
        }

        self.root = None;
        self.len = 0;
        self.nodes.clear();
        out
    }

    /// Lazy in-order traversal. See [`RawIter`].
    pub(crate) fn iter(&self) -> RawIter<'_, T> {
        RawIter {
            tree: self,
            stack: SmallVec::new(),
            next: self.root,
            remaining: self.len,
        }
    }
}

impl<T: Ord + Clone> RawTree<T> {
    /// Binary search for `value`; returns the node that compares equal.
    pub(crate) fn find<Q>(&self, value: &Q) -> Option<Handle>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            match value.cmp(node.value().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(handle),
            }
        }
        None
    }

    pub(crate) fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(value).is_some()
    }

    /// Inserts `value`, returning whether the tree changed.
    ///
    /// Equal values are rejected without structural change; the balanced
    /// variant may still perform invariant-preserving recolorings on the
    /// search path before the duplicate is found.
    pub(crate) fn insert(&mut self, value: T, observer: &mut dyn TreeObserver<T>) -> bool {
        let Some(mut current) = self.root else {
            let leaf = self.nodes.alloc(Node::new(value));
            self.root = Some(leaf);
            self.len = 1;
            self.attached(leaf, observer);
            return true;
        };

        loop {
            self.descending(current, observer);
            match value.cmp(self.node(current).value()) {
                Ordering::Equal => return false,
                Ordering::Less => match self.node(current).left() {
                    Some(child) => current = child,
                    None => {
                        let leaf = self.nodes.alloc(Node::new(value));
                        self.link_left(current, Some(leaf));
                        self.len += 1;
                        self.attached(leaf, observer);
                        return true;
                    }
                },
                Ordering::Greater => match self.node(current).right() {
                    Some(child) => current = child,
                    None => {
                        let leaf = self.nodes.alloc(Node::new(value));
                        self.link_right(current, Some(leaf));
                        self.len += 1;
                        self.attached(leaf, observer);
                        return true;
                    }
                },
            }
        }
    }

    /// Removes the node comparing equal to `value`, returning whether one
    /// was present.
    pub(crate) fn remove<Q>(&mut self, value: &Q, observer: &mut dyn TreeObserver<T>) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Some(mut target) = self.find(value) else {
            return false;
        };

        if self.node(target).degree() == 2 {
            // Two children: the in-order successor's value moves up and
            // the successor node is the one detached.
            let mut successor = self.node(target).right().unwrap();
            while let Some(left) = self.node(successor).left() {
                successor = left;
            }
            let moved = self.node(successor).value().clone();
            self.node_mut(target).set_value(moved);
            target = successor;
        }

        match self.balancing {
            Balancing::Plain => {
                self.splice(target);
            }
            Balancing::RedBlack => self.remove_rebalance(target, observer),
        }
        self.len -= 1;
        true
    }

    /// Extension point: the insertion descent is about to move through
    /// `node`.
    fn descending(&mut self, node: Handle, observer: &mut dyn TreeObserver<T>) {
        if self.balancing == Balancing::RedBlack {
            self.color_swap(node, observer);
        }
    }

    /// Extension point: `leaf` was just created and linked in.
    fn attached(&mut self, leaf: Handle, observer: &mut dyn TreeObserver<T>) {
        match self.balancing {
            // Plain trees carry no balancing state; keep them uniformly
            // black so level snapshots are meaningful.
            Balancing::Plain => self.node_mut(leaf).set_color(Color::Black),
            Balancing::RedBlack => self.fix_inserted(leaf, observer),
        }
    }
}

/// Lazy, restartable in-order traversal over a [`RawTree`].
///
/// Descends left spines onto a private stack and yields each node on the
/// way back up before moving into its right subtree. The shared borrow
/// keeps the tree structurally frozen for the iterator's lifetime.
pub(crate) struct RawIter<'a, T> {
    tree: &'a RawTree<T>,
    stack: SmallVec<[Handle; 16]>,
    next: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Iterator for RawIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some(handle) = self.next {
            self.stack.push(handle);
            self.next = self.tree.node(handle).left();
        }
        let handle = self.stack.pop()?;
        self.next = self.tree.node(handle).right();
        self.remaining -= 1;
        Some(self.tree.node(handle).value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for RawIter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for RawIter<'_, T> {}

impl<T> Clone for RawIter<'_, T> {
    fn clone(&self) -> Self {
        RawIter {
            tree: self.tree,
            stack: self.stack.clone(),
            next: self.next,
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;

    use proptest::prelude::*;

    use crate::observer::NopObserver;

    use super::*;

    impl<T: Ord + Clone> RawTree<T> {
        /// Validates every structural invariant, panicking with a
        /// description of the first violation. Test-only.
        pub(crate) fn validate_invariants(&self) {
            let mut errors: Vec<String> = Vec::new();

            if let Some(root) = self.root {
                if self.node(root).parent().is_some() {
                    errors.push(String::from("root has a parent link"));
                }
                self.validate_links(root, &mut errors);

                let in_order: Vec<&T> = self.iter().collect();
                if in_order.len() != self.len {
                    errors.push(format!("len mismatch: field {}, counted {}", self.len, in_order.len()));
                }
                for pair in in_order.windows(2) {
                    if pair[0] >= pair[1] {
                        errors.push(String::from("in-order values not strictly ascending"));
                    }
                }

                if self.balancing == Balancing::RedBlack {
                    if self.node(root).color().is_red() {
                        errors.push(String::from("root is red"));
                    }
                    self.validate_black_height(Some(root), &mut errors);
                }
            } else if self.len != 0 {
                errors.push(format!("empty tree with len {}", self.len));
            }

            assert!(errors.is_empty(), "tree invariant violations:\n{}", errors.join("\n"));
        }

        fn validate_links(&self, handle: Handle, errors: &mut Vec<String>) {
            for child in [self.node(handle).left(), self.node(handle).right()].into_iter().flatten() {
                if self.node(child).parent() != Some(handle) {
                    errors.push(String::from("child's parent link does not point at its parent"));
                }
                if self.node(handle).color().is_red() && self.node(child).color().is_red() {
                    errors.push(String::from("red node has a red child"));
                }
                self.validate_links(child, errors);
            }
        }

        /// Returns the black-height of the subtree, recording a violation
        /// if the two sides disagree.
        fn validate_black_height(&self, node: Option<Handle>, errors: &mut Vec<String>) -> usize {
            let Some(handle) = node else { return 1 };
            let left = self.validate_black_height(self.node(handle).left(), errors);
            let right = self.validate_black_height(self.node(handle).right(), errors);
            if left != right {
                errors.push(format!("black-height mismatch: left {left}, right {right}"));
            }
            left + usize::from(self.node(handle).color().is_black())
        }
    }

    fn plain_tree(values: &[i32]) -> RawTree<i32> {
        let mut tree = RawTree::new(Balancing::Plain);
        for &value in values {
            tree.insert(value, &mut NopObserver);
        }
        tree
    }

    #[test]
    fn insert_find_remove() {
        let mut tree = plain_tree(&[5, 3, 8, 1]);
        assert_eq!(tree.len(), 4);
        assert!(tree.contains(&3));
        assert!(!tree.contains(&4));

        assert!(tree.remove(&3, &mut NopObserver));
        assert!(!tree.remove(&3, &mut NopObserver));
        assert_eq!(tree.len(), 3);
        assert!(!tree.contains(&3));
        tree.validate_invariants();
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut tree = plain_tree(&[2, 1, 3]);
        assert!(!tree.insert(2, &mut NopObserver));
        assert_eq!(tree.len(), 3);
        tree.validate_invariants();
    }

    #[test]
    fn remove_two_child_node_promotes_successor() {
        // 5's successor is 6, the leftmost node of its right subtree.
        let mut tree = plain_tree(&[5, 2, 8, 6, 9, 7]);
        assert!(tree.remove(&5, &mut NopObserver));
        let in_order: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(in_order, [2, 6, 7, 8, 9]);
        tree.validate_invariants();
    }

    #[test]
    fn remove_root_with_single_child() {
        let mut tree = plain_tree(&[5, 8]);
        assert!(tree.remove(&5, &mut NopObserver));
        assert_eq!(tree.root().map(|h| *tree.node(h).value()), Some(8));
        assert!(tree.node(tree.root().unwrap()).parent().is_none());
        tree.validate_invariants();
    }

    #[test]
    fn remove_last_node_empties_tree() {
        let mut tree = plain_tree(&[1]);
        assert!(tree.remove(&1, &mut NopObserver));
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        tree.validate_invariants();
    }

    #[test]
    fn drain_yields_ascending_order() {
        let mut tree = plain_tree(&[4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(tree.drain_in_order(), [1, 2, 3, 4, 5, 6, 7]);
        assert!(tree.is_empty());
    }

    proptest! {
        #[test]
        fn plain_tree_keeps_order_invariant(values in prop::collection::vec(-1000i32..1000, 0..64)) {
            let tree = plain_tree(&values);
            tree.validate_invariants();

            let mut expected: Vec<i32> = values.clone();
            expected.sort_unstable();
            expected.dedup();
            let in_order: Vec<i32> = tree.iter().copied().collect();
            prop_assert_eq!(in_order, expected);
        }
    }
}
