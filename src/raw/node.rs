use crate::snapshot::Color;

use super::handle::Handle;

/// Which slot a node occupies relative to its parent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ChildType {
    Left,
    Right,
    Root,
}

/// A single tree vertex.
///
/// The child links own their subtrees (transitively, through the arena);
/// the parent link is a non-owning back-reference that lets rotation and
/// repair code walk upward without re-descending from the root. Link
/// maintenance lives on the tree, which has the arena; the node itself
/// only stores and swaps its fields.
pub(crate) struct Node<T> {
    value: T,
    left: Option<Handle>,
    right: Option<Handle>,
    parent: Option<Handle>,
    color: Color,
}

impl<T> Node<T> {
    /// Creates a detached leaf. New nodes start red: the balanced layer
    /// relies on insertion introducing no black-height change.
    pub(crate) const fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent: None,
            color: Color::Red,
        }
    }

    #[inline]
    pub(crate) const fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn set_value(&mut self, value: T) {
        self.value = value;
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Option<Handle> {
        self.parent
    }

    pub(crate) const fn set_left(&mut self, left: Option<Handle>) {
        self.left = left;
    }

    pub(crate) const fn set_right(&mut self, right: Option<Handle>) {
        self.right = right;
    }

    pub(crate) const fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    pub(crate) const fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub(crate) const fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Number of children present: 0, 1 or 2.
    pub(crate) const fn degree(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }

    #[inline]
    pub(crate) const fn color(&self) -> Color {
        self.color
    }

    pub(crate) const fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) const fn swap_color(&mut self) {
        self.color = self.color.flipped();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_a_red_leaf() {
        let node = Node::new(42);
        assert_eq!(*node.value(), 42);
        assert_eq!(node.color(), Color::Red);
        assert_eq!(node.degree(), 0);
        assert!(!node.has_left());
        assert!(!node.has_right());
        assert!(node.parent().is_none());
    }

    #[test]
    fn degree_counts_present_children() {
        let mut node = Node::new(1);
        node.set_left(Some(Handle::from_index(0)));
        assert_eq!(node.degree(), 1);
        node.set_right(Some(Handle::from_index(1)));
        assert_eq!(node.degree(), 2);
        node.set_left(None);
        assert_eq!(node.degree(), 1);
    }

    #[test]
    fn swap_color_flips() {
        let mut node = Node::new(1);
        node.swap_color();
        assert_eq!(node.color(), Color::Black);
        node.swap_color();
        assert_eq!(node.color(), Color::Red);
    }
}
