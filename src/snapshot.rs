/// The color tag carried by every tree vertex.
///
/// [`RbTreeSet`](crate::RbTreeSet) maintains the red-black coloring rules;
/// [`BstSet`](crate::BstSet) keeps every node black.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns `true` if this is [`Color::Red`].
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }

    /// Returns `true` if this is [`Color::Black`].
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }

    /// Returns the opposite color.
    #[must_use]
    pub const fn flipped(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// An occupied slot in a level snapshot.
///
/// Produced by [`RbTreeSet::level_nodes`](crate::RbTreeSet::level_nodes)
/// and [`BstSet::level_nodes`](crate::BstSet::level_nodes). This carries
/// everything layout and drawing code needs from a node; it never refers
/// back into the tree.
///
/// # Examples
///
/// ```
/// use garnet_tree::{Color, RbTreeSet};
///
/// let set = RbTreeSet::from([2, 1, 3]);
/// let levels = set.level_nodes();
///
/// let root = levels[0][0].as_ref().unwrap();
/// assert_eq!(root.value, 2);
/// assert_eq!(root.color, Color::Black);
/// assert!(!root.has_parent);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LevelNode<T> {
    /// The value stored at this position.
    pub value: T,
    /// The node's color tag.
    pub color: Color,
    /// Whether the node has a parent; `false` exactly for the root.
    pub has_parent: bool,
}
