//! Red-black maintenance: the four rotation shapes, the insertion
//! color-swap/repair pass and the double-black deletion repair.
//!
//! Everything here runs only for trees constructed with
//! [`Balancing::RedBlack`](super::tree::Balancing); the structural core
//! calls in through its extension points.

use crate::observer::{Rotation, TreeObserver};
use crate::snapshot::Color;

use super::handle::Handle;
use super::node::ChildType;
use super::tree::RawTree;

impl<T: Ord + Clone> RawTree<T> {
    /// Splits a red child pair before the insertion descent moves through
    /// `node`: both children turn black and `node` takes their redness
    /// (the root keeps its black). Any red-red pair this creates between
    /// `node` and its parent is rotated away before the descent continues.
    pub(super) fn color_swap(&mut self, node: Handle, observer: &mut dyn TreeObserver<T>) {
        let left = self.node(node).left();
        let right = self.node(node).right();
        if !(self.is_red(left) && self.is_red(right)) {
            return;
        }

        if self.root() == Some(node) {
            self.make_black(left);
            self.make_black(right);
        } else {
            self.node_mut(node).swap_color();
            self.make_black(left);
            self.make_black(right);
            self.fix_inserted(node, observer);
        }
    }

    /// Repairs a red-red violation between `node` and its parent with a
    /// single rotation, then forces the root black.
    pub(super) fn fix_inserted(&mut self, node: Handle, observer: &mut dyn TreeObserver<T>) {
        if self.is_red(self.node(node).parent()) {
            self.rotate(node, observer);
        }
        self.make_black(self.root());
    }

    /// Splices out `target` (degree at most one), then restores the
    /// black-height invariant.
    ///
    /// When the target or its sole child is red the splice is trivially
    /// safe and the child just turns black. When both are black the
    /// removal leaves a black-height deficit, so a sibling is captured
    /// before the target disappears and repair starts from there. A black
    /// root with no sibling is the one case with nothing to repair
    /// against: the tree simply loses one black level uniformly.
    pub(super) fn remove_rebalance(&mut self, target: Handle, observer: &mut dyn TreeObserver<T>) {
        let node = self.node(target);
        let child = node.left().or(node.right());

        if self.is_red(Some(target)) || self.is_red(child) {
            self.splice(target);
            self.make_black(child);
            return;
        }

        let sibling = self
            .sibling(target)
            .or_else(|| self.node(target).parent().and_then(|parent| self.sibling(parent)));
        self.splice(target);
        match sibling {
            Some(sibling) => self.fix_double_black(sibling, observer),
            None => self.make_black(self.root()),
        }
    }

    /// Resolves a black-height deficit at the position opposite `sibling`.
    ///
    /// Three terminal outcomes: a red sibling rotates up and the repair
    /// retries against the new sibling; a black sibling with a red child
    /// finishes with one rotation and a repaint; a black sibling with no
    /// red children goes red itself and either the deficit propagates to
    /// the parent's level or the parent soaks it up by turning black.
    fn fix_double_black(&mut self, sibling: Handle, observer: &mut dyn TreeObserver<T>) {
        observer.double_black(self.sibling(sibling).map(|handle| self.node(handle).value()));

        let parent = self.node(sibling).parent().expect("`RawTree::fix_double_black()` - `sibling` is the root!");

        if self.is_red(Some(sibling)) {
            let next = match self.child_type(sibling) {
                ChildType::Right => {
                    self.rr(sibling, observer);
                    self.node(parent).right()
                }
                _ => {
                    self.ll(sibling, observer);
                    self.node(parent).left()
                }
            };
            let next = next.expect("`RawTree::fix_double_black()` - red sibling had an absent child!");
            self.fix_double_black(next, observer);
        } else if self.is_red(self.node(sibling).left()) || self.is_red(self.node(sibling).right()) {
            let repaint = self.node(parent).color();
            let pivot = match self.child_type(sibling) {
                ChildType::Left if self.is_red(self.node(sibling).left()) => self.node(sibling).left(),
                ChildType::Left => self.node(sibling).right(),
                _ if self.is_red(self.node(sibling).right()) => self.node(sibling).right(),
                _ => self.node(sibling).left(),
            };
            let pivot = pivot.expect("`RawTree::fix_double_black()` - red child vanished!");

            let top = self.rotate(pivot, observer);
            self.node_mut(top).set_color(repaint);
            self.make_black(self.node(top).left());
            self.make_black(self.node(top).right());
        } else {
            self.node_mut(sibling).set_color(Color::Red);
            let propagate = self.root() != Some(parent) && self.node(parent).color().is_black();
            if propagate
                && let Some(uncle) = self.sibling(parent)
            {
                self.fix_double_black(uncle, observer);
            } else {
                self.make_black(Some(parent));
            }
        }
    }

    /// Selects and performs the rotation implied by the child types of
    /// `x` and its parent, returning the handle now topping the rotated
    /// subtree.
    pub(super) fn rotate(&mut self, x: Handle, observer: &mut dyn TreeObserver<T>) -> Handle {
        let parent = self.node(x).parent().expect("`RawTree::rotate()` - `x` has no parent!");
        match (self.child_type(parent), self.child_type(x)) {
            (ChildType::Left, ChildType::Left) => self.ll(parent, observer),
            (ChildType::Left, ChildType::Right) => self.lr(parent, observer),
            (ChildType::Right, ChildType::Left) => self.rl(parent, observer),
            (ChildType::Right, ChildType::Right) => self.rr(parent, observer),
            _ => panic!("`RawTree::rotate()` - `x` or its parent occupies the root slot!"),
        }
    }

    /// Rotates `p` up over its own parent. Returns the new subtree top.
    fn ll(&mut self, p: Handle, observer: &mut dyn TreeObserver<T>) -> Handle {
        observer.rotation(Rotation::LeftLeft);
        let g = self.node(p).parent().expect("`RawTree::ll()` - `p` has no parent!");
        self.ll_rotate(p, g);
        p
    }

    /// Mirror image of [`RawTree::ll`].
    fn rr(&mut self, p: Handle, observer: &mut dyn TreeObserver<T>) -> Handle {
        observer.rotation(Rotation::RightRight);
        let g = self.node(p).parent().expect("`RawTree::rr()` - `p` has no parent!");
        self.rr_rotate(p, g);
        p
    }

    /// Double rotation: `p`'s right child rotates over `p`, then over the
    /// grandparent. Returns the new subtree top.
    fn lr(&mut self, p: Handle, observer: &mut dyn TreeObserver<T>) -> Handle {
        observer.rotation(Rotation::LeftRight);
        let x = self.node(p).right().expect("`RawTree::lr()` - `p` has no right child!");
        let g = self.node(p).parent().expect("`RawTree::lr()` - `p` has no parent!");
        self.rr_rotate(x, p);
        self.ll_rotate(x, g);
        x
    }

    /// Mirror image of [`RawTree::lr`].
    fn rl(&mut self, p: Handle, observer: &mut dyn TreeObserver<T>) -> Handle {
        observer.rotation(Rotation::RightLeft);
        let x = self.node(p).left().expect("`RawTree::rl()` - `p` has no left child!");
        let g = self.node(p).parent().expect("`RawTree::rl()` - `p` has no parent!");
        self.ll_rotate(x, p);
        self.rr_rotate(x, g);
        x
    }

    /// Single left-left restructuring of `p` against its grandparent-side
    /// parent `g`: `p`'s right subtree crosses over to become `g`'s left,
    /// `p` takes `g`'s position and `g` becomes `p`'s right child.
    /// Recolors `g` red and `p` black.
    fn ll_rotate(&mut self, p: Handle, g: Handle) {
        let inner = self.node(p).right();
        let g_slot = self.child_type(g);
        let g_parent = self.node(g).parent();

        self.link_left(g, inner);
        match g_slot {
            ChildType::Left => self.link_left(g_parent.unwrap(), Some(p)),
            ChildType::Right => self.link_right(g_parent.unwrap(), Some(p)),
            ChildType::Root => self.make_root(p),
        }
        self.link_right(p, Some(g));

        self.node_mut(g).set_color(Color::Red);
        self.node_mut(p).set_color(Color::Black);
    }

    /// Mirror image of [`RawTree::ll_rotate`].
    fn rr_rotate(&mut self, p: Handle, g: Handle) {
        let inner = self.node(p).left();
        let g_slot = self.child_type(g);
        let g_parent = self.node(g).parent();

        self.link_right(g, inner);
        match g_slot {
            ChildType::Left => self.link_left(g_parent.unwrap(), Some(p)),
            ChildType::Right => self.link_right(g_parent.unwrap(), Some(p)),
            ChildType::Root => self.make_root(p),
        }
        self.link_left(p, Some(g));

        self.node_mut(g).set_color(Color::Red);
        self.node_mut(p).set_color(Color::Black);
    }
}
