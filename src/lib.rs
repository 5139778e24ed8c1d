//! Ordered set collections backed by binary search trees.
//!
//! This crate provides [`RbTreeSet`], an ordered set on a red-black tree
//! with O(log n) search, insertion and removal, and [`BstSet`], the same
//! interface on the plain, unbalanced core. Both iterate in ascending
//! order and answer the shape queries a tree renderer needs: heights,
//! per-level snapshots with explicit empty slots, level widths and
//! diameters.
//!
//! # Example
//!
//! ```
//! use garnet_tree::RbTreeSet;
//!
//! let mut scores = RbTreeSet::new();
//! scores.insert(85);
//! scores.insert(100);
//! scores.insert(92);
//!
//! assert!(scores.contains(&92));
//! assert_eq!(scores.first(), Some(&85));
//! assert_eq!(scores.iter().copied().collect::<Vec<_>>(), [85, 92, 100]);
//!
//! // Seven values fit in three perfectly filled levels.
//! let full: RbTreeSet<i32> = [10, 5, 15, 3, 7, 12, 18].into();
//! assert_eq!(full.height(), 2);
//! assert_eq!(full.level_widths(), [1, 2, 4]);
//! ```
//!
//! # Implementation
//!
//! Nodes live in an arena and the tree structure on top is stable
//! `NonZero<u32>` handles, so parent back-references are plain indices
//! and rotations reassign links without touching ownership. The
//! balancing discipline is injected at construction and consulted at
//! three extension points (insertion descent, leaf attach, splice), which
//! is all that separates [`RbTreeSet`] from [`BstSet`].
//!
//! Rotations and deletion repair can be traced through an injectable
//! [`TreeObserver`]; [`LogObserver`] forwards the events to the [`log`]
//! facade. Observation is diagnostic only.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

extern crate alloc;

mod observer;
mod raw;
mod snapshot;

pub mod bst_set;
pub mod rb_tree_set;

pub use bst_set::BstSet;
pub use observer::{LogObserver, NopObserver, Rotation, TreeObserver};
pub use rb_tree_set::RbTreeSet;
pub use snapshot::{Color, LevelNode};
