use core::fmt;

/// The four local restructurings a red-black tree performs around a node,
/// its parent and its grandparent.
///
/// The name encodes the child types of the parent and of the violating
/// node: `LeftRight` means the parent is a left child and the node is the
/// parent's right child.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Rotation {
    LeftLeft,
    RightRight,
    LeftRight,
    RightLeft,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rotation::LeftLeft => "left-left",
            Rotation::RightRight => "right-right",
            Rotation::LeftRight => "left-right",
            Rotation::RightLeft => "right-left",
        };
        f.write_str(name)
    }
}

/// Receives diagnostic notifications from [`RbTreeSet`](crate::RbTreeSet)
/// at rotation and deletion-repair decision points.
///
/// Every method has a no-op default, so an implementation only overrides
/// the events it cares about. Notifications are purely informational:
/// they never influence the tree's behavior, and correctness never
/// depends on an observer being installed.
///
/// # Examples
///
/// ```
/// use garnet_tree::{RbTreeSet, Rotation, TreeObserver};
///
/// struct Counter(usize);
///
/// impl<T> TreeObserver<T> for Counter {
///     fn rotation(&mut self, _rotation: Rotation) {
///         self.0 += 1;
///     }
/// }
///
/// let mut set = RbTreeSet::new();
/// set.set_observer(Box::new(Counter(0)));
/// for value in 1..=7 {
///     set.insert(value);
/// }
/// ```
pub trait TreeObserver<T> {
    /// Called when the tree decides to perform `rotation`.
    fn rotation(&mut self, rotation: Rotation) {
        let _ = rotation;
    }

    /// Called each time deletion repair (re)starts at a deficient
    /// position. `occupant` is the value currently at that position, or
    /// `None` when the position is empty.
    fn double_black(&mut self, occupant: Option<&T>) {
        let _ = occupant;
    }
}

/// The default observer; ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NopObserver;

impl<T> TreeObserver<T> for NopObserver {}

/// Forwards notifications to the [`log`] facade at `debug` level.
///
/// Install a logger (e.g. `simplelog`) in the host application to see the
/// messages; with no logger installed this degrades to a no-op.
///
/// # Examples
///
/// ```
/// use garnet_tree::{LogObserver, RbTreeSet};
///
/// let mut set = RbTreeSet::new();
/// set.set_observer(Box::new(LogObserver));
/// set.insert("a");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl<T: fmt::Debug> TreeObserver<T> for LogObserver {
    fn rotation(&mut self, rotation: Rotation) {
        log::debug!("performing {rotation} rotation");
    }

    fn double_black(&mut self, occupant: Option<&T>) {
        match occupant {
            Some(value) => log::debug!("repairing double black at {value:?}"),
            None => log::debug!("repairing double black at empty position"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn rotation_display_names() {
        assert_eq!(format!("{}", Rotation::LeftLeft), "left-left");
        assert_eq!(format!("{}", Rotation::RightRight), "right-right");
        assert_eq!(format!("{}", Rotation::LeftRight), "left-right");
        assert_eq!(format!("{}", Rotation::RightLeft), "right-left");
    }

    #[test]
    fn default_methods_are_noops() {
        let mut observer = NopObserver;
        TreeObserver::<i32>::rotation(&mut observer, Rotation::LeftLeft);
        TreeObserver::<i32>::double_black(&mut observer, Some(&1));
        TreeObserver::<i32>::double_black(&mut observer, None);
    }
}
