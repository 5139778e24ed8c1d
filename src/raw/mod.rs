mod arena;
mod balance;
mod handle;
mod metrics;
mod node;
mod tree;

pub(crate) use handle::Handle;
pub(crate) use node::{ChildType, Node};
pub(crate) use tree::{Balancing, RawIter, RawTree};
