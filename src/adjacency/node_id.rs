//! `NodeId`: a strong, zero-cost handle for container nodes.
//!
//! The bundled containers store node data in an arena and hand out dense
//! `u32` indices wrapped in a newtype. Handles are minted only by
//! [`Digraph::add_node`](crate::adjacency::Digraph::add_node) (and the
//! [`Undirected`](crate::adjacency::Undirected) passthrough); using a
//! handle with any graph other than the one that minted it is a
//! programming error.

use std::fmt;

/// Arena index of a node in a bundled adjacency container.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of this node in the container's arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Prints the raw index without wrapper text.
impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_and_hash() {
        let a = NodeId(1);
        let b = NodeId(2);
        assert!(a < b);
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn debug_and_display() {
        let n = NodeId(7);
        assert_eq!(format!("{:?}", n), "NodeId(7)");
        assert_eq!(format!("{}", n), "7");
    }
}
