use std::fmt;

use serde::{Deserialize, Serialize};

use hyperdisk_ops::Point2D;

use crate::error::GraphError;

// ─────────────────────────────────────────────
// NodeId
// ─────────────────────────────────────────────

/// Dense node identifier: nodes of an `n`-node graph are `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─────────────────────────────────────────────
// Node
// ─────────────────────────────────────────────

/// A node of the proximity graph: an id and its position in the disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,

    /// Position in the Poincaré disk. Invariant: x² + y² < 1.0.
    pub position: Point2D,
}

impl Node {
    pub fn new(id: NodeId, position: Point2D) -> Self {
        Self { id, position }
    }
}

// ─────────────────────────────────────────────
// Edge
// ─────────────────────────────────────────────

/// An undirected edge, stored canonically with `u < v`.
///
/// The ordering derive sorts edges lexicographically by `(u, v)`, which is
/// the order the builder emits them in. Deserializing goes through
/// [`Edge::new`], so a stored `{"u": 5, "v": 2}` comes back as `(2, 5)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEdge")]
pub struct Edge {
    u: NodeId,
    v: NodeId,
}

impl Edge {
    /// Build an edge between two distinct nodes, in either order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] if `a == b`.
    pub fn new(a: NodeId, b: NodeId) -> Result<Self, GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        Ok(Self::canonical(a, b))
    }

    /// Caller guarantees `a != b`.
    #[inline]
    pub(crate) fn canonical(a: NodeId, b: NodeId) -> Self {
        debug_assert_ne!(a, b, "self-loop");
        if a < b {
            Self { u: a, v: b }
        } else {
            Self { u: b, v: a }
        }
    }

    /// Smaller endpoint.
    #[inline]
    pub fn u(&self) -> NodeId {
        self.u
    }

    /// Larger endpoint.
    #[inline]
    pub fn v(&self) -> NodeId {
        self.v
    }

    #[inline]
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.u, self.v)
    }

}

/// Wire shape of an [`Edge`] before validation.
#[derive(Deserialize)]
struct RawEdge {
    u: NodeId,
    v: NodeId,
}

impl TryFrom<RawEdge> for Edge {
    type Error = GraphError;

    fn try_from(raw: RawEdge) -> Result<Self, Self::Error> {
        Self::new(raw.u, raw.v)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_is_canonicalised() {
        let e = Edge::new(NodeId(5), NodeId(2)).unwrap();
        assert_eq!(e.endpoints(), (NodeId(2), NodeId(5)));
        assert_eq!(e, Edge::new(NodeId(2), NodeId(5)).unwrap());
    }

    #[test]
    fn edge_rejects_self_loop() {
        assert_eq!(
            Edge::new(NodeId(3), NodeId(3)),
            Err(GraphError::SelfLoop(NodeId(3)))
        );
    }

    #[test]
    fn edges_sort_lexicographically() {
        let mut edges = vec![
            Edge::new(NodeId(1), NodeId(3)).unwrap(),
            Edge::new(NodeId(0), NodeId(4)).unwrap(),
            Edge::new(NodeId(1), NodeId(2)).unwrap(),
        ];
        edges.sort();
        let pairs: Vec<(usize, usize)> = edges.iter().map(|e| (e.u().0, e.v().0)).collect();
        assert_eq!(pairs, vec![(0, 4), (1, 2), (1, 3)]);
    }

    #[test]
    fn deserialize_rejects_self_loop() {
        let err = serde_json::from_str::<Edge>(r#"{"u":3,"v":3}"#).unwrap_err();
        assert!(err.to_string().contains("self-loop"));
    }

    #[test]
    fn deserialize_canonicalises_endpoints() {
        let e: Edge = serde_json::from_str(r#"{"u":5,"v":2}"#).unwrap();
        assert_eq!(e.endpoints(), (NodeId(2), NodeId(5)));
        assert_eq!(serde_json::to_string(&e).unwrap(), r#"{"u":2,"v":5}"#);
    }

    #[test]
    fn node_id_serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&NodeId(12)).unwrap(), "12");
    }
}
