//! Proximity graph construction.
//!
//! Every unordered pair of points is compared exactly once; an edge is added
//! iff the Euclidean distance is **strictly** below the threshold. The pass is
//! O(n²), which is fine for the tens of nodes the visualizer draws.

use hyperdisk_ops::Point2D;

use crate::error::GraphError;
use crate::model::{Edge, Node, NodeId};

/// Undirected proximity graph over disk points.
///
/// Built once by [`ProximityGraph::build`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityGraph {
    nodes: Vec<Node>,
    /// Sorted by `(u, v)`; each unordered pair at most once.
    edges: Vec<Edge>,
    /// node index → neighbours in ascending order
    adjacency: Vec<Vec<NodeId>>,
    threshold: f64,
}

impl ProximityGraph {
    /// Connect every pair `i < j` with `‖pᵢ − pⱼ‖ < threshold`.
    ///
    /// Node `i` gets position `points[i]`. A threshold ≤ 0 (or NaN) yields no
    /// edges; an empty slice yields an empty graph.
    pub fn build(points: &[Point2D], threshold: f64) -> Self {
        let nodes: Vec<Node> = points
            .iter()
            .enumerate()
            .map(|(i, &p)| Node::new(NodeId(i), p))
            .collect();

        let mut edges = Vec::new();
        let mut adjacency = vec![Vec::new(); nodes.len()];

        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let d = nodes[i].position.distance(&nodes[j].position);
                if d < threshold {
                    edges.push(Edge::canonical(NodeId(i), NodeId(j)));
                    adjacency[i].push(NodeId(j));
                    adjacency[j].push(NodeId(i));
                }
            }
        }

        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            threshold,
            "proximity graph built"
        );

        Self { nodes, edges, adjacency, threshold }
    }

    // ── Reads ──────────────────────────────────────

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Distance threshold the graph was built with.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.nodes.get(id.index()).ok_or_else(|| self.unknown(id))
    }

    /// Neighbours of `id` in ascending id order.
    pub fn neighbors(&self, id: NodeId) -> Result<&[NodeId], GraphError> {
        self.adjacency
            .get(id.index())
            .map(Vec::as_slice)
            .ok_or_else(|| self.unknown(id))
    }

    pub fn degree(&self, id: NodeId) -> Result<usize, GraphError> {
        self.neighbors(id).map(<[NodeId]>::len)
    }

    /// Order-insensitive edge lookup. Self-pairs are never edges.
    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        if a == b {
            return false;
        }
        self.edges.binary_search(&Edge::canonical(a, b)).is_ok()
    }

    fn unknown(&self, id: NodeId) -> GraphError {
        GraphError::UnknownNode { id, node_count: self.nodes.len() }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
