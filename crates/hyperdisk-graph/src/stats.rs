//! Summary statistics for a built proximity graph.

use serde::Serialize;

use crate::builder::ProximityGraph;

/// Aggregate shape of a graph, logged by the visualizer after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Nodes with degree 0.
    pub isolated_nodes: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
    /// 2E / (n(n−1)); 0.0 for fewer than two nodes.
    pub density: f64,
    /// Mean Poincaré-metric length of the edges; 0.0 without edges.
    pub mean_hyperbolic_edge_length: f64,
}

impl GraphStats {
    pub fn compute(graph: &ProximityGraph) -> Self {
        let n = graph.node_count();
        let e = graph.edge_count();

        let mut degrees = vec![0usize; n];
        let mut hyp_total = 0.0;
        for edge in graph.edges() {
            let (u, v) = edge.endpoints();
            degrees[u.index()] += 1;
            degrees[v.index()] += 1;
            let pu = graph.nodes()[u.index()].position;
            let pv = graph.nodes()[v.index()].position;
            hyp_total += pu.hyperbolic_distance(&pv);
        }

        let isolated_nodes = degrees.iter().filter(|&&d| d == 0).count();
        let max_degree = degrees.iter().copied().max().unwrap_or(0);
        let mean_degree = if n == 0 { 0.0 } else { 2.0 * e as f64 / n as f64 };
        let density = if n < 2 {
            0.0
        } else {
            2.0 * e as f64 / (n as f64 * (n as f64 - 1.0))
        };
        let mean_hyperbolic_edge_length = if e == 0 { 0.0 } else { hyp_total / e as f64 };

        Self {
            node_count: n,
            edge_count: e,
            isolated_nodes,
            max_degree,
            mean_degree,
            density,
            mean_hyperbolic_edge_length,
        }
    }
}
