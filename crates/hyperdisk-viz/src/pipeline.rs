//! The sample → build → project pipeline, composed explicitly.

use rand::Rng;

use hyperdisk_graph::{Embedding3D, GraphStats, ProximityGraph};
use hyperdisk_ops::sample_disk;

/// Everything a single run produces before rendering.
#[derive(Debug, Clone)]
pub struct Run {
    pub graph: ProximityGraph,
    pub embedding: Embedding3D,
    pub stats: GraphStats,
}

/// Sample `n_nodes` disk points, connect pairs closer than `threshold`, and
/// lift every node onto the sphere.
pub fn run<R: Rng + ?Sized>(n_nodes: usize, threshold: f64, rng: &mut R) -> Run {
    let points = sample_disk(n_nodes, rng);
    let graph = ProximityGraph::build(&points, threshold);
    let embedding = Embedding3D::project(&graph);
    let stats = GraphStats::compute(&graph);

    tracing::info!(
        nodes          = stats.node_count,
        edges          = stats.edge_count,
        isolated       = stats.isolated_nodes,
        max_degree     = stats.max_degree,
        density        = format!("{:.3}", stats.density),
        mean_hyp_len   = format!("{:.3}", stats.mean_hyperbolic_edge_length),
        "graph ready"
    );

    Run { graph, embedding, stats }
}
