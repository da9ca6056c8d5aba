//! Render-ready snapshot of a run: titled nodes with disk and sphere
//! coordinates plus the edge list. Also the shape written to JSON.

use serde::Serialize;

use hyperdisk_graph::{Edge, GraphStats, NodeId};
use hyperdisk_ops::{Point2D, Point3D};

use crate::error::VizError;
use crate::pipeline::Run;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    pub id: NodeId,
    pub disk: Point2D,
    pub sphere: Point3D,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub title: String,
    pub threshold: f64,
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<Edge>,
    pub stats: GraphStats,
}

impl Scene {
    /// Join the graph with its embedding.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::MissingNode`] if the embedding has no coordinate
    /// for some graph node.
    pub fn from_run(title: &str, run: &Run) -> Result<Self, VizError> {
        let nodes = run
            .graph
            .nodes()
            .iter()
            .map(|n| {
                let sphere = run
                    .embedding
                    .get(n.id)
                    .ok_or(VizError::MissingNode(n.id.index()))?;
                Ok(SceneNode { id: n.id, disk: n.position, sphere: *sphere })
            })
            .collect::<Result<Vec<_>, VizError>>()?;

        Ok(Self {
            title: title.to_string(),
            threshold: run.graph.threshold(),
            nodes,
            edges: run.graph.edges().to_vec(),
            stats: run.stats.clone(),
        })
    }

    /// Sphere coordinates of both endpoints of `edge`.
    pub fn segment(&self, edge: &Edge) -> Option<(Point3D, Point3D)> {
        let a = self.nodes.get(edge.u().index())?;
        let b = self.nodes.get(edge.v().index())?;
        Some((a.sphere, b.sphere))
    }
}
