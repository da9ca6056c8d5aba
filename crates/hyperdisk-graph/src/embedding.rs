//! Stereographic lift of a whole graph onto the unit sphere.

use serde::{Deserialize, Serialize};

use hyperdisk_ops::{stereographic, Point3D};

use crate::builder::ProximityGraph;
use crate::model::NodeId;

/// NodeId → Point3D, stored densely (index = node id).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Embedding3D {
    coords: Vec<Point3D>,
}

impl Embedding3D {
    /// Project every node position of `graph` onto the sphere.
    pub fn project(graph: &ProximityGraph) -> Self {
        let coords: Vec<Point3D> = graph
            .nodes()
            .iter()
            .map(|n| stereographic(n.position))
            .collect();
        tracing::debug!(count = coords.len(), "graph projected onto sphere");
        Self { coords }
    }

    pub fn get(&self, id: NodeId) -> Option<&Point3D> {
        self.coords.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Point3D)> {
        self.coords.iter().enumerate().map(|(i, p)| (NodeId(i), p))
    }
}
