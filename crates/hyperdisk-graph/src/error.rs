use thiserror::Error;

use crate::model::NodeId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("node not found: {id} (graph has {node_count} nodes)")]
    UnknownNode { id: NodeId, node_count: usize },

    #[error("self-loop rejected on node {0}")]
    SelfLoop(NodeId),
}
