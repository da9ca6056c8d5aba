//! # hyperdisk-graph
//!
//! Proximity graphs over points of the Poincaré disk.
//!
//! - [`model::Node`] / [`model::Edge`] — value types, ids `0..n`
//! - [`builder::ProximityGraph`] — all-pairs threshold graph, read-only once built
//! - [`embedding::Embedding3D`] — stereographic image of every node on S²
//! - [`stats::GraphStats`] — degree / density summary

pub mod builder;
pub mod embedding;
pub mod error;
pub mod model;
pub mod stats;

pub use builder::ProximityGraph;
pub use embedding::Embedding3D;
pub use error::GraphError;
pub use model::{Edge, Node, NodeId};
pub use stats::GraphStats;
