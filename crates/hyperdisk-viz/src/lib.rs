//! # hyperdisk-viz
//!
//! Draws a random proximity graph of the Poincaré disk after lifting it onto
//! the unit sphere.
//!
//! ```text
//! sample_disk(20) → ProximityGraph::build(0.5) → Embedding3D::project
//!                 → Scene → render_page → hyperdisk_projection.html
//!                         → serde_json  → hyperdisk_projection.json
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod export;
pub mod html;
pub mod pipeline;
pub mod render;
pub mod scene;

pub use config::Config;
pub use error::VizError;
pub use pipeline::{run, Run};
pub use render::{render_page, render_svg, RenderConfig};
pub use scene::Scene;
