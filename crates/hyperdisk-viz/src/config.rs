//! Run configuration.
//!
//! The geometry of a run is fixed: [`N_NODES`] points, edge threshold
//! [`THRESHOLD`], an 8 × 6 inch figure. Only the ambient settings below can
//! be changed, through environment variables:
//!
//! | Variable               | Default | Description                                  |
//! |------------------------|---------|----------------------------------------------|
//! | `HYPERDISK_LOG_LEVEL`  | `info`  | tracing filter (trace/debug/info/warn/error) |
//! | `HYPERDISK_OUTPUT_DIR` | `.`     | where the HTML page and JSON scene go        |
//! | `HYPERDISK_SEED`       | unset   | fixed RNG seed; unset draws from the OS      |

use std::path::PathBuf;

/// Number of sampled disk points.
pub const N_NODES: usize = 20;

/// Euclidean distance below which two points are connected.
pub const THRESHOLD: f64 = 0.5;

/// Figure size in inches (width, height).
pub const FIGURE_SIZE: (f64, f64) = (8.0, 6.0);

/// Pixels per inch used when rasterising the figure size.
pub const DPI: f64 = 100.0;

pub const TITLE: &str = "3D Projection of the Optimal Route in Hyperbolic Space";

/// Base name of the files written by a run.
pub const OUTPUT_STEM: &str = "hyperdisk_projection";

/// Runtime configuration for the visualizer process.
#[derive(Debug)]
pub struct Config {
    /// Tracing filter string, e.g. `"hyperdisk_viz=debug,info"`.
    pub log_level: String,

    /// Directory the rendered page and scene export are written to.
    pub output_dir: PathBuf,

    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables, applying defaults where
    /// a variable is absent or unparseable.
    pub fn from_env() -> Self {
        Self {
            log_level:  env_str("HYPERDISK_LOG_LEVEL", "info"),
            output_dir: PathBuf::from(env_str("HYPERDISK_OUTPUT_DIR", ".")),
            seed:       env_opt("HYPERDISK_SEED"),
        }
    }

    pub fn html_path(&self) -> PathBuf {
        self.output_dir.join(format!("{OUTPUT_STEM}.html"))
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(format!("{OUTPUT_STEM}.json"))
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
