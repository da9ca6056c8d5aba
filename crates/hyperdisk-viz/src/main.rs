//! hyperdisk: sample a random proximity graph in the Poincaré disk, lift it
//! onto the sphere and render it.
//!
//! ```bash
//! cargo run --bin hyperdisk --release
//!
//! # reproducible run, verbose, custom output directory
//! HYPERDISK_SEED=42 \
//! HYPERDISK_LOG_LEVEL=debug \
//! HYPERDISK_OUTPUT_DIR=/tmp/hyperdisk \
//!   cargo run --bin hyperdisk
//! ```

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use hyperdisk_viz::config::{Config, N_NODES, THRESHOLD, TITLE};
use hyperdisk_viz::export::{write_html, write_scene_json};
use hyperdisk_viz::{pipeline, RenderConfig, Scene};

fn main() -> anyhow::Result<()> {
    // ── Tracing ───────────────────────────────────────────────────────────────
    let config = Config::from_env();

    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();

    info!(
        version   = env!("CARGO_PKG_VERSION"),
        n_nodes   = N_NODES,
        threshold = THRESHOLD,
        seed      = ?config.seed,
        "hyperdisk starting"
    );

    // ── Random source ─────────────────────────────────────────────────────────
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // ── Sample → build → project ──────────────────────────────────────────────
    let run = pipeline::run(N_NODES, THRESHOLD, &mut rng);
    if run.graph.is_empty() {
        warn!("no nodes sampled; rendering an empty scene");
    } else if run.graph.edge_count() == 0 {
        warn!(threshold = THRESHOLD, "no pair of points is closer than the threshold");
    }

    let scene = Scene::from_run(TITLE, &run).context("failed to assemble scene")?;

    // ── Render ────────────────────────────────────────────────────────────────
    let render_cfg = RenderConfig::default();

    let html_path = config.html_path();
    write_html(&html_path, &scene, &render_cfg)
        .with_context(|| format!("failed to render {}", html_path.display()))?;
    info!(path = %html_path.display(), "scene rendered");

    let json_path = config.json_path();
    write_scene_json(&json_path, &scene)
        .with_context(|| format!("failed to export {}", json_path.display()))?;
    info!(path = %json_path.display(), "scene exported");

    Ok(())
}
