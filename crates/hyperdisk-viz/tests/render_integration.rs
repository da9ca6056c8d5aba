//! End-to-end: fixed-seed run through scene assembly, rendering and export.

use std::fs;

use hyperdisk_viz::config::{N_NODES, THRESHOLD, TITLE};
use hyperdisk_viz::export::{write_html, write_scene_json};
use hyperdisk_viz::{pipeline, render_svg, RenderConfig, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn default_scene(seed: u64) -> Scene {
    let run = pipeline::run(N_NODES, THRESHOLD, &mut StdRng::seed_from_u64(seed));
    Scene::from_run(TITLE, &run).expect("embedding covers every node")
}

#[test]
fn default_run_writes_page_and_scene() {
    let dir = tempfile::tempdir().unwrap();
    let html = dir.path().join("hyperdisk_projection.html");
    let json = dir.path().join("hyperdisk_projection.json");

    let scene = default_scene(42);
    write_html(&html, &scene, &RenderConfig::default()).unwrap();
    write_scene_json(&json, &scene).unwrap();

    let page = fs::read_to_string(&html).unwrap();
    assert!(page.contains(TITLE));
    assert_eq!(page.matches("<circle").count(), N_NODES);

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(v["nodes"].as_array().unwrap().len(), N_NODES);
    assert_eq!(v["stats"]["node_count"], N_NODES);
}

#[test]
fn scene_nodes_sit_on_the_southern_hemisphere() {
    let scene = default_scene(7);
    for n in &scene.nodes {
        assert!(n.disk.norm_sq() < 1.0);
        assert!((n.sphere.norm_sq() - 1.0).abs() < 1e-9);
        assert!(n.sphere.z < 0.0);
    }
}

#[test]
fn scene_edges_respect_threshold() {
    let scene = default_scene(99);
    for e in &scene.edges {
        let a = scene.nodes[e.u().index()].disk;
        let b = scene.nodes[e.v().index()].disk;
        assert!(a.distance(&b) < THRESHOLD);
    }
}

#[test]
fn same_seed_renders_identically() {
    let cfg = RenderConfig::default();
    assert_eq!(render_svg(&default_scene(5), &cfg), render_svg(&default_scene(5), &cfg));
}

#[test]
fn empty_run_renders_an_empty_plot() {
    let run = pipeline::run(0, THRESHOLD, &mut StdRng::seed_from_u64(1));
    let scene = Scene::from_run(TITLE, &run).unwrap();
    assert!(scene.nodes.is_empty());
    assert!(scene.edges.is_empty());

    let svg = render_svg(&scene, &RenderConfig::default());
    assert_eq!(svg.matches("<circle").count(), 0);
    assert!(svg.contains(TITLE));
}
