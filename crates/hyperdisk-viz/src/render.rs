//! Static SVG rendering of a [`Scene`].
//!
//! Draw order follows a 3D scatter plot: bounding box and axes first, then
//! the edges, then the node markers. Edges and nodes are each painted far to
//! near so closer items overlap farther ones.

use hyperdisk_ops::Point3D;

use crate::camera::{Bounds, Camera};
use crate::config::{DPI, FIGURE_SIZE};
use crate::html::PAGE_HTML;
use crate::scene::Scene;

/// Vertical band reserved for the title, in px.
const TITLE_BAND: f64 = 40.0;

/// Half-extent of the projected view cube in normalised units (√3 plus room
/// for tick labels).
const VIEW_RADIUS: f64 = 1.9;

const BOX_COLOR: &str = "#cccccc";
const AXIS_COLOR: &str = "#444444";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width_px: f64,
    pub height_px: f64,
    /// Marker area in pt², as a scatter plot's `s`.
    pub marker_size: f64,
    pub node_color: String,
    pub edge_color: String,
    pub edge_opacity: f64,
    pub edge_width_px: f64,
    pub camera: Camera,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width_px: FIGURE_SIZE.0 * DPI,
            height_px: FIGURE_SIZE.1 * DPI,
            marker_size: 50.0,
            node_color: "red".to_string(),
            edge_color: "black".to_string(),
            edge_opacity: 0.5,
            edge_width_px: 1.5 * DPI / 72.0,
            camera: Camera::default(),
        }
    }
}

impl RenderConfig {
    /// Marker radius in px: √s is the marker diameter in points.
    pub fn marker_radius_px(&self) -> f64 {
        self.marker_size.sqrt() / 2.0 * DPI / 72.0
    }
}

/// Screen mapping for one figure.
struct Viewport<'a> {
    cfg: &'a RenderConfig,
    cx: f64,
    cy: f64,
    scale: f64,
}

impl<'a> Viewport<'a> {
    fn new(cfg: &'a RenderConfig) -> Self {
        let plot_h = (cfg.height_px - TITLE_BAND).max(1.0);
        Self {
            cfg,
            cx: cfg.width_px / 2.0,
            cy: TITLE_BAND + plot_h / 2.0,
            scale: cfg.width_px.min(plot_h) / (2.0 * VIEW_RADIUS),
        }
    }

    /// (screen x, screen y, depth)
    fn to_screen(&self, p: Point3D) -> (f64, f64, f64) {
        let q = self.cfg.camera.project(p);
        (
            self.cx + q.right * self.scale,
            self.cy - q.up * self.scale,
            q.depth,
        )
    }

    /// Screen position pushed `dist` px away from the projected box center.
    fn offset_outward(&self, p: Point3D, dist: f64) -> (f64, f64) {
        let (x, y, _) = self.to_screen(p);
        let (ox, oy, _) = self.to_screen(box_center(self.cfg.camera.bounds()));
        let (dx, dy) = (x - ox, y - oy);
        let len = (dx * dx + dy * dy).sqrt();
        if len < 1e-9 {
            return (x, y + dist);
        }
        (x + dx / len * dist, y + dy / len * dist)
    }
}

/// Render the scene as a standalone SVG document.
pub fn render_svg(scene: &Scene, cfg: &RenderConfig) -> String {
    let vp = Viewport::new(cfg);
    let mut out = String::with_capacity(8 * 1024);

    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}" font-family="sans-serif">"#,
        w = cfg.width_px,
        h = cfg.height_px,
    ));
    out.push('\n');
    out.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);
    out.push('\n');
    out.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="16">{}</text>"#,
        vp.cx,
        TITLE_BAND * 0.7,
        escape(&scene.title),
    ));
    out.push('\n');

    draw_box(&mut out, &vp);
    draw_axes(&mut out, &vp);
    draw_edges(&mut out, &vp, scene);
    draw_nodes(&mut out, &vp, scene);

    out.push_str("</svg>\n");
    out
}

/// Render the scene into the HTML page shell.
pub fn render_page(scene: &Scene, cfg: &RenderConfig) -> String {
    let stats = &scene.stats;
    let pills = [
        ("nodes", stats.node_count.to_string()),
        ("edges", stats.edge_count.to_string()),
        ("threshold", format!("{:.2}", scene.threshold)),
        ("isolated", stats.isolated_nodes.to_string()),
        ("max degree", stats.max_degree.to_string()),
        ("density", format!("{:.3}", stats.density)),
        ("mean d_H", format!("{:.3}", stats.mean_hyperbolic_edge_length)),
    ]
    .iter()
    .map(|(k, v)| format!(r#"  <div class="stat-pill">{k}: <span>{v}</span></div>"#))
    .collect::<Vec<_>>()
    .join("\n");

    let title = escape(&scene.title);
    let svg = render_svg(scene, cfg);
    fill_template(PAGE_HTML, |key| match key {
        "TITLE" => Some(title.as_str()),
        "STATS" => Some(pills.as_str()),
        "SVG" => Some(svg.as_str()),
        _ => None,
    })
}

/// Substitute `{{KEY}}` placeholders in a single left-to-right pass.
/// Inserted text is never rescanned; unknown keys are kept verbatim.
fn fill_template<'v>(template: &str, lookup: impl Fn(&str) -> Option<&'v str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match lookup(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

// ─────────────────────────────────────────────
// Layers
// ─────────────────────────────────────────────

fn draw_box(out: &mut String, vp: &Viewport<'_>) {
    let corners = box_corners(vp.cfg.camera.bounds());
    out.push_str(&format!(r#"<g class="box" stroke="{BOX_COLOR}" stroke-width="1">"#));
    out.push('\n');
    for (i, j) in BOX_EDGES {
        push_line(out, vp, corners[i], corners[j]);
    }
    out.push_str("</g>\n");
}

fn draw_axes(out: &mut String, vp: &Viewport<'_>) {
    let Bounds { min, max } = *vp.cfg.camera.bounds();
    let axes = [
        ("X", Point3D::new(min.x, min.y, min.z), Point3D::new(max.x, min.y, min.z), 0usize),
        ("Y", Point3D::new(max.x, min.y, min.z), Point3D::new(max.x, max.y, min.z), 1),
        ("Z", Point3D::new(min.x, min.y, min.z), Point3D::new(min.x, min.y, max.z), 2),
    ];

    out.push_str(&format!(
        r#"<g class="axes" stroke="{AXIS_COLOR}" fill="{AXIS_COLOR}" stroke-width="1" font-size="11">"#
    ));
    out.push('\n');
    for (name, from, to, component) in axes {
        push_line(out, vp, from, to);

        for k in 0..3 {
            let t = k as f64 / 2.0;
            let p = lerp(from, to, t);
            let value = [p.x, p.y, p.z][component];
            let (lx, ly) = vp.offset_outward(p, 16.0);
            out.push_str(&format!(
                r#"<text x="{lx:.1}" y="{ly:.1}" stroke="none" text-anchor="middle" dominant-baseline="middle">{value:.1}</text>"#
            ));
            out.push('\n');
        }

        let (nx, ny) = vp.offset_outward(lerp(from, to, 0.5), 34.0);
        out.push_str(&format!(
            r#"<text x="{nx:.1}" y="{ny:.1}" stroke="none" text-anchor="middle" dominant-baseline="middle" font-size="13">{name}</text>"#
        ));
        out.push('\n');
    }
    out.push_str("</g>\n");
}

fn draw_edges(out: &mut String, vp: &Viewport<'_>, scene: &Scene) {
    let mut segments: Vec<(f64, Point3D, Point3D)> = scene
        .edges
        .iter()
        .filter_map(|e| scene.segment(e))
        .map(|(a, b)| {
            let depth = (vp.to_screen(a).2 + vp.to_screen(b).2) / 2.0;
            (depth, a, b)
        })
        .collect();
    segments.sort_by(|l, r| l.0.total_cmp(&r.0));

    out.push_str(&format!(
        r#"<g class="edges" stroke="{}" stroke-opacity="{}" stroke-width="{:.2}" stroke-linecap="round">"#,
        vp.cfg.edge_color, vp.cfg.edge_opacity, vp.cfg.edge_width_px,
    ));
    out.push('\n');
    for (_, a, b) in segments {
        push_line(out, vp, a, b);
    }
    out.push_str("</g>\n");
}

fn draw_nodes(out: &mut String, vp: &Viewport<'_>, scene: &Scene) {
    let mut markers: Vec<(f64, f64, f64, usize)> = scene
        .nodes
        .iter()
        .map(|n| {
            let (x, y, depth) = vp.to_screen(n.sphere);
            (depth, x, y, n.id.index())
        })
        .collect();
    markers.sort_by(|l, r| l.0.total_cmp(&r.0));

    let r = vp.cfg.marker_radius_px();
    out.push_str(&format!(r#"<g class="nodes" fill="{}">"#, vp.cfg.node_color));
    out.push('\n');
    for (_, x, y, id) in markers {
        out.push_str(&format!(
            r#"<circle cx="{x:.2}" cy="{y:.2}" r="{r:.2}"><title>node {id}</title></circle>"#
        ));
        out.push('\n');
    }
    out.push_str("</g>\n");
}

// ─────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────

/// Corner index bits: x = bit 0, y = bit 1, z = bit 2.
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1), (2, 3), (4, 5), (6, 7),
    (0, 2), (1, 3), (4, 6), (5, 7),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

fn box_corners(b: &Bounds) -> [Point3D; 8] {
    let mut corners = [Point3D::new(0.0, 0.0, 0.0); 8];
    for (i, c) in corners.iter_mut().enumerate() {
        *c = Point3D::new(
            if i & 1 == 0 { b.min.x } else { b.max.x },
            if i & 2 == 0 { b.min.y } else { b.max.y },
            if i & 4 == 0 { b.min.z } else { b.max.z },
        );
    }
    corners
}

fn box_center(b: &Bounds) -> Point3D {
    lerp(b.min, b.max, 0.5)
}

fn lerp(a: Point3D, b: Point3D, t: f64) -> Point3D {
    Point3D::new(
        a.x + (b.x - a.x) * t,
        a.y + (b.y - a.y) * t,
        a.z + (b.z - a.z) * t,
    )
}

fn push_line(out: &mut String, vp: &Viewport<'_>, a: Point3D, b: Point3D) {
    let (x1, y1, _) = vp.to_screen(a);
    let (x2, y2, _) = vp.to_screen(b);
    out.push_str(&format!(
        r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}"/>"#
    ));
    out.push('\n');
}

/// Escape text for XML/HTML content.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TITLE;
    use crate::pipeline;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene(n: usize, seed: u64) -> Scene {
        let run = pipeline::run(n, 0.5, &mut StdRng::seed_from_u64(seed));
        Scene::from_run(TITLE, &run).unwrap()
    }

    #[test]
    fn default_figure_is_800_by_600() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.width_px, 800.0);
        assert_eq!(cfg.height_px, 600.0);
        // √50 pt diameter at 100 px/inch
        assert!((cfg.marker_radius_px() - 50f64.sqrt() / 2.0 * 100.0 / 72.0).abs() < 1e-12);
    }

    #[test]
    fn svg_has_one_marker_per_node_and_one_line_per_edge() {
        let s = scene(20, 1);
        let svg = render_svg(&s, &RenderConfig::default());
        assert_eq!(svg.matches("<circle").count(), 20);
        // 12 box edges + 3 axes + scene edges
        assert_eq!(svg.matches("<line").count(), 12 + 3 + s.edges.len());
        assert!(svg.contains(r#"stroke-opacity="0.5""#));
        assert!(svg.contains(r#"fill="red""#));
        assert!(svg.contains(TITLE));
    }

    #[test]
    fn svg_labels_all_three_axes() {
        let svg = render_svg(&scene(5, 2), &RenderConfig::default());
        for name in ["X", "Y", "Z"] {
            assert!(svg.contains(&format!(">{name}</text>")), "missing {name} label");
        }
    }

    #[test]
    fn empty_scene_still_renders() {
        let s = scene(0, 0);
        let svg = render_svg(&s, &RenderConfig::default());
        assert_eq!(svg.matches("<circle").count(), 0);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn page_embeds_svg_and_stats() {
        let s = scene(8, 4);
        let page = render_page(&s, &RenderConfig::default());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<svg"));
        assert!(page.contains(&format!("nodes: <span>{}</span>", s.stats.node_count)));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn nodes_are_painted_far_to_near() {
        let s = scene(20, 6);
        let cfg = RenderConfig::default();
        let vp = Viewport::new(&cfg);
        let svg = render_svg(&s, &cfg);

        // Order of <title>node i</title> in the output must follow depth
        let mut order: Vec<(usize, f64)> = s
            .nodes
            .iter()
            .map(|n| {
                let pos = svg.find(&format!("<title>node {}</title>", n.id.index())).unwrap();
                (pos, vp.to_screen(n.sphere).2)
            })
            .collect();
        order.sort_by_key(|(pos, _)| *pos);
        assert!(order.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn placeholder_text_in_title_is_not_expanded() {
        let mut s = scene(3, 4);
        s.title = "{{SVG}} & {{STATS}}".to_string();
        let page = render_page(&s, &RenderConfig::default());
        assert_eq!(page.matches("<svg").count(), 1);
        assert_eq!(page.matches(r#"class="stat-pill""#).count(), 7);
        assert!(page.contains("<title>{{SVG}} &amp; {{STATS}}</title>"));
    }

    #[test]
    fn fill_template_keeps_unknown_keys() {
        let out = fill_template("a {{X}} b {{Y}} c {{", |k| (k == "X").then_some("{{Y}}"));
        assert_eq!(out, "a {{Y}} b {{Y}} c {{");
    }

    #[test]
    fn escape_handles_markup() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
    }
}
