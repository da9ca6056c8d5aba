//! File output for a run: the rendered page and the JSON scene.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::VizError;
use crate::render::{render_page, RenderConfig};
use crate::scene::Scene;

/// Write the HTML page for `scene` to `path`, creating parent directories.
pub fn write_html(path: &Path, scene: &Scene, cfg: &RenderConfig) -> Result<(), VizError> {
    let page = render_page(scene, cfg);
    write_with(path, |w| w.write_all(page.as_bytes()))
}

/// Write `scene` as pretty-printed JSON to `path`, creating parent directories.
pub fn write_scene_json(path: &Path, scene: &Scene) -> Result<(), VizError> {
    let json = serde_json::to_string_pretty(scene)?;
    write_with(path, |w| {
        w.write_all(json.as_bytes())?;
        w.write_all(b"\n")
    })
}

fn write_with<F>(path: &Path, body: F) -> Result<(), VizError>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let io_err = |source| VizError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = File::create(path).map_err(io_err)?;
    let mut w = BufWriter::new(file);
    body(&mut w).map_err(io_err)?;
    w.flush().map_err(io_err)
}
