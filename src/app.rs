//! Application flow: config file → records → entities → output.

use std::io::Write;

use anyhow::{Context, Result};
use shapeshow_config::{load_config_file, populate};
use shapeshow_fonts::FontStore;

use crate::cli::RuntimeOptions;
use crate::collection::EntityCollection;
use crate::render::{Renderer, TextRenderer};

/// Load the configured scene and write it to `out`, either as JSON or as
/// rendered frames.
///
/// A missing or unreadable config file is returned as a `ConfigError`
/// before any entity is built.
pub fn run<W: Write>(options: &RuntimeOptions, mut out: W) -> Result<()> {
    log::info!("Using config file: {}", options.config_path.display());
    let content = load_config_file(&options.config_path)?;
    log::debug!("Config content:\n{}", content);

    let records = populate(&content);

    // Fonts stay loaded until the scene is dropped
    let mut fonts = FontStore::new();
    let scene = EntityCollection::build(&records, &mut fonts);

    if options.dump_json {
        serde_json::to_writer_pretty(&mut out, &scene.entities)
            .context("Failed to write entities as JSON")?;
        writeln!(out)?;
        out.flush()?;
        return Ok(());
    }

    let mut renderer = TextRenderer::new(out, &fonts);
    for frame in 0..options.frames {
        renderer
            .draw_frame(frame, &scene.entities)
            .with_context(|| format!("Failed to draw frame {frame}"))?;
    }
    log::info!("Rendered {} frame(s)", options.frames);
    Ok(())
}
