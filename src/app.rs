//! One end-to-end run: export settings, render, write the PNG.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::info;

use crate::error::AppError;
use crate::render::{RenderParams, render};
use crate::settings::Settings;

/// What a finished run produced.
#[derive(Clone, Debug)]
pub struct Summary {
    /// Parameters the image was rendered with.
    pub params: RenderParams,
    /// PNG path written.
    pub output: PathBuf,
    /// PNG size in bytes.
    pub output_size: u64,
    /// Exported settings file and its size, when one was requested.
    pub exported: Option<(PathBuf, u64)>,
    /// Polygons drawn across all passes.
    pub polygon_count: usize,
    /// Layer count actually used.
    pub layers: u32,
}

/// Runs the pipeline for already-merged `settings`.
///
/// Settings are exported to `export_to` first, so a file is written even when a
/// color later fails to parse.
pub fn run(settings: &Settings, export_to: Option<&Path>) -> Result<Summary, AppError> {
    let exported = match export_to {
        Some(path) => {
            let written = settings.export(path)?;
            let size = fs::metadata(&written)?.len();
            Some((written, size))
        }
        None => None,
    };

    let params = settings.render_params()?;
    let output = render(&params)?;

    let path = settings.output_path();
    output.image.save_with_format(&path, ImageFormat::Png)?;
    let output_size = fs::metadata(&path)?.len();
    info!(
        path = %path.display(),
        bytes = output_size,
        polygons = output.polygon_count,
        "saved image"
    );

    Ok(Summary {
        params,
        output: path,
        output_size,
        exported,
        polygon_count: output.polygon_count,
        layers: output.layers,
    })
}
