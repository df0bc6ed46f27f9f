//! User-facing parameter set, JSON import/export, and CLI precedence.
//!
//! A settings file holds any subset of the persisted keys. When merged, file
//! values replace defaults while values given explicitly on the command line
//! win over the file.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::parse_color;
use crate::error::{AppError, SettingsError};
use crate::grid::Layers;
use crate::render::{AntiAlias, RenderParams};

/// Fully-resolved parameters, exactly as persisted in a settings file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Hexagon circumradius in pixels.
    pub circumradius: f64,
    /// Gap between hexagon edges in pixels.
    pub margin: f64,
    /// Outline width in pixels, 0 for none.
    pub line_width: u32,
    /// Concentric layers, 0 for auto-fill.
    pub layers: u32,
    /// Fill color specification.
    pub color_fill: String,
    /// Outline color specification.
    pub color_line: String,
    /// Background color specification.
    pub color_background: String,
    /// Supersampling level.
    pub antialias: AntiAlias,
    /// Output PNG path.
    pub file: PathBuf,
    /// Drop hexagons that would cross the canvas edge.
    pub cull: bool,
    /// Print the diagnostic report after rendering.
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            circumradius: 64.0,
            margin: 16.0,
            line_width: 8,
            layers: 0,
            color_fill: "grey".into(),
            color_line: "black".into(),
            color_background: "darkgrey".into(),
            antialias: AntiAlias::High,
            file: PathBuf::from("tessellation.png"),
            cull: false,
            debug: false,
        }
    }
}

/// A settings file as read from disk: every key optional, unknown keys ignored.
///
/// Fields mirror [`Settings`].
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PartialSettings {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub circumradius: Option<f64>,
    pub margin: Option<f64>,
    pub line_width: Option<u32>,
    pub layers: Option<u32>,
    pub color_fill: Option<String>,
    pub color_line: Option<String>,
    pub color_background: Option<String>,
    pub antialias: Option<AntiAlias>,
    pub file: Option<PathBuf>,
    pub cull: Option<bool>,
    pub debug: Option<bool>,
}

impl Settings {
    // ── Persistence ────────────────────────────────────────────────

    /// Writes these settings as pretty-printed JSON.
    ///
    /// `.json` is appended to `path` when missing; the path written is returned.
    pub fn export(&self, path: &Path) -> Result<PathBuf, SettingsError> {
        let path = with_json_extension(path);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(|source| SettingsError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "exported settings");
        Ok(path)
    }

    /// Reads a settings file, appending `.json` to `path` when missing.
    pub fn import(path: &Path) -> Result<PartialSettings, SettingsError> {
        let path = with_json_extension(path);
        let text = fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SettingsError::NotFound(path.clone()),
            _ => SettingsError::Io {
                path: path.clone(),
                source,
            },
        })?;
        let partial = serde_json::from_str(&text)
            .map_err(|source| SettingsError::Malformed { path: path.clone(), source })?;
        debug!(path = %path.display(), "imported settings");
        Ok(partial)
    }

    /// Applies `imported` on top of `self`, skipping keys named in `explicit`.
    pub fn merge(mut self, imported: PartialSettings, explicit: &HashSet<String>) -> Self {
        macro_rules! apply {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = imported.$field
                        && !explicit.contains(stringify!($field))
                    {
                        self.$field = value;
                    }
                )*
            };
        }
        apply!(
            width,
            height,
            circumradius,
            margin,
            line_width,
            layers,
            color_fill,
            color_line,
            color_background,
            antialias,
            file,
            cull,
            debug,
        );
        self
    }

    // ── Resolution ─────────────────────────────────────────────────

    /// Parses the colors and builds the renderer's parameter bundle.
    pub fn render_params(&self) -> Result<RenderParams, AppError> {
        Ok(RenderParams {
            width: self.width,
            height: self.height,
            circumradius: self.circumradius,
            margin: self.margin,
            line_width: self.line_width,
            layers: Layers::from_requested(self.layers),
            fill: parse_color(&self.color_fill)?,
            line: parse_color(&self.color_line)?,
            background: parse_color(&self.color_background)?,
            antialias: self.antialias,
            cull: self.cull,
        })
    }

    /// Output path with a `.png` extension.
    pub fn output_path(&self) -> PathBuf {
        with_png_extension(&self.file)
    }
}

/// `path` with `.json` appended unless it already ends with it (any case).
pub fn with_json_extension(path: &Path) -> PathBuf {
    with_suffix(path, ".json")
}

/// `path` with `.png` appended unless it already ends with it (any case).
pub fn with_png_extension(path: &Path) -> PathBuf {
    with_suffix(path, ".png")
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    if path.to_string_lossy().to_lowercase().ends_with(suffix) {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
