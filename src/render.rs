//! Tessellation renderer: grid layout, culling, two-pass fill, and supersampling.
//!
//! [`render`] turns a [`RenderParams`] into an [`RenderOutput`] in one
//! synchronous call. Geometry is scaled by the anti-alias factor, drawn with
//! hard edges onto a [`canvas::Canvas`], then downsampled with a Lanczos
//! filter when the factor is above 1.

pub mod canvas;
mod passes;

use std::fmt;
use std::str::FromStr;

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RenderError;
use crate::grid::{AxialGrid, Layers, cell_count, minimum_layers_to_cover};
use crate::math;

use canvas::Canvas;

/// Supersampling level used for anti-aliasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AntiAlias {
    /// Render at the target resolution.
    Off,
    /// 2× supersampling.
    Low,
    /// 4× supersampling.
    Medium,
    /// 8× supersampling.
    #[default]
    High,
}

impl AntiAlias {
    /// Every level, from cheapest to finest.
    pub const ALL: [AntiAlias; 4] = [Self::Off, Self::Low, Self::Medium, Self::High];

    /// Integer factor applied to every dimension before drawing.
    pub fn scale_factor(self) -> u32 {
        match self {
            Self::Off => 1,
            Self::Low => 2,
            Self::Medium => 4,
            Self::High => 8,
        }
    }

    /// Lowercase name used on the command line and in settings files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for AntiAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AntiAlias {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| {
                RenderError::InvalidParameter(format!(
                    "invalid antialias level '{s}', must be one of: high, low, medium, off"
                ))
            })
    }
}

/// Everything needed to render one image. Colors are already resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderParams {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Center-to-vertex distance of each hexagon, in output pixels.
    pub circumradius: f64,
    /// Gap between facing hexagon edges, in output pixels.
    pub margin: f64,
    /// Outline width in output pixels; 0 disables the outline pass.
    pub line_width: u32,
    /// Number of concentric layers to draw.
    pub layers: Layers,
    /// Hexagon interior color.
    pub fill: Rgb<u8>,
    /// Outline color.
    pub line: Rgb<u8>,
    /// Canvas color behind the hexagons.
    pub background: Rgb<u8>,
    /// Supersampling level.
    pub antialias: AntiAlias,
    /// Drop hexagons whose outline would cross the canvas edge.
    pub cull: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            circumradius: 64.0,
            margin: 16.0,
            line_width: 8,
            layers: Layers::AutoFill,
            fill: Rgb([128, 128, 128]),
            line: Rgb([0, 0, 0]),
            background: Rgb([169, 169, 169]),
            antialias: AntiAlias::High,
            cull: false,
        }
    }
}

impl RenderParams {
    /// Rejects dimensions and radii the renderer cannot draw.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidParameter(format!(
                "image size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.circumradius.is_finite() || self.circumradius < 0.0 {
            return Err(RenderError::InvalidParameter(format!(
                "circumradius must be a non-negative number, got {}",
                self.circumradius
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(RenderError::InvalidParameter(format!(
                "margin must be a non-negative number, got {}",
                self.margin
            )));
        }
        Ok(())
    }
}

/// A finished render.
#[derive(Clone, Debug)]
pub struct RenderOutput {
    /// The image at exactly the requested size.
    pub image: RgbImage,
    /// Polygons drawn across all passes.
    pub polygon_count: usize,
    /// Layer count actually used, after auto-fill.
    pub layers: u32,
}

/// Geometry multiplied into supersampled space.
#[derive(Clone, Copy, Debug)]
struct Scaled {
    width: u32,
    height: u32,
    circumradius: f64,
    margin: f64,
    line_width: f64,
}

impl Scaled {
    fn new(params: &RenderParams, k: u32) -> Result<Self, RenderError> {
        let overflow = || {
            RenderError::InvalidParameter(format!(
                "{}x{} at {}x supersampling is too large",
                params.width, params.height, k
            ))
        };
        let factor = f64::from(k);
        Ok(Self {
            width: params.width.checked_mul(k).ok_or_else(overflow)?,
            height: params.height.checked_mul(k).ok_or_else(overflow)?,
            circumradius: params.circumradius * factor,
            margin: params.margin * factor,
            line_width: f64::from(params.line_width) * factor,
        })
    }
}

/// Largest grid `render` will lay out, in cells.
pub const MAX_CELLS: usize = 1 << 24;

/// Renders the tessellation described by `params`.
///
/// Fails with [`RenderError::InvalidParameter`] when the resolved grid would
/// exceed [`MAX_CELLS`].
pub fn render(params: &RenderParams) -> Result<RenderOutput, RenderError> {
    params.validate()?;

    let k = params.antialias.scale_factor();
    let scaled = Scaled::new(params, k)?;
    let (sw, sh) = (f64::from(scaled.width), f64::from(scaled.height));

    let grid = AxialGrid::new(math::spacing_radius(scaled.circumradius, scaled.margin));
    let layers = match params.layers {
        Layers::Explicit(n) => n,
        Layers::AutoFill => minimum_layers_to_cover(sw, sh, grid.spacing_radius()),
    };
    let auto = params.layers == Layers::AutoFill;
    let cells = cell_count(layers)
        .filter(|&n| n <= MAX_CELLS)
        .ok_or_else(|| {
            RenderError::InvalidParameter(format!(
                "{layers} layers exceed the {MAX_CELLS}-cell grid limit"
            ))
        })?;
    debug!(
        scale = k,
        spacing_radius = grid.spacing_radius(),
        layers,
        cells,
        auto,
        "resolved grid"
    );

    let mut centers = grid.centers(layers, sw, sh);
    if params.cull {
        let (outer, _) = math::stroke_radii(scaled.circumradius, scaled.line_width);
        let before = centers.len();
        centers = passes::cull(centers, outer, sw, sh);
        debug!(kept = centers.len(), dropped = before - centers.len(), "culled");
    }

    let mut canvas = Canvas::new(scaled.width, scaled.height, params.background)?;
    let polygon_count = passes::composite(
        &mut canvas,
        &centers,
        scaled.circumradius,
        scaled.line_width,
        params.fill,
        params.line,
    );
    debug!(polygon_count, "composited");

    let mut image = canvas.into_rgb_image()?;
    if k > 1 {
        image = passes::downsample(&image, params.width, params.height);
    }

    Ok(RenderOutput {
        image,
        polygon_count,
        layers,
    })
}
