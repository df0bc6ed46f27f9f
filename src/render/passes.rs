//! Culling, the outline/fill passes, and downsampling.

use glam::DVec2;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use tracing::trace;

use super::canvas::Canvas;
use crate::hexagon::HexagonGeometry;
use crate::math;

/// Keeps only centers whose hexagon of `radius` lies fully on the canvas.
pub(super) fn cull(centers: Vec<DVec2>, radius: f64, width: f64, height: f64) -> Vec<DVec2> {
    let hex = HexagonGeometry::new(radius);
    centers
        .into_iter()
        .filter(|c| math::inside_canvas(&hex.vertices(*c), width, height))
        .collect()
}

/// Draws every center and returns the number of polygons issued.
///
/// With an outline, the first sweep paints the outer hexagons in `line` and
/// the second paints the inner hexagons in `fill` over them, so the outline is
/// whatever ring of the first sweep stays uncovered. Without one, a single
/// sweep paints nominal-size hexagons in `fill`.
pub(super) fn composite(
    canvas: &mut Canvas,
    centers: &[DVec2],
    circumradius: f64,
    line_width: f64,
    fill: Rgb<u8>,
    line: Rgb<u8>,
) -> usize {
    if line_width <= 0.0 {
        return sweep(canvas, centers, circumradius, fill);
    }

    let (outer, inner) = math::stroke_radii(circumradius, line_width);
    let mut count = sweep(canvas, centers, outer, line);
    if inner > 0.0 {
        count += sweep(canvas, centers, inner, fill);
    }
    count
}

fn sweep(canvas: &mut Canvas, centers: &[DVec2], radius: f64, color: Rgb<u8>) -> usize {
    let hex = HexagonGeometry::new(radius);
    trace!(radius = hex.circumradius(), polygons = centers.len(), "sweep");
    for center in centers {
        canvas.fill_polygon(&hex.vertices(*center), color);
    }
    centers.len()
}

/// Resamples a supersampled render to the output size with Lanczos3.
pub(super) fn downsample(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    trace!(
        from_width = image.width(),
        from_height = image.height(),
        width,
        height,
        "downsample"
    );
    imageops::resize(image, width, height, FilterType::Lanczos3)
}
