//! Hard-edged polygon canvas backed by a `tiny_skia::Pixmap`.

use glam::DVec2;
use image::{Rgb, RgbImage};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::error::RenderError;

/// Opaque RGB drawing surface.
///
/// Polygons are filled without anti-aliasing so every pixel holds exactly
/// one of the colors drawn; smoothing is left to supersampling.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocates a `width × height` canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Result<Self, RenderError> {
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            RenderError::InvalidParameter(format!("cannot allocate a {width}x{height} canvas"))
        })?;
        let [r, g, b] = background.0;
        pixmap.fill(Color::from_rgba8(r, g, b, 255));
        Ok(Self { pixmap })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fills the closed polygon through `vertices` with `color`.
    ///
    /// Degenerate polygons (fewer than two distinct points, zero area) paint
    /// nothing.
    pub fn fill_polygon(&mut self, vertices: &[DVec2], color: Rgb<u8>) {
        let Some((first, rest)) = vertices.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for v in rest {
            pb.line_to(v.x as f32, v.y as f32);
        }
        pb.close();
        let Some(path) = pb.finish() else {
            return;
        };

        let [r, g, b] = color.0;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, 255);
        paint.anti_alias = false;
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.pixmap
            .pixel(x, y)
            .map(|p| Rgb([p.red(), p.green(), p.blue()]))
    }

    /// Converts to an RGB image, dropping the (always opaque) alpha channel.
    pub fn into_rgb_image(self) -> Result<RgbImage, RenderError> {
        let (width, height) = (self.width(), self.height());
        let rgb: Vec<u8> = self
            .pixmap
            .data()
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        RgbImage::from_raw(width, height, rgb).ok_or_else(|| {
            RenderError::InvalidParameter(format!("pixel buffer does not match {width}x{height}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexagon::HexagonGeometry;

    const BG: Rgb<u8> = Rgb([10, 20, 30]);
    const INK: Rgb<u8> = Rgb([200, 100, 50]);

    #[test]
    fn new_canvas_is_background() {
        let canvas = Canvas::new(8, 4, BG).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (8, 4));
        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(canvas.pixel(x, y), Some(BG));
            }
        }
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(matches!(
            Canvas::new(0, 10, BG),
            Err(RenderError::InvalidParameter(_))
        ));
    }

    #[test]
    fn pixel_outside_is_none() {
        let canvas = Canvas::new(2, 2, BG).unwrap();
        assert_eq!(canvas.pixel(2, 0), None);
    }

    #[test]
    fn hexagon_fill_covers_center_not_corners() {
        let mut canvas = Canvas::new(40, 40, BG).unwrap();
        let verts = HexagonGeometry::new(15.0).vertices(DVec2::new(20.0, 20.0));
        canvas.fill_polygon(&verts, INK);
        assert_eq!(canvas.pixel(20, 20), Some(INK));
        assert_eq!(canvas.pixel(0, 0), Some(BG));
        assert_eq!(canvas.pixel(39, 39), Some(BG));
    }

    #[test]
    fn fill_is_hard_edged() {
        let mut canvas = Canvas::new(40, 40, BG).unwrap();
        let verts = HexagonGeometry::new(13.3).vertices(DVec2::new(19.7, 20.2));
        canvas.fill_polygon(&verts, INK);
        for y in 0..40 {
            for x in 0..40 {
                let px = canvas.pixel(x, y).unwrap();
                assert!(px == BG || px == INK, "blended pixel {px:?} at ({x}, {y})");
            }
        }
    }

    #[test]
    fn degenerate_polygon_is_ignored() {
        let mut canvas = Canvas::new(10, 10, BG).unwrap();
        canvas.fill_polygon(&[], INK);
        canvas.fill_polygon(&[DVec2::new(5.0, 5.0)], INK);
        assert_eq!(canvas.pixel(5, 5), Some(BG));
    }

    #[test]
    fn rgb_image_matches_canvas() {
        let mut canvas = Canvas::new(30, 20, BG).unwrap();
        let verts = HexagonGeometry::new(8.0).vertices(DVec2::new(15.0, 10.0));
        canvas.fill_polygon(&verts, INK);
        let expected = canvas.pixel(15, 10).unwrap();
        let image = canvas.into_rgb_image().unwrap();
        assert_eq!(image.dimensions(), (30, 20));
        assert_eq!(*image.get_pixel(15, 10), expected);
        assert_eq!(*image.get_pixel(0, 0), BG);
    }
}
