//! Radius and bounds arithmetic shared by the grid and the renderer.

use glam::DVec2;

/// Effective center-spacing radius for hexagons separated by `margin`.
///
/// Neighbouring flat-top centers sit `R_s·√3` apart, so adding half the margin
/// to the circumradius opens a gap of roughly `margin` between facing edges.
///
/// # Examples
/// ```
/// # use hex_tessellator::math::spacing_radius;
/// assert_eq!(spacing_radius(40.0, 0.0), 40.0);
/// assert_eq!(spacing_radius(64.0, 16.0), 72.0);
/// ```
pub fn spacing_radius(circumradius: f64, margin: f64) -> f64 {
    circumradius + margin / 2.0
}

/// Outer and inner radii of a stroked hexagon.
///
/// The stroke is centred on the nominal outline: the outer polygon grows by
/// half the line width and the inner one shrinks by the same amount, clamped
/// at zero for strokes thicker than the hexagon itself.
///
/// # Examples
/// ```
/// # use hex_tessellator::math::stroke_radii;
/// assert_eq!(stroke_radii(40.0, 8.0), (44.0, 36.0));
/// assert_eq!(stroke_radii(3.0, 10.0), (8.0, 0.0));
/// ```
pub fn stroke_radii(circumradius: f64, line_width: f64) -> (f64, f64) {
    let half = line_width / 2.0;
    (circumradius + half, (circumradius - half).max(0.0))
}

/// Whether every point lies inside `[0, width] × [0, height]`, edges included.
pub fn inside_canvas(points: &[DVec2], width: f64, height: f64) -> bool {
    points
        .iter()
        .all(|p| (0.0..=width).contains(&p.x) && (0.0..=height).contains(&p.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── spacing_radius ──────────────────────────────────────────────

    #[test]
    fn zero_margin_spacing_equals_circumradius() {
        assert_eq!(spacing_radius(40.0, 0.0), 40.0);
    }

    #[test]
    fn margin_adds_half_to_spacing() {
        assert!((spacing_radius(10.0, 3.0) - 11.5).abs() < 1e-12);
    }

    // ── stroke_radii ────────────────────────────────────────────────

    #[test]
    fn zero_line_width_keeps_nominal_radius() {
        assert_eq!(stroke_radii(25.0, 0.0), (25.0, 25.0));
    }

    #[test]
    fn thick_stroke_clamps_inner_to_zero() {
        let (outer, inner) = stroke_radii(4.0, 8.0);
        assert_eq!(outer, 8.0);
        assert_eq!(inner, 0.0);
    }

    #[test]
    fn outer_minus_inner_is_line_width() {
        let (outer, inner) = stroke_radii(64.0, 12.0);
        assert!((outer - inner - 12.0).abs() < 1e-12);
    }

    // ── inside_canvas ───────────────────────────────────────────────

    #[test]
    fn points_on_edges_are_inside() {
        let pts = [DVec2::ZERO, DVec2::new(100.0, 50.0), DVec2::new(0.0, 50.0)];
        assert!(inside_canvas(&pts, 100.0, 50.0));
    }

    #[test]
    fn single_point_outside_rejects_all() {
        let pts = [DVec2::new(10.0, 10.0), DVec2::new(-0.001, 10.0)];
        assert!(!inside_canvas(&pts, 100.0, 100.0));
    }

    #[test]
    fn point_beyond_height_is_outside() {
        assert!(!inside_canvas(&[DVec2::new(5.0, 100.5)], 100.0, 100.0));
    }

    #[test]
    fn empty_point_set_is_inside() {
        assert!(inside_canvas(&[], 1.0, 1.0));
    }
}
