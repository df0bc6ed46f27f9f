//! Vertex geometry for flat-top regular hexagons.

use std::f64::consts::PI;

use glam::DVec2;

/// Flat-top hexagon of a fixed circumradius, placed at arbitrary centers.
///
/// Vertex 0 is the rightmost point and the remaining vertices follow
/// counter-clockwise (in y-up terms) at 60° steps, so the hexagon spans `2R`
/// horizontally and `R√3` vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexagonGeometry {
    circumradius: f64,
}

impl HexagonGeometry {
    /// Creates the geometry. A zero radius collapses every vertex onto the center.
    pub fn new(circumradius: f64) -> Self {
        Self { circumradius }
    }

    /// Center-to-vertex distance.
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Center-to-edge distance (apothem), `R·√3/2`.
    pub fn inradius(&self) -> f64 {
        self.circumradius * 3f64.sqrt() / 2.0
    }

    /// The 6 vertices of the hexagon centred at `center`.
    pub fn vertices(&self, center: DVec2) -> [DVec2; 6] {
        let r = self.circumradius;
        std::array::from_fn(|k| {
            let angle = PI * k as f64 / 3.0;
            DVec2::new(center.x + r * angle.cos(), center.y + r * angle.sin())
        })
    }
}
