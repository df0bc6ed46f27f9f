//! Axial coordinate system for concentric flat-top hexagon grids.
//!
//! Cells are addressed with [`hexx::Hex`] (`x` = q, `y` = r). Projection to
//! pixels, ring traversal, and grid generation are done here rather than with
//! [`hexx::HexLayout`] so the layout keeps a y-down canvas convention and a
//! fixed, reproducible ring order.

use glam::DVec2;
use hexx::Hex;

/// Ring-walk direction deltas, in traversal order.
pub const RING_DIRECTIONS: [Hex; 6] = [
    Hex::new(1, -1),
    Hex::new(1, 0),
    Hex::new(0, 1),
    Hex::new(-1, 1),
    Hex::new(-1, 0),
    Hex::new(0, -1),
];

/// How many concentric layers to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Layers {
    /// Exactly this many layers; `Explicit(0)` is an empty grid.
    Explicit(u32),
    /// As many layers as needed to cover the canvas, plus one.
    #[default]
    AutoFill,
}

impl Layers {
    /// Maps a user-facing layer count, where `0` requests auto-fill.
    pub fn from_requested(n: u32) -> Self {
        match n {
            0 => Self::AutoFill,
            n => Self::Explicit(n),
        }
    }
}

/// Concentric grid laid out with a fixed spacing radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxialGrid {
    spacing_radius: f64,
}

impl AxialGrid {
    /// Creates a grid whose neighbouring centers are `spacing_radius·√3` apart.
    pub fn new(spacing_radius: f64) -> Self {
        Self { spacing_radius }
    }

    /// The spacing radius `R_s` this grid was built with.
    pub fn spacing_radius(&self) -> f64 {
        self.spacing_radius
    }

    // ── Coordinate conversion ──────────────────────────────────────

    /// Pixel center of `hex` on a `width × height` canvas.
    ///
    /// The origin cell maps exactly to the canvas center; `q` grows to the
    /// right and `r` grows downward.
    pub fn axial_to_pixel(&self, hex: Hex, width: f64, height: f64) -> DVec2 {
        let rs = self.spacing_radius;
        let q = f64::from(hex.x);
        let r = f64::from(hex.y);
        let px = rs * 1.5 * q;
        let py = rs * 3f64.sqrt() * (r + q / 2.0);
        DVec2::new(width / 2.0 + px, height / 2.0 + py)
    }

    // ── Enumeration ────────────────────────────────────────────────

    /// All cells at hex distance `d` from the origin.
    ///
    /// Starts at `(-d, 0)` and walks [`RING_DIRECTIONS`], `d` steps each,
    /// recording the current cell before every step.
    pub fn ring(d: u32) -> Vec<Hex> {
        if d == 0 {
            return vec![Hex::ZERO];
        }
        let steps = d as i32;
        let mut cells = Vec::with_capacity(6 * d as usize);
        let mut current = Hex::new(-steps, 0);
        for dir in RING_DIRECTIONS {
            for _ in 0..steps {
                cells.push(current);
                current += dir;
            }
        }
        cells
    }

    /// Rings `0..layers`, concatenated innermost first.
    pub fn generate(layers: u32) -> Vec<Hex> {
        let mut cells = Vec::with_capacity(cell_count(layers).unwrap_or_default());
        for d in 0..layers {
            cells.extend(Self::ring(d));
        }
        cells
    }

    /// Pixel centers of the first `layers` rings on a `width × height` canvas.
    pub fn centers(&self, layers: u32, width: f64, height: f64) -> Vec<DVec2> {
        Self::generate(layers)
            .into_iter()
            .map(|hex| self.axial_to_pixel(hex, width, height))
            .collect()
    }
}

/// Number of cells in a grid of `layers` concentric layers: `1 + 3L(L-1)`.
///
/// `None` when the count does not fit in `usize`.
///
/// # Examples
/// ```
/// # use hex_tessellator::grid::cell_count;
/// assert_eq!(cell_count(0), Some(0));
/// assert_eq!(cell_count(1), Some(1));
/// assert_eq!(cell_count(3), Some(19));
/// assert_eq!(cell_count(u32::MAX), None);
/// ```
pub fn cell_count(layers: u32) -> Option<usize> {
    let l = usize::try_from(layers).ok()?;
    match l {
        0 => Some(0),
        l => l
            .checked_mul(l - 1)?
            .checked_mul(3)?
            .checked_add(1),
    }
}

/// Fewest layers whose rings reach past every canvas edge, plus one spare ring.
///
/// Always at least 1.
pub fn minimum_layers_to_cover(width: f64, height: f64, spacing_radius: f64) -> u32 {
    let horizontal = ((width / 2.0) / (1.5 * spacing_radius)).ceil();
    let vertical = ((height / 2.0) / (3f64.sqrt() * spacing_radius)).ceil();
    let layers = horizontal.max(vertical) + 1.0;
    if layers.is_finite() && layers >= 1.0 {
        layers.min(f64::from(u32::MAX)) as u32
    } else {
        1
    }
}
