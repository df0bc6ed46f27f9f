#![warn(missing_docs)]
//! Hexagonal grid tessellation renderer.
//!
//! Lays out flat-top hexagons in concentric axial rings around the canvas
//! centre, composites an outline and a fill pass for each, and writes a PNG.
//! Supersampling with a Lanczos downsample gives smooth edges.
//!
//! ```no_run
//! use hex_tessellator::render::{RenderParams, render};
//!
//! let out = render(&RenderParams::default()).unwrap();
//! out.image.save("tessellation.png").unwrap();
//! ```

pub mod app;
pub mod color;
pub mod error;
pub mod grid;
pub mod hexagon;
pub mod math;
pub mod render;
pub mod report;
pub mod settings;
