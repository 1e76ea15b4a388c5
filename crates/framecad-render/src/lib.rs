//! # FrameCAD Render
//!
//! Layered retained-mode 2D rendering for the structural plan canvas:
//! vector primitives with linetype patterning, a scanline triangle
//! rasterizer with per-vertex color interpolation, dimension leader/text
//! geometry, and the priority-ordered layer manager that owns the
//! dirty/redraw protocol.
//!
//! Everything draws through the minimal [`surface::Surface`] trait; the
//! crate never assumes a specific graphics API behind it.

pub mod dimension;
pub mod error;
pub mod layers;
pub mod linetype;
pub mod primitives;
pub mod raster;
pub mod surface;

pub use dimension::{DimensionKind, DimensionLayout, DimensionOptions};
pub use error::RenderError;
pub use layers::{ChangeMask, LayerManager, ReferenceImage};
pub use linetype::LineStyle;
pub use raster::Triangle;
pub use surface::{DisplayList, Primitive, Surface, SweepDirection};
