use serde::{Deserialize, Serialize};

use framecad_core::geometry::{Color, ScreenPoint};

/// Traversal direction of a circular arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepDirection {
    Clockwise,
    CounterClockwise,
}

/// Placement rectangle for a raster image, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A transient drawable item. Primitives are created fresh on every redraw
/// cycle and discarded; nothing in the pipeline caches them between redraws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Line {
        p1: ScreenPoint,
        p2: ScreenPoint,
        stroke: Color,
        thickness: f64,
        /// Dash-length sequence; empty means solid.
        dashes: Vec<f64>,
    },
    GradientLine {
        p1: ScreenPoint,
        p2: ScreenPoint,
        start_color: Color,
        end_color: Color,
        thickness: f64,
        dashes: Vec<f64>,
    },
    Ellipse {
        center: ScreenPoint,
        radius_x: f64,
        radius_y: f64,
        fill: Color,
        stroke: Color,
        thickness: f64,
        dashes: Vec<f64>,
    },
    Arc {
        center: ScreenPoint,
        radius: f64,
        /// Radians, clockwise-positive, normalized into [0, 2π).
        start_angle: f64,
        end_angle: f64,
        sweep: SweepDirection,
        fill: Color,
        stroke: Color,
        thickness: f64,
    },
    Text {
        position: ScreenPoint,
        content: String,
        color: Color,
        size: f64,
    },
    Image {
        source: String,
        rect: TargetRect,
        opacity: f64,
    },
}

/// Minimal capability set of a 2D drawable sink. The rendering pipeline
/// assumes nothing about the graphics API behind it beyond this trait.
pub trait Surface {
    fn add_child(&mut self, primitive: Primitive);
    fn remove_child(&mut self, index: usize) -> Option<Primitive>;
    fn clear(&mut self);
    fn width(&self) -> f64;
    fn height(&self) -> f64;
}

/// An in-memory retained surface: the backing store for layer content, and
/// the test double for the external canvas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayList {
    primitives: Vec<Primitive>,
    width: f64,
    height: f64,
}

impl DisplayList {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            primitives: Vec::new(),
            width,
            height,
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Surface for DisplayList {
    fn add_child(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    fn remove_child(&mut self, index: usize) -> Option<Primitive> {
        if index < self.primitives.len() {
            Some(self.primitives.remove(index))
        } else {
            None
        }
    }

    fn clear(&mut self) {
        self.primitives.clear();
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}
