use serde::{Deserialize, Serialize};

use crate::geometry::{ScreenPoint, WorldPoint};

/// Maps between world coordinates (Y-up, engineering units) and screen
/// coordinates (Y-down, pixels) for a canvas of a given height.
///
/// Scale factors are pixels per world unit, one per axis. They must be finite
/// and non-zero; a zero scale collapses an axis and is a caller error that
/// propagates as-is rather than being defended against here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Canvas height in pixels. The world origin maps to the bottom-left.
    pub canvas_height: f64,
    /// Horizontal scale (pixels per world unit).
    pub scale_x: f64,
    /// Vertical scale (pixels per world unit).
    pub scale_y: f64,
}

impl ViewTransform {
    pub fn new(canvas_height: f64, scale_x: f64, scale_y: f64) -> Self {
        Self {
            canvas_height,
            scale_x,
            scale_y,
        }
    }

    /// Convert a world-space point to screen space.
    pub fn world_to_screen(&self, p: WorldPoint) -> ScreenPoint {
        ScreenPoint::new(p.x * self.scale_x, self.canvas_height - p.y * self.scale_y)
    }

    /// Convert a screen-space point back to world space. Exact inverse of
    /// [`world_to_screen`](Self::world_to_screen) up to floating rounding.
    pub fn screen_to_world(&self, p: ScreenPoint) -> WorldPoint {
        WorldPoint::new(p.x / self.scale_x, (self.canvas_height - p.y) / self.scale_y)
    }
}
