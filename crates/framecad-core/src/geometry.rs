use serde::{Deserialize, Serialize};

/// A 2D point in world coordinates: Cartesian, Y increasing upward,
/// engineering units (feet).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &WorldPoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn midpoint(&self, other: &WorldPoint) -> WorldPoint {
        WorldPoint::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A 2D point in screen coordinates: pixels, Y increasing downward,
/// origin at the canvas top-left.
///
/// Kept distinct from [`WorldPoint`] so the transform module is the only
/// place a conversion between the two spaces can happen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &ScreenPoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn midpoint(&self, other: &ScreenPoint) -> ScreenPoint {
        ScreenPoint::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// An RGBA color with 8-bit channels, used for strokes, fills, and
/// per-vertex gradient interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Linear interpolation between two colors, per channel.
    /// `t` is clamped to [0, 1].
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * t).round() as u8 };
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// An axis-aligned rectangle in world space, stored lower-left / upper-right.
/// Diaphragm outlines are modeled as these; their corners feed the snap
/// resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldRect {
    pub min: WorldPoint,
    pub max: WorldPoint,
}

impl WorldRect {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min: WorldPoint::new(x1.min(x2), y1.min(y2)),
            max: WorldPoint::new(x1.max(x2), y1.max(y2)),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> WorldPoint {
        self.min.midpoint(&self.max)
    }

    /// The four corners, counter-clockwise from the lower-left.
    pub fn corners(&self) -> [WorldPoint; 4] {
        [
            self.min,
            WorldPoint::new(self.max.x, self.min.y),
            self.max,
            WorldPoint::new(self.min.x, self.max.y),
        ]
    }

    pub fn contains_point(&self, p: &WorldPoint) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// A wall centerline segment in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: WorldPoint,
    pub end: WorldPoint,
}

impl Segment {
    pub fn new(start: WorldPoint, end: WorldPoint) -> Self {
        Self { start, end }
    }

    pub fn endpoints(&self) -> [WorldPoint; 2] {
        [self.start, self.end]
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> WorldPoint {
        self.start.midpoint(&self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = WorldPoint::new(0.0, 0.0);
        let b = WorldPoint::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_color_lerp_endpoints() {
        let red = Color::RED;
        let blue = Color::BLUE;
        assert_eq!(red.lerp(&blue, 0.0), red);
        assert_eq!(red.lerp(&blue, 1.0), blue);
        assert_eq!(red.lerp(&blue, 0.5), Color::rgb(128, 0, 128));
    }

    #[test]
    fn test_color_lerp_clamps() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.lerp(&b, -1.0), a);
        assert_eq!(a.lerp(&b, 2.0), b);
    }

    #[test]
    fn test_rect_corners() {
        let r = WorldRect::new(10.0, 2.0, 0.0, 8.0);
        let corners = r.corners();
        assert_eq!(corners[0], WorldPoint::new(0.0, 2.0));
        assert_eq!(corners[1], WorldPoint::new(10.0, 2.0));
        assert_eq!(corners[2], WorldPoint::new(10.0, 8.0));
        assert_eq!(corners[3], WorldPoint::new(0.0, 8.0));
    }

    #[test]
    fn test_segment_length() {
        let s = Segment::new(WorldPoint::new(1.0, 1.0), WorldPoint::new(4.0, 5.0));
        assert!((s.length() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_json_round_trip() {
        let p = WorldPoint::new(12.5, -3.0);
        let json = serde_json::to_string(&p).unwrap();
        let back: WorldPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
