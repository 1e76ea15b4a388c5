use std::f64::consts::TAU;

use framecad_core::geometry::{Color, ScreenPoint};

use crate::linetype::LineStyle;
use crate::surface::{Primitive, Surface, SweepDirection};

/// Normalize an angle in radians into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can return TAU itself when the input is a tiny negative.
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Draw a straight line. Zero-length lines are a silent no-op.
pub fn draw_line(
    surface: &mut dyn Surface,
    p1: ScreenPoint,
    p2: ScreenPoint,
    color: Color,
    thickness: f64,
    style: LineStyle,
) {
    if p1 == p2 {
        return;
    }
    surface.add_child(Primitive::Line {
        p1,
        p2,
        stroke: color,
        thickness,
        dashes: style.dash_pattern().to_vec(),
    });
}

/// Draw a line whose stroke fades from `start_color` to `end_color`.
/// Degenerates to a solid [`draw_line`] when both colors are identical.
pub fn draw_gradient_line(
    surface: &mut dyn Surface,
    p1: ScreenPoint,
    p2: ScreenPoint,
    start_color: Color,
    end_color: Color,
    thickness: f64,
    style: LineStyle,
) {
    if p1 == p2 {
        return;
    }
    if start_color == end_color {
        draw_line(surface, p1, p2, start_color, thickness, style);
        return;
    }
    surface.add_child(Primitive::GradientLine {
        p1,
        p2,
        start_color,
        end_color,
        thickness,
        dashes: style.dash_pattern().to_vec(),
    });
}

/// Draw a filled circle given its diameter.
pub fn draw_circle(
    surface: &mut dyn Surface,
    center: ScreenPoint,
    diameter: f64,
    fill: Color,
    stroke: Color,
    thickness: f64,
    style: LineStyle,
) {
    surface.add_child(Primitive::Ellipse {
        center,
        radius_x: diameter / 2.0,
        radius_y: diameter / 2.0,
        fill,
        stroke,
        thickness,
        dashes: style.dash_pattern().to_vec(),
    });
}

/// Draw an outline-only circle; the fill is forced transparent.
pub fn draw_circle_hollow(
    surface: &mut dyn Surface,
    center: ScreenPoint,
    diameter: f64,
    stroke: Color,
    thickness: f64,
    style: LineStyle,
) {
    draw_circle(
        surface,
        center,
        diameter,
        Color::TRANSPARENT,
        stroke,
        thickness,
        style,
    );
}

/// Draw a text label anchored at `position`.
pub fn draw_text(surface: &mut dyn Surface, position: ScreenPoint, content: &str, color: Color, size: f64) {
    surface.add_child(Primitive::Text {
        position,
        content: content.to_string(),
        color,
        size,
    });
}

/// Draw a circular arc.
///
/// Both angles are normalized into `[0, 2π)` first. If the normalized end
/// angle is then less than the start angle, the two are swapped, which can
/// change whether the major or minor arc gets drawn for reversed inputs.
/// Callers that care about traversal direction must pass pre-ordered angles.
pub fn draw_arc(
    surface: &mut dyn Surface,
    center: ScreenPoint,
    fill: Color,
    stroke: Color,
    thickness: f64,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    sweep: SweepDirection,
) {
    let mut start = normalize_angle(start_angle);
    let mut end = normalize_angle(end_angle);
    if end < start {
        std::mem::swap(&mut start, &mut end);
    }
    surface.add_child(Primitive::Arc {
        center,
        radius,
        start_angle: start,
        end_angle: end,
        sweep,
        fill,
        stroke,
        thickness,
    });
}
