use serde::{Deserialize, Serialize};

use framecad_core::geometry::{Color, ScreenPoint};

use crate::linetype::LineStyle;
use crate::primitives::draw_gradient_line;
use crate::surface::Surface;

/// A triangle with independently colored vertices, in screen space.
/// Vertices may be supplied in any order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub v1: ScreenPoint,
    pub v2: ScreenPoint,
    pub v3: ScreenPoint,
    pub c1: Color,
    pub c2: Color,
    pub c3: Color,
}

impl Triangle {
    pub fn new(
        v1: ScreenPoint,
        v2: ScreenPoint,
        v3: ScreenPoint,
        c1: Color,
        c2: Color,
        c3: Color,
    ) -> Self {
        Self {
            v1,
            v2,
            v3,
            c1,
            c2,
            c3,
        }
    }
}

/// A vertex with its color, carried together through every sort and swap.
#[derive(Debug, Clone, Copy)]
struct Vertex {
    p: ScreenPoint,
    c: Color,
}

/// Scanline-fill a triangle, interpolating the three vertex colors across
/// its interior as one horizontal gradient span per pixel row.
///
/// Vertices are canonicalized to ascending y (ties broken by ascending x),
/// so the output is identical for any input ordering of the same
/// vertex/color pairs. Zero-height and zero-area triangles draw nothing.
pub fn fill_triangle(surface: &mut dyn Surface, tri: &Triangle) {
    let mut verts = [
        Vertex { p: tri.v1, c: tri.c1 },
        Vertex { p: tri.v2, c: tri.c2 },
        Vertex { p: tri.v3, c: tri.c3 },
    ];
    verts.sort_by(|a, b| {
        a.p.y
            .total_cmp(&b.p.y)
            .then_with(|| a.p.x.total_cmp(&b.p.x))
    });
    let [top, mid, bot] = verts;

    if bot.p.y - top.p.y <= 0.0 {
        // All three vertices on one row; nothing to fill.
        return;
    }
    let cross = (mid.p.x - top.p.x) * (bot.p.y - top.p.y)
        - (mid.p.y - top.p.y) * (bot.p.x - top.p.x);
    if cross == 0.0 {
        // Collinear vertices enclose no area.
        return;
    }

    if top.p.y == mid.p.y {
        fill_flat_top(surface, top, mid, bot);
    } else if mid.p.y == bot.p.y {
        fill_flat_bottom(surface, mid, bot, top);
    } else {
        // General case: split on the long edge (top–bot) at the middle
        // vertex's height. The split point's color is interpolated from the
        // long edge's endpoint colors by fractional height.
        let t = (mid.p.y - top.p.y) / (bot.p.y - top.p.y);
        let split = Vertex {
            p: ScreenPoint::new(top.p.x + (bot.p.x - top.p.x) * t, mid.p.y),
            c: top.c.lerp(&bot.c, t),
        };
        fill_flat_bottom(surface, mid, split, top);
        fill_flat_top(surface, mid, split, bot);
    }
}

/// Fill a triangle whose flat edge is at the smaller y (screen top), with
/// the apex below it. Rows are walked from the apex up to the flat edge.
fn fill_flat_top(surface: &mut dyn Surface, flat_a: Vertex, flat_b: Vertex, apex: Vertex) {
    let (left, right) = order_by_x(flat_a, flat_b);
    let height = apex.p.y - left.p.y;
    if height <= 0.0 {
        return;
    }
    let inv_left = (left.p.x - apex.p.x) / height;
    let inv_right = (right.p.x - apex.p.x) / height;

    let rows = height.floor() as i64;
    let mut xl = apex.p.x;
    let mut xr = apex.p.x;
    let mut y = apex.p.y;
    for _ in 0..=rows {
        emit_span(surface, xl, xr, y, &apex, &left, &right);
        xl += inv_left;
        xr += inv_right;
        y -= 1.0;
    }
}

/// Fill a triangle whose flat edge is at the larger y (screen bottom), with
/// the apex above it. Rows are walked from the apex down to the flat edge.
fn fill_flat_bottom(surface: &mut dyn Surface, flat_a: Vertex, flat_b: Vertex, apex: Vertex) {
    let (left, right) = order_by_x(flat_a, flat_b);
    let height = left.p.y - apex.p.y;
    if height <= 0.0 {
        return;
    }
    let inv_left = (left.p.x - apex.p.x) / height;
    let inv_right = (right.p.x - apex.p.x) / height;

    let rows = height.floor() as i64;
    let mut xl = apex.p.x;
    let mut xr = apex.p.x;
    let mut y = apex.p.y;
    for _ in 0..=rows {
        emit_span(surface, xl, xr, y, &apex, &left, &right);
        xl += inv_left;
        xr += inv_right;
        y += 1.0;
    }
}

fn order_by_x(a: Vertex, b: Vertex) -> (Vertex, Vertex) {
    if a.p.x <= b.p.x {
        (a, b)
    } else {
        (b, a)
    }
}

/// Emit one horizontal gradient span. Edge colors are weighted by Euclidean
/// distance travelled from the apex over the full edge length, not by row
/// count, so non-45° edges shade correctly.
fn emit_span(
    surface: &mut dyn Surface,
    xl: f64,
    xr: f64,
    y: f64,
    apex: &Vertex,
    left: &Vertex,
    right: &Vertex,
) {
    let p_left = ScreenPoint::new(xl, y);
    let p_right = ScreenPoint::new(xr, y);

    let len_left = apex.p.distance_to(&left.p);
    let len_right = apex.p.distance_to(&right.p);
    let t_left = if len_left > 0.0 {
        apex.p.distance_to(&p_left) / len_left
    } else {
        0.0
    };
    let t_right = if len_right > 0.0 {
        apex.p.distance_to(&p_right) / len_right
    } else {
        0.0
    };
    let color_left = apex.c.lerp(&left.c, t_left);
    let color_right = apex.c.lerp(&right.c, t_right);

    // Apex row: snap the zero-width span out to one pixel so the vertex
    // itself still gets painted.
    let p_right = if p_left == p_right {
        ScreenPoint::new(xr + 1.0, y)
    } else {
        p_right
    };

    draw_gradient_line(
        surface,
        p_left,
        p_right,
        color_left,
        color_right,
        1.0,
        LineStyle::Solid,
    );
}
