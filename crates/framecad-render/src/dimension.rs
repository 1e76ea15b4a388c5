use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use framecad_core::geometry::{Color, ScreenPoint};

use crate::error::RenderError;
use crate::linetype::LineStyle;
use crate::primitives::{draw_line, draw_text};
use crate::surface::Surface;

/// Which measurement a dimension annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionKind {
    /// Distance along the segment itself.
    Aligned,
    /// Horizontal extent between the endpoints.
    Horizontal,
    /// Vertical extent between the endpoints.
    Vertical,
    /// Angle between two segments. Not implemented.
    Angular,
    /// Radius callout for arcs. Not implemented.
    Radial,
}

/// Sizing parameters for dimension leader and text geometry, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionOptions {
    pub text_height: f64,
    pub leader_height: f64,
    /// Fraction of `leader_height` at which the text-break line crosses the
    /// leaders, measured from the gap offset.
    pub leader_drop_percent: f64,
    /// Clearance between the measured point and the leader start.
    pub leader_gap: f64,
    /// Leader overshoot past the text-break line.
    pub leader_ext: f64,
    pub linetype: LineStyle,
}

impl Default for DimensionOptions {
    fn default() -> Self {
        Self {
            text_height: 12.0,
            leader_height: 20.0,
            leader_drop_percent: 1.0,
            leader_gap: 4.0,
            leader_ext: 4.0,
            linetype: LineStyle::Solid,
        }
    }
}

/// The computed geometry of one dimension annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionLayout {
    pub leader1: (ScreenPoint, ScreenPoint),
    pub leader2: (ScreenPoint, ScreenPoint),
    pub text_break_line: (ScreenPoint, ScreenPoint),
    pub text_anchor: ScreenPoint,
    pub text: String,
    /// Dimension-line angle in radians.
    pub angle: f64,
    pub linetype: LineStyle,
}

/// Compute a dimension of the requested kind.
///
/// `Angular` and `Radial` fail with [`RenderError::UnsupportedVariant`]
/// rather than silently drawing nothing. Returns `Ok(None)` for coincident
/// endpoints.
pub fn compute_dimension(
    kind: DimensionKind,
    p1: ScreenPoint,
    p2: ScreenPoint,
    text: &str,
    opts: &DimensionOptions,
) -> Result<Option<DimensionLayout>, RenderError> {
    match kind {
        DimensionKind::Aligned => Ok(compute_aligned_dimension(p1, p2, text, opts)),
        DimensionKind::Horizontal => {
            // Project both endpoints onto the y of the lower one.
            let base_y = p1.y.max(p2.y);
            Ok(compute_aligned_dimension(
                ScreenPoint::new(p1.x, base_y),
                ScreenPoint::new(p2.x, base_y),
                text,
                opts,
            ))
        }
        DimensionKind::Vertical => {
            // Project both endpoints onto the x of the leftmost one.
            let base_x = p1.x.min(p2.x);
            Ok(compute_aligned_dimension(
                ScreenPoint::new(base_x, p1.y),
                ScreenPoint::new(base_x, p2.y),
                text,
                opts,
            ))
        }
        DimensionKind::Angular => Err(RenderError::UnsupportedVariant("Angular")),
        DimensionKind::Radial => Err(RenderError::UnsupportedVariant("Radial")),
    }
}

/// Compute leader-line and text-anchor geometry for a dimension measured
/// along the segment `p1`–`p2`.
///
/// Endpoints are first put into canonical order (leftmost first; for a
/// vertical pair, topmost first), so the angle computation always sees a
/// left-to-right segment. A vertical pair is special-cased to an exact
/// `π/2` angle instead of evaluating `atan(dy/dx)` with `dx == 0`.
///
/// Returns `None` when the endpoints coincide.
pub fn compute_aligned_dimension(
    p1: ScreenPoint,
    p2: ScreenPoint,
    text: &str,
    opts: &DimensionOptions,
) -> Option<DimensionLayout> {
    if p1 == p2 {
        return None;
    }
    let (a, b) = canonical_order(p1, p2);

    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let angle = if dx == 0.0 { FRAC_PI_2 } else { (dy / dx).atan() };

    // Unit perpendicular to the dimension line.
    let perp_x = angle.sin();
    let perp_y = -angle.cos();
    let offset = |p: ScreenPoint, dist: f64| -> ScreenPoint {
        ScreenPoint::new(p.x + perp_x * dist, p.y + perp_y * dist)
    };

    let near = opts.leader_gap;
    let far = opts.leader_gap + opts.leader_height + opts.leader_ext;
    let break_dist = opts.leader_gap + opts.leader_height * opts.leader_drop_percent;

    let leader1 = (offset(a, near), offset(a, far));
    let leader2 = (offset(b, near), offset(b, far));
    let text_break_line = (offset(a, break_dist), offset(b, break_dist));

    // Down-right slopes carry the text on the opposite side of the break
    // line from everything else, to keep it clear of the leaders.
    let bias = if angle < 0.0 { -1.0 } else { 1.0 };
    let mid = text_break_line.0.midpoint(&text_break_line.1);
    let text_anchor = ScreenPoint::new(
        mid.x + perp_x * bias * opts.text_height / 2.0,
        mid.y + perp_y * bias * opts.text_height / 2.0,
    );

    Some(DimensionLayout {
        leader1,
        leader2,
        text_break_line,
        text_anchor,
        text: text.to_string(),
        angle,
        linetype: opts.linetype,
    })
}

/// Draw a computed dimension: both leaders, the text-break line, and the
/// label at its anchor.
pub fn render_dimension(
    surface: &mut dyn Surface,
    layout: &DimensionLayout,
    color: Color,
    thickness: f64,
    text_size: f64,
) {
    draw_line(
        surface,
        layout.leader1.0,
        layout.leader1.1,
        color,
        thickness,
        layout.linetype,
    );
    draw_line(
        surface,
        layout.leader2.0,
        layout.leader2.1,
        color,
        thickness,
        layout.linetype,
    );
    draw_line(
        surface,
        layout.text_break_line.0,
        layout.text_break_line.1,
        color,
        thickness,
        layout.linetype,
    );
    draw_text(surface, layout.text_anchor, &layout.text, color, text_size);
}

fn canonical_order(p1: ScreenPoint, p2: ScreenPoint) -> (ScreenPoint, ScreenPoint) {
    if p1.x > p2.x || (p1.x == p2.x && p1.y > p2.y) {
        (p2, p1)
    } else {
        (p1, p2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_dimension_concrete() {
        let opts = DimensionOptions {
            text_height: 10.0,
            leader_height: 20.0,
            leader_drop_percent: 1.0,
            leader_gap: 4.0,
            leader_ext: 4.0,
            linetype: LineStyle::Solid,
        };
        let layout = compute_aligned_dimension(
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(10.0, 0.0),
            "10 ft",
            &opts,
        )
        .unwrap();

        assert!(layout.angle.abs() < 1e-12);

        // Leaders are vertical, at x = 0 and x = 10.
        assert!((layout.leader1.0.x - 0.0).abs() < 1e-9);
        assert!((layout.leader1.1.x - 0.0).abs() < 1e-9);
        assert!((layout.leader2.0.x - 10.0).abs() < 1e-9);
        assert!((layout.leader2.1.x - 10.0).abs() < 1e-9);
        assert!((layout.leader1.1.y - layout.leader1.0.y).abs() > 1e-9);

        // Break line is horizontal, spanning the leaders.
        assert!((layout.text_break_line.0.y - layout.text_break_line.1.y).abs() < 1e-9);
        assert!((layout.text_break_line.0.x - 0.0).abs() < 1e-9);
        assert!((layout.text_break_line.1.x - 10.0).abs() < 1e-9);

        // Anchor sits at the midpoint, offset by half the text height.
        assert!((layout.text_anchor.x - 5.0).abs() < 1e-9);
        assert_eq!(layout.text, "10 ft");
    }

    #[test]
    fn test_vertical_dimension_special_case() {
        let layout = compute_aligned_dimension(
            ScreenPoint::new(3.0, 12.0),
            ScreenPoint::new(3.0, 2.0),
            "10 ft",
            &DimensionOptions::default(),
        )
        .unwrap();

        assert!((layout.angle - FRAC_PI_2).abs() < 1e-12);
        // Leaders are horizontal, at the endpoint y values.
        assert!((layout.leader1.0.y - 2.0).abs() < 1e-9);
        assert!((layout.leader1.1.y - 2.0).abs() < 1e-9);
        assert!((layout.leader2.0.y - 12.0).abs() < 1e-9);
        // Break line is vertical.
        assert!((layout.text_break_line.0.x - layout.text_break_line.1.x).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_endpoints_noop() {
        let p = ScreenPoint::new(7.0, 7.0);
        assert!(compute_aligned_dimension(p, p, "0", &DimensionOptions::default()).is_none());
    }

    #[test]
    fn test_endpoint_order_is_canonical() {
        let opts = DimensionOptions::default();
        let forward = compute_aligned_dimension(
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(10.0, 4.0),
            "d",
            &opts,
        )
        .unwrap();
        let reversed = compute_aligned_dimension(
            ScreenPoint::new(10.0, 4.0),
            ScreenPoint::new(0.0, 0.0),
            "d",
            &opts,
        )
        .unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_unsupported_kinds_error() {
        let p1 = ScreenPoint::new(0.0, 0.0);
        let p2 = ScreenPoint::new(5.0, 5.0);
        let opts = DimensionOptions::default();
        assert!(matches!(
            compute_dimension(DimensionKind::Angular, p1, p2, "a", &opts),
            Err(RenderError::UnsupportedVariant("Angular"))
        ));
        assert!(matches!(
            compute_dimension(DimensionKind::Radial, p1, p2, "r", &opts),
            Err(RenderError::UnsupportedVariant("Radial"))
        ));
    }

    #[test]
    fn test_horizontal_kind_projects() {
        let opts = DimensionOptions::default();
        let layout = compute_dimension(
            DimensionKind::Horizontal,
            ScreenPoint::new(0.0, 3.0),
            ScreenPoint::new(8.0, 9.0),
            "8 ft",
            &opts,
        )
        .unwrap()
        .unwrap();
        assert!(layout.angle.abs() < 1e-12);
        assert!((layout.leader1.0.x - 0.0).abs() < 1e-9);
        assert!((layout.leader2.0.x - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_dimension_emits_three_lines_and_text() {
        use crate::surface::{DisplayList, Primitive};
        let mut list = DisplayList::new(200.0, 200.0);
        let layout = compute_aligned_dimension(
            ScreenPoint::new(20.0, 50.0),
            ScreenPoint::new(120.0, 50.0),
            "100 px",
            &DimensionOptions::default(),
        )
        .unwrap();
        render_dimension(&mut list, &layout, Color::BLACK, 1.0, 12.0);
        let lines = list
            .primitives()
            .iter()
            .filter(|p| matches!(p, Primitive::Line { .. }))
            .count();
        let texts = list
            .primitives()
            .iter()
            .filter(|p| matches!(p, Primitive::Text { .. }))
            .count();
        assert_eq!(lines, 3);
        assert_eq!(texts, 1);
    }

    #[test]
    fn test_down_right_slope_biases_text_opposite() {
        let opts = DimensionOptions::default();
        let up = compute_aligned_dimension(
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(10.0, 5.0),
            "d",
            &opts,
        )
        .unwrap();
        let down = compute_aligned_dimension(
            ScreenPoint::new(0.0, 5.0),
            ScreenPoint::new(10.0, 0.0),
            "d",
            &opts,
        )
        .unwrap();
        assert!(up.angle > 0.0);
        assert!(down.angle < 0.0);

        let up_mid = up.text_break_line.0.midpoint(&up.text_break_line.1);
        let down_mid = down.text_break_line.0.midpoint(&down.text_break_line.1);
        let up_side = (up.text_anchor.x - up_mid.x) * up.angle.sin()
            + (up.text_anchor.y - up_mid.y) * -up.angle.cos();
        let down_side = (down.text_anchor.x - down_mid.x) * down.angle.sin()
            + (down.text_anchor.y - down_mid.y) * -down.angle.cos();
        assert!(up_side > 0.0);
        assert!(down_side < 0.0);
    }
}
