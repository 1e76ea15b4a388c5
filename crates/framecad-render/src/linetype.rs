use serde::{Deserialize, Serialize};

/// Named dash pattern applied to stroked primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    DashedX2,
    Center,
    CenterX2,
    Phantom,
    PhantomX2,
}

impl LineStyle {
    /// The dash-length sequence for this style. Empty means solid.
    /// The mapping is total; every style has a fixed sequence.
    pub fn dash_pattern(&self) -> &'static [f64] {
        match self {
            LineStyle::Solid => &[],
            LineStyle::Dashed => &[4.0, 4.0],
            LineStyle::DashedX2 => &[8.0, 8.0],
            LineStyle::Center => &[4.0, 2.0],
            LineStyle::CenterX2 => &[8.0, 4.0],
            LineStyle::Phantom => &[10.0, 2.0, 4.0, 2.0, 4.0, 2.0],
            LineStyle::PhantomX2 => &[20.0, 4.0, 8.0, 4.0, 8.0, 4.0],
        }
    }

    /// Parse a style by name. Unrecognized names fall back to `Solid`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Solid" => LineStyle::Solid,
            "Dashed" => LineStyle::Dashed,
            "DashedX2" => LineStyle::DashedX2,
            "Center" => LineStyle::Center,
            "CenterX2" => LineStyle::CenterX2,
            "Phantom" => LineStyle::Phantom,
            "PhantomX2" => LineStyle::PhantomX2,
            _ => LineStyle::Solid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_is_empty() {
        assert!(LineStyle::Solid.dash_pattern().is_empty());
    }

    #[test]
    fn test_fixed_sequences() {
        assert_eq!(LineStyle::Center.dash_pattern(), &[4.0, 2.0]);
        assert_eq!(
            LineStyle::Phantom.dash_pattern(),
            &[10.0, 2.0, 4.0, 2.0, 4.0, 2.0]
        );
    }

    #[test]
    fn test_x2_variants_are_doubled() {
        let phantom = LineStyle::Phantom.dash_pattern();
        let phantom_x2 = LineStyle::PhantomX2.dash_pattern();
        assert_eq!(phantom.len(), phantom_x2.len());
        for (a, b) in phantom.iter().zip(phantom_x2) {
            assert!((a * 2.0 - b).abs() < 1e-10);
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_solid() {
        assert_eq!(LineStyle::from_name("ZigZag"), LineStyle::Solid);
        assert_eq!(LineStyle::from_name(""), LineStyle::Solid);
        assert_eq!(LineStyle::from_name("Phantom"), LineStyle::Phantom);
    }
}
