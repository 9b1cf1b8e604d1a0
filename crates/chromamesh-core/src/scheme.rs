//! Color harmony schemes.

use crate::color::Hsb;
use serde::{Deserialize, Serialize};

/// A rule that derives companion colors from a base hue by fixed angular offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Scheme {
    /// No companion colors.
    #[default]
    Monochromatic,
    /// 30° either side of the base hue.
    Analogous,
    /// The opposite hue.
    Complementary,
    /// Two hues 120° apart from the base.
    Triad,
    /// Three hues at quarter turns.
    Square,
}

impl Scheme {
    /// All schemes in display order.
    pub const ALL: [Scheme; 5] = [
        Scheme::Monochromatic,
        Scheme::Analogous,
        Scheme::Complementary,
        Scheme::Triad,
        Scheme::Square,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Scheme::Monochromatic => "Monochromatic",
            Scheme::Analogous => "Analogous",
            Scheme::Complementary => "Complementary",
            Scheme::Triad => "Triad",
            Scheme::Square => "Square",
        }
    }

    /// Cycle to the next scheme.
    pub fn next(self) -> Self {
        match self {
            Scheme::Monochromatic => Scheme::Analogous,
            Scheme::Analogous => Scheme::Complementary,
            Scheme::Complementary => Scheme::Triad,
            Scheme::Triad => Scheme::Square,
            Scheme::Square => Scheme::Monochromatic,
        }
    }

    /// Hue offsets in degrees, excluding the base color.
    pub fn shift_angles(self) -> &'static [f64] {
        match self {
            Scheme::Monochromatic => &[],
            Scheme::Analogous => &[-30.0, 30.0],
            Scheme::Complementary => &[180.0],
            Scheme::Triad => &[120.0, 240.0],
            Scheme::Square => &[90.0, 180.0, 270.0],
        }
    }

    /// Companion colors for a base color.
    ///
    /// Offsets are added to the raw hue; wrapping happens at display time.
    pub fn colors(self, hue: f64, saturation: f64, brightness: f64) -> Vec<Hsb> {
        self.shift_angles()
            .iter()
            .map(|shift| Hsb::new(hue + shift, saturation, brightness))
            .collect()
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_cycle() {
        let mut scheme = Scheme::Monochromatic;
        for expected in Scheme::ALL.iter().skip(1) {
            scheme = scheme.next();
            assert_eq!(scheme, *expected);
        }
        assert_eq!(scheme.next(), Scheme::Monochromatic);
    }

    #[test]
    fn test_monochromatic_has_no_companions() {
        assert!(Scheme::Monochromatic.colors(40.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn test_companion_hues() {
        let hues = |scheme: Scheme| -> Vec<f64> {
            scheme.colors(300.0, 0.5, 0.8).iter().map(|c| c.absolute_hue()).collect()
        };
        assert_eq!(hues(Scheme::Analogous), vec![270.0, 330.0]);
        assert_eq!(hues(Scheme::Complementary), vec![120.0]);
        assert_eq!(hues(Scheme::Triad), vec![60.0, 180.0]);
        assert_eq!(hues(Scheme::Square), vec![30.0, 120.0, 210.0]);
    }

    #[test]
    fn test_companions_keep_saturation_and_brightness() {
        for color in Scheme::Square.colors(10.0, 0.3, 0.6) {
            assert_eq!(color.saturation, 0.3);
            assert_eq!(color.brightness, 0.6);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Scheme::Triad.to_string(), "Triad");
    }
}
