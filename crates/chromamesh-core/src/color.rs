//! HSB color model and its display projections.

use crate::interpolate::{Interpolate, bilinear, mix};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// A color expressed as hue, saturation and brightness.
///
/// The hue is stored in degrees and is allowed to leave `[0, 360)`; it is
/// only wrapped when the color is projected for display. Saturation,
/// brightness and opacity are expected in `[0, 1]` but are not clamped here:
/// producers clamp, the model stores what it is given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    /// Hue angle in degrees.
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_opacity() -> f64 {
    1.0
}

impl Default for Hsb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Hsb {
    /// Opaque white.
    pub const WHITE: Hsb = Hsb {
        hue: 0.0,
        saturation: 0.0,
        brightness: 1.0,
        opacity: 1.0,
    };

    /// Create an opaque color.
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            opacity: 1.0,
        }
    }

    /// Return a copy with the given opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// The hue wrapped into `[0, 360)`.
    pub fn absolute_hue(&self) -> f64 {
        self.hue.rem_euclid(360.0)
    }

    /// Blend towards `other` taking the shorter way around the hue circle.
    ///
    /// [`Interpolate::lerp`] blends raw degree values, so 350° to 10° sweeps
    /// through 180°. Use this when that long sweep is not wanted.
    pub fn lerp_shortest_hue(&self, other: &Hsb, t: f64) -> Hsb {
        let delta = (other.hue - self.hue + 180.0).rem_euclid(360.0) - 180.0;
        Hsb {
            hue: self.hue + delta * t,
            saturation: mix(self.saturation, other.saturation, t),
            brightness: mix(self.brightness, other.brightness, t),
            opacity: mix(self.opacity, other.opacity, t),
        }
    }

    /// Convert to RGB components in `[0, 1]`.
    pub fn to_rgb(&self) -> [f64; 3] {
        let saturation = self.saturation.clamp(0.0, 1.0);
        let brightness = self.brightness.clamp(0.0, 1.0);

        let chroma = brightness * saturation;
        let sector = self.absolute_hue() / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = brightness - chroma;
        [r + m, g + m, b + m]
    }

    /// Get the displayable peniko color.
    pub fn to_color(&self) -> Color {
        let [r, g, b] = self.to_rgb();
        Color::new([
            r as f32,
            g as f32,
            b as f32,
            self.opacity.clamp(0.0, 1.0) as f32,
        ])
    }
}

impl Interpolate for Hsb {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Hsb {
            hue: mix(self.hue, other.hue, t),
            saturation: mix(self.saturation, other.saturation, t),
            brightness: mix(self.brightness, other.brightness, t),
            opacity: mix(self.opacity, other.opacity, t),
        }
    }

    fn blerp(c1: &Self, c2: &Self, c3: &Self, c4: &Self, tx: f64, ty: f64) -> Self {
        let channel = |f: fn(&Hsb) -> f64| bilinear(f(c1), f(c2), f(c3), f(c4), tx, ty);
        Hsb {
            hue: channel(|c| c.hue),
            saturation: channel(|c| c.saturation),
            brightness: channel(|c| c.brightness),
            opacity: channel(|c| c.opacity),
        }
    }
}

impl From<Hsb> for Color {
    fn from(color: Hsb) -> Self {
        color.to_color()
    }
}

/// Serializable color representation (RGBA8) handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba8Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for Rgba8Color {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Hsb> for Rgba8Color {
    fn from(color: Hsb) -> Self {
        color.to_color().into()
    }
}

impl From<Rgba8Color> for Color {
    fn from(color: Rgba8Color) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}
