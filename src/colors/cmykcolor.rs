//! This module implements the CMYK representation used on the print side of the catalog. CMYK
//! here is the naive device-independent derivation from sRGB (under-color removal with a full
//! black channel), not a profiled separation: it answers "roughly what would this mix as", which
//! is what a reference page needs, and nothing more. Since it has four components it does not
//! embed in the 3D coordinate space the other types share.

use serde::{Deserialize, Serialize};

use crate::color::{Color, RGBColor, XYZColor};
use crate::illuminants::Illuminant;

/// A color in the CMYK space: cyan, magenta, yellow, and black ink fractions.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct CMYKColor {
    /// The cyan component, in [0, 1].
    pub c: f64,
    /// The magenta component, in [0, 1].
    pub m: f64,
    /// The yellow component, in [0, 1].
    pub y: f64,
    /// The black (key) component, in [0, 1].
    pub k: f64,
}

impl CMYKColor {
    /// Derives the CMYK mix for an RGB color. The black channel is one minus the largest RGB
    /// component; the chromatic channels are what remains after the black is pulled out.
    pub fn from_rgb(rgb: &RGBColor) -> CMYKColor {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;
        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 {
            // pure black: the chromatic channels would be 0/0
            return CMYKColor {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 1.0,
            };
        }
        CMYKColor {
            c: (1.0 - r - k) / (1.0 - k),
            m: (1.0 - g - k) / (1.0 - k),
            y: (1.0 - b - k) / (1.0 - k),
            k,
        }
    }

    /// The RGB color this mix reproduces: each channel is `(1 - ink) * (1 - k)`.
    pub fn to_rgb(&self) -> RGBColor {
        let byte = |ink: f64| (((1.0 - ink) * (1.0 - self.k)).clamp(0.0, 1.0) * 255.0).round() as u8;
        RGBColor {
            r: byte(self.c),
            g: byte(self.m),
            b: byte(self.y),
        }
    }
}

impl Color for CMYKColor {
    /// Converts through sRGB.
    fn from_xyz(xyz: XYZColor) -> CMYKColor {
        CMYKColor::from_rgb(&RGBColor::from_xyz(xyz))
    }
    /// Converts through sRGB.
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        self.to_rgb().to_xyz(illuminant)
    }
}
