//! This module implements the HSV color space, a cousin of the HSL color space. The definition of
//! value differs from lightness: it goes from black to full saturation instead of black to white.
//! This makes value an extraordinarily poor analog of luminance (dark purple is the same value as
//! white, despite reflecting one-tenth the light), but does make the hue and saturation a bit more
//! meaningful than HSL. The converter page shows both, so both live here; the same hexagonal
//! derivation and the same gray-gets-hue-0 convention as HSL apply.

use serde::{Deserialize, Serialize};

use crate::color::{Color, RGBColor, XYZColor};
use crate::coord::Coord;
use crate::illuminants::Illuminant;

/// An HSV color, defining parameters for hue, saturation, and value from the RGB space.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, an angle in degrees in [0, 360). Exactly the same as the hue component of HSL.
    pub h: f64,
    /// The saturation, defined as the chroma relative to the value, in [0, 1].
    pub s: f64,
    /// The value, defined as the largest RGB component of a color, in [0, 1]. This corresponds to
    /// something close to color intensity, not luminance.
    pub v: f64,
}

impl Color for HSVColor {
    /// Converts to HSV by going through sRGB.
    fn from_xyz(xyz: XYZColor) -> HSVColor {
        let rgb = RGBColor::from_xyz(xyz);

        let components = [
            f64::from(rgb.r) / 255.0,
            f64::from(rgb.g) / 255.0,
            f64::from(rgb.b) / 255.0,
        ];
        let max_c = components.iter().cloned().fold(-1.0, f64::max);
        let min_c = components.iter().cloned().fold(2.0, f64::min);
        let chroma = max_c - min_c;
        let (r, g, b) = (components[0], components[1], components[2]);

        // same hexagonal hue as HSL
        let mut hue = if chroma == 0.0 {
            0.0
        } else if max_c == r {
            ((g - b) / chroma) * 60.0
        } else if max_c == g {
            ((b - r) / chroma) * 60.0 + 120.0
        } else {
            ((r - g) / chroma) * 60.0 + 240.0
        };
        if hue < 0.0 {
            hue += 360.0;
        }

        // value is the largest component; saturation is chroma relative to it
        let value = max_c;
        let saturation = if value == 0.0 {
            // this would be a divide by 0 otherwise, just set it to 0 because it doesn't matter
            0.0
        } else {
            chroma / value
        };

        HSVColor {
            h: hue,
            s: saturation,
            v: value,
        }
    }
    /// Converts from HSV back to XYZ through sRGB.
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        let chroma = self.s * self.v;
        // intermediate value is the second-largest RGB value
        let x = chroma * (1.0 - ((self.h / 60.0) % 2.0 - 1.0).abs());
        let (r1, g1, b1) = if self.h <= 60.0 {
            (chroma, x, 0.0)
        } else if self.h <= 120.0 {
            (x, chroma, 0.0)
        } else if self.h <= 180.0 {
            (0.0, chroma, x)
        } else if self.h <= 240.0 {
            (0.0, x, chroma)
        } else if self.h <= 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        let offset = self.v - chroma;
        let byte = |c: f64| ((c + offset).clamp(0.0, 1.0) * 255.0).round() as u8;
        RGBColor {
            r: byte(r1),
            g: byte(g1),
            b: byte(b1),
        }
        .to_xyz(illuminant)
    }
}

impl From<Coord> for HSVColor {
    fn from(c: Coord) -> HSVColor {
        HSVColor {
            h: c.x,
            s: c.y,
            v: c.z,
        }
    }
}

impl From<HSVColor> for Coord {
    fn from(hsv: HSVColor) -> Coord {
        Coord {
            x: hsv.h,
            y: hsv.s,
            z: hsv.v,
        }
    }
}
