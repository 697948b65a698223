//! This file implements what I refer to as HSL but which would precisely be called sHSL: a simple
//! cylindrical transformation of sRGB. HSL has well-known problems with perceptual uniformity, but
//! it is the space the catalog's family classifier thinks in, because its bands of hue,
//! saturation, and lightness line up with the way people name colors: "beige" really is a
//! low-saturation, high-lightness band of yellow-orange hues. Note that the derivation here is
//! hexagonal rather than polar: values are put on a hexagon and the hexagon is squeezed into a
//! circle, which can cause tiny variations against implementations that use trigonometry. A gray
//! input gets a hue of 0 degrees, although any hue would do.

use serde::{Deserialize, Serialize};

use crate::color::{Color, RGBColor, XYZColor};
use crate::coord::Coord;
use crate::illuminants::Illuminant;

/// A color in the HSL color space, a direct transformation of the sRGB space.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component, an angle in degrees in [0, 360).
    pub h: f64,
    /// The saturation component, in [0, 1]: the chroma relative to the largest chroma possible at
    /// this lightness. Much less accurate to human perception than the chroma of the CIE spaces.
    pub s: f64,
    /// The lightness component, in [0, 1]: the average of the largest and smallest RGB
    /// components, which sacrifices accuracy for convenience.
    pub l: f64,
}

impl Color for HSLColor {
    /// Converts from XYZ to HSL through sRGB: thus, there is a limited precision because RGB
    /// channels are bytes.
    fn from_xyz(xyz: XYZColor) -> HSLColor {
        let rgb = RGBColor::from_xyz(xyz);

        // project the RGB cube into a hexagon: the equivalent of radius is simply the largest
        // component minus the smallest component
        let components = [
            f64::from(rgb.r) / 255.0,
            f64::from(rgb.g) / 255.0,
            f64::from(rgb.b) / 255.0,
        ];
        let max_c = components.iter().cloned().fold(-1.0, f64::max);
        let min_c = components.iter().cloned().fold(2.0, f64::min);
        let chroma = max_c - min_c;
        let (r, g, b) = (components[0], components[1], components[2]);

        // hue is the proportion of the way around the hexagon, treated as degrees
        let mut hue = if chroma == 0.0 {
            // undefined for gray: 0 by convention
            0.0
        } else if max_c == r {
            ((g - b) / chroma) * 60.0
        } else if max_c == g {
            ((b - r) / chroma) * 60.0 + 120.0
        } else {
            ((r - g) / chroma) * 60.0 + 240.0
        };
        // the red sector formula can go negative: wrap into [0, 360)
        if hue < 0.0 {
            hue += 360.0;
        }

        let lightness = (max_c + min_c) / 2.0;
        let saturation = if lightness == 1.0 || lightness == 0.0 {
            // this would be a divide by 0 otherwise, just set it to 0 because it doesn't matter
            0.0
        } else {
            chroma / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        HSLColor {
            h: hue,
            s: saturation,
            l: lightness,
        }
    }
    // Converts back to XYZ through sRGB.
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        let chroma = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        // intermediate value is the second-largest RGB value, where chroma is the largest because
        // the smallest is 0
        let x = chroma * (1.0 - ((self.h / 60.0) % 2.0 - 1.0).abs());
        // split based on which line of the hexagon we're on, i.e., which are the two largest
        // components
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
        // add the right offset to each component to get the correct lightness, then scale back to
        // bytes
        let offset = self.l - chroma / 2.0;
        let byte = |c: f64| ((c + offset).clamp(0.0, 1.0) * 255.0).round() as u8;
        RGBColor {
            r: byte(r1),
            g: byte(g1),
            b: byte(b1),
        }
        .to_xyz(illuminant)
    }
}

impl From<Coord> for HSLColor {
    fn from(c: Coord) -> HSLColor {
        HSLColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl From<HSLColor> for Coord {
    fn from(hsl: HSLColor) -> Coord {
        Coord {
            x: hsl.h,
            y: hsl.s,
            z: hsl.l,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hsl_rgb_conversion() {
        let red_hsl: HSLColor = RGBColor { r: 255, g: 0, b: 0 }.convert();
        assert!(red_hsl.h.abs() <= 0.0001);
        assert!((red_hsl.s - 1.0).abs() <= 0.0001);
        assert!((red_hsl.l - 0.5).abs() <= 0.0001);

        let orange: HSLColor = RGBColor { r: 255, g: 87, b: 51 }.convert();
        assert!((orange.h - 10.588).abs() <= 0.01);
        assert!((orange.s - 1.0).abs() <= 0.0001);
        assert!((orange.l - 0.6).abs() <= 0.0001);
    }

    #[test]
    fn test_gray_is_achromatic() {
        let gray: HSLColor = RGBColor { r: 128, g: 128, b: 128 }.convert();
        assert!(gray.h.abs() <= 0.0001);
        assert!(gray.s.abs() <= 0.0001);
        assert!((gray.l - 128.0 / 255.0).abs() <= 0.0001);
    }

    #[test]
    fn test_hue_never_negative() {
        // blue-heavy reds land in the negative part of the red sector before wrapping
        let rose: HSLColor = RGBColor { r: 199, g: 67, b: 117 }.convert();
        assert!(rose.h >= 0.0 && rose.h < 360.0);
        assert!(rose.h > 330.0);
    }

    #[test]
    fn test_hsl_round_trip() {
        let lavender = HSLColor {
            h: 240.0,
            s: 0.5,
            l: 0.6,
        };
        let rgb: RGBColor = lavender.convert();
        assert_eq!(rgb.to_string(), "#6666CC");
    }
}
