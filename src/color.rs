//! This file defines the core color types everything else in the crate is derived from: the byte
//! [`RGBColor`] that a catalog hex code decodes to, its gamma-decoded counterpart
//! [`LinearRGBColor`], and the CIE 1931 [`XYZColor`] that acts as the hub between color spaces.
//! It also defines the [`Color`] trait, which any color representation that can round-trip
//! through XYZ implements; conversions between any two spaces are then just a hop through the
//! hub. Outward-facing CIE values in this crate are D50, the print and catalog convention, so
//! anything that arrives in another illuminant gets chromatically adapted on the way.

use std::fmt;

use nalgebra::Vector3;
use num::clamp;
use serde::{Deserialize, Serialize};

use crate::consts;
use crate::hex::{normalize, ColorParseError};
use crate::illuminants::Illuminant;

/// Rounds to the given number of decimal places, for the outward-facing display values. The
/// internal pipeline always carries full `f64` precision; only the edges round.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// The sRGB transfer function, taking a gamma-encoded channel in [0, 1] to linear light.
pub(crate) fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// The algebraic inverse of [`srgb_to_linear`]. The caller clamps: out-of-gamut XYZ input can
/// produce values outside [0, 1] here.
pub(crate) fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// A point in the CIE 1931 XYZ color space, the device-independent hub every other space converts
/// through. Components are on the nominal scale where the white point's Y is 1; the
/// outward-facing convention of multiplying by 100 is applied only when formatting a
/// [`bundle::ColorFormatBundle`](crate::bundle::ColorFormatBundle). Each value is tagged with the
/// illuminant it is relative to, so that conversions can adapt rather than silently mixing white
/// points.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X component, a mix of the cone responses that carries most of the red-green
    /// information.
    pub x: f64,
    /// The Y component, which is exactly the relative luminance of the color.
    pub y: f64,
    /// The Z component, which is quasi-equal to the short-wavelength (blue) stimulus.
    pub z: f64,
    /// The illuminant the coordinates are relative to.
    pub illuminant: Illuminant,
}

impl XYZColor {
    /// The white point of the given illuminant as an `XYZColor`, scaled so Y is 1.
    pub fn white_point(illuminant: Illuminant) -> XYZColor {
        let wp = illuminant.white_point();
        XYZColor {
            x: wp[0] / 100.0,
            y: wp[1] / 100.0,
            z: wp[2] / 100.0,
            illuminant,
        }
    }

    /// Returns a new XYZ color describing the same surface under a different illuminant, using
    /// the Bradford chromatic adaptation transform: project into cone response space, scale each
    /// response by the ratio of the destination and source white points, and project back. If the
    /// illuminant already matches, this is the identity.
    pub fn color_adapt(&self, target: Illuminant) -> XYZColor {
        if self.illuminant == target {
            return *self;
        }
        let bradford = consts::BRADFORD_TRANSFORM_MAT();
        let src_wp = XYZColor::white_point(self.illuminant);
        let dst_wp = XYZColor::white_point(target);
        let src_cone = bradford * Vector3::new(src_wp.x, src_wp.y, src_wp.z);
        let dst_cone = bradford * Vector3::new(dst_wp.x, dst_wp.y, dst_wp.z);
        let cone = bradford * Vector3::new(self.x, self.y, self.z);
        let scaled = Vector3::new(
            cone[0] * dst_cone[0] / src_cone[0],
            cone[1] * dst_cone[1] / src_cone[1],
            cone[2] * dst_cone[2] / src_cone[2],
        );
        let adapted = consts::inv(bradford) * scaled;
        XYZColor {
            x: adapted[0],
            y: adapted[1],
            z: adapted[2],
            illuminant: target,
        }
    }
}

/// A trait for any color representation that can be converted to and from the CIE 1931 XYZ color
/// space. Implementing the two hub conversions buys the generic [`convert`](Color::convert)
/// between any two such representations.
pub trait Color: Sized {
    /// Constructs this representation from an XYZ color, adapting the illuminant as needed.
    fn from_xyz(xyz: XYZColor) -> Self;
    /// Converts this color to XYZ coordinates under the given illuminant.
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor;
    /// Converts between any two color representations by hopping through the XYZ hub. The hop is
    /// made in D50, the working illuminant of the crate's outward pipeline.
    ///
    /// # Example
    /// ```
    /// # use madder::prelude::*;
    /// # use madder::colors::CIELABColor;
    /// let rgb = RGBColor::from_hex_code("#FF5733").unwrap();
    /// let lab: CIELABColor = rgb.convert();
    /// assert!(lab.l > 0.0 && lab.l < 100.0);
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_xyz(self.to_xyz(Illuminant::D50))
    }
}

/// An sRGB color as stored in the catalog: three bytes, one per channel. This is the exact,
/// lossless counterpart of a normalized hex code: parsing and formatting round-trip down to the
/// byte.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel, 0–255.
    pub r: u8,
    /// The green channel, 0–255.
    pub g: u8,
    /// The blue channel, 0–255.
    pub b: u8,
}

impl RGBColor {
    /// Parses any valid spelling of a hex color code into an `RGBColor`. The input goes through
    /// [`normalize`](crate::hex::normalize) first, so shorthand, case, and a missing `#` are all
    /// fine.
    ///
    /// # Errors
    /// Returns [`ColorParseError::InvalidColorFormat`] if the input does not normalize.
    pub fn from_hex_code(input: &str) -> Result<RGBColor, ColorParseError> {
        let canonical = normalize(input)?;
        let byte = |range| {
            u8::from_str_radix(&canonical[range], 16)
                .map_err(|_| ColorParseError::InvalidColorFormat(input.to_string()))
        };
        Ok(RGBColor {
            r: byte(1..3)?,
            g: byte(3..5)?,
            b: byte(5..7)?,
        })
    }

    /// The gamma-decoded version of this color: each channel divided by 255 and run through the
    /// sRGB transfer function.
    pub fn to_linear(&self) -> LinearRGBColor {
        LinearRGBColor {
            r: srgb_to_linear(f64::from(self.r) / 255.0),
            g: srgb_to_linear(f64::from(self.g) / 255.0),
            b: srgb_to_linear(f64::from(self.b) / 255.0),
        }
    }

    /// The integer value of the color's 24-bit representation: `#FF5733` is 16733491.
    pub fn decimal(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

impl fmt::Display for RGBColor {
    /// Formats the color as its canonical hex code, uppercase with a leading `#`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Color for RGBColor {
    /// Converts from XYZ by adapting to the sRGB reference white (D65), applying the linear
    /// XYZ-to-sRGB matrix, and gamma-encoding. Out-of-gamut channels clamp to [0, 1] before byte
    /// scaling, so every XYZ input produces some displayable color.
    fn from_xyz(xyz: XYZColor) -> RGBColor {
        let adapted = xyz.color_adapt(Illuminant::D65);
        let lin = consts::STANDARD_RGB_TRANSFORM_MAT()
            * Vector3::new(adapted.x, adapted.y, adapted.z);
        LinearRGBColor {
            r: lin[0],
            g: lin[1],
            b: lin[2],
        }
        .to_rgb()
    }

    /// Converts to XYZ by gamma-decoding, applying the inverse of the XYZ-to-sRGB matrix (which
    /// lands in D65, the sRGB reference white), and adapting to the requested illuminant.
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        let lin = self.to_linear();
        let xyz = consts::inv(consts::STANDARD_RGB_TRANSFORM_MAT())
            * Vector3::new(lin.r, lin.g, lin.b);
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
            illuminant: Illuminant::D65,
        }
        .color_adapt(illuminant)
    }
}

/// An sRGB color with the gamma encoding removed: three floats in [0, 1] proportional to light
/// energy. This is the form luminance and the CIE conversions actually work on; it is an
/// intermediate, derived through [`RGBColor::to_linear`] rather than constructed directly.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRGBColor {
    /// The linear red channel, in [0, 1].
    pub r: f64,
    /// The linear green channel, in [0, 1].
    pub g: f64,
    /// The linear blue channel, in [0, 1].
    pub b: f64,
}

impl LinearRGBColor {
    /// Re-encodes to byte sRGB, clamping each channel to [0, 1] first.
    pub fn to_rgb(&self) -> RGBColor {
        let channel = |c: f64| (clamp(linear_to_srgb(c), 0.0, 1.0) * 255.0).round() as u8;
        RGBColor {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_hex_byte_round_trip() {
        // stride through the RGB cube rather than testing all 16 million colors
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(51) {
                for b in (0..=255u16).step_by(85) {
                    let rgb = RGBColor {
                        r: r as u8,
                        g: g as u8,
                        b: b as u8,
                    };
                    let back = RGBColor::from_hex_code(&rgb.to_string()).unwrap();
                    assert_eq!(rgb, back);
                }
            }
        }
    }

    #[test]
    fn test_from_hex_code_spellings() {
        let expected = RGBColor { r: 255, g: 87, b: 51 };
        assert_eq!(RGBColor::from_hex_code("#FF5733").unwrap(), expected);
        assert_eq!(RGBColor::from_hex_code("ff5733").unwrap(), expected);
        assert_eq!(RGBColor::from_hex_code(" #Ff5733 ").unwrap(), expected);
        assert_eq!(
            RGBColor::from_hex_code("#abc").unwrap(),
            RGBColor { r: 170, g: 187, b: 204 }
        );
        assert!(RGBColor::from_hex_code("#12345").is_err());
    }

    #[test]
    fn test_decimal_value() {
        assert_eq!(RGBColor { r: 255, g: 87, b: 51 }.decimal(), 16733491);
        assert_eq!(RGBColor { r: 0, g: 0, b: 0 }.decimal(), 0);
        assert_eq!(RGBColor { r: 255, g: 255, b: 255 }.decimal(), 16777215);
    }

    #[test]
    fn test_transfer_function_endpoints() {
        assert!(approx_eq!(f64, srgb_to_linear(0.0), 0.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, srgb_to_linear(1.0), 1.0, epsilon = 1e-12));
        // the inverse really is an inverse
        for c in [0.0, 0.02, 0.04045, 0.2, 0.5, 0.9, 1.0] {
            assert!(approx_eq!(
                f64,
                linear_to_srgb(srgb_to_linear(c)),
                c,
                epsilon = 1e-9
            ));
        }
    }

    #[test]
    fn test_white_lands_on_the_white_point() {
        let white = RGBColor { r: 255, g: 255, b: 255 };
        let xyz = white.to_xyz(Illuminant::D50);
        let wp = XYZColor::white_point(Illuminant::D50);
        assert!((xyz.x - wp.x).abs() <= 1e-3);
        assert!((xyz.y - wp.y).abs() <= 1e-3);
        assert!((xyz.z - wp.z).abs() <= 1e-3);
    }

    #[test]
    fn test_rgb_xyz_round_trip() {
        for hex in ["#FF5733", "#0B3D91", "#7B5B3A", "#D5C4A1", "#000000", "#FFFFFF"] {
            let rgb = RGBColor::from_hex_code(hex).unwrap();
            let back = RGBColor::from_xyz(rgb.to_xyz(Illuminant::D50));
            // one unit of byte slack: the matrix and adaptation round-trip isn't exact
            assert!(i16::from(rgb.r).abs_diff(i16::from(back.r)) <= 1);
            assert!(i16::from(rgb.g).abs_diff(i16::from(back.g)) <= 1);
            assert!(i16::from(rgb.b).abs_diff(i16::from(back.b)) <= 1);
        }
    }

    #[test]
    fn test_adaptation_identity_and_white_mapping() {
        let d65_white = XYZColor::white_point(Illuminant::D65);
        let same = d65_white.color_adapt(Illuminant::D65);
        assert!(approx_eq!(f64, same.x, d65_white.x, epsilon = 1e-12));
        let d50 = d65_white.color_adapt(Illuminant::D50);
        let d50_white = XYZColor::white_point(Illuminant::D50);
        assert!((d50.x - d50_white.x).abs() <= 1e-6);
        assert!((d50.y - d50_white.y).abs() <= 1e-6);
        assert!((d50.z - d50_white.z).abs() <= 1e-6);
    }
}
