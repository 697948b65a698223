//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). The CIELAB color space is used as
//! a device-independent color space that has an L value for luminance and two opponent color axes
//! for chromaticity (loosely, hue). Formally, the three values that define a CIELAB color are
//! called L\*, a\*, and b\*, but for convenience they are just `L`, `a`, and `b` in this module.
//! CIELAB is the workhorse of this crate: the perceptual difference, the temperature estimate, and
//! the anchor-based family bucketing all take their input from here.

use serde::{Deserialize, Serialize};

use crate::color::{Color, XYZColor};
use crate::coord::Coord;
use crate::illuminants::Illuminant;

/// A color in the CIELAB color space.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The luminance (loosely, brightness) of a given color. 0 is the lowest visible value and
    /// gives black, whereas 100 is the value of diffuse white.
    pub l: f64,
    /// The first opponent color axis, conventionally between -128 and 127, with negative values
    /// toward green and positive toward magenta-red.
    pub a: f64,
    /// The second opponent color axis, conventionally between -128 and 127, with negative values
    /// toward blue and positive toward yellow.
    pub b: f64,
}

impl Color for CIELABColor {
    /// Converts a given CIE XYZ color to CIELAB. Because CIELAB is implicitly in a given
    /// illuminant space, and because the catalog's reference data is published against D50, this
    /// is explicitly CIELAB D50: any other illuminant is adapted to D50 before conversion. This is
    /// in line with programs like Photoshop, which also use CIELAB D50.
    fn from_xyz(xyz: XYZColor) -> CIELABColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        let f = |x: f64| {
            let delta: f64 = 6.0 / 29.0;
            if x <= delta.powi(3) {
                x / (3.0 * delta * delta) + 4.0 / 29.0
            } else {
                x.powf(1.0 / 3.0)
            }
        };
        let white_point = XYZColor::white_point(Illuminant::D50);
        let xyz_adapted = xyz.color_adapt(Illuminant::D50);
        let fx = f(xyz_adapted.x / white_point.x);
        let fy = f(xyz_adapted.y / white_point.y);
        let fz = f(xyz_adapted.z / white_point.z);

        // the transfer above models the nonlinearity of human lightness perception, so these are
        // just simple linear formulae: note how a and b are opponent color axes
        let l = 116.0 * fy - 16.0;
        let a = 500.0 * (fx - fy);
        let b = 200.0 * (fy - fz);
        CIELABColor { l, a, b }
    }
    /// Returns an XYZ color that corresponds to the CIELAB color. Because implicitly every CIELAB
    /// color here is D50, conversion is done by first producing a D50 XYZ color and then using a
    /// chromatic adaptation transform for anything else.
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        // we need the inverse function of the nonlinearity introduced in from_xyz
        let f_inv = |x: f64| {
            let delta: f64 = 6.0 / 29.0;
            if x > delta {
                x * x * x
            } else {
                3.0 * delta * delta * (x - 4.0 / 29.0)
            }
        };
        let wp = XYZColor::white_point(Illuminant::D50);
        let x = wp.x * f_inv((self.l + 16.0) / 116.0 + (self.a / 500.0));
        let y = wp.y * f_inv((self.l + 16.0) / 116.0);
        let z = wp.z * f_inv((self.l + 16.0) / 116.0 - (self.b / 200.0));
        XYZColor {
            x,
            y,
            z,
            illuminant: Illuminant::D50,
        }
        .color_adapt(illuminant)
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl From<CIELABColor> for Coord {
    fn from(lab: CIELABColor) -> Coord {
        Coord {
            x: lab.l,
            y: lab.a,
            z: lab.b,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::color::RGBColor;

    #[test]
    fn test_white_and_black_endpoints() {
        let white: CIELABColor = RGBColor { r: 255, g: 255, b: 255 }.convert();
        assert!((white.l - 100.0).abs() <= 0.05);
        assert!(white.a.abs() <= 0.1);
        assert!(white.b.abs() <= 0.1);

        let black: CIELABColor = RGBColor { r: 0, g: 0, b: 0 }.convert();
        assert!(black.l.abs() <= 1e-6);
        assert!(black.a.abs() <= 1e-6);
        assert!(black.b.abs() <= 1e-6);
    }

    #[test]
    fn test_gray_is_neutral() {
        let gray: CIELABColor = RGBColor { r: 128, g: 128, b: 128 }.convert();
        assert!(gray.a.abs() <= 0.5);
        assert!(gray.b.abs() <= 0.5);
        assert!(gray.l > 50.0 && gray.l < 56.0);
    }

    #[test]
    fn test_primaries_land_in_the_expected_octants() {
        // published D50 values: red about (54, 81, 70), green (88, -79, 81), blue (30, 68, -112)
        let red: CIELABColor = RGBColor { r: 255, g: 0, b: 0 }.convert();
        assert!(red.l > 50.0 && red.l < 58.0);
        assert!(red.a > 75.0 && red.a < 85.0);
        assert!(red.b > 63.0 && red.b < 75.0);

        let green: CIELABColor = RGBColor { r: 0, g: 255, b: 0 }.convert();
        assert!(green.a < -70.0);
        assert!(green.b > 70.0);

        let blue: CIELABColor = RGBColor { r: 0, g: 0, b: 255 }.convert();
        assert!(blue.a > 55.0);
        assert!(blue.b < -100.0);
    }

    #[test]
    fn test_cielab_xyz_round_trip() {
        let xyz = XYZColor {
            x: 0.4,
            y: 0.2,
            z: 0.6,
            illuminant: Illuminant::D50,
        };
        let lab = CIELABColor::from_xyz(xyz);
        let xyz2 = lab.to_xyz(Illuminant::D50);
        assert!((xyz.x - xyz2.x).abs() <= 1e-9);
        assert!((xyz.y - xyz2.y).abs() <= 1e-9);
        assert!((xyz.z - xyz2.z).abs() <= 1e-9);
    }
}
