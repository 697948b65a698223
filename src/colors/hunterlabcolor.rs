//! This module implements the Hunter Lab space, the 1948 predecessor of CIELAB. It shares the
//! opponent-axis idea (L for lightness, a for green-red, b for blue-yellow) but uses square roots
//! instead of cube roots, which makes it over-compress shadows where CIELAB over-compresses
//! highlights. Paint and coatings datasheets still quote Hunter values, so the catalog's converter
//! page carries it; like the CIE spaces here it is relative to the D50 white point.

use serde::{Deserialize, Serialize};

use crate::color::{Color, XYZColor};
use crate::coord::Coord;
use crate::illuminants::Illuminant;

/// A color in the Hunter Lab space, relative to the D50 white point.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct HunterLabColor {
    /// The lightness, 0 for black to 100 for the reference white.
    pub l: f64,
    /// The green-red opponent axis, negative toward green.
    pub a: f64,
    /// The blue-yellow opponent axis, negative toward blue.
    pub b: f64,
}

/// The illuminant-dependent chromaticity coefficients of the Hunter space. The magic numbers
/// normalize so that illuminant C gets the historical Ka of 175 and Kb of 70.
fn coefficients(illuminant: Illuminant) -> (f64, f64) {
    let wp = illuminant.white_point();
    let ka = 175.0 / 198.04 * (wp[0] + wp[1]);
    let kb = 70.0 / 218.11 * (wp[1] + wp[2]);
    (ka, kb)
}

impl Color for HunterLabColor {
    /// Converts from XYZ, adapting to D50 first.
    fn from_xyz(xyz: XYZColor) -> HunterLabColor {
        let xyz_c = xyz.color_adapt(Illuminant::D50);
        let wp = XYZColor::white_point(Illuminant::D50);
        let xr = xyz_c.x / wp.x;
        let yr = xyz_c.y / wp.y;
        let zr = xyz_c.z / wp.z;
        if yr <= 0.0 {
            // black: the shared sqrt(Y/Yn) factor is 0 and the quotients below would be 0/0
            return HunterLabColor {
                l: 0.0,
                a: 0.0,
                b: 0.0,
            };
        }
        let (ka, kb) = coefficients(Illuminant::D50);
        let root = yr.sqrt();
        HunterLabColor {
            l: 100.0 * root,
            a: ka * ((xr - yr) / root),
            b: kb * ((yr - zr) / root),
        }
    }
    /// Returns the matching XYZ color, produced in D50 and adapted from there if needed.
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        let wp = XYZColor::white_point(Illuminant::D50);
        if self.l <= 0.0 {
            return XYZColor {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                illuminant: Illuminant::D50,
            }
            .color_adapt(illuminant);
        }
        let (ka, kb) = coefficients(Illuminant::D50);
        let root = self.l / 100.0;
        let yr = root * root;
        let xr = self.a * root / ka + yr;
        let zr = yr - self.b * root / kb;
        XYZColor {
            x: xr * wp.x,
            y: yr * wp.y,
            z: zr * wp.z,
            illuminant: Illuminant::D50,
        }
        .color_adapt(illuminant)
    }
}

impl From<Coord> for HunterLabColor {
    fn from(c: Coord) -> HunterLabColor {
        HunterLabColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl From<HunterLabColor> for Coord {
    fn from(hlab: HunterLabColor) -> Coord {
        Coord {
            x: hlab.l,
            y: hlab.a,
            z: hlab.b,
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
        let white: HunterLabColor = RGBColor { r: 255, g: 255, b: 255 }.convert();
        assert!((white.l - 100.0).abs() <= 0.05);
        assert!(white.a.abs() <= 0.2);
        assert!(white.b.abs() <= 0.2);

        let black: HunterLabColor = RGBColor { r: 0, g: 0, b: 0 }.convert();
        assert_eq!((black.l, black.a, black.b), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_shadow_compression_is_gentler_than_cielab() {
        // the square root lifts dark colors less than CIELAB's cube root does
        use crate::colors::cielabcolor::CIELABColor;
        let dark = RGBColor { r: 40, g: 40, b: 40 };
        let hunter: HunterLabColor = dark.convert();
        let cielab: CIELABColor = dark.convert();
        assert!(hunter.l < cielab.l);
    }

    #[test]
    fn test_hunter_xyz_round_trip() {
        let xyz = XYZColor {
            x: 0.35,
            y: 0.42,
            z: 0.30,
            illuminant: Illuminant::D50,
        };
        let hunter = HunterLabColor::from_xyz(xyz);
        let xyz2 = hunter.to_xyz(Illuminant::D50);
        assert!((xyz.x - xyz2.x).abs() <= 1e-9);
        assert!((xyz.y - xyz2.y).abs() <= 1e-9);
        assert!((xyz.z - xyz2.z).abs() <= 1e-9);
    }
}
