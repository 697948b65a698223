//! This module implements the CIELUV color specification, which was adopted concurrently with
//! CIELAB. CIELUV is very similar to CIELAB, but with the difference that u and v are built from
//! the CIE 1976 UCS chromaticity diagram: u roughly equates to red vs. green and v to yellow vs.
//! blue. The catalog's converter page lists it alongside CIELAB because print workflows still ask
//! for it.

use serde::{Deserialize, Serialize};

use crate::color::{Color, XYZColor};
use crate::coord::Coord;
use crate::illuminants::Illuminant;

/// A color in the CIELUV space, relative to the D50 white point.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct CIELUVColor {
    /// The luminance component of LUV. Ranges from 0 to 100 by definition, and matches CIELAB's L
    /// exactly.
    pub l: f64,
    /// The component that roughly equates to how red vs. how green the color is.
    pub u: f64,
    /// The component that roughly equates to how yellow vs. how blue the color is.
    pub v: f64,
}

impl Color for CIELUVColor {
    /// Given an XYZ color, gets a new CIELUV color. This is CIELUV D50, so anything else is
    /// chromatically adapted before conversion.
    fn from_xyz(xyz: XYZColor) -> CIELUVColor {
        // https://en.wikipedia.org/wiki/CIELUV
        let xyz_c = xyz.color_adapt(Illuminant::D50);
        let wp = XYZColor::white_point(Illuminant::D50);
        let denom = |color: XYZColor| color.x + 15.0 * color.y + 3.0 * color.z;
        // black has no chromaticity: the u'v' quotient would be 0/0
        if denom(xyz_c) <= 0.0 {
            return CIELUVColor {
                l: 0.0,
                u: 0.0,
                v: 0.0,
            };
        }
        let u_func = |color: XYZColor| 4.0 * color.x / denom(color);
        let v_func = |color: XYZColor| 9.0 * color.y / denom(color);

        let u_prime_n = u_func(wp);
        let v_prime_n = v_func(wp);
        let u_prime = u_func(xyz_c);
        let v_prime = v_func(xyz_c);

        let delta: f64 = 6.0 / 29.0; // like CIELAB

        let y_scaled = xyz_c.y / wp.y;
        let l = if y_scaled <= delta.powi(3) {
            (2.0 / delta).powi(3) * y_scaled
        } else {
            116.0 * y_scaled.powf(1.0 / 3.0) - 16.0
        };

        let u = 13.0 * l * (u_prime - u_prime_n);
        let v = 13.0 * l * (v_prime - v_prime_n);
        CIELUVColor { l, u, v }
    }
    /// Returns a new `XYZColor` that matches the given color. This is CIELUV D50, so any other
    /// illuminant is chromatically adapted after initial conversion.
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        let wp = XYZColor::white_point(Illuminant::D50);
        // L of 0 is black no matter what u and v claim, and dividing by 13L would blow up
        if self.l <= 0.0 {
            return XYZColor {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                illuminant: Illuminant::D50,
            }
            .color_adapt(illuminant);
        }
        let denom = |color: XYZColor| color.x + 15.0 * color.y + 3.0 * color.z;
        let u_func = |color: XYZColor| 4.0 * color.x / denom(color);
        let v_func = |color: XYZColor| 9.0 * color.y / denom(color);
        let u_prime = self.u / (13.0 * self.l) + u_func(wp);
        let v_prime = self.v / (13.0 * self.l) + v_func(wp);

        let delta: f64 = 6.0 / 29.0;

        let y = if self.l <= 8.0 {
            wp.y * self.l * (delta / 2.0).powi(3)
        } else {
            wp.y * ((self.l + 16.0) / 116.0).powi(3)
        };

        let x = y * 9.0 * u_prime / (4.0 * v_prime);
        let z = y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime);
        XYZColor {
            x,
            y,
            z,
            illuminant: Illuminant::D50,
        }
        .color_adapt(illuminant)
    }
}

impl From<Coord> for CIELUVColor {
    fn from(c: Coord) -> CIELUVColor {
        CIELUVColor {
            l: c.x,
            u: c.y,
            v: c.z,
        }
    }
}

impl From<CIELUVColor> for Coord {
    fn from(luv: CIELUVColor) -> Coord {
        Coord {
            x: luv.l,
            y: luv.u,
            z: luv.v,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::color::RGBColor;

    #[test]
    fn test_white_point_is_origin_of_chromaticity() {
        let white: CIELUVColor = RGBColor { r: 255, g: 255, b: 255 }.convert();
        assert!((white.l - 100.0).abs() <= 0.05);
        assert!(white.u.abs() <= 0.1);
        assert!(white.v.abs() <= 0.1);
    }

    #[test]
    fn test_black_is_guarded() {
        let black: CIELUVColor = RGBColor { r: 0, g: 0, b: 0 }.convert();
        assert_eq!((black.l, black.u, black.v), (0.0, 0.0, 0.0));
        // and back out again without dividing by zero
        let xyz = black.to_xyz(Illuminant::D50);
        assert!(xyz.x.abs() <= 1e-12 && xyz.y.abs() <= 1e-12 && xyz.z.abs() <= 1e-12);
    }

    #[test]
    fn test_cieluv_xyz_round_trip() {
        let xyz = XYZColor {
            x: 0.3,
            y: 0.53,
            z: 0.65,
            illuminant: Illuminant::D50,
        };
        let luv = CIELUVColor::from_xyz(xyz);
        let xyz2 = luv.to_xyz(Illuminant::D50);
        assert!((xyz.x - xyz2.x).abs() <= 1e-9);
        assert!((xyz.y - xyz2.y).abs() <= 1e-9);
        assert!((xyz.z - xyz2.z).abs() <= 1e-9);
    }
}
