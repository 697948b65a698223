//! This module provides an enum of the illuminants the crate supports, as well as a table of
//! white point values for various CIE illuminants. The source for this table is the ASTM E308
//! standard, copied photographically from the CIE standard itself and normalized so that the Y
//! (luminance) value is 100. D50 is the working illuminant for every outward-facing CIE value in
//! this crate, which matches the convention of the catalog data this library was built around;
//! the others exist so that chromatic adaptation has somewhere to adapt from.

use serde::{Deserialize, Serialize};

/// A listing of the supported CIE standard illuminants, standards that describe a particular set of
/// lighting conditions. The most common ones for computers are D50 and D65, differing kinds of
/// daylight.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Illuminant {
    /// Horizon daylight, the print and catalog reference. The implicit illuminant of every CIELAB,
    /// CIELUV, and Hunter Lab value this crate hands out.
    D50,
    /// Mid-morning daylight.
    D55,
    /// Noon daylight, the sRGB reference white.
    D65,
    /// North-sky daylight.
    D75,
}

/// A table of white point values for the supported CIE illuminants. The order of the rows is the
/// order of the Illuminant enum definition. Each white point is an array of 3 `f64` values X, Y,
/// and Z, normalized so that Y is 100.
pub static ILLUMINANT_WHITE_POINTS: [[f64; 3]; 4] = [
    [96.422, 100.000, 82.521],
    [95.682, 100.000, 92.129],
    [95.047, 100.000, 108.884],
    [94.972, 100.000, 122.638],
];

impl Illuminant {
    /// Gets the XYZ coordinates of the white point value of the illuminant, normalized so Y is 100.
    pub fn white_point(&self) -> [f64; 3] {
        match *self {
            Illuminant::D50 => ILLUMINANT_WHITE_POINTS[0],
            Illuminant::D55 => ILLUMINANT_WHITE_POINTS[1],
            Illuminant::D65 => ILLUMINANT_WHITE_POINTS[2],
            Illuminant::D75 => ILLUMINANT_WHITE_POINTS[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_points_normalized() {
        for wp in &ILLUMINANT_WHITE_POINTS {
            assert!((wp[1] - 100.0).abs() <= 1e-10);
        }
        assert_eq!(Illuminant::D50.white_point(), [96.422, 100.000, 82.521]);
    }
}
