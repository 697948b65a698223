//! This module implements the YIQ space of NTSC analog television: a luma channel and two chroma
//! channels laid along the orange-blue and purple-green axes that human vision is most and least
//! sensitive to. Nobody broadcasts NTSC anymore, but the luma channel is still a decent one-number
//! brightness and the converter page lists YIQ alongside the other device spaces. Components here
//! follow the catalog's output convention of being scaled by 255, so white is `(255, 0, 0)`.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::color::{Color, RGBColor, XYZColor};
use crate::consts;
use crate::coord::Coord;
use crate::illuminants::Illuminant;

/// A color in the NTSC YIQ space, scaled by 255.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct YIQColor {
    /// The luma component, in [0, 255].
    pub y: f64,
    /// The in-phase chroma component, roughly the orange-blue axis, in about [-152, 152].
    pub i: f64,
    /// The quadrature chroma component, roughly the purple-green axis, in about [-134, 134].
    pub q: f64,
}

impl YIQColor {
    /// Applies the NTSC matrix to a normalized RGB color, then scales back by 255.
    pub fn from_rgb(rgb: &RGBColor) -> YIQColor {
        let yiq = consts::YIQ_TRANSFORM_MAT()
            * Vector3::new(
                f64::from(rgb.r) / 255.0,
                f64::from(rgb.g) / 255.0,
                f64::from(rgb.b) / 255.0,
            );
        YIQColor {
            y: yiq[0] * 255.0,
            i: yiq[1] * 255.0,
            q: yiq[2] * 255.0,
        }
    }

    /// Applies the inverse NTSC matrix, clamping the result into the RGB byte cube.
    pub fn to_rgb(&self) -> RGBColor {
        let rgb = consts::inv(consts::YIQ_TRANSFORM_MAT())
            * Vector3::new(self.y / 255.0, self.i / 255.0, self.q / 255.0);
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        RGBColor {
            r: byte(rgb[0]),
            g: byte(rgb[1]),
            b: byte(rgb[2]),
        }
    }
}

impl Color for YIQColor {
    /// Converts through sRGB.
    fn from_xyz(xyz: XYZColor) -> YIQColor {
        YIQColor::from_rgb(&RGBColor::from_xyz(xyz))
    }
    /// Converts through sRGB.
    fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        self.to_rgb().to_xyz(illuminant)
    }
}

impl From<Coord> for YIQColor {
    fn from(c: Coord) -> YIQColor {
        YIQColor {
            y: c.x,
            i: c.y,
            q: c.z,
        }
    }
}

impl From<YIQColor> for Coord {
    fn from(yiq: YIQColor) -> Coord {
        Coord {
            x: yiq.y,
            y: yiq.i,
            z: yiq.q,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_white_is_pure_luma() {
        let white = YIQColor::from_rgb(&RGBColor { r: 255, g: 255, b: 255 });
        assert!((white.y - 255.0).abs() <= 1e-9);
        assert!(white.i.abs() <= 1e-9);
        assert!(white.q.abs() <= 1e-9);
    }

    #[test]
    fn test_luma_weights() {
        let red = YIQColor::from_rgb(&RGBColor { r: 255, g: 0, b: 0 });
        assert!((red.y - 0.299 * 255.0).abs() <= 1e-9);
        let green = YIQColor::from_rgb(&RGBColor { r: 0, g: 255, b: 0 });
        assert!((green.y - 0.587 * 255.0).abs() <= 1e-9);
    }

    #[test]
    fn test_yiq_round_trip() {
        for rgb in [
            RGBColor { r: 255, g: 87, b: 51 },
            RGBColor { r: 11, g: 69, b: 124 },
            RGBColor { r: 128, g: 128, b: 128 },
        ] {
            assert_eq!(YIQColor::from_rgb(&rgb).to_rgb(), rgb);
        }
    }
}
