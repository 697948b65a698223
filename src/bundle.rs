//! This module assembles the full set of outward-facing representations for one color: the
//! payload a converter page or API response is rendered from. Internally every space carries full
//! `f64` precision; this is the one place display rounding happens, with each field rounded the
//! way the catalog quotes it (integer HSL, two-decimal HSV percentages, three-decimal CIE values,
//! XYZ scaled by 100, and so on). A bundle is a pure function of its normalized hex: building the
//! same color twice yields bit-identical results, which is also why the optional [`BundleCache`]
//! is allowed to exist.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::color::{round_to, Color, RGBColor};
use crate::colors::{
    CIELABColor, CIELUVColor, CMYKColor, HSLColor, HSVColor, HunterLabColor, YIQColor,
};
use crate::hex::{normalize, ColorParseError};
use crate::illuminants::Illuminant;
use crate::photometry;

/// RGB as percentages of full scale, two decimals per channel.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RgbPercent {
    /// Red, 0–100.
    pub r: f64,
    /// Green, 0–100.
    pub g: f64,
    /// Blue, 0–100.
    pub b: f64,
}

/// HSL in display form: integer degrees and integer percentages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HslValues {
    /// Hue in degrees, [0, 360).
    pub h: u16,
    /// Saturation as a percentage, 0–100.
    pub s: u8,
    /// Lightness as a percentage, 0–100.
    pub l: u8,
}

/// HSV in display form: integer degrees, percentages with two decimals.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HsvValues {
    /// Hue in degrees, [0, 360).
    pub h: u16,
    /// Saturation as a percentage, 0–100, two decimals.
    pub s: f64,
    /// Value as a percentage, 0–100, two decimals.
    pub v: f64,
}

/// CMYK in display form: integer ink percentages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmykValues {
    /// Cyan percentage.
    pub c: u8,
    /// Magenta percentage.
    pub m: u8,
    /// Yellow percentage.
    pub y: u8,
    /// Black percentage.
    pub k: u8,
}

/// CIE XYZ in display form: the conventional 0–100 scale, three decimals.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XyzValues {
    /// X, scaled by 100.
    pub x: f64,
    /// Y, scaled by 100.
    pub y: f64,
    /// Z, scaled by 100.
    pub z: f64,
}

/// CIELAB in display form, three decimals.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabValues {
    /// L\*, 0–100.
    pub l: f64,
    /// a\*, green-red axis.
    pub a: f64,
    /// b\*, blue-yellow axis.
    pub b: f64,
}

/// CIELUV in display form, three decimals.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuvValues {
    /// L\*, 0–100.
    pub l: f64,
    /// u\*, red-green axis.
    pub u: f64,
    /// v\*, yellow-blue axis.
    pub v: f64,
}

/// Hunter Lab in display form, three decimals.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HunterLabValues {
    /// Hunter L, 0–100.
    pub l: f64,
    /// Hunter a, green-red axis.
    pub a: f64,
    /// Hunter b, blue-yellow axis.
    pub b: f64,
}

/// YIQ in display form: the 255-scaled convention, three decimals.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct YiqValues {
    /// Luma, 0–255.
    pub y: f64,
    /// In-phase chroma.
    pub i: f64,
    /// Quadrature chroma.
    pub q: f64,
}

/// Every outward-facing representation of one color, display-rounded, ready to render or
/// serialize. Built once per normalized hex; a pure function of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorFormatBundle {
    /// The canonical `#RRGGBB` form.
    pub hex: String,
    /// The byte RGB triple.
    pub rgb: RGBColor,
    /// RGB as percentages.
    pub rgb_percent: RgbPercent,
    /// HSL, integer display form.
    pub hsl: HslValues,
    /// HSV display form.
    pub hsv: HsvValues,
    /// CMYK ink percentages.
    pub cmyk: CmykValues,
    /// CIE XYZ on the 0–100 scale, D50.
    pub xyz: XyzValues,
    /// CIELAB, D50.
    pub lab: LabValues,
    /// CIELUV, D50.
    pub luv: LuvValues,
    /// Hunter Lab, D50.
    pub hunter_lab: HunterLabValues,
    /// NTSC YIQ, 255-scaled.
    pub yiq: YiqValues,
    /// The 24-bit integer value of the hex code.
    pub decimal: u32,
    /// The Light Reflectance Value, 0–100, one decimal.
    pub lrv: f64,
    /// Whether overlay text on this color should be dark.
    pub needs_dark_text: bool,
}

impl ColorFormatBundle {
    /// Builds the bundle for any valid spelling of a hex color.
    ///
    /// # Errors
    /// Returns [`ColorParseError::InvalidColorFormat`] if the input does not normalize.
    ///
    /// # Examples
    /// ```
    /// # use madder::bundle::ColorFormatBundle;
    /// let bundle = ColorFormatBundle::from_hex("#FF5733").unwrap();
    /// assert_eq!(bundle.hex, "#FF5733");
    /// assert_eq!((bundle.rgb.r, bundle.rgb.g, bundle.rgb.b), (255, 87, 51));
    /// assert_eq!(bundle.decimal, 16733491);
    /// ```
    pub fn from_hex(input: &str) -> Result<ColorFormatBundle, ColorParseError> {
        let hex = normalize(input)?;
        let rgb = RGBColor::from_hex_code(&hex)?;
        let xyz = rgb.to_xyz(Illuminant::D50);
        let hsl: HSLColor = rgb.convert();
        let hsv: HSVColor = rgb.convert();
        let cmyk = CMYKColor::from_rgb(&rgb);
        let lab: CIELABColor = rgb.convert();
        let luv: CIELUVColor = rgb.convert();
        let hunter: HunterLabColor = rgb.convert();
        let yiq = YIQColor::from_rgb(&rgb);

        let degrees = |h: f64| (h.round() as u16) % 360;
        let pct_byte = |frac: f64| (frac * 100.0).round() as u8;

        Ok(ColorFormatBundle {
            rgb,
            rgb_percent: RgbPercent {
                r: round_to(f64::from(rgb.r) / 255.0 * 100.0, 2),
                g: round_to(f64::from(rgb.g) / 255.0 * 100.0, 2),
                b: round_to(f64::from(rgb.b) / 255.0 * 100.0, 2),
            },
            hsl: HslValues {
                h: degrees(hsl.h),
                s: pct_byte(hsl.s),
                l: pct_byte(hsl.l),
            },
            hsv: HsvValues {
                h: degrees(hsv.h),
                s: round_to(hsv.s * 100.0, 2),
                v: round_to(hsv.v * 100.0, 2),
            },
            cmyk: CmykValues {
                c: pct_byte(cmyk.c),
                m: pct_byte(cmyk.m),
                y: pct_byte(cmyk.y),
                k: pct_byte(cmyk.k),
            },
            xyz: XyzValues {
                x: round_to(xyz.x * 100.0, 3),
                y: round_to(xyz.y * 100.0, 3),
                z: round_to(xyz.z * 100.0, 3),
            },
            lab: LabValues {
                l: round_to(lab.l, 3),
                a: round_to(lab.a, 3),
                b: round_to(lab.b, 3),
            },
            luv: LuvValues {
                l: round_to(luv.l, 3),
                u: round_to(luv.u, 3),
                v: round_to(luv.v, 3),
            },
            hunter_lab: HunterLabValues {
                l: round_to(hunter.l, 3),
                a: round_to(hunter.a, 3),
                b: round_to(hunter.b, 3),
            },
            yiq: YiqValues {
                y: round_to(yiq.y, 3),
                i: round_to(yiq.i, 3),
                q: round_to(yiq.q, 3),
            },
            decimal: rgb.decimal(),
            lrv: photometry::light_reflectance_value(&rgb),
            needs_dark_text: photometry::needs_dark_text(&rgb),
            hex,
        })
    }
}

/// A concurrent memo of bundles keyed by normalized hex. Purely an optimization: a bundle is
/// cheap to compute and a pure function of its key, so the only contract worth having is
/// compute-or-fetch with at most one computation per key, which holding the lock across the
/// computation provides.
#[derive(Debug, Default)]
pub struct BundleCache {
    inner: Mutex<HashMap<String, Arc<ColorFormatBundle>>>,
}

impl BundleCache {
    /// Creates an empty cache.
    pub fn new() -> BundleCache {
        BundleCache::default()
    }

    /// Returns the cached bundle for the color, building and caching it on first sight.
    ///
    /// # Errors
    /// Returns [`ColorParseError::InvalidColorFormat`] if the input does not normalize; nothing
    /// is cached for invalid input.
    pub fn get_or_build(&self, input: &str) -> Result<Arc<ColorFormatBundle>, ColorParseError> {
        let hex = normalize(input)?;
        let mut map = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(bundle) = map.get(&hex) {
            return Ok(Arc::clone(bundle));
        }
        let bundle = Arc::new(ColorFormatBundle::from_hex(&hex)?);
        map.insert(hex, Arc::clone(&bundle));
        Ok(bundle)
    }
}
