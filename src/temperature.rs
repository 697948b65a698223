//! This module estimates a correlated color temperature for a catalog color, in Kelvin, together
//! with the Warm/Neutral/Cool label the browsing pages filter on. To be clear about what this is:
//! a surface color is not a black-body radiator, so there is no physically meaningful temperature
//! to measure here. What this module does is map the color's CIELAB coordinates onto the Kelvin
//! scale people know from light bulbs, such that candle-ish colors land near 3000 K and sky-ish
//! colors land near 7000 K. The constants are tuned by eye against the catalog, not derived; treat
//! the Kelvin number as a hint, and the three-way classification as the real output.
//!
//! The qualitative contract is: near-achromatic colors are Neutral, a yellow or red bias reads
//! Warm, a blue bias reads Cool, and very dark or very light or washed-out colors are pulled back
//! toward Neutral because a near-black or near-white swatch doesn't read as warm or cool at all.

use num::clamp;
use serde::{Deserialize, Serialize};

use crate::color::{Color, RGBColor};
use crate::colors::cielabcolor::CIELABColor;
use crate::hex::ColorParseError;

/// Chroma below which a color is treated as achromatic and classified Neutral outright.
const ACHROMATIC_CHROMA: f64 = 8.0;
/// The Kelvin band achromatic colors are confined to, darkest to lightest.
const NEUTRAL_BAND: (f64, f64) = (4200.0, 5400.0);
/// The anchor temperature for a color with no warm or cool bias.
const NEUTRAL_KELVIN: f64 = 5000.0;
/// Base Kelvin-per-warmth-unit slope, and the extra slope added per unit of warmth magnitude so
/// that strongly biased colors move faster toward the ends of the scale.
const SLOPE: f64 = 18.0;
const SLOPE_GAIN: f64 = 0.15;
/// Chroma at which a color counts as fully saturated for damping purposes.
const FULL_CHROMA: f64 = 40.0;
/// Lightness limits outside which the estimate is damped toward neutral.
const DARK_LIGHTNESS: f64 = 20.0;
const LIGHT_LIGHTNESS: f64 = 85.0;
/// The Kelvin range the estimate is clamped to.
const KELVIN_RANGE: (f64, f64) = (2700.0, 7500.0);
/// Classification cut points: below the first is Warm, above the second is Cool.
const WARM_BELOW: u32 = 4200;
const COOL_ABOVE: u32 = 5800;

/// The three-way temperature label used by the catalog's browsing filters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureClass {
    /// Reads as warm: yellows, oranges, reds, browns.
    Warm,
    /// No strong bias either way, or too dark/light/washed-out to tell.
    Neutral,
    /// Reads as cool: blues and blue-leaning violets and greens.
    Cool,
}

/// An estimated color temperature: the Kelvin figure and its classification.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureEstimate {
    /// The approximate correlated color temperature, clamped to [2700, 7500].
    pub kelvin: u32,
    /// The Warm/Neutral/Cool reading of the Kelvin figure.
    pub class: TemperatureClass,
}

impl TemperatureClass {
    fn from_kelvin(kelvin: u32) -> TemperatureClass {
        if kelvin < WARM_BELOW {
            TemperatureClass::Warm
        } else if kelvin > COOL_ABOVE {
            TemperatureClass::Cool
        } else {
            TemperatureClass::Neutral
        }
    }
}

/// Estimates the color temperature of a color from its CIELAB coordinates.
pub fn estimate(lab: &CIELABColor) -> TemperatureEstimate {
    let chroma = lab.a.hypot(lab.b);

    if chroma < ACHROMATIC_CHROMA {
        // a gray has no hue to be warm or cool about: spread the neutral band by lightness, light
        // grays reading slightly cooler the way white paper does
        let kelvin = NEUTRAL_BAND.0 + clamp(lab.l / 100.0, 0.0, 1.0) * (NEUTRAL_BAND.1 - NEUTRAL_BAND.0);
        return TemperatureEstimate {
            kelvin: kelvin.round() as u32,
            class: TemperatureClass::Neutral,
        };
    }

    // warmth is dominated by the yellow-blue axis, with a partial contribution from redness:
    // positive b* and positive a* both push warm, negative b* pushes cool
    let warmth = lab.b + 0.35 * lab.a.max(0.0);
    let raw = NEUTRAL_KELVIN - warmth * (SLOPE + SLOPE_GAIN * warmth.abs());

    // damp toward neutral when the color is washed out or sits at the ends of the lightness scale
    let chroma_factor = clamp(chroma / FULL_CHROMA, 0.0, 1.0);
    let lightness_factor = if lab.l < DARK_LIGHTNESS {
        clamp(lab.l / DARK_LIGHTNESS, 0.0, 1.0)
    } else if lab.l > LIGHT_LIGHTNESS {
        clamp((100.0 - lab.l) / (100.0 - LIGHT_LIGHTNESS), 0.0, 1.0)
    } else {
        1.0
    };
    let blended = NEUTRAL_KELVIN + (raw - NEUTRAL_KELVIN) * chroma_factor * lightness_factor;

    let kelvin = clamp(blended, KELVIN_RANGE.0, KELVIN_RANGE.1).round() as u32;
    TemperatureEstimate {
        kelvin,
        class: TemperatureClass::from_kelvin(kelvin),
    }
}

/// Convenience entry point for callers holding a hex code rather than a Lab value.
///
/// # Errors
/// Returns [`ColorParseError::InvalidColorFormat`] if the input does not normalize.
pub fn estimate_hex(hex: &str) -> Result<TemperatureEstimate, ColorParseError> {
    let rgb = RGBColor::from_hex_code(hex)?;
    Ok(estimate(&rgb.convert()))
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_achromatic_colors_are_neutral() {
        for hex in ["#808080", "#000000", "#FFFFFF", "#F3F3F3"] {
            let est = estimate_hex(hex).unwrap();
            assert_eq!(est.class, TemperatureClass::Neutral, "{}", hex);
            assert!(est.kelvin >= 4200 && est.kelvin <= 5400, "{}", hex);
        }
        // darker grays sit at the warm end of the neutral band
        let dark = estimate_hex("#333333").unwrap();
        let light = estimate_hex("#DDDDDD").unwrap();
        assert!(dark.kelvin < light.kelvin);
    }

    #[test]
    fn test_yellow_and_red_bias_reads_warm() {
        // chocolate: strong positive b* with a healthy a*
        assert_eq!(
            estimate_hex("#D2691E").unwrap().class,
            TemperatureClass::Warm
        );
        let gold = estimate(&CIELABColor {
            l: 70.0,
            a: 10.0,
            b: 60.0,
        });
        assert_eq!(gold.class, TemperatureClass::Warm);
        assert!(gold.kelvin >= 2700);
    }

    #[test]
    fn test_blue_bias_reads_cool() {
        assert_eq!(
            estimate_hex("#0000FF").unwrap().class,
            TemperatureClass::Cool
        );
        let sky = estimate(&CIELABColor {
            l: 60.0,
            a: -5.0,
            b: -45.0,
        });
        assert_eq!(sky.class, TemperatureClass::Cool);
        assert!(sky.kelvin <= 7500);
    }

    #[test]
    fn test_extremes_are_damped_toward_neutral() {
        // a very dark red: chromatic, but too dark to read warm
        let ember = estimate(&CIELABColor {
            l: 3.0,
            a: 12.0,
            b: 4.0,
        });
        assert_eq!(ember.class, TemperatureClass::Neutral);
        assert!((i64::from(ember.kelvin) - 5000).abs() < 200);

        // a barely tinted near-white likewise
        let ivory = estimate(&CIELABColor {
            l: 98.0,
            a: -2.0,
            b: 12.0,
        });
        assert_eq!(ivory.class, TemperatureClass::Neutral);
    }

    #[test]
    fn test_kelvin_is_always_in_range() {
        let screaming_yellow = estimate(&CIELABColor {
            l: 50.0,
            a: 20.0,
            b: 110.0,
        });
        assert_eq!(screaming_yellow.kelvin, 2700);
        let deepest_blue = estimate(&CIELABColor {
            l: 50.0,
            a: 0.0,
            b: -120.0,
        });
        assert_eq!(deepest_blue.kelvin, 7500);
    }
}
