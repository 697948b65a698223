//! This module computes the photometric quantities the catalog pages are built around: relative
//! luminance, the Light Reflectance Value quoted on every color's detail page, the WCAG contrast
//! ratio between two colors, and the dark-or-light overlay text decision. All of them come down
//! to the same number, the Rec. 709 weighted sum of the linear RGB channels, so they live
//! together here. Everything is a pure function of byte RGB input.

use serde::{Deserialize, Serialize};

use crate::color::{round_to, RGBColor};

/// Luminance above which overlay text on the color swatch must be dark to stay readable.
const DARK_TEXT_THRESHOLD: f64 = 0.179;

/// The relative luminance of a color: the Rec. 709 weighted sum of its linear RGB channels,
/// ranging from 0.0 for black to 1.0 for white. This is photometric brightness, not the
/// perceptual lightness of CIELAB.
pub fn relative_luminance(rgb: &RGBColor) -> f64 {
    let lin = rgb.to_linear();
    0.2126 * lin.r + 0.7152 * lin.g + 0.0722 * lin.b
}

/// The Light Reflectance Value of a color: the percentage of incident light it reflects, used in
/// architectural and interior contexts. Luminance scaled to [0, 100] and rounded to one decimal,
/// the precision the catalog quotes.
pub fn light_reflectance_value(rgb: &RGBColor) -> f64 {
    round_to(relative_luminance(rgb) * 100.0, 1)
}

/// Whether overlay text on a swatch of this color needs to be dark. Light backgrounds take dark
/// text; the threshold is fixed.
pub fn needs_dark_text(rgb: &RGBColor) -> bool {
    relative_luminance(rgb) > DARK_TEXT_THRESHOLD
}

/// The WCAG contrast ratio between two colors: `(lighter + 0.05) / (darker + 0.05)` over their
/// luminances, rounded to two decimals. Symmetric in its arguments, and ranges from 1.0 for
/// identical colors to 21.0 for black on white.
pub fn contrast_ratio(first: &RGBColor, second: &RGBColor) -> f64 {
    let l1 = relative_luminance(first);
    let l2 = relative_luminance(second);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    round_to((lighter + 0.05) / (darker + 0.05), 2)
}

/// The WCAG 2.1 pass/fail verdicts for a contrast ratio, at both conformance levels and both text
/// sizes. The catalog's comparison page shows all four.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContrastGrade {
    /// Level AA for normal text: ratio at least 4.5.
    pub aa: bool,
    /// Level AA for large text: ratio at least 3.0.
    pub aa_large: bool,
    /// Level AAA for normal text: ratio at least 7.0.
    pub aaa: bool,
    /// Level AAA for large text: ratio at least 4.5.
    pub aaa_large: bool,
}

impl ContrastGrade {
    /// Grades a contrast ratio against the WCAG thresholds.
    pub fn from_ratio(ratio: f64) -> ContrastGrade {
        ContrastGrade {
            aa: ratio >= 4.5,
            aa_large: ratio >= 3.0,
            aaa: ratio >= 7.0,
            aaa_large: ratio >= 4.5,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    const BLACK: RGBColor = RGBColor { r: 0, g: 0, b: 0 };
    const WHITE: RGBColor = RGBColor { r: 255, g: 255, b: 255 };

    #[test]
    fn test_luminance_boundaries() {
        assert!(approx_eq!(f64, relative_luminance(&BLACK), 0.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, relative_luminance(&WHITE), 1.0, epsilon = 1e-9));
        assert_eq!(light_reflectance_value(&BLACK), 0.0);
        assert_eq!(light_reflectance_value(&WHITE), 100.0);
    }

    #[test]
    fn test_lrv_of_a_mid_color() {
        let orange = RGBColor { r: 255, g: 87, b: 51 };
        let lrv = light_reflectance_value(&orange);
        assert!((lrv - 28.3).abs() <= 0.3);
    }

    #[test]
    fn test_dark_text_decision() {
        assert!(needs_dark_text(&WHITE));
        assert!(!needs_dark_text(&BLACK));
        // the gray ramp crosses the threshold between byte 117 and 118
        assert!(!needs_dark_text(&RGBColor { r: 117, g: 117, b: 117 }));
        assert!(needs_dark_text(&RGBColor { r: 118, g: 118, b: 118 }));
    }

    #[test]
    fn test_contrast_ratio_extremes_and_symmetry() {
        assert_eq!(contrast_ratio(&BLACK, &WHITE), 21.0);
        assert_eq!(contrast_ratio(&WHITE, &BLACK), 21.0);
        assert_eq!(contrast_ratio(&WHITE, &WHITE), 1.0);

        let a = RGBColor { r: 255, g: 87, b: 51 };
        let b = RGBColor { r: 11, g: 69, b: 124 };
        assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
        let ratio = contrast_ratio(&a, &b);
        assert!(ratio >= 1.0 && ratio <= 21.0);
    }

    #[test]
    fn test_known_wcag_reference_pair() {
        // #767676 on white is the canonical "just passes AA" gray
        let gray = RGBColor { r: 118, g: 118, b: 118 };
        let ratio = contrast_ratio(&gray, &WHITE);
        assert!((ratio - 4.54).abs() <= 0.05);
        let grade = ContrastGrade::from_ratio(ratio);
        assert!(grade.aa && grade.aa_large && grade.aaa_large);
        assert!(!grade.aaa);
    }
}
