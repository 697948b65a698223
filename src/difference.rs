//! This module implements perceptual color difference. The catalog's similarity search, its
//! comparison page, and the anchor-based family bucketing all need one number for "how different
//! do these two colors look", and the number that actually tracks human judgment is CIEDE2000
//! (CIE Technical Report 142-2001), with its full set of lightness, chroma, and hue correction
//! terms. The naive Euclidean distance in CIELAB is kept alongside as a baseline: it is cheaper
//! and occasionally useful for coarse work, but it overstates differences between saturated blues
//! and understates them between grays, which is exactly what the 2000 revision fixed.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::colors::cielabcolor::CIELABColor;
use crate::coord::Coord;

// 25^7, the constant of the chroma compensation terms
const POW7_25: f64 = 6103515625.0;

/// The hue angle of an (a, b) chroma pair in degrees, in [0, 360). The achromatic axis has no hue;
/// 0 by convention.
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a) * 180.0 / PI;
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// The CIEDE2000 difference between two CIELAB colors. Symmetric in its arguments, zero only for
/// numerically identical inputs, and unbounded above (black to white is about 100). The value is
/// returned at full precision; display call sites round to two decimals.
///
/// Roughly: below 1 is imperceptible, around 2 is just noticeable on close inspection, and
/// anything past 10 reads as a clearly different color; see [`DifferenceBucket`].
pub fn ciede2000(first: &CIELABColor, second: &CIELABColor) -> f64 {
    // parametric weighting factors, all 1 for graphic arts
    const KL: f64 = 1.0;
    const KC: f64 = 1.0;
    const KH: f64 = 1.0;

    let (l1, a1, b1) = (first.l, first.a, first.b);
    let (l2, a2, b2) = (second.l, second.a, second.b);

    // chroma compensation: desaturated colors get their a axis stretched
    let c_ab_mean = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let c_ab_mean_pow7 = c_ab_mean.powi(7);
    let g = 0.5 * (1.0 - (c_ab_mean_pow7 / (c_ab_mean_pow7 + POW7_25)).sqrt());
    let a1_prime = a1 * (1.0 + g);
    let a2_prime = a2 * (1.0 + g);

    let c1_prime = a1_prime.hypot(b1);
    let c2_prime = a2_prime.hypot(b2);
    let h1_prime = hue_angle(a1_prime, b1);
    let h2_prime = hue_angle(a2_prime, b2);

    let delta_l_prime = l2 - l1;
    let delta_c_prime = c2_prime - c1_prime;

    // hue differences wrap: 350 degrees to 10 degrees is 20 apart, not 340
    let delta_h_prime = if c1_prime * c2_prime == 0.0 {
        0.0
    } else {
        let delta_h = h2_prime - h1_prime;
        if delta_h.abs() <= 180.0 {
            delta_h
        } else if delta_h > 180.0 {
            delta_h - 360.0
        } else {
            delta_h + 360.0
        }
    };
    let delta_big_h_prime =
        2.0 * (c1_prime * c2_prime).sqrt() * (delta_h_prime * PI / 180.0 / 2.0).sin();

    let l_prime_mean = (l1 + l2) / 2.0;
    let c_prime_mean = (c1_prime + c2_prime) / 2.0;
    let h_prime_mean = if c1_prime * c2_prime == 0.0 {
        h1_prime + h2_prime
    } else {
        let h_diff = (h1_prime - h2_prime).abs();
        if h_diff <= 180.0 {
            (h1_prime + h2_prime) / 2.0
        } else if h1_prime + h2_prime < 360.0 {
            (h1_prime + h2_prime + 360.0) / 2.0
        } else {
            (h1_prime + h2_prime - 360.0) / 2.0
        }
    };

    // the hue weighting function and its empirically fit cosine terms
    let h_mean_rad = h_prime_mean * PI / 180.0;
    let t = 1.0 - 0.17 * (h_mean_rad - PI / 6.0).cos() + 0.24 * (2.0 * h_mean_rad).cos()
        + 0.32 * (3.0 * h_mean_rad + PI / 30.0).cos()
        - 0.20 * (4.0 * h_mean_rad - 63.0 * PI / 180.0).cos();

    let l_mean_minus_50_sq = (l_prime_mean - 50.0).powi(2);
    let sl = 1.0 + (0.015 * l_mean_minus_50_sq) / (20.0 + l_mean_minus_50_sq).sqrt();
    let sc = 1.0 + 0.045 * c_prime_mean;
    let sh = 1.0 + 0.015 * c_prime_mean * t;

    // the rotation term that corrects the blue region
    let delta_theta = 30.0 * (-((h_prime_mean - 275.0) / 25.0).powi(2)).exp();
    let c_prime_mean_pow7 = c_prime_mean.powi(7);
    let rc = 2.0 * (c_prime_mean_pow7 / (c_prime_mean_pow7 + POW7_25)).sqrt();
    let rt = -(2.0 * delta_theta * PI / 180.0).sin() * rc;

    let term_l = delta_l_prime / (KL * sl);
    let term_c = delta_c_prime / (KC * sc);
    let term_h = delta_big_h_prime / (KH * sh);

    (term_l * term_l + term_c * term_c + term_h * term_h + rt * term_c * term_h).sqrt()
}

/// The plain Euclidean distance between two CIELAB colors, through their 3D embedding. A cheap
/// baseline, not a perceptual metric: prefer [`ciede2000`] anywhere a human will read the result.
pub fn euclidean_distance(first: &CIELABColor, second: &CIELABColor) -> f64 {
    Coord::from(*first).euclidean_distance(&Coord::from(*second))
}

/// The qualitative reading of a CIEDE2000 value that the comparison page displays. The thresholds
/// are fixed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifferenceBucket {
    /// Below 1: not distinguishable by a human observer.
    Imperceptible,
    /// Below 2: visible only on close, side-by-side inspection.
    JustNoticeable,
    /// Below 5: visibly different, clearly the same color family.
    SmallDifference,
    /// Below 10: obviously different colors.
    ClearDifference,
    /// 10 and up: not the same color in any useful sense.
    VeryDifferent,
}

impl DifferenceBucket {
    /// Buckets a CIEDE2000 value.
    pub fn from_delta(delta: f64) -> DifferenceBucket {
        if delta < 1.0 {
            DifferenceBucket::Imperceptible
        } else if delta < 2.0 {
            DifferenceBucket::JustNoticeable
        } else if delta < 5.0 {
            DifferenceBucket::SmallDifference
        } else if delta < 10.0 {
            DifferenceBucket::ClearDifference
        } else {
            DifferenceBucket::VeryDifferent
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn lab(l: f64, a: f64, b: f64) -> CIELABColor {
        CIELABColor { l, a, b }
    }

    /// Verification pairs from Sharma, Wu & Dalal, "The CIEDE2000 Color-Difference Formula:
    /// Implementation Notes, Supplementary Test Data, and Mathematical Observations". A sample
    /// across the tricky regimes: hue wrap, the blue rotation term, near-neutral pairs.
    #[test]
    fn test_published_verification_pairs() {
        let cases = [
            (50.0, 2.6772, -79.7751, 50.0, 0.0, -82.7485, 2.0425),
            (50.0, 3.1571, -77.2803, 50.0, 0.0, -82.7485, 2.8615),
            (50.0, 2.8361, -74.0200, 50.0, 0.0, -82.7485, 3.4412),
            (50.0, -1.3802, -84.2814, 50.0, 0.0, -82.7485, 1.0),
            (50.0, 0.0, 0.0, 50.0, -1.0, 2.0, 2.3669),
            (50.0, 2.49, -0.001, 50.0, -2.49, 0.0009, 7.1792),
            (50.0, -0.001, 2.49, 50.0, 0.0009, -2.49, 4.8045),
            (50.0, 2.5, 0.0, 50.0, 0.0, -2.5, 4.3065),
            (50.0, 2.5, 0.0, 73.0, 25.0, -18.0, 27.1492),
            (50.0, 2.5, 0.0, 61.0, -5.0, 29.0, 22.8977),
            (60.2574, -34.0099, 36.2677, 60.4626, -34.1751, 39.4387, 1.2644),
            (90.8027, -2.0831, 1.441, 91.1528, -1.6435, 0.0447, 1.4441),
            (2.0776, 0.0795, -1.135, 0.9033, -0.0636, -0.5514, 0.9082),
        ];
        for &(l1, a1, b1, l2, a2, b2, expected) in &cases {
            let got = ciede2000(&lab(l1, a1, b1), &lab(l2, a2, b2));
            assert!(
                (got - expected).abs() < 0.005,
                "expected {:.4}, got {:.4}",
                expected,
                got
            );
        }
    }

    #[test]
    fn test_identity_and_symmetry() {
        let one = lab(50.0, 25.0, -30.0);
        let other = lab(60.0, -10.0, 15.0);
        assert!(ciede2000(&one, &one).abs() < 1e-9);
        assert!((ciede2000(&one, &other) - ciede2000(&other, &one)).abs() < 1e-9);
        assert!(ciede2000(&one, &other) > 0.0);
    }

    #[test]
    fn test_black_to_white_is_enormous() {
        let delta = ciede2000(&lab(0.0, 0.0, 0.0), &lab(100.0, 0.0, 0.0));
        assert!(delta > 50.0);
        assert_eq!(DifferenceBucket::from_delta(delta), DifferenceBucket::VeryDifferent);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(DifferenceBucket::from_delta(0.0), DifferenceBucket::Imperceptible);
        assert_eq!(DifferenceBucket::from_delta(0.999), DifferenceBucket::Imperceptible);
        assert_eq!(DifferenceBucket::from_delta(1.0), DifferenceBucket::JustNoticeable);
        assert_eq!(DifferenceBucket::from_delta(2.0), DifferenceBucket::SmallDifference);
        assert_eq!(DifferenceBucket::from_delta(5.0), DifferenceBucket::ClearDifference);
        assert_eq!(DifferenceBucket::from_delta(10.0), DifferenceBucket::VeryDifferent);
    }

    #[test]
    fn test_euclidean_baseline() {
        let one = lab(10.5, -45.0, 40.0);
        let other = lab(54.2, 65.0, 100.0);
        assert!((euclidean_distance(&one, &other) - 132.70150715).abs() <= 1e-7);
        assert!(euclidean_distance(&one, &one).abs() <= 1e-12);
    }
}
