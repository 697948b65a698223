//! This module assigns every catalog color a "root color": the coarse, human-meaningful family
//! label (Red, Beige, Grey, ...) that the browsing and filtering pages are organized around. A
//! precise color has exactly one root, and the assignment is a fixed three-rung ladder, taken in
//! order with the first success winning:
//!
//! 1. the catalog number, when the color belongs to a numbering scheme whose leading digit
//!    encodes the family (the classic four-digit scheme does; the newer design and effect schemes
//!    don't);
//! 2. the display name, matched against an ordered keyword list; the order is load-bearing,
//!    because "rose" has to be found before the generic "red" would be;
//! 3. an HSL band heuristic that is total: any color at all gets bucketed by its hue, saturation,
//!    and lightness, with the brown/beige and pink/rose families carved out of their hue ranges
//!    by saturation and lightness windows first.
//!
//! There is also a fourth, distance-based view of the same family set: every root color has a
//! CIELAB anchor, and [`nearest_anchor`] buckets a color to whichever anchor it is perceptually
//! closest to. The ladder is what the catalog ships; the anchors are the sanity check and the
//! fallback for data that arrives with no catalog identity at all.

use std::collections::HashMap;

use lazy_static::lazy_static;
use maplit::hashmap;
use serde::{Deserialize, Serialize};

use crate::color::{Color, RGBColor};
use crate::colors::cielabcolor::CIELABColor;
use crate::colors::hslcolor::HSLColor;
use crate::difference::ciede2000;
use crate::hex::ColorParseError;

/// The closed set of color families the catalog is browsed by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RootColor {
    /// No family assigned. Only ever an intermediate value inside the ladder: the public
    /// classifier's HSL rung buckets every input, so this never escapes [`classify`].
    Unknown,
    /// Yellows.
    Yellow,
    /// Reds.
    Red,
    /// Greens.
    Green,
    /// Oranges.
    Orange,
    /// Violets and purples.
    Violet,
    /// Blues.
    Blue,
    /// Grays of every spelling.
    Grey,
    /// Browns.
    Brown,
    /// Whites and off-whites.
    White,
    /// Blacks and near-blacks.
    Black,
    /// Light pinks.
    Pink,
    /// The deeper magenta-reds.
    Rose,
    /// Low-saturation light yellow-oranges.
    Beige,
}

/// The numbering schemes a catalog color can belong to. Only the classic scheme encodes the color
/// family in its leading digit; the others number by position in a hue circle or by effect finish,
/// which says nothing useful about family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogScheme {
    /// The classic four-digit scheme: leading digit 1 is yellow, 2 orange, and so on.
    Classic,
    /// The seven-digit design scheme, numbered by hue/lightness/chroma coordinates.
    Design,
    /// The effect finishes, numbered sequentially.
    Effect,
}

/// Everything the classifier may use for one color. Only the hex is required; the rest is catalog
/// metadata that upstream loaders supply when they have it.
#[derive(Debug, Copy, Clone)]
pub struct ClassificationInput<'a> {
    /// The color itself, in any spelling [`crate::hex::normalize`] accepts.
    pub hex: &'a str,
    /// The display name, e.g. "Signal Red", if the color has one.
    pub name: Option<&'a str>,
    /// The numbering scheme the color belongs to, if any.
    pub scheme: Option<CatalogScheme>,
    /// The catalog number within that scheme, e.g. "3020".
    pub number: Option<&'a str>,
}

lazy_static! {
    // leading digit of a classic catalog number; 9 is handled separately since it covers both
    // whites and blacks
    static ref DIGIT_FAMILIES: HashMap<char, RootColor> = hashmap! {
        '1' => RootColor::Yellow,
        '2' => RootColor::Orange,
        '3' => RootColor::Red,
        '4' => RootColor::Violet,
        '5' => RootColor::Blue,
        '6' => RootColor::Green,
        '7' => RootColor::Grey,
        '8' => RootColor::Brown,
    };

    // one representative CIELAB point per family, for the distance-based bucketing
    static ref FAMILY_ANCHORS: Vec<(RootColor, CIELABColor)> = vec![
        (RootColor::Yellow, CIELABColor { l: 85.0, a: 0.0, b: 80.0 }),
        (RootColor::Red, CIELABColor { l: 45.0, a: 65.0, b: 45.0 }),
        (RootColor::Green, CIELABColor { l: 50.0, a: -50.0, b: 40.0 }),
        (RootColor::Orange, CIELABColor { l: 65.0, a: 40.0, b: 65.0 }),
        (RootColor::Violet, CIELABColor { l: 35.0, a: 40.0, b: -40.0 }),
        (RootColor::Blue, CIELABColor { l: 35.0, a: 10.0, b: -45.0 }),
        (RootColor::Grey, CIELABColor { l: 55.0, a: 0.0, b: 0.0 }),
        (RootColor::Brown, CIELABColor { l: 35.0, a: 20.0, b: 30.0 }),
        (RootColor::White, CIELABColor { l: 95.0, a: 0.0, b: 2.0 }),
        (RootColor::Black, CIELABColor { l: 10.0, a: 0.0, b: 0.0 }),
        (RootColor::Pink, CIELABColor { l: 75.0, a: 30.0, b: 5.0 }),
        (RootColor::Rose, CIELABColor { l: 55.0, a: 50.0, b: 15.0 }),
        (RootColor::Beige, CIELABColor { l: 75.0, a: 5.0, b: 20.0 }),
    ];
}

/// Name keywords in match order. "rose" and "pink" must come before "red" would match the tail of
/// names like "rose red"; both spellings of gray are listed. Checked by substring, so "Pastel
/// Rose" and "Rosewood" both hit "rose".
static NAME_KEYWORDS: [(&str, RootColor); 14] = [
    ("yellow", RootColor::Yellow),
    ("orange", RootColor::Orange),
    ("violet", RootColor::Violet),
    ("green", RootColor::Green),
    ("blue", RootColor::Blue),
    ("grey", RootColor::Grey),
    ("gray", RootColor::Grey),
    ("brown", RootColor::Brown),
    ("white", RootColor::White),
    ("black", RootColor::Black),
    ("pink", RootColor::Pink),
    ("rose", RootColor::Rose),
    ("beige", RootColor::Beige),
    ("red", RootColor::Red),
];

/// Rung 1: the leading digit of a classic catalog number. The 9xxx range holds both whites and
/// blacks, split by lightness.
fn classify_by_number(number: &str, lightness_pct: f64) -> RootColor {
    let digit = match number.chars().find(|c| c.is_ascii_digit()) {
        Some(d) => d,
        None => return RootColor::Unknown,
    };
    if digit == '9' {
        return if lightness_pct >= 50.0 {
            RootColor::White
        } else {
            RootColor::Black
        };
    }
    DIGIT_FAMILIES
        .get(&digit)
        .copied()
        .unwrap_or(RootColor::Unknown)
}

/// Rung 2: the ordered keyword scan over the lowercased display name.
fn classify_by_name(name: &str) -> RootColor {
    let lowered = name.to_lowercase();
    for (keyword, family) in &NAME_KEYWORDS {
        if lowered.contains(keyword) {
            return *family;
        }
    }
    RootColor::Unknown
}

/// Rung 3: the HSL band heuristic. Total: every input lands in some family.
fn classify_by_hsl(hsl: &HSLColor) -> RootColor {
    let h = hsl.h;
    let s = hsl.s * 100.0;
    let l = hsl.l * 100.0;

    // achromatic colors split purely by lightness
    if s < 10.0 {
        return if l > 85.0 {
            RootColor::White
        } else if l < 15.0 {
            RootColor::Black
        } else {
            RootColor::Grey
        };
    }

    // brown and beige are carved out of the orange-yellow hues by saturation and lightness:
    // brown is the dark moderate-saturation window, beige the light washed-out one
    if (10.0..50.0).contains(&h) && (15.0..=70.0).contains(&s) && (10.0..=45.0).contains(&l) {
        return RootColor::Brown;
    }
    if (25.0..65.0).contains(&h) && (10.0..=45.0).contains(&s) && (55.0..=90.0).contains(&l) {
        return RootColor::Beige;
    }

    // the magenta-red arc: light shades read pink, medium magentas read rose, and anything else
    // falls through to the plain hue buckets
    if (h >= 300.0 || h < 10.0) && l >= 65.0 {
        return RootColor::Pink;
    }
    if (300.0..345.0).contains(&h) {
        return RootColor::Rose;
    }

    if !(15.0..345.0).contains(&h) {
        RootColor::Red
    } else if h < 45.0 {
        RootColor::Orange
    } else if h < 70.0 {
        RootColor::Yellow
    } else if h < 165.0 {
        RootColor::Green
    } else if h < 255.0 {
        RootColor::Blue
    } else {
        RootColor::Violet
    }
}

/// Assigns the root color for a catalog color, working down the ladder: catalog number, then
/// display name, then the HSL heuristic. Total over valid hex input: the result is never
/// [`RootColor::Unknown`].
///
/// # Errors
/// Returns [`ColorParseError::InvalidColorFormat`] if the hex does not normalize.
///
/// # Examples
/// ```
/// # use madder::rootcolor::{classify, ClassificationInput, RootColor};
/// let input = ClassificationInput {
///     hex: "#C8A2C8",
///     name: Some("Pastel Rose"),
///     scheme: None,
///     number: None,
/// };
/// assert_eq!(classify(&input).unwrap(), RootColor::Rose);
/// ```
pub fn classify(input: &ClassificationInput) -> Result<RootColor, ColorParseError> {
    let rgb = RGBColor::from_hex_code(input.hex)?;
    let hsl: HSLColor = rgb.convert();

    if input.scheme == Some(CatalogScheme::Classic) {
        if let Some(number) = input.number {
            let family = classify_by_number(number, hsl.l * 100.0);
            if family != RootColor::Unknown {
                return Ok(family);
            }
        }
    }

    if let Some(name) = input.name {
        let family = classify_by_name(name);
        if family != RootColor::Unknown {
            return Ok(family);
        }
    }

    Ok(classify_by_hsl(&hsl))
}

/// Buckets a color to the family whose CIELAB anchor it is perceptually closest to, by CIEDE2000.
/// This is the catalog-free view of the family set: no number, no name, no band windows, just
/// distance.
pub fn nearest_anchor(lab: &CIELABColor) -> RootColor {
    let mut best = RootColor::Unknown;
    let mut best_distance = f64::INFINITY;
    for (family, anchor) in FAMILY_ANCHORS.iter() {
        let distance = ciede2000(lab, anchor);
        if distance < best_distance {
            best_distance = distance;
            best = *family;
        }
    }
    best
}
