//! Madder is the color science core behind a color reference catalog: the part of the site that
//! actually has to get numbers right. Everything here is a deterministic function of a hex color
//! string (or two of them, for comparisons): conversions between the common device and CIE color
//! spaces, photometric quantities like relative luminance and Light Reflectance Value, the
//! CIEDE2000 perceptual difference, a rough color-temperature estimate, and a small classifier
//! that buckets any color into one of a handful of human-meaningful "root" families like Beige or
//! Grey. The page handlers, localization, and rendering layers that consume these values live
//! elsewhere and are deliberately not represented here: this crate takes strings and bytes in and
//! hands plain values back, and that's the whole contract.
//!
//! The one validation boundary is hex parsing. A string that survives [`hex::normalize`] is a
//! color, full stop: every conversion past that point is total, and no function in this crate
//! holds state or touches the outside world. That makes everything safe to call from any number
//! of threads without coordination.

#![doc(html_root_url = "https://docs.rs/madder/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

pub mod bundle;
pub mod color;
pub mod colors;
mod consts;
pub mod coord;
pub mod difference;
pub mod hex;
pub mod illuminants;
pub mod photometry;
pub mod prelude;
pub mod rootcolor;
pub mod similarity;
pub mod temperature;
