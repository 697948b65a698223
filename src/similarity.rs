//! This module ranks catalog colors by how similar they look to a reference color. It is the
//! engine behind the "similar colors" strip on every detail page and behind the search-by-hex
//! feature: compute the CIEDE2000 distance from the reference to every candidate, drop the
//! reference itself, sort ascending, and keep the closest few. The sort is stable, so colors at
//! exactly the same distance keep their catalog order and the strip renders identically on every
//! request.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::color::{round_to, Color, RGBColor};
use crate::colors::cielabcolor::CIELABColor;
use crate::difference::ciede2000;
use crate::hex::{normalize, ColorParseError};
use crate::rootcolor::CatalogScheme;

/// One catalog color offered for ranking: its hex and, when known, which numbering scheme it
/// belongs to, so results can be partitioned per scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The candidate's color, in any spelling [`normalize`] accepts.
    pub hex: String,
    /// The scheme the candidate belongs to, if known.
    pub category: Option<CatalogScheme>,
}

/// One ranked result: the candidate, normalized, with its perceptual distance to the reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    /// The candidate's canonical hex.
    pub hex: String,
    /// The scheme the candidate belongs to, if known.
    pub category: Option<CatalogScheme>,
    /// The CIEDE2000 distance to the reference, rounded to two decimals for display.
    pub distance: f64,
}

/// Ranks `candidates` by ascending CIEDE2000 distance to `reference`, keeping at most `cap`
/// results. The reference color itself is excluded by identity (same normalized hex), not by
/// distance, so a genuinely identical twin under a different catalog number still ranks (at
/// distance 0). With a `filter`, only candidates of that scheme are considered. An empty
/// candidate list yields an empty result.
///
/// # Errors
/// Returns [`ColorParseError::InvalidColorFormat`] if the reference or any considered candidate
/// fails to normalize: the catalog is supposed to contain valid colors, and a bad record should
/// be heard about, not silently dropped.
pub fn similar_to(
    reference: &str,
    candidates: &[Candidate],
    filter: Option<CatalogScheme>,
    cap: usize,
) -> Result<Vec<RankedMatch>, ColorParseError> {
    let reference_hex = normalize(reference)?;
    let reference_lab: CIELABColor = RGBColor::from_hex_code(&reference_hex)?.convert();

    let mut ranked: Vec<RankedMatch> = Vec::new();
    for candidate in candidates {
        if let Some(wanted) = filter {
            if candidate.category != Some(wanted) {
                continue;
            }
        }
        let hex = normalize(&candidate.hex)?;
        if hex == reference_hex {
            continue;
        }
        let lab: CIELABColor = RGBColor::from_hex_code(&hex)?.convert();
        ranked.push(RankedMatch {
            hex,
            category: candidate.category,
            distance: ciede2000(&reference_lab, &lab),
        });
    }

    // stable: equal distances keep catalog order
    ranked.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    ranked.truncate(cap);
    for entry in &mut ranked {
        entry.distance = round_to(entry.distance, 2);
    }
    Ok(ranked)
}
