//! This module is the crate's single validation boundary: it turns arbitrary user-supplied hex
//! color strings into one canonical form, and rejects everything else. The canonical form is
//! `#RRGGBB`, uppercase, always 6 digits: shorthand like `fb0` or `#FB0` expands by doubling each
//! nibble, a missing `#` is tolerated, case and surrounding whitespace are ignored. Anything that
//! doesn't normalize (wrong length, stray characters) surfaces as
//! [`ColorParseError::InvalidColorFormat`] carrying the offending input, and is never silently
//! coerced into some default color. Every other module in the crate assumes its input has already
//! been through here.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// The error type for color input that could not be understood. This is the only error condition
/// in the entire crate: everything downstream of a normalized hex code is a total function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The given string is not 3 or 6 hex digits after stripping whitespace and a leading `#`, or
    /// contains a character that is not a hex digit. Carries the original input verbatim.
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
}

lazy_static! {
    // the 3-digit shorthand is expanded before matching, so 6 digits is the only valid shape here
    static ref HEX_BODY: Regex = Regex::new("^[0-9A-Fa-f]{6}$").unwrap();
}

/// Normalizes any reasonable spelling of a hex color to the canonical `#RRGGBB` form.
///
/// # Examples
/// ```
/// # use madder::hex::normalize;
/// assert_eq!(normalize("abc").unwrap(), "#AABBCC");
/// assert_eq!(normalize("#abc").unwrap(), "#AABBCC");
/// assert_eq!(normalize(" AABBCC ").unwrap(), "#AABBCC");
/// assert_eq!(normalize("#aabbcc").unwrap(), "#AABBCC");
/// assert!(normalize("12345").is_err());
/// ```
pub fn normalize(input: &str) -> Result<String, ColorParseError> {
    let trimmed = input.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let expanded: String = if body.chars().count() == 3 {
        // double each nibble: `fb0` means `ffbb00`
        body.chars().flat_map(|c| [c, c]).collect()
    } else {
        body.to_string()
    };
    if !HEX_BODY.is_match(&expanded) {
        return Err(ColorParseError::InvalidColorFormat(input.to_string()));
    }
    Ok(format!("#{}", expanded.to_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_canonicalizes_every_spelling() {
        for input in ["abc", "#abc", "AABBCC", "#aabbcc", "  #AaBbCc\n"] {
            assert_eq!(normalize(input).unwrap(), "#AABBCC");
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("fb0").unwrap();
        assert_eq!(normalize(&once).unwrap(), once);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        for input in ["12345", "GGGGGG", "", "#", "#1234567", "rgb(0,0,0)", "ab c"] {
            match normalize(input) {
                Err(ColorParseError::InvalidColorFormat(original)) => {
                    assert_eq!(original, input);
                }
                other => panic!("expected rejection of {:?}, got {:?}", input, other),
            }
        }
    }
}
