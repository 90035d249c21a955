//! Color literal scanning
//!
//! Three independent regex scans over the full text: hex literals, `rgb()`
//! and `rgba()` functional forms. Every raw hit is validated through the
//! parser; candidates that fail to parse (out-of-range channels, bad alpha)
//! are dropped silently. Survivors are merged and sorted by start offset.
//!
//! `Regex::find_iter` holds no cursor across calls, so repeated scans of
//! the same or different documents are independent by construction.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::parse_color;

/// Hex literal: 3, 4, 6 or 8 hex digits after `#`. The trailing word
/// boundary keeps 5- and 7-digit runs, and runs continuing into a longer
/// alphanumeric token, from matching at all.
static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#(?:[0-9A-Fa-f]{3,4}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})\b").expect("valid regex")
});

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)rgb\s*\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*\)").expect("valid regex")
});

static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)rgba\s*\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*,\s*[\d.]+\s*\)").expect("valid regex")
});

/// One validated color literal occurrence in a scanned text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMatch {
    /// The literal exactly as it appears in the text
    pub literal: String,
    /// Byte offset of the first byte of the literal
    pub start: usize,
    /// Byte length of the literal
    pub len: usize,
}

/// Find every valid color literal in `text`, sorted ascending by offset.
///
/// The three patterns match mutually exclusive token shapes (`rgb(` never
/// matches inside `rgba(`), so results never overlap. The input is not
/// modified and no scan state survives the call.
pub fn find_colors(text: &str) -> Vec<ColorMatch> {
    let mut matches = Vec::new();

    for re in [&*HEX_RE, &*RGB_RE, &*RGBA_RE] {
        for m in re.find_iter(text) {
            if parse_color(m.as_str()).is_some() {
                matches.push(ColorMatch {
                    literal: m.as_str().to_string(),
                    start: m.start(),
                    len: m.as_str().len(),
                });
            }
        }
    }

    matches.sort_by_key(|m| m.start);
    matches
}
