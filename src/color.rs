//! Color literal parsing
//!
//! Converts raw color literals (`#Fa0`, `#00a86bcc`, `rgb(0, 122, 255)`,
//! `rgba(0, 122, 255, 0.9)`) into normalized RGBA values. Rejection is the
//! common case here: code is full of hex-looking tokens that are not colors,
//! so parse failures return `None` and are never logged.

/// Normalized color: 0-255 per channel, alpha 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// Create an opaque color from RGB values
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color with an explicit alpha fraction
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Re-encode as a CSS display string: `rgb(r, g, b)` when opaque,
    /// `rgba(r, g, b, a)` otherwise
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a color literal into a normalized value.
///
/// Accepts `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (hex digits in either
/// case), plus `rgb(r, g, b)` and `rgba(r, g, b, a)` with a case-insensitive
/// keyword and whitespace-tolerant punctuation. Returns `None` for anything
/// else; never panics.
pub fn parse_color(literal: &str) -> Option<Rgba> {
    let s = literal.trim();
    if let Some(hex) = s.strip_prefix('#') {
        parse_hex(hex)
    } else {
        parse_rgb_func(s)
    }
}

/// Parse the digits of a hex literal (`#` already stripped)
///
/// Lengths 3 and 4 are shorthand: each nibble duplicates (`a` → `aa`).
/// Length 6 is opaque; length 8 carries alpha as last-byte / 255.
fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String;
    let hex = match hex.len() {
        3 | 4 => {
            expanded = hex.chars().flat_map(|c| [c, c]).collect();
            &expanded
        }
        6 | 8 => hex,
        _ => return None,
    };

    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let r = byte(0)?;
    let g = byte(2)?;
    let b = byte(4)?;
    let a = if hex.len() == 8 {
        byte(6)? as f32 / 255.0
    } else {
        1.0
    };
    Some(Rgba { r, g, b, a })
}

/// Parse `rgb(r, g, b)` / `rgba(r, g, b, a)` functional forms
///
/// Channels are base-10 integers 0-255; alpha (rgba only) is a decimal
/// fraction 0-1. Any out-of-range value rejects the whole literal.
fn parse_rgb_func(s: &str) -> Option<Rgba> {
    let lower = s.to_ascii_lowercase();
    let (rest, has_alpha) = if let Some(rest) = lower.strip_prefix("rgba") {
        (rest, true)
    } else if let Some(rest) = lower.strip_prefix("rgb") {
        (rest, false)
    } else {
        return None;
    };

    let body = rest.trim_start().strip_prefix('(')?;
    let body = body.trim_end().strip_suffix(')')?;

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if has_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    // u8 parsing rejects negatives and anything above 255
    let r: u8 = parts[0].parse().ok()?;
    let g: u8 = parts[1].parse().ok()?;
    let b: u8 = parts[2].parse().ok()?;
    let a = if has_alpha {
        let a: f32 = parts[3].parse().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        a
    } else {
        1.0
    };
    Some(Rgba { r, g, b, a })
}
