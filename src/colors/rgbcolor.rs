//! This module holds the plain sRGB side of things: the structured RGBA records handed back to
//! callers, the bounding of raw RGB triples, and hexadecimal encoding and decoding. RGB is the
//! canonical space in this crate, so everything else converts to and from the functions here.

use bound::bound01;
use cssnumeric::CSSNumeric;

/// An RGBA color with channels from 0 to 255 and alpha from 0 to 1. When handed out by
/// [`Color::to_rgb`](::color::Color::to_rgb) the channels are already rounded to integers.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel, from 0 to 255.
    pub r: f64,
    /// The green channel, from 0 to 255.
    pub g: f64,
    /// The blue channel, from 0 to 255.
    pub b: f64,
    /// The alpha channel, from 0 (transparent) to 1 (opaque).
    pub a: f64,
}

/// An RGBA color whose channels are percentage strings such as `"50%"`, as CSS writes them in
/// `rgb(100%, 50%, 0%)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentageRGB {
    /// The red channel, as a whole percentage.
    pub r: String,
    /// The green channel, as a whole percentage.
    pub g: String,
    /// The blue channel, as a whole percentage.
    pub b: String,
    /// The alpha channel, from 0 to 1.
    pub a: f64,
}

/// Bounds a raw RGB triple, given in 0-255 or percentage form, into 0-255 floats.
pub fn rgb_to_rgb(r: CSSNumeric, g: CSSNumeric, b: CSSNumeric) -> (f64, f64, f64) {
    (
        bound01(r, 255.) * 255.,
        bound01(g, 255.) * 255.,
        bound01(b, 255.) * 255.,
    )
}

// each channel as exactly two lowercase hex digits
fn hex_pairs(channels: &[f64]) -> Vec<String> {
    channels
        .iter()
        .map(|c| format!("{:02x}", c.round() as u8))
        .collect()
}

// true if every pair is a doubled digit, like "aa"
fn all_doubled(pairs: &[String]) -> bool {
    pairs.iter().all(|p| {
        let bytes = p.as_bytes();
        bytes[0] == bytes[1]
    })
}

fn join_pairs(pairs: &[String], short: bool) -> String {
    if short {
        pairs.iter().map(|p| &p[..1]).collect()
    } else {
        pairs.concat()
    }
}

/// Encodes an RGB triple (0-255, rounded) as six lowercase hex digits without a leading '#'. If
/// `allow_short` is set and every pair is a doubled digit, gives the three-digit shorthand instead.
///
/// ```
/// # use colorselect::colors::rgbcolor::rgb_to_hex;
/// assert_eq!(rgb_to_hex(170., 170., 170., true), "aaa");
/// assert_eq!(rgb_to_hex(171., 170., 170., true), "abaaaa");
/// assert_eq!(rgb_to_hex(170., 170., 170., false), "aaaaaa");
/// ```
pub fn rgb_to_hex(r: f64, g: f64, b: f64, allow_short: bool) -> String {
    let pairs = hex_pairs(&[r, g, b]);
    join_pairs(&pairs, allow_short && all_doubled(&pairs))
}

/// Like [`rgb_to_hex`], with a fourth pair for alpha encoded as `round(a * 255)`. The four-digit
/// shorthand needs all four pairs doubled.
pub fn rgba_to_hex(r: f64, g: f64, b: f64, a: f64, allow_short: bool) -> String {
    let pairs = hex_pairs(&[r, g, b, a * 255.]);
    join_pairs(&pairs, allow_short && all_doubled(&pairs))
}

/// Reads a string of hex digits as an integer. Callers have already matched the digits.
pub fn hex_to_int(hex: &str) -> u32 {
    u32::from_str_radix(hex, 16).unwrap_or(0)
}

/// Reads a two-digit hex alpha into [0, 1].
pub fn hex_to_alpha(hex: &str) -> f64 {
    f64::from(hex_to_int(hex)) / 255.
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_rgb_bounding() {
        let (r, g, b) = rgb_to_rgb(
            CSSNumeric::Number(300.),
            CSSNumeric::Percentage(50.),
            CSSNumeric::Number(-4.),
        );
        assert_eq!(r, 255.);
        assert_eq!(g, 127.5);
        assert_eq!(b, 0.);
        let (r, _, _) = rgb_to_rgb(CSSNumeric::OnePointZero, CSSNumeric::Number(0.), CSSNumeric::Number(0.));
        assert_eq!(r, 255.);
    }

    #[test]
    fn test_hex_encoding() {
        assert_eq!(rgb_to_hex(255., 0., 0., false), "ff0000");
        assert_eq!(rgb_to_hex(255., 0., 0., true), "f00");
        assert_eq!(rgb_to_hex(1.4, 15.6, 254.5, false), "0110ff");
        assert_eq!(rgba_to_hex(255., 0., 0., 0.4, false), "ff000066");
        assert_eq!(rgba_to_hex(255., 0., 0., 1., true), "f00f");
        assert_eq!(rgba_to_hex(255., 0., 0., 0.4, true), "ff000066");
    }

    #[test]
    fn test_hex_decoding() {
        assert_eq!(hex_to_int("ff"), 255);
        assert_eq!(hex_to_int("0A"), 10);
        assert_eq!(hex_to_alpha("ff"), 1.);
        assert_eq!(hex_to_alpha("00"), 0.);
        assert!((hex_to_alpha("66") - 0.4).abs() < 1e-9);
    }
}
