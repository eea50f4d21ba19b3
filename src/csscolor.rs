//! This file classifies color strings by shape: CSS functional notation (`rgb()`, `rgba()`,
//! `hsl()`, `hsla()`, plus the non-standard `hsv()` and `hsva()` that color pickers use), hex codes
//! with or without a leading '#', and named colors. Classification is an ordered list of patterns
//! where the first match wins, so the order of [`MATCHERS`] is part of the behavior. The notation is
//! permissive the way browsers' input fields tend to be: commas, spaces, and '|' all separate
//! channels, and the closing parenthesis is optional. You can see the CSS spec here:
//! [https://www.w3.org/TR/css-color-3/](https://www.w3.org/TR/css-color-3/).

use regex::{Captures, Regex};

use color::Format;
use colors::rgbcolor::{hex_to_alpha, hex_to_int};
use named::name_to_hex;

/// The shape a color string was recognized as. Functional notations keep their channels as the
/// original string tokens, since whether a token is a percentage changes how it is bounded.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedShape {
    /// `rgb(r, g, b)`
    Rgb(String, String, String),
    /// `rgba(r, g, b, a)`
    Rgba(String, String, String, String),
    /// `hsl(h, s, l)`
    Hsl(String, String, String),
    /// `hsla(h, s, l, a)`
    Hsla(String, String, String, String),
    /// `hsv(h, s, v)`
    Hsv(String, String, String),
    /// `hsva(h, s, v, a)`
    Hsva(String, String, String, String),
    /// A hex code, already decoded. `format` records which hex family it came from.
    Hex {
        /// The red channel.
        r: u8,
        /// The green channel.
        g: u8,
        /// The blue channel.
        b: u8,
        /// The alpha channel in [0, 1], if the code had one.
        a: Option<f64>,
        /// `Hex8` for eight- and four-digit codes, `Hex` for six- and three-digit ones.
        format: Format,
    },
    /// A named color, including `transparent`.
    Named {
        /// The red channel.
        r: u8,
        /// The green channel.
        g: u8,
        /// The blue channel.
        b: u8,
        /// The alpha channel: 0 for `transparent`, 1 otherwise.
        a: f64,
    },
    /// Nothing matched.
    Invalid,
}

/// A pattern paired with the function that builds a shape out of its captures.
struct Matcher {
    name: &'static str,
    pattern: Regex,
    build: fn(&Captures) -> ParsedShape,
}

// an optionally signed decimal or integer, either optionally followed by '%'
const CSS_UNIT: &str = r"(?:[-\+]?[0-9]*\.[0-9]+%?|[-\+]?[0-9]+%?)";

/// Builds the regex for a functional notation like `rgb(...)` with `channels` channels.
fn functional(prefix: &str, channels: usize) -> Regex {
    let mut pattern = format!(r"^{}[\s|\(]+({})", prefix, CSS_UNIT);
    for _ in 1..channels {
        pattern.push_str(&format!(r"[,|\s]+({})", CSS_UNIT));
    }
    pattern.push_str(r"\s*\)?$");
    Regex::new(&pattern).expect("valid functional notation regex")
}

/// Builds the regex for a hex code of `channels` channels, each `width` digits.
fn hex(channels: usize, width: usize) -> Regex {
    let channel = format!("([0-9a-f]{{{}}})", width);
    Regex::new(&format!("^#?{}$", channel.repeat(channels))).expect("valid hex regex")
}

fn group(caps: &Captures, i: usize) -> String {
    caps.get(i).map_or(String::new(), |m| m.as_str().to_string())
}

// a one-digit hex channel, doubled: "a" reads as "aa"
fn doubled(caps: &Captures, i: usize) -> String {
    group(caps, i).repeat(2)
}

fn build_rgb(c: &Captures) -> ParsedShape {
    ParsedShape::Rgb(group(c, 1), group(c, 2), group(c, 3))
}

fn build_rgba(c: &Captures) -> ParsedShape {
    ParsedShape::Rgba(group(c, 1), group(c, 2), group(c, 3), group(c, 4))
}

fn build_hsl(c: &Captures) -> ParsedShape {
    ParsedShape::Hsl(group(c, 1), group(c, 2), group(c, 3))
}

fn build_hsla(c: &Captures) -> ParsedShape {
    ParsedShape::Hsla(group(c, 1), group(c, 2), group(c, 3), group(c, 4))
}

fn build_hsv(c: &Captures) -> ParsedShape {
    ParsedShape::Hsv(group(c, 1), group(c, 2), group(c, 3))
}

fn build_hsva(c: &Captures) -> ParsedShape {
    ParsedShape::Hsva(group(c, 1), group(c, 2), group(c, 3), group(c, 4))
}

fn build_hex8(c: &Captures) -> ParsedShape {
    ParsedShape::Hex {
        r: hex_to_int(&group(c, 1)) as u8,
        g: hex_to_int(&group(c, 2)) as u8,
        b: hex_to_int(&group(c, 3)) as u8,
        a: Some(hex_to_alpha(&group(c, 4))),
        format: Format::Hex8,
    }
}

fn build_hex6(c: &Captures) -> ParsedShape {
    ParsedShape::Hex {
        r: hex_to_int(&group(c, 1)) as u8,
        g: hex_to_int(&group(c, 2)) as u8,
        b: hex_to_int(&group(c, 3)) as u8,
        a: None,
        format: Format::Hex,
    }
}

fn build_hex4(c: &Captures) -> ParsedShape {
    ParsedShape::Hex {
        r: hex_to_int(&doubled(c, 1)) as u8,
        g: hex_to_int(&doubled(c, 2)) as u8,
        b: hex_to_int(&doubled(c, 3)) as u8,
        a: Some(hex_to_alpha(&doubled(c, 4))),
        format: Format::Hex8,
    }
}

fn build_hex3(c: &Captures) -> ParsedShape {
    ParsedShape::Hex {
        r: hex_to_int(&doubled(c, 1)) as u8,
        g: hex_to_int(&doubled(c, 2)) as u8,
        b: hex_to_int(&doubled(c, 3)) as u8,
        a: None,
        format: Format::Hex,
    }
}

lazy_static! {
    /// Every recognized shape, in priority order. Hex codes are anchored, so no two hex patterns
    /// can match the same string and their relative order only matters for readability.
    static ref MATCHERS: Vec<Matcher> = vec![
        Matcher { name: "rgb", pattern: functional("rgb", 3), build: build_rgb },
        Matcher { name: "rgba", pattern: functional("rgba", 4), build: build_rgba },
        Matcher { name: "hsl", pattern: functional("hsl", 3), build: build_hsl },
        Matcher { name: "hsla", pattern: functional("hsla", 4), build: build_hsla },
        Matcher { name: "hsv", pattern: functional("hsv", 3), build: build_hsv },
        Matcher { name: "hsva", pattern: functional("hsva", 4), build: build_hsva },
        Matcher { name: "hex8", pattern: hex(4, 2), build: build_hex8 },
        Matcher { name: "hex6", pattern: hex(3, 2), build: build_hex6 },
        Matcher { name: "hex4", pattern: hex(4, 1), build: build_hex4 },
        Matcher { name: "hex3", pattern: hex(3, 1), build: build_hex3 },
    ];
}

// runs the pattern list alone, without named color substitution
fn match_patterns(color: &str) -> ParsedShape {
    for matcher in MATCHERS.iter() {
        if let Some(caps) = matcher.pattern.captures(color) {
            trace!("color {:?} matched {}", color, matcher.name);
            return (matcher.build)(&caps);
        }
    }
    ParsedShape::Invalid
}

/// Classifies a color string. Case and surrounding whitespace are ignored. Named colors are
/// substituted first, then `transparent`, then the patterns are tried in order.
///
/// ```
/// # use colorselect::csscolor::{classify, ParsedShape};
/// assert_eq!(
///     classify("RGB(255, 0, 10%)"),
///     ParsedShape::Rgb("255".into(), "0".into(), "10%".into())
/// );
/// assert_eq!(classify("red"), ParsedShape::Named { r: 255, g: 0, b: 0, a: 1. });
/// assert_eq!(classify("not a color"), ParsedShape::Invalid);
/// ```
pub fn classify(color: &str) -> ParsedShape {
    let color = color.trim().to_lowercase();
    if let Some(code) = name_to_hex(&color) {
        return match match_patterns(code) {
            ParsedShape::Hex { r, g, b, a, .. } => ParsedShape::Named {
                r,
                g,
                b,
                a: a.unwrap_or(1.),
            },
            other => other,
        };
    }
    if color == "transparent" {
        return ParsedShape::Named {
            r: 0,
            g: 0,
            b: 0,
            a: 0.,
        };
    }

    let shape = match_patterns(&color);
    if shape == ParsedShape::Invalid {
        debug!("unrecognized color string {:?}", color);
    }
    shape
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn strings(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_functional_notation() {
        assert_eq!(
            classify("rgb(125, 20%, 0.5)"),
            ParsedShape::Rgb("125".into(), "20%".into(), "0.5".into())
        );
        assert_eq!(
            classify("rgba(1 2 3 .4)"),
            ParsedShape::Rgba("1".into(), "2".into(), "3".into(), ".4".into())
        );
        assert_eq!(
            classify("  HSL(120, 100%, 50%)  "),
            ParsedShape::Hsl("120".into(), "100%".into(), "50%".into())
        );
        assert_eq!(
            classify("hsla(240,50%,50%,0.25)"),
            ParsedShape::Hsla("240".into(), "50%".into(), "50%".into(), "0.25".into())
        );
        assert_eq!(
            classify("hsv 0 1 1"),
            ParsedShape::Hsv("0".into(), "1".into(), "1".into())
        );
        match classify("hsva(359.5, 0.3, 0.8, 1)") {
            ParsedShape::Hsva(h, s, v, a) => assert_eq!(vec![h, s, v, a], strings(&["359.5", "0.3", "0.8", "1"])),
            other => panic!("expected hsva, got {:?}", other),
        }
    }

    #[test]
    fn test_functional_notation_rejects_wrong_arity() {
        assert_eq!(classify("rgb(1, 2, 3, 4)"), ParsedShape::Invalid);
        assert_eq!(classify("rgba(1, 2, 3)"), ParsedShape::Invalid);
        assert_eq!(classify("rgb(1, 2)"), ParsedShape::Invalid);
        assert_eq!(classify("rgb(a, b, c)"), ParsedShape::Invalid);
    }

    #[test]
    fn test_trailing_text_is_rejected() {
        assert_eq!(classify("rgba(255,0,0,.5);"), ParsedShape::Invalid);
        assert_eq!(classify("hsl(0, 100%, 50%) !important"), ParsedShape::Invalid);
        assert_eq!(classify("#ff0000;"), ParsedShape::Invalid);
        assert_eq!(
            classify("rgba(255,0,0,.5)"),
            ParsedShape::Rgba("255".into(), "0".into(), "0".into(), ".5".into())
        );
    }

    #[test]
    fn test_hex_codes() {
        assert_eq!(
            classify("#ff0080"),
            ParsedShape::Hex { r: 255, g: 0, b: 128, a: None, format: Format::Hex }
        );
        assert_eq!(
            classify("ABC"),
            ParsedShape::Hex { r: 0xaa, g: 0xbb, b: 0xcc, a: None, format: Format::Hex }
        );
        assert_eq!(
            classify("#ff000000"),
            ParsedShape::Hex { r: 255, g: 0, b: 0, a: Some(0.), format: Format::Hex8 }
        );
        assert_eq!(
            classify("#f00f"),
            ParsedShape::Hex { r: 255, g: 0, b: 0, a: Some(1.), format: Format::Hex8 }
        );
        assert_eq!(classify("#ff00"), classify("ff00"));
        assert_eq!(classify("#ff0"), classify("#ffff00"));
        assert_eq!(classify("#ff0000f"), ParsedShape::Invalid);
        assert_eq!(classify("#gg0000"), ParsedShape::Invalid);
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(classify("Red"), ParsedShape::Named { r: 255, g: 0, b: 0, a: 1. });
        assert_eq!(
            classify("aliceblue"),
            ParsedShape::Named { r: 0xf0, g: 0xf8, b: 0xff, a: 1. }
        );
        assert_eq!(classify("transparent"), ParsedShape::Named { r: 0, g: 0, b: 0, a: 0. });
        assert_eq!(classify(""), ParsedShape::Invalid);
    }
}
