//! Property-based tests for colorselect.
//!
//! These check the round trips a picker depends on over generated colors rather than a handful of
//! hand-picked ones.

#[macro_use]
extern crate proptest;
extern crate colorselect;

use proptest::prelude::*;

use colorselect::prelude::*;

/// Any opaque color, as integer channels.
fn rgb_triplet() -> impl Strategy<Value = (u8, u8, u8)> {
    (any::<u8>(), any::<u8>(), any::<u8>())
}

/// A fraction in [0, 1], as slider positions are.
fn fraction() -> impl Strategy<Value = f64> {
    0.0..=1.0f64
}

fn channels(c: &Color) -> (i32, i32, i32) {
    let rgb = c.to_rgb();
    (rgb.r as i32, rgb.g as i32, rgb.b as i32)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Hex round trip: parsing a color's own hex gives the same channels back.
    #[test]
    fn prop_hex_roundtrip((r, g, b) in rgb_triplet()) {
        let color = Color::new(StructuredColor::rgb(r, g, b));
        let reparsed = Color::parse(color.to_hex_string(false)).expect("own hex should parse");
        prop_assert_eq!(channels(&reparsed), (r as i32, g as i32, b as i32));
    }

    /// Short hex is only used when every pair is doubled, and still reads back the same.
    #[test]
    fn prop_short_hex_roundtrip((r, g, b) in rgb_triplet()) {
        let color = Color::new(StructuredColor::rgb(r, g, b));
        let short = color.to_hex_string(true);
        let doubled = [r, g, b].iter().all(|c| c >> 4 == c & 0xf);
        prop_assert_eq!(short.len() == 3, doubled);
        prop_assert_eq!(channels(&Color::new(short)), channels(&color));
    }

    /// Reparsing a color's hsv string lands close to where it started. Hue is written in whole
    /// degrees and saturation and value in whole percents; across every 8-bit color that moves a
    /// channel by at most three, as `rgb(0, 108, 254)` through `hsv(214, 100%, 100%)` does.
    #[test]
    fn prop_hsv_string_idempotent((r, g, b) in rgb_triplet()) {
        let color = Color::new(StructuredColor::rgb(r, g, b));
        let reparsed = Color::parse(color.to_hsv_string()).expect("own hsv string should parse");
        let (r1, g1, b1) = channels(&color);
        let (r2, g2, b2) = channels(&reparsed);
        prop_assert!((r1 - r2).abs() <= 3, "{} vs {}", color.to_hsv_string(), reparsed);
        prop_assert!((g1 - g2).abs() <= 3, "{} vs {}", color.to_hsv_string(), reparsed);
        prop_assert!((b1 - b2).abs() <= 3, "{} vs {}", color.to_hsv_string(), reparsed);
    }

    /// A hue of 360 is a hue of 0.
    #[test]
    fn prop_hue_wraps(s in fraction(), v in fraction()) {
        let bottom = Color::from_hsva(0., s, v, 1.);
        let top = Color::from_hsva(360., s, v, 1.);
        prop_assert_eq!(channels(&bottom), channels(&top));
    }

    /// Full saturation and value never wrap around to zero, at any hue.
    #[test]
    fn prop_full_value_does_not_wrap(h in 0.0..360.0f64) {
        let color = Color::new(StructuredColor::hsv(h, "100%", 1));
        let (r, g, b) = channels(&color);
        prop_assert_eq!(r.max(g).max(b), 255);
        prop_assert_eq!(r.min(g).min(b), 0);
    }

    /// Alpha outside [0, 1] is read as opaque rather than rejected.
    #[test]
    fn prop_bad_alpha_is_opaque((r, g, b) in rgb_triplet(), a in prop_oneof![-100.0..-0.001f64, 1.001..100.0f64]) {
        let color = Color::parse(StructuredColor::rgb(r, g, b).with_alpha(a)).expect("channels are valid");
        prop_assert_eq!(color.alpha(), 1.);
        prop_assert_eq!(color.to_rgb_string(), format!("rgb({}, {}, {})", r, g, b));
    }

    /// Writing a color in its own format and reading it back keeps the format.
    #[test]
    fn prop_display_keeps_format((r, g, b) in rgb_triplet(), a in fraction()) {
        let color = Color::new(StructuredColor::rgb(r, g, b).with_alpha(a));
        let reparsed = Color::parse(color.to_string()).expect("own display should parse");
        prop_assert_eq!(reparsed.format(), Format::Rgb);
        prop_assert_eq!(channels(&reparsed), channels(&color));
    }
}
