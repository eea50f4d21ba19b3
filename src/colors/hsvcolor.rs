//! This module implements the HSV color space, the one a color picker actually works in: hue is the
//! position on the hue slider, and saturation and value are the two axes of the square panel.
//! Value runs from black to the fully saturated color, which makes it a poor analog of luminance
//! (dark purple has the same value as white), but makes hue and saturation map cleanly onto the
//! picker's controls.
//! Converting gray into HSV gives a hue of 0 degrees, although any hue could be used in its place.

use bound::{bound01, convert_to_percentage};
use cssnumeric::CSSNumeric;

/// An HSVA color, as handed back by [`Color::to_hsv`](::color::Color::to_hsv).
///
/// ```
/// # use colorselect::prelude::*;
/// let hsv = Color::new("#cc6666").to_hsv();
/// assert_eq!(hsv.h, 0.);
/// assert!((hsv.s - 0.5).abs() < 1e-9);
/// assert!((hsv.v - 0.8).abs() < 1e-9);
/// assert_eq!(hsv.a, 1.);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, an angle in degrees from 0 to 360.
    pub h: f64,
    /// The saturation, the distance from the gray of the same value. Ranges between 0 and 1.
    pub s: f64,
    /// The value, defined as the largest RGB primary of the color. Ranges between 0 and 1.
    pub v: f64,
    /// The alpha channel, from 0 to 1.
    pub a: f64,
}

/// Converts HSV to RGB channels in 0-255. Hue is bounded against 360, saturation and value against
/// 100 after fractions have been read as percentages, so `1`, `"1.0"`, and `"100%"` all mean full
/// saturation.
pub fn hsv_to_rgb(h: CSSNumeric, s: CSSNumeric, v: CSSNumeric) -> (f64, f64, f64) {
    let h = bound01(h, 360.) * 6.;
    let s = bound01(convert_to_percentage(s), 100.);
    let v = bound01(convert_to_percentage(v), 100.);

    // which sixth of the hexagon we're on, and how far along it
    let i = h.floor();
    let f = h - i;
    let p = v * (1. - s);
    let q = v * (1. - f * s);
    let t = v * (1. - (1. - f) * s);
    // a hue of exactly 360 lands on sector 6, which is sector 0 again
    let sector = (i as usize) % 6;
    let r = [v, q, p, p, t, v][sector];
    let g = [t, v, v, q, p, p][sector];
    let b = [p, p, t, v, v, q][sector];

    (r * 255., g * 255., b * 255.)
}

/// Converts RGB channels in 0-255 to HSV, all three in [0, 1]. Callers scale the hue to degrees.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let r = bound01(CSSNumeric::Number(r), 255.);
    let g = bound01(CSSNumeric::Number(g), 255.);
    let b = bound01(CSSNumeric::Number(b), 255.);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let s = if max == 0. { 0. } else { d / max };
    (hue_from_rgb(r, g, b, max, d), s, max)
}

/// The hexagonal hue shared by HSV and HSL, in [0, 1): which channel is largest picks the sector,
/// and the other two pick the position within it. Gray has hue 0.
pub(crate) fn hue_from_rgb(r: f64, g: f64, b: f64, max: f64, chroma: f64) -> f64 {
    if chroma == 0. {
        return 0.;
    }
    let h = if max == r {
        (g - b) / chroma + if g < b { 6. } else { 0. }
    } else if max == g {
        (b - r) / chroma + 2.
    } else {
        (r - g) / chroma + 4.
    };
    h / 6.
}
