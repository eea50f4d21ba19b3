//! This file implements HSL, a simple cylindrical transformation of sRGB. HSL and HSV are very
//! similar but have an important difference: *value* in HSV runs from black to fully saturated
//! colors, whereas *lightness* in HSL runs from black to fully saturated in the middle to white at
//! the end. This space is hexagonal rather than truly circular: hues are placed on a hexagon that
//! is then "squeezed" into a circle, which is also what CSS does.
//! Converting gray into HSL gives a hue of 0 degrees, although any hue could be used in its place.

use bound::{bound01, convert_to_percentage};
use colors::hsvcolor::hue_from_rgb;
use cssnumeric::CSSNumeric;

/// An HSLA color, as handed back by [`Color::to_hsl`](::color::Color::to_hsl).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component. Ranges from 0 to 360, exactly the same as the hue component of HSV.
    pub h: f64,
    /// The saturation component. Ranges between 0 and 1.
    pub s: f64,
    /// The lightness component, the average of the largest and smallest RGB channels. Ranges from 0
    /// to 1.
    pub l: f64,
    /// The alpha channel, from 0 to 1.
    pub a: f64,
}

/// One of the six linear pieces of an RGB channel across the hue wheel, given the two extremes
/// `p` and `q` for the current lightness and the hue `t`, shifted per channel.
pub fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0. {
        t += 1.;
    }
    if t > 1. {
        t -= 1.;
    }
    if t < 1. / 6. {
        p + (q - p) * 6. * t
    } else if t < 1. / 2. {
        q
    } else if t < 2. / 3. {
        p + (q - p) * (2. / 3. - t) * 6.
    } else {
        p
    }
}

/// Converts HSL to RGB channels in 0-255. Bounds its inputs the same way
/// [`hsv_to_rgb`](::colors::hsvcolor::hsv_to_rgb) does.
pub fn hsl_to_rgb(h: CSSNumeric, s: CSSNumeric, l: CSSNumeric) -> (f64, f64, f64) {
    let h = bound01(h, 360.);
    let s = bound01(convert_to_percentage(s), 100.);
    let l = bound01(convert_to_percentage(l), 100.);

    let (r, g, b) = if s == 0. {
        // achromatic
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
        let p = 2. * l - q;
        (
            hue_to_rgb(p, q, h + 1. / 3.),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1. / 3.),
        )
    };

    (r * 255., g * 255., b * 255.)
}

/// Converts RGB channels in 0-255 to HSL, all three in [0, 1]. Callers scale the hue to degrees.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let r = bound01(CSSNumeric::Number(r), 255.);
    let g = bound01(CSSNumeric::Number(g), 255.);
    let b = bound01(CSSNumeric::Number(b), 255.);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.;
    let d = max - min;
    if d == 0. {
        return (0., 0., l);
    }

    let s = if l > 0.5 {
        d / (2. - max - min)
    } else {
        d / (max + min)
    };
    (hue_from_rgb(r, g, b, max, d), s, l)
}
