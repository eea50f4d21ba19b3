//! This module describes bounding: taking a channel value in whatever scale it was given in (0-255
//! integers, 0-360 degrees, 0-1 fractions, or percentage strings) and bringing it into the unit
//! interval relative to a declared maximum. Every converter in [`colors`](colors) bounds its inputs
//! with these functions before doing any math, which is why none of them can fail.

use num;

use cssnumeric::{CSSNumeric, Unit};

/// Values this close to the maximum are treated as the maximum itself.
const TOP_OF_RANGE_EPSILON: f64 = 0.000001;

/// Brings `n` into [0, 1] relative to `max`. The raw value is clamped to [0, max] first. Percentages
/// are then scaled onto [0, max], truncated to whole hundredths, and a decimal string that is exactly
/// one (`"1.0"`) counts as 100%. What is left is reduced modulo `max`, so a percentage past 100 wraps:
/// `hsl(150%, ...)` is a hue of 180 degrees. Values within 1e-6 of `max` map to exactly 1 instead of
/// wrapping to 0, so a hue of 360 lands at the top of the wheel and not the bottom.
///
/// ```
/// # use colorselect::bound::bound01;
/// # use colorselect::cssnumeric::CSSNumeric;
/// assert_eq!(bound01(CSSNumeric::Number(127.5), 255.), 0.5);
/// assert_eq!(bound01(CSSNumeric::Percentage(50.), 100.), 0.5);
/// assert_eq!(bound01(CSSNumeric::Number(360.), 360.), 1.0);
/// assert_eq!(bound01(CSSNumeric::OnePointZero, 255.), 1.0);
/// ```
pub fn bound01(n: CSSNumeric, max: f64) -> f64 {
    let (raw, percent) = match n {
        CSSNumeric::Number(v) => (v, false),
        CSSNumeric::Percentage(v) => (v, true),
        CSSNumeric::OnePointZero => (100.0, true),
    };
    let clamped = clamp(raw, 0.0, max);
    let value = if percent {
        (clamped * max).trunc() / 100.0
    } else {
        clamped
    };

    if (value - max).abs() < TOP_OF_RANGE_EPSILON {
        return 1.0;
    }
    (value % max) / max
}

/// Bounds an alpha value. Anything that doesn't read as a number in [0, 1] becomes 1: a color with
/// bad alpha is shown opaque rather than rejected.
pub fn bound_alpha(a: Option<&Unit>) -> f64 {
    let value = match a {
        Some(unit) => unit.float_value(),
        None => 1.0,
    };
    if value.is_nan() || value < 0.0 || value > 1.0 {
        1.0
    } else {
        // "-0" reads as 0
        value.abs()
    }
}

/// Saturation, value, and lightness are accepted both as fractions and as percentages. This reads
/// a plain number of at most 1 as a fraction and rewrites it as the equivalent percentage. Larger
/// numbers and anything already written as a percentage are left as they were, so `"1%"` stays one
/// percent.
pub fn convert_to_percentage(n: CSSNumeric) -> CSSNumeric {
    match n {
        CSSNumeric::Number(value) if value <= 1.0 => CSSNumeric::Percentage(value * 100.0),
        CSSNumeric::OnePointZero => CSSNumeric::Percentage(100.0),
        _ => n,
    }
}

/// Clamps a value to [min, max]. NaN goes to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        num::clamp(value, min, max)
    }
}

/// Clamps a channel to [0, 255].
pub fn clamp255(value: f64) -> f64 {
    clamp(value, 0.0, 255.0)
}

/// Clamps a fraction to [0, 1].
pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}
