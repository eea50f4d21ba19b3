//! This file separates out the more difficult aspects of reading channel values, in this case
//! dealing with CSS numeric notation and all of its warts. Color pickers get their channel values
//! from many places: slider positions come in as plain floats, configuration comes in as strings
//! like "50%" or "0.5", and functional notation like "hsv(120, 100%, 50%)" gets split into string
//! tokens. All of those end up as a [`Unit`], which is then read into a [`CSSNumeric`] before
//! bounding. (Source for CSS syntax:
//! [https://www.w3.org/TR/css-color-3/](https://www.w3.org/TR/css-color-3/).)

use std::fmt;

use regex::Regex;

lazy_static! {
    // an optionally signed integer or decimal, either of them optionally followed by '%'; ASCII
    // digits only
    static ref CSS_UNIT: Regex =
        Regex::new(r"^(?:[-\+]?[0-9]*\.[0-9]+%?|[-\+]?[0-9]+%?)$").expect("valid CSS unit regex");
    // the longest numeric prefix of a string, the way a lenient float reader sees it
    static ref FLOAT_PREFIX: Regex =
        Regex::new(r"^[-\+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][-\+]?[0-9]+)?")
            .expect("valid float regex");
}

/// A raw channel value as a caller hands it over: either a plain number, or a string in CSS
/// numeric notation such as `"255"`, `".5"`, or `"40%"`. Deserializes from either a JSON number or
/// a JSON string.
///
/// ```
/// # use colorselect::prelude::*;
/// let from_slider: Unit = 0.25.into();
/// let from_config: Unit = "25%".into();
/// assert!(from_slider.is_valid());
/// assert!(from_config.is_valid());
/// assert!(!Unit::from("quarter").is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Unit {
    /// A plain number. `1` here is just one, not "all of it": only strings can spell 100% as `"1.0"`.
    Number(f64),
    /// A CSS numeric token. May carry a trailing `%`.
    Text(String),
}

impl Unit {
    /// Whether this value is something a channel can be read from: a finite number, or a string
    /// that is entirely a CSS integer, decimal, or percentage.
    pub fn is_valid(&self) -> bool {
        match *self {
            Unit::Number(n) => n.is_finite(),
            Unit::Text(ref s) => is_valid_css_unit(s),
        }
    }

    /// Whether this is a percentage string, like `"40%"`.
    pub fn is_percentage(&self) -> bool {
        match *self {
            Unit::Number(_) => false,
            Unit::Text(ref s) => s.trim_end().ends_with('%'),
        }
    }

    /// The float this value starts with, read leniently: `"50%"` reads as 50 and anything without a
    /// numeric prefix reads as NaN.
    pub fn float_value(&self) -> f64 {
        match *self {
            Unit::Number(n) => n,
            Unit::Text(ref s) => parse_float(s),
        }
    }

    /// Reads this value into a [`CSSNumeric`], never failing: garbage becomes a NaN number.
    pub fn to_numeric(&self) -> CSSNumeric {
        match *self {
            Unit::Number(n) => CSSNumeric::Number(n),
            Unit::Text(ref s) => {
                let value = parse_float(s);
                if self.is_percentage() {
                    CSSNumeric::Percentage(value)
                } else if s.contains('.') && value == 1.0 {
                    CSSNumeric::OnePointZero
                } else {
                    CSSNumeric::Number(value)
                }
            }
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Unit::Number(n) => write!(f, "{}", n),
            Unit::Text(ref s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Unit {
    fn from(n: f64) -> Unit {
        Unit::Number(n)
    }
}

impl From<f32> for Unit {
    fn from(n: f32) -> Unit {
        Unit::Number(f64::from(n))
    }
}

impl From<i32> for Unit {
    fn from(n: i32) -> Unit {
        Unit::Number(f64::from(n))
    }
}

impl From<u8> for Unit {
    fn from(n: u8) -> Unit {
        Unit::Number(f64::from(n))
    }
}

impl<'a> From<&'a str> for Unit {
    fn from(s: &'a str) -> Unit {
        Unit::Text(s.to_string())
    }
}

impl From<String> for Unit {
    fn from(s: String) -> Unit {
        Unit::Text(s)
    }
}

/// A channel value after reading, but before it has been bounded against any particular range.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum CSSNumeric {
    /// A plain number, in whatever scale the channel uses: 0-255 for RGB, 0-360 for hue, and so on.
    Number(f64),
    /// A number followed by '%', to denote one one-hundredth of the channel's full range.
    Percentage(f64),
    /// A decimal string that is exactly one, like "1.0". This always means the whole range, which is
    /// what lets "1.0" stand for full saturation without being mistaken for 1 out of 255.
    OnePointZero,
}

/// Tests whether the whole of `token` (surrounding whitespace aside) is a CSS integer, decimal, or
/// percentage: "12", "-3", "+.5", "0.25", "40%" all qualify, "1e3", "5px", and "" do not.
pub fn is_valid_css_unit(token: &str) -> bool {
    CSS_UNIT.is_match(token.trim())
}

/// Reads the longest float at the start of `num`, ignoring leading whitespace and anything after
/// the number. Returns NaN if there is no number at all.
pub fn parse_float(num: &str) -> f64 {
    match FLOAT_PREFIX.find(num.trim_start()) {
        // the regex only admits valid float syntax
        Some(m) => m.as_str().parse().unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_css_unit_validity() {
        assert!(is_valid_css_unit("184"));
        assert!(is_valid_css_unit("-00423"));
        assert!(is_valid_css_unit("+.5"));
        assert!(is_valid_css_unit("0.37%"));
        assert!(is_valid_css_unit(" 40% "));
        assert!(!is_valid_css_unit("1e3"));
        assert!(!is_valid_css_unit("5px"));
        assert!(!is_valid_css_unit("14.23.2"));
        assert!(!is_valid_css_unit(""));
        // digits from other scripts aren't CSS digits
        assert!(!is_valid_css_unit("\u{0661}\u{0662}"));
        assert!(!Unit::from("\u{0661}").is_valid());
        assert!(!Unit::from("\u{0967}0%").is_valid());
        assert!(Unit::Number(3.5).is_valid());
        assert!(!Unit::Number(::std::f64::NAN).is_valid());
        assert!(!Unit::Number(::std::f64::INFINITY).is_valid());
    }

    #[test]
    fn test_lenient_float() {
        assert_eq!(parse_float("50%"), 50.0);
        assert_eq!(parse_float("  .25abc"), 0.25);
        assert_eq!(parse_float("-3"), -3.0);
        assert_eq!(parse_float("1e2"), 100.0);
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("").is_nan());
        assert!(parse_float("\u{0661}").is_nan());
    }

    #[test]
    fn test_unit_reading() {
        assert_eq!(Unit::from("40%").to_numeric(), CSSNumeric::Percentage(40.0));
        assert_eq!(Unit::from("1.0").to_numeric(), CSSNumeric::OnePointZero);
        assert_eq!(Unit::from("1.0%").to_numeric(), CSSNumeric::Percentage(1.0));
        assert_eq!(Unit::from("1").to_numeric(), CSSNumeric::Number(1.0));
        assert_eq!(Unit::from(1.0).to_numeric(), CSSNumeric::Number(1.0));
        assert_eq!(Unit::from(200u8).to_numeric(), CSSNumeric::Number(200.0));
        assert!(Unit::from(" 40% ").is_percentage());
        assert!(!Unit::from("40").is_percentage());
        assert!(!Unit::Number(40.).is_percentage());
    }

    #[test]
    fn test_unit_serde() {
        let units: Vec<Unit> = ::serde_json::from_str(r#"[12, "40%", 0.5]"#).unwrap();
        assert_eq!(units, vec![Unit::Number(12.0), Unit::from("40%"), Unit::Number(0.5)]);
    }
}
