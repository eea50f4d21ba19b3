//! This module turns whatever a caller hands over into the canonical RGBA form every [`Color`]
//! stores. Input is either a string, which is classified by [`csscolor`](::csscolor) first, or a
//! structured record of channel values. Records are recognized by which channels they carry: a
//! complete set of valid `r`, `g`, `b` wins, then `h`, `s`, `v`, then `h`, `s`, `l`.
//!
//! [`Color`]: ../color/struct.Color.html

use bound::{bound_alpha, clamp255};
use color::Format;
use colors::hslcolor::hsl_to_rgb;
use colors::hsvcolor::hsv_to_rgb;
use colors::rgbcolor::rgb_to_rgb;
use colors::{HSLColor, HSVColor, RGBColor};
use csscolor::{classify, ParsedShape};
use cssnumeric::Unit;

/// A color given channel by channel. Any subset of the fields may be set; which ones are present
/// (and valid) decides how the record is read. Setting `format` pins the color's format: it becomes
/// the default output format, and partial alpha will no longer push hex or name output to `rgba()`.
///
/// ```
/// # use colorselect::prelude::*;
/// let picked = StructuredColor::hsv(120, 0.5, "100%").with_alpha(0.5);
/// assert_eq!(Color::new(picked).to_rgb_string(), "rgba(128, 255, 128, 0.5)");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StructuredColor {
    /// Red, in 0-255 or as a percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<Unit>,
    /// Green, in 0-255 or as a percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g: Option<Unit>,
    /// Blue, in 0-255 or as a percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<Unit>,
    /// Hue, in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<Unit>,
    /// Saturation, as a fraction or a percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<Unit>,
    /// Value (HSV), as a fraction or a percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<Unit>,
    /// Lightness (HSL), as a fraction or a percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l: Option<Unit>,
    /// Alpha, from 0 to 1. Anything else reads as 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<Unit>,
    /// A pinned format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

impl StructuredColor {
    /// An RGB record.
    pub fn rgb<R, G, B>(r: R, g: G, b: B) -> StructuredColor
    where
        R: Into<Unit>,
        G: Into<Unit>,
        B: Into<Unit>,
    {
        StructuredColor {
            r: Some(r.into()),
            g: Some(g.into()),
            b: Some(b.into()),
            ..StructuredColor::default()
        }
    }

    /// An HSV record.
    pub fn hsv<H, S, V>(h: H, s: S, v: V) -> StructuredColor
    where
        H: Into<Unit>,
        S: Into<Unit>,
        V: Into<Unit>,
    {
        StructuredColor {
            h: Some(h.into()),
            s: Some(s.into()),
            v: Some(v.into()),
            ..StructuredColor::default()
        }
    }

    /// An HSL record.
    pub fn hsl<H, S, L>(h: H, s: S, l: L) -> StructuredColor
    where
        H: Into<Unit>,
        S: Into<Unit>,
        L: Into<Unit>,
    {
        StructuredColor {
            h: Some(h.into()),
            s: Some(s.into()),
            l: Some(l.into()),
            ..StructuredColor::default()
        }
    }

    /// Sets the alpha channel.
    pub fn with_alpha<A: Into<Unit>>(mut self, a: A) -> StructuredColor {
        self.a = Some(a.into());
        self
    }

    /// Pins the format.
    pub fn with_format(mut self, format: Format) -> StructuredColor {
        self.format = Some(format);
        self
    }

    // the three named channels, if all present and valid
    fn channels<'a>(
        x: &'a Option<Unit>,
        y: &'a Option<Unit>,
        z: &'a Option<Unit>,
    ) -> Option<(&'a Unit, &'a Unit, &'a Unit)> {
        match (x, y, z) {
            (&Some(ref x), &Some(ref y), &Some(ref z))
                if x.is_valid() && y.is_valid() && z.is_valid() =>
            {
                Some((x, y, z))
            }
            _ => None,
        }
    }
}

impl From<RGBColor> for StructuredColor {
    fn from(c: RGBColor) -> StructuredColor {
        StructuredColor::rgb(c.r, c.g, c.b).with_alpha(c.a)
    }
}

impl From<HSVColor> for StructuredColor {
    fn from(c: HSVColor) -> StructuredColor {
        StructuredColor::hsv(c.h, c.s, c.v).with_alpha(c.a)
    }
}

impl From<HSLColor> for StructuredColor {
    fn from(c: HSLColor) -> StructuredColor {
        StructuredColor::hsl(c.h, c.s, c.l).with_alpha(c.a)
    }
}

/// Anything a [`Color`](::color::Color) can be built from. Deserializes from either a string or
/// a structured record, so colors can be written either way in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// A color string: hex, functional notation, or a name.
    Text(String),
    /// A channel-by-channel record.
    Structured(StructuredColor),
}

impl<'a> From<&'a str> for ColorInput {
    fn from(s: &'a str) -> ColorInput {
        ColorInput::Text(s.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> ColorInput {
        ColorInput::Text(s)
    }
}

impl<'a> From<&'a String> for ColorInput {
    fn from(s: &'a String) -> ColorInput {
        ColorInput::Text(s.clone())
    }
}

impl From<StructuredColor> for ColorInput {
    fn from(c: StructuredColor) -> ColorInput {
        ColorInput::Structured(c)
    }
}

impl From<RGBColor> for ColorInput {
    fn from(c: RGBColor) -> ColorInput {
        ColorInput::Structured(c.into())
    }
}

impl From<HSVColor> for ColorInput {
    fn from(c: HSVColor) -> ColorInput {
        ColorInput::Structured(c.into())
    }
}

impl From<HSLColor> for ColorInput {
    fn from(c: HSLColor) -> ColorInput {
        ColorInput::Structured(c.into())
    }
}

/// The result of normalizing an input: channels clamped to [0, 255], alpha bounded to [0, 1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Normalized {
    /// Red, 0-255.
    pub r: f64,
    /// Green, 0-255.
    pub g: f64,
    /// Blue, 0-255.
    pub b: f64,
    /// Alpha, 0-1.
    pub a: f64,
    /// The detected or pinned format.
    pub format: Format,
    /// Whether the format was pinned by the caller.
    pub pinned: bool,
    /// Whether any channels were actually read.
    pub ok: bool,
}

/// Rewrites a classified string as a record, or `None` if it wasn't recognized.
fn shape_to_structured(shape: ParsedShape) -> Option<StructuredColor> {
    let record = match shape {
        ParsedShape::Rgb(r, g, b) => StructuredColor::rgb(r, g, b),
        ParsedShape::Rgba(r, g, b, a) => StructuredColor::rgb(r, g, b).with_alpha(a),
        ParsedShape::Hsl(h, s, l) => StructuredColor::hsl(h, s, l),
        ParsedShape::Hsla(h, s, l, a) => StructuredColor::hsl(h, s, l).with_alpha(a),
        ParsedShape::Hsv(h, s, v) => StructuredColor::hsv(h, s, v),
        ParsedShape::Hsva(h, s, v, a) => StructuredColor::hsv(h, s, v).with_alpha(a),
        ParsedShape::Hex { r, g, b, a, format } => {
            let record = StructuredColor::rgb(r, g, b).with_format(format);
            match a {
                Some(a) => record.with_alpha(a),
                None => record,
            }
        }
        ParsedShape::Named { r, g, b, a } => StructuredColor::rgb(r, g, b)
            .with_alpha(a)
            .with_format(Format::Name),
        ParsedShape::Invalid => return None,
    };
    Some(record)
}

/// Normalizes any input to canonical RGBA. Never fails: unrecognized input comes back as opaque
/// black with `ok` unset.
pub fn input_to_rgb(input: &ColorInput) -> Normalized {
    let (record, pinned) = match *input {
        ColorInput::Text(ref s) => (shape_to_structured(classify(s)), false),
        ColorInput::Structured(ref c) => (Some(c.clone()), c.format.is_some()),
    };

    let mut rgb = (0., 0., 0.);
    let mut ok = false;
    let mut format = Format::Unknown;
    let mut alpha = None;

    if let Some(ref color) = record {
        if let Some((r, g, b)) = StructuredColor::channels(&color.r, &color.g, &color.b) {
            rgb = rgb_to_rgb(r.to_numeric(), g.to_numeric(), b.to_numeric());
            ok = true;
            format = if r.is_percentage() {
                Format::Prgb
            } else {
                Format::Rgb
            };
        } else if let Some((h, s, v)) = StructuredColor::channels(&color.h, &color.s, &color.v) {
            rgb = hsv_to_rgb(h.to_numeric(), s.to_numeric(), v.to_numeric());
            ok = true;
            format = Format::Hsv;
        } else if let Some((h, s, l)) = StructuredColor::channels(&color.h, &color.s, &color.l) {
            rgb = hsl_to_rgb(h.to_numeric(), s.to_numeric(), l.to_numeric());
            ok = true;
            format = Format::Hsl;
        }
        alpha = color.a.as_ref();
        if let Some(pinned_format) = color.format {
            format = pinned_format;
        }
    }

    Normalized {
        r: clamp255(rgb.0),
        g: clamp255(rgb.1),
        b: clamp255(rgb.2),
        a: bound_alpha(alpha),
        format,
        pinned,
        ok,
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn rounded(n: &Normalized) -> (f64, f64, f64, f64) {
        (n.r.round(), n.g.round(), n.b.round(), n.a)
    }

    #[test]
    fn test_string_inputs() {
        let red = input_to_rgb(&"rgb(255, 0, 0)".into());
        assert_eq!(rounded(&red), (255., 0., 0., 1.));
        assert_eq!(red.format, Format::Rgb);
        assert!(red.ok && !red.pinned);

        let half = input_to_rgb(&"rgba(255, 0, 0, 0.5)".into());
        assert_eq!(rounded(&half), (255., 0., 0., 0.5));

        let named = input_to_rgb(&"red".into());
        assert_eq!(named.format, Format::Name);
        assert!(!named.pinned);

        let hex8 = input_to_rgb(&"#ff000080".into());
        assert_eq!(hex8.format, Format::Hex8);
        assert!((hex8.a - 128. / 255.).abs() < 1e-12);

        let hsv = input_to_rgb(&"hsva(120, 1, 1, 1)".into());
        assert_eq!(rounded(&hsv), (0., 255., 0., 1.));
        assert_eq!(hsv.format, Format::Hsv);

        let hsl = input_to_rgb(&"hsl(240, 100%, 50%)".into());
        assert_eq!(rounded(&hsl), (0., 0., 255., 1.));
        assert_eq!(hsl.format, Format::Hsl);
    }

    #[test]
    fn test_percentage_rgb() {
        let prgb = input_to_rgb(&"rgb(100%, 50%, 0%)".into());
        assert_eq!(prgb.format, Format::Prgb);
        assert_eq!(rounded(&prgb), (255., 128., 0., 1.));
    }

    #[test]
    fn test_unrecognized_input() {
        let bad = input_to_rgb(&"not a color".into());
        assert!(!bad.ok);
        assert_eq!(rounded(&bad), (0., 0., 0., 1.));
        assert_eq!(bad.format, Format::Unknown);

        let empty = input_to_rgb(&StructuredColor::default().into());
        assert!(!empty.ok);
    }

    #[test]
    fn test_record_priority() {
        // r, g, b beat h, s, v when both are present
        let both = StructuredColor {
            h: Some(Unit::from(120)),
            s: Some(Unit::from(1)),
            v: Some(Unit::from(1)),
            ..StructuredColor::rgb(0, 0, 255)
        };
        let n = input_to_rgb(&both.into());
        assert_eq!(rounded(&n), (0., 0., 255., 1.));
        assert_eq!(n.format, Format::Rgb);

        // an invalid r falls through to hsv
        let bad_rgb = StructuredColor {
            r: Some(Unit::from("lots")),
            g: Some(Unit::from(0)),
            b: Some(Unit::from(0)),
            ..StructuredColor::hsv(120, 1, 1)
        };
        assert_eq!(input_to_rgb(&bad_rgb.into()).format, Format::Hsv);
    }

    #[test]
    fn test_alpha_is_lenient() {
        let n = input_to_rgb(&StructuredColor::rgb(10, 20, 30).with_alpha(5).into());
        assert_eq!(n.a, 1.);
        assert!(n.ok);
        let n = input_to_rgb(&"rgba(10, 20, 30, 40%)".into());
        assert_eq!(n.a, 1.);
    }

    #[test]
    fn test_pinned_format() {
        let n = input_to_rgb(&StructuredColor::rgb(255, 0, 0).with_format(Format::Hex).into());
        assert_eq!(n.format, Format::Hex);
        assert!(n.pinned);
    }

    #[test]
    fn test_channels_are_clamped() {
        let n = input_to_rgb(&StructuredColor::rgb(300, -5, "120%").into());
        // 120% is 306, which wraps round to 51
        assert_eq!(rounded(&n), (255., 0., 51., 1.));
    }

    #[test]
    fn test_records_deserialize() {
        let input: ColorInput = ::serde_json::from_str(r#"{"h": 0, "s": "100%", "v": 1, "a": 0.5}"#).unwrap();
        let n = input_to_rgb(&input);
        assert_eq!(rounded(&n), (255., 0., 0., 0.5));
        let input: ColorInput = ::serde_json::from_str(r##""#00ff00""##).unwrap();
        assert_eq!(input, ColorInput::Text("#00ff00".to_string()));
    }
}
