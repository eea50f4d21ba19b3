//! This file defines [`Color`], the canonical form every input is normalized to, along with the
//! [`Format`] tags that record what shape an input came in and the errors strict parsing can give.
//! A `Color` is an immutable RGBA value: it is built once from a string or a structured record,
//! and every `to_*` method is a pure read of that state. Color pickers rebuild a new `Color`
//! whenever a slider moves rather than changing one in place.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use colors::hslcolor::rgb_to_hsl;
use colors::hsvcolor::rgb_to_hsv;
use colors::rgbcolor::{rgb_to_hex, rgba_to_hex};
use colors::{HSLColor, HSVColor, PercentageRGB, RGBColor};
use input::{input_to_rgb, ColorInput, StructuredColor};
use named::hex_to_name;

/// The shape a color was given in, which doubles as the default shape to write it back out in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `rgb(255, 0, 0)` or `rgba(255, 0, 0, 0.5)`, or an RGB record.
    Rgb,
    /// `rgb(100%, 0%, 0%)`: RGB with percentage channels.
    Prgb,
    /// A six-digit (or three-digit) hex code.
    Hex,
    /// A hex code, shortened to three digits when possible.
    Hex3,
    /// An eight-digit hex code, shortened to four digits when possible.
    Hex4,
    /// A six-digit hex code.
    Hex6,
    /// An eight-digit hex code, with alpha.
    Hex8,
    /// A CSS color name.
    Name,
    /// `hsl(0, 100%, 50%)` or `hsla(...)`, or an HSL record.
    Hsl,
    /// `hsv(0, 100%, 100%)` or `hsva(...)`, or an HSV record.
    Hsv,
    /// Not recognized.
    #[serde(rename = "")]
    Unknown,
}

impl Format {
    /// The format's name, as it is written in configuration.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Format::Rgb => "rgb",
            Format::Prgb => "prgb",
            Format::Hex => "hex",
            Format::Hex3 => "hex3",
            Format::Hex4 => "hex4",
            Format::Hex6 => "hex6",
            Format::Hex8 => "hex8",
            Format::Name => "name",
            Format::Hsl => "hsl",
            Format::Hsv => "hsv",
            Format::Unknown => "",
        }
    }

    /// Whether this is one of the hex formats.
    pub fn is_hex(&self) -> bool {
        match *self {
            Format::Hex | Format::Hex3 | Format::Hex4 | Format::Hex6 | Format::Hex8 => true,
            _ => false,
        }
    }

    /// Whether this format writes a hex code or a name: the formats that fall back to `rgba()` for
    /// partially transparent colors unless pinned.
    pub fn is_hex_or_name(&self) -> bool {
        self.is_hex() || *self == Format::Name
    }
}

impl Default for Format {
    fn default() -> Format {
        Format::Unknown
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Format {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Format, ColorParseError> {
        match s.trim().to_lowercase().as_str() {
            "rgb" => Ok(Format::Rgb),
            "prgb" => Ok(Format::Prgb),
            "hex" => Ok(Format::Hex),
            "hex3" => Ok(Format::Hex3),
            "hex4" => Ok(Format::Hex4),
            "hex6" => Ok(Format::Hex6),
            "hex8" => Ok(Format::Hex8),
            "name" => Ok(Format::Name),
            "hsl" => Ok(Format::Hsl),
            "hsv" => Ok(Format::Hsv),
            "" => Ok(Format::Unknown),
            other => Err(ColorParseError::UnknownFormat(other.to_string())),
        }
    }
}

/// An error from strict color parsing. [`Color::new`] never gives one of these: it falls back to
/// opaque black instead.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input string was empty or only whitespace.
    Empty,
    /// The input string wasn't a hex code, a known name, or functional notation.
    UnrecognizedString(String),
    /// A structured record didn't carry a complete, valid set of RGB, HSV, or HSL channels.
    MissingChannels,
    /// A format name that isn't one of the known formats.
    UnknownFormat(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorParseError::Empty => write!(f, "empty color string"),
            ColorParseError::UnrecognizedString(ref s) => write!(f, "unrecognized color {:?}", s),
            ColorParseError::MissingChannels => {
                write!(f, "color record needs valid r, g, b or h, s, v or h, s, l channels")
            }
            ColorParseError::UnknownFormat(ref s) => write!(f, "unknown color format {:?}", s),
        }
    }
}

impl Error for ColorParseError {}

/// A color in canonical form: red, green, and blue from 0 to 255 and alpha from 0 to 1, plus the
/// format it was given in.
///
/// # Example
/// Parse once, then write the color back out in whatever form is needed.
///
/// ```
/// # use colorselect::prelude::*;
/// let red = Color::new("red");
/// assert_eq!(red.to_hex_string(false), "ff0000");
/// assert_eq!(red.to_rgb_string(), "rgb(255, 0, 0)");
/// assert_eq!(red.to_hsl_string(), "hsl(0, 100%, 50%)");
/// assert_eq!(red.to_string(), "red");
///
/// let picked = Color::new("hsva(0, 1, 1, 0.5)");
/// assert_eq!(picked.to_rgb_string(), "rgba(255, 0, 0, 0.5)");
/// assert_eq!(picked.to_hex8_string(false), "ff000080");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
    // alpha rounded to two places, as written in rgba() and friends
    round_a: f64,
    format: Format,
    pinned: bool,
    ok: bool,
}

impl Color {
    /// Builds a color from anything that converts into a [`ColorInput`], never failing. Input that
    /// can't be read gives opaque black, with [`is_ok`](Color::is_ok) false.
    pub fn new<T: Into<ColorInput>>(input: T) -> Color {
        let normalized = input_to_rgb(&input.into());
        // sub-unit channels are float residue, not real color
        let settle = |c: f64| if c < 1. { c.round() } else { c };
        Color {
            r: settle(normalized.r),
            g: settle(normalized.g),
            b: settle(normalized.b),
            a: normalized.a,
            round_a: (100. * normalized.a).round() / 100.,
            format: normalized.format,
            pinned: normalized.pinned,
            ok: normalized.ok,
        }
    }

    /// Builds a color strictly, giving an error for input that can't be read.
    ///
    /// ```
    /// # use colorselect::prelude::*;
    /// assert!(Color::parse("#00ff00").is_ok());
    /// assert_eq!(Color::parse("   "), Err(ColorParseError::Empty));
    /// assert_eq!(Color::parse(StructuredColor::default()), Err(ColorParseError::MissingChannels));
    /// ```
    pub fn parse<T: Into<ColorInput>>(input: T) -> Result<Color, ColorParseError> {
        let input = input.into();
        let color = Color::new(input.clone());
        if color.ok {
            return Ok(color);
        }
        Err(match input {
            ColorInput::Text(ref s) if s.trim().is_empty() => ColorParseError::Empty,
            ColorInput::Text(s) => ColorParseError::UnrecognizedString(s),
            ColorInput::Structured(_) => ColorParseError::MissingChannels,
        })
    }

    /// Builds a color and pins its format. The pinned format is used by [`Display`](fmt::Display)
    /// and is written as requested even when alpha is partial.
    pub fn with_format<T: Into<ColorInput>>(input: T, format: Format) -> Color {
        let mut color = Color::new(input);
        color.format = format;
        color.pinned = true;
        color
    }

    /// Builds a color from picker coordinates: hue in degrees, saturation, brightness, and alpha in
    /// [0, 1].
    pub fn from_hsva(h: f64, s: f64, v: f64, a: f64) -> Color {
        Color::new(StructuredColor::hsv(h, s, v).with_alpha(a))
    }

    /// Whether the input was actually read. A color that failed to parse is opaque black.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// The format the color was given in, or the pinned one.
    pub fn format(&self) -> Format {
        self.format
    }

    /// The alpha channel, from 0 to 1, unrounded.
    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// Perceived brightness from 0 to 255, weighing green heaviest and blue lightest.
    pub fn brightness(&self) -> f64 {
        let rgb = self.to_rgb();
        (rgb.r * 299. + rgb.g * 587. + rgb.b * 114.) / 1000.
    }

    /// Whether the color is dark enough that light text belongs on top of it.
    pub fn is_dark(&self) -> bool {
        self.brightness() < 128.
    }

    /// The opposite of [`is_dark`](Color::is_dark).
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// The color as RGBA, with channels rounded to integers.
    pub fn to_rgb(&self) -> RGBColor {
        RGBColor {
            r: self.r.round(),
            g: self.g.round(),
            b: self.b.round(),
            a: self.a,
        }
    }

    /// The color as HSVA, with hue in degrees.
    pub fn to_hsv(&self) -> HSVColor {
        let (h, s, v) = rgb_to_hsv(self.r, self.g, self.b);
        HSVColor {
            h: h * 360.,
            s,
            v,
            a: self.a,
        }
    }

    /// The color as HSLA, with hue in degrees.
    pub fn to_hsl(&self) -> HSLColor {
        let (h, s, l) = rgb_to_hsl(self.r, self.g, self.b);
        HSLColor {
            h: h * 360.,
            s,
            l,
            a: self.a,
        }
    }

    /// The color as RGBA with percentage channels.
    pub fn to_percentage_rgb(&self) -> PercentageRGB {
        let (r, g, b) = self.percentages();
        PercentageRGB {
            r: format!("{}%", r),
            g: format!("{}%", g),
            b: format!("{}%", b),
            a: self.a,
        }
    }

    // each channel as a whole percentage
    fn percentages(&self) -> (u32, u32, u32) {
        let percent = |c: f64| (c / 255. * 100.).round() as u32;
        (percent(self.r), percent(self.g), percent(self.b))
    }

    // each channel rounded for display
    fn channels(&self) -> (u8, u8, u8) {
        (self.r.round() as u8, self.g.round() as u8, self.b.round() as u8)
    }

    /// `rgb(r, g, b)` if opaque, `rgba(r, g, b, a)` otherwise, with alpha to two places.
    pub fn to_rgb_string(&self) -> String {
        let (r, g, b) = self.channels();
        if self.a == 1. {
            format!("rgb({}, {}, {})", r, g, b)
        } else {
            format!("rgba({}, {}, {}, {})", r, g, b, self.round_a)
        }
    }

    /// `rgb(r%, g%, b%)` if opaque, `rgba(r%, g%, b%, a)` otherwise.
    pub fn to_percentage_rgb_string(&self) -> String {
        let (r, g, b) = self.percentages();
        if self.a == 1. {
            format!("rgb({}%, {}%, {}%)", r, g, b)
        } else {
            format!("rgba({}%, {}%, {}%, {})", r, g, b, self.round_a)
        }
    }

    /// `hsv(h, s%, v%)` if opaque, `hsva(h, s%, v%, a)` otherwise, all rounded to integers except
    /// alpha.
    pub fn to_hsv_string(&self) -> String {
        let (h, s, v) = rgb_to_hsv(self.r, self.g, self.b);
        let (h, s, v) = (
            (h * 360.).round() as u32,
            (s * 100.).round() as u32,
            (v * 100.).round() as u32,
        );
        if self.a == 1. {
            format!("hsv({}, {}%, {}%)", h, s, v)
        } else {
            format!("hsva({}, {}%, {}%, {})", h, s, v, self.round_a)
        }
    }

    /// `hsl(h, s%, l%)` if opaque, `hsla(h, s%, l%, a)` otherwise, all rounded to integers except
    /// alpha.
    pub fn to_hsl_string(&self) -> String {
        let (h, s, l) = rgb_to_hsl(self.r, self.g, self.b);
        let (h, s, l) = (
            (h * 360.).round() as u32,
            (s * 100.).round() as u32,
            (l * 100.).round() as u32,
        );
        if self.a == 1. {
            format!("hsl({}, {}%, {}%)", h, s, l)
        } else {
            format!("hsla({}, {}%, {}%, {})", h, s, l, self.round_a)
        }
    }

    /// Six hex digits, no leading '#'. With `allow_short`, three digits when every pair is doubled.
    pub fn to_hex_string(&self, allow_short: bool) -> String {
        rgb_to_hex(self.r, self.g, self.b, allow_short)
    }

    /// Eight hex digits including alpha, no leading '#'. With `allow_short`, four digits when every
    /// pair is doubled.
    pub fn to_hex8_string(&self, allow_short: bool) -> String {
        rgba_to_hex(self.r, self.g, self.b, self.a, allow_short)
    }

    /// The CSS name of this exact color. Fully transparent colors are `transparent`; partially
    /// transparent ones have no name.
    ///
    /// ```
    /// # use colorselect::prelude::*;
    /// assert_eq!(Color::new("#f0f8ff").to_name(), Some("aliceblue"));
    /// assert_eq!(Color::new("rgba(0, 0, 0, 0)").to_name(), Some("transparent"));
    /// assert_eq!(Color::new("rgba(240, 248, 255, 0.5)").to_name(), None);
    /// assert_eq!(Color::new("#f0f8fe").to_name(), None);
    /// ```
    pub fn to_name(&self) -> Option<&'static str> {
        if self.a == 0. {
            return Some("transparent");
        }
        if self.a < 1. {
            return None;
        }
        hex_to_name(&self.to_hex_string(true))
    }

    /// Writes the color in `format`. Hex codes get a leading '#'. A partially transparent color asked
    /// for as hex or a name is written as `rgba()` instead, unless its format was pinned.
    ///
    /// ```
    /// # use colorselect::prelude::*;
    /// let faded = Color::new("rgba(255, 0, 0, 0.4)");
    /// assert_eq!(faded.to_string_as(Format::Hex), "rgba(255, 0, 0, 0.4)");
    /// assert_eq!(faded.to_string_as(Format::Hsl), "hsla(0, 100%, 50%, 0.4)");
    /// let pinned = Color::with_format("rgba(255, 0, 0, 0.4)", Format::Hex8);
    /// assert_eq!(pinned.to_string_as(Format::Hex), "#ff0000");
    /// ```
    pub fn to_string_as(&self, format: Format) -> String {
        let partial_alpha = self.a > 0. && self.a < 1.;
        if partial_alpha && !self.pinned && format.is_hex_or_name() {
            trace!("writing {} as rgba to keep alpha {}", format, self.a);
            return self.to_rgb_string();
        }
        self.to_string_forced(format)
    }

    /// Writes the color in `format` no matter its alpha. Formats that come out empty (an unnamed
    /// color asked for as a name, or `Unknown`) fall back to a six-digit hex code.
    pub fn to_string_forced(&self, format: Format) -> String {
        let formatted = match format {
            Format::Rgb => self.to_rgb_string(),
            Format::Prgb => self.to_percentage_rgb_string(),
            Format::Hex | Format::Hex6 => format!("#{}", self.to_hex_string(false)),
            Format::Hex3 => format!("#{}", self.to_hex_string(true)),
            Format::Hex4 => format!("#{}", self.to_hex8_string(true)),
            Format::Hex8 => format!("#{}", self.to_hex8_string(false)),
            Format::Name => self.to_name().unwrap_or("").to_string(),
            Format::Hsl => self.to_hsl_string(),
            Format::Hsv => self.to_hsv_string(),
            Format::Unknown => String::new(),
        };
        if formatted.is_empty() {
            format!("#{}", self.to_hex_string(false))
        } else {
            formatted
        }
    }
}

impl fmt::Display for Color {
    /// Writes the color in its own format.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string_as(self.format))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Color, ColorParseError> {
        Color::parse(s)
    }
}
