//! The state behind a color picker: the hue, saturation, brightness and alpha that its sliders
//! control, plus the format its value is written out in. Every read builds a fresh [`Color`] from
//! those four numbers, so the selection itself is just a handful of floats.

use bound::{clamp, clamp01};
use color::{Color, ColorParseError, Format};

/// The formats a picker cycles through, in order.
pub const FORMAT_CYCLE: [Format; 4] = [Format::Hex, Format::Rgb, Format::Hsl, Format::Hsv];

/// The value a picker starts from when it isn't given one.
pub const DEFAULT_VALUE: &str = "#FF0000";

/// A picker's current selection.
///
/// ```
/// # use colorselect::prelude::*;
/// let mut picker = ColorSelection::from_value("rgb(0, 0, 255)").unwrap();
/// assert_eq!(picker.value(), "rgb(0, 0, 255)");
/// picker.set_alpha(0.5);
/// picker.next_format();
/// assert_eq!(picker.value(), "hsla(240, 100%, 50%, 0.5)");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSelection {
    hue: f64,
    saturation: f64,
    brightness: f64,
    alpha: f64,
    format: Format,
}

impl Default for ColorSelection {
    /// Opaque red, written as hex.
    fn default() -> ColorSelection {
        ColorSelection {
            hue: 0.,
            saturation: 1.,
            brightness: 1.,
            alpha: 1.,
            format: Format::Hex,
        }
    }
}

impl ColorSelection {
    /// Starts a selection from an existing color value. An empty value starts from
    /// [`DEFAULT_VALUE`]. The value's own format is kept when it is one the picker can write, with
    /// every hex variant read as plain hex.
    pub fn from_value(value: &str) -> Result<ColorSelection, ColorParseError> {
        let value = if value.trim().is_empty() {
            DEFAULT_VALUE
        } else {
            value
        };
        let color = Color::parse(value)?;
        let hsv = color.to_hsv();
        let format = match color.format() {
            f if f.is_hex() => Format::Hex,
            f if FORMAT_CYCLE.contains(&f) => f,
            f => {
                debug!("picker can't write {:?}, using hex", f);
                Format::Hex
            }
        };
        Ok(ColorSelection {
            hue: hsv.h,
            saturation: hsv.s,
            brightness: hsv.v,
            alpha: hsv.a,
            format,
        })
    }

    /// Hue in degrees, 0 to 360.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Saturation, 0 to 1.
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Brightness (HSV value), 0 to 1.
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Alpha, 0 to 1.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The format [`value`](ColorSelection::value) writes in.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Sets the hue, clamped to [0, 360].
    pub fn set_hue(&mut self, hue: f64) {
        self.hue = clamp(hue, 0., 360.);
    }

    /// Sets the saturation, clamped to [0, 1].
    pub fn set_saturation(&mut self, saturation: f64) {
        self.saturation = clamp01(saturation);
    }

    /// Sets the brightness, clamped to [0, 1].
    pub fn set_brightness(&mut self, brightness: f64) {
        self.brightness = clamp01(brightness);
    }

    /// Sets the alpha, clamped to [0, 1].
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = clamp01(alpha);
    }

    /// Moves to the next format in [`FORMAT_CYCLE`], wrapping at the end.
    pub fn next_format(&mut self) {
        let index = FORMAT_CYCLE
            .iter()
            .position(|f| *f == self.format)
            .map_or(0, |i| (i + 1) % FORMAT_CYCLE.len());
        self.format = FORMAT_CYCLE[index];
    }

    /// The selected color.
    pub fn color(&self) -> Color {
        Color::from_hsva(self.hue, self.saturation, self.brightness, self.alpha)
    }

    /// The selected color as a lowercase `#rrggbb`, ignoring alpha.
    pub fn selected_hex(&self) -> String {
        format!("#{}", self.color().to_hex_string(false))
    }

    /// The selection written in its format. Hex is upper case, with an alpha pair only when the
    /// selection isn't opaque.
    pub fn value(&self) -> String {
        let color = self.color();
        match self.format {
            Format::Rgb => color.to_rgb_string(),
            Format::Hsl => color.to_hsl_string(),
            Format::Hsv => color.to_hsv_string(),
            _ if self.alpha == 1. => format!("#{}", color.to_hex_string(false).to_uppercase()),
            _ => format!("#{}", color.to_hex8_string(false).to_uppercase()),
        }
    }

    /// Whether the selection should be previewed on a dark background: it is dim or mostly
    /// transparent.
    pub fn use_dark_background(&self) -> bool {
        self.brightness < 0.5 || self.alpha < 0.5
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_default_selection() {
        let picker = ColorSelection::default();
        assert_eq!(picker.value(), "#FF0000");
        assert_eq!(picker.selected_hex(), "#ff0000");
        assert!(!picker.use_dark_background());
        assert_eq!(ColorSelection::from_value("").unwrap(), picker);
    }

    #[test]
    fn test_format_cycle() {
        let mut picker = ColorSelection::default();
        let mut values = vec![];
        for _ in 0..4 {
            picker.next_format();
            values.push(picker.value());
        }
        assert_eq!(
            values,
            vec!["rgb(255, 0, 0)", "hsl(0, 100%, 50%)", "hsv(0, 100%, 100%)", "#FF0000"]
        );
    }

    #[test]
    fn test_from_value() {
        let picker = ColorSelection::from_value("rgba(0, 0, 255, 0.5)").unwrap();
        assert!(approx_eq!(f64, picker.hue(), 240., epsilon = 1e-9));
        assert_eq!((picker.saturation(), picker.brightness()), (1., 1.));
        assert_eq!(picker.alpha(), 0.5);
        assert_eq!(picker.format(), Format::Rgb);
        assert_eq!(picker.value(), "rgba(0, 0, 255, 0.5)");
        assert!(!picker.use_dark_background());

        let hex8 = ColorSelection::from_value("#00ff0080").unwrap();
        assert_eq!(hex8.format(), Format::Hex);
        assert_eq!(hex8.value(), "#00FF0080");

        assert_eq!(ColorSelection::from_value("navy").unwrap().format(), Format::Hex);
        assert!(ColorSelection::from_value("not a color").is_err());
    }

    #[test]
    fn test_setters_clamp() {
        let mut picker = ColorSelection::default();
        picker.set_hue(400.);
        picker.set_saturation(-1.);
        picker.set_brightness(0.2);
        picker.set_alpha(2.);
        assert_eq!(picker.hue(), 360.);
        assert_eq!(picker.saturation(), 0.);
        assert_eq!(picker.alpha(), 1.);
        assert!(picker.use_dark_background());
        assert_eq!(picker.selected_hex(), "#333333");
    }
}
