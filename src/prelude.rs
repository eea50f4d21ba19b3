//! This module simply brings the most common colorselect functionality under a single namespace, to
//! prevent excessive imports. It includes [`Color`] with its [`Format`] tags and parse error, the
//! inputs a color can be built from, the structured records colors convert to, and the picker's
//! [`ColorSelection`]. The conversion functions in [`colors`](::colors) and the bounding helpers are
//! not included.

pub use color::{Color, ColorParseError, Format};
pub use colors::{HSLColor, HSVColor, PercentageRGB, RGBColor};
pub use cssnumeric::Unit;
pub use input::{ColorInput, StructuredColor};
pub use selection::ColorSelection;
