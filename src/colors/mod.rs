//! This module contains the color spaces a color picker moves between, one file per space. Each
//! file holds the structured record callers get back for that space and the pure conversion
//! functions to and from RGB. For convenience, each record type is imported into this module's
//! namespace directly.
pub mod hslcolor;
pub mod hsvcolor;
pub mod rgbcolor;

// for convenience, use this namespace for the records
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;
pub use self::rgbcolor::{PercentageRGB, RGBColor};
