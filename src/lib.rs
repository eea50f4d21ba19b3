//! colorselect is the conversion engine behind a color picker. It reads colors in whatever shape they
//! arrive in (hex codes of three, four, six, or eight digits, CSS `rgb()`, `hsl()`, and the `hsv()`
//! that pickers speak, the CSS named colors, or structured records of channel values) and brings them
//! all to one canonical RGBA form. From there a [`Color`](color::Color) writes itself back out in any
//! of those shapes, with the rounding and edge cases that let values survive the trip back and forth.
//!
//! Parsing is lenient by default, because a picker fed a bad value should show something rather than
//! fall over: [`Color::new`](color::Color::new) gives opaque black for input it can't read, and
//! [`Color::parse`](color::Color::parse) is there for callers who want to know.

#![doc(html_root_url = "https://docs.rs/colorselect/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
#[macro_use]
extern crate float_cmp;
#[cfg(test)]
extern crate serde_json;

pub mod bound;
pub mod color;
pub mod colors;
pub mod csscolor;
pub mod cssnumeric;
pub mod input;
pub mod named;
pub mod prelude;
pub mod selection;
