mod parse;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

pub use parse::parse_color;

/// Opaque sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Per-channel linear blend toward `other`.
    ///
    /// `fraction` is not clamped; results are rounded half away from zero and
    /// saturated into `0..=255`, so `fraction == 1.0` yields `other` exactly.
    #[must_use]
    pub fn lerp(self, other: Self, fraction: f64) -> Self {
        Self {
            red: lerp_channel(self.red, other.red, fraction),
            green: lerp_channel(self.green, other.green, fraction),
            blue: lerp_channel(self.blue, other.blue, fraction),
        }
    }
}

fn lerp_channel(low: u8, high: u8, fraction: f64) -> u8 {
    let low = f64::from(low);
    let value = low + fraction * (f64::from(high) - low);
    value.round().clamp(0.0, 255.0) as u8
}

/// Renders the `rgb(r, g, b)` form.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.channels()
    }
}

/// A color as callers hand it over: already structured, or still a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorValue<'a> {
    Rgb(Rgb),
    Text(&'a str),
}

impl ColorValue<'_> {
    pub fn resolve(self) -> GraphResult<Rgb> {
        match self {
            Self::Rgb(color) => Ok(color),
            Self::Text(text) => parse_color(text),
        }
    }
}

impl From<Rgb> for ColorValue<'_> {
    fn from(color: Rgb) -> Self {
        Self::Rgb(color)
    }
}

impl From<(u8, u8, u8)> for ColorValue<'_> {
    fn from(triple: (u8, u8, u8)) -> Self {
        Self::Rgb(triple.into())
    }
}

impl From<[u8; 3]> for ColorValue<'_> {
    fn from(channels: [u8; 3]) -> Self {
        Self::Rgb(channels.into())
    }
}

impl<'a> From<&'a str> for ColorValue<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for ColorValue<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

/// Converts a triple or a color string to lowercase `#rrggbb`.
///
/// Strings in the `rgb(r, g, b)` form go through an explicit tokenizer and
/// must carry exactly three integer channels. Integers outside `0..=255` are
/// clamped into range rather than rejected. Other strings (`#rgb`, `#rrggbb`,
/// CSS color names, `rgba(...)`, `hsl(...)`) are accepted through the CSS
/// parser with alpha discarded.
///
/// ```
/// use graphs::to_hex;
///
/// assert_eq!(to_hex((134, 235, 135)).unwrap(), "#86eb87");
/// assert_eq!(to_hex("rgb(134, 235, 135)").unwrap(), "#86eb87");
/// ```
pub fn to_hex<'a>(color: impl Into<ColorValue<'a>>) -> GraphResult<String> {
    color.into().resolve().map(Rgb::to_hex)
}
