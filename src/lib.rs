//! graphs: colorscale interpolation core for chart styling.
//!
//! Chart front-ends hand this crate an ordered set of `(cutoff, color)`
//! breakpoints and a position, and get back an interpolated color as [`Rgb`]
//! or as a `#rrggbb` string. Rendering, layout and export stay with the
//! plotting library the host already uses.

pub mod color;
pub mod colorscale;
pub mod error;
pub mod settings;
pub mod telemetry;

pub use color::{ColorValue, Rgb, parse_color, to_hex};
pub use colorscale::{
    ColorStop, Colorscale, catalog_names, interpolate, interpolate_hex, named_colorscale,
};
pub use error::{GraphError, GraphResult};
pub use settings::PaletteSettings;
