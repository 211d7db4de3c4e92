//! Palette settings shared by chart callers.
//!
//! Only the color-related part of a chart's settings lives here: which
//! colorscale to use and the two accent colors. The type is serializable so
//! hosts can keep it next to their own layout/export settings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{Rgb, parse_color};
use crate::colorscale::{Colorscale, named_colorscale};
use crate::error::{GraphError, GraphResult};

pub const DEFAULT_COLOR_MAP: &str = "Greens";
pub const DEFAULT_CONTENT_COLOR: &str = "#1B9E31";
pub const DEFAULT_EMPHASIS_COLOR: &str = "#126B21";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteSettings {
    /// Catalog colorscale name, optionally suffixed with `_r`.
    #[serde(default = "default_color_map")]
    pub color_map: String,
    /// Primary color for single-series content.
    #[serde(default = "default_content_color")]
    pub content_color: String,
    /// Secondary color used for accents.
    #[serde(default = "default_emphasis_color")]
    pub emphasis_color: String,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            color_map: default_color_map(),
            content_color: default_content_color(),
            emphasis_color: default_emphasis_color(),
        }
    }
}

impl PaletteSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color_map(mut self, color_map: impl Into<String>) -> Self {
        self.color_map = color_map.into();
        self
    }

    #[must_use]
    pub fn with_content_color(mut self, color: impl Into<String>) -> Self {
        self.content_color = color.into();
        self
    }

    #[must_use]
    pub fn with_emphasis_color(mut self, color: impl Into<String>) -> Self {
        self.emphasis_color = color.into();
        self
    }

    /// Checks that every field resolves.
    pub fn validate(&self) -> GraphResult<()> {
        self.colorscale()?;
        self.content_rgb()?;
        self.emphasis_rgb()?;
        Ok(())
    }

    pub fn colorscale(&self) -> GraphResult<Colorscale> {
        let scale = named_colorscale(&self.color_map)?;
        debug!(
            color_map = %self.color_map,
            stops = scale.stops().len(),
            "resolved palette colorscale"
        );
        Ok(scale)
    }

    pub fn content_rgb(&self) -> GraphResult<Rgb> {
        parse_color(&self.content_color)
    }

    pub fn emphasis_rgb(&self) -> GraphResult<Rgb> {
        parse_color(&self.emphasis_color)
    }

    /// Colors for categorical references, sampled from the configured scale.
    pub fn reference_colors<I, S>(&self, references: I) -> GraphResult<IndexMap<String, Rgb>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.colorscale()?.assign_categories(references)
    }

    /// Parses settings JSON; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        let settings: Self = serde_json::from_str(input).map_err(|e| {
            GraphError::invalid(format!("failed to parse palette settings json: {e}"))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            GraphError::invalid(format!("failed to serialize palette settings json: {e}"))
        })
    }
}

fn default_color_map() -> String {
    DEFAULT_COLOR_MAP.to_owned()
}

fn default_content_color() -> String {
    DEFAULT_CONTENT_COLOR.to_owned()
}

fn default_emphasis_color() -> String {
    DEFAULT_EMPHASIS_COLOR.to_owned()
}
