//! Continuous colorscales: ordered `(cutoff, color)` breakpoints and the
//! piecewise-linear interpolation between them.

pub mod catalog;
mod mapping;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::color::{Rgb, parse_color};
use crate::error::{GraphError, GraphResult};

pub use catalog::{catalog_names, named_colorscale};

/// One breakpoint of a colorscale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub cutoff: f64,
    pub color: Rgb,
}

impl ColorStop {
    #[must_use]
    pub const fn new(cutoff: f64, color: Rgb) -> Self {
        Self { cutoff, color }
    }

    /// Builds a stop from a color string such as `"rgb(0, 68, 27)"` or `"#00441b"`.
    pub fn parse(cutoff: f64, color: &str) -> GraphResult<Self> {
        Ok(Self::new(cutoff, parse_color(color)?))
    }
}

/// Interpolates the color at position `t` on an ordered slice of stops.
///
/// Positions at or below the first cutoff return the first color, positions at
/// or above the last cutoff return the last color. Between them the first stop
/// whose cutoff is `>= t` and its predecessor bracket `t`, and each channel is
/// blended linearly. A position landing exactly on a cutoff therefore returns
/// that stop's color unchanged.
///
/// Fails with [`GraphError::InvalidInput`] when `stops` is empty, when cutoffs
/// are non-finite or decreasing, or when `t` is NaN.
///
/// ```
/// use graphs::{ColorStop, Rgb, interpolate};
///
/// let scale = [
///     ColorStop::new(0.0, Rgb::BLACK),
///     ColorStop::new(1.0, Rgb::WHITE),
/// ];
/// assert_eq!(interpolate(&scale, 0.5).unwrap(), Rgb::new(128, 128, 128));
/// assert_eq!(interpolate(&scale, 7.0).unwrap(), Rgb::WHITE);
/// ```
pub fn interpolate(stops: &[ColorStop], t: f64) -> GraphResult<Rgb> {
    validate_stops(stops)?;
    interpolate_sorted(stops, t)
}

/// [`interpolate`] rendered as lowercase `#rrggbb`.
pub fn interpolate_hex(stops: &[ColorStop], t: f64) -> GraphResult<String> {
    interpolate(stops, t).map(Rgb::to_hex)
}

fn validate_stops(stops: &[ColorStop]) -> GraphResult<()> {
    if stops.is_empty() {
        return Err(GraphError::invalid(
            "colorscale must contain at least one stop",
        ));
    }

    if let Some((index, stop)) = stops
        .iter()
        .enumerate()
        .find(|(_, stop)| !stop.cutoff.is_finite())
    {
        return Err(GraphError::invalid(format!(
            "colorscale cutoff at index {index} must be finite, got {}",
            stop.cutoff
        )));
    }

    if let Some(index) = stops
        .windows(2)
        .position(|pair| pair[1].cutoff < pair[0].cutoff)
    {
        return Err(GraphError::invalid(format!(
            "colorscale cutoffs must be ascending: {} at index {} follows {}",
            stops[index + 1].cutoff,
            index + 1,
            stops[index].cutoff
        )));
    }

    Ok(())
}

/// Core lookup; `stops` must already satisfy [`validate_stops`].
fn interpolate_sorted(stops: &[ColorStop], t: f64) -> GraphResult<Rgb> {
    if t.is_nan() {
        return Err(GraphError::invalid("interpolation position must not be NaN"));
    }

    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Err(GraphError::invalid(
            "colorscale must contain at least one stop",
        ));
    };

    if t <= first.cutoff || stops.len() == 1 {
        return Ok(first.color);
    }
    if t >= last.cutoff {
        return Ok(last.color);
    }

    // first.cutoff < t < last.cutoff, so 1 <= high < len and low.cutoff < t.
    let high = stops.partition_point(|stop| stop.cutoff < t);
    let (low, high) = (stops[high - 1], stops[high]);
    // Halved operands keep the span finite for cutoffs near f64::MAX.
    let fraction = (t / 2.0 - low.cutoff / 2.0) / (high.cutoff / 2.0 - low.cutoff / 2.0);
    Ok(low.color.lerp(high.color, fraction))
}

/// Validated, non-empty colorscale with non-decreasing finite cutoffs.
///
/// Repeated cutoffs are allowed and produce a hard step. A position equal to
/// a repeated interior cutoff resolves to the first stop at that cutoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColorStop>", into = "Vec<ColorStop>")]
pub struct Colorscale {
    stops: Vec<ColorStop>,
}

impl Colorscale {
    pub fn new(stops: Vec<ColorStop>) -> GraphResult<Self> {
        validate_stops(&stops)?;
        Ok(Self { stops })
    }

    /// Sorts stops by cutoff (stable, so equal cutoffs keep their order)
    /// before validating.
    pub fn from_unsorted(mut stops: Vec<ColorStop>) -> GraphResult<Self> {
        stops.sort_by_key(|stop| OrderedFloat(stop.cutoff));
        Self::new(stops)
    }

    /// Builds a colorscale from `(cutoff, color string)` pairs, the shape
    /// palette catalogs usually ship.
    pub fn from_pairs<S: AsRef<str>>(pairs: &[(f64, S)]) -> GraphResult<Self> {
        let stops = pairs
            .iter()
            .map(|(cutoff, color)| ColorStop::parse(*cutoff, color.as_ref()))
            .collect::<GraphResult<Vec<_>>>()?;
        Self::new(stops)
    }

    /// Spreads bare swatch colors evenly over `[0, 1]`.
    pub fn from_swatches<S: AsRef<str>>(swatches: &[S]) -> GraphResult<Self> {
        let last_index = swatches.len().saturating_sub(1);
        let stops = swatches
            .iter()
            .enumerate()
            .map(|(index, color)| {
                ColorStop::parse(unit_fraction(index, last_index), color.as_ref())
            })
            .collect::<GraphResult<Vec<_>>>()?;
        Self::new(stops)
    }

    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// First and last cutoff.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.first().cutoff, self.last().cutoff)
    }

    pub fn interpolate(&self, t: f64) -> GraphResult<Rgb> {
        interpolate_sorted(&self.stops, t)
    }

    pub fn interpolate_hex(&self, t: f64) -> GraphResult<String> {
        self.interpolate(t).map(Rgb::to_hex)
    }

    /// Mirrors the scale inside its own domain: cutoff `c` moves to
    /// `first + last - c` and the stop order is reversed.
    ///
    /// The end cutoffs are carried over exactly, so the domain never drifts.
    /// Interior cutoffs are mirrored in floating point and stay within
    /// rounding error of an exact mirror.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let (start, end) = self.domain();
        let last_index = self.stops.len() - 1;
        let stops = self
            .stops
            .iter()
            .rev()
            .enumerate()
            .map(|(index, stop)| {
                let cutoff = if index == 0 {
                    start
                } else if index == last_index {
                    end
                } else {
                    (start + (end - stop.cutoff)).clamp(start, end)
                };
                ColorStop::new(cutoff, stop.color)
            })
            .collect();
        Self { stops }
    }

    /// Returns `count` colors evenly spaced from the first to the last cutoff.
    ///
    /// Both endpoints are always included when `count >= 2`; `count == 1`
    /// yields the first color only.
    pub fn sample(&self, count: usize) -> GraphResult<Vec<Rgb>> {
        let (start, end) = self.domain();
        let last_index = count.saturating_sub(1);
        (0..count)
            .map(|index| self.interpolate(position_in(start, end, unit_fraction(index, last_index))))
            .collect()
    }

    fn first(&self) -> &ColorStop {
        &self.stops[0]
    }

    fn last(&self) -> &ColorStop {
        &self.stops[self.stops.len() - 1]
    }
}

impl TryFrom<Vec<ColorStop>> for Colorscale {
    type Error = GraphError;

    fn try_from(stops: Vec<ColorStop>) -> Result<Self, Self::Error> {
        Self::new(stops)
    }
}

impl From<Colorscale> for Vec<ColorStop> {
    fn from(scale: Colorscale) -> Self {
        scale.stops
    }
}

impl AsRef<[ColorStop]> for Colorscale {
    fn as_ref(&self) -> &[ColorStop] {
        &self.stops
    }
}

/// `index / last_index` in `[0, 1]`, with `last_index == 0` mapping to `0`.
fn unit_fraction(index: usize, last_index: usize) -> f64 {
    if last_index == 0 {
        0.0
    } else {
        index as f64 / last_index as f64
    }
}

/// Point at `fraction` of `[start, end]` for finite ends.
///
/// `fraction <= 0` returns `start` and `fraction >= 1` returns `end` exactly.
/// Spans too wide for `f64` are blended term by term so the result stays finite.
fn position_in(start: f64, end: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        return start;
    }
    if fraction >= 1.0 {
        return end;
    }

    let span = end - start;
    if span.is_finite() {
        start + span * fraction
    } else {
        start * (1.0 - fraction) + end * fraction
    }
}
