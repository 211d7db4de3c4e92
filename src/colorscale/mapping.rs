use indexmap::IndexMap;
use ordered_float::OrderedFloat;
#[cfg(feature = "parallel-mapping")]
use rayon::prelude::*;
use tracing::trace;

use crate::color::Rgb;
use crate::error::{GraphError, GraphResult};

use super::{Colorscale, position_in};

impl Colorscale {
    /// Colors every value after normalizing `[min, max]` onto the scale domain.
    ///
    /// Values outside `[min, max]` saturate to the end colors. A degenerate
    /// range (`min == max`) maps every value to the first color, and
    /// `min > max` flips the mapping. Fails on non-finite bounds or NaN values.
    pub fn map_values(&self, values: &[f64], min: f64, max: f64) -> GraphResult<Vec<Rgb>> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GraphError::invalid(format!(
                "value range must be finite, got [{min}, {max}]"
            )));
        }
        trace!(count = values.len(), min, max, "map values onto colorscale");

        #[cfg(feature = "parallel-mapping")]
        {
            let mapped: Vec<GraphResult<Rgb>> = values
                .par_iter()
                .map(|value| self.map_single_value(*value, min, max))
                .collect();
            mapped.into_iter().collect()
        }

        #[cfg(not(feature = "parallel-mapping"))]
        {
            let mut out = Vec::with_capacity(values.len());
            for value in values {
                out.push(self.map_single_value(*value, min, max)?);
            }
            Ok(out)
        }
    }

    /// [`Colorscale::map_values`] over the finite extent of `values` itself.
    pub fn map_values_auto(&self, values: &[f64]) -> GraphResult<Vec<Rgb>> {
        let finite = || values.iter().copied().filter(|v| v.is_finite()).map(OrderedFloat);
        let (min, max) = match (finite().min(), finite().max()) {
            (Some(min), Some(max)) => (min.0, max.0),
            _ => (0.0, 0.0),
        };
        self.map_values(values, min, max)
    }

    /// Gives each distinct category a color sampled evenly from the scale,
    /// keyed in first-seen order.
    pub fn assign_categories<I, S>(&self, categories: I) -> GraphResult<IndexMap<String, Rgb>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut assigned: IndexMap<String, Rgb> = IndexMap::new();
        for category in categories {
            let category = category.as_ref();
            if !assigned.contains_key(category) {
                assigned.insert(category.to_owned(), self.first().color);
            }
        }

        let colors = self.sample(assigned.len())?;
        for (slot, color) in assigned.values_mut().zip(colors) {
            *slot = color;
        }
        Ok(assigned)
    }

    fn map_single_value(&self, value: f64, min: f64, max: f64) -> GraphResult<Rgb> {
        if value.is_nan() {
            return Err(GraphError::invalid("cannot map NaN onto a colorscale"));
        }

        let (start, end) = self.domain();
        self.interpolate(position_in(start, end, normalize(value, min, max)))
    }
}

/// Position of `value` inside `[min, max]`, clamped to `[0, 1]`.
///
/// Works on halves so `max - min` cannot overflow for finite bounds; a range
/// that collapses to zero width maps to `0`.
fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let half_span = max / 2.0 - min / 2.0;
    if half_span == 0.0 {
        return 0.0;
    }
    ((value / 2.0 - min / 2.0) / half_span).clamp(0.0, 1.0)
}
