use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Closed numeric interval `[min, max]` along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// Observed range of `values`. Returns `None` for empty input or when any
    /// value is non-finite. A flat range yields `min == max`.
    #[must_use]
    pub fn enclosing(values: &[f64]) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        if !first.is_finite() {
            return None;
        }
        let mut bounds = Self {
            min: *first,
            max: *first,
        };
        for &value in rest {
            if !value.is_finite() {
                return None;
            }
            bounds.min = bounds.min.min(value);
            bounds.max = bounds.max.max(value);
        }
        Some(bounds)
    }

    /// Equal-span bounds for every axis of a 3-D point cloud.
    ///
    /// Each axis is centred on its own data midpoint and all three share the
    /// widest extent plus `padding` on both sides, so an orthographic view
    /// keeps the path's proportions. The blog's flight figure keeps its
    /// hand-picked ranges; this is for new 3-D figures.
    pub fn cube(points: &[[f64; 3]], padding: f64) -> ChartResult<[Self; 3]> {
        if !padding.is_finite() || padding < 0.0 {
            return Err(ChartError::InvalidData(
                "cube padding must be finite and >= 0".to_owned(),
            ));
        }

        let mut observed = [Self { min: 0.0, max: 0.0 }; 3];
        for (axis, slot) in observed.iter_mut().enumerate() {
            let values: Vec<f64> = points.iter().map(|p| p[axis]).collect();
            *slot = Self::enclosing(&values).ok_or_else(|| {
                ChartError::InvalidData("cube bounds need finite, non-empty points".to_owned())
            })?;
        }

        let span = observed
            .iter()
            .map(|b| b.span())
            .fold(0.0_f64, f64::max)
            + 2.0 * padding;
        if span <= 0.0 {
            return Err(ChartError::InvalidData(
                "cube bounds need a non-zero extent or padding".to_owned(),
            ));
        }

        Ok(observed.map(|b| {
            let center = (b.min + b.max) * 0.5;
            Self {
                min: center - span * 0.5,
                max: center + span * 0.5,
            }
        }))
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        other.min >= self.min && other.max <= self.max
    }
}
