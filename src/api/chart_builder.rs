use tracing::trace;

use crate::core::Viewport;
use crate::error::ChartResult;

use super::{
    Axis3D, CartesianAxis, ChartDefinition, ChartOption, Grid, Grid3D, Legend, Series, TextStyle,
    Tooltip, ValueFormatter,
};

/// Fluent assembly of a [`ChartDefinition`].
///
/// `build` validates, so a definition obtained from the builder is always
/// ready for a renderer.
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    definition: ChartDefinition,
}

impl ChartBuilder {
    #[must_use]
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            definition: ChartDefinition {
                element_id: element_id.into(),
                size: None,
                value_formatter: None,
                option: ChartOption::default(),
            },
        }
    }

    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.definition.size = Some(Viewport::new(width, height));
        self
    }

    #[must_use]
    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.definition.option.text_style = Some(text_style);
        self
    }

    #[must_use]
    pub fn tooltip(mut self, tooltip: Tooltip) -> Self {
        self.definition.option.tooltip = Some(tooltip);
        self
    }

    #[must_use]
    pub fn value_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.definition.value_formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn grid(mut self, grid: Grid) -> Self {
        self.definition.option.grid = Some(grid);
        self
    }

    #[must_use]
    pub fn legend(mut self) -> Self {
        self.definition.option.legend = Some(Legend::default());
        self
    }

    #[must_use]
    pub fn x_axis(mut self, axis: CartesianAxis) -> Self {
        self.definition.option.x_axis.push(axis);
        self
    }

    #[must_use]
    pub fn y_axis(mut self, axis: CartesianAxis) -> Self {
        self.definition.option.y_axis.push(axis);
        self
    }

    #[must_use]
    pub fn axes_3d(mut self, x: Axis3D, y: Axis3D, z: Axis3D) -> Self {
        self.definition.option.x_axis_3d = Some(x);
        self.definition.option.y_axis_3d = Some(y);
        self.definition.option.z_axis_3d = Some(z);
        self
    }

    #[must_use]
    pub fn grid_3d(mut self, grid: Grid3D) -> Self {
        self.definition.option.grid_3d = Some(grid);
        self
    }

    #[must_use]
    pub fn series(mut self, series: Series) -> Self {
        self.definition.option.series.push(series);
        self
    }

    pub fn build(self) -> ChartResult<ChartDefinition> {
        self.definition.validate()?;
        trace!(
            element_id = %self.definition.element_id,
            series = self.definition.series_count(),
            points = self.definition.data_point_count(),
            "chart definition built"
        );
        Ok(self.definition)
    }
}
