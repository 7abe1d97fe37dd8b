//! Figures of "Flying With the Wind" (draft).

use crate::api::{
    Axis3D, AxisLabel, AxisTick, BlogChartsConfig, CartesianAxis, ChartBuilder, ChartDefinition,
    Grid, Grid3D, Projection, Series, TextStyle, Tooltip, ViewControl,
};
use crate::core::{CategoryLabel, range_labels};
use crate::error::ChartResult;

use super::flight_path_data::{FLIGHT_PATH, GROUND_SAMPLES};

/// Shared span of the three axes so the orthographic view keeps proportions.
const AXIS_SPAN_M: f64 = 3447.0;
const X_RANGE_M: (f64, f64) = (-10.0, 3437.0);
const Y_RANGE_M: (f64, f64) = (-1811.0, 1636.0);
const Z_RANGE_M: (f64, f64) = (0.0, 3447.0);

/// Final distance from the target over repeated flights, per controller.
const DISTANCE_BUCKETS: usize = 20;
const DISTANCE_BUCKET_M: i64 = 100;
const FIXED_CONTROLLER: [f64; DISTANCE_BUCKETS] = [
    0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.0, 4.0, 3.0, 5.0, 3.0, 5.0, 5.0, 16.0, 6.0,
    9.0, 40.0,
];
const GREEDY_CONTROLLER: [f64; DISTANCE_BUCKETS] = [
    29.0, 9.0, 6.0, 3.0, 4.0, 3.0, 6.0, 2.0, 3.0, 0.0, 1.0, 3.0, 2.0, 4.0, 3.0, 3.0, 3.0, 5.0,
    3.0, 8.0,
];
const SEARCH_CONTROLLER: [f64; DISTANCE_BUCKETS] = [
    45.0, 9.0, 9.0, 4.0, 2.0, 5.0, 1.0, 2.0, 3.0, 3.0, 4.0, 1.0, 1.0, 2.0, 2.0, 0.0, 0.0, 5.0,
    0.0, 2.0,
];

/// Full flight including the samples spent waiting on the ground.
#[must_use]
pub fn flight_path() -> Vec<[f64; 3]> {
    std::iter::repeat_n([0.0; 3], GROUND_SAMPLES)
        .chain(
            FLIGHT_PATH
                .iter()
                .map(|p| [f64::from(p[0]), f64::from(p[1]), f64::from(p[2])]),
        )
        .collect()
}

pub(super) fn reference_path(config: &BlogChartsConfig) -> ChartResult<ChartDefinition> {
    let text = config.text_style();
    let axis = |name: &str, (min, max): (f64, f64), text: &TextStyle| {
        Axis3D::value(name)
            .name_gap(10)
            .name_text_style(text.clone())
            .range(min, max, AXIS_SPAN_M)
    };

    ChartBuilder::new("chart-reference")
        .size(600, 500)
        .text_style(text.clone())
        .legend()
        .axes_3d(
            axis("x", X_RANGE_M, &text),
            axis("y", Y_RANGE_M, &text),
            axis("z", Z_RANGE_M, &text),
        )
        .grid_3d(Grid3D {
            view_control: Some(ViewControl {
                projection: Some(Projection::Orthographic),
                alpha: Some(20.0),
                beta: None,
                orthographic_size: Some(160.0),
            }),
            axis_label: Some(AxisLabel::hidden()),
            axis_tick: Some(AxisTick { show: Some(false) }),
        })
        .series(Series::scatter_3d("Start", vec![[0.0; 3]]))
        .series(Series::line_3d("Path", flight_path()).line_width(3.0).silent())
        .build()
}

pub(super) fn horizontal_distance(config: &BlogChartsConfig) -> ChartResult<ChartDefinition> {
    let text = config.text_style();
    let distances = range_labels(DISTANCE_BUCKETS, DISTANCE_BUCKET_M)?;

    ChartBuilder::new("chart-horizontal")
        .size(740, 380)
        .text_style(text.clone())
        .tooltip(Tooltip::axis_shadow().with_text_style(text.clone()))
        .grid(Grid::margins(35, 45, 5, 30))
        .legend()
        .x_axis(
            CartesianAxis::category(CategoryLabel::integers(distances))
                .centered_name("Distance From Target (m)", 35)
                .label_style(text.clone()),
        )
        .y_axis(
            CartesianAxis::value()
                .centered_name("Count", 45)
                .label_style(text),
        )
        .series(Series::bar("Fixed", FIXED_CONTROLLER.to_vec()))
        .series(Series::bar("Greedy", GREEDY_CONTROLLER.to_vec()))
        .series(Series::bar("Search", SEARCH_CONTROLLER.to_vec()))
        .build()
}
