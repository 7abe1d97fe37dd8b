use blog_charts::ChartError;
use blog_charts::api::{
    Axis3D, CartesianAxis, ChartBuilder, Series, SeriesKind, Tooltip, ValueFormatter,
};
use blog_charts::core::{CategoryLabel, SeriesData};

fn bar_chart(id: &str) -> ChartBuilder {
    ChartBuilder::new(id)
        .tooltip(Tooltip::axis_shadow())
        .legend()
        .x_axis(CartesianAxis::category(CategoryLabel::integers(1..=3)))
        .y_axis(CartesianAxis::value())
}

#[test]
fn well_formed_bar_chart_builds() {
    let chart = bar_chart("chart-ok")
        .series(Series::bar("Mean", vec![1.0, 2.0, 3.0]))
        .build()
        .expect("valid chart");
    assert_eq!(chart.series_count(), 1);
    assert_eq!(chart.data_point_count(), 3);
}

#[test]
fn empty_element_id_is_rejected() {
    let err = bar_chart("")
        .series(Series::bar("Mean", vec![1.0, 2.0, 3.0]))
        .build()
        .expect_err("empty id");
    assert!(format!("{err}").contains("element id"));
}

#[test]
fn element_id_with_whitespace_is_rejected() {
    assert!(
        bar_chart("chart one")
            .series(Series::bar("Mean", vec![1.0, 2.0, 3.0]))
            .build()
            .is_err()
    );
}

#[test]
fn zero_size_is_rejected() {
    let err = bar_chart("chart-size")
        .size(0, 380)
        .series(Series::bar("Mean", vec![1.0, 2.0, 3.0]))
        .build()
        .expect_err("zero width");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 380
        }
    ));
}

#[test]
fn series_length_must_match_category_count() {
    let err = bar_chart("chart-len")
        .series(Series::bar("Mean", vec![1.0, 2.0]))
        .build()
        .expect_err("two values for three categories");
    assert!(matches!(
        err,
        ChartError::LengthMismatch {
            expected: 3,
            actual: 2,
            ..
        }
    ));
}

#[test]
fn non_finite_series_value_is_rejected() {
    let err = bar_chart("chart-nan")
        .series(Series::bar("Mean", vec![1.0, f64::INFINITY, 3.0]))
        .build()
        .expect_err("infinite value");
    assert!(format!("{err}").contains("index 1"));
}

#[test]
fn scalar_series_without_axes_is_rejected() {
    let err = ChartBuilder::new("chart-no-axes")
        .series(Series::bar("Mean", vec![1.0]))
        .build()
        .expect_err("no axes");
    assert!(format!("{err}").contains("needs an x and a y axis"));
}

#[test]
fn triple_series_needs_3d_axes() {
    let err = bar_chart("chart-3d")
        .series(Series::line_3d("Path", vec![[0.0, 0.0, 0.0]]))
        .build()
        .expect_err("no 3-D axes");
    assert!(format!("{err}").contains("3-D axes"));
}

#[test]
fn mismatched_data_shape_is_rejected() {
    let series = Series::new(
        SeriesKind::Bar,
        "Mean",
        SeriesData::Triples(vec![[1.0, 2.0, 3.0]]),
    );
    assert!(bar_chart("chart-shape").series(series).build().is_err());
}

#[test]
fn inverted_axis_range_is_rejected() {
    let err = ChartBuilder::new("chart-range")
        .axes_3d(
            Axis3D::value("x").range(10.0, 0.0, 10.0),
            Axis3D::value("y"),
            Axis3D::value("z"),
        )
        .series(Series::scatter_3d("Start", vec![[0.0, 0.0, 0.0]]))
        .build()
        .expect_err("min above max");
    assert!(format!("{err}").contains("must be lower than max"));
}

#[test]
fn non_positive_interval_is_rejected() {
    assert!(
        ChartBuilder::new("chart-interval")
            .axes_3d(
                Axis3D::value("x").range(0.0, 10.0, -1.0),
                Axis3D::value("y"),
                Axis3D::value("z"),
            )
            .series(Series::scatter_3d("Start", vec![[0.0, 0.0, 0.0]]))
            .build()
            .is_err()
    );
}

#[test]
fn empty_category_axis_is_rejected() {
    assert!(
        ChartBuilder::new("chart-empty-axis")
            .x_axis(CartesianAxis::category(Vec::new()))
            .y_axis(CartesianAxis::value())
            .build()
            .is_err()
    );
}

#[test]
fn formatter_precision_is_bounded() {
    let err = bar_chart("chart-fmt")
        .value_formatter(ValueFormatter::fixed(21))
        .series(Series::bar("Mean", vec![1.0, 2.0, 3.0]))
        .build()
        .expect_err("precision too high");
    assert!(format!("{err}").contains("precision"));
}
