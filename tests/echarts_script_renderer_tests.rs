use blog_charts::api::{BlogChartsConfig, CartesianAxis, ChartBuilder, Series, ValueFormatter};
use blog_charts::core::CategoryLabel;
use blog_charts::render::{EchartsScriptRenderer, NullRenderer, Renderer, render_script};

fn chart(id: &str) -> ChartBuilder {
    ChartBuilder::new(id)
        .legend()
        .x_axis(CartesianAxis::category(CategoryLabel::integers(1..=2)))
        .y_axis(CartesianAxis::value())
        .series(Series::bar("Count", vec![3.0, 4.0]))
}

#[test]
fn script_binds_element_and_fixed_size() {
    let definition = chart("chart-sized").size(740, 380).build().expect("chart");
    let script = render_script(&definition, "echarts").expect("script");

    assert!(script.starts_with("{\n"));
    assert!(script.contains("document.getElementById(\"chart-sized\")"));
    assert!(script.contains("echarts.init(element, null, { width: 740, height: 380 })"));
    assert!(script.contains("chart.setOption(option);"));
    assert!(script.trim_end().ends_with('}'));
}

#[test]
fn script_without_size_lets_library_measure() {
    let definition = chart("chart-fluid").build().expect("chart");
    let script = render_script(&definition, "lib").expect("script");
    assert!(script.contains("const chart = lib.init(element);"));
}

#[test]
fn formatter_is_attached_to_existing_tooltip() {
    let definition = chart("chart-fmt")
        .tooltip(blog_charts::api::Tooltip::axis_shadow())
        .value_formatter(ValueFormatter::fixed(2))
        .build()
        .expect("chart");
    let script = render_script(&definition, "echarts").expect("script");
    assert!(script.contains("option.tooltip.valueFormatter = (value) => value.toFixed(2);"));
}

#[test]
fn formatter_creates_tooltip_when_missing() {
    let definition = chart("chart-fmt-bare")
        .value_formatter(ValueFormatter::fixed(3))
        .build()
        .expect("chart");
    let script = render_script(&definition, "echarts").expect("script");
    assert!(script.contains("option.tooltip = { valueFormatter: (value) => value.toFixed(3) };"));
}

#[test]
fn closing_script_tags_in_names_are_escaped() {
    let definition = ChartBuilder::new("chart-escape")
        .x_axis(CartesianAxis::category(CategoryLabel::integers(1..=1)))
        .y_axis(CartesianAxis::value())
        .series(Series::bar("</script>", vec![1.0]))
        .build()
        .expect("chart");
    let script = render_script(&definition, "echarts").expect("script");
    assert!(!script.contains("</script>"));
    assert!(script.contains("<\\/script>"));
}

#[test]
fn renderer_keeps_render_order_and_replaces_duplicates() {
    let mut renderer = EchartsScriptRenderer::new(&BlogChartsConfig::default());
    let first = chart("chart-a").build().expect("a");
    let second = chart("chart-b").build().expect("b");
    let updated = chart("chart-a").size(100, 100).build().expect("a2");

    renderer.render(&first).expect("render a");
    renderer.render(&second).expect("render b");
    renderer.render(&updated).expect("render a again");

    let ids: Vec<&str> = renderer.scripts().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["chart-a", "chart-b"]);
    assert_eq!(renderer.len(), 2);
    assert!(
        renderer
            .script("chart-a")
            .expect("script a")
            .contains("width: 100")
    );
    assert!(!renderer.uses_3d());
}

#[test]
fn renderer_uses_configured_global() {
    let config = BlogChartsConfig {
        echarts_global: "charts".to_owned(),
        ..BlogChartsConfig::default()
    };
    let mut renderer = EchartsScriptRenderer::new(&config);
    renderer
        .render(&chart("chart-global").build().expect("chart"))
        .expect("render");
    assert!(
        renderer
            .script("chart-global")
            .expect("script")
            .contains("charts.init(")
    );
}

#[test]
fn renderers_reject_invalid_definitions() {
    let mut invalid = chart("chart-invalid").build().expect("chart");
    invalid.element_id.clear();

    let mut scripts = EchartsScriptRenderer::new(&BlogChartsConfig::default());
    assert!(scripts.render(&invalid).is_err());
    assert!(scripts.is_empty());

    let mut null = NullRenderer::default();
    assert!(null.render(&invalid).is_err());
    assert_eq!(null.rendered, 0);
}

#[test]
fn null_renderer_records_last_chart() {
    let mut renderer = NullRenderer::default();
    renderer
        .render(&chart("chart-null").build().expect("chart"))
        .expect("render");
    assert_eq!(renderer.rendered, 1);
    assert_eq!(renderer.last_element_id.as_deref(), Some("chart-null"));
    assert_eq!(renderer.last_series_count, 1);
    assert_eq!(renderer.last_point_count, 2);
}
