use blog_charts::api::BlogChartsConfig;
use blog_charts::catalog::ChartCatalog;
use blog_charts::render::render_preview_page;

#[test]
fn page_hosts_every_chart_surface() {
    let config = BlogChartsConfig::default();
    let catalog = ChartCatalog::blog(&config).expect("catalog");
    let page = render_preview_page(
        "the-elevator-is-slow",
        catalog
            .for_post("the-elevator-is-slow")
            .map(|entry| &entry.definition),
        &config,
    )
    .expect("page");

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>the-elevator-is-slow</title>"));
    assert!(page.contains(
        "<div id=\"chart-elevator-count\" style=\"width: 740px; height: 380px;\"></div>"
    ));
    assert!(page.contains(
        "<div id=\"chart-system-throughput\" style=\"width: 100%; height: 400px;\"></div>"
    ));
    assert!(page.contains(&config.echarts_script_url));
    assert!(!page.contains(&config.echarts_gl_script_url));
    assert_eq!(page.matches("chart.setOption(option);").count(), 5);
}

#[test]
fn page_with_3d_chart_loads_gl_extension() {
    let config = BlogChartsConfig::default();
    let catalog = ChartCatalog::blog(&config).expect("catalog");
    let reference = &catalog.get("chart-reference").expect("entry").definition;

    let page = render_preview_page("flight", [reference], &config).expect("page");
    assert!(page.contains(&config.echarts_gl_script_url));
}

#[test]
fn title_is_escaped() {
    let config = BlogChartsConfig::default();
    let page = render_preview_page("<b>&</b>", std::iter::empty(), &config).expect("page");
    assert!(page.contains("<title>&lt;b&gt;&amp;&lt;/b&gt;</title>"));
}
