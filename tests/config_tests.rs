use blog_charts::ChartError;
use blog_charts::api::BlogChartsConfig;

#[test]
fn empty_json_yields_defaults() {
    let config = BlogChartsConfig::from_json_str("{}").expect("config");
    assert_eq!(config, BlogChartsConfig::default());
    assert_eq!(config.font_family, "Roboto");
    assert_eq!(config.font_size, 16);
    assert_eq!(config.echarts_global, "echarts");
    assert!(!config.include_drafts);
}

#[test]
fn partial_json_overrides_fields() {
    let config =
        BlogChartsConfig::from_json_str(r#"{ "font_size": 18, "include_drafts": true }"#)
            .expect("config");
    assert_eq!(config.font_size, 18);
    assert!(config.include_drafts);
    assert_eq!(config.font_family, "Roboto");
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = BlogChartsConfig::from_json_str("{ font_size: }").expect_err("malformed");
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn invalid_values_are_rejected() {
    for input in [
        r#"{ "font_family": "  " }"#,
        r#"{ "font_size": 0 }"#,
        r#"{ "echarts_global": "window.echarts" }"#,
        r#"{ "echarts_script_url": "" }"#,
    ] {
        assert!(
            BlogChartsConfig::from_json_str(input).is_err(),
            "{input} should be rejected"
        );
    }
}

#[test]
fn text_style_uses_font_settings() {
    let style = BlogChartsConfig::default().text_style();
    assert_eq!(style.font_family.as_deref(), Some("Roboto"));
    assert_eq!(style.font_size, Some(16));
}
