use blog_charts::api::{
    Axis3D, BlogChartsConfig, CHART_DEFINITION_JSON_SCHEMA_V1, CartesianAxis, ChartBuilder,
    ChartDefinition, Grid, Series, Tooltip, ValueFormatter,
};
use blog_charts::catalog::ChartCatalog;
use blog_charts::core::{CategoryLabel, SeriesData};
use serde_json::{Value, json};

fn sample() -> ChartDefinition {
    ChartBuilder::new("chart-parameter")
        .tooltip(Tooltip::axis_shadow())
        .value_formatter(ValueFormatter::fixed(3))
        .grid(Grid::margins(30, 40, 10, 25))
        .legend()
        .x_axis(
            CartesianAxis::category(CategoryLabel::texts(["e_vel", "e_cap"]))
                .centered_name("Parameter", 30),
        )
        .y_axis(CartesianAxis::value().centered_name("Ratio", 35))
        .series(Series::bar("Ratio", vec![0.5, 1.0]))
        .build()
        .expect("valid chart")
}

#[test]
fn option_json_uses_library_keys() {
    let json: Value = serde_json::from_str(&sample().option_json_pretty().expect("json"))
        .expect("parse");

    assert_eq!(
        json,
        json!({
            "tooltip": { "trigger": "axis", "axisPointer": { "type": "shadow" } },
            "grid": { "left": 30, "top": 40, "right": 10, "bottom": 25, "containLabel": true },
            "legend": {},
            "xAxis": [{
                "type": "category",
                "data": ["e_vel", "e_cap"],
                "name": "Parameter",
                "nameLocation": "center",
                "nameGap": 30
            }],
            "yAxis": [{
                "type": "value",
                "name": "Ratio",
                "nameLocation": "center",
                "nameGap": 35
            }],
            "series": [{ "type": "bar", "name": "Ratio", "data": [0.5, 1.0] }]
        })
    );
}

#[test]
fn option_json_omits_formatter() {
    let text = sample().option_json_pretty().expect("json");
    assert!(!text.contains("valueFormatter"));
    assert!(!text.contains("value_formatter"));
}

#[test]
fn contract_v1_round_trips() {
    let definition = sample();
    let text = definition.to_json_contract_v1_pretty().expect("contract");
    let payload: Value = serde_json::from_str(&text).expect("parse");
    assert_eq!(payload["schema_version"], json!(CHART_DEFINITION_JSON_SCHEMA_V1));
    assert_eq!(
        payload["definition"]["value_formatter"],
        json!({ "fixed_decimals": { "decimals": 3 } })
    );

    let restored = ChartDefinition::from_json_compat_str(&text).expect("restore");
    assert_eq!(restored, definition);
}

#[test]
fn bare_definition_is_accepted() {
    let definition = sample();
    let text = serde_json::to_string(&definition).expect("bare json");
    let restored = ChartDefinition::from_json_compat_str(&text).expect("restore");
    assert_eq!(restored, definition);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let definition = sample();
    let text = serde_json::to_string(&json!({
        "schema_version": 2,
        "definition": definition,
    }))
    .expect("json");
    let err = ChartDefinition::from_json_compat_str(&text).expect_err("v2 unsupported");
    assert!(format!("{err}").contains("unsupported definition schema version"));
}

#[test]
fn invalid_payload_is_rejected() {
    assert!(ChartDefinition::from_json_compat_str("{\"nope\": true}").is_err());
}

#[test]
fn catalog_3d_chart_round_trips_triples() {
    let catalog = ChartCatalog::blog(&BlogChartsConfig::default()).expect("catalog");
    let definition = &catalog.get("chart-reference").expect("entry").definition;

    let text = definition.to_json_contract_v1_pretty().expect("contract");
    let restored = ChartDefinition::from_json_compat_str(&text).expect("restore");
    assert_eq!(&restored, definition);

    let option: Value =
        serde_json::from_str(&definition.option_json_pretty().expect("json")).expect("parse");
    assert_eq!(option["xAxis3D"]["interval"], json!(3447.0));
    assert_eq!(option["grid3D"]["viewControl"]["projection"], json!("orthographic"));
    assert_eq!(option["grid3D"]["axisLabel"], json!({ "show": false }));
    assert_eq!(option["series"][1]["type"], json!("line3D"));
    assert_eq!(option["series"][1]["lineStyle"]["width"], json!(3.0));
    assert_eq!(option["series"][1]["silent"], json!(true));
    assert!(option.get("xAxis").is_none());
}

#[test]
fn empty_3d_series_keeps_triple_shape_through_contract() {
    let definition = ChartBuilder::new("chart-empty-path")
        .axes_3d(Axis3D::value("x"), Axis3D::value("y"), Axis3D::value("z"))
        .series(Series::line_3d("Path", Vec::new()))
        .build()
        .expect("valid chart");

    let text = definition.to_json_contract_v1_pretty().expect("contract");
    let restored = ChartDefinition::from_json_compat_str(&text).expect("restore");

    assert_eq!(restored.option.series[0].data, SeriesData::Triples(Vec::new()));
    assert_eq!(restored, definition);
}

#[test]
fn empty_bar_series_stays_scalar() {
    let series: Series =
        serde_json::from_str(r#"{ "type": "bar", "name": "Count", "data": [] }"#).expect("parse");
    assert_eq!(series.data, SeriesData::Scalars(Vec::new()));
}
