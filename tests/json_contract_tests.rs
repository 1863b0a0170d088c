use enarm_charts::api::{
    CHART_SPEC_JSON_SCHEMA_V1, RenderOptions, bar_chart, parse_series_json, trend_chart,
};
use enarm_charts::ChartError;
use enarm_charts::core::TrendField;
use serde_json::Value;

#[test]
fn series_json_accepts_absent_and_null_derived_fields() {
    let json = r#"[
  { "x": "2024-03-01", "y": 30, "y_rolling_avg_3": null, "y_mean": 40.5,
    "y_std_dev_plus_1_5": 55.0, "y_std_dev_minus_1_5": 26.0 },
  { "x": "2024-03-02", "y": 42 }
]"#;

    let series = parse_series_json(json).expect("parse series");
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].y, Some(30.0));
    assert_eq!(series[0].y_rolling_avg_3, None);
    assert_eq!(TrendField::Mean.value(&series[0]), Some(40.5));
    assert_eq!(series[1].y_mean, None);
}

#[test]
fn malformed_series_json_is_invalid_data() {
    let result = parse_series_json(r#"[{ "y": 3 }]"#);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn render_options_json_defaults_to_auto_size() {
    let auto = RenderOptions::from_json_str("{}").expect("parse empty options");
    assert!(auto.is_auto_sized());

    let fixed = RenderOptions::from_json_str(r#"{ "width": 720 }"#).expect("parse width");
    assert_eq!(fixed, RenderOptions::new().with_width(720));

    assert!(RenderOptions::from_json_str(r#"{ "width": -1 }"#).is_err());
}

#[test]
fn chart_spec_contract_carries_schema_marks_and_series() {
    let series = parse_series_json(r#"[{ "x": "A", "y": 5 }, { "x": "B", "y": 8 }]"#)
        .expect("parse series");
    let json = bar_chart(&series, 6.0, RenderOptions::default())
        .to_json_contract_v1_pretty()
        .expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["schema_version"], CHART_SPEC_JSON_SCHEMA_V1);
    assert_eq!(value["spec"]["kind"], "bar");
    assert_eq!(value["spec"]["marks"][0]["mark"], "rule_y");
    assert_eq!(value["spec"]["marks"][0]["y"], 6.0);
    assert_eq!(value["spec"]["marks"][1]["fill"], "#4682b4");
    assert_eq!(value["spec"]["data"][1]["x"], "B");
    assert!(value["spec"]["width"].is_null());
}

#[test]
fn trend_spec_contract_serializes_pointer_channels_in_order() {
    let series = parse_series_json(r#"[{ "x": "2024-03-01", "y": 5 }]"#).expect("parse series");
    let json = trend_chart(&series, 6.0, RenderOptions::new().with_width(800))
        .to_json_contract_v1_pretty()
        .expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");

    let channels = value["spec"]["pointer"]["channels"]
        .as_object()
        .expect("channels object");
    assert_eq!(channels.len(), 6);
    assert_eq!(channels["date"]["label"], "Date");
    assert_eq!(channels["date"]["value"], "x");
    assert_eq!(channels["shows"]["value"]["field"], "y");
    assert_eq!(value["spec"]["marks"][1]["curve"], "catmull-rom");
    assert_eq!(value["spec"]["marks"][1]["field"], "y");
    assert_eq!(value["spec"]["width"], 800);
}
