use param_editor::api::{MODEL_SNAPSHOT_JSON_SCHEMA_V1, ParamEditor, ParamEditorConfig};
use param_editor::core::{Color, Model, ParamDefinition, ParamKind, ParamValue};
use param_editor::render::NullRenderer;
use serde_json::json;

fn sample_model() -> Model {
    Model::new(
        vec![ParamValue::new(1, "casual"), ParamValue::new(2, "maxi")],
        vec![
            Color::new(1, "red")
                .with_field("hex", json!("#ff0000"))
                .with_field("stock", json!(4)),
        ],
    )
}

#[test]
fn editor_config_json_roundtrip() {
    let config = ParamEditorConfig::new(vec![
        ParamDefinition::new(1, "Style"),
        ParamDefinition::new(2, "Length"),
    ])
    .with_model(sample_model());

    let json = config.to_json_pretty().expect("config should serialize");
    let restored = ParamEditorConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn config_uses_camel_case_field_names() {
    let raw = r##"{
        "definitions": [{ "id": 1, "displayName": "Style", "kind": "string" }],
        "model": {
            "paramValues": [{ "paramId": 1, "value": "casual" }],
            "colors": [{ "id": 3, "name": "green", "hex": "#00ff00" }]
        }
    }"##;

    let config = ParamEditorConfig::from_json_str(raw).expect("config should parse");

    assert_eq!(config.definitions[0].display_name, "Style");
    assert_eq!(config.definitions[0].kind, ParamKind::String);
    assert_eq!(config.model.param_value(1), Some("casual"));
    assert_eq!(config.model.colors[0].extra["hex"], json!("#00ff00"));
}

#[test]
fn definition_kind_defaults_to_string() {
    let raw = r#"{ "definitions": [{ "id": 4, "displayName": "Fabric" }] }"#;

    let config = ParamEditorConfig::from_json_str(raw).expect("config should parse");

    assert_eq!(config.definitions[0].kind, ParamKind::String);
    assert_eq!(config.model, Model::default());
}

#[test]
fn unknown_definition_kind_is_rejected() {
    let raw = r#"{ "definitions": [{ "id": 4, "displayName": "Fabric", "kind": "number" }] }"#;

    assert!(ParamEditorConfig::from_json_str(raw).is_err());
}

#[test]
fn color_extra_fields_roundtrip_in_order() {
    let model = sample_model();

    let json = model.to_json_pretty().expect("model should serialize");
    let restored = Model::from_json_compat_str(&json).expect("model should parse");

    assert_eq!(restored, model);
    let keys: Vec<&str> = restored.colors[0]
        .extra
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["hex", "stock"]);
}

#[test]
fn snapshot_contract_v1_roundtrip() {
    let mut editor = ParamEditor::new(NullRenderer::default(), Vec::new(), sample_model());
    editor.update(3, "cotton");

    let json = editor
        .snapshot_json_contract_v1_pretty()
        .expect("contract should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["schema_version"], json!(MODEL_SNAPSHOT_JSON_SCHEMA_V1));

    let restored = Model::from_json_compat_str(&json).expect("contract should parse");
    assert_eq!(restored, editor.get_model());
}

#[test]
fn bare_snapshot_json_parses_through_compat_reader() {
    let editor = ParamEditor::new(NullRenderer::default(), Vec::new(), sample_model());

    let json = editor.snapshot_json_pretty().expect("snapshot should serialize");
    let restored = Model::from_json_compat_str(&json).expect("snapshot should parse");

    assert_eq!(restored, sample_model());
}

#[test]
fn unsupported_snapshot_schema_is_rejected() {
    let raw = r#"{ "schema_version": 7, "snapshot": { "paramValues": [], "colors": [] } }"#;

    let err = Model::from_json_compat_str(raw).expect_err("schema 7 must fail");

    assert!(err.to_string().contains("unsupported model snapshot schema version: 7"));
}
