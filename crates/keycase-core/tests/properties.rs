//! Propiedades generales: idempotencia, canonicalización de snake, forma
//! preservada, fidelidad de campos y colisiones.

use keycase_core::{
    convert_to_object_in, to_canonical_json, transform, translate_case_in, Assembler, Case,
    MappingRegistry, Value,
};
use serde_json::json;

const KEYS: &[&str] = &[
    "outer_field",
    "OuterField",
    "outerField",
    "outer-field",
    "Mixed_case-Key",
    "_leading_underscore",
    "trailing__",
    "with2digits_here",
    "ID",
    "x",
    "a_b_c",
    "point_x_y",
    "$ref",
    "user.name",
    "HTTPStatus",
];

fn sample() -> Value {
    Value::from(json!({
        "first_key": [ { "NestedKey": 1, "other-key": [ { "deep_one": null } ] }, 2, "three" ],
        "SecondKey": { "innerList": [], "inner_map": {} },
        "third": "leaf_value_untouched",
        "a_b_c": 1,
        "point_x_y": { "$ref": "#/x", "user.name": 2 }
    }))
}

#[test]
fn translation_is_idempotent() {
    let reg = MappingRegistry::new();
    for case in Case::ALL {
        let once = translate_case_in(&reg, &sample(), case);
        let twice = translate_case_in(&reg, &once, case);
        assert_eq!(once, twice, "case={case}");
    }
}

#[test]
fn single_letter_words_survive_a_second_pass() {
    let reg = MappingRegistry::new();
    let input = Value::from(json!({"a_b_c": 1, "point_x_y": 2}));
    for case in Case::ALL {
        let once = translate_case_in(&reg, &input, case);
        let twice = translate_case_in(&reg, &once, case);
        assert_eq!(to_canonical_json(&once), to_canonical_json(&twice), "case={case}");
    }
    let camel = translate_case_in(&reg, &input, Case::Camel);
    assert_eq!(to_canonical_json(&camel), r#"{"aBC":1,"pointXY":2}"#);
}

#[test]
fn non_separator_characters_do_not_collide() {
    let reg = MappingRegistry::new();
    let input = Value::from(json!({"$ref": 1, "ref": 2, "user.name": 3}));
    let out = translate_case_in(&reg, &input, Case::Camel);
    assert_eq!(to_canonical_json(&out), r#"{"$ref":1,"ref":2,"user.name":3}"#);
}

#[test]
fn snake_goes_through_camel() {
    for key in KEYS {
        let via_camel = transform(Case::Snake, &transform(Case::Camel, key));
        assert_eq!(transform(Case::Snake, key), via_camel, "key={key}");
    }
}

#[test]
fn structure_is_preserved() {
    let reg = MappingRegistry::new();
    let out = translate_case_in(&reg, &sample(), Case::Pascal);
    assert_eq!(out["FirstKey"].as_sequence().map(<[Value]>::len), Some(3));
    assert!(matches!(out["FirstKey"][0]["OtherKey"], Value::List(_)));
    assert!(out["FirstKey"][0]["OtherKey"][0]["DeepOne"].is_null());
    assert!(matches!(out["SecondKey"]["InnerMap"], Value::Map(_)));
    // las hojas no se tocan
    assert_eq!(out["Third"].as_str(), Some("leaf_value_untouched"));
    assert_eq!(out["FirstKey"][2].as_str(), Some("three"));
}

#[test]
fn materialized_fields_equal_source_keys() {
    let reg = MappingRegistry::new();
    let source = sample();
    let out = convert_to_object_in(&reg, &source);
    let mut fields: Vec<&str> = out.as_record().unwrap().field_names().collect();
    fields.sort_unstable();
    let mut keys: Vec<&str> = source.as_map().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(fields, keys);
}

#[test]
fn collision_takes_last_in_source_order() {
    let reg = MappingRegistry::new();
    let input =
        Value::from(json!({"SomeField": "first", "some_field": "second", "some-field": "third"}));
    let out = translate_case_in(&reg, &input, Case::Snake);
    let map = out.as_map().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["some_field"].as_str(), Some("third"));
}

#[test]
fn assembler_override_and_null_asymmetry() {
    let reg = MappingRegistry::new();
    let out = Assembler::with_registry(&reg)
        .base(json!({"a": 1}))
        .base(json!({"a": 2}))
        .assemble()
        .unwrap();
    assert_eq!(out["a"].as_i64(), Some(2));

    let out = Assembler::with_registry(&reg)
        .base(json!({"a": null, "b": null}))
        .named("nested", json!({"c": null, "d": 4}))
        .include_nones(false)
        .assemble()
        .unwrap();
    assert_eq!(to_canonical_json(&out), r#"{"nested":{"d":4}}"#);

    let out = Assembler::with_registry(&reg)
        .base(json!({"a": null}))
        .named("nested", json!({"c": null}))
        .include_nones(true)
        .assemble()
        .unwrap();
    assert_eq!(to_canonical_json(&out), r#"{"a":null,"nested":{}}"#);
}
