//! Purpose: Lock the canonical output contract with corpus + round-trip coverage.
//! Exports: Integration tests only (no runtime exports).
//! Role: Catch drift in the serializer's sorting, escaping, and indentation rules.
//! Invariants: Canonical output re-parses to a value deep-equal to the input value.
//! Invariants: Formatting the canonical form again is a fixed point.

use jcanon::core::format::canonical_json;
use jcanon::json::parse;
use serde_json::{Value, json};

fn corpus() -> Vec<Value> {
    vec![
        json!(null),
        json!(true),
        json!(-17),
        json!(3.25),
        json!(""),
        json!("plain ascii"),
        json!("caf\u{e9} \u{2603} \u{1f600}"),
        json!([]),
        json!({}),
        json!([1, [2, [3, []]]]),
        json!({"b": 1, "a": 2, "C": 3}),
        json!({"outer": {"z": [true, null, "\u{7f}"], "a": {"empty": {}}}}),
    ]
}

#[test]
fn canonical_output_round_trips_to_equal_value() {
    for value in corpus() {
        let rendered = canonical_json(&value);
        let reparsed: Value = parse::from_str(&rendered).expect("canonical output parses");
        assert_eq!(reparsed, value, "round-trip drift for {rendered}");
    }
}

#[test]
fn canonical_form_is_a_fixed_point() {
    for value in corpus() {
        let once = canonical_json(&value);
        let reparsed: Value = parse::from_str(&once).expect("parses");
        let twice = canonical_json(&reparsed);
        assert_eq!(once, twice);
    }
}

#[test]
fn canonical_output_is_ascii_for_any_input_string() {
    let value = json!({"mixed": "ascii \u{e9}\u{410}\u{4e2d}\u{1f680}"});
    let rendered = canonical_json(&value);
    assert!(rendered.is_ascii());
    assert!(rendered.contains("\\u00e9"));
    assert!(rendered.contains("\\u0410"));
    assert!(rendered.contains("\\u4e2d"));
    assert!(rendered.contains("\\ud83d\\ude80"));
}

#[test]
fn key_order_is_byte_lexicographic() {
    // Uppercase sorts before lowercase; multi-byte keys sort by UTF-8 bytes.
    let value = json!({"b": 0, "B": 0, "a": 0, "ab": 0});
    let rendered = canonical_json(&value);
    let positions: Vec<usize> = ["\"B\"", "\"a\"", "\"ab\"", "\"b\""]
        .iter()
        .map(|key| rendered.find(*key).expect("key present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn duplicate_keys_collapse_to_last_value() {
    // serde_json keeps the last occurrence; the canonical form then has one entry.
    let value: Value = parse::from_str(r#"{"a":1,"a":2}"#).expect("parses");
    assert_eq!(canonical_json(&value), "{\n    \"a\": 2\n}");
}

#[test]
fn deep_nesting_indents_linearly() {
    let value: Value = parse::from_str(r#"{"a":{"b":{"c":[1]}}}"#).expect("parses");
    let rendered = canonical_json(&value);
    assert!(rendered.contains("\n            \"c\": [\n                1\n            ]"));
}
