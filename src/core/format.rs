//! Purpose: Render a JSON value in the fixed canonical output form.
//! Exports: `canonical_json`.
//! Role: Small, pure serializer used by the filter pipeline.
//! Invariants: Object keys are emitted in ascending lexicographic order at every level.
//! Invariants: Output bytes are printable ASCII plus newlines; everything else is escaped.
use serde_json::Value;

const INDENT: &str = "    ";

pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, 0, &mut out);
    out
}

fn write_value(value: &Value, indent: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(val) => out.push_str(if *val { "true" } else { "false" }),
        Value::Number(num) => out.push_str(&num.to_string()),
        Value::String(text) => write_string(text, out),
        Value::Array(items) => write_array(items, indent, out),
        Value::Object(map) => write_object(map, indent, out),
    }
}

fn write_array(items: &[Value], indent: usize, out: &mut String) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push_str("[\n");
    for (idx, item) in items.iter().enumerate() {
        push_indent(indent + 1, out);
        write_value(item, indent + 1, out);
        if idx + 1 < items.len() {
            out.push(',');
        }
        out.push('\n');
    }
    push_indent(indent, out);
    out.push(']');
}

fn write_object(map: &serde_json::Map<String, Value>, indent: usize, out: &mut String) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }
    // The map may preserve insertion order depending on crate features; the
    // output contract is sorted keys, so sort explicitly.
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    out.push_str("{\n");
    let len = entries.len();
    for (idx, (key, value)) in entries.into_iter().enumerate() {
        push_indent(indent + 1, out);
        write_string(key, out);
        out.push_str(": ");
        write_value(value, indent + 1, out);
        if idx + 1 < len {
            out.push(',');
        }
        out.push('\n');
    }
    push_indent(indent, out);
    out.push('}');
}

fn write_string(text: &str, out: &mut String) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ' '..='\u{7e}' => out.push(ch),
            // Control characters and everything past ASCII become \uXXXX
            // escapes; non-BMP code points take two units (surrogate pair).
            _ => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    push_unicode_escape(*unit, out);
                }
            }
        }
    }
    out.push('"');
}

fn push_unicode_escape(unit: u16, out: &mut String) {
    out.push_str("\\u");
    for shift in [12, 8, 4, 0] {
        let nibble = (unit >> shift) & 0xf;
        out.push(char::from_digit(u32::from(nibble), 16).unwrap_or('0'));
    }
}

fn push_indent(level: usize, out: &mut String) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::canonical_json;
    use serde_json::json;

    #[test]
    fn keys_are_sorted_at_every_level() {
        let value = json!({"b": 1, "a": {"z": true, "y": null}});
        let out = canonical_json(&value);
        let a = out.find("\"a\"").expect("a");
        let b = out.find("\"b\"").expect("b");
        let y = out.find("\"y\"").expect("y");
        let z = out.find("\"z\"").expect("z");
        assert!(a < b);
        assert!(y < z);
    }

    #[test]
    fn nested_array_uses_four_space_indent() {
        let value = json!({"a": [1, 2]});
        let out = canonical_json(&value);
        assert_eq!(
            out,
            "{\n    \"a\": [\n        1,\n        2\n    ]\n}"
        );
    }

    #[test]
    fn empty_containers_stay_flat() {
        assert_eq!(canonical_json(&json!({})), "{}");
        assert_eq!(canonical_json(&json!([])), "[]");
        assert_eq!(
            canonical_json(&json!({"a": {}, "b": []})),
            "{\n    \"a\": {},\n    \"b\": []\n}"
        );
    }

    #[test]
    fn non_ascii_is_escaped_as_utf16_units() {
        let value = json!({"name": "caf\u{e9}"});
        let out = canonical_json(&value);
        assert!(out.contains("caf\\u00e9"));
        assert!(!out.contains('\u{e9}'));

        let emoji = json!("\u{1f600}");
        assert_eq!(canonical_json(&emoji), "\"\\ud83d\\ude00\"");
    }

    #[test]
    fn control_and_quote_escapes_match_json_shorthand() {
        let value = json!("a\"b\\c\nd\te\u{08}\u{0c}\r\u{01}");
        assert_eq!(
            canonical_json(&value),
            "\"a\\\"b\\\\c\\nd\\te\\b\\f\\r\\u0001\""
        );
    }

    #[test]
    fn scalars_render_like_serde_json() {
        for value in [json!(null), json!(true), json!(false), json!(0), json!(-3.5)] {
            assert_eq!(canonical_json(&value), serde_json::to_string(&value).expect("encode"));
        }
    }
}
