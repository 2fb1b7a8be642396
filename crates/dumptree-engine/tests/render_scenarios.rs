use dumptree_engine::{classify, render_value, render_value_with, DumpOptions};
use dumptree_types::{ToValue, TypeName, Value};

fn rule_for(header: &str) -> String {
    "-".repeat(header.chars().count() + 1)
}

#[test]
fn test_flat_object_dump() {
    let value = Value::object(TypeName::new("scenario::Sample"))
        .member("FirstProperty", "First".to_value())
        .member("SecondProperty", "Second".to_value())
        .member("ThirdProperty", 3i64.to_value())
        .member("FourthProperty", true.to_value())
        .build();

    let out = render_value(&value);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "scenario::Sample (4 Properties)");
    assert_eq!(lines[1], rule_for(lines[0]));
    assert_eq!(lines[2], "FirstProperty  = \"First\"");
    assert_eq!(lines[3], "SecondProperty = \"Second\"");
    assert_eq!(lines[4], "ThirdProperty  = 3");
    assert_eq!(lines[5], "FourthProperty = true");
    assert_eq!(lines[6], lines[1]);
}

#[test]
fn test_mixed_sequence_dump_with_short_names() {
    let widget = Value::object(TypeName::new("scenario::Widget")).build();
    let value = Value::seq_named(
        TypeName::new("scenario::Mixed"),
        vec![
            Value::Str("Item1".into()),
            Value::Int(2),
            Value::Float(245.43),
            widget,
        ],
    );

    let options = DumpOptions::new().with_short_type_names(true);
    let out = render_value_with(&value, &options);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "Mixed (4 Items)");
    assert_eq!(lines[1], rule_for(lines[0]));
    assert_eq!(lines[2], "0: \"Item1\"");
    assert_eq!(lines[3], "1: 2");
    assert_eq!(lines[4], "2: 245.43");
    assert_eq!(lines[5], "3: Widget (0 Properties)");
    assert_eq!(lines[6], lines[1]);
}

#[test]
fn test_mapping_dump_aligns_key_value_labels() {
    let value = Value::map_named(
        TypeName::new("scenario::Lookup"),
        vec![
            (Value::Int(1), Value::Str("one".into())),
            (Value::Int(2), Value::Str("two".into())),
        ],
    );

    let out = render_value(&value);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "scenario::Lookup (2 Items)");
    assert_eq!(lines[1], rule_for(lines[0]));
    assert_eq!(lines[2], "Key0   = 1");
    assert_eq!(lines[3], "Value0 = \"one\"");
    assert_eq!(lines[4], "Key1   = 2");
    assert_eq!(lines[5], "Value1 = \"two\"");
    assert_eq!(lines[6], lines[1]);
}

fn nested_root() -> Value {
    let inner = Value::object(TypeName::new("scenario::Inner"))
        .member("Name", "x".to_value())
        .build();
    Value::object(TypeName::new("scenario::Root"))
        .member("Child", inner)
        .build()
}

#[test]
fn test_unlimited_depth_reaches_deepest_leaf() {
    let out = render_value(&nested_root());
    assert!(out.contains("Name = \"x\""));
}

#[test]
fn test_depth_one_hides_grandchildren() {
    let options = DumpOptions::new().with_max_depth(1);
    let out = render_value_with(&nested_root(), &options);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "scenario::Root (1 Property)");
    assert_eq!(lines[2], "Child = scenario::Inner (1 Property)");
    assert!(!out.contains("Name"));
    assert!(!out.contains("\"x\""));
}

#[test]
fn test_nested_block_aligns_under_parent_header() {
    let out = render_value(&nested_root());
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[2], "Child = scenario::Inner (1 Property)");
    // Inner block padded past "Child = " (8 chars).
    let inner_header = "scenario::Inner (1 Property)";
    assert_eq!(lines[3], format!("{}{}", " ".repeat(8), rule_for(inner_header)));
    assert_eq!(lines[4], format!("{}Name = \"x\"", " ".repeat(8)));
    assert_eq!(lines[5], lines[3]);
}

#[test]
fn test_sequence_of_objects_indents_continuation_lines() {
    let point = |x: i64, y: i64| {
        Value::object(TypeName::new("scenario::Point"))
            .member("x", Value::Int(x))
            .member("y", Value::Int(y))
            .build()
    };
    let value = Value::seq_named(TypeName::new("scenario::Points"), vec![point(1, 2)]);

    let options = DumpOptions::new().with_short_type_names(true);
    let out = render_value_with(&value, &options);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[2], "0: Point (2 Properties)");
    // Continuation lines sit past the "0: " prefix, then carry the
    // element's own depth indentation (depth 1, two spaces).
    assert_eq!(lines[3], format!("   {}{}", "  ", rule_for("Point (2 Properties)")));
    assert_eq!(lines[4], "     x = 1");
    assert_eq!(lines[5], "     y = 2");
}

#[test]
fn test_empty_sequence_plural_zero_items() {
    let value = Value::seq(vec![]);
    let options = DumpOptions::new().with_short_type_names(true);
    let out = render_value_with(&value, &options);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Vec<Value> (0 Items)");
    assert_eq!(lines[1], rule_for(lines[0]));
}

#[test]
fn test_singular_counts() {
    let map = Value::map_named(
        TypeName::new("scenario::One"),
        vec![(Value::Int(1), Value::Str("one".into()))],
    );
    assert!(render_value(&map).starts_with("scenario::One (1 Item)\n"));

    let object = Value::object(TypeName::new("scenario::Single"))
        .member("only", Value::Int(1))
        .build();
    assert!(render_value(&object).starts_with("scenario::Single (1 Property)\n"));
}

#[test]
fn test_null_member_renders_sentinel_inline() {
    let value = Value::object(TypeName::new("scenario::Holder"))
        .member("present", Value::Int(1))
        .member("missing", Value::Null)
        .build();
    let out = render_value(&value);
    assert!(out.contains("missing = <null>"));
}

#[test]
fn test_render_is_idempotent() {
    let node = classify(&nested_root(), "");
    let options = DumpOptions::new().with_short_type_names(true);
    assert_eq!(node.render(&options), node.render(&options));
}

#[test]
fn test_color_output_wraps_segments_without_changing_layout() {
    let value = nested_root();
    let plain = render_value_with(&value, &DumpOptions::new());
    let colored = render_value_with(&value, &DumpOptions::new().with_color(true));

    assert!(colored.contains("\u{1b}["));
    assert_eq!(plain.lines().count(), colored.lines().count());
    assert_eq!(strip_ansi(&colored), plain);
}

#[test]
fn test_deeply_nested_mixed_structure() {
    let leaf_object = Value::object(TypeName::new("scenario::Meta"))
        .member("note", "deep".to_value())
        .build();
    let inner_map = Value::map_named(
        TypeName::new("scenario::Attrs"),
        vec![(Value::Str("meta".into()), leaf_object)],
    );
    let value = Value::seq_named(TypeName::new("scenario::Bundle"), vec![inner_map]);

    let out = render_value_with(&value, &DumpOptions::new().with_short_type_names(true));
    assert!(out.contains("Bundle (1 Item)"));
    assert!(out.contains("0: Attrs (1 Item)"));
    assert!(out.contains("Key0   = \"meta\""));
    assert!(out.contains("note = \"deep\""));

    // Depth 2 keeps the map entries but hides the object's members.
    let shallow = render_value_with(
        &value,
        &DumpOptions::new().with_short_type_names(true).with_max_depth(2),
    );
    assert!(shallow.contains("Value0 = Meta (1 Property)"));
    assert!(!shallow.contains("note"));
}

#[test]
fn test_json_document_renders_as_mapping_tree() {
    let json = serde_json::json!({"name": "svc", "ports": [80, 443]});
    let value = json.to_value();

    let out = render_value_with(&value, &DumpOptions::new().with_short_type_names(true));
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "Map<String, Value> (2 Items)");
    assert!(out.contains("Key0   = \"name\""));
    assert!(out.contains("Value0 = \"svc\""));
    assert!(out.contains("Value1 = Vec<Value> (2 Items)"));
    assert!(out.contains("0: 80"));
    assert!(out.contains("1: 443"));
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
