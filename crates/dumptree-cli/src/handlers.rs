use super::args::InputFormat;
use super::input;
use anyhow::Result;
use dumptree_engine::{render_labeled, render_value_with, DumpOptions};
use dumptree_types::{ToValue, TypeName, Value};
use std::path::Path;

pub fn dump(
    file: Option<&Path>,
    format: InputFormat,
    depth: usize,
    short_names: bool,
    label: Option<&str>,
    color: bool,
) -> Result<()> {
    let value = input::load(file, format)?;
    let options = options_for(depth, short_names, color);

    let rendered = match label {
        Some(label) => render_labeled(&value, label, &options),
        None => render_value_with(&value, &options),
    };

    println!("{}", rendered);
    Ok(())
}

pub fn demo(depth: usize, short_names: bool, color: bool) -> Result<()> {
    let options = options_for(depth, short_names, color);
    println!("{}", render_value_with(&sample_value(), &options));
    Ok(())
}

fn options_for(depth: usize, short_names: bool, color: bool) -> DumpOptions {
    DumpOptions::new()
        .with_max_depth(depth)
        .with_short_type_names(short_names)
        .with_color(color)
}

/// A value exercising every node kind: nested objects, a sequence, a
/// mapping, a null, a static member and a failed member read.
fn sample_value() -> Value {
    let address = Value::object(TypeName::new("demo::Address"))
        .member("street", "1 Harbor Way".to_value())
        .member("city", "Rotterdam".to_value())
        .build();

    let tags = vec!["vip".to_string(), "newsletter".to_string()].to_value();

    let limits = Value::map_named(
        TypeName::new("demo::Limits"),
        vec![
            (Value::Str("daily".into()), Value::Int(250)),
            (Value::Str("monthly".into()), Value::Int(4000)),
        ],
    );

    Value::object(TypeName::new("demo::Customer"))
        .member("name", "Ada Lovelace".to_value())
        .member("active", true.to_value())
        .member("balance", 245.43f64.to_value())
        .member("address", address)
        .member("tags", tags)
        .member("limits", limits)
        .member("nickname", Value::Null)
        .failed_member("password", "AccessError", "read denied")
        .static_member("SCHEMA_VERSION", 3i64.to_value())
        .build()
}
