use super::args::InputFormat;
use anyhow::{bail, Context, Result};
use dumptree_types::{ToValue, Value};
use std::io::Read;
use std::path::Path;

/// Loads a JSON or TOML document into the dynamic value model.
pub fn load(file: Option<&Path>, format: InputFormat) -> Result<Value> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    match resolve_format(file, format) {
        InputFormat::Json => parse_json(&text),
        InputFormat::Toml => parse_toml(&text),
        InputFormat::Auto => {
            // No extension to go by (stdin): try JSON first, then TOML.
            parse_json(&text).or_else(|json_err| {
                parse_toml(&text).map_err(|toml_err| {
                    anyhow::anyhow!(
                        "input is neither valid JSON ({}) nor valid TOML ({})",
                        json_err,
                        toml_err
                    )
                })
            })
        }
    }
}

fn resolve_format(file: Option<&Path>, format: InputFormat) -> InputFormat {
    if format != InputFormat::Auto {
        return format;
    }
    match file.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
        Some("toml") => InputFormat::Toml,
        Some("json") => InputFormat::Json,
        _ => InputFormat::Auto,
    }
}

fn parse_json(text: &str) -> Result<Value> {
    let parsed: serde_json::Value =
        serde_json::from_str(text).context("failed to parse JSON input")?;
    Ok(parsed.to_value())
}

fn parse_toml(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        bail!("empty TOML input");
    }
    let parsed: toml::Value = toml::from_str(text).context("failed to parse TOML input")?;
    Ok(parsed.to_value())
}
