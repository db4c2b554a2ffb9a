//! Output formatting for CLI commands.

use std::fmt::Write;

use serde_json::Value;

use crate::cli::args::{OutputFormat, QueryDslArgs};
use crate::error::Result;
use crate::query::Query;

/// Print a built query in the format selected on the command line.
pub fn output_result(query: &dyn Query, args: &QueryDslArgs) -> Result<()> {
    let rendered = render_value(&query.to_json(), args)?;
    println!("{rendered}");
    Ok(())
}

/// Render a JSON value in the selected output format.
pub fn render_value(value: &Value, args: &QueryDslArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Json => render_json(value, args.pretty),
        OutputFormat::Yaml => Ok(render_yaml(value)),
    }
}

fn render_json(value: &Value, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Render a JSON value as block-style YAML.
pub fn render_yaml(value: &Value) -> String {
    let mut out = String::new();
    write_yaml_value(&mut out, value, 0);
    out.truncate(out.trim_end().len());
    out
}

fn write_yaml_value(out: &mut String, value: &Value, indent: usize) {
    let spaces = "  ".repeat(indent);

    match value {
        Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    Value::Object(inner) if !inner.is_empty() => {
                        let _ = writeln!(out, "{spaces}{}:", format_yaml_string(key));
                        write_yaml_value(out, val, indent + 1);
                    }
                    Value::Array(items) if !items.is_empty() => {
                        let _ = writeln!(out, "{spaces}{}:", format_yaml_string(key));
                        write_yaml_value(out, val, indent + 1);
                    }
                    _ => {
                        let _ = writeln!(
                            out,
                            "{spaces}{}: {}",
                            format_yaml_string(key),
                            format_yaml_scalar(val)
                        );
                    }
                }
            }
        }
        Value::Array(arr) => {
            for item in arr {
                match item {
                    Value::Object(inner) if !inner.is_empty() => {
                        let _ = writeln!(out, "{spaces}-");
                        write_yaml_value(out, item, indent + 1);
                    }
                    Value::Array(items) if !items.is_empty() => {
                        let _ = writeln!(out, "{spaces}-");
                        write_yaml_value(out, item, indent + 1);
                    }
                    _ => {
                        let _ = writeln!(out, "{spaces}- {}", format_yaml_scalar(item));
                    }
                }
            }
        }
        _ => {
            let _ = writeln!(out, "{spaces}{}", format_yaml_scalar(value));
        }
    }
}

/// Format a scalar (or empty container) for YAML output.
fn format_yaml_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => format_yaml_string(s),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) => "[]".to_string(),
        Value::Object(_) => "{}".to_string(),
    }
}

/// Emit `s` as a plain scalar when YAML reads it back as the same string,
/// double-quoted otherwise.
fn format_yaml_string(s: &str) -> String {
    if needs_yaml_quotes(s) {
        // JSON string syntax is valid YAML double-quoted syntax.
        Value::from(s).to_string()
    } else {
        s.to_string()
    }
}

fn needs_yaml_quotes(s: &str) -> bool {
    const INDICATORS: &str = "-?:,[]{}#&*!|>'\"%@`";
    const RESERVED: [&str; 11] = [
        "true", "false", "null", "~", "yes", "no", "on", "off", "y", "n", ".nan",
    ];

    let Some(first) = s.chars().next() else {
        return true;
    };

    INDICATORS.contains(first)
        || s.contains(['\n', '\t', '"', '\\', '^', '*'])
        || s.contains(": ")
        || s.contains(" #")
        || s.ends_with(':')
        || s.starts_with(' ')
        || s.ends_with(' ')
        || RESERVED.iter().any(|word| s.eq_ignore_ascii_case(word))
        || looks_numeric(s)
}

/// Strings a YAML reader could load as a number: decimal, hex, octal or
/// infinities.
fn looks_numeric(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let lower = unsigned.to_ascii_lowercase();
    s.parse::<f64>().is_ok()
        || lower.starts_with("0x")
        || lower.starts_with("0o")
        || lower == ".inf"
        || lower == "inf"
        || lower == "nan"
}
