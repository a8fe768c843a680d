use std::env;
use std::fs;
use std::path::Path;

use kitbag_core::config::{resolve_config_path, AppConfig};
use toml::Value;

use crate::commands::CommandResult;

struct FieldSpec<'a> {
    key_path: &'static str,
    env_keys: &'static [&'static str],
    value: &'a str,
}

/// Prints each effective setting with where it came from
/// (override > env > file > default).
pub fn run(
    config: &AppConfig,
    explicit_path: Option<&Path>,
    overridden: &[&str],
) -> CommandResult {
    let config_file_path = resolve_config_path(explicit_path);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let log_format = format!("{:?}", config.logging.format).to_ascii_lowercase();

    let fields = [
        FieldSpec {
            key_path: "display.title",
            env_keys: &["KITBAG_DISPLAY_TITLE"],
            value: &config.display.title,
        },
        FieldSpec {
            key_path: "display.currency_symbol",
            env_keys: &["KITBAG_DISPLAY_CURRENCY_SYMBOL"],
            value: &config.display.currency_symbol,
        },
        FieldSpec {
            key_path: "display.asset_base",
            env_keys: &["KITBAG_DISPLAY_ASSET_BASE"],
            value: &config.display.asset_base,
        },
        FieldSpec {
            key_path: "logging.level",
            env_keys: &["KITBAG_LOGGING_LEVEL", "KITBAG_LOG_LEVEL"],
            value: &config.logging.level,
        },
        FieldSpec {
            key_path: "logging.format",
            env_keys: &["KITBAG_LOGGING_FORMAT", "KITBAG_LOG_FORMAT"],
            value: &log_format,
        },
    ];

    let mut lines =
        vec!["effective config (source precedence: override > env > file > default):".to_string()];
    for field in &fields {
        let source = if overridden.contains(&field.key_path) {
            "override".to_string()
        } else {
            field_source(
                field.key_path,
                field.env_keys,
                config_file_doc.as_ref(),
                config_file_path.as_deref(),
            )
        };
        lines.push(render_line(field.key_path, field.value, source));
    }

    CommandResult::rendered(lines.join("\n"))
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys
        .iter()
        .find(|key| env::var(key).is_ok_and(|value| !value.trim().is_empty()))
    {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
