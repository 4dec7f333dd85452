//! TOML parser with helpful error messages

use super::schema::AdapterConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse the adapter config file with detailed error messages
pub fn parse_adapter_toml(path: &Path) -> Result<AdapterConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_adapter_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse adapter config content from string
pub fn parse_adapter_toml_str(content: &str) -> Result<AdapterConfig> {
    let config: AdapterConfig =
        toml::from_str(content).map_err(|e| enhance_toml_error(e, content))?;

    config.validate()?;

    Ok(config)
}

/// Load the config at `path`, or defaults when the file does not exist
pub fn load_or_default(path: &Path) -> Result<AdapterConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(AdapterConfig::default());
    }
    parse_adapter_toml(path)
}

/// Enhance TOML parsing errors with helpful context
///
/// Only the parser's message is kept: the rendered `toml` error quotes the
/// offending source line, which may hold a static password.
fn enhance_toml_error(error: toml::de::Error, content: &str) -> anyhow::Error {
    let position = error
        .span()
        .and_then(|span| content.get(..span.start))
        .map(|before| {
            let line = before.matches('\n').count() + 1;
            let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
            (line, column)
        });

    match position {
        Some((line_num, column)) => {
            let context = get_line_context(content, line_num);
            anyhow::anyhow!(
                "TOML parsing error at line {}, column {}:\n{}\n\nError: {}",
                line_num,
                column,
                context,
                error.message()
            )
        }
        None => anyhow::anyhow!("TOML parsing error: {}", error.message()),
    }
}

/// Get context lines around an error, with password values masked
fn get_line_context(content: &str, line_num: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let start = line_num.saturating_sub(2);
    let end = (line_num + 2).min(lines.len());

    lines[start.min(end)..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            let marker = if num == line_num { ">>>" } else { "   " };
            format!("{} {:4} | {}", marker, num, mask_password(line))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop everything after the first `=` on a line mentioning a password,
/// which also covers inline tables
fn mask_password(line: &str) -> String {
    match line.split_once('=') {
        Some((key, _)) if line.contains("password") => format!("{}= <redacted>", key),
        _ => line.to_string(),
    }
}

/// Serialize a configuration to TOML string
pub fn to_toml(config: &AdapterConfig) -> Result<String> {
    toml::to_string_pretty(config).with_context(|| "Failed to serialize configuration to TOML")
}
