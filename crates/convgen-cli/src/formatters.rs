//! Output formatters for CLI commands.
//!
//! Provides consistent formatting for JSON, text, and pretty output modes.

use anyhow::Result;
use colored::Colorize;
use convgen_core::cli::OutputFormat;
use serde::Serialize;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use convgen_cli::formatters::format_output;
/// use convgen_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Report {
///     files: usize,
/// }
///
/// let output = format_output(&Report { files: 4 }, OutputFormat::Json)?;
/// assert!(output.contains("\"files\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON.
    ///
    /// Uses pretty-printing with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let json = serde_json::to_string_pretty(data)?;
        Ok(json)
    }

    /// Format data as compact JSON (no formatting).
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        let json = serde_json::to_string(data)?;
        Ok(json)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Format data as plain text.
    ///
    /// Uses compact JSON representation without colors or fancy
    /// formatting. Suitable for piping to other commands or scripts.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};

    /// Format data as colorized, human-readable output.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        format_value(&value, 0)
    }

    /// Recursively format a JSON value with colors and indentation.
    fn format_value(value: &serde_json::Value, indent: usize) -> Result<String> {
        use serde_json::Value;

        let next_indent_str = "  ".repeat(indent + 1);

        match value {
            Value::Null => Ok("null".dimmed().to_string()),
            Value::Bool(b) => Ok(b.to_string().yellow().to_string()),
            Value::Number(n) => Ok(n.to_string().cyan().to_string()),
            Value::String(s) => Ok(format!("\"{}\"", s.green())),
            Value::Array(arr) => {
                if arr.is_empty() {
                    return Ok("[]".to_string());
                }

                let mut result = "[\n".to_string();
                for (i, item) in arr.iter().enumerate() {
                    result.push_str(&next_indent_str);
                    result.push_str(&format_value(item, indent + 1)?);
                    if i < arr.len() - 1 {
                        result.push(',');
                    }
                    result.push('\n');
                }
                result.push_str(&"  ".repeat(indent));
                result.push(']');
                Ok(result)
            }
            Value::Object(map) => {
                if map.is_empty() {
                    return Ok("{}".to_string());
                }

                let mut result = "{\n".to_string();
                for (i, (key, val)) in map.iter().enumerate() {
                    result.push_str(&next_indent_str);
                    result.push_str(&format!("{}: ", key.bold()));
                    result.push_str(&format_value(val, indent + 1)?);
                    if i < map.len() - 1 {
                        result.push(',');
                    }
                    result.push('\n');
                }
                result.push_str(&"  ".repeat(indent));
                result.push('}');
                Ok(result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        name: String,
        count: usize,
    }

    fn sample() -> Sample {
        Sample {
            name: "corpus".to_string(),
            count: 4,
        }
    }

    #[test]
    fn test_json_format() {
        let output = format_output(&sample(), OutputFormat::Json).unwrap();
        assert!(output.contains("\"name\": \"corpus\""));
        assert!(output.contains("\"count\": 4"));
    }

    #[test]
    fn test_text_format_is_compact() {
        let output = format_output(&sample(), OutputFormat::Text).unwrap();
        assert!(!output.contains('\n'));
        assert!(output.contains("\"count\":4"));
    }

    #[test]
    fn test_pretty_format_contains_fields() {
        let output = format_output(&sample(), OutputFormat::Pretty).unwrap();
        assert!(output.contains("corpus"));
        assert!(output.contains('4'));
    }
}
