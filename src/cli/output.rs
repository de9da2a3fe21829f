//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::args::{OutputFormat, WeaverArgs};
use crate::error::Result;

/// Result of a wordlist generation run.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationReport {
    pub output_file: String,
    pub patterns: usize,
    pub words: usize,
    pub numbers: usize,
    pub specials: usize,
    pub conflict_rules: usize,
    pub generated: usize,
    pub written: usize,
    pub duration_ms: u64,
}

/// Result of clearing a configuration file.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetReport {
    pub config_file: String,
    pub fields_cleared: usize,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &WeaverArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &WeaverArgs) -> Result<()> {
    if args.verbosity() == 0 {
        return Ok(());
    }

    println!("{message}");
    println!();

    match serde_json::to_value(result)? {
        Value::Object(obj) => {
            for (key, val) in &obj {
                println!("{}: {}", key.replace('_', " "), format_value(val));
            }
        }
        value => println!("{}", format_value(&value)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WeaverArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        Value::Object(_) => "[object]".to_string(),
        Value::Null => "null".to_string(),
    }
}
