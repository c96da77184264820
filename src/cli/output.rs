//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TesseraArgs};
use crate::error::Result;

/// Result structure for payload-file ingestion.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordIngestResult {
    pub records_added: usize,
    pub records_failed: usize,
    pub duration_ms: u64,
}

/// Result structure for record deletion.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordDeletionResult {
    pub id: String,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TesseraArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TesseraArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("Listing") => output_listing_human(&value, args),
        _ if std::any::type_name::<T>().contains("StringRecord") => {
            output_record_human(&value, "");
            Ok(())
        }
        _ => output_generic_human(&value),
    }
}

/// Output a listing (filtered or interpreted) in human format.
fn output_listing_human(value: &serde_json::Value, _args: &TesseraArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(data) = obj.get("data").and_then(|d| d.as_array()) {
            println!("Matching Records:");
            println!("═════════════════");

            for (i, record) in data.iter().enumerate() {
                println!();
                println!("Record {}:", i + 1);
                println!("─────────");
                output_record_human(record, "");
            }

            println!();
        }

        if let Some(count) = obj.get("count").and_then(|c| c.as_u64()) {
            println!("Total records: {count}");
        }

        if let Some(filters) = obj.get("filters_applied").and_then(|f| f.as_object()) {
            println!();
            println!("Filters applied:");
            for (name, filter_value) in filters {
                let formatted = format_value(filter_value);
                println!("  {name}: {formatted}");
            }
        }

        if let Some(interpreted) = obj.get("interpreted_query").and_then(|q| q.as_object()) {
            println!();
            println!("Interpreted query:");
            if let Some(original) = interpreted.get("original").and_then(|o| o.as_str()) {
                println!("  Original: {original}");
            }
            if let Some(parsed) = interpreted.get("parsed_filters").and_then(|p| p.as_object()) {
                println!("  Parsed filters:");
                for (name, filter_value) in parsed {
                    let formatted = format_value(filter_value);
                    println!("    {name}: {formatted}");
                }
            }
        }
    }
    Ok(())
}

/// Output one record in human format, each line prefixed with `indent`.
fn output_record_human(value: &serde_json::Value, indent: &str) {
    if let Some(obj) = value.as_object() {
        if let Some(record_value) = obj.get("value").and_then(|v| v.as_str()) {
            println!("{indent}Value: {record_value:?}");
        }
        if let Some(id) = obj.get("id").and_then(|i| i.as_str()) {
            println!("{indent}Id: {id}");
        }
        if let Some(created) = obj.get("created_at").and_then(|c| c.as_str()) {
            println!("{indent}Created: {created}");
        }

        if let Some(properties) = obj.get("properties").and_then(|p| p.as_object()) {
            println!("{indent}Properties:");
            for (name, property_value) in properties {
                let formatted = format_value(property_value);
                println!("{indent}  {name}: {formatted}");
            }
        }
    }
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TesseraArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(obj) => {
            let formatted_entries = obj
                .iter()
                .map(|(key, val)| {
                    let formatted = format_value(val);
                    format!("{key}: {formatted}")
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{{formatted_entries}}}")
        }
        serde_json::Value::Null => "null".to_string(),
    }
}
