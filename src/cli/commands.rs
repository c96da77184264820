//! Command implementations for the tessera CLI.

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::query::FilterSet;
use crate::record::StringRecord;
use crate::service::RecordService;
use crate::storage::traits::SnapshotConfig;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

/// Execute a CLI command.
pub fn execute_command(args: TesseraArgs) -> Result<()> {
    match &args.command {
        Command::Add(add_args) => add_record(add_args.clone(), &args),
        Command::Get(get_args) => get_record(get_args.clone(), &args),
        Command::Delete(delete_args) => delete_record(delete_args.clone(), &args),
        Command::List(list_args) => list_records(list_args.clone(), &args),
        Command::Query(query_args) => query_records(query_args.clone(), &args),
    }
}

/// Open (or initialize) the file-backed service at `path`.
fn open_service(path: &Path, cli_args: &TesseraArgs) -> Result<RecordService> {
    if cli_args.verbosity() > 1 {
        println!("Opening store at: {}", path.display());
    }
    RecordService::open_dir(path, SnapshotConfig::default())
}

/// Add one record, or ingest a payload file.
fn add_record(args: AddArgs, cli_args: &TesseraArgs) -> Result<()> {
    let service = open_service(&args.store_path, cli_args)?;

    if let Some(payload_file) = &args.file {
        return ingest_payloads(&service, payload_file, cli_args);
    }

    // The value positional is required when --file is absent.
    let value = args.value.unwrap_or_default();
    let record = service.create(&value)?;

    output_result("Record created", &record, cli_args)?;
    Ok(())
}

/// Ingest one JSON payload per line, reporting failures and continuing.
fn ingest_payloads(
    service: &RecordService,
    payload_file: &Path,
    cli_args: &TesseraArgs,
) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Ingesting payloads from: {}", payload_file.display());
    }

    let start_time = Instant::now();
    let mut records_added = 0;
    let mut records_failed = 0;

    let file = File::open(payload_file)?;
    let reader = BufReader::new(file);

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = serde_json::from_str::<Value>(&line)
            .map_err(Into::into)
            .and_then(|payload| service.create_from_payload(&payload));

        match outcome {
            Ok(_) => records_added += 1,
            Err(e) => {
                records_failed += 1;
                if cli_args.verbosity() > 0 {
                    eprintln!("Error on line {}: {}", line_num + 1, e);
                }
            }
        }
    }

    let duration = start_time.elapsed();

    output_result(
        "Payloads ingested",
        &RecordIngestResult {
            records_added,
            records_failed,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

/// Fetch a record by its value.
fn get_record(args: GetArgs, cli_args: &TesseraArgs) -> Result<()> {
    let service = open_service(&args.store_path, cli_args)?;
    let record = service.get_by_value(&args.value)?;

    output_result("Record found", &record, cli_args)?;
    Ok(())
}

/// Delete a record by its value.
fn delete_record(args: DeleteArgs, cli_args: &TesseraArgs) -> Result<()> {
    let service = open_service(&args.store_path, cli_args)?;
    service.delete_by_value(&args.value)?;

    output_result(
        "Record deleted",
        &RecordDeletionResult {
            id: StringRecord::id_for(&args.value),
        },
        cli_args,
    )?;
    Ok(())
}

/// List records under the structured filters built from the flags.
fn list_records(args: ListArgs, cli_args: &TesseraArgs) -> Result<()> {
    let service = open_service(&args.store_path, cli_args)?;

    let filters = FilterSet {
        is_palindrome: args.palindrome,
        min_length: args.min_length,
        max_length: args.max_length,
        word_count: args.word_count,
        contains_character: args.contains,
    };
    let listing = service.list_filtered(&filters)?;

    output_result("Records listed", &listing, cli_args)?;
    Ok(())
}

/// Interpret a natural-language query and list the matches.
fn query_records(args: QueryArgs, cli_args: &TesseraArgs) -> Result<()> {
    let service = open_service(&args.store_path, cli_args)?;

    if cli_args.verbosity() > 1 {
        println!("Query: {}", args.query);
    }

    let listing = service.query_natural_language(&args.query)?;

    output_result("Query interpreted", &listing, cli_args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> TesseraArgs {
        TesseraArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_add_then_get_through_the_cli() {
        let temp_dir = TempDir::new().unwrap();
        let store = temp_dir.path().to_str().unwrap();

        execute_command(parse(&["tessera", "-q", "add", store, "hello world"])).unwrap();
        execute_command(parse(&["tessera", "-q", "get", store, "hello world"])).unwrap();
    }

    #[test]
    fn test_get_missing_record_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = temp_dir.path().to_str().unwrap();

        let result = execute_command(parse(&["tessera", "-q", "get", store, "absent"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_ingest_continues_past_bad_lines() {
        let temp_dir = TempDir::new().unwrap();
        let store_dir = temp_dir.path().join("store");
        let store = store_dir.to_str().unwrap().to_string();

        let payload_path = temp_dir.path().join("payloads.jsonl");
        let mut payload_file = File::create(&payload_path).unwrap();
        writeln!(payload_file, r#"{{"value": "first"}}"#).unwrap();
        writeln!(payload_file, "not json at all").unwrap();
        writeln!(payload_file, r#"{{"wrong_key": "second"}}"#).unwrap();
        writeln!(payload_file, r#"{{"value": "third"}}"#).unwrap();

        execute_command(parse(&[
            "tessera",
            "-q",
            "add",
            &store,
            "--file",
            payload_path.to_str().unwrap(),
        ]))
        .unwrap();

        // The two well-formed payloads landed despite the failures between.
        execute_command(parse(&["tessera", "-q", "get", &store, "first"])).unwrap();
        execute_command(parse(&["tessera", "-q", "get", &store, "third"])).unwrap();
        assert!(execute_command(parse(&["tessera", "-q", "get", &store, "second"])).is_err());
    }

    #[test]
    fn test_delete_through_the_cli() {
        let temp_dir = TempDir::new().unwrap();
        let store = temp_dir.path().to_str().unwrap();

        execute_command(parse(&["tessera", "-q", "add", store, "transient"])).unwrap();
        execute_command(parse(&["tessera", "-q", "delete", store, "transient"])).unwrap();
        assert!(execute_command(parse(&["tessera", "-q", "get", store, "transient"])).is_err());
    }

    #[test]
    fn test_unparseable_query_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = temp_dir.path().to_str().unwrap();

        let result = execute_command(parse(&["tessera", "-q", "query", store, "banana bread"]));
        assert!(result.is_err());
    }
}
