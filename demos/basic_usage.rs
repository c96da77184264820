//! Basic usage example for the tessera string analysis library.

use tempfile::TempDir;
use tessera::prelude::*;

fn main() -> Result<()> {
    println!("=== Tessera String Analysis Demo ===\n");

    // Create a temporary directory for the store
    let temp_dir = TempDir::new().unwrap();
    println!("Creating store in: {:?}", temp_dir.path());

    let service = RecordService::open_dir(temp_dir.path(), SnapshotConfig::default())?;
    println!("Record service opened successfully\n");

    // Add some strings
    let values = [
        "level",
        "racecar",
        "  A man a plan  ",
        "hello world",
        "an unremarkable sentence",
    ];

    println!("Adding {} strings to the store...", values.len());
    for value in values {
        let record = service.create(value)?;
        println!(
            "  {:?} -> {}... (length {}, {} words, palindrome: {})",
            record.value,
            &record.id[..12],
            record.properties.length,
            record.properties.word_count,
            record.properties.is_palindrome
        );
    }

    println!("\n=== Lookup Examples ===\n");

    // Example 1: Lookup by value
    println!("1. Lookup by value (racecar):");
    let record = service.get_by_value("racecar")?;
    println!("   Id: {}", record.id);
    println!("   Unique characters: {}", record.properties.unique_characters);

    // Example 2: Padded spellings address the same record
    println!("\n2. Padded lookup (identity is the trimmed digest):");
    let record = service.get_by_value("A man a plan")?;
    println!("   Stored value: {:?}", record.value);

    println!("\n=== Query Examples ===\n");

    // Example 3: Structured filters
    println!("3. Structured listing (palindromes, single word):");
    let filters = FilterSet::new().with_is_palindrome(true).with_word_count(1);
    let listing = service.list_filtered(&filters)?;
    println!("   Found {} records", listing.count);
    for (i, record) in listing.data.iter().enumerate() {
        println!("   {}. {:?}", i + 1, record.value);
    }

    // Example 4: Natural-language query
    println!("\n4. Natural-language query (strings longer than 10 characters):");
    let listing = service.query_natural_language("strings longer than 10 characters")?;
    println!(
        "   Parsed filters: {}",
        serde_json::to_string(&listing.interpreted_query.parsed_filters)?
    );
    println!("   Found {} records", listing.count);
    for (i, record) in listing.data.iter().enumerate() {
        println!("   {}. {:?}", i + 1, record.value);
    }

    // Example 5: Unrecognized queries are rejected
    println!("\n5. Unrecognized query:");
    match service.query_natural_language("banana bread") {
        Err(e) => println!("   Rejected as expected: {e}"),
        Ok(_) => println!("   Unexpectedly parsed"),
    }

    // Example 6: Delete a record
    println!("\n6. Delete by value (hello world):");
    service.delete_by_value("hello world")?;
    println!("   Remaining records: {}", service.store().len()?);

    println!("\n=== Library Information ===");
    println!("Tessera version: {}", tessera::VERSION);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_usage_example() {
        // Test that the example runs without panicking
        let result = main();
        assert!(result.is_ok());
    }
}
