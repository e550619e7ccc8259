//! Categorize command handler
//!
//! The offline catalog-authoring pass: reads a university catalog file,
//! assigns a scholarship category to every program, and writes the catalog
//! back. Runs whenever the catalog is authored or updated; the fee
//! calculator treats the stored categories as pre-existing data.

use logger::{error, info};
use std::fs;
use std::path::Path;
use uni_compare::core::category;
use uni_compare::core::models::University;

/// Run the categorize command.
pub fn run(input_file: &Path, output_file: Option<&Path>) {
    if let Err(e) = categorize_single(input_file, output_file) {
        error!("Categorize failed for {}: {e}", input_file.display());
        eprintln!("{e}");
    }
}

fn categorize_single(input_file: &Path, output_file: Option<&Path>) -> Result<(), String> {
    let content = fs::read_to_string(input_file)
        .map_err(|e| format!("✗ Failed to read {}: {e}", input_file.display()))?;

    let mut university: University = serde_json::from_str(&content)
        .map_err(|e| format!("✗ Failed to parse {}: {e}", input_file.display()))?;

    let changed = category::assign_all(&mut university.programs);

    let output_path = output_file.unwrap_or(input_file);
    let serialized = serde_json::to_string_pretty(&university)
        .map_err(|e| format!("✗ Failed to serialize catalog: {e}"))?;
    fs::write(output_path, serialized)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;

    println!(
        "✓ Categorized {} program(s) ({changed} updated): {}",
        university.programs.len(),
        output_path.display()
    );
    info!(
        "Categorized catalog {} -> {}",
        input_file.display(),
        output_path.display()
    );
    Ok(())
}
