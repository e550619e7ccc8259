//! Compare command handler

use super::{apply_student, load_workspace, parse_filters};
use logger::{error, info};
use std::path::Path;
use uni_compare::config::Config;
use uni_compare::core::compare::Comparison;
use uni_compare::core::compare::Workspace;
use uni_compare::core::fees::ScholarshipOutcome;
use uni_compare::core::report::format_inr;

/// Options collected from the compare subcommand flags.
pub struct CompareArgs<'a> {
    /// University id of the selected program
    pub university: &'a str,
    /// Program id within that university
    pub program: &'a str,
    /// Optional degree-level filter for candidate pools
    pub level: Option<&'a str>,
    /// Optional field filter for candidate pools
    pub field: Option<&'a str>,
    /// Optional raw student GPA
    pub gpa: Option<&'a str>,
    /// Optional student name
    pub student: Option<&'a str>,
    /// Optional path for the exported comparison message
    pub output: Option<&'a Path>,
}

/// Run the compare command.
pub fn run(args: &CompareArgs, config: &Config) {
    if let Err(e) = compare_single(args, config) {
        error!(
            "Compare failed for {}/{}: {e}",
            args.university, args.program
        );
        eprintln!("{e}");
    }
}

fn compare_single(args: &CompareArgs, config: &Config) -> Result<(), String> {
    let mut workspace = load_workspace(config)?;
    workspace.filters = parse_filters(args.level, args.field)?;
    apply_student(&mut workspace, args.gpa, args.student);

    let comparison = workspace
        .select_program(args.university, args.program)
        .map_err(|e| format!("✗ {e}"))?;

    print_summary(&workspace, &comparison);

    if let Some(output) = args.output {
        let message = workspace
            .export_comparison(&comparison)
            .map_err(|e| format!("✗ {e}"))?;
        std::fs::write(output, message)
            .map_err(|e| format!("✗ Failed to write {}: {e}", output.display()))?;
        println!("\n✓ Comparison message written to: {}", output.display());
        info!("Exported comparison to {}", output.display());
    }

    Ok(())
}

/// Print the on-screen comparison summary.
fn print_summary(workspace: &Workspace, comparison: &Comparison) {
    println!(
        "\n=== Program Match Quality: {} ===",
        comparison.overall.quality.label()
    );
    println!("{}\n", comparison.overall.reason);

    let gpa = workspace.student.gpa;
    for entry in &comparison.entries {
        let Some(university) = workspace.catalog().university(&entry.university_id) else {
            continue;
        };
        let Some(program) = university.program(&entry.program_id) else {
            continue;
        };

        let marker = if entry.is_source { " [selected]" } else { "" };
        println!("{}{marker}", university.name);
        println!("  {} ({} years)", program.name, program.duration);
        println!("  Original total: {}", format_inr(entry.fees.original_total));

        match &entry.fees.outcome {
            ScholarshipOutcome::NoScholarship { .. } => {
                println!("  Scholarship: none available");
            }
            ScholarshipOutcome::Flat(quote) => {
                println!(
                    "  Scholarship: {}% flat -> total {}",
                    quote.percentage,
                    format_inr(quote.total_fees)
                );
            }
            ScholarshipOutcome::Tiered { .. } => {
                let eligible = entry.fees.eligible_tiers(gpa);
                if eligible.is_empty() {
                    println!("  Scholarship: no tier matches the provided GPA");
                } else {
                    for quote in eligible {
                        println!(
                            "  Tier: {} ({}%) -> total {}",
                            quote.name,
                            quote.percentage,
                            format_inr(quote.total_fees)
                        );
                    }
                }
                for quote in entry.fees.eligible_enhanced(gpa) {
                    println!(
                        "  Partner package: {} ({}%) -> total {}",
                        quote.name,
                        quote.percentage,
                        format_inr(quote.total_fees)
                    );
                }
            }
        }

        if let Some(matched) = &entry.matched {
            println!("  Match: {} - {}", matched.quality.label(), matched.reason);
        }
        println!();
    }
}
