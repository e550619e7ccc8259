//! Levels and programs listing command handlers

use super::{load_workspace, parse_filters};
use logger::error;
use uni_compare::config::Config;
use uni_compare::core::normalize::DegreeLevel;
use uni_compare::core::report::format_inr;

/// Run the levels command: degree levels with program counts, or the fields
/// available within one level.
pub fn run_levels(fields_of: Option<&str>, config: &Config) {
    let workspace = match load_workspace(config) {
        Ok(ws) => ws,
        Err(e) => {
            error!("Levels command failed: {e}");
            eprintln!("{e}");
            return;
        }
    };

    if let Some(raw) = fields_of {
        let level: DegreeLevel = match raw.parse() {
            Ok(level) => level,
            Err(e) => {
                eprintln!("✗ {e}");
                return;
            }
        };

        let fields = workspace.list_fields(level);
        if fields.is_empty() {
            println!("No programs at level: {level}");
            return;
        }

        println!("\n=== Fields in {level} ===\n");
        for (field, count) in fields {
            println!("{field} ({count} programs)");
        }
    } else {
        println!("\n=== Degree Levels ===\n");
        for (level, count) in workspace.list_degree_levels() {
            println!("{level} ({count} programs)");
        }
    }
}

/// Run the programs command: list programs passing the given filters.
pub fn run_programs(
    university: Option<&str>,
    level: Option<&str>,
    field: Option<&str>,
    config: &Config,
) {
    let mut workspace = match load_workspace(config) {
        Ok(ws) => ws,
        Err(e) => {
            error!("Programs command failed: {e}");
            eprintln!("{e}");
            return;
        }
    };

    workspace.filters = match parse_filters(level, field) {
        Ok(filters) => filters,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    if let Some(id) = university {
        if workspace.catalog().university(id).is_none() {
            eprintln!("✗ Unknown university: '{id}'");
            return;
        }
    }

    let mut shown = 0;
    for uni in workspace.catalog().universities() {
        if university.is_some_and(|id| id != uni.id) {
            continue;
        }

        let programs = workspace.filter_programs(uni);
        if programs.is_empty() {
            continue;
        }

        println!("\n=== {} ({}) ===\n", uni.name, uni.id);
        for program in programs {
            println!(
                "{}  {} • {} years • {} per year",
                program.id,
                program.name,
                program.duration,
                format_inr(program.first_year_fee())
            );
            shown += 1;
        }
    }

    if shown == 0 {
        println!("No programs match the current filters.");
    } else {
        println!("\n{shown} program(s) found");
    }
}
