//! Command handlers for the `UniCompare` CLI

pub mod catalog;
pub mod compare;
pub mod config;
pub mod offer;
pub mod programs;

use logger::info;
use uni_compare::config::Config;
use uni_compare::core::compare::{Filters, Workspace};
use uni_compare::core::fees::parse_gpa;
use uni_compare::core::models::CatalogSet;
use uni_compare::core::normalize::DegreeLevel;

/// Build a workspace from the configured catalogs: the configured catalog
/// directory when set, otherwise the catalogs compiled into the binary.
pub fn load_workspace(config: &Config) -> Result<Workspace, String> {
    let catalog = if config.paths.catalog_dir.is_empty() {
        info!("Using built-in university catalogs");
        CatalogSet::builtin()
    } else {
        CatalogSet::from_dir(&config.paths.catalog_dir)
            .map_err(|e| format!("✗ Failed to load catalogs: {e}"))?
    };
    Ok(Workspace::new(catalog))
}

/// Parse the optional level/field filter flags into workspace filters.
pub fn parse_filters(level: Option<&str>, field: Option<&str>) -> Result<Filters, String> {
    let level = level
        .map(str::parse::<DegreeLevel>)
        .transpose()
        .map_err(|e| format!("✗ {e}"))?;
    Ok(Filters {
        level,
        field: field.map(str::to_string),
    })
}

/// Apply optional student details to a workspace. Invalid GPA input is
/// reported once and then treated as "not provided".
pub fn apply_student(workspace: &mut Workspace, gpa: Option<&str>, name: Option<&str>) {
    if let Some(raw) = gpa {
        workspace.set_student_gpa(raw);
        if parse_gpa(raw).is_none() {
            eprintln!("✗ GPA '{raw}' is not a number between 0 and 5; showing all tiers.");
        }
    }
    if let Some(name) = name {
        workspace.set_student_name(name);
    }
}
