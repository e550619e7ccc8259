//! Offer command handler

use super::{apply_student, load_workspace};
use logger::{error, info};
use std::path::{Path, PathBuf};
use uni_compare::config::Config;

/// Options collected from the offer subcommand flags.
pub struct OfferArgs<'a> {
    /// University id of the program
    pub university: &'a str,
    /// Program id within that university
    pub program: &'a str,
    /// Optional raw student GPA
    pub gpa: Option<&'a str>,
    /// Optional student name
    pub student: Option<&'a str>,
    /// Optional tier override by name
    pub tier: Option<&'a str>,
    /// Optional output file; stdout when absent
    pub output: Option<&'a Path>,
}

/// Run the offer command.
pub fn run(args: &OfferArgs, config: &Config) {
    if let Err(e) = offer_single(args, config) {
        error!("Offer failed for {}/{}: {e}", args.university, args.program);
        eprintln!("{e}");
    }
}

fn offer_single(args: &OfferArgs, config: &Config) -> Result<(), String> {
    let mut workspace = load_workspace(config)?;
    apply_student(&mut workspace, args.gpa, args.student);

    let comparison = workspace
        .select_program(args.university, args.program)
        .map_err(|e| format!("✗ {e}"))?;

    let message = workspace
        .export_offer(&comparison, args.university, args.tier)
        .map_err(|e| format!("✗ {e}"))?;

    if let Some(output) = args.output {
        write_offer(&message, output)?;
    } else if config.paths.offers_dir.is_empty() {
        println!("{message}");
    } else {
        let offers_dir = PathBuf::from(&config.paths.offers_dir);
        std::fs::create_dir_all(&offers_dir).map_err(|e| {
            format!(
                "✗ Failed to create offers directory {}: {e}",
                offers_dir.display()
            )
        })?;
        let file = offers_dir.join(format!("{}_{}.txt", args.university, args.program));
        write_offer(&message, &file)?;
    }

    Ok(())
}

fn write_offer(message: &str, path: &Path) -> Result<(), String> {
    std::fs::write(path, message)
        .map_err(|e| format!("✗ Failed to write {}: {e}", path.display()))?;
    println!("✓ Offer written to: {}", path.display());
    info!("Exported offer to {}", path.display());
    Ok(())
}
