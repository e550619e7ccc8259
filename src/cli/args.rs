//! CLI argument definitions for `UniCompare`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use logger::Level;
use uni_compare::config::ConfigOverrides;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime
/// use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List degree levels with program counts, or fields within a level.
    Levels {
        /// Show fields of study available within this degree level
        #[arg(long, value_name = "LEVEL")]
        fields: Option<String>,
    },
    /// List programs, optionally filtered by university, level, and field.
    Programs {
        /// Restrict to one university id
        #[arg(short, long, value_name = "ID")]
        university: Option<String>,

        /// Filter by degree level (e.g., bachelor, masters)
        #[arg(short, long, value_name = "LEVEL")]
        level: Option<String>,

        /// Filter by field of study (umbrella category)
        #[arg(short, long, value_name = "FIELD")]
        field: Option<String>,
    },
    /// Select a program and compare it against every other university.
    Compare {
        /// University id of the selected program
        #[arg(value_name = "UNIVERSITY")]
        university: String,

        /// Program id within that university
        #[arg(value_name = "PROGRAM")]
        program: String,

        /// Filter candidate pools by degree level
        #[arg(short, long, value_name = "LEVEL")]
        level: Option<String>,

        /// Filter candidate pools by field of study
        #[arg(short, long, value_name = "FIELD")]
        field: Option<String>,

        /// Student GPA for scholarship eligibility display
        #[arg(short, long, value_name = "GPA")]
        gpa: Option<String>,

        /// Student name for the exported message greeting
        #[arg(short, long, value_name = "NAME")]
        student: Option<String>,

        /// Write the shareable comparison message to a file
        /// (defaults to stdout summary only)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Generate the outreach offer message for one program.
    Offer {
        /// University id of the program
        #[arg(value_name = "UNIVERSITY")]
        university: String,

        /// Program id within that university
        #[arg(value_name = "PROGRAM")]
        program: String,

        /// Student GPA for scholarship eligibility display
        #[arg(short, long, value_name = "GPA")]
        gpa: Option<String>,

        /// Student name for the message greeting
        #[arg(short, long, value_name = "NAME")]
        student: Option<String>,

        /// Force a specific scholarship tier by name
        #[arg(short, long, value_name = "TIER")]
        tier: Option<String>,

        /// Write the message to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Assign scholarship categories in a catalog file (authoring pass).
    ///
    /// Rewrites the catalog with a `scholarshipCategory` on every program.
    Categorize {
        /// Path to a university catalog JSON file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Output file path (defaults to rewriting the input in place)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "unicompare",
    about = "UniCompare command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog directory
    #[arg(long = "config-catalog-dir", value_name = "DIR")]
    pub config_catalog_dir: Option<PathBuf>,

    /// Override config catalog directory (short form)
    #[arg(long = "catalog-dir", value_name = "DIR")]
    pub catalog_dir: Option<PathBuf>,

    /// Override config offers output directory
    #[arg(long = "config-offers-dir", value_name = "DIR")]
    pub config_offers_dir: Option<PathBuf>,

    /// Override config offers output directory (short form)
    #[arg(long = "offers-dir", value_name = "DIR")]
    pub offers_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--catalog-dir`) take precedence over
    /// long-form flags (e.g., `--config-catalog-dir`) when both are
    /// provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            catalog_dir: self
                .catalog_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_catalog_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            offers_dir: self
                .offers_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_offers_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
