//! Catalog loading
//!
//! One static record set per university. The built-in catalogs are compiled
//! into the binary; a configured catalog directory overrides them file by
//! file. Records are treated as pre-validated: the loader checks nothing
//! beyond JSON shape, but it does log catalog drift (unrecognized degree or
//! field labels) so authoring mistakes are visible.

use super::University;
use crate::core::normalize::{self, NormalizedDegree};
use logger::{debug, warn};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Built-in catalog records, one per partner university.
const BUILTIN_CATALOGS: [&str; 4] = [
    include_str!("../../assets/catalogs/riverline.json"),
    include_str!("../../assets/catalogs/meadowbrook.json"),
    include_str!("../../assets/catalogs/northgate.json"),
    include_str!("../../assets/catalogs/crestfield.json"),
];

/// The full set of loaded university catalogs
#[derive(Debug, Clone)]
pub struct CatalogSet {
    universities: Vec<University>,
}

impl CatalogSet {
    /// Load the catalogs compiled into the binary.
    ///
    /// # Panics
    /// Panics if an embedded catalog is invalid JSON. This cannot happen for
    /// a correctly built binary since the records are compiled in.
    #[must_use]
    pub fn builtin() -> Self {
        let universities = BUILTIN_CATALOGS
            .iter()
            .map(|raw| {
                serde_json::from_str(raw).expect("Failed to parse compiled-in catalog record")
            })
            .collect();

        let set = Self { universities };
        set.log_drift();
        set
    }

    /// Load every `*.json` catalog file from a directory.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read, a file cannot be
    /// read, or a record fails to parse.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, Box<dyn Error>> {
        let mut universities = Vec::new();

        let mut entries: Vec<_> = fs::read_dir(dir.as_ref())?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        entries.sort();

        for path in entries {
            let content = fs::read_to_string(&path)?;
            let university: University = serde_json::from_str(&content)
                .map_err(|e| format!("{}: {e}", path.display()))?;
            universities.push(university);
        }

        if universities.is_empty() {
            return Err(format!("No catalog files found in {}", dir.as_ref().display()).into());
        }

        let set = Self { universities };
        set.log_drift();
        Ok(set)
    }

    /// Build a catalog set from already-parsed university records (tests and
    /// embedding callers).
    #[must_use]
    pub fn from_universities(universities: Vec<University>) -> Self {
        Self { universities }
    }

    /// All loaded universities, in load order
    #[must_use]
    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    /// Look up a university by id
    #[must_use]
    pub fn university(&self, id: &str) -> Option<&University> {
        self.universities.iter().find(|u| u.id == id)
    }

    /// Total number of programs across all universities
    #[must_use]
    pub fn program_count(&self) -> usize {
        self.universities.iter().map(|u| u.programs.len()).sum()
    }

    /// Log unrecognized degree and field labels so catalog drift is visible.
    /// Drift is never an error; unrecognized labels still participate in
    /// matching as their own group.
    fn log_drift(&self) {
        for university in &self.universities {
            for program in &university.programs {
                if let NormalizedDegree::Unrecognized(raw) =
                    normalize::normalize_degree(&program.degree)
                {
                    warn!(
                        "Unrecognized degree label '{raw}' on {}/{}",
                        university.id, program.id
                    );
                }

                if !normalize::is_recognized_field(&program.field) {
                    debug!(
                        "Unmapped field label '{}' on {}/{}",
                        program.field, university.id, program.id
                    );
                }
            }
        }
    }
}
