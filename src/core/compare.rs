//! Comparison workspace
//!
//! The query surface the host UI (here: the CLI) drives. The workspace owns
//! the loaded catalogs plus the counselor's current filters and student
//! profile; everything derived from a selection is recomputed by pure
//! functions on demand and replaced wholesale, never updated incrementally.

use crate::core::fees::{self, FeeCalculation};
use crate::core::matcher::{find_best_match, MatchQuality};
use crate::core::models::{CatalogSet, Program, University};
use crate::core::normalize::{degree_level_of, standardize_field, DegreeLevel};
use crate::core::report::{self, OfferOptions};
use logger::debug;
use std::collections::BTreeMap;

/// Hierarchical program filters: degree level first, then field within it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Selected degree level, if any
    pub level: Option<DegreeLevel>,
    /// Selected umbrella field, if any
    pub field: Option<String>,
}

impl Filters {
    /// Number of active filters (drives the "N filters active" badge).
    #[must_use]
    pub const fn active_count(&self) -> usize {
        (self.level.is_some() as usize) + (self.field.is_some() as usize)
    }

    /// Reset both filters.
    pub fn clear(&mut self) {
        self.level = None;
        self.field = None;
    }

    /// Whether a program passes the current filters.
    #[must_use]
    pub fn accepts(&self, program: &Program) -> bool {
        if let Some(level) = self.level {
            if degree_level_of(&program.degree) != level {
                return false;
            }
        }
        if let Some(field) = &self.field {
            if !standardize_field(&program.field).eq_ignore_ascii_case(field) {
                return false;
            }
        }
        true
    }
}

/// Optional student details used for greeting and tier filtering only.
/// Setting a GPA never triggers recomputation of any monetary total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentProfile {
    /// Student name, used in the offer greeting
    pub name: Option<String>,
    /// Validated GPA on the 0..=5 scale
    pub gpa: Option<f64>,
}

/// Summary of one match attempt, owned by the comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    /// Quality tier of the pairing
    pub quality: MatchQuality,
    /// Specialization similarity score
    pub score: f64,
    /// Human-readable justification
    pub reason: String,
}

/// One university's column in a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry {
    /// University id
    pub university_id: String,
    /// Program id within that university
    pub program_id: String,
    /// Whether this is the counselor-selected source program
    pub is_source: bool,
    /// Match summary for fanned-out entries (absent on the source)
    pub matched: Option<MatchSummary>,
    /// Full fee calculation for this program
    pub fees: FeeCalculation,
}

/// A complete cross-university comparison for one selection.
/// Recomputed from scratch on every selection change.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// One entry per university with a qualifying program, source first
    pub entries: Vec<ComparisonEntry>,
    /// Best overall match summary across all fanned-out universities
    pub overall: MatchSummary,
}

impl Comparison {
    /// Entry for a given university, if present.
    #[must_use]
    pub fn entry(&self, university_id: &str) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| e.university_id == university_id)
    }

    /// The source entry (always present).
    ///
    /// # Panics
    /// Panics if the comparison was constructed without a source entry,
    /// which `Workspace::select_program` never does.
    #[must_use]
    pub fn source(&self) -> &ComparisonEntry {
        self.entries
            .iter()
            .find(|e| e.is_source)
            .expect("comparison always carries its source entry")
    }
}

/// The counselor's working state: catalogs, filters, and student profile.
#[derive(Debug, Clone)]
pub struct Workspace {
    catalog: CatalogSet,
    /// Active hierarchical filters
    pub filters: Filters,
    /// Active student profile
    pub student: StudentProfile,
}

impl Workspace {
    /// Create a workspace over a loaded catalog set.
    #[must_use]
    pub const fn new(catalog: CatalogSet) -> Self {
        Self {
            catalog,
            filters: Filters {
                level: None,
                field: None,
            },
            student: StudentProfile {
                name: None,
                gpa: None,
            },
        }
    }

    /// The loaded catalogs.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogSet {
        &self.catalog
    }

    /// Program counts per degree level across all universities (unfiltered).
    /// Levels appear in their fixed order; `Other` is appended only when
    /// populated.
    #[must_use]
    pub fn list_degree_levels(&self) -> Vec<(DegreeLevel, usize)> {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        let mut other = 0;

        for program in self.all_programs() {
            let level = degree_level_of(&program.degree);
            match DegreeLevel::SELECTABLE.iter().position(|l| *l == level) {
                Some(idx) => *counts.entry(idx).or_default() += 1,
                None => other += 1,
            }
        }

        let mut levels: Vec<(DegreeLevel, usize)> = DegreeLevel::SELECTABLE
            .iter()
            .enumerate()
            .map(|(idx, level)| (*level, counts.get(&idx).copied().unwrap_or(0)))
            .collect();
        if other > 0 {
            levels.push((DegreeLevel::Other, other));
        }
        levels
    }

    /// Program counts per umbrella field within a degree level, sorted by
    /// field name.
    #[must_use]
    pub fn list_fields(&self, level: DegreeLevel) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for program in self.all_programs() {
            if degree_level_of(&program.degree) == level {
                *counts
                    .entry(standardize_field(&program.field))
                    .or_default() += 1;
            }
        }
        counts.into_iter().collect()
    }

    /// One university's programs passing the current filters, catalog order.
    #[must_use]
    pub fn filter_programs<'a>(&self, university: &'a University) -> Vec<&'a Program> {
        university
            .programs
            .iter()
            .filter(|p| self.filters.accepts(p))
            .collect()
    }

    /// Total number of programs passing the current filters.
    #[must_use]
    pub fn filtered_program_count(&self) -> usize {
        self.catalog
            .universities()
            .iter()
            .map(|u| self.filter_programs(u).len())
            .sum()
    }

    /// Set the student GPA from raw input. Non-numeric or out-of-range input
    /// clears the GPA (treated as "not provided").
    pub fn set_student_gpa(&mut self, raw: &str) {
        self.student.gpa = fees::parse_gpa(raw);
    }

    /// Set or clear the student name.
    pub fn set_student_name(&mut self, name: &str) {
        let trimmed = name.trim();
        self.student.name = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    /// Reset the student profile for a new consultation.
    pub fn clear_student(&mut self) {
        self.student = StudentProfile::default();
    }

    /// Select a program and derive the full cross-university comparison.
    ///
    /// The matcher runs independently against every other university's
    /// filtered pool; fee calculations cover the source and every match.
    ///
    /// # Errors
    /// Returns an error when the university or program id is unknown.
    pub fn select_program(
        &self,
        university_id: &str,
        program_id: &str,
    ) -> Result<Comparison, String> {
        let source_university = self
            .catalog
            .university(university_id)
            .ok_or_else(|| format!("Unknown university: '{university_id}'"))?;
        let selected = source_university
            .program(program_id)
            .ok_or_else(|| format!("Unknown program '{program_id}' at {university_id}"))?;

        let mut entries = vec![ComparisonEntry {
            university_id: source_university.id.clone(),
            program_id: selected.id.clone(),
            is_source: true,
            matched: None,
            fees: fees::calculate(selected, source_university),
        }];

        let mut best: Option<MatchSummary> = None;
        for university in self.catalog.universities() {
            if university.id == source_university.id {
                continue;
            }

            let pool = self.filter_programs(university);
            let Some(outcome) = find_best_match(selected, &pool) else {
                debug!("No qualifying match at {} for {}", university.id, selected.id);
                continue;
            };

            let summary = MatchSummary {
                quality: outcome.quality,
                score: outcome.score,
                reason: outcome.reason.clone(),
            };

            // Best overall: perfect beats good beats the first anything-else.
            let replace = best
                .as_ref()
                .is_none_or(|current| summary.quality > current.quality);
            if replace {
                best = Some(summary.clone());
            }

            entries.push(ComparisonEntry {
                university_id: university.id.clone(),
                program_id: outcome.program.id.clone(),
                is_source: false,
                matched: Some(summary),
                fees: fees::calculate(outcome.program, university),
            });
        }

        let overall = best.unwrap_or_else(|| MatchSummary {
            quality: MatchQuality::NoMatch,
            score: 0.0,
            reason: format!(
                "No comparable programs found at other universities for {}",
                selected.name
            ),
        });

        Ok(Comparison { entries, overall })
    }

    /// Render the outreach message for one university's entry in a
    /// comparison.
    ///
    /// # Errors
    /// Returns an error when the university has no entry in the comparison
    /// or the override names an unknown tier.
    pub fn export_offer(
        &self,
        comparison: &Comparison,
        university_id: &str,
        tier_override: Option<&str>,
    ) -> Result<String, String> {
        let entry = comparison
            .entry(university_id)
            .ok_or_else(|| format!("No comparison entry for university '{university_id}'"))?;

        let (program, university) = self.resolve(entry)?;

        report::render_offer(
            program,
            university,
            &entry.fees,
            &OfferOptions {
                student: self.student.clone(),
                tier_override: tier_override.map(str::to_string),
            },
        )
    }

    /// Render the cross-university comparison summary message.
    ///
    /// # Errors
    /// Returns an error when an entry references a record missing from the
    /// catalog (possible only if the catalog changed under the comparison).
    pub fn export_comparison(&self, comparison: &Comparison) -> Result<String, String> {
        let mut resolved = Vec::with_capacity(comparison.entries.len());
        for entry in &comparison.entries {
            let (program, university) = self.resolve(entry)?;
            resolved.push((program, university, entry));
        }
        Ok(report::render_comparison(
            &resolved,
            &comparison.overall,
            &self.student,
        ))
    }

    /// Resolve an entry's ids back to catalog records.
    fn resolve<'a>(
        &'a self,
        entry: &ComparisonEntry,
    ) -> Result<(&'a Program, &'a University), String> {
        let university = self
            .catalog
            .university(&entry.university_id)
            .ok_or_else(|| format!("Unknown university: '{}'", entry.university_id))?;
        let program = university.program(&entry.program_id).ok_or_else(|| {
            format!(
                "Unknown program '{}' at {}",
                entry.program_id, entry.university_id
            )
        })?;
        Ok((program, university))
    }

    fn all_programs(&self) -> impl Iterator<Item = &Program> {
        self.catalog
            .universities()
            .iter()
            .flat_map(|u| u.programs.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CatalogSet;

    fn workspace() -> Workspace {
        Workspace::new(CatalogSet::builtin())
    }

    #[test]
    fn degree_levels_cover_builtin_catalogs() {
        let ws = workspace();
        let levels = ws.list_degree_levels();

        let bachelor = levels
            .iter()
            .find(|(level, _)| *level == DegreeLevel::Bachelor)
            .expect("bachelor level listed");
        assert!(bachelor.1 > 0);

        let total: usize = levels.iter().map(|(_, n)| n).sum();
        assert_eq!(total, ws.catalog().program_count());
    }

    #[test]
    fn fields_are_sorted_and_counted_within_level() {
        let ws = workspace();
        let fields = ws.list_fields(DegreeLevel::Bachelor);
        assert!(!fields.is_empty());

        let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(fields.iter().all(|(_, n)| *n > 0));
    }

    #[test]
    fn filters_restrict_programs() {
        let mut ws = workspace();
        let unfiltered = ws.filtered_program_count();

        ws.filters.level = Some(DegreeLevel::Bachelor);
        let by_level = ws.filtered_program_count();
        assert!(by_level < unfiltered);

        ws.filters.field = Some("Engineering".to_string());
        let by_both = ws.filtered_program_count();
        assert!(by_both <= by_level);
        assert_eq!(ws.filters.active_count(), 2);

        ws.filters.clear();
        assert_eq!(ws.filters.active_count(), 0);
        assert_eq!(ws.filtered_program_count(), unfiltered);
    }

    #[test]
    fn selection_fans_out_across_universities() {
        let ws = workspace();
        let comparison = ws
            .select_program("riverline", "btech-cse")
            .expect("selection succeeds");

        assert!(comparison.source().is_source);
        assert_eq!(comparison.source().university_id, "riverline");
        // The flagship engineering program exists at every partner
        assert!(comparison.entries.len() > 1);
        assert!(comparison.overall.quality > MatchQuality::NoMatch);

        for entry in &comparison.entries {
            if !entry.is_source {
                assert!(entry.matched.is_some());
                assert_ne!(entry.university_id, "riverline");
            }
        }
    }

    #[test]
    fn selection_of_unknown_ids_is_an_error() {
        let ws = workspace();
        assert!(ws.select_program("nowhere", "btech-cse").is_err());
        assert!(ws.select_program("riverline", "missing").is_err());
    }

    #[test]
    fn no_match_summary_names_the_selected_program() {
        let mut ws = workspace();
        // An impossible filter empties every candidate pool
        ws.filters.level = Some(DegreeLevel::Certificate);

        let comparison = ws
            .select_program("riverline", "btech-cse")
            .expect("selection still succeeds");
        assert_eq!(comparison.entries.len(), 1);
        assert_eq!(comparison.overall.quality, MatchQuality::NoMatch);
        assert!(comparison.overall.reason.contains("B.Tech"));
    }

    #[test]
    fn gpa_input_validation_matches_fee_rules() {
        let mut ws = workspace();
        ws.set_student_gpa("3.8");
        assert_eq!(ws.student.gpa, Some(3.8));
        ws.set_student_gpa("not a number");
        assert_eq!(ws.student.gpa, None);
        ws.set_student_gpa("9.9");
        assert_eq!(ws.student.gpa, None);
    }

    #[test]
    fn student_profile_resets_for_new_consultation() {
        let mut ws = workspace();
        ws.set_student_name("  Anika Rahman ");
        ws.set_student_gpa("4.2");
        assert_eq!(ws.student.name.as_deref(), Some("Anika Rahman"));

        ws.clear_student();
        assert_eq!(ws.student, StudentProfile::default());
    }

    #[test]
    fn selection_is_recomputable_and_stable() {
        let ws = workspace();
        let first = ws.select_program("riverline", "btech-cse").expect("first");
        let second = ws.select_program("riverline", "btech-cse").expect("second");
        assert_eq!(first, second);
    }
}
