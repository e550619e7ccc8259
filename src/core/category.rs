//! Scholarship category assignment
//!
//! Category-tiered universities group programs into a closed set of
//! scholarship categories. Assignment is an offline authoring pass over the
//! catalog — the fee calculator reads the stored `scholarshipCategory` field
//! and never recomputes it at request time. Rules are ordered; the first
//! match wins.

use crate::core::models::Program;
use crate::core::normalize::normalize_degree;

/// Professional, engineering, management, IT, and selected clinical-tech
/// programs.
pub const CATEGORY_PROFESSIONAL: &str = "category1";
/// Nursing programs.
pub const CATEGORY_NURSING: &str = "category2";
/// General sciences, arts, and research programs (the default).
pub const CATEGORY_GENERAL: &str = "category3";
/// Medical and pharmacy programs (no scholarship tiers).
pub const CATEGORY_MEDICAL: &str = "category4";

/// Canonical degree tags that always land in the professional category.
const PROFESSIONAL_DEGREES: &[&str] = &[
    "B.Tech",
    "B.Tech Lateral",
    "M.Tech",
    "BBA",
    "MBA",
    "BCA",
    "MCA",
    "B.Com",
    "B.Arch",
    "B.Des",
    "LLB",
    "BA LLB",
    "BBA LLB",
    "LLM",
    "BJMC",
];

/// B.Sc. specializations promoted into the professional category.
const PROFESSIONAL_BSC_SPECIALIZATIONS: &[&str] = &[
    "radiology",
    "medical lab technology",
    "optometry",
    "operation theatre",
];

/// Canonical degree tags in the medical/pharmacy category.
const MEDICAL_DEGREES: &[&str] = &["MBBS", "BDS", "B.Pharm", "D.Pharm", "M.Pharm", "BPT"];

/// Assign the scholarship category for one program.
///
/// Ordered rules over the canonical degree, field, and specialization:
/// professional degrees first, then nursing, then medical/pharmacy,
/// defaulting to the general category.
#[must_use]
pub fn assign(program: &Program) -> &'static str {
    let degree = normalize_degree(&program.degree);
    let tag = degree.label();
    let specialization = program.specialization.to_lowercase();
    let field = program.field.trim();

    if PROFESSIONAL_DEGREES.contains(&tag) {
        return CATEGORY_PROFESSIONAL;
    }

    if tag == "B.Sc"
        && PROFESSIONAL_BSC_SPECIALIZATIONS
            .iter()
            .any(|s| specialization.contains(s))
    {
        return CATEGORY_PROFESSIONAL;
    }

    if (tag == "B.Sc" || tag == "Diploma") && field.eq_ignore_ascii_case("Nursing") {
        return CATEGORY_NURSING;
    }

    if MEDICAL_DEGREES.contains(&tag) {
        return CATEGORY_MEDICAL;
    }

    if tag == "M.Sc" && field.eq_ignore_ascii_case("Nursing") {
        return CATEGORY_MEDICAL;
    }

    CATEGORY_GENERAL
}

/// Assign categories across a whole program slice, returning how many
/// records changed. Used by the catalog-authoring CLI command.
pub fn assign_all(programs: &mut [Program]) -> usize {
    let mut changed = 0;
    for program in programs {
        let category = assign(program);
        if program.scholarship_category.as_deref() != Some(category) {
            program.scholarship_category = Some(category.to_string());
            changed += 1;
        }
    }
    changed
}
