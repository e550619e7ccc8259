//! Program model

use serde::{Deserialize, Serialize};

/// Represents a single degree offering at one university
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// Unique key within the owning university (e.g., "btech-cse")
    pub id: String,

    /// Display name (e.g., "B.Tech in Computer Science & Engineering")
    pub name: String,

    /// Raw degree label as authored in the catalog (e.g., "B.Tech", "b.e.")
    pub degree: String,

    /// Raw subject-area label as authored in the catalog
    pub field: String,

    /// Free-text specialization/branch name
    pub specialization: String,

    /// Program length in years
    pub duration: usize,

    /// Per-year base tuition amounts; length equals `duration`
    pub annual_fees: Vec<f64>,

    /// Marketing bullet strings shown in offers
    #[serde(default)]
    pub highlights: Vec<String>,

    /// Scholarship category tag (category-tiered universities only);
    /// assigned by the offline categorization pass, not computed at request time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scholarship_category: Option<String>,

    /// Whether a one-time industry fee applies in year 1 (course-based universities only)
    #[serde(default)]
    pub has_industry_fee: bool,

    /// Amount of the year-1 industry fee, when `has_industry_fee` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_fee_first_year: Option<f64>,
}

impl Program {
    /// Sum of the base annual tuition amounts
    #[must_use]
    pub fn tuition_total(&self) -> f64 {
        self.annual_fees.iter().sum()
    }

    /// First-year base tuition, or 0 for an empty fee schedule
    #[must_use]
    pub fn first_year_fee(&self) -> f64 {
        self.annual_fees.first().copied().unwrap_or(0.0)
    }
}
