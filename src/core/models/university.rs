//! University model and fee/scholarship rule-set configuration
//!
//! Each partner institution carries its own recurring-fee schedule and
//! scholarship rule-set. Both are tagged enums selected when the catalog is
//! deserialized, so fee calculation dispatches on the rule shape rather than
//! on the university identifier.

use super::Program;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Represents one partner university and its complete catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    /// Stable identifier (e.g., "riverline")
    pub id: String,

    /// Display name
    pub name: String,

    /// Campus location line used in offer messages
    #[serde(default)]
    pub location: String,

    /// Accreditation/recognition line used in offer messages
    #[serde(default)]
    pub recognition: String,

    /// One-time, recurring, and optional enhanced-package fee configuration
    pub additional_fees: AdditionalFees,

    /// Scholarship rule-set for international students
    pub scholarships: ScholarshipRules,

    /// Degree programs offered by this university
    pub programs: Vec<Program>,
}

impl University {
    /// Look up a program by its catalog id
    #[must_use]
    pub fn program(&self, program_id: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == program_id)
    }
}

/// Additional (non-tuition) fee configuration for one university
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalFees {
    /// One-time admission fee, charged in year 1
    pub one_time: OneTimeFee,

    /// University-specific recurring fee schedule
    #[serde(default)]
    pub recurring: RecurringFees,

    /// Optional enhanced partner package replacing the standard
    /// one-time + recurring schedule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced: Option<EnhancedFees>,
}

/// One-time admission fee and the services it covers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneTimeFee {
    /// Fee amount
    pub amount: f64,

    /// Services bundled into the fee, listed in offer messages
    #[serde(default)]
    pub includes: Vec<String>,
}

/// Recurring fee schedule, one shape per partner institution.
///
/// The schedules genuinely differ between partners and cannot be unified;
/// the tag in the catalog record selects the shape at load time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "camelCase")]
pub enum RecurringFees {
    /// No recurring fees beyond tuition
    #[default]
    None,

    /// Annual examination fee every year, registration and medical fees from
    /// year 2, and one alumni fee in the final year
    #[serde(rename_all = "camelCase")]
    AnnualCycle {
        /// Annual examination fee
        examination: f64,
        /// Annual registration fee, charged from year 2
        registration: f64,
        /// Annual medical fee, charged from year 2
        medical: f64,
        /// One-time alumni fee in the final year
        alumni: f64,
    },

    /// Examination plus health-insurance fee, both every year
    #[serde(rename_all = "camelCase")]
    ExamAndInsurance {
        /// Annual examination fee
        examination: f64,
        /// Annual health-insurance fee
        health_insurance: f64,
    },

    /// Examination fee every year; flagged programs add a one-time
    /// industry fee in year 1
    #[serde(rename_all = "camelCase")]
    ExamOnly {
        /// Annual examination fee
        examination: f64,
    },
}

/// Enhanced partner-package fee schedule: a comprehensive year-1 amount plus
/// a flat annual amount from year 2 onward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedFees {
    /// Comprehensive year-1 package amount (replaces one-time + recurring)
    pub package_amount: f64,

    /// Flat annual amount charged in years 2..=duration
    pub annual_amount: f64,

    /// Partner services bundled into the package, listed in offer messages
    #[serde(default)]
    pub services: Vec<String>,
}

/// Scholarship rule-set, one shape per partner institution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "camelCase")]
pub enum ScholarshipRules {
    /// Single flat percentage applied to every annual fee
    #[serde(rename_all = "camelCase")]
    Flat {
        /// Discount percentage (0..=100)
        percentage: f64,
    },

    /// Tier sets selected by the program's pre-assigned scholarship category
    #[serde(rename_all = "camelCase")]
    CategoryTiered {
        /// Category tag -> tier definitions
        categories: BTreeMap<String, ScholarshipCategory>,
    },

    /// One fixed tier list gated by GPA, independent of program category
    #[serde(rename_all = "camelCase")]
    GpaTiered {
        /// Tier definitions, best first
        tiers: Vec<ScholarshipTier>,
    },

    /// Flat percentage selected by degree type alone: one rate for the named
    /// canonical degree, the default rate for every other degree
    #[serde(rename_all = "camelCase")]
    DegreeFlat {
        /// Canonical degree tag receiving the special rate (e.g., "B.Tech")
        degree: String,
        /// Rate for the named degree
        percentage: f64,
        /// Rate for every other degree
        default_percentage: f64,
    },
}

/// One scholarship category at a category-tiered university.
///
/// A category with zero tiers means "no scholarship available" and is a
/// distinct calculation outcome, not an empty list to iterate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScholarshipCategory {
    /// Human-facing category name
    pub name: String,

    /// Short description of which programs the category covers
    #[serde(default)]
    pub description: String,

    /// Standard tier definitions, best first
    #[serde(default)]
    pub tiers: Vec<ScholarshipTier>,

    /// Enhanced tiers layered on the enhanced partner-package schedule
    #[serde(default)]
    pub enhanced_tiers: Vec<ScholarshipTier>,
}

/// One scholarship percentage option, gated by an inclusive GPA window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScholarshipTier {
    /// Tier name (e.g., "Merit Scholarship 50%")
    pub name: String,

    /// Discount percentage (0..=100)
    pub percentage: f64,

    /// Inclusive lower GPA bound
    pub gpa_min: f64,

    /// Inclusive upper GPA bound
    pub gpa_max: f64,

    /// Eligibility conditions shown alongside the tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
}
