//! Data models for `UniCompare`

pub mod catalog;
pub mod program;
pub mod university;

pub use catalog::CatalogSet;
pub use program::Program;
pub use university::{
    AdditionalFees, EnhancedFees, OneTimeFee, RecurringFees, ScholarshipCategory, ScholarshipRules,
    ScholarshipTier, University,
};
