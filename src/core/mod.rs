//! Core module: the program-matching and fee-calculation engine

pub mod category;
pub mod compare;
pub mod config;
pub mod fees;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod report;
pub mod similarity;

/// Returns the current version of the `UniCompare` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
